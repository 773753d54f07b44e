//! Typed, append-only parameter schema plus the per-tick diff containers
//! built against it.

pub mod error;
pub mod list;
pub mod registry;
pub mod shadow;
pub mod value;

pub use error::ParamError;
pub use list::ParamList;
pub use registry::{Param, ParamDescriptor, ParamRegistry, MAX_PARAMS};
pub use shadow::ParamShadow;
pub use value::{ParamKind, ParamValue};
