//! Per-entity protocol objects: the stateful diffing engines that decide,
//! tick by tick, what each entity must push to its observers.

pub mod entity_tracker;
pub mod error;
pub mod event;
pub mod layer;
pub mod layers;

pub use entity_tracker::{EntityTracker, TrackerPhase};
pub use error::TrackerError;
pub use event::EntityEvent;
pub use layer::CapabilityLayer;
