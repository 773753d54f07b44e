use thiserror::Error;

use super::value::ParamKind;

/// Errors raised while building a parameter registry. These are
/// configuration defects: they surface at startup and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// The wire format addresses ordinals with a single byte; a registry
    /// that outgrows that space cannot be encoded.
    #[error("parameter registry is full ({max} ordinals)")]
    RegistryFull { max: usize },

    /// The declared default must round-trip through the declared kind.
    #[error("default value of kind {default:?} does not match declared kind {declared:?}")]
    DefaultKindMismatch {
        declared: ParamKind,
        default: ParamKind,
    },
}
