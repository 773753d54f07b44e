use thiserror::Error;

use crate::types::EntityHandle;

use super::entity_tracker::TrackerPhase;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// A lifecycle method was invoked out of order (e.g. `update` before
    /// `init`, or anything after `remove`). The caller drives the state
    /// machine; this is a programming defect on its side, isolated to the
    /// offending entity.
    #[error("tracker for entity {handle:?} is {phase:?}, expected {expected:?}")]
    WrongPhase {
        handle: EntityHandle,
        phase: TrackerPhase,
        expected: TrackerPhase,
    },

    /// Composite species acquire their whole id block themselves; attaching
    /// one to a caller-supplied root id would break the batch's exclusive
    /// ownership.
    #[error("composite species `{species}` cannot take a caller-supplied root id")]
    CompositeWithSuppliedId { species: &'static str },
}
