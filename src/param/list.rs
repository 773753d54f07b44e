use indexmap::IndexMap;

use super::{
    registry::{Param, ParamRegistry},
    value::{ParamKind, ParamValue},
};

/// Sparse collection of (ordinal, value) pairs making up one metadata
/// message. Built once, iterated once by the codec, then discarded.
///
/// Insertion order is preserved for serialization; the last write for a
/// given ordinal wins, so a list never emits duplicate ordinals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamList {
    entries: IndexMap<u8, (ParamKind, ParamValue)>,
}

impl ParamList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, param: Param, value: ParamValue) {
        self.entries.insert(param.index(), (param.kind(), value));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, index: u8) -> bool {
        self.entries.contains_key(&index)
    }

    pub fn get(&self, index: u8) -> Option<&ParamValue> {
        self.entries.get(&index).map(|(_, value)| value)
    }

    /// Insertion-order iteration for the codec.
    pub fn iter(&self) -> impl Iterator<Item = (u8, ParamKind, &ParamValue)> {
        self.entries
            .iter()
            .map(|(index, (kind, value))| (*index, *kind, value))
    }

    /// Completes a spawn-time list: every ordinal the registry declares that
    /// no layer wrote gets its declared default.
    pub fn fill_defaults(&mut self, registry: &ParamRegistry) {
        for descriptor in registry.iter() {
            if !self.entries.contains_key(&descriptor.index()) {
                self.entries.insert(
                    descriptor.index(),
                    (descriptor.kind(), descriptor.default().clone()),
                );
            }
        }
    }
}
