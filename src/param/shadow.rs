use super::{
    list::ParamList,
    registry::{Param, ParamRegistry},
    value::ParamValue,
};

/// Last-transmitted value of every parameter in one tracker's registry,
/// used as the diff baseline. Starts at the registry's declared defaults.
///
/// Diffing never mutates the shadow; changed values are staged into a
/// [`ParamList`] and committed with [`ParamShadow::apply`] only after the
/// message has been handed to the context. A tick that aborts partway
/// leaves the shadow at the last known-good state, so the next tick retries
/// the full diff.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamShadow {
    values: Vec<ParamValue>,
}

impl ParamShadow {
    pub fn new(registry: &ParamRegistry) -> Self {
        Self {
            values: registry
                .iter()
                .map(|descriptor| descriptor.default().clone())
                .collect(),
        }
    }

    pub fn get(&self, param: Param) -> Option<&ParamValue> {
        self.values.get(usize::from(param.index()))
    }

    /// Stages `value` into `list` iff it differs from the last-sent value.
    /// Returns whether the value was staged.
    pub fn set_if_changed(&self, list: &mut ParamList, param: Param, value: ParamValue) -> bool {
        if self.get(param) == Some(&value) {
            return false;
        }
        list.set(param, value);
        true
    }

    /// Commits an emitted list as the new baseline.
    pub fn apply(&mut self, list: &ParamList) {
        for (index, _, value) in list.iter() {
            if let Some(slot) = self.values.get_mut(usize::from(index)) {
                *slot = value.clone();
            }
        }
    }
}
