use crate::{
    context::EntityDataSource,
    id_allocator::EntityId,
    message::EntityMessage,
    param::{ParamList, ParamShadow},
};

use super::event::EntityEvent;

/// One link in a species' capability chain.
///
/// Layers compose by value: each layer struct embeds its parent layer and
/// delegates to it explicitly. Parameter hooks delegate parent-first so a
/// species' attribute prefix always matches its base registry; event
/// handling dispatches self-first and falls through to the parent, ending in
/// a no-op at the chain root.
///
/// Layers own disjoint ordinals by construction (each registers only its own
/// attributes, after its parent), so no hook can silently overwrite another
/// layer's entry in the shared [`ParamList`].
pub trait CapabilityLayer: Send + Sync {
    /// Contributes this chain's full current state to a spawn-time list.
    fn spawn_params(&mut self, source: &dyn EntityDataSource, list: &mut ParamList);

    /// Contributes only attributes that differ from the shadow. Must be pure
    /// computation over `source`; the shadow is committed by the tracker
    /// after the resulting message is emitted.
    fn update_params(
        &mut self,
        source: &dyn EntityDataSource,
        shadow: &ParamShadow,
        list: &mut ParamList,
    );

    /// Maps a transient event to a one-shot message, or delegates up the
    /// chain. No shadow-state effect.
    fn handle_event(&mut self, id: EntityId, event: EntityEvent) -> Option<EntityMessage>;

    /// Whether this chain carries wire-visible equipment slots.
    fn tracks_equipment(&self) -> bool {
        false
    }

    fn clone_boxed(&self) -> Box<dyn CapabilityLayer>;
}
