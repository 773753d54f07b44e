use crate::{
    context::EntityDataSource,
    id_allocator::EntityId,
    message::EntityMessage,
    param::{Param, ParamKind, ParamList, ParamRegistry, ParamShadow, ParamValue},
    tracker::{event::EntityEvent, layer::CapabilityLayer},
};

use super::mob::MobLayer;

/// Body segments beyond the root, each with its own wire id.
pub const SERPENT_PART_COUNT: usize = 3;

/// Composite boss: one logical entity rendered as a head plus
/// [`SERPENT_PART_COUNT`] independently addressable body segments.
#[derive(Debug, Clone)]
pub struct SerpentLayer {
    mob: MobLayer,
    attack_phase: Param,
}

impl SerpentLayer {
    pub fn extend(mob: MobLayer, registry: &mut ParamRegistry) -> Self {
        Self {
            mob,
            attack_phase: registry.register(ParamKind::VarInt, ParamValue::VarInt(0)),
        }
    }
}

impl CapabilityLayer for SerpentLayer {
    fn spawn_params(&mut self, source: &dyn EntityDataSource, list: &mut ParamList) {
        self.mob.spawn_params(source, list);
        list.set(self.attack_phase, ParamValue::VarInt(source.attack_phase()));
    }

    fn update_params(
        &mut self,
        source: &dyn EntityDataSource,
        shadow: &ParamShadow,
        list: &mut ParamList,
    ) {
        self.mob.update_params(source, shadow, list);
        shadow.set_if_changed(
            list,
            self.attack_phase,
            ParamValue::VarInt(source.attack_phase()),
        );
    }

    fn handle_event(&mut self, id: EntityId, event: EntityEvent) -> Option<EntityMessage> {
        self.mob.handle_event(id, event)
    }

    fn tracks_equipment(&self) -> bool {
        self.mob.tracks_equipment()
    }

    fn clone_boxed(&self) -> Box<dyn CapabilityLayer> {
        Box::new(self.clone())
    }
}
