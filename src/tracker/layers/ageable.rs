use crate::{
    context::EntityDataSource,
    id_allocator::EntityId,
    message::{EntityMessage, EntityStatus},
    param::{Param, ParamKind, ParamList, ParamRegistry, ParamShadow, ParamValue},
    tracker::{event::EntityEvent, layer::CapabilityLayer},
};

use super::mob::MobLayer;

/// Mobs with an adult/baby distinction; also where breeding hearts land.
#[derive(Debug, Clone)]
pub struct AgeableLayer {
    mob: MobLayer,
    baby: Param,
}

impl AgeableLayer {
    pub fn extend(mob: MobLayer, registry: &mut ParamRegistry) -> Self {
        Self {
            mob,
            baby: registry.register(ParamKind::Bool, ParamValue::Bool(false)),
        }
    }
}

impl CapabilityLayer for AgeableLayer {
    fn spawn_params(&mut self, source: &dyn EntityDataSource, list: &mut ParamList) {
        self.mob.spawn_params(source, list);
        list.set(self.baby, ParamValue::Bool(source.is_baby()));
    }

    fn update_params(
        &mut self,
        source: &dyn EntityDataSource,
        shadow: &ParamShadow,
        list: &mut ParamList,
    ) {
        self.mob.update_params(source, shadow, list);
        shadow.set_if_changed(list, self.baby, ParamValue::Bool(source.is_baby()));
    }

    fn handle_event(&mut self, id: EntityId, event: EntityEvent) -> Option<EntityMessage> {
        match event {
            EntityEvent::LoveHearts => Some(EntityMessage::Status {
                id,
                status: EntityStatus::LoveHearts,
            }),
            other => self.mob.handle_event(id, other),
        }
    }

    fn tracks_equipment(&self) -> bool {
        self.mob.tracks_equipment()
    }

    fn clone_boxed(&self) -> Box<dyn CapabilityLayer> {
        Box::new(self.clone())
    }
}
