use crate::{
    context::EntityDataSource,
    id_allocator::EntityId,
    message::EntityMessage,
    param::{Param, ParamKind, ParamList, ParamRegistry, ParamShadow, ParamValue},
    tracker::{event::EntityEvent, layer::CapabilityLayer},
};

use super::living::LivingLayer;

pub const MOB_NO_AI: u8 = 0x01;
pub const MOB_AGGRESSIVE: u8 = 0x04;

/// Insentient (AI-driven) entities.
#[derive(Debug, Clone)]
pub struct MobLayer {
    living: LivingLayer,
    mob_flags: Param,
}

impl MobLayer {
    pub fn extend(living: LivingLayer, registry: &mut ParamRegistry) -> Self {
        Self {
            living,
            mob_flags: registry.register(ParamKind::Byte, ParamValue::Byte(0)),
        }
    }

    fn packed_mob_flags(source: &dyn EntityDataSource) -> u8 {
        let mut flags = 0;
        if source.has_no_ai() {
            flags |= MOB_NO_AI;
        }
        if source.is_aggressive() {
            flags |= MOB_AGGRESSIVE;
        }
        flags
    }
}

impl CapabilityLayer for MobLayer {
    fn spawn_params(&mut self, source: &dyn EntityDataSource, list: &mut ParamList) {
        self.living.spawn_params(source, list);
        list.set(
            self.mob_flags,
            ParamValue::Byte(Self::packed_mob_flags(source)),
        );
    }

    fn update_params(
        &mut self,
        source: &dyn EntityDataSource,
        shadow: &ParamShadow,
        list: &mut ParamList,
    ) {
        self.living.update_params(source, shadow, list);
        shadow.set_if_changed(
            list,
            self.mob_flags,
            ParamValue::Byte(Self::packed_mob_flags(source)),
        );
    }

    fn handle_event(&mut self, id: EntityId, event: EntityEvent) -> Option<EntityMessage> {
        self.living.handle_event(id, event)
    }

    fn tracks_equipment(&self) -> bool {
        self.living.tracks_equipment()
    }

    fn clone_boxed(&self) -> Box<dyn CapabilityLayer> {
        Box::new(self.clone())
    }
}
