use crate::{
    context::EntityDataSource,
    id_allocator::EntityId,
    message::EntityMessage,
    param::{Param, ParamKind, ParamList, ParamRegistry, ParamShadow, ParamValue},
    tracker::{event::EntityEvent, layer::CapabilityLayer},
};

use super::ageable::AgeableLayer;

pub const TAME_SITTING: u8 = 0x01;
pub const TAME_TAMED: u8 = 0x04;

/// Animals that can belong to a player.
#[derive(Debug, Clone)]
pub struct TamableLayer {
    ageable: AgeableLayer,
    tame_flags: Param,
    owner: Param,
}

impl TamableLayer {
    pub fn extend(ageable: AgeableLayer, registry: &mut ParamRegistry) -> Self {
        Self {
            ageable,
            tame_flags: registry.register(ParamKind::Byte, ParamValue::Byte(0)),
            owner: registry.register(ParamKind::OptUuid, ParamValue::OptUuid(None)),
        }
    }

    fn packed_tame_flags(source: &dyn EntityDataSource) -> u8 {
        let mut flags = 0;
        if source.is_sitting() {
            flags |= TAME_SITTING;
        }
        if source.is_tamed() {
            flags |= TAME_TAMED;
        }
        flags
    }
}

impl CapabilityLayer for TamableLayer {
    fn spawn_params(&mut self, source: &dyn EntityDataSource, list: &mut ParamList) {
        self.ageable.spawn_params(source, list);
        list.set(
            self.tame_flags,
            ParamValue::Byte(Self::packed_tame_flags(source)),
        );
        list.set(self.owner, ParamValue::OptUuid(source.owner_uuid()));
    }

    fn update_params(
        &mut self,
        source: &dyn EntityDataSource,
        shadow: &ParamShadow,
        list: &mut ParamList,
    ) {
        self.ageable.update_params(source, shadow, list);
        shadow.set_if_changed(
            list,
            self.tame_flags,
            ParamValue::Byte(Self::packed_tame_flags(source)),
        );
        shadow.set_if_changed(list, self.owner, ParamValue::OptUuid(source.owner_uuid()));
    }

    fn handle_event(&mut self, id: EntityId, event: EntityEvent) -> Option<EntityMessage> {
        self.ageable.handle_event(id, event)
    }

    fn tracks_equipment(&self) -> bool {
        self.ageable.tracks_equipment()
    }

    fn clone_boxed(&self) -> Box<dyn CapabilityLayer> {
        Box::new(self.clone())
    }
}
