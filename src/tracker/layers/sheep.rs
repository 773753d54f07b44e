use crate::{
    context::EntityDataSource,
    id_allocator::EntityId,
    message::{EntityMessage, EntityStatus},
    param::{Param, ParamKind, ParamList, ParamRegistry, ParamShadow, ParamValue},
    tracker::{event::EntityEvent, layer::CapabilityLayer},
};

use super::ageable::AgeableLayer;

pub const WOOL_COLOR_MASK: u8 = 0x0F;
pub const WOOL_SHEARED: u8 = 0x10;

#[derive(Debug, Clone)]
pub struct SheepLayer {
    ageable: AgeableLayer,
    wool: Param,
}

impl SheepLayer {
    pub fn extend(ageable: AgeableLayer, registry: &mut ParamRegistry) -> Self {
        Self {
            ageable,
            wool: registry.register(ParamKind::Byte, ParamValue::Byte(0)),
        }
    }

    /// Color and sheared state share one byte. The byte is rebuilt from both
    /// sub-fields every tick and compared once, so simultaneous changes to
    /// color and shearing coalesce into a single resend.
    fn packed_wool(source: &dyn EntityDataSource) -> u8 {
        let mut wool = source.wool_color() & WOOL_COLOR_MASK;
        if source.is_sheared() {
            wool |= WOOL_SHEARED;
        }
        wool
    }
}

impl CapabilityLayer for SheepLayer {
    fn spawn_params(&mut self, source: &dyn EntityDataSource, list: &mut ParamList) {
        self.ageable.spawn_params(source, list);
        list.set(self.wool, ParamValue::Byte(Self::packed_wool(source)));
    }

    fn update_params(
        &mut self,
        source: &dyn EntityDataSource,
        shadow: &ParamShadow,
        list: &mut ParamList,
    ) {
        self.ageable.update_params(source, shadow, list);
        shadow.set_if_changed(list, self.wool, ParamValue::Byte(Self::packed_wool(source)));
    }

    fn handle_event(&mut self, id: EntityId, event: EntityEvent) -> Option<EntityMessage> {
        match event {
            EntityEvent::EatGrass => Some(EntityMessage::Status {
                id,
                status: EntityStatus::EatGrass,
            }),
            other => self.ageable.handle_event(id, other),
        }
    }

    fn tracks_equipment(&self) -> bool {
        self.ageable.tracks_equipment()
    }

    fn clone_boxed(&self) -> Box<dyn CapabilityLayer> {
        Box::new(self.clone())
    }
}
