use crate::{
    context::EntityDataSource,
    id_allocator::EntityId,
    message::EntityMessage,
    param::{Param, ParamKind, ParamList, ParamRegistry, ParamShadow, ParamValue},
    tracker::{event::EntityEvent, layer::CapabilityLayer},
};

use super::ageable::AgeableLayer;

#[derive(Debug, Clone)]
pub struct VillagerLayer {
    ageable: AgeableLayer,
    profession: Param,
}

impl VillagerLayer {
    pub fn extend(ageable: AgeableLayer, registry: &mut ParamRegistry) -> Self {
        Self {
            ageable,
            profession: registry.register(ParamKind::VarInt, ParamValue::VarInt(0)),
        }
    }
}

impl CapabilityLayer for VillagerLayer {
    fn spawn_params(&mut self, source: &dyn EntityDataSource, list: &mut ParamList) {
        self.ageable.spawn_params(source, list);
        list.set(self.profession, ParamValue::VarInt(source.profession()));
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
            self.profession,
            ParamValue::VarInt(source.profession()),
        );
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
