use crate::{
    context::EntityDataSource,
    id_allocator::EntityId,
    message::EntityMessage,
    param::{Param, ParamKind, ParamList, ParamRegistry, ParamShadow, ParamValue},
    tracker::{event::EntityEvent, layer::CapabilityLayer},
};

use super::tamable::TamableLayer;

#[derive(Debug, Clone)]
pub struct WolfLayer {
    tamable: TamableLayer,
    collar_color: Param,
}

impl WolfLayer {
    pub fn extend(tamable: TamableLayer, registry: &mut ParamRegistry) -> Self {
        Self {
            tamable,
            collar_color: registry.register(ParamKind::Byte, ParamValue::Byte(14)),
        }
    }
}

impl CapabilityLayer for WolfLayer {
    fn spawn_params(&mut self, source: &dyn EntityDataSource, list: &mut ParamList) {
        self.tamable.spawn_params(source, list);
        list.set(self.collar_color, ParamValue::Byte(source.collar_color()));
    }

    fn update_params(
        &mut self,
        source: &dyn EntityDataSource,
        shadow: &ParamShadow,
        list: &mut ParamList,
    ) {
        self.tamable.update_params(source, shadow, list);
        shadow.set_if_changed(
            list,
            self.collar_color,
            ParamValue::Byte(source.collar_color()),
        );
    }

    fn handle_event(&mut self, id: EntityId, event: EntityEvent) -> Option<EntityMessage> {
        self.tamable.handle_event(id, event)
    }

    fn tracks_equipment(&self) -> bool {
        self.tamable.tracks_equipment()
    }

    fn clone_boxed(&self) -> Box<dyn CapabilityLayer> {
        Box::new(self.clone())
    }
}
