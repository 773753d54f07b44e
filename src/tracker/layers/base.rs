use crate::{
    context::EntityDataSource,
    id_allocator::EntityId,
    message::EntityMessage,
    param::{Param, ParamKind, ParamList, ParamRegistry, ParamShadow, ParamValue},
    tracker::{event::EntityEvent, layer::CapabilityLayer},
};

// Shared flags byte, one bit per unrelated boolean.
pub const FLAG_ON_FIRE: u8 = 0x01;
pub const FLAG_CROUCHING: u8 = 0x02;
pub const FLAG_SPRINTING: u8 = 0x08;
pub const FLAG_INVISIBLE: u8 = 0x20;
pub const FLAG_GLOWING: u8 = 0x40;

/// Root of every capability chain: state all wire entities share.
#[derive(Debug, Clone)]
pub struct BaseLayer {
    flags: Param,
    air_supply: Param,
    custom_name: Param,
    silent: Param,
    no_gravity: Param,
}

impl BaseLayer {
    pub fn register(registry: &mut ParamRegistry) -> Self {
        Self {
            flags: registry.register(ParamKind::Byte, ParamValue::Byte(0)),
            air_supply: registry.register(ParamKind::VarInt, ParamValue::VarInt(300)),
            custom_name: registry.register(ParamKind::OptText, ParamValue::OptText(None)),
            silent: registry.register(ParamKind::Bool, ParamValue::Bool(false)),
            no_gravity: registry.register(ParamKind::Bool, ParamValue::Bool(false)),
        }
    }

    pub fn flags_param(&self) -> Param {
        self.flags
    }

    fn packed_flags(source: &dyn EntityDataSource) -> u8 {
        let mut flags = 0;
        if source.is_on_fire() {
            flags |= FLAG_ON_FIRE;
        }
        if source.is_crouching() {
            flags |= FLAG_CROUCHING;
        }
        if source.is_sprinting() {
            flags |= FLAG_SPRINTING;
        }
        if source.is_invisible() {
            flags |= FLAG_INVISIBLE;
        }
        if source.is_glowing() {
            flags |= FLAG_GLOWING;
        }
        flags
    }
}

impl CapabilityLayer for BaseLayer {
    fn spawn_params(&mut self, source: &dyn EntityDataSource, list: &mut ParamList) {
        list.set(self.flags, ParamValue::Byte(Self::packed_flags(source)));
        list.set(self.air_supply, ParamValue::VarInt(source.air_supply()));
        list.set(self.custom_name, ParamValue::OptText(source.custom_name()));
        list.set(self.silent, ParamValue::Bool(source.is_silent()));
        list.set(self.no_gravity, ParamValue::Bool(source.has_no_gravity()));
    }

    fn update_params(
        &mut self,
        source: &dyn EntityDataSource,
        shadow: &ParamShadow,
        list: &mut ParamList,
    ) {
        // The whole byte is recomputed every tick; a single compare against
        // the shadow byte covers every packed flag.
        shadow.set_if_changed(list, self.flags, ParamValue::Byte(Self::packed_flags(source)));
        shadow.set_if_changed(list, self.air_supply, ParamValue::VarInt(source.air_supply()));
        shadow.set_if_changed(
            list,
            self.custom_name,
            ParamValue::OptText(source.custom_name()),
        );
        shadow.set_if_changed(list, self.silent, ParamValue::Bool(source.is_silent()));
        shadow.set_if_changed(
            list,
            self.no_gravity,
            ParamValue::Bool(source.has_no_gravity()),
        );
    }

    fn handle_event(&mut self, _id: EntityId, _event: EntityEvent) -> Option<EntityMessage> {
        // Chain root: unhandled events are dropped.
        None
    }

    fn clone_boxed(&self) -> Box<dyn CapabilityLayer> {
        Box::new(self.clone())
    }
}
