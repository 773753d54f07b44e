use crate::{
    context::EntityDataSource,
    id_allocator::EntityId,
    message::{AnimationKind, EntityMessage, EntityStatus},
    param::{Param, ParamKind, ParamList, ParamRegistry, ParamShadow, ParamValue},
    tracker::{event::EntityEvent, layer::CapabilityLayer},
};

use super::base::BaseLayer;

pub const HAND_ACTIVE: u8 = 0x01;
pub const HAND_OFFHAND: u8 = 0x02;

/// Clients time the use-item animation out; the hand-states byte must be
/// refreshed at least this often while it is held, changed or not.
pub const HAND_STATES_RESEND_TICKS: u16 = 40;

/// Everything alive: health, hand states, equipment.
#[derive(Debug, Clone)]
pub struct LivingLayer {
    base: BaseLayer,
    hand_states: Param,
    health: Param,
    resend_countdown: u16,
}

impl LivingLayer {
    pub fn extend(base: BaseLayer, registry: &mut ParamRegistry) -> Self {
        Self {
            base,
            hand_states: registry.register(ParamKind::Byte, ParamValue::Byte(0)),
            health: registry.register(ParamKind::Float, ParamValue::Float(1.0)),
            resend_countdown: HAND_STATES_RESEND_TICKS,
        }
    }

    pub fn hand_states_param(&self) -> Param {
        self.hand_states
    }

    fn packed_hand_states(source: &dyn EntityDataSource) -> u8 {
        let mut states = 0;
        if source.is_using_item() {
            states |= HAND_ACTIVE;
        }
        if source.is_offhand_active() {
            states |= HAND_OFFHAND;
        }
        states
    }
}

impl CapabilityLayer for LivingLayer {
    fn spawn_params(&mut self, source: &dyn EntityDataSource, list: &mut ParamList) {
        self.base.spawn_params(source, list);
        list.set(
            self.hand_states,
            ParamValue::Byte(Self::packed_hand_states(source)),
        );
        list.set(self.health, ParamValue::Float(source.health()));
        self.resend_countdown = HAND_STATES_RESEND_TICKS;
    }

    fn update_params(
        &mut self,
        source: &dyn EntityDataSource,
        shadow: &ParamShadow,
        list: &mut ParamList,
    ) {
        self.base.update_params(source, shadow, list);

        let hand_states = ParamValue::Byte(Self::packed_hand_states(source));
        self.resend_countdown = self.resend_countdown.saturating_sub(1);
        if self.resend_countdown == 0 {
            // Time-driven, not change-driven: resend regardless of the diff.
            self.resend_countdown = HAND_STATES_RESEND_TICKS;
            list.set(self.hand_states, hand_states);
        } else {
            shadow.set_if_changed(list, self.hand_states, hand_states);
        }

        shadow.set_if_changed(list, self.health, ParamValue::Float(source.health()));
    }

    fn handle_event(&mut self, id: EntityId, event: EntityEvent) -> Option<EntityMessage> {
        match event {
            EntityEvent::MeleeSwing { offhand } => Some(EntityMessage::Animation {
                id,
                animation: if offhand {
                    AnimationKind::SwingOffhand
                } else {
                    AnimationKind::SwingMainArm
                },
            }),
            EntityEvent::DamageFlash => Some(EntityMessage::Status {
                id,
                status: EntityStatus::Hurt,
            }),
            other => self.base.handle_event(id, other),
        }
    }

    fn tracks_equipment(&self) -> bool {
        true
    }

    fn clone_boxed(&self) -> Box<dyn CapabilityLayer> {
        Box::new(self.clone())
    }
}
