//! Contracts between the tracker core and its collaborators: the transport
//! layer (observer addressing, id resolution) and the simulation (state
//! accessors).

use glam::DVec3;
use uuid::Uuid;

use crate::{
    id_allocator::{EntityId, EntityIdAllocator},
    message::EntityMessage,
    types::{EntityHandle, EquipmentSlot, ItemStack},
};

/// Deferred message constructor. Contexts invoke it only when at least one
/// observer will actually receive the message, so unwatched entities cost no
/// allocation.
pub type LazyMessage<'a> = &'a dyn Fn() -> EntityMessage;

/// Supplied by the transport layer, consumed by trackers.
///
/// "Self" is the tracked entity's own controlling connection, if any; for
/// uncontrolled entities `send_to_all_except_self` and `send_to_all` are
/// equivalent. Handing a message to the context is fire-and-forget: it must
/// never block on network I/O, and there is no way to retract a message once
/// handed over.
pub trait UpdateContext {
    fn send_to_all(&self, message: LazyMessage);
    fn send_to_all_except_self(&self, message: LazyMessage);
    fn send_to_self(&self, message: LazyMessage);

    /// Wire id of another live entity, if it is currently tracked.
    fn resolve_id(&self, entity: EntityHandle) -> Option<EntityId>;

    fn id_allocator(&self) -> &EntityIdAllocator;
}

/// Per-tick, synchronous, non-blocking accessors into the simulation's
/// current view of one entity.
///
/// Everything beyond transform state has a default implementation returning
/// the attribute's declared default; a simulation only overrides the
/// accessors its entity kind actually models. Accessors must be pure reads
/// over already-computed state; diffing relies on them never performing
/// fallible I/O.
pub trait EntityDataSource {
    fn position(&self) -> DVec3;
    fn yaw_degrees(&self) -> f32;
    fn pitch_degrees(&self) -> f32;
    fn velocity(&self) -> DVec3;
    fn on_ground(&self) -> bool;

    // Base capability.
    fn is_on_fire(&self) -> bool {
        false
    }
    fn is_crouching(&self) -> bool {
        false
    }
    fn is_sprinting(&self) -> bool {
        false
    }
    fn is_invisible(&self) -> bool {
        false
    }
    fn is_glowing(&self) -> bool {
        false
    }
    fn air_supply(&self) -> i32 {
        300
    }
    fn custom_name(&self) -> Option<String> {
        None
    }
    fn is_silent(&self) -> bool {
        false
    }
    fn has_no_gravity(&self) -> bool {
        false
    }

    // Living capability.
    fn health(&self) -> f32 {
        1.0
    }
    fn is_using_item(&self) -> bool {
        false
    }
    fn is_offhand_active(&self) -> bool {
        false
    }
    fn equipment(&self, _slot: EquipmentSlot) -> ItemStack {
        ItemStack::EMPTY
    }

    // Insentient (mob) capability.
    fn has_no_ai(&self) -> bool {
        false
    }
    fn is_aggressive(&self) -> bool {
        false
    }

    // Ageable capability.
    fn is_baby(&self) -> bool {
        false
    }

    // Tamable capability.
    fn is_sitting(&self) -> bool {
        false
    }
    fn is_tamed(&self) -> bool {
        false
    }
    fn owner_uuid(&self) -> Option<Uuid> {
        None
    }

    // Species-specific attributes.
    fn collar_color(&self) -> u8 {
        14
    }
    fn wool_color(&self) -> u8 {
        0
    }
    fn is_sheared(&self) -> bool {
        false
    }
    fn profession(&self) -> i32 {
        0
    }
    fn attack_phase(&self) -> i32 {
        0
    }

    /// Offset of one composite body part from the root position.
    fn part_offset(&self, _part: usize) -> DVec3 {
        DVec3::ZERO
    }

    /// Handles of entities currently riding this one.
    fn passengers(&self) -> Vec<EntityHandle> {
        Vec::new()
    }
}
