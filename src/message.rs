use crate::{
    id_allocator::EntityId,
    param::ParamList,
    quantize::Angle,
    types::{EntityKindId, EquipmentSlot, ItemStack},
};

/// One-shot animation cues, with their wire discriminants.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationKind {
    SwingMainArm = 0,
    SwingOffhand = 3,
}

impl AnimationKind {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// One-shot entity status cues, with their wire discriminants.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum EntityStatus {
    Hurt = 2,
    EatGrass = 10,
    LoveHearts = 18,
}

impl EntityStatus {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Abstract outbound effect produced by a tracker. The byte-level encoding
/// belongs to the codec; positions are already quantized (1/4096 block per
/// unit), rotations are byte angles and velocities are 1/8000 block-per-tick
/// units, so a compatible codec writes these fields verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityMessage {
    Spawn {
        id: EntityId,
        kind: EntityKindId,
        position: [i64; 3],
        yaw: Angle,
        pitch: Angle,
        velocity: [i16; 3],
    },
    Metadata {
        id: EntityId,
        params: ParamList,
    },
    MoveRel {
        id: EntityId,
        delta: [i16; 3],
        on_ground: bool,
    },
    MoveRelLook {
        id: EntityId,
        delta: [i16; 3],
        yaw: Angle,
        pitch: Angle,
        on_ground: bool,
    },
    Look {
        id: EntityId,
        yaw: Angle,
        pitch: Angle,
        on_ground: bool,
    },
    Teleport {
        id: EntityId,
        position: [i64; 3],
        yaw: Angle,
        pitch: Angle,
        on_ground: bool,
    },
    Velocity {
        id: EntityId,
        velocity: [i16; 3],
    },
    Equipment {
        id: EntityId,
        slot: EquipmentSlot,
        item: ItemStack,
    },
    /// Always the full passenger set; passenger lists are small and have
    /// unordered-set semantics, so they are never sent as deltas.
    SetPassengers {
        id: EntityId,
        passengers: Vec<EntityId>,
    },
    Animation {
        id: EntityId,
        animation: AnimationKind,
    },
    Status {
        id: EntityId,
        status: EntityStatus,
    },
    Destroy {
        id: EntityId,
    },
}
