//! # Entity Sync
//! Server-side entity state synchronization: decides, tick by tick, what
//! subset of each live entity's state must be pushed to observers so their
//! clients converge on the server's view with minimal bandwidth.
//!
//! Three tightly coupled pieces: per-entity protocol objects
//! ([`EntityTracker`]) that hold last-transmitted shadow state and emit only
//! changes; the typed, derivation-composed parameter schema
//! ([`ParamRegistry`]) those objects diff against; and the wire-id pool
//! ([`EntityIdAllocator`]) that addresses entities and their parts. The
//! byte-level codec and the simulation itself sit behind the [`context`]
//! traits.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub mod context;
mod id_allocator;
mod message;
mod param;
mod protocol;
mod quantize;
mod tracker;
mod types;

pub use context::{EntityDataSource, LazyMessage, UpdateContext};
pub use id_allocator::{EntityId, EntityIdAllocator, INVALID_ENTITY_ID};
pub use message::{AnimationKind, EntityMessage, EntityStatus};
pub use param::{
    Param, ParamDescriptor, ParamError, ParamKind, ParamList, ParamRegistry, ParamShadow,
    ParamValue, MAX_PARAMS,
};
pub use protocol::{ProtocolError, SpeciesDescriptor, SyncPlugin, SyncProtocol};
pub use quantize::{
    dequantize_coord, dequantize_position, move_delta, quantize_coord, quantize_position,
    quantize_velocity, quantize_velocity_coord, Angle, POSITION_SCALE, VELOCITY_SCALE,
};
pub use tracker::{
    layers::{
        base::{FLAG_CROUCHING, FLAG_GLOWING, FLAG_INVISIBLE, FLAG_ON_FIRE, FLAG_SPRINTING},
        living::{HAND_ACTIVE, HAND_OFFHAND, HAND_STATES_RESEND_TICKS},
        mob::{MOB_AGGRESSIVE, MOB_NO_AI},
        sheep::{WOOL_COLOR_MASK, WOOL_SHEARED},
        tamable::{TAME_SITTING, TAME_TAMED},
        AgeableLayer, BaseLayer, DefaultSpeciesPlugin, LivingLayer, MobLayer, SerpentLayer,
        SheepLayer, TamableLayer, VillagerLayer, WolfLayer, SERPENT_PART_COUNT,
    },
    CapabilityLayer, EntityEvent, EntityTracker, TrackerError, TrackerPhase,
};
pub use types::{EntityHandle, EntityKindId, EquipmentSlot, ItemStack};
