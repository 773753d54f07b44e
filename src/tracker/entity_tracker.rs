use std::sync::Arc;

use crate::{
    context::{EntityDataSource, UpdateContext},
    id_allocator::{EntityId, INVALID_ENTITY_ID},
    message::EntityMessage,
    param::{ParamList, ParamShadow},
    protocol::SpeciesDescriptor,
    quantize::{self, Angle},
    types::{EntityHandle, EquipmentSlot, ItemStack},
};

use super::{error::TrackerError, event::EntityEvent, layer::CapabilityLayer};

/// Lifecycle of a tracker. Legal transitions only ever move rightward:
/// `Unattached -> Initialized -> Spawned -> Removed` (`remove` is also legal
/// straight from `Initialized`).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TrackerPhase {
    Unattached,
    Initialized,
    Spawned,
    Removed,
}

/// The per-entity diffing engine.
///
/// Owns the entity's wire ids and a shadow copy of everything last
/// transmitted: quantized position, byte angles, velocity, the parameter
/// shadow behind its capability chain, equipment per slot and the passenger
/// set. Every lifecycle method is driven from the single per-world
/// simulation thread, so none of this state is synchronized.
pub struct EntityTracker {
    handle: EntityHandle,
    species: Arc<SpeciesDescriptor>,
    hooks: Box<dyn CapabilityLayer>,
    phase: TrackerPhase,

    root_id: EntityId,
    part_ids: Vec<EntityId>,
    supplied_id: bool,

    shadow: ParamShadow,
    last_position: [i64; 3],
    last_yaw: Angle,
    last_pitch: Angle,
    last_on_ground: bool,
    last_velocity: [i16; 3],
    last_part_positions: Vec<[i64; 3]>,
    last_equipment: [ItemStack; EquipmentSlot::COUNT],
    // Kept sorted; passenger sets compare as unordered sets.
    last_passengers: Vec<EntityId>,
}

impl EntityTracker {
    pub fn new(handle: EntityHandle, species: &Arc<SpeciesDescriptor>) -> Self {
        Self {
            handle,
            species: species.clone(),
            hooks: species.new_hooks(),
            phase: TrackerPhase::Unattached,
            root_id: INVALID_ENTITY_ID,
            part_ids: Vec::new(),
            supplied_id: false,
            shadow: ParamShadow::new(species.registry()),
            last_position: [0; 3],
            last_yaw: Angle::ZERO,
            last_pitch: Angle::ZERO,
            last_on_ground: false,
            last_velocity: [0; 3],
            last_part_positions: vec![[0; 3]; species.part_count()],
            last_equipment: std::array::from_fn(|_| ItemStack::EMPTY),
            last_passengers: Vec::new(),
        }
    }

    /// Attaches to a root id the caller already owns (e.g. a player id
    /// assigned at connection time). The caller keeps ownership: `remove`
    /// will not release it. Composite species allocate their own contiguous
    /// block and cannot take one.
    pub fn with_root_id(
        handle: EntityHandle,
        species: &Arc<SpeciesDescriptor>,
        root_id: EntityId,
    ) -> Result<Self, TrackerError> {
        if species.part_count() > 0 {
            return Err(TrackerError::CompositeWithSuppliedId {
                species: species.name(),
            });
        }
        let mut tracker = Self::new(handle, species);
        tracker.root_id = root_id;
        tracker.supplied_id = true;
        Ok(tracker)
    }

    pub fn handle(&self) -> EntityHandle {
        self.handle
    }

    pub fn species(&self) -> &Arc<SpeciesDescriptor> {
        &self.species
    }

    pub fn phase(&self) -> TrackerPhase {
        self.phase
    }

    pub fn root_id(&self) -> EntityId {
        self.root_id
    }

    pub fn part_ids(&self) -> &[EntityId] {
        &self.part_ids
    }

    fn expect_phase(&self, expected: TrackerPhase) -> Result<(), TrackerError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(TrackerError::WrongPhase {
                handle: self.handle,
                phase: self.phase,
                expected,
            })
        }
    }

    /// Allocates the root wire id (and the auxiliary part block for
    /// composite species) from the context's allocator.
    pub fn init(&mut self, ctx: &dyn UpdateContext) -> Result<(), TrackerError> {
        self.expect_phase(TrackerPhase::Unattached)?;
        let allocator = ctx.id_allocator();
        if self.species.part_count() > 0 {
            // One batch; the first id is the root.
            let mut batch = allocator.acquire_batch(self.species.part_count() + 1);
            self.root_id = batch.remove(0);
            self.part_ids = batch;
        } else if !self.supplied_id {
            self.root_id = allocator.acquire();
        }
        self.phase = TrackerPhase::Initialized;
        Ok(())
    }

    /// Pushes full state: the create-entity message, a complete parameter
    /// list, and non-empty equipment slots. Shadow state becomes exactly
    /// what was sent.
    pub fn spawn(
        &mut self,
        source: &dyn EntityDataSource,
        ctx: &dyn UpdateContext,
    ) -> Result<(), TrackerError> {
        self.expect_phase(TrackerPhase::Initialized)?;

        let id = self.root_id;
        let kind = self.species.kind();
        let position = quantize::quantize_position(source.position());
        let yaw = Angle::from_degrees(source.yaw_degrees());
        let pitch = Angle::from_degrees(source.pitch_degrees());
        let velocity = quantize::quantize_velocity(source.velocity());

        // The controller simulates its own entity locally; everyone else
        // needs the spawn.
        ctx.send_to_all_except_self(&|| EntityMessage::Spawn {
            id,
            kind,
            position,
            yaw,
            pitch,
            velocity,
        });
        self.last_position = position;
        self.last_yaw = yaw;
        self.last_pitch = pitch;
        self.last_on_ground = source.on_ground();
        self.last_velocity = velocity;

        let mut params = ParamList::new();
        self.hooks.spawn_params(source, &mut params);
        params.fill_defaults(self.species.registry());
        if !params.is_empty() {
            ctx.send_to_all(&|| EntityMessage::Metadata {
                id,
                params: params.clone(),
            });
            self.shadow.apply(&params);
        }

        if self.hooks.tracks_equipment() {
            for slot in EquipmentSlot::ALL {
                let item = source.equipment(slot);
                if !item.is_empty() {
                    ctx.send_to_all_except_self(&|| EntityMessage::Equipment {
                        id,
                        slot,
                        item: item.clone(),
                    });
                }
                self.last_equipment[slot.index()] = item;
            }
        }

        // Composite parts get their absolute transforms pushed once here,
        // then re-teleported as they move.
        for part in 0..self.part_ids.len() {
            let part_id = self.part_ids[part];
            let part_position =
                quantize::quantize_position(source.position() + source.part_offset(part));
            ctx.send_to_all_except_self(&|| EntityMessage::Teleport {
                id: part_id,
                position: part_position,
                yaw,
                pitch,
                on_ground: false,
            });
            self.last_part_positions[part] = part_position;
        }

        self.phase = TrackerPhase::Spawned;
        Ok(())
    }

    /// Initial passenger sync. Runs after every tracker of the tick has
    /// spawned, so other entities' wire ids resolve.
    pub fn post_spawn(
        &mut self,
        source: &dyn EntityDataSource,
        ctx: &dyn UpdateContext,
    ) -> Result<(), TrackerError> {
        self.expect_phase(TrackerPhase::Spawned)?;
        let passengers = self.resolve_passengers(source, ctx);
        if !passengers.is_empty() {
            let id = self.root_id;
            ctx.send_to_all(&|| EntityMessage::SetPassengers {
                id,
                passengers: passengers.clone(),
            });
        }
        self.last_passengers = passengers;
        Ok(())
    }

    /// One tick of diffing: movement, velocity, parameter deltas and
    /// equipment, in that order.
    pub fn update(
        &mut self,
        source: &dyn EntityDataSource,
        ctx: &dyn UpdateContext,
    ) -> Result<(), TrackerError> {
        self.expect_phase(TrackerPhase::Spawned)?;
        self.update_movement(source, ctx);
        self.update_velocity(source, ctx);
        self.update_params(source, ctx);
        if self.hooks.tracks_equipment() {
            self.update_equipment(source, ctx);
        }
        Ok(())
    }

    /// Passenger re-sync; like `post_spawn`, needs the tick's id map settled.
    pub fn post_update(
        &mut self,
        source: &dyn EntityDataSource,
        ctx: &dyn UpdateContext,
    ) -> Result<(), TrackerError> {
        self.expect_phase(TrackerPhase::Spawned)?;
        let passengers = self.resolve_passengers(source, ctx);
        if passengers != self.last_passengers {
            let id = self.root_id;
            ctx.send_to_all(&|| EntityMessage::SetPassengers {
                id,
                passengers: passengers.clone(),
            });
            self.last_passengers = passengers;
        }
        Ok(())
    }

    /// Dispatches a transient event down the capability chain. Unrecognized
    /// events are dropped by the chain root.
    pub fn handle_event(
        &mut self,
        ctx: &dyn UpdateContext,
        event: EntityEvent,
    ) -> Result<(), TrackerError> {
        self.expect_phase(TrackerPhase::Spawned)?;
        if let Some(message) = self.hooks.handle_event(self.root_id, event) {
            ctx.send_to_all(&|| message.clone());
        }
        Ok(())
    }

    /// Tears the entity down: destroy messages for the root and every part,
    /// then the whole id block goes back to the allocator. Caller-supplied
    /// root ids stay with the caller.
    pub fn remove(&mut self, ctx: &dyn UpdateContext) -> Result<(), TrackerError> {
        match self.phase {
            TrackerPhase::Initialized | TrackerPhase::Spawned => {}
            _ => return self.expect_phase(TrackerPhase::Spawned),
        }

        if self.phase == TrackerPhase::Spawned {
            let id = self.root_id;
            ctx.send_to_all(&|| EntityMessage::Destroy { id });
            for part in 0..self.part_ids.len() {
                let part_id = self.part_ids[part];
                ctx.send_to_all(&|| EntityMessage::Destroy { id: part_id });
            }
        }

        let allocator = ctx.id_allocator();
        if !self.supplied_id {
            allocator.release(self.root_id);
        }
        for part_id in self.part_ids.drain(..) {
            allocator.release(part_id);
        }
        self.root_id = INVALID_ENTITY_ID;
        self.phase = TrackerPhase::Removed;
        Ok(())
    }

    fn update_movement(&mut self, source: &dyn EntityDataSource, ctx: &dyn UpdateContext) {
        let id = self.root_id;
        let position = quantize::quantize_position(source.position());
        let yaw = Angle::from_degrees(source.yaw_degrees());
        let pitch = Angle::from_degrees(source.pitch_degrees());
        let on_ground = source.on_ground();
        let moved = position != self.last_position;
        let rotated = yaw != self.last_yaw || pitch != self.last_pitch;

        if moved {
            match quantize::move_delta(self.last_position, position) {
                Some(delta) if rotated => {
                    ctx.send_to_all_except_self(&|| EntityMessage::MoveRelLook {
                        id,
                        delta,
                        yaw,
                        pitch,
                        on_ground,
                    });
                }
                Some(delta) => {
                    ctx.send_to_all_except_self(&|| EntityMessage::MoveRel {
                        id,
                        delta,
                        on_ground,
                    });
                }
                // Out of the relative window. The teleport carries rotation,
                // so no separate look message this tick.
                None => {
                    ctx.send_to_all_except_self(&|| EntityMessage::Teleport {
                        id,
                        position,
                        yaw,
                        pitch,
                        on_ground,
                    });
                }
            }
        } else if rotated {
            ctx.send_to_all_except_self(&|| EntityMessage::Look {
                id,
                yaw,
                pitch,
                on_ground,
            });
        }
        self.last_position = position;
        self.last_yaw = yaw;
        self.last_pitch = pitch;
        self.last_on_ground = on_ground;

        for part in 0..self.part_ids.len() {
            let part_id = self.part_ids[part];
            let part_position =
                quantize::quantize_position(source.position() + source.part_offset(part));
            if part_position != self.last_part_positions[part] {
                ctx.send_to_all_except_self(&|| EntityMessage::Teleport {
                    id: part_id,
                    position: part_position,
                    yaw,
                    pitch,
                    on_ground: false,
                });
                self.last_part_positions[part] = part_position;
            }
        }
    }

    fn update_velocity(&mut self, source: &dyn EntityDataSource, ctx: &dyn UpdateContext) {
        let velocity = quantize::quantize_velocity(source.velocity());
        if velocity != self.last_velocity {
            let id = self.root_id;
            // Unlike position, velocity goes to the controller too.
            ctx.send_to_all(&|| EntityMessage::Velocity { id, velocity });
            self.last_velocity = velocity;
        }
    }

    fn update_params(&mut self, source: &dyn EntityDataSource, ctx: &dyn UpdateContext) {
        let mut params = ParamList::new();
        self.hooks.update_params(source, &self.shadow, &mut params);
        if !params.is_empty() {
            let id = self.root_id;
            ctx.send_to_all(&|| EntityMessage::Metadata {
                id,
                params: params.clone(),
            });
            self.shadow.apply(&params);
        }
    }

    fn update_equipment(&mut self, source: &dyn EntityDataSource, ctx: &dyn UpdateContext) {
        let id = self.root_id;
        for slot in EquipmentSlot::ALL {
            let item = source.equipment(slot);
            if item != self.last_equipment[slot.index()] {
                ctx.send_to_all_except_self(&|| EntityMessage::Equipment {
                    id,
                    slot,
                    item: item.clone(),
                });
                self.last_equipment[slot.index()] = item;
            }
        }
    }

    fn resolve_passengers(
        &self,
        source: &dyn EntityDataSource,
        ctx: &dyn UpdateContext,
    ) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = source
            .passengers()
            .into_iter()
            .filter_map(|passenger| ctx.resolve_id(passenger))
            .collect();
        ids.sort_unstable();
        ids
    }
}
