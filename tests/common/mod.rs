#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use glam::DVec3;
use uuid::Uuid;

use entity_sync::{
    EntityDataSource, EntityHandle, EntityId, EntityIdAllocator, EntityMessage, EquipmentSlot,
    ItemStack, LazyMessage, UpdateContext,
};

/// Scriptable stand-in for the simulation's view of one entity.
pub struct MockDataSource {
    pub position: DVec3,
    pub yaw: f32,
    pub pitch: f32,
    pub velocity: DVec3,
    pub on_ground: bool,

    pub on_fire: bool,
    pub crouching: bool,
    pub sprinting: bool,
    pub invisible: bool,
    pub glowing: bool,
    pub air_supply: i32,
    pub custom_name: Option<String>,
    pub silent: bool,
    pub no_gravity: bool,

    pub health: f32,
    pub using_item: bool,
    pub offhand_active: bool,
    pub equipment: HashMap<EquipmentSlot, ItemStack>,

    pub no_ai: bool,
    pub aggressive: bool,
    pub baby: bool,
    pub sitting: bool,
    pub tamed: bool,
    pub owner: Option<Uuid>,
    pub collar_color: u8,
    pub wool_color: u8,
    pub sheared: bool,
    pub profession: i32,
    pub attack_phase: i32,
    pub part_spacing: f64,

    pub passengers: Vec<EntityHandle>,
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            velocity: DVec3::ZERO,
            on_ground: true,
            on_fire: false,
            crouching: false,
            sprinting: false,
            invisible: false,
            glowing: false,
            air_supply: 300,
            custom_name: None,
            silent: false,
            no_gravity: false,
            health: 1.0,
            using_item: false,
            offhand_active: false,
            equipment: HashMap::new(),
            no_ai: false,
            aggressive: false,
            baby: false,
            sitting: false,
            tamed: false,
            owner: None,
            collar_color: 14,
            wool_color: 0,
            sheared: false,
            profession: 0,
            attack_phase: 0,
            part_spacing: 1.0,
            passengers: Vec::new(),
        }
    }
}

impl EntityDataSource for MockDataSource {
    fn position(&self) -> DVec3 {
        self.position
    }
    fn yaw_degrees(&self) -> f32 {
        self.yaw
    }
    fn pitch_degrees(&self) -> f32 {
        self.pitch
    }
    fn velocity(&self) -> DVec3 {
        self.velocity
    }
    fn on_ground(&self) -> bool {
        self.on_ground
    }
    fn is_on_fire(&self) -> bool {
        self.on_fire
    }
    fn is_crouching(&self) -> bool {
        self.crouching
    }
    fn is_sprinting(&self) -> bool {
        self.sprinting
    }
    fn is_invisible(&self) -> bool {
        self.invisible
    }
    fn is_glowing(&self) -> bool {
        self.glowing
    }
    fn air_supply(&self) -> i32 {
        self.air_supply
    }
    fn custom_name(&self) -> Option<String> {
        self.custom_name.clone()
    }
    fn is_silent(&self) -> bool {
        self.silent
    }
    fn has_no_gravity(&self) -> bool {
        self.no_gravity
    }
    fn health(&self) -> f32 {
        self.health
    }
    fn is_using_item(&self) -> bool {
        self.using_item
    }
    fn is_offhand_active(&self) -> bool {
        self.offhand_active
    }
    fn equipment(&self, slot: EquipmentSlot) -> ItemStack {
        self.equipment
            .get(&slot)
            .cloned()
            .unwrap_or(ItemStack::EMPTY)
    }
    fn has_no_ai(&self) -> bool {
        self.no_ai
    }
    fn is_aggressive(&self) -> bool {
        self.aggressive
    }
    fn is_baby(&self) -> bool {
        self.baby
    }
    fn is_sitting(&self) -> bool {
        self.sitting
    }
    fn is_tamed(&self) -> bool {
        self.tamed
    }
    fn owner_uuid(&self) -> Option<Uuid> {
        self.owner
    }
    fn collar_color(&self) -> u8 {
        self.collar_color
    }
    fn wool_color(&self) -> u8 {
        self.wool_color
    }
    fn is_sheared(&self) -> bool {
        self.sheared
    }
    fn profession(&self) -> i32 {
        self.profession
    }
    fn attack_phase(&self) -> i32 {
        self.attack_phase
    }
    fn part_offset(&self, part: usize) -> DVec3 {
        DVec3::new(0.0, 0.0, self.part_spacing * (part + 1) as f64)
    }
    fn passengers(&self) -> Vec<EntityHandle> {
        self.passengers.clone()
    }
}

/// Which observer group a captured message was addressed to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Audience {
    All,
    AllExceptSelf,
    OnlySelf,
}

/// Capturing stand-in for the transport layer.
#[derive(Default)]
pub struct MockContext {
    pub allocator: EntityIdAllocator,
    pub sent: RefCell<Vec<(Audience, EntityMessage)>>,
    pub id_map: RefCell<HashMap<EntityHandle, EntityId>>,
}

impl MockContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn map_entity(&self, handle: EntityHandle, id: EntityId) {
        self.id_map.borrow_mut().insert(handle, id);
    }

    /// Takes every captured message, clearing the log.
    pub fn drain(&self) -> Vec<(Audience, EntityMessage)> {
        self.sent.borrow_mut().drain(..).collect()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl UpdateContext for MockContext {
    fn send_to_all(&self, message: LazyMessage) {
        self.sent.borrow_mut().push((Audience::All, message()));
    }

    fn send_to_all_except_self(&self, message: LazyMessage) {
        self.sent
            .borrow_mut()
            .push((Audience::AllExceptSelf, message()));
    }

    fn send_to_self(&self, message: LazyMessage) {
        self.sent.borrow_mut().push((Audience::OnlySelf, message()));
    }

    fn resolve_id(&self, entity: EntityHandle) -> Option<EntityId> {
        self.id_map.borrow().get(&entity).copied()
    }

    fn id_allocator(&self) -> &EntityIdAllocator {
        &self.allocator
    }
}

/// Builds a locked protocol with the default species set.
pub fn default_protocol() -> entity_sync::SyncProtocol {
    let mut protocol = entity_sync::SyncProtocol::builder();
    protocol.add_default_species();
    protocol.lock();
    protocol.build()
}
