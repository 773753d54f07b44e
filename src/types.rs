/// Stable simulation-side handle for an entity.
///
/// Handles identify entities inside the simulation and never go over the
/// wire; the tracker resolves them to wire ids through the update context.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityHandle(u64);

impl EntityHandle {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Wire discriminator for a species, assigned at protocol build time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EntityKindId(u16);

impl EntityKindId {
    pub fn new(value: u16) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

/// One stack of items as observed over the wire. The tracker only ever
/// compares stacks for equality; interpretation of the fields belongs to the
/// codec and the simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStack {
    pub item: u16,
    pub count: u8,
    pub nbt: Option<Vec<u8>>,
}

impl ItemStack {
    pub const EMPTY: Self = Self {
        item: 0,
        count: 0,
        nbt: None,
    };

    pub fn new(item: u16, count: u8) -> Self {
        Self {
            item,
            count,
            nbt: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item == 0 || self.count == 0
    }
}

/// Wire-visible equipment slots, diffed independently of each other.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EquipmentSlot {
    MainHand,
    OffHand,
    Feet,
    Legs,
    Chest,
    Head,
}

impl EquipmentSlot {
    pub const COUNT: usize = 6;

    pub const ALL: [EquipmentSlot; Self::COUNT] = [
        EquipmentSlot::MainHand,
        EquipmentSlot::OffHand,
        EquipmentSlot::Feet,
        EquipmentSlot::Legs,
        EquipmentSlot::Chest,
        EquipmentSlot::Head,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}
