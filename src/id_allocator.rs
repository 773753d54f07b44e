use std::collections::HashSet;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    RwLock,
};

use log::warn;

/// Sentinel for "no entity". Never returned by `acquire`, always a no-op to
/// release.
pub const INVALID_ENTITY_ID: EntityId = EntityId(-1);

/// Small integer handle addressing an entity (or one of its wire parts) on
/// the wire.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(i32);

impl EntityId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0 >= 0
    }
}

struct AllocatorState {
    next: i32,
    free: HashSet<i32>,
}

impl AllocatorState {
    fn is_allocated(&self, id: i32) -> bool {
        id >= 0 && id < self.next && !self.free.contains(&id)
    }
}

/// Reusable pool of wire ids.
///
/// An id is allocated iff it is below the grow counter and not in the free
/// set. `acquire` drains the free set before growing the counter.
///
/// Writers (`acquire`/`release`) only ever run on the simulation thread, but
/// reads may come from connection threads, so reads are optimistic: an
/// atomic sequence stamp is sampled around an uncontended read of the state,
/// and if a concurrent mutation is detected the read falls back to blocking
/// on the lock.
pub struct EntityIdAllocator {
    stamp: AtomicU64,
    state: RwLock<AllocatorState>,
}

impl Default for EntityIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityIdAllocator {
    pub fn new() -> Self {
        Self {
            stamp: AtomicU64::new(0),
            state: RwLock::new(AllocatorState {
                next: 0,
                free: HashSet::new(),
            }),
        }
    }

    /// Returns a previously released id if any exist, otherwise grows the
    /// counter.
    pub fn acquire(&self) -> EntityId {
        let Ok(mut state) = self.state.write() else {
            panic!("entity id allocator lock poisoned");
        };
        self.stamp.fetch_add(1, Ordering::Release);
        let id = if let Some(&reused) = state.free.iter().next() {
            state.free.remove(&reused);
            reused
        } else {
            let fresh = state.next;
            state.next += 1;
            fresh
        };
        self.stamp.fetch_add(1, Ordering::Release);
        EntityId(id)
    }

    /// Acquires `count` ids. No contiguity guarantee; the first id is the
    /// root by convention.
    pub fn acquire_batch(&self, count: usize) -> Vec<EntityId> {
        (0..count).map(|_| self.acquire()).collect()
    }

    /// Marks an id reusable. Releasing [`INVALID_ENTITY_ID`] is a no-op.
    /// Releasing an id that was never acquired is a caller defect: it
    /// asserts in debug builds and is tolerated (warn, no-op) in release
    /// builds so a cosmetic bookkeeping bug cannot take down the tick loop.
    pub fn release(&self, id: EntityId) {
        if id == INVALID_ENTITY_ID {
            return;
        }
        let Ok(mut state) = self.state.write() else {
            panic!("entity id allocator lock poisoned");
        };
        let was_allocated = state.is_allocated(id.value());
        debug_assert!(
            was_allocated,
            "released entity id {} which was not acquired",
            id.value()
        );
        if !was_allocated {
            warn!(
                "released entity id {} which was not acquired; ignoring",
                id.value()
            );
            return;
        }
        self.stamp.fetch_add(1, Ordering::Release);
        state.free.insert(id.value());
        self.stamp.fetch_add(1, Ordering::Release);
    }

    /// May be called from any thread.
    pub fn is_allocated(&self, id: EntityId) -> bool {
        if !id.is_valid() {
            return false;
        }

        // Optimistic path: an even stamp that is unchanged across the read
        // means no writer ran in between.
        for _ in 0..2 {
            let before = self.stamp.load(Ordering::Acquire);
            if before & 1 != 0 {
                continue;
            }
            let Ok(state) = self.state.try_read() else {
                continue;
            };
            let allocated = state.is_allocated(id.value());
            drop(state);
            if self.stamp.load(Ordering::Acquire) == before {
                return allocated;
            }
        }

        // A writer kept interfering; take the blocking read.
        let Ok(state) = self.state.read() else {
            panic!("entity id allocator lock poisoned");
        };
        state.is_allocated(id.value())
    }
}
