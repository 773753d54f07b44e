use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::{
    param::ParamRegistry,
    tracker::layer::CapabilityLayer,
    types::EntityKindId,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("protocol is already locked")]
    AlreadyLocked,
    #[error("species `{name}` is already registered")]
    DuplicateSpecies { name: &'static str },
}

/// Everything the tracker layer needs to know about one species: its wire
/// kind id, its frozen parameter registry and the capability-chain prototype
/// new trackers clone their hooks from.
pub struct SpeciesDescriptor {
    name: &'static str,
    kind: EntityKindId,
    part_count: usize,
    registry: Arc<ParamRegistry>,
    prototype: Box<dyn CapabilityLayer>,
}

impl SpeciesDescriptor {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> EntityKindId {
        self.kind
    }

    /// Auxiliary wire parts beyond the root. Zero for ordinary entities.
    pub fn part_count(&self) -> usize {
        self.part_count
    }

    pub fn registry(&self) -> &ParamRegistry {
        &self.registry
    }

    pub(crate) fn new_hooks(&self) -> Box<dyn CapabilityLayer> {
        self.prototype.clone_boxed()
    }
}

/// Build-time hook mirroring a plugin's worth of species registrations.
pub trait SyncPlugin {
    fn build(&self, protocol: &mut SyncProtocol);
}

/// Process-wide species/schema registry.
///
/// Built once at startup through `add_species`/`add_plugin` calls, then
/// `lock()`ed. After the lock it is immutable and safe to share across
/// threads behind an `Arc`; trackers and connection handlers only ever read
/// from it.
#[derive(Default)]
pub struct SyncProtocol {
    species: Vec<Arc<SpeciesDescriptor>>,
    names: HashMap<&'static str, usize>,
    locked: bool,
}

impl SyncProtocol {
    pub fn builder() -> Self {
        Self::default()
    }

    /// Registers a species under the next free wire kind id.
    ///
    /// # Panics
    ///
    /// Panics when the protocol is locked or the name is taken; these are
    /// startup configuration errors. Use `try_add_species` to surface them
    /// as values.
    pub fn add_species(
        &mut self,
        name: &'static str,
        part_count: usize,
        registry: ParamRegistry,
        prototype: Box<dyn CapabilityLayer>,
    ) -> &mut Self {
        match self.try_add_species(name, part_count, registry, prototype) {
            Ok(protocol) => protocol,
            Err(error) => panic!("species registration failed: {}", error),
        }
    }

    pub fn try_add_species(
        &mut self,
        name: &'static str,
        part_count: usize,
        registry: ParamRegistry,
        prototype: Box<dyn CapabilityLayer>,
    ) -> Result<&mut Self, ProtocolError> {
        self.try_check_lock()?;
        if self.names.contains_key(name) {
            return Err(ProtocolError::DuplicateSpecies { name });
        }
        let kind = EntityKindId::new(self.species.len() as u16);
        self.names.insert(name, self.species.len());
        self.species.push(Arc::new(SpeciesDescriptor {
            name,
            kind,
            part_count,
            registry: Arc::new(registry),
            prototype,
        }));
        Ok(self)
    }

    pub fn add_plugin<P: SyncPlugin>(&mut self, plugin: P) -> &mut Self {
        self.check_lock();
        plugin.build(self);
        self
    }

    pub fn try_add_plugin<P: SyncPlugin>(&mut self, plugin: P) -> Result<&mut Self, ProtocolError> {
        self.try_check_lock()?;
        plugin.build(self);
        Ok(self)
    }

    /// Installs the standard species lattice.
    pub fn add_default_species(&mut self) -> &mut Self {
        self.add_plugin(crate::tracker::layers::DefaultSpeciesPlugin)
    }

    pub fn lock(&mut self) {
        self.check_lock();
        self.locked = true;
    }

    pub fn try_lock(&mut self) -> Result<(), ProtocolError> {
        self.try_check_lock()?;
        self.locked = true;
        Ok(())
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn check_lock(&self) {
        if self.locked {
            panic!("protocol is already locked");
        }
    }

    pub fn try_check_lock(&self) -> Result<(), ProtocolError> {
        if self.locked {
            Err(ProtocolError::AlreadyLocked)
        } else {
            Ok(())
        }
    }

    pub fn species(&self, name: &str) -> Option<&Arc<SpeciesDescriptor>> {
        self.names.get(name).map(|index| &self.species[*index])
    }

    pub fn species_by_kind(&self, kind: EntityKindId) -> Option<&Arc<SpeciesDescriptor>> {
        self.species.get(usize::from(kind.value()))
    }

    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    pub fn build(&mut self) -> Self {
        std::mem::take(self)
    }
}
