//! The capability lattice. Each species' registry derives from its
//! ancestor's, so shared ordinal prefixes stay identical across species and
//! a generic decoder can interpret any entity's metadata stream.

pub mod ageable;
pub mod base;
pub mod living;
pub mod mob;
pub mod serpent;
pub mod sheep;
pub mod tamable;
pub mod villager;
pub mod wolf;

pub use ageable::AgeableLayer;
pub use base::BaseLayer;
pub use living::LivingLayer;
pub use mob::MobLayer;
pub use serpent::{SerpentLayer, SERPENT_PART_COUNT};
pub use sheep::SheepLayer;
pub use tamable::TamableLayer;
pub use villager::VillagerLayer;
pub use wolf::WolfLayer;

use crate::{
    param::ParamRegistry,
    protocol::{SyncPlugin, SyncProtocol},
};

/// Installs the standard species set.
pub struct DefaultSpeciesPlugin;

impl SyncPlugin for DefaultSpeciesPlugin {
    fn build(&self, protocol: &mut SyncProtocol) {
        // Shared ancestor registries, built once; every species registry is
        // a derivation of one of these.
        let mut mob_registry = ParamRegistry::new_root();
        let base = BaseLayer::register(&mut mob_registry);
        let living = LivingLayer::extend(base, &mut mob_registry);
        let mob = MobLayer::extend(living, &mut mob_registry);

        let mut ageable_registry = ParamRegistry::derive(&mob_registry);
        let ageable = AgeableLayer::extend(mob.clone(), &mut ageable_registry);

        {
            let mut registry = ParamRegistry::derive(&ageable_registry);
            let layer = SheepLayer::extend(ageable.clone(), &mut registry);
            protocol.add_species("sheep", 0, registry, Box::new(layer));
        }

        {
            let mut registry = ParamRegistry::derive(&ageable_registry);
            let tamable = TamableLayer::extend(ageable.clone(), &mut registry);
            let layer = WolfLayer::extend(tamable, &mut registry);
            protocol.add_species("wolf", 0, registry, Box::new(layer));
        }

        {
            let mut registry = ParamRegistry::derive(&ageable_registry);
            let layer = VillagerLayer::extend(ageable.clone(), &mut registry);
            protocol.add_species("villager", 0, registry, Box::new(layer));
        }

        {
            let mut registry = ParamRegistry::derive(&mob_registry);
            let layer = SerpentLayer::extend(mob.clone(), &mut registry);
            protocol.add_species("serpent", SERPENT_PART_COUNT, registry, Box::new(layer));
        }
    }
}
