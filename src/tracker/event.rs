/// Transient, non-stateful things an entity can do that observers should see
/// once. Closed set; a layer that does not recognize an event delegates it
/// up its chain, and the chain root drops it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntityEvent {
    MeleeSwing { offhand: bool },
    DamageFlash,
    LoveHearts,
    EatGrass,
}
