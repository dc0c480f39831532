mod lifecycle_narrative;
mod representative;

pub use lifecycle_narrative::LifecycleNarrativePolicy;
pub use representative::RepresentativeSlot;
