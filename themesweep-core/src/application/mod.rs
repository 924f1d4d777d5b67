// themesweep-core/src/application/mod.rs

pub mod hook;
pub mod prune;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Cela permet au CLI de faire :
// `use themesweep_core::application::{CleanHook, BuildMode, prune_stale};`
// sans avoir à connaître la structure interne des fichiers.

pub use hook::{BuildMode, BundleEntry, CleanHook, OutputBundle, PhaseOutcome, SkipReason};
pub use prune::prune_stale;
