pub mod manifest;
pub mod stale;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use manifest::{Manifest, ManifestChunk};
pub use stale::stale_variants;
