// themesweep-core/src/domain/manifest.rs

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// The build manifest: source module identifier -> emitted file metadata.
///
/// Keys starting with `_` denote chunks that are only reachable through the
/// `imports` lists of other blocks, never as entry points.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(transparent)]
pub struct Manifest {
    pub chunks: BTreeMap<String, ManifestChunk>,
}

/// A single manifest block. Real manifests carry more fields (`src`,
/// `isEntry`, `css`, ...); only the shape needed to identify output files is
/// read, the rest is ignored.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ManifestChunk {
    /// Emitted file path, relative to the assets directory.
    pub file: String,

    /// Manifest keys of the blocks this chunk imports.
    #[serde(default)]
    pub imports: Vec<String>,
}

impl Manifest {
    /// Returns the set of emitted files the manifest currently considers live.
    ///
    /// An underscore-prefixed key can appear in the manifest without being
    /// wired into the dependency graph at all; its file is live only if some
    /// other block actually imports it. Every other key's file is always live.
    pub fn live_files(&self) -> BTreeSet<String> {
        // 1. Toutes les clés référencées par un bloc quelconque
        let imported_keys: HashSet<&str> = self
            .chunks
            .values()
            .flat_map(|chunk| chunk.imports.iter().map(String::as_str))
            .collect();

        // 2. Entry points toujours inclus ; les chunks "_" seulement si importés
        self.chunks
            .iter()
            .filter(|(key, _)| !key.starts_with('_') || imported_keys.contains(key.as_str()))
            .map(|(_, chunk)| chunk.file.clone())
            .collect()
    }
}
