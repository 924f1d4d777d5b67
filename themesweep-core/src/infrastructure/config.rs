// themesweep-core/src/infrastructure/config.rs

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::normalize_path;

/// Manifest file name used when the host provides none.
pub const DEFAULT_MANIFEST_FILE_NAME: &str = ".vite/manifest.json";

/// User-supplied configuration, every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CleanOptions {
    pub manifest_file_name: Option<String>,
    pub theme_root: Option<PathBuf>,
}

/// Fully populated configuration. Immutable once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCleanOptions {
    pub manifest_file_name: String,
    pub theme_root: PathBuf,
}

impl CleanOptions {
    /// Merge with defaults. This operation cannot fail: a provided manifest
    /// name is used verbatim, a provided theme root is lexically normalized.
    pub fn resolve(self) -> ResolvedCleanOptions {
        ResolvedCleanOptions {
            manifest_file_name: self
                .manifest_file_name
                .unwrap_or_else(|| DEFAULT_MANIFEST_FILE_NAME.to_string()),
            theme_root: self
                .theme_root
                .map(|root| normalize_path(&root))
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

// --- CONFIG FILE (OPTIONNEL) ---

const CONFIG_FILE_CANDIDATES: [&str; 2] = ["themesweep.yaml", ".themesweep.yaml"];

/// Load options from the first config file candidate found in `dir`.
///
/// No file is not an error (every option has a default); an unreadable or
/// malformed file is.
pub fn load_clean_options(dir: &Path) -> Result<Option<CleanOptions>, InfrastructureError> {
    for filename in CONFIG_FILE_CANDIDATES {
        let path = dir.join(filename);
        if path.exists() {
            info!(path = ?path, "Loading clean options");
            let content = fs::read_to_string(&path)?;
            let options: CleanOptions = serde_yaml::from_str(&content)?;
            return Ok(Some(options));
        }
    }

    Ok(None)
}

/// Override options from the process environment (Pattern 'Layering').
/// Permet de faire: THEMESWEEP_MANIFEST=manifest.json themesweep clean
pub fn apply_env_overrides(options: &mut CleanOptions) {
    if let Ok(val) = std::env::var("THEMESWEEP_MANIFEST") {
        info!(old = ?options.manifest_file_name, new = ?val, "Overriding manifest name via ENV");
        options.manifest_file_name = Some(val);
    }
    if let Ok(val) = std::env::var("THEMESWEEP_THEME_ROOT") {
        info!(old = ?options.theme_root, new = ?val, "Overriding theme root via ENV");
        options.theme_root = Some(PathBuf::from(val));
    }
}
