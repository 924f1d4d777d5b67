// themesweep-core/src/application/prune.rs
//
// USE CASE: standalone stale-variant sweep, outside any build lifecycle.
// Recovers an assets directory left dirty by an interrupted watch session:
// reads the manifest from disk instead of from a just-written bundle, then
// applies the same identification and removal as the write-bundle phase.

use tracing::{instrument, warn};

use crate::domain::stale::stale_variants;
use crate::error::ThemesweepError;
use crate::infrastructure::config::CleanOptions;
use crate::infrastructure::fs::{list_file_names, normalize_path};
use crate::infrastructure::manifest::load_manifest;

use super::hook::{PhaseOutcome, SkipReason, remove_assets};

/// Delete every on-disk file that is an obsolete hashed variant of a file the
/// manifest currently lists as live.
#[instrument(skip(options))]
pub async fn prune_stale(options: CleanOptions) -> Result<PhaseOutcome, ThemesweepError> {
    let options = options.resolve();
    let assets_dir = normalize_path(&options.theme_root.join("assets"));

    if !assets_dir.exists() {
        warn!(
            "No assets folder located at {}. No clean attempted.",
            assets_dir.display()
        );
        return Ok(PhaseOutcome::Skipped(SkipReason::AssetsDirMissing));
    }

    let manifest_file = assets_dir.join(&options.manifest_file_name);
    if !manifest_file.exists() {
        warn!(
            "No {} in {}. No clean attempted.",
            options.manifest_file_name,
            assets_dir.display()
        );
        return Ok(PhaseOutcome::Skipped(SkipReason::ManifestMissing));
    }

    let manifest = load_manifest(&manifest_file)?;
    let files_in_manifest = manifest.live_files();
    let files_in_assets = list_file_names(&assets_dir).await?;
    let files_to_delete = stale_variants(&files_in_manifest, &files_in_assets);

    remove_assets(&assets_dir, files_to_delete).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_prune_removes_stale_variants_from_disk_manifest() -> Result<()> {
        let tmp = tempdir()?;
        let assets = tmp.path().join("assets");
        fs::create_dir_all(assets.join(".vite"))?;
        fs::write(
            assets.join(".vite/manifest.json"),
            r#"{ "main.js": { "file": "main-abc123.js" } }"#,
        )?;
        fs::write(assets.join("main-abc123.js"), "live")?;
        fs::write(assets.join("main-def456.js"), "stale")?;

        let outcome = prune_stale(CleanOptions {
            manifest_file_name: None,
            theme_root: Some(tmp.path().to_path_buf()),
        })
        .await?;

        assert_eq!(
            outcome,
            PhaseOutcome::Cleaned {
                deleted: vec!["main-def456.js".to_string()],
                already_absent: 0,
            }
        );
        assert!(assets.join("main-abc123.js").exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_prune_without_assets_dir_skips() -> Result<()> {
        let tmp = tempdir()?;

        let outcome = prune_stale(CleanOptions {
            manifest_file_name: None,
            theme_root: Some(tmp.path().to_path_buf()),
        })
        .await?;

        assert_eq!(outcome, PhaseOutcome::Skipped(SkipReason::AssetsDirMissing));
        Ok(())
    }
}
