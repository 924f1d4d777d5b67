// themesweep/src/commands/mod.rs

pub mod clean;
pub mod list;
pub mod prune;

use std::path::PathBuf;
use std::time::Instant;

use themesweep_core::application::PhaseOutcome;
use themesweep_core::infrastructure::config::{
    CleanOptions, apply_env_overrides, load_clean_options,
};

/// Layer the options: config file < environment < CLI flags.
pub(crate) fn layered_options(
    theme_root: Option<PathBuf>,
    manifest: Option<String>,
) -> anyhow::Result<CleanOptions> {
    // Where to look for a config file: flag > env > current directory
    let root_hint = theme_root
        .clone()
        .or_else(|| std::env::var_os("THEMESWEEP_THEME_ROOT").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    let mut options = load_clean_options(&root_hint)?.unwrap_or_default();
    apply_env_overrides(&mut options);

    // Les flags explicites gagnent toujours
    if manifest.is_some() {
        options.manifest_file_name = manifest;
    }
    if theme_root.is_some() {
        options.theme_root = theme_root;
    }

    Ok(options)
}

pub(crate) fn report_outcome(outcome: &PhaseOutcome, start: Instant) {
    match outcome {
        PhaseOutcome::Skipped(reason) => {
            println!("⏭️  Nothing to clean ({})", reason);
        }
        PhaseOutcome::Cleaned {
            deleted,
            already_absent,
        } => {
            for file in deleted {
                println!("   🗑️  {}", file);
            }
            if *already_absent > 0 {
                println!("   ({} already absent)", already_absent);
            }
            println!(
                "✨ Removed {} stale asset(s) in {:.2?}",
                deleted.len(),
                start.elapsed()
            );
        }
    }
}
