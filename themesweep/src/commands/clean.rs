// themesweep/src/commands/clean.rs
//
// USE CASE: run the build-start phase once — delete every manifest-listed
// asset left behind by a previous build.

use std::path::PathBuf;
use std::time::Instant;

use themesweep_core::application::{BuildMode, CleanHook};

use super::{layered_options, report_outcome};

pub async fn execute(
    theme_root: Option<PathBuf>,
    manifest: Option<String>,
    watch: bool,
) -> anyhow::Result<()> {
    let start = Instant::now();

    let options = layered_options(theme_root, manifest)?;

    // The mode is resolved exactly once, here, not re-read per phase call.
    let mode = if watch {
        BuildMode::WatchSession
    } else {
        BuildMode::FullBuild
    };
    tracing::debug!(?mode, "Resolved build mode");

    let mut hook = CleanHook::new(options, mode);
    println!("🧹 Cleaning {}...", hook.assets_dir().display());

    match hook.build_start().await {
        Ok(outcome) => {
            report_outcome(&outcome, start);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Clean failed: {}", e);
            std::process::exit(1);
        }
    }
}
