// themesweep/src/commands/prune.rs
//
// USE CASE: sweep stale hashed variants using the manifest already on disk.
// Useful after an interrupted watch session left old hashes behind.

use std::path::PathBuf;
use std::time::Instant;

use themesweep_core::application::prune_stale;

use super::{layered_options, report_outcome};

pub async fn execute(theme_root: Option<PathBuf>, manifest: Option<String>) -> anyhow::Result<()> {
    let start = Instant::now();

    let options = layered_options(theme_root, manifest)?;

    match prune_stale(options).await {
        Ok(outcome) => {
            report_outcome(&outcome, start);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Prune failed: {}", e);
            std::process::exit(1);
        }
    }
}
