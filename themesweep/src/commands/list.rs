// themesweep/src/commands/list.rs
//
// USE CASE: show the manifest entries and which output files are currently
// live. Read-only.

use std::path::PathBuf;

use themesweep_core::infrastructure::fs::normalize_path;
use themesweep_core::infrastructure::manifest::load_manifest;

use super::layered_options;

pub fn execute(theme_root: Option<PathBuf>, manifest: Option<String>) -> anyhow::Result<()> {
    let options = layered_options(theme_root, manifest)?.resolve();
    let assets_dir = normalize_path(&options.theme_root.join("assets"));

    if !assets_dir.exists() {
        anyhow::bail!(
            "❌ No assets folder at: {}\n👉 Is this a theme root?",
            assets_dir.display()
        );
    }

    let manifest_path = assets_dir.join(&options.manifest_file_name);
    if !manifest_path.exists() {
        anyhow::bail!(
            "❌ No {} in {}\n👉 Has a build produced a manifest yet?",
            options.manifest_file_name,
            assets_dir.display()
        );
    }

    let manifest = load_manifest(&manifest_path)?;
    let live = manifest.live_files();

    println!("\n📋 Manifest: {}", manifest_path.display());
    for (key, chunk) in &manifest.chunks {
        // ✅ live output, 💤 listed but unreferenced
        let marker = if live.contains(&chunk.file) { "✅" } else { "💤" };
        println!("   {} {} ➜ {}", marker, key, chunk.file);
    }
    println!("   --- {} live / {} listed ---", live.len(), manifest.chunks.len());

    Ok(())
}
