// themesweep-core/src/application/hook.rs
//
// The stateful lifecycle object driven by the host build tool. Two phases:
// build-start (clean leftovers from a previous run) and write-bundle (clean
// stale hashed variants after an incremental rebuild in a watch session).

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

use crate::domain::stale::stale_variants;
use crate::error::ThemesweepError;
use crate::infrastructure::config::{CleanOptions, ResolvedCleanOptions};
use crate::infrastructure::fs::{RemoveOutcome, list_file_names, normalize_path, remove_if_exists};
use crate::infrastructure::manifest::{load_manifest, parse_manifest};

/// How the host is running the build. Resolved once by the host integration
/// layer and fixed for the lifetime of the hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    FullBuild,
    WatchSession,
}

/// Per-phase invocation state. One value per phase, held inside the hook
/// instance so that several hook instances in one process cannot interfere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PhaseState {
    #[default]
    NotYetRun,
    Ran,
}

/// The bundle representation handed over by the host after a write:
/// output file name -> entry.
pub type OutputBundle = BTreeMap<String, BundleEntry>;

/// One written bundle entry. Only entries carrying inline textual source
/// qualify for manifest parsing; assets copied without transformation do not.
#[derive(Debug, Clone)]
pub enum BundleEntry {
    Emitted { source: String },
    Referenced,
}

impl BundleEntry {
    pub fn source(&self) -> Option<&str> {
        match self {
            BundleEntry::Emitted { source } => Some(source),
            BundleEntry::Referenced => None,
        }
    }
}

/// What a phase invocation did, for the host and the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhaseOutcome {
    Skipped(SkipReason),
    Cleaned {
        deleted: Vec<String>,
        already_absent: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    AssetsDirMissing,
    ManifestMissing,
    /// Build-start in a watch session past the first run: the files on disk
    /// were just regenerated, deleting them again would break the session.
    WatchRunAlreadyClean,
    /// Write-bundle outside a watch session; the next build-start cleans.
    NotWatchSession,
    ManifestNotInBundle,
    ManifestNotInline,
    /// First write of a watch session is the initial full build, already clean.
    FirstWatchWrite,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::AssetsDirMissing => "no assets folder",
            SkipReason::ManifestMissing => "no manifest file",
            SkipReason::WatchRunAlreadyClean => "watch run already cleaned",
            SkipReason::NotWatchSession => "not a watch session",
            SkipReason::ManifestNotInBundle => "manifest not part of the written bundle",
            SkipReason::ManifestNotInline => "manifest entry has no inline source",
            SkipReason::FirstWatchWrite => "first write of the watch session",
        };
        write!(f, "{}", reason)
    }
}

/// Lifecycle hook that removes output files no longer referenced by the
/// build manifest.
pub struct CleanHook {
    options: ResolvedCleanOptions,
    mode: BuildMode,
    build_start: PhaseState,
    write_bundle: PhaseState,
}

impl CleanHook {
    pub fn new(options: CleanOptions, mode: BuildMode) -> Self {
        Self {
            options: options.resolve(),
            mode,
            build_start: PhaseState::default(),
            write_bundle: PhaseState::default(),
        }
    }

    pub fn options(&self) -> &ResolvedCleanOptions {
        &self.options
    }

    /// `<theme_root>/assets`, the only directory this hook ever touches.
    pub fn assets_dir(&self) -> PathBuf {
        normalize_path(&self.options.theme_root.join("assets"))
    }

    /// Build-start phase: delete every manifest-listed file left on disk by a
    /// previous run, before the new build writes its own output.
    #[instrument(skip(self))]
    pub async fn build_start(&mut self) -> Result<PhaseOutcome, ThemesweepError> {
        let assets_dir = self.assets_dir();

        if !assets_dir.exists() {
            warn!(
                "No assets folder located at {}. No clean attempted.",
                assets_dir.display()
            );
            return Ok(PhaseOutcome::Skipped(SkipReason::AssetsDirMissing));
        }

        let manifest_file = assets_dir.join(&self.options.manifest_file_name);
        if !manifest_file.exists() {
            warn!(
                "No {} in {}. No clean attempted.",
                self.options.manifest_file_name,
                assets_dir.display()
            );
            return Ok(PhaseOutcome::Skipped(SkipReason::ManifestMissing));
        }

        // Parsed before the gate: a corrupt manifest fails even a run the
        // gate would suppress.
        let manifest = load_manifest(&manifest_file)?;
        let files_in_manifest = manifest.live_files();

        // En watch, seul le tout premier passage nettoie : les passages
        // suivants retrouveraient les fichiers que l'itération précédente
        // vient de régénérer.
        if self.mode == BuildMode::WatchSession && self.build_start == PhaseState::Ran {
            return Ok(PhaseOutcome::Skipped(SkipReason::WatchRunAlreadyClean));
        }
        self.build_start = PhaseState::Ran;

        remove_assets(&assets_dir, files_in_manifest).await
    }

    /// Write-bundle phase: after an incremental rebuild wrote its output,
    /// delete the old hashed variants of files the fresh manifest lists.
    #[instrument(skip(self, bundle))]
    pub async fn write_bundle(&mut self, bundle: &OutputBundle) -> Result<PhaseOutcome, ThemesweepError> {
        let Some(manifest_entry) = bundle.get(&self.options.manifest_file_name) else {
            return Ok(PhaseOutcome::Skipped(SkipReason::ManifestNotInBundle));
        };

        // Hors watch, le build-start du prochain build complet suffit.
        if self.mode != BuildMode::WatchSession {
            return Ok(PhaseOutcome::Skipped(SkipReason::NotWatchSession));
        }

        if self.write_bundle == PhaseState::NotYetRun {
            self.write_bundle = PhaseState::Ran;
            return Ok(PhaseOutcome::Skipped(SkipReason::FirstWatchWrite));
        }

        let assets_dir = self.assets_dir();
        if !assets_dir.exists() {
            warn!(
                "No assets folder located at {}. No clean attempted.",
                assets_dir.display()
            );
            return Ok(PhaseOutcome::Skipped(SkipReason::AssetsDirMissing));
        }

        let Some(source) = manifest_entry.source() else {
            return Ok(PhaseOutcome::Skipped(SkipReason::ManifestNotInline));
        };

        let manifest = parse_manifest(source)?;
        let files_in_manifest = manifest.live_files();
        let files_in_assets = list_file_names(&assets_dir).await?;
        let files_to_delete = stale_variants(&files_in_manifest, &files_in_assets);

        remove_assets(&assets_dir, files_to_delete).await
    }
}

/// Delete `files` under `assets_dir`, all removals issued concurrently and
/// awaited jointly. Refuses any entry that resolves outside the assets
/// directory before a single deletion begins.
pub(crate) async fn remove_assets(
    assets_dir: &Path,
    files: BTreeSet<String>,
) -> Result<PhaseOutcome, ThemesweepError> {
    let mut targets = Vec::with_capacity(files.len());
    for file in files {
        let location = normalize_path(&assets_dir.join(&file));
        if !location.starts_with(assets_dir) {
            return Err(ThemesweepError::UnsafePath(file));
        }
        targets.push((file, location));
    }

    let removals = targets.into_iter().map(|(file, location)| async move {
        let outcome = remove_if_exists(&location).await?;
        Ok::<(String, RemoveOutcome), ThemesweepError>((file, outcome))
    });

    let mut deleted = Vec::new();
    let mut already_absent = 0;
    for result in futures::future::join_all(removals).await {
        let (file, outcome) = result?;
        match outcome {
            RemoveOutcome::Deleted => {
                debug!("🗑️  Removed stale asset: {}", file);
                deleted.push(file);
            }
            RemoveOutcome::AlreadyAbsent => already_absent += 1,
        }
    }

    Ok(PhaseOutcome::Cleaned {
        deleted,
        already_absent,
    })
}
