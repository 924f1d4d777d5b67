// themesweep/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "themesweep")]
#[command(about = "Stale asset cleaner for hashed theme bundles", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🧹 Removes every manifest-listed asset before a fresh build
    Clean {
        /// Theme root directory (contains the assets/ folder)
        #[arg(long)]
        theme_root: Option<PathBuf>,

        /// Manifest file name inside the assets folder
        #[arg(long)]
        manifest: Option<String>,

        /// Treat this run as part of a watch session
        #[arg(long, env = "THEMESWEEP_WATCH")]
        watch: bool,
    },

    /// ✨ Removes stale hashed variants of files the manifest still lists
    Prune {
        /// Theme root directory (contains the assets/ folder)
        #[arg(long)]
        theme_root: Option<PathBuf>,

        /// Manifest file name inside the assets folder
        #[arg(long)]
        manifest: Option<String>,
    },

    /// 📋 Lists the manifest entries and which output files are live
    List {
        /// Theme root directory (contains the assets/ folder)
        #[arg(long)]
        theme_root: Option<PathBuf>,

        /// Manifest file name inside the assets folder
        #[arg(long)]
        manifest: Option<String>,
    },
}
