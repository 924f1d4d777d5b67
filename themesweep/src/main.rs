// themesweep/src/main.rs

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug themesweep clean ... pour voir les détails
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Clean {
            theme_root,
            manifest,
            watch,
        } => commands::clean::execute(theme_root, manifest, watch).await,

        Commands::Prune {
            theme_root,
            manifest,
        } => commands::prune::execute(theme_root, manifest).await,

        Commands::List {
            theme_root,
            manifest,
        } => commands::list::execute(theme_root, manifest),
    }
}
