//! Command implementations for the EDA CLI.
//!
//! Both subcommands drive the same `Dashboard` state machine as the web app,
//! one awaited request at a time.

use clap::Subcommand;
use eda_core::{DashboardConfig, HttpApi};

pub mod filters;
pub mod snapshot;

#[derive(Subcommand)]
pub enum Command {
    /// Print the filter vocabulary served by the backend
    Filters,

    /// Load the dashboard for a filter set and print every panel in order
    Snapshot(snapshot::SnapshotArgs),
}

pub async fn run(api_base: &str, command: Command) -> anyhow::Result<()> {
    let config = DashboardConfig::with_api_base(api_base);
    match command {
        Command::Filters => {
            let api = HttpApi::new(config);
            filters::run_filters(&api).await
        }
        Command::Snapshot(args) => snapshot::run_snapshot(config, args).await,
    }
}
