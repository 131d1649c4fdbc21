//! EDA CLI - headless client for the FMCG EDA dashboard backend.

mod cmd;

use clap::Parser;
use eda_core::config::DEFAULT_API_BASE;

#[derive(Parser)]
#[command(
    name = "eda-cli",
    version,
    about = "FMCG sales dashboard from the command line"
)]
struct Cli {
    /// Base URL of the dashboard API
    #[arg(long, global = true, default_value = DEFAULT_API_BASE)]
    api_base: String,

    #[command(subcommand)]
    command: cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cmd::run(&cli.api_base, cli.command).await
}
