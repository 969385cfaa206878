//! WWD CLI - Command line tool for wind-wave forecasts and sailing safety.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wwd-cli",
    version,
    about = "Wind-wave forecast and sailing safety toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: wwd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Starting wwd-cli");
    wwd_cmd::run(cli.command).await
}
