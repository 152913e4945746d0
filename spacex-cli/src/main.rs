//! spacex-dash - interactive dashboard for SpaceX launch records.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "spacex-dash",
    version,
    about = "SpaceX launch records dashboard"
)]
struct Cli {
    #[command(subcommand)]
    command: spacex_cmd::Command,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.command.debug() { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    spacex_cmd::run(cli.command).await
}
