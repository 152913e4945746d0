//! Command implementations for the SpaceX launch dashboard CLI.
//!
//! Provides subcommands for serving the dashboard and for evaluating the
//! chart callbacks offline against a launch CSV.

use clap::Subcommand;
use spacex_data::ALL_SITES;
use std::path::PathBuf;

pub mod error;
pub mod inspect;
pub mod serve;

pub use error::StartupError;

/// Launch CSV read when no path is given.
pub const DEFAULT_DATA_PATH: &str = "spacex_launch_dash.csv";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8051;

#[derive(Subcommand)]
pub enum Command {
    /// Serve the dashboard over HTTP
    Serve {
        /// Path to the launch records CSV
        #[arg(long, env = "DASH_DATA", default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,

        /// Address to listen on
        #[arg(long, env = "DASH_HOST", default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "DASH_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Verbose logging and render errors included in callback responses
        #[arg(
            long,
            env = "DASH_DEBUG",
            value_parser = clap::builder::BoolishValueParser::new()
        )]
        debug: bool,
    },

    /// Print the layout and the charts for one set of widget values as JSON
    Inspect {
        /// Path to the launch records CSV
        #[arg(long, env = "DASH_DATA", default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,

        /// Launch site, or "All Sites"
        #[arg(short, long, default_value = ALL_SITES)]
        site: String,

        /// Payload range in kg (defaults to the observed min and max)
        #[arg(long, num_args = 2, value_names = ["LO", "HI"])]
        payload: Option<Vec<f64>>,
    },
}

impl Command {
    /// Whether debug logging was requested.
    pub fn debug(&self) -> bool {
        match self {
            Command::Serve { debug, .. } => *debug,
            Command::Inspect { .. } => false,
        }
    }
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Serve {
            data,
            host,
            port,
            debug,
        } => {
            let config = serve::ServeConfig {
                data,
                host,
                port,
                debug,
            };
            serve::run_serve(config).await?;
            Ok(())
        }
        Command::Inspect {
            data,
            site,
            payload,
        } => inspect::run_inspect(&data, &site, payload.as_deref()),
    }
}
