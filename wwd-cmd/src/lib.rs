//! Command implementations for the wind-wave CLI.
//!
//! Provides subcommands to fetch the stored forecast for a coordinate, assess
//! a set of readings for sailing safety, and classify a bearing.

use clap::Subcommand;

pub mod assess;
pub mod fetch;

/// Server queried when `--server` is not given.
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

#[derive(Subcommand)]
pub enum Command {
    /// Fetch stored wind-wave data for a coordinate and assess it
    Fetch {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,

        /// Base URL of the wind-wave server
        #[arg(short = 's', long, default_value = DEFAULT_SERVER)]
        server: String,

        /// Also write the hourly series to this CSV file
        #[arg(long)]
        csv: Option<String>,
    },

    /// Assess readings for sailing safety
    Assess {
        /// Wind wave height in meters
        #[arg(long)]
        height: Option<f64>,

        /// Wind wave direction in degrees
        #[arg(long)]
        direction: Option<f64>,

        /// Wind wave period in seconds
        #[arg(long)]
        period: Option<f64>,
    },

    /// Name the compass direction of a bearing
    Classify {
        /// Bearing in degrees, [0, 360)
        #[arg(allow_hyphen_values = true)]
        degrees: f64,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch {
            latitude,
            longitude,
            server,
            csv,
        } => fetch::run_fetch(latitude, longitude, &server, csv.as_deref()).await,
        Command::Assess {
            height,
            direction,
            period,
        } => {
            println!("{}", assess::run_assess(height, direction, period));
            Ok(())
        }
        Command::Classify { degrees } => {
            println!("{}", assess::run_classify(degrees));
            Ok(())
        }
    }
}
