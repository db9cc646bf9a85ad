use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::constants::{DEFAULT_HOST, DEFAULT_PORT, MEASUREMENTS_FILE, STATIONS_FILE};

#[derive(Parser)]
#[command(name = "hawaii-climate-api")]
#[command(about = "Climate analysis API over Hawaii weather station data")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the dataset and serve the query API
    Serve {
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        #[arg(short, long, default_value = STATIONS_FILE, help = "Station roster CSV")]
        stations_file: PathBuf,

        #[arg(
            short,
            long,
            default_value = MEASUREMENTS_FILE,
            help = "Daily measurements CSV"
        )]
        measurements_file: PathBuf,
    },

    /// Print the exploratory analysis report and exit
    Analyze {
        #[arg(short, long, default_value = STATIONS_FILE, help = "Station roster CSV")]
        stations_file: PathBuf,

        #[arg(
            short,
            long,
            default_value = MEASUREMENTS_FILE,
            help = "Daily measurements CSV"
        )]
        measurements_file: PathBuf,
    },

    /// Check source data integrity without serving
    Validate {
        #[arg(short, long, default_value = STATIONS_FILE, help = "Station roster CSV")]
        stations_file: PathBuf,

        #[arg(
            short,
            long,
            default_value = MEASUREMENTS_FILE,
            help = "Daily measurements CSV"
        )]
        measurements_file: PathBuf,
    },
}
