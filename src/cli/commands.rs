use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use crate::analyzers::ClimateAnalyzer;
use crate::api;
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::processors::IntegrityChecker;
use crate::readers::{MeasurementReader, StationReader};
use crate::store::RecordStore;

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Commands::Serve {
            host,
            port,
            stations_file,
            measurements_file,
        } => {
            let store = load_store(&stations_file, &measurements_file, true)?;
            println!(
                "Loaded {} stations and {} measurements",
                store.station_count(),
                store.measurement_count()
            );

            api::serve(store, &host, port).await?;
        }

        Commands::Analyze {
            stations_file,
            measurements_file,
        } => {
            let store = load_store(&stations_file, &measurements_file, true)?;

            let analyzer = ClimateAnalyzer::new();
            let report = analyzer.analyze(&store)?;
            println!("\n{}", report.summary());
        }

        Commands::Validate {
            stations_file,
            measurements_file,
        } => {
            // Lenient load so every suspicious row is reported, not aborted on
            let store = load_store(&stations_file, &measurements_file, false)?;

            let checker = IntegrityChecker::new();
            let report = checker.check_integrity(&store);
            println!("\n{}", checker.generate_summary(&report));

            if report.orphan_codes.is_empty() {
                println!("✅ All measurements reference rostered stations");
            } else {
                println!(
                    "⚠️  Found {} station codes outside the roster",
                    report.orphan_codes.len()
                );
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn load_store(stations_file: &Path, measurements_file: &Path, strict: bool) -> Result<RecordStore> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message("Loading dataset...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let stations = StationReader::with_strict(strict).read_stations(stations_file)?;
    let measurements =
        MeasurementReader::with_strict(strict).read_measurements(measurements_file)?;
    let store = RecordStore::new(stations, measurements)?;

    spinner.finish_and_clear();

    Ok(store)
}
