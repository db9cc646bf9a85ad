/// Default source file names
pub const STATIONS_FILE: &str = "hawaii_stations.csv";
pub const MEASUREMENTS_FILE: &str = "hawaii_measurements.csv";

/// Fixed-width date shape required for lexical comparison
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the trailing window used by the "last 12 months" queries
pub const TRAILING_WINDOW_DAYS: i64 = 365;

/// Server defaults
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Bin count for the temperature histogram in the analysis report
pub const HISTOGRAM_BINS: usize = 12;
