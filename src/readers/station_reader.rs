use std::path::Path;

use validator::Validate;

use crate::error::Result;
use crate::models::Station;

/// One-time loader for the station roster CSV.
///
/// Expected header: `station,name,latitude,longitude,elevation`.
pub struct StationReader {
    strict: bool,
}

impl StationReader {
    pub fn new() -> Self {
        Self { strict: true }
    }

    /// With strict mode off, rows failing field validation are skipped
    /// instead of aborting the load.
    pub fn with_strict(strict: bool) -> Self {
        Self { strict }
    }

    pub fn read_stations(&self, path: &Path) -> Result<Vec<Station>> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut stations = Vec::new();

        for row in reader.deserialize() {
            let station: Station = row?;

            match station.validate() {
                Ok(()) => stations.push(station),
                Err(errors) => {
                    if self.strict {
                        return Err(errors.into());
                    }
                    tracing::debug!(code = %station.code, "skipping invalid station row");
                }
            }
        }

        Ok(stations)
    }
}

impl Default for StationReader {
    fn default() -> Self {
        Self::new()
    }
}
