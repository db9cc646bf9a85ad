use std::path::Path;

use crate::error::Result;
use crate::models::Measurement;

/// One-time loader for the daily measurements CSV.
///
/// Expected header: `station,date,prcp,tobs`. Empty `prcp`/`tobs` cells
/// deserialize to `None` and are kept that way; a blank precipitation cell
/// is an observation gap, not a dry day.
pub struct MeasurementReader {
    strict: bool,
}

impl MeasurementReader {
    pub fn new() -> Self {
        Self { strict: true }
    }

    /// With strict mode off, rows failing validation (malformed date,
    /// negative precipitation) are skipped instead of aborting the load.
    pub fn with_strict(strict: bool) -> Self {
        Self { strict }
    }

    pub fn read_measurements(&self, path: &Path) -> Result<Vec<Measurement>> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut measurements = Vec::new();

        for row in reader.deserialize() {
            let measurement: Measurement = row?;

            match measurement.check() {
                Ok(()) => measurements.push(measurement),
                Err(error) => {
                    if self.strict {
                        return Err(error);
                    }
                    tracing::debug!(
                        station = %measurement.station_code,
                        date = %measurement.date,
                        "skipping invalid measurement row"
                    );
                }
            }
        }

        Ok(measurements)
    }
}

impl Default for MeasurementReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_measurements_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "station,date,prcp,tobs")?;
        writeln!(temp_file, "USC00519397,2010-01-01,0.08,65")?;
        writeln!(temp_file, "USC00519397,2010-01-02,,63")?;
        writeln!(temp_file, "USC00519397,2010-01-03,0.0,74")?;

        let reader = MeasurementReader::new();
        let measurements = reader.read_measurements(temp_file.path())?;

        assert_eq!(measurements.len(), 3);
        assert_eq!(measurements[0].precipitation, Some(0.08));
        assert_eq!(measurements[0].temperature, Some(65.0));
        // The blank cell stays a gap, distinct from the 0.0 on day three
        assert_eq!(measurements[1].precipitation, None);
        assert_eq!(measurements[2].precipitation, Some(0.0));

        Ok(())
    }

    #[test]
    fn test_duplicate_rows_are_not_deduplicated() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "station,date,prcp,tobs")?;
        writeln!(temp_file, "USC00519397,2010-01-01,0.08,65")?;
        writeln!(temp_file, "USC00519397,2010-01-01,0.08,65")?;

        let reader = MeasurementReader::new();
        let measurements = reader.read_measurements(temp_file.path())?;

        assert_eq!(measurements.len(), 2);

        Ok(())
    }

    #[test]
    fn test_strict_mode_rejects_malformed_date() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "station,date,prcp,tobs")?;
        writeln!(temp_file, "USC00519397,01/01/2010,0.08,65")?;

        let strict = MeasurementReader::new();
        assert!(strict.read_measurements(temp_file.path()).is_err());

        let lenient = MeasurementReader::with_strict(false);
        assert!(lenient.read_measurements(temp_file.path())?.is_empty());

        Ok(())
    }
}
