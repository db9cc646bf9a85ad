use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ClimateError, Result};
use crate::utils::dates::is_iso_date;

/// One dated observation row for a station.
///
/// Dates are held as fixed-width ISO-8601 `YYYY-MM-DD` strings and compared
/// lexically throughout; the fixed width is what makes lexical order equal
/// calendar order, so any other date shape is rejected at load.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Measurement {
    /// Soft reference to a `Station::code`; not required to exist in the roster.
    #[serde(rename = "station")]
    pub station_code: String,

    pub date: String,

    /// Missing means "no observation" and is distinct from `0.0`.
    #[serde(rename = "prcp")]
    #[validate(range(min = 0.0))]
    pub precipitation: Option<f64>,

    #[serde(rename = "tobs")]
    pub temperature: Option<f64>,
}

impl Measurement {
    pub fn new(
        station_code: String,
        date: String,
        precipitation: Option<f64>,
        temperature: Option<f64>,
    ) -> Result<Self> {
        let measurement = Self {
            station_code,
            date,
            precipitation,
            temperature,
        };
        measurement.check()?;

        Ok(measurement)
    }

    /// Field-level validation plus the date-shape invariant.
    pub fn check(&self) -> Result<()> {
        self.validate()?;

        if !is_iso_date(&self.date) {
            return Err(ClimateError::InvalidFormat(format!(
                "Measurement for '{}' has malformed date '{}'",
                self.station_code, self.date
            )));
        }

        Ok(())
    }

    pub fn has_precipitation(&self) -> bool {
        self.precipitation.is_some()
    }

    pub fn has_temperature(&self) -> bool {
        self.temperature.is_some()
    }
}
