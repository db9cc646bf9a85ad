use std::collections::{HashMap, HashSet};

use crate::error::{ClimateError, Result};
use crate::models::{Measurement, Station};

/// Immutable snapshot of the ingested dataset.
///
/// Built once at startup and never mutated afterwards, so it can be shared
/// read-only across request handlers without locking. Insertion order of both
/// entity sets is preserved.
#[derive(Debug)]
pub struct RecordStore {
    stations: Vec<Station>,
    measurements: Vec<Measurement>,
    by_station: HashMap<String, Vec<usize>>,
}

impl RecordStore {
    /// Take ownership of the loaded entity sets and index measurements by
    /// station code. Duplicate station codes violate the roster invariant
    /// and fail construction.
    pub fn new(stations: Vec<Station>, measurements: Vec<Measurement>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(stations.len());
        for station in &stations {
            if !seen.insert(station.code.clone()) {
                return Err(ClimateError::DuplicateStation {
                    code: station.code.clone(),
                });
            }
        }

        let mut by_station: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, measurement) in measurements.iter().enumerate() {
            by_station
                .entry(measurement.station_code.clone())
                .or_default()
                .push(index);
        }

        Ok(Self {
            stations,
            measurements,
            by_station,
        })
    }

    pub fn all_stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn all_measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// All measurements recorded for a station, in source order. Unknown
    /// codes and stations without measurements both yield an empty sequence.
    pub fn measurements_by_station(&self, code: &str) -> Vec<&Measurement> {
        self.by_station
            .get(code)
            .map(|indices| indices.iter().map(|&i| &self.measurements[i]).collect())
            .unwrap_or_default()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn measurement_count(&self) -> usize {
        self.measurements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(code: &str) -> Station {
        Station::new(code.to_string(), format!("Station {}", code), 21.3, -157.8, 3.0)
    }

    fn measurement(code: &str, date: &str) -> Measurement {
        Measurement::new(code.to_string(), date.to_string(), Some(0.1), Some(75.0)).unwrap()
    }

    #[test]
    fn test_indexes_measurements_by_station() {
        let store = RecordStore::new(
            vec![station("A"), station("B")],
            vec![
                measurement("A", "2021-01-01"),
                measurement("B", "2021-01-01"),
                measurement("A", "2021-01-02"),
            ],
        )
        .unwrap();

        assert_eq!(store.measurements_by_station("A").len(), 2);
        assert_eq!(store.measurements_by_station("B").len(), 1);
        assert_eq!(store.station_count(), 2);
        assert_eq!(store.measurement_count(), 3);
    }

    #[test]
    fn test_unknown_station_yields_empty() {
        let store = RecordStore::new(vec![station("A")], vec![]).unwrap();

        assert!(store.measurements_by_station("NOPE").is_empty());
    }

    #[test]
    fn test_duplicate_station_code_rejected() {
        let result = RecordStore::new(vec![station("A"), station("A")], vec![]);

        assert!(matches!(
            result,
            Err(ClimateError::DuplicateStation { .. })
        ));
    }

    #[test]
    fn test_orphan_measurements_are_kept() {
        // The station reference is soft: measurements for codes missing from
        // the roster are stored and queryable.
        let store = RecordStore::new(
            vec![station("A")],
            vec![measurement("GHOST", "2021-01-01")],
        )
        .unwrap();

        assert_eq!(store.measurements_by_station("GHOST").len(), 1);
    }
}
