use std::collections::{HashMap, HashSet};

use crate::store::RecordStore;

#[derive(Debug, Clone)]
pub struct IntegrityReport {
    pub total_measurements: usize,
    pub roster_stations: usize,
    pub observed_stations: usize,
    /// Station codes seen in measurements but absent from the roster. The
    /// reference is soft, so these are reported rather than rejected.
    pub orphan_codes: Vec<String>,
    pub missing_precipitation: usize,
    pub missing_temperature: usize,
    pub station_statistics: HashMap<String, StationStatistics>,
}

#[derive(Debug, Clone, Default)]
pub struct StationStatistics {
    pub total_measurements: usize,
    pub missing_precipitation: usize,
    pub missing_temperature: usize,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

pub struct IntegrityChecker;

impl IntegrityChecker {
    pub fn new() -> Self {
        Self
    }

    pub fn check_integrity(&self, store: &RecordStore) -> IntegrityReport {
        let roster: HashSet<&str> = store
            .all_stations()
            .iter()
            .map(|s| s.code.as_str())
            .collect();

        let mut station_statistics: HashMap<String, StationStatistics> = HashMap::new();
        let mut orphans: HashSet<String> = HashSet::new();
        let mut missing_precipitation = 0;
        let mut missing_temperature = 0;

        for measurement in store.all_measurements() {
            if !roster.contains(measurement.station_code.as_str()) {
                orphans.insert(measurement.station_code.clone());
            }
            if !measurement.has_precipitation() {
                missing_precipitation += 1;
            }
            if !measurement.has_temperature() {
                missing_temperature += 1;
            }

            let stats = station_statistics
                .entry(measurement.station_code.clone())
                .or_default();
            stats.total_measurements += 1;
            if !measurement.has_precipitation() {
                stats.missing_precipitation += 1;
            }
            if !measurement.has_temperature() {
                stats.missing_temperature += 1;
            }

            let date = measurement.date.as_str();
            if stats.first_date.as_deref().map_or(true, |d| date < d) {
                stats.first_date = Some(date.to_string());
            }
            if stats.last_date.as_deref().map_or(true, |d| date > d) {
                stats.last_date = Some(date.to_string());
            }
        }

        let mut orphan_codes: Vec<String> = orphans.into_iter().collect();
        orphan_codes.sort();

        IntegrityReport {
            total_measurements: store.measurement_count(),
            roster_stations: store.station_count(),
            observed_stations: station_statistics.len(),
            orphan_codes,
            missing_precipitation,
            missing_temperature,
            station_statistics,
        }
    }

    pub fn generate_summary(&self, report: &IntegrityReport) -> String {
        let orphans = if report.orphan_codes.is_empty() {
            "none".to_string()
        } else {
            report.orphan_codes.join(", ")
        };

        format!(
            "Integrity Report\n\
            Measurements: {} total\n\
            Stations: {} in roster, {} observed\n\
            Orphan station codes: {}\n\
            Missing precipitation: {} rows\n\
            Missing temperature: {} rows",
            report.total_measurements,
            report.roster_stations,
            report.observed_stations,
            orphans,
            report.missing_precipitation,
            report.missing_temperature,
        )
    }
}

impl Default for IntegrityChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Measurement, Station};

    #[test]
    fn test_check_integrity() {
        let store = RecordStore::new(
            vec![Station::new(
                "A".to_string(),
                "Alpha".to_string(),
                21.3,
                -157.8,
                3.0,
            )],
            vec![
                Measurement::new("A".to_string(), "2021-01-02".to_string(), None, Some(70.0))
                    .unwrap(),
                Measurement::new("A".to_string(), "2021-01-01".to_string(), Some(0.1), None)
                    .unwrap(),
                Measurement::new("GHOST".to_string(), "2021-01-01".to_string(), None, None)
                    .unwrap(),
            ],
        )
        .unwrap();

        let checker = IntegrityChecker::new();
        let report = checker.check_integrity(&store);

        assert_eq!(report.total_measurements, 3);
        assert_eq!(report.roster_stations, 1);
        assert_eq!(report.observed_stations, 2);
        assert_eq!(report.orphan_codes, vec!["GHOST".to_string()]);
        assert_eq!(report.missing_precipitation, 2);
        assert_eq!(report.missing_temperature, 2);

        let a_stats = &report.station_statistics["A"];
        assert_eq!(a_stats.total_measurements, 2);
        assert_eq!(a_stats.first_date.as_deref(), Some("2021-01-01"));
        assert_eq!(a_stats.last_date.as_deref(), Some("2021-01-02"));

        let summary = checker.generate_summary(&report);
        assert!(summary.contains("Orphan station codes: GHOST"));
    }
}
