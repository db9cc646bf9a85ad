use crate::error::{ClimateError, Result};
use crate::queries::{QueryEngine, StationActivity, TemperatureSummary};
use crate::store::RecordStore;
use crate::utils::constants::HISTOGRAM_BINS;

#[derive(Debug)]
pub struct PrecipitationSummary {
    pub observations: usize,
    pub missing: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Exploratory analysis over the ingested snapshot: the same numbers the
/// API serves, gathered into one printable report.
#[derive(Debug)]
pub struct ClimateReport {
    pub most_recent_date: String,
    pub window_start: String,
    pub total_stations: usize,
    pub total_measurements: usize,
    pub precipitation: Option<PrecipitationSummary>,
    pub ranking: Vec<StationActivity>,
    pub most_active: StationActivity,
    /// All-time min/avg/max for the most active station; `None` when that
    /// station has no temperature observations at all.
    pub most_active_stats: Option<TemperatureSummary>,
    /// Trailing-window temperature histogram for the most active station.
    pub histogram: Vec<HistogramBin>,
}

pub struct ClimateAnalyzer;

impl ClimateAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, store: &RecordStore) -> Result<ClimateReport> {
        let engine = QueryEngine::new(store);

        let most_recent_date = engine.most_recent_date()?;
        let window_start = engine.one_year_window(&most_recent_date)?;

        let precipitation =
            summarize_precipitation(&engine.precipitation_series(&window_start, None));

        let ranking = engine.station_ranking();
        let most_active = engine.most_active_station()?;

        // All-time stats start at the station's own earliest measurement
        let earliest = store
            .measurements_by_station(&most_active.code)
            .into_iter()
            .map(|m| m.date.clone())
            .min()
            .unwrap_or_else(|| most_recent_date.clone());
        let most_active_stats = match engine.temperature_stats(&most_active.code, &earliest, None)
        {
            Ok(summary) => Some(summary),
            Err(ClimateError::NoData(_)) => None,
            Err(error) => return Err(error),
        };

        let window_temperatures: Vec<f64> = engine
            .temperature_series(&most_active.code, &window_start, None)
            .into_iter()
            .map(|reading| reading.temperature)
            .collect();
        let histogram = build_histogram(&window_temperatures, HISTOGRAM_BINS);

        Ok(ClimateReport {
            most_recent_date,
            window_start,
            total_stations: engine.total_station_count(),
            total_measurements: store.measurement_count(),
            precipitation,
            ranking,
            most_active,
            most_active_stats,
            histogram,
        })
    }
}

impl Default for ClimateAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn summarize_precipitation(
    series: &[crate::queries::PrecipitationReading],
) -> Option<PrecipitationSummary> {
    let values: Vec<f64> = series.iter().filter_map(|r| r.precipitation).collect();
    if values.is_empty() {
        return None;
    }

    let sum: f64 = values.iter().sum();
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    Some(PrecipitationSummary {
        observations: values.len(),
        missing: series.len() - values.len(),
        mean: sum / values.len() as f64,
        min,
        max,
    })
}

fn build_histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if lo == hi {
        return vec![HistogramBin {
            lower: lo,
            upper: hi,
            count: values.len(),
        }];
    }

    let width = (hi - lo) / bins as f64;
    let mut histogram: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: lo + width * i as f64,
            upper: lo + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for &value in values {
        let mut index = ((value - lo) / width) as usize;
        // The maximum lands in the closed last bin
        if index >= bins {
            index = bins - 1;
        }
        histogram[index].count += 1;
    }

    histogram
}

impl ClimateReport {
    pub fn summary(&self) -> String {
        let precipitation = match &self.precipitation {
            Some(p) => format!(
                "{} observations ({} gaps), mean {:.2}, range {:.2} to {:.2}",
                p.observations, p.missing, p.mean, p.min, p.max
            ),
            None => "no precipitation observations in window".to_string(),
        };

        let temperatures = match &self.most_active_stats {
            Some(stats) => format!(
                "min {:.1}, avg {:.1}, max {:.1}",
                stats.min, stats.avg, stats.max
            ),
            None => "no temperature observations".to_string(),
        };

        let mut lines = format!(
            "Climate Analysis\n\
            Stations: {} in roster, {} observed\n\
            Measurements: {} total\n\
            Most recent date: {}\n\
            Trailing window: {} to {}\n\
            Precipitation (window): {}\n\
            Most active station: {} ({} rows)\n\
            Temperatures (all time): {}\n",
            self.total_stations,
            self.ranking.len(),
            self.total_measurements,
            self.most_recent_date,
            self.window_start,
            self.most_recent_date,
            precipitation,
            self.most_active.code,
            self.most_active.measurement_count,
            temperatures,
        );

        if !self.histogram.is_empty() {
            lines.push_str("Temperature histogram (window):\n");
            for bin in &self.histogram {
                lines.push_str(&format!(
                    "  {:6.1} - {:6.1} | {:<40} {}\n",
                    bin.lower,
                    bin.upper,
                    "#".repeat(bin.count.min(40)),
                    bin.count
                ));
            }
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Measurement, Station};

    fn store() -> RecordStore {
        let stations = vec![
            Station::new("A".to_string(), "Alpha".to_string(), 21.3, -157.8, 3.0),
            Station::new("B".to_string(), "Bravo".to_string(), 21.4, -157.9, 14.6),
        ];
        let measurements = vec![
            Measurement::new("A".to_string(), "2021-01-01".to_string(), Some(0.0), Some(70.0))
                .unwrap(),
            Measurement::new("A".to_string(), "2021-01-02".to_string(), None, Some(72.0))
                .unwrap(),
            Measurement::new("B".to_string(), "2021-01-01".to_string(), Some(1.0), Some(65.0))
                .unwrap(),
        ];

        RecordStore::new(stations, measurements).unwrap()
    }

    #[test]
    fn test_analyze_report() {
        let store = store();
        let report = ClimateAnalyzer::new().analyze(&store).unwrap();

        assert_eq!(report.most_recent_date, "2021-01-02");
        assert_eq!(report.window_start, "2020-01-03");
        assert_eq!(report.total_stations, 2);
        assert_eq!(report.most_active.code, "A");
        assert_eq!(report.most_active_stats.unwrap().avg, 71.0);

        let precipitation = report.precipitation.as_ref().unwrap();
        assert_eq!(precipitation.observations, 2);
        assert_eq!(precipitation.missing, 1);

        let rendered = report.summary();
        assert!(rendered.contains("Most active station: A"));
    }

    #[test]
    fn test_analyze_empty_store_fails() {
        let store = RecordStore::new(vec![], vec![]).unwrap();

        assert!(ClimateAnalyzer::new().analyze(&store).is_err());
    }

    #[test]
    fn test_histogram_counts_every_value_once() {
        let values = vec![60.0, 61.0, 62.0, 70.0, 80.0];
        let histogram = build_histogram(&values, 4);

        let total: usize = histogram.iter().map(|b| b.count).sum();
        assert_eq!(total, values.len());
        assert_eq!(histogram.len(), 4);
    }

    #[test]
    fn test_histogram_constant_series() {
        let histogram = build_histogram(&[70.0, 70.0], 12);

        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram[0].count, 2);
    }
}
