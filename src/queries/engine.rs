use std::collections::HashMap;

use serde::Serialize;

use crate::error::{ClimateError, Result};
use crate::models::Measurement;
use crate::store::RecordStore;
use crate::utils::dates::one_year_before;

/// One point of the station-agnostic precipitation series. A `None`
/// precipitation is a recorded observation gap, never a zero reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecipitationReading {
    pub date: String,
    pub precipitation: Option<f64>,
}

/// One point of a single station's temperature series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureReading {
    pub date: String,
    pub temperature: f64,
}

/// Ranking entry: how many measurement rows a station produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationActivity {
    pub code: String,
    pub measurement_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureSummary {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

/// Pure read-only computations over a borrowed [`RecordStore`] view.
///
/// Every operation is deterministic given the store contents and its inputs,
/// never blocks, and is safe to call concurrently from many request tasks.
/// Date arguments are assumed well-formed `YYYY-MM-DD` strings; callers
/// validate at the API boundary or at load.
pub struct QueryEngine<'a> {
    store: &'a RecordStore,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Lexical maximum of all measurement dates. Lexical comparison is
    /// calendar comparison here because dates are fixed-width ISO-8601.
    pub fn most_recent_date(&self) -> Result<String> {
        self.store
            .all_measurements()
            .iter()
            .map(|m| m.date.as_str())
            .max()
            .map(str::to_string)
            .ok_or_else(|| {
                ClimateError::EmptyDataset("no measurements ingested".to_string())
            })
    }

    /// The lower bound of the trailing-12-month window: `reference` minus
    /// 365 calendar days.
    pub fn one_year_window(&self, reference: &str) -> Result<String> {
        one_year_before(reference)
    }

    /// Station-agnostic `(date, precipitation)` series over a date window,
    /// ascending by date. Rows without a precipitation observation are kept
    /// with `None` so callers can tell a gap from a dry day.
    pub fn precipitation_series(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Vec<PrecipitationReading> {
        let mut series: Vec<PrecipitationReading> = self
            .store
            .all_measurements()
            .iter()
            .filter(|m| in_window(&m.date, start, end))
            .map(|m| PrecipitationReading {
                date: m.date.clone(),
                precipitation: m.precipitation,
            })
            .collect();

        series.sort_by(|a, b| a.date.cmp(&b.date));
        series
    }

    /// Stations ranked by observed activity, descending by measurement count
    /// with ties broken by ascending code. Stations with zero measurements
    /// do not appear: this ranks observed rows, not the roster.
    pub fn station_ranking(&self) -> Vec<StationActivity> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for measurement in self.store.all_measurements() {
            *counts.entry(measurement.station_code.as_str()).or_default() += 1;
        }

        let mut ranking: Vec<StationActivity> = counts
            .into_iter()
            .map(|(code, measurement_count)| StationActivity {
                code: code.to_string(),
                measurement_count,
            })
            .collect();

        ranking.sort_by(|a, b| {
            b.measurement_count
                .cmp(&a.measurement_count)
                .then_with(|| a.code.cmp(&b.code))
        });
        ranking
    }

    pub fn most_active_station(&self) -> Result<StationActivity> {
        self.station_ranking().into_iter().next().ok_or_else(|| {
            ClimateError::EmptyDataset("no measurements to rank stations by".to_string())
        })
    }

    /// Min/max/avg over one station's temperature observations in a date
    /// window. Rows without a temperature are excluded; an empty filtered
    /// set is `NoData`, never a zeroed or NaN summary.
    pub fn temperature_stats(
        &self,
        station_code: &str,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureSummary> {
        let measurements = self.store.measurements_by_station(station_code);
        summarize_temperatures(measurements.into_iter(), start, end).ok_or_else(|| {
            ClimateError::NoData(format!(
                "no temperature observations for station '{}' in the requested window",
                station_code
            ))
        })
    }

    /// Min/max/avg over every station's temperature observations in a date
    /// window.
    pub fn temperature_stats_all(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureSummary> {
        summarize_temperatures(self.store.all_measurements().iter(), start, end).ok_or_else(
            || {
                ClimateError::NoData(
                    "no temperature observations in the requested window".to_string(),
                )
            },
        )
    }

    /// `(date, temperature)` series for one station over a date window,
    /// ascending by date; rows without a temperature are excluded.
    pub fn temperature_series(
        &self,
        station_code: &str,
        start: &str,
        end: Option<&str>,
    ) -> Vec<TemperatureReading> {
        let mut series: Vec<TemperatureReading> = self
            .store
            .measurements_by_station(station_code)
            .into_iter()
            .filter(|m| in_window(&m.date, start, end))
            .filter_map(|m| {
                m.temperature.map(|temperature| TemperatureReading {
                    date: m.date.clone(),
                    temperature,
                })
            })
            .collect();

        series.sort_by(|a, b| a.date.cmp(&b.date));
        series
    }

    /// Roster size, independent of measurement activity.
    pub fn total_station_count(&self) -> usize {
        self.store.station_count()
    }
}

/// Closed-below, optionally closed-above window test. A `start` past `end`
/// matches nothing, which makes vacuous ranges empty rather than an error.
fn in_window(date: &str, start: &str, end: Option<&str>) -> bool {
    date >= start && end.map_or(true, |e| date <= e)
}

fn summarize_temperatures<'m>(
    measurements: impl Iterator<Item = &'m Measurement>,
    start: &str,
    end: Option<&str>,
) -> Option<TemperatureSummary> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    let mut count = 0usize;

    for measurement in measurements {
        if !in_window(&measurement.date, start, end) {
            continue;
        }
        if let Some(temperature) = measurement.temperature {
            min = min.min(temperature);
            max = max.max(temperature);
            sum += temperature;
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }

    Some(TemperatureSummary {
        min,
        max,
        avg: sum / count as f64,
    })
}
