use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chrono::{Duration, NaiveDate};
use hawaii_climate_api::models::{Measurement, Station};
use hawaii_climate_api::queries::QueryEngine;
use hawaii_climate_api::store::RecordStore;

// Create test data for benchmarking
fn create_test_store(station_count: usize, days: usize) -> RecordStore {
    let mut stations = Vec::with_capacity(station_count);
    let mut measurements = Vec::new();

    let base_date = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();

    for station_index in 1..=station_count {
        let code = format!("USC{:08}", station_index);
        stations.push(Station::new(
            code.clone(),
            format!("Test Station {}", station_index),
            21.0 + (station_index as f64) * 0.01,
            -157.0 - (station_index as f64) * 0.01,
            3.0 + station_index as f64,
        ));

        for day in 0..days {
            let date = (base_date + Duration::days(day as i64))
                .format("%Y-%m-%d")
                .to_string();
            let precipitation = if day % 7 == 0 {
                None
            } else {
                Some((day % 10) as f64 * 0.05)
            };
            let temperature = Some(68.0 + (day % 15) as f64 + station_index as f64 * 0.5);

            measurements
                .push(Measurement::new(code.clone(), date, precipitation, temperature).unwrap());
        }
    }

    RecordStore::new(stations, measurements).unwrap()
}

fn benchmark_most_recent_date(c: &mut Criterion) {
    let store = create_test_store(9, 400);
    let engine = QueryEngine::new(&store);

    c.bench_function("most_recent_date", |b| {
        b.iter(|| black_box(engine.most_recent_date().unwrap()))
    });
}

fn benchmark_station_ranking(c: &mut Criterion) {
    let store = create_test_store(9, 400);
    let engine = QueryEngine::new(&store);

    c.bench_function("station_ranking", |b| {
        b.iter(|| black_box(engine.station_ranking()))
    });
}

fn benchmark_precipitation_series(c: &mut Criterion) {
    let store = create_test_store(9, 400);
    let engine = QueryEngine::new(&store);

    c.bench_function("precipitation_series_trailing_year", |b| {
        b.iter(|| black_box(engine.precipitation_series("2016-06-01", None)))
    });
}

fn benchmark_temperature_stats(c: &mut Criterion) {
    let store = create_test_store(9, 400);
    let engine = QueryEngine::new(&store);

    c.bench_function("temperature_stats_all", |b| {
        b.iter(|| black_box(engine.temperature_stats_all("2016-06-01", Some("2017-01-01")).unwrap()))
    });
}

criterion_group!(
    benches,
    benchmark_most_recent_date,
    benchmark_station_ranking,
    benchmark_precipitation_series,
    benchmark_temperature_stats
);
criterion_main!(benches);
