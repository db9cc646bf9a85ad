pub mod engine;

pub use engine::{
    PrecipitationReading, QueryEngine, StationActivity, TemperatureReading, TemperatureSummary,
};
