use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Station {
    /// Natural key, e.g. "USC00519397". Unique across the roster.
    #[serde(rename = "station")]
    #[validate(length(min = 1))]
    pub code: String,

    #[validate(length(min = 1))]
    pub name: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    pub elevation: f64,
}

impl Station {
    pub fn new(code: String, name: String, latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            code,
            name,
            latitude,
            longitude,
            elevation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_validation() {
        let station = Station::new(
            "USC00519397".to_string(),
            "WAIKIKI 717.2, HI US".to_string(),
            21.2716,
            -157.8168,
            3.0,
        );

        assert!(station.validate().is_ok());
    }

    #[test]
    fn test_invalid_coordinates() {
        let station = Station::new(
            "USC00519397".to_string(),
            "Invalid Station".to_string(),
            91.0, // Invalid latitude
            -157.8168,
            3.0,
        );

        assert!(station.validate().is_err());
    }

    #[test]
    fn test_empty_code_rejected() {
        let station = Station::new(String::new(), "Nameless".to_string(), 21.3, -157.8, 0.9);

        assert!(station.validate().is_err());
    }
}
