use serde::de::{self, Deserializer};
use serde_derive::{Deserialize, Serialize};

use crate::fitbit::params::Resource;

use super::common::Passthrough;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct WaterEntry {
    /// Ounces once converted, milliliters as received.
    pub amount: f64,

    #[serde(flatten)]
    pub extra: Passthrough,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct WaterLog {
    pub total: f64,
    pub water: Vec<WaterEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WaterSummary {
    pub water: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WaterResponse {
    pub summary: WaterSummary,
    pub water: Vec<WaterEntry>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SeriesPoint {
    #[serde(rename = "dateTime")]
    pub date_time: String,

    #[serde(deserialize_with = "f64_from_number_or_string")]
    pub value: f64,
}

// Time series values arrive as strings ("1234.5").
fn f64_from_number_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match <NumberOrString as serde::Deserialize>::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("'{}' is not a number", s))),
    }
}

/// Daily values of a `foods-log-{resource}` time series.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct NutritionSeries {
    pub resource: Resource,
    pub points: Vec<SeriesPoint>,
}
