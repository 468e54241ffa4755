use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HeartRateZone {
    pub name: String,
    pub min: i64,
    pub max: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes: Option<i64>,

    #[serde(rename = "caloriesOut", default, skip_serializing_if = "Option::is_none")]
    pub calories_out: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct IntradayPoint {
    pub time: String,
    pub value: i64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DailyZones {
    #[serde(rename = "dateTime")]
    pub date_time: String,
    pub zones: Vec<HeartRateZone>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct HeartActivities {
    pub zones: Vec<DailyZones>,
    pub intraday: Vec<IntradayPoint>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HeartDayValue {
    #[serde(rename = "heartRateZones")]
    pub heart_rate_zones: Vec<HeartRateZone>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HeartDay {
    #[serde(rename = "dateTime")]
    pub date_time: String,
    pub value: HeartDayValue,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HeartIntraday {
    #[serde(default)]
    pub dataset: Vec<IntradayPoint>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HeartResponse {
    #[serde(rename = "activities-heart")]
    pub activities: Vec<HeartDay>,

    #[serde(rename = "activities-heart-intraday", default)]
    pub intraday: Option<HeartIntraday>,
}
