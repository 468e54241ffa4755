use serde_json::Value;

use crate::{
    data_types::heart::{DailyZones, HeartActivities, HeartResponse},
    error::Result,
};

use super::parse_response;

pub struct HeartProcessor;

impl HeartProcessor {
    /// Zones of each day in `activities-heart`, plus the intraday dataset when present.
    pub fn parse_activities(raw: &Value) -> Result<HeartActivities> {
        let resp: HeartResponse = parse_response(raw, "heart activities")?;

        let zones = resp
            .activities
            .into_iter()
            .map(|day| DailyZones {
                date_time: day.date_time,
                zones: day.value.heart_rate_zones,
            })
            .collect();

        let intraday = resp.intraday.map(|i| i.dataset).unwrap_or_default();

        Ok(HeartActivities { zones, intraday })
    }
}
