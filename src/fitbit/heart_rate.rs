use crate::{
    data_types::heart::{DailyZones, HeartActivities},
    error::Result,
    logln,
    processors::heart::HeartProcessor,
};

use super::{api::FitbitApi, params::Period};

pub struct HeartRate<'a> {
    api: &'a FitbitApi,
}

impl<'a> HeartRate<'a> {
    const CC: &'static str = "HeartRate";

    pub fn new(api: &'a FitbitApi) -> Self {
        Self { api }
    }

    /// Daily zones over `period` ending at `date`, with the intraday series when granted.
    pub fn heart_rate(&self, date: &str, period: &str) -> Result<HeartActivities> {
        let period: Period = period.parse().inspect_err(|e| logln!("{}", e))?;

        let resp = self
            .api
            .fetch(&format!("/activities/heart/date/{}/{}.json", date, period))?;

        HeartProcessor::parse_activities(&resp)
    }

    pub fn heart_rate_range(&self, start_date: &str, end_date: &str) -> Result<Vec<DailyZones>> {
        let resp = self.api.fetch(&format!(
            "/activities/heart/date/{}/{}.json",
            start_date, end_date
        ))?;

        Ok(HeartProcessor::parse_activities(&resp)?.zones)
    }
}
