use crate::{
    data_types::sleep::{SleepStats, StageData},
    error::Result,
    logln,
    processors::sleep::SleepProcessor,
};

use super::{api::FitbitApi, params::SleepListQuery};

/// Sleep logs reduced to stage statistics, one `SleepStats` per sleep record.
pub struct Sleep<'a> {
    api: &'a FitbitApi,
    stage_data: StageData,
}

impl<'a> Sleep<'a> {
    const CC: &'static str = "Sleep";

    pub fn new(api: &'a FitbitApi) -> Self {
        Self {
            api,
            stage_data: StageData::Regular,
        }
    }

    /// Read `levels.shortData` (short wakes) instead of `levels.data`.
    pub fn with_short_data(mut self) -> Self {
        self.stage_data = StageData::Short;
        self
    }

    pub fn by_date(&self, date: &str) -> Result<Vec<SleepStats>> {
        let resp = self.api.fetch(&format!("/sleep/date/{}.json", date))?;

        SleepProcessor::parse_sleep_stats(&resp, self.stage_data)
    }

    pub fn by_date_range(&self, start_date: &str, end_date: &str) -> Result<Vec<SleepStats>> {
        let resp = self
            .api
            .fetch(&format!("/sleep/date/{}/{}.json", start_date, end_date))?;

        SleepProcessor::parse_sleep_stats(&resp, self.stage_data)
    }

    pub fn list(&self, query: &SleepListQuery) -> Result<Vec<SleepStats>> {
        let path = query.path().inspect_err(|e| logln!("{}", e))?;
        let resp = self.api.fetch(&path)?;

        SleepProcessor::parse_sleep_stats(&resp, self.stage_data)
    }
}
