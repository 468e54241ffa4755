use serde_json::Value;

use crate::{
    data_types::sleep::{CumulativeEntry, StageData},
    error::Result,
    logln,
    processors::sleep::SleepProcessor,
};

use super::{api::FitbitApi, params::SleepListQuery};

/// Raw sleep logs; `parse` adds the running `total_seconds` column.
pub struct SleepLogs<'a> {
    api: &'a FitbitApi,
}

impl<'a> SleepLogs<'a> {
    const CC: &'static str = "SleepLogs";

    pub fn new(api: &'a FitbitApi) -> Self {
        Self { api }
    }

    pub fn by_date(&self, date: &str) -> Result<Value> {
        self.api.fetch(&format!("/sleep/date/{}.json", date))
    }

    pub fn by_date_range(&self, start_date: &str, end_date: &str) -> Result<Value> {
        self.api
            .fetch(&format!("/sleep/date/{}/{}.json", start_date, end_date))
    }

    /// Like `by_date_range` but paginated; the sort order follows the given bound.
    pub fn list(&self, query: &SleepListQuery) -> Result<Value> {
        let path = query
            .clone()
            .with_implied_sort()
            .path()
            .inspect_err(|e| logln!("{}", e))?;

        self.api.fetch(&path)
    }

    pub fn parse(sleep_logs: &Value, stage_data: StageData) -> Result<Vec<Vec<CumulativeEntry>>> {
        SleepProcessor::parse_cumulative(sleep_logs, stage_data)
    }
}
