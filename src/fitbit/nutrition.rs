use crate::{
    data_types::nutrition::{NutritionSeries, WaterLog},
    error::Result,
    logln,
    processors::water::WaterConverter,
};

use super::{
    api::FitbitApi,
    params::{Period, Resource},
};

pub struct Nutrition<'a> {
    api: &'a FitbitApi,
}

impl<'a> Nutrition<'a> {
    const CC: &'static str = "Nutrition";

    pub fn new(api: &'a FitbitApi) -> Self {
        Self { api }
    }

    /// Summary and entries of one day's water log, in ounces.
    pub fn water_log(&self, date: &str) -> Result<WaterLog> {
        let resp = self.api.fetch(&format!("/foods/log/water/date/{}.json", date))?;

        WaterConverter::water_log(&resp)
    }

    /// `resource` series ending at `date` (`YYYY-MM-DD` or `today`) over `period`.
    pub fn by_date(&self, resource: &str, date: &str, period: &str) -> Result<NutritionSeries> {
        let resource: Resource = resource.parse().inspect_err(|e| logln!("{}", e))?;
        let period: Period = period.parse().inspect_err(|e| logln!("{}", e))?;

        let resp = self.api.fetch(&format!(
            "/foods/log/{}/date/{}/{}.json",
            resource, date, period
        ))?;

        WaterConverter::nutrition_series(resource, &resp)
    }

    /// Daily summary values of `resource` between two dates.
    pub fn date_range(&self, resource: &str, start_date: &str, end_date: &str) -> Result<NutritionSeries> {
        let resource: Resource = resource.parse().inspect_err(|e| logln!("{}", e))?;

        let resp = self.api.fetch(&format!(
            "/foods/log/{}/date/{}/{}.json",
            resource, start_date, end_date
        ))?;

        WaterConverter::nutrition_series(resource, &resp)
    }
}
