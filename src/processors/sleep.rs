use serde_json::Value;

use crate::{
    data_types::sleep::{
        CumulativeEntry, SleepResponse, SleepStats, SleptEntry, StageData, StageEntry,
        StageSummary,
    },
    error::{ApiError, Result},
};

use super::parse_response;

pub struct SleepProcessor;

impl SleepProcessor {
    /// Stage series of every record under `sleep`, in response order.
    pub fn stage_series(raw: &Value, stage_data: StageData) -> Result<Vec<Vec<StageEntry>>> {
        let resp: SleepResponse = parse_response(raw, "sleep logs")?;

        resp.sleep
            .into_iter()
            .map(|record| match stage_data {
                StageData::Regular => Ok(record.levels.data),
                StageData::Short => record.levels.short_data.ok_or_else(|| {
                    ApiError::MalformedResponse(format!(
                        "sleep record {:?} has no levels.shortData",
                        record.log_id
                    ))
                }),
            })
            .collect()
    }

    /// Running `seconds_slept` that wake periods do not advance, plus time and share per stage.
    pub fn sleep_stats(entries: Vec<StageEntry>) -> SleepStats {
        let mut seconds_slept = 0;
        // (label, seconds) in first-seen order
        let mut totals: Vec<(String, i64)> = Vec::new();
        let mut slept = Vec::with_capacity(entries.len());

        for entry in entries {
            if !entry.is_wake() {
                seconds_slept += entry.seconds;
            }
            match totals.iter_mut().find(|(label, _)| *label == entry.level) {
                Some((_, spent)) => *spent += entry.seconds,
                None => totals.push((entry.level.clone(), entry.seconds)),
            }

            slept.push(SleptEntry {
                entry,
                seconds_slept,
            });
        }

        let total_time_spent: i64 = totals.iter().map(|(_, spent)| spent).sum();
        let stages = totals
            .into_iter()
            .map(|(label, spent)| {
                let fraction = if total_time_spent == 0 {
                    0.0
                } else {
                    spent as f64 / total_time_spent as f64
                };

                (
                    label,
                    StageSummary {
                        seconds: spent,
                        fraction,
                    },
                )
            })
            .collect();

        SleepStats {
            entries: slept,
            stages,
        }
    }

    /// Running `total_seconds` over every entry, wake included.
    pub fn cumulative_seconds(entries: Vec<StageEntry>) -> Vec<CumulativeEntry> {
        let mut total_seconds = 0;

        entries
            .into_iter()
            .map(|entry| {
                total_seconds += entry.seconds;
                CumulativeEntry {
                    entry,
                    total_seconds,
                }
            })
            .collect()
    }

    pub fn parse_sleep_stats(raw: &Value, stage_data: StageData) -> Result<Vec<SleepStats>> {
        Ok(SleepProcessor::stage_series(raw, stage_data)?
            .into_iter()
            .map(SleepProcessor::sleep_stats)
            .collect())
    }

    pub fn parse_cumulative(raw: &Value, stage_data: StageData) -> Result<Vec<Vec<CumulativeEntry>>> {
        Ok(SleepProcessor::stage_series(raw, stage_data)?
            .into_iter()
            .map(SleepProcessor::cumulative_seconds)
            .collect())
    }
}
