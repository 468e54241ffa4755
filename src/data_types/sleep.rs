use std::ops::Index;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_derive::{Deserialize, Serialize};

use super::common::Passthrough;

pub const WAKE_LEVEL: &str = "wake";

/// One `levels.data` (or `levels.shortData`) item of a sleep record.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StageEntry {
    pub level: String,
    pub seconds: i64,

    #[serde(flatten)]
    pub extra: Passthrough,
}

impl StageEntry {
    pub fn new(level: &str, seconds: i64) -> Self {
        Self {
            level: level.to_string(),
            seconds,
            extra: Passthrough::new(),
        }
    }

    pub fn is_wake(&self) -> bool {
        self.level == WAKE_LEVEL
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SleptEntry {
    #[serde(flatten)]
    pub entry: StageEntry,
    pub seconds_slept: i64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CumulativeEntry {
    #[serde(flatten)]
    pub entry: StageEntry,
    pub total_seconds: i64,
}

/// Serialized as `[seconds, fraction]`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(into = "(i64, f64)", from = "(i64, f64)")]
pub struct StageSummary {
    pub seconds: i64,
    pub fraction: f64,
}

impl From<StageSummary> for (i64, f64) {
    fn from(summary: StageSummary) -> Self {
        (summary.seconds, summary.fraction)
    }
}

impl From<(i64, f64)> for StageSummary {
    fn from((seconds, fraction): (i64, f64)) -> Self {
        Self { seconds, fraction }
    }
}

/// Stage summaries in the order the stages first appear; serialized as a map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stages(Vec<(String, StageSummary)>);

impl Stages {
    pub fn get(&self, label: &str) -> Option<&StageSummary> {
        self.0
            .iter()
            .find(|(stage, _)| stage == label)
            .map(|(_, summary)| summary)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(stage, _)| stage.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &StageSummary> {
        self.0.iter().map(|(_, summary)| summary)
    }
}

impl FromIterator<(String, StageSummary)> for Stages {
    fn from_iter<I: IntoIterator<Item = (String, StageSummary)>>(iter: I) -> Self {
        Stages(iter.into_iter().collect())
    }
}

impl Index<&str> for Stages {
    type Output = StageSummary;

    fn index(&self, label: &str) -> &StageSummary {
        match self.get(label) {
            Some(summary) => summary,
            None => panic!("no sleep stage '{}'", label),
        }
    }
}

impl Serialize for Stages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (stage, summary) in &self.0 {
            map.serialize_entry(stage, summary)?;
        }
        map.end()
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct SleepStats {
    pub entries: Vec<SleptEntry>,
    pub stages: Stages,
}

/// Which stage series of a sleep record to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StageData {
    #[default]
    Regular,
    Short,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SleepLevels {
    pub data: Vec<StageEntry>,

    #[serde(rename = "shortData", default)]
    pub short_data: Option<Vec<StageEntry>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SleepRecord {
    #[serde(rename = "logId", default)]
    pub log_id: Option<i64>,
    pub levels: SleepLevels,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SleepResponse {
    pub sleep: Vec<SleepRecord>,
}
