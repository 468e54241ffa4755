use std::{fmt::Display, str::FromStr};

use serde_derive::Serialize;

use crate::error::{ApiError, Result};

pub const SUPPORTED_RESOURCE: &[&str] = &["caloriesIn", "water"];
pub const SUPPORTED_RANGE: &[&str] = &["1d", "7d", "30d", "1w", "1m", "3m", "6m", "1y"];
pub const SUPPORTED_SORT: &[&str] = &["asc", "desc"];

pub const MAX_LIST_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Resource {
    #[serde(rename = "caloriesIn")]
    CaloriesIn,
    #[serde(rename = "water")]
    Water,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::CaloriesIn => "caloriesIn",
            Resource::Water => "water",
        }
    }
}

impl FromStr for Resource {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "caloriesIn" => Ok(Resource::CaloriesIn),
            "water" => Ok(Resource::Water),
            _ => Err(ApiError::Unsupported {
                kind: "Resource",
                value: s.to_string(),
                supported: SUPPORTED_RESOURCE,
            }),
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    OneDay,
    SevenDays,
    ThirtyDays,
    OneWeek,
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::OneDay => "1d",
            Period::SevenDays => "7d",
            Period::ThirtyDays => "30d",
            Period::OneWeek => "1w",
            Period::OneMonth => "1m",
            Period::ThreeMonths => "3m",
            Period::SixMonths => "6m",
            Period::OneYear => "1y",
        }
    }
}

impl FromStr for Period {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1d" => Ok(Period::OneDay),
            "7d" => Ok(Period::SevenDays),
            "30d" => Ok(Period::ThirtyDays),
            "1w" => Ok(Period::OneWeek),
            "1m" => Ok(Period::OneMonth),
            "3m" => Ok(Period::ThreeMonths),
            "6m" => Ok(Period::SixMonths),
            "1y" => Ok(Period::OneYear),
            _ => Err(ApiError::Unsupported {
                kind: "Period",
                value: s.to_string(),
                supported: SUPPORTED_RANGE,
            }),
        }
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort {
    Asc,
    Desc,
}

impl FromStr for Sort {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(Sort::Asc),
            "desc" => Ok(Sort::Desc),
            _ => Err(ApiError::Unsupported {
                kind: "Sort",
                value: s.to_string(),
                supported: SUPPORTED_SORT,
            }),
        }
    }
}

impl Display for Sort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sort::Asc => f.write_str("asc"),
            Sort::Desc => f.write_str("desc"),
        }
    }
}

/// Pagination controls for `/sleep/list.json`.
#[derive(Debug, Clone, PartialEq)]
pub struct SleepListQuery {
    pub before_date: Option<String>,
    pub after_date: Option<String>,
    pub sort: String,
    pub limit: u32,
    pub offset: u32,
}

impl Default for SleepListQuery {
    fn default() -> Self {
        Self {
            before_date: None,
            after_date: None,
            sort: "asc".to_string(),
            limit: 1,
            offset: 0,
        }
    }
}

impl SleepListQuery {
    pub fn before(date: &str) -> Self {
        Self {
            before_date: Some(date.to_string()),
            ..Default::default()
        }
    }

    pub fn after(date: &str) -> Self {
        Self {
            after_date: Some(date.to_string()),
            ..Default::default()
        }
    }

    pub fn with_before(mut self, date: &str) -> Self {
        self.before_date = Some(date.to_string());
        self
    }

    pub fn with_after(mut self, date: &str) -> Self {
        self.after_date = Some(date.to_string());
        self
    }

    pub fn with_sort(mut self, sort: &str) -> Self {
        self.sort = sort.to_string();
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Fitbit only accepts `desc` with a lone before date and `asc` with a lone after date.
    pub fn with_implied_sort(mut self) -> Self {
        let implied = match (self.before_bound(), self.after_bound()) {
            (Some(_), None) => Some(Sort::Desc),
            (None, Some(_)) => Some(Sort::Asc),
            _ => None,
        };

        if let Some(sort) = implied {
            self.sort = sort.to_string();
        }
        self
    }

    fn before_bound(&self) -> Option<&str> {
        self.before_date.as_deref().filter(|d| !d.is_empty())
    }

    fn after_bound(&self) -> Option<&str> {
        self.after_date.as_deref().filter(|d| !d.is_empty())
    }

    pub fn path(&self) -> Result<String> {
        let date_range = match (self.before_bound(), self.after_bound()) {
            (Some(before), Some(after)) => format!("beforeDate={}&afterDate={}&", before, after),
            (Some(before), None) => format!("beforeDate={}&", before),
            (None, Some(after)) => format!("afterDate={}&", after),
            (None, None) => return Err(ApiError::MissingDateBound),
        };

        if self.limit > MAX_LIST_LIMIT {
            return Err(ApiError::LimitOutOfRange(self.limit));
        }

        let sort: Sort = self.sort.parse()?;

        Ok(format!(
            "/sleep/list.json?{}sort={}&offset={}&limit={}",
            date_range, sort, self.offset, self.limit
        ))
    }
}
