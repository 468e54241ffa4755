pub mod config;
pub mod data_types;
pub mod error;
pub mod fitbit;
pub mod processors;
pub mod sheets;
pub mod util;

pub use config::Config;
pub use error::{ApiError, Result};
pub use fitbit::{FitbitApi, HeartRate, Nutrition, Sleep, SleepListQuery, SleepLogs};
pub use sheets::SheetsApi;
