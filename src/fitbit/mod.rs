pub mod api;
pub mod heart_rate;
pub mod nutrition;
pub mod params;
pub mod sleep;
pub mod sleep_logs;
pub mod transport;

pub use api::FitbitApi;
pub use heart_rate::HeartRate;
pub use nutrition::Nutrition;
pub use params::SleepListQuery;
pub use sleep::Sleep;
pub use sleep_logs::SleepLogs;
pub use transport::{CurlTransport, Transport};
