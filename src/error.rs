use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("no data returned for '{0}'")]
    NoData(String),

    #[error("{kind} '{value}' not supported: {supported:?}")]
    Unsupported {
        kind: &'static str,
        value: String,
        supported: &'static [&'static str],
    },

    #[error("before date or after date is required")]
    MissingDateBound,

    #[error("limit needs to be at most 100: {0}")]
    LimitOutOfRange(u32),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("service error: {0}")]
    Service(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl From<curl::Error> for ApiError {
    fn from(e: curl::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}
