use serde_json::{Map, Value};

/// Fields the API returns that the reshape steps carry through untouched.
pub type Passthrough = Map<String, Value>;
