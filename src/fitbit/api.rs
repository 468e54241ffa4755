use serde_json::Value;

use crate::{
    config::Config,
    error::{ApiError, Result},
    logln, logvbln,
};

use super::transport::{bearer_header, CurlTransport, Transport};

/// Holds the credentials shared by every resource accessor.
pub struct FitbitApi {
    base_url: String,
    user_id: String,
    header: String,
    transport: Box<dyn Transport>,
}

impl FitbitApi {
    const CC: &'static str = "FitbitApi";

    pub fn new(config: &Config) -> Self {
        FitbitApi::with_transport(config, Box::new(CurlTransport))
    }

    pub fn with_transport(config: &Config, transport: Box<dyn Transport>) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_id: config.user_id.clone(),
            header: bearer_header(&config.access_token),
            transport,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// `base/{user_id}/{path}`, the configured user when `user_id` is `None`.
    pub fn url(&self, path: &str, user_id: Option<&str>) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            user_id.unwrap_or(&self.user_id),
            path.trim_start_matches('/')
        )
    }

    /// GET and parse as JSON. Failures are logged and reported as `None`.
    pub fn request(&self, path: &str, user_id: Option<&str>) -> Option<Value> {
        let url = self.url(path, user_id);
        logvbln!("GET {}", url);

        let body = match self.transport.get(&url, std::slice::from_ref(&self.header)) {
            Ok(body) => body,
            Err(e) => {
                logln!("Request to URL '{}' failed: {}", url, e);
                return None;
            }
        };

        match serde_json::from_slice::<Value>(&body) {
            Ok(json) => self.verify_if_error(&url, json),
            Err(e) => {
                logln!("Response from URL '{}' is not JSON: {}", url, e);
                None
            }
        }
    }

    fn verify_if_error(&self, url: &str, json: Value) -> Option<Value> {
        if let Some(errors) = json.get("errors").and_then(Value::as_array) {
            let messages: Vec<&str> = errors
                .iter()
                .filter_map(|e| e.get("message").and_then(Value::as_str))
                .collect();

            logln!("URL '{}' returned errors: {}", url, messages.join("; "));
            return None;
        }

        Some(json)
    }

    /// `request` for the configured user, absent data as `ApiError::NoData`.
    pub(crate) fn fetch(&self, path: &str) -> Result<Value> {
        self.request(path, None)
            .ok_or_else(|| ApiError::NoData(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    struct Canned {
        body: Result<&'static str>,
        seen: Rc<RefCell<Vec<(String, Vec<String>)>>>,
    }

    impl Transport for Canned {
        fn get(&self, url: &str, headers: &[String]) -> Result<Vec<u8>> {
            self.seen.borrow_mut().push((url.to_string(), headers.to_vec()));
            match &self.body {
                Ok(body) => Ok(body.as_bytes().to_vec()),
                Err(e) => Err(ApiError::Transport(e.to_string())),
            }
        }
    }

    fn canned_api(body: Result<&'static str>) -> (FitbitApi, Rc<RefCell<Vec<(String, Vec<String>)>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let transport = Canned {
            body,
            seen: seen.clone(),
        };

        (
            FitbitApi::with_transport(&Config::new("token123"), Box::new(transport)),
            seen,
        )
    }

    #[test]
    fn url_joins_base_user_and_path() {
        let (api, _) = canned_api(Ok("{}"));

        assert_eq!(
            api.url("/sleep/date/2022-01-05.json", None),
            "https://api.fitbit.com/1/user/-/sleep/date/2022-01-05.json"
        );
        assert_eq!(
            api.url("sleep/date/today.json", Some("ABC123")),
            "https://api.fitbit.com/1/user/ABC123/sleep/date/today.json"
        );
    }

    #[test]
    fn request_sends_bearer_token() {
        let (api, seen) = canned_api(Ok(r#"{"sleep": []}"#));

        let json = api.request("/sleep/date/today.json", None).unwrap();

        assert_eq!(json["sleep"], serde_json::json!([]));
        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].1, vec!["Authorization: Bearer token123".to_string()]);
    }

    #[test]
    fn transport_failure_is_swallowed() {
        let (api, _) = canned_api(Err(ApiError::Transport("connection refused".into())));

        assert!(api.request("/sleep/date/today.json", None).is_none());
        assert!(matches!(
            api.fetch("/sleep/date/today.json"),
            Err(ApiError::NoData(_))
        ));
    }

    #[test]
    fn non_json_body_is_swallowed() {
        let (api, _) = canned_api(Ok("<html>502 Bad Gateway</html>"));

        assert!(api.request("/sleep/date/today.json", None).is_none());
    }

    #[test]
    fn error_payload_is_swallowed() {
        let (api, _) = canned_api(Ok(
            r#"{"errors":[{"errorType":"expired_token","message":"Access token expired"}],"success":false}"#,
        ));

        assert!(api.request("/sleep/date/today.json", None).is_none());
    }
}
