#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc};

use fitbit_tabular::{fitbit::Transport, ApiError, Config, FitbitApi, Result};

/// Serves canned bodies by URL fragment and records every requested URL.
#[derive(Clone, Default)]
pub struct FakeTransport {
    responses: Rc<RefCell<Vec<(String, String)>>>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn respond(self, url_fragment: &str, body: &str) -> Self {
        self.responses
            .borrow_mut()
            .push((url_fragment.to_string(), body.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str, _headers: &[String]) -> Result<Vec<u8>> {
        self.calls.borrow_mut().push(url.to_string());

        self.responses
            .borrow()
            .iter()
            .find(|(fragment, _)| url.contains(fragment.as_str()))
            .map(|(_, body)| body.as_bytes().to_vec())
            .ok_or_else(|| ApiError::Transport(format!("connection refused: {}", url)))
    }
}

pub fn fitbit_api(transport: &FakeTransport) -> FitbitApi {
    FitbitApi::with_transport(&Config::new("test-token"), Box::new(transport.clone()))
}
