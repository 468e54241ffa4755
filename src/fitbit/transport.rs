use curl::easy::{Easy, List};

use crate::error::Result;

/// Blocking GET returning the raw response body. Status codes are not inspected.
pub trait Transport {
    fn get(&self, url: &str, headers: &[String]) -> Result<Vec<u8>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CurlTransport;

impl Transport for CurlTransport {
    fn get(&self, url: &str, headers: &[String]) -> Result<Vec<u8>> {
        let mut handle = Easy::new();
        let mut list = List::new();

        for header in headers {
            list.append(header)?;
        }
        handle.http_headers(list)?;

        handle.get(true)?;
        handle.url(url)?;

        let mut buffer_response = Vec::new();
        {
            let mut transfer = handle.transfer();

            transfer.write_function(|data| {
                buffer_response.extend_from_slice(data);
                Ok(data.len())
            })?;

            transfer.perform()?;
        }

        Ok(buffer_response)
    }
}

pub fn bearer_header(token: &str) -> String {
    format!("Authorization: Bearer {}", token)
}
