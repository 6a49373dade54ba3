// src/core/net.rs
//! HTTP GET for the standings page.

use std::time::Duration;

use crate::config::consts::USER_AGENT;
use crate::error::FetchError;

/// Something that can hand back a document body for a URL.
/// Tests swap in canned responses; the CLI uses [`HttpFetcher`].
pub trait Fetch {
    fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        logd!("GET {url} (timeout {timeout:?})");
        let resp = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .map_err(|source| FetchError::Request { url: s!(url), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }
        resp.text().map_err(|source| FetchError::Request { url: s!(url), source })
    }
}
