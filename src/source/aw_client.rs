//! Blocking HTTP client for the ActivityWatch REST API.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::Event;
use crate::error::{Error, Result};
use crate::source::EventSource;

/// Connection parameters for a collection service endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwEndpoint {
    /// Host the service listens on
    pub host: String,
    /// Port the service listens on
    pub port: u16,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl AwEndpoint {
    /// An endpoint with the service's default port and a 30 second timeout.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self { host: host.into(), port, timeout_secs: 30 }
    }

    fn base_url(&self) -> String {
        format!("http://{}:{}/api/0", self.host, self.port)
    }

    fn buckets_url(&self) -> String {
        format!("{}/buckets/", self.base_url())
    }

    fn events_url(&self, bucket_id: &str) -> String {
        format!("{}/buckets/{}/events", self.base_url(), bucket_id)
    }
}

/// HTTP adapter over one running collection service instance.
pub struct AwClient {
    endpoint: AwEndpoint,
    client: reqwest::blocking::Client,
}

impl AwClient {
    /// Creates a client for `endpoint`.
    pub fn new(endpoint: AwEndpoint) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(endpoint.timeout_secs))
            .build()
            .map_err(|e| Error::SourceUnavailable(e.to_string()))?;
        Ok(Self { endpoint, client })
    }
}

impl EventSource for AwClient {
    fn list_buckets(&self) -> Result<Vec<String>> {
        let response = self.client.get(self.endpoint.buckets_url()).send()?.error_for_status()?;
        // Only the identifiers matter to the benchmark; the per-bucket
        // metadata object is left opaque. The BTreeMap keeps iteration
        // order deterministic across runs.
        let buckets: BTreeMap<String, serde_json::Value> = response.json()?;
        Ok(buckets.into_keys().collect())
    }

    fn get_events(&self, bucket_id: &str, limit: Option<usize>) -> Result<Vec<Event>> {
        // The service treats a negative limit as "all events".
        let limit = limit.map_or(-1, |n| n as i64);
        let response = self
            .client
            .get(self.endpoint.events_url(bucket_id))
            .query(&[("limit", limit)])
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }
}
