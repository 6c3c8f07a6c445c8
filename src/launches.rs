use anyhow::{bail, Context, Result};
use reqwest::{Client, StatusCode};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use tracing::{debug, error};

pub const UNAVAILABLE_MESSAGE: &str = "Failed to retrieve launch data";

#[derive(Debug, Clone, PartialEq)]
pub enum LatestLaunch {
    Record(Value),
    Unavailable,
}

impl Serialize for LatestLaunch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LatestLaunch::Record(record) => record.serialize(serializer),
            LatestLaunch::Unavailable => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", UNAVAILABLE_MESSAGE)?;
                map.end()
            }
        }
    }
}

/// Fetches the latest launch record from a fixed upstream URL.
#[derive(Debug, Clone)]
pub struct LaunchClient {
    http: Client,
    url: String,
}

impl LaunchClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn latest(&self) -> LatestLaunch {
        match self.fetch().await {
            Ok(record) => LatestLaunch::Record(record),
            Err(e) => {
                sentry_anyhow::capture_anyhow(&e);
                error!(url = %self.url, "{:#}", e);
                LatestLaunch::Unavailable
            }
        }
    }

    pub async fn fetch(&self) -> Result<Value> {
        debug!(url = %self.url, "Fetching latest launch");
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .context("Failed to reach launch data upstream")?;
        let status = response.status();
        if status != StatusCode::OK {
            bail!("Upstream responded with status {}", status);
        }
        response
            .json()
            .await
            .context("Failed to decode launch record")
    }
}
