use std::time::Duration;

use anyhow::Result;
use serde_json::Value;
use thiserror::Error;

use crate::{infra::config::StoreConfig, usecases::contracts::RemoteStore};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("request to {path} failed: {source}")]
    Request {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {path} returned status {status}")]
    Status { path: String, status: u16 },
    #[error("response from {path} is not valid JSON: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Blocking client for a Firebase-style REST document store.
///
/// Documents are plain JSON values addressed by hierarchical keys; the REST
/// convention appends `.json` to every key. Timeouts are set per request so
/// a hung store stalls one poll cycle at most. Every failure is returned to
/// the caller, who treats it as a no-op and retries on the next cycle.
#[derive(Debug)]
pub struct RestStoreClient {
    http: reqwest::blocking::Client,
    base_url: String,
    read_timeout: Duration,
    write_timeout: Duration,
}

impl RestStoreClient {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::blocking::Client::builder()
            .build()
            .map_err(StoreError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            read_timeout: Duration::from_millis(config.read_timeout_ms),
            write_timeout: Duration::from_millis(config.write_timeout_ms),
        })
    }

    fn document_url(&self, path: &str) -> String {
        format!("{}/{}.json", self.base_url, path)
    }
}

impl RemoteStore for RestStoreClient {
    fn get(&self, path: &str) -> Result<Option<Value>> {
        let response = self
            .http
            .get(self.document_url(path))
            .timeout(self.read_timeout)
            .send()
            .map_err(|source| StoreError::Request {
                path: path.to_owned(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                path: path.to_owned(),
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.text().map_err(|source| StoreError::Request {
            path: path.to_owned(),
            source,
        })?;

        if body.trim().is_empty() {
            return Ok(None);
        }

        let value: Value =
            serde_json::from_str(&body).map_err(|source| StoreError::Decode {
                path: path.to_owned(),
                source,
            })?;

        Ok(match value {
            Value::Null => None,
            value => Some(value),
        })
    }

    fn put(&self, path: &str, value: &Value) -> Result<()> {
        let response = self
            .http
            .put(self.document_url(path))
            .timeout(self.write_timeout)
            .json(value)
            .send()
            .map_err(|source| StoreError::Request {
                path: path.to_owned(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                path: path.to_owned(),
                status: status.as_u16(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> RestStoreClient {
        RestStoreClient::new(&StoreConfig {
            base_url: base_url.to_owned(),
            ..StoreConfig::default()
        })
        .expect("client must build")
    }

    #[test]
    fn document_url_appends_json_suffix() {
        let client = client("https://store.example.com");

        assert_eq!(
            client.document_url("groups/team42"),
            "https://store.example.com/groups/team42.json"
        );
    }

    #[test]
    fn document_url_tolerates_trailing_slash_in_base() {
        let client = client("https://store.example.com/");

        assert_eq!(
            client.document_url("typing/team42"),
            "https://store.example.com/typing/team42.json"
        );
    }
}
