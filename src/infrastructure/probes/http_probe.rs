use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::domain::error::DomainError;
use crate::domain::ports::source_probe::{ProbeResponse, SourceProbe};

/// Existence check via HTTP `HEAD`; the body is never downloaded.
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("tokenscope/", env!("CARGO_PKG_VERSION")))
                .timeout(timeout)
                .redirect(reqwest::redirect::Policy::limited(3))
                .build()
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl SourceProbe for HttpProbe {
    async fn probe(&self, url: &str) -> Result<ProbeResponse, DomainError> {
        let resp = self.client.head(url).send().await.map_err(|e| {
            if e.is_timeout() {
                DomainError::Timeout(format!("HEAD {url}"))
            } else {
                DomainError::Probe(format!("HEAD {url}: {e}"))
            }
        })?;

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        Ok(ProbeResponse {
            success: resp.status().is_success(),
            content_type,
        })
    }
}
