use async_trait::async_trait;

use crate::domain::error::DomainError;

/// What a lightweight existence check learned about a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub success: bool,
    pub content_type: Option<String>,
}

impl ProbeResponse {
    pub fn image(content_type: &str) -> Self {
        Self {
            success: true,
            content_type: Some(content_type.to_string()),
        }
    }

    pub fn not_found() -> Self {
        Self {
            success: false,
            content_type: None,
        }
    }

    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.trim().to_lowercase().starts_with("image/"))
            .unwrap_or(false)
    }
}

/// HEAD-style check against a provider URL. Must not download the payload.
/// Implementations bound their own latency; the resolver adds an outer
/// timeout on top.
#[async_trait]
pub trait SourceProbe: Send + Sync {
    async fn probe(&self, url: &str) -> Result<ProbeResponse, DomainError>;
}
