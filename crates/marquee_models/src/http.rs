//! HTTP plumbing shared by the provider clients.

use marquee_error::{ConfigError, ProviderError, ProviderErrorKind};
use reqwest::Client;
use std::time::Duration;
use tracing::error;

/// Build the reqwest client, applying the per-call timeout if set.
pub(crate) fn build_client(timeout: Option<Duration>) -> Result<Client, ConfigError> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)))
}

/// Reject a credential that is absent or blank.
pub(crate) fn require_credential(
    credential: Option<String>,
    variable: &str,
    provider: &str,
) -> Result<String, ConfigError> {
    match credential {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ConfigError::new(format!(
            "{} must be set when the image provider is {}",
            variable, provider
        ))),
    }
}

/// Map a reqwest failure to a provider error.
#[track_caller]
pub(crate) fn transport_error(provider: &'static str, err: reqwest::Error) -> ProviderError {
    error!(provider, error = ?err, "HTTP request failed");
    let kind = if err.is_timeout() {
        ProviderErrorKind::Timeout(err.to_string())
    } else {
        ProviderErrorKind::Transport(err.to_string())
    };
    ProviderError::new(provider, kind)
}

/// Consume a non-success response into a provider error.
pub(crate) async fn status_error(
    provider: &'static str,
    response: reqwest::Response,
) -> ProviderError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error!(provider, status = %status, error = %body, "API error");
    ProviderError::new(
        provider,
        ProviderErrorKind::Api {
            status: status.as_u16(),
            message: extract_message(&body),
        },
    )
}

/// Pull `error.message` (OpenAI) or `error` (HuggingFace) out of a JSON error
/// body, falling back to the raw text.
fn extract_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.to_string();
    };
    value
        .get("error")
        .and_then(|e| e.get("message").and_then(|m| m.as_str()).or(e.as_str()))
        .map(str::to_string)
        .unwrap_or_else(|| body.to_string())
}
