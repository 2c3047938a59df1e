pub mod ark;
pub mod remove_bg;

pub use ark::ArkClient;
pub use remove_bg::RemoveBgClient;

use crate::error::Error;

const LOGGED_BODY_CHARS: usize = 500;

/// Logs a failed provider response and turns it into a forwarded [`Error::Upstream`].
///
/// The body goes to the log only, never back to the caller.
pub(crate) async fn upstream_failure(
    provider: &str,
    response: reqwest::Response,
    prefix: &str,
) -> Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let truncated: String = body.chars().take(LOGGED_BODY_CHARS).collect();
    tracing::error!(provider, status = status.as_u16(), body = %truncated, "upstream call failed");

    let status_text = match status.canonical_reason() {
        Some(reason) if !reason.is_empty() => reason.to_string(),
        _ => status.as_u16().to_string(),
    };

    Error::Upstream {
        status: status.as_u16(),
        message: format!("{prefix}: {status_text}"),
    }
}
