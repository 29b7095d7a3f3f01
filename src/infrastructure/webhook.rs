// SPDX-License-Identifier: MPL-2.0
//! Submission gateway adapter.
//!
//! Forwards `EXECUTE` participation payloads to the configured automation
//! webhook over HTTPS. The gateway is a fire-and-forget automation hook: no
//! response payload is consumed beyond the status code, but the body text of
//! a failed response is kept for display.

use crate::error::GatewayError;
use crate::participation::SubmissionRequest;
use std::time::Duration;

/// How long a locally-resolved submission "processes" before flipping to
/// success. Keeps the void protocol's feedback indistinguishable from a
/// forwarded one.
pub const LOCAL_RESOLVE_DELAY: Duration = Duration::from_millis(600);

const USER_AGENT: &str = concat!("Vernissage/", env!("CARGO_PKG_VERSION"));

/// POSTs the payload to `url` and maps the outcome onto [`GatewayError`].
///
/// Any 2xx status is success. Non-2xx statuses, transport failures, and the
/// `timeout` expiry all map to the funnel's retryable `Error` state.
pub async fn forward(
    url: String,
    timeout: Duration,
    request: SubmissionRequest,
) -> Result<(), GatewayError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| GatewayError::Transport(e.to_string()))?;

    let response = client
        .post(&url)
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout
            } else {
                GatewayError::Transport(e.to_string())
            }
        })?;

    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    // Keep the endpoint's error text for display; it is not required for
    // correctness, so a body read failure falls back to the empty string.
    let message = response.text().await.unwrap_or_default();
    Err(GatewayError::Http {
        status: status.as_u16(),
        message,
    })
}

/// Settles a void-only submission without any outbound call.
pub async fn settle_locally(delay: Duration) -> Result<(), GatewayError> {
    tokio::time::sleep(delay).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn local_settlement_always_succeeds() {
        let result = settle_locally(Duration::from_millis(1)).await;
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn forward_to_an_unreachable_endpoint_is_a_transport_error() {
        let request = SubmissionRequest {
            email: "visiteur@example.com".to_string(),
            choices: vec!["OPTIMIZE"],
            timestamp: "2026-01-01T00:00:00+00:00".to_string(),
            action: "EXECUTE",
        };
        let result = forward(
            // Reserved TLD, never resolvable.
            "https://webhook.invalid/hook".to_string(),
            Duration::from_secs(2),
            request,
        )
        .await;
        assert!(matches!(result, Err(GatewayError::Transport(_))));
    }
}
