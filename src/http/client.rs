use reqwest::{Client, StatusCode};
use tracing::{error, info, warn};

use crate::args::DEFAULT_USER_AGENT;
use crate::error::AppResult;

/// Result of one GET request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RequestOutcome {
    Success(StatusCode),
    UnexpectedStatus(StatusCode),
    TransportError,
}

impl RequestOutcome {
    pub(crate) const fn is_success(self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Builds the client shared by every worker.
///
/// # Errors
///
/// Returns an error when the TLS backend can not be initialized.
pub(crate) fn build_client() -> AppResult<Client> {
    Ok(Client::builder().user_agent(DEFAULT_USER_AGENT).build()?)
}

pub(crate) async fn send_get(client: &Client, url: &str) -> RequestOutcome {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(err) => {
            error!(
                "Received an error on HTTP GET request from address: '{}' with message: {}",
                url, err
            );
            return RequestOutcome::TransportError;
        }
    };

    let status = response.status();
    // Drain the body so the connection can be reused.
    let body_len = match response.bytes().await {
        Ok(body) => body.len(),
        Err(err) => {
            warn!("Failed to read response body from '{}': {}", url, err);
            0
        }
    };

    if status.is_success() {
        info!(
            "Successfully received HTTP GET response from address '{}' with status {} ({} bytes)",
            url, status, body_len
        );
        RequestOutcome::Success(status)
    } else {
        warn!(
            "Received HTTP GET response with status code: {} from address '{}' ({} bytes)",
            status.as_u16(),
            url,
            body_len
        );
        RequestOutcome::UnexpectedStatus(status)
    }
}
