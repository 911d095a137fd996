//! HTTP service for waitlist submissions.
//!
//! One POST to the backend per user-initiated submit. No retry, no
//! cancellation; a failure is reported back to the caller as a value.

use gloo_net::http::Request;

use crate::types::{SubmitError, WaitlistSubmission};

/// Build the waitlist endpoint URL from the backend base URL.
fn waitlist_url(backend_url: &str) -> String {
    format!("{}/api/waitlist", backend_url)
}

/// Submit the form to the backend waitlist endpoint.
///
/// The body is the submission serialized as JSON with a
/// `Content-Type: application/json` header. Any success-range status
/// counts as success; the response body is not consumed.
pub async fn join_waitlist(
    submission: &WaitlistSubmission,
    backend_url: &str,
) -> Result<(), SubmitError> {
    let url = waitlist_url(backend_url);

    let request = Request::post(&url)
        .json(submission)
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(SubmitError::Response(response.status()));
    }

    Ok(())
}
