//! Contact-form submission to the external form service.
//!
//! Client-side (hydrate): real HTTP POST via `gloo-net`.
//! Server-side (SSR): a stub returning `Failed`, since submissions only
//! happen from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every path ends in a `SubmitOutcome`; nothing here panics or retries. The
//! form stays editable after any non-accepted outcome.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ContactRecord, SubmitOutcome, SubmitResponse};

/// Form service endpoint. Override at build time with `CONTACT_FORM_ENDPOINT`.
pub const CONTACT_ENDPOINT: &str = match option_env!("CONTACT_FORM_ENDPOINT") {
    Some(url) => url,
    None => "https://formspree.io/f/pichsafe",
};

fn submit_failed_message(status: u16) -> String {
    format!("submission failed: {status}")
}

/// Map an HTTP status and body to an outcome.
pub(crate) fn decode_submit_response(status: u16, body: &str) -> SubmitOutcome {
    let success = (200..300).contains(&status);
    match serde_json::from_str::<SubmitResponse>(body) {
        Ok(resp) if !resp.errors.is_empty() => SubmitOutcome::Rejected(resp.errors),
        Ok(resp) if success && resp.ok => SubmitOutcome::Accepted,
        Ok(SubmitResponse { error: Some(message), .. }) => SubmitOutcome::Failed(message),
        Ok(_) => SubmitOutcome::Failed(submit_failed_message(status)),
        Err(_) if success => SubmitOutcome::Accepted,
        Err(_) => SubmitOutcome::Failed(submit_failed_message(status)),
    }
}

/// Post the record to [`CONTACT_ENDPOINT`].
pub async fn submit_contact(record: &ContactRecord) -> SubmitOutcome {
    #[cfg(feature = "hydrate")]
    {
        let request = match gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .header("Accept", "application/json")
            .json(record)
        {
            Ok(req) => req,
            Err(e) => return SubmitOutcome::Failed(e.to_string()),
        };
        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                leptos::logging::warn!("contact submit failed: {e}");
                return SubmitOutcome::Failed(e.to_string());
            }
        };
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        decode_submit_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = record;
        SubmitOutcome::Failed("not available on server".to_owned())
    }
}
