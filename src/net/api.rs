//! REST API helpers for communicating with the storefront backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning inert values since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns a raw transport error. `send_contact` folds every
//! request/parse failure into [`SubmissionOutcome::TransportFailed`] so the
//! submit flow always reaches exactly one terminal outcome; the address
//! fetches return `None` and the details modal degrades to a fallback line.

#![allow(clippy::unused_async)]

use crate::net::types::{ContactRequest, EmailAddress, PhoneAddress};
use crate::state::submission::SubmissionOutcome;

/// Path the contact form posts to, relative to the serving origin.
pub const EMAIL_US_PATH: &str = "/api/addresses/email-us/";

/// Published email addresses, for the contact-details modal.
pub const EMAIL_ADDRESSES_PATH: &str = "/api/addresses/emails/";

/// Published phone numbers, for the contact-details modal.
pub const PHONE_ADDRESSES_PATH: &str = "/api/addresses/phones/";

/// POST the trimmed contact form payload and decode the backend's verdict.
///
/// The backend answers rejections with the same JSON envelope over a 400
/// status, so the body is parsed regardless of the status code. Anything
/// that prevents obtaining a structured verdict — request failure, non-JSON
/// body — becomes `TransportFailed` and is logged for diagnostics.
pub async fn send_contact(request: &ContactRequest) -> SubmissionOutcome {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::types::ContactResponse;
        use crate::state::errors::FieldErrors;

        let builder = match gloo_net::http::Request::post(EMAIL_US_PATH).json(request) {
            Ok(builder) => builder,
            Err(e) => {
                log::error!("contact request could not be serialized: {e}");
                return SubmissionOutcome::TransportFailed;
            }
        };
        let resp = match builder.send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("contact request failed: {e}");
                return SubmissionOutcome::TransportFailed;
            }
        };
        let body: ContactResponse = match resp.json().await {
            Ok(body) => body,
            Err(e) => {
                log::error!("contact response was not valid JSON: {e}");
                return SubmissionOutcome::TransportFailed;
            }
        };

        if body.success {
            SubmissionOutcome::Accepted {
                message: body.message,
            }
        } else {
            SubmissionOutcome::Rejected {
                message: body.message,
                errors: body.errors.map(FieldErrors::from).unwrap_or_default(),
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        SubmissionOutcome::TransportFailed
    }
}

/// Fetch the published contact email addresses.
/// Returns `None` on any failure or on the server.
pub async fn fetch_email_addresses() -> Option<Vec<EmailAddress>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(EMAIL_ADDRESSES_PATH)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<EmailAddress>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the published contact phone numbers.
/// Returns `None` on any failure or on the server.
pub async fn fetch_phone_addresses() -> Option<Vec<PhoneAddress>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PHONE_ADDRESSES_PATH)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<PhoneAddress>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
