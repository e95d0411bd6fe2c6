//! Form submissions relayed through Formspree.
//!
//! Both visitor-facing forms (the floating chat and the newsletter signup)
//! funnel through here: validate locally, POST a multipart body to the
//! relay, and collapse the result into a single Success/Failure outcome
//! the page turns into one toast.

use gloo_console::log;
use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::config;

/// Fixed message sent along with newsletter signups.
pub const NEWSLETTER_MESSAGE: &str = "Please add me to the FastRetrieve.AI newsletter.";

/// One outbound submission. Built fresh per submit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub email: String,
    pub message: Option<String>,
    pub form_id: String,
}

impl SubmissionRequest {
    pub fn chat(email: String, message: String) -> Self {
        Self {
            email,
            message: Some(message),
            form_id: config::chat_form_id(),
        }
    }

    pub fn newsletter(email: String) -> Self {
        Self {
            email,
            message: Some(NEWSLETTER_MESSAGE.to_string()),
            form_id: config::newsletter_form_id(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please enter your email address.")]
    EmptyEmail,
    #[error("Please type a message first.")]
    EmptyMessage,
    #[error("Could not reach the form service: {0}")]
    Network(String),
    #[error("The form service rejected the submission: {reason}")]
    Server { status: u16, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(SubmitError),
}

/// Formspree reports failures as `{"error": "..."}`.
#[derive(Deserialize)]
struct RelayErrorBody {
    error: String,
}

/// Runs before any network call; an invalid request never leaves the page.
pub fn validate(request: &SubmissionRequest) -> Result<(), SubmitError> {
    if request.email.trim().is_empty() {
        return Err(SubmitError::EmptyEmail);
    }
    if let Some(message) = &request.message {
        if message.trim().is_empty() {
            return Err(SubmitError::EmptyMessage);
        }
    }
    Ok(())
}

pub fn outcome_from_status(status: u16, detail: Option<String>) -> SubmissionOutcome {
    if (200..300).contains(&status) {
        SubmissionOutcome::Success
    } else {
        let reason = detail.unwrap_or_else(|| format!("status {status}"));
        SubmissionOutcome::Failure(SubmitError::Server { status, reason })
    }
}

fn form_body(request: &SubmissionRequest) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_str("email", &request.email)?;
    if let Some(message) = &request.message {
        form.append_with_str("message", message)?;
    }
    Ok(form)
}

pub async fn send(request: &SubmissionRequest) -> SubmissionOutcome {
    if let Err(err) = validate(request) {
        return SubmissionOutcome::Failure(err);
    }
    let form = match form_body(request) {
        Ok(form) => form,
        Err(_) => {
            return SubmissionOutcome::Failure(SubmitError::Network(
                "could not assemble the form body".to_string(),
            ))
        }
    };
    let url = config::formspree_url(&request.form_id);
    match Request::post(&url)
        .header("Accept", "application/json")
        .body(form)
        .send()
        .await
    {
        Ok(response) => {
            if response.ok() {
                log!("form relay accepted the submission");
                SubmissionOutcome::Success
            } else {
                let status = response.status();
                log!("form relay rejected the submission with status:", status);
                let detail = response
                    .json::<RelayErrorBody>()
                    .await
                    .ok()
                    .map(|body| body.error);
                outcome_from_status(status, detail)
            }
        }
        Err(err) => {
            log!("form relay request failed:", err.to_string());
            SubmissionOutcome::Failure(SubmitError::Network(err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request(email: &str, message: Option<&str>) -> SubmissionRequest {
        SubmissionRequest {
            email: email.to_string(),
            message: message.map(|m| m.to_string()),
            form_id: "testform1".to_string(),
        }
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn empty_email_fails_validation(#[case] email: &str) {
        assert_eq!(
            validate(&request(email, Some("hello"))),
            Err(SubmitError::EmptyEmail)
        );
    }

    #[rstest]
    #[case("")]
    #[case("  \n ")]
    fn empty_chat_message_fails_validation(#[case] message: &str) {
        assert_eq!(
            validate(&request("a@b.com", Some(message))),
            Err(SubmitError::EmptyMessage)
        );
    }

    #[test]
    fn complete_request_passes_validation() {
        assert_eq!(validate(&request("a@b.com", Some("hello"))), Ok(()));
    }

    #[test]
    fn newsletter_request_carries_the_fixed_message() {
        let request = SubmissionRequest::newsletter("a@b.com".to_string());
        assert_eq!(request.message.as_deref(), Some(NEWSLETTER_MESSAGE));
        assert_eq!(validate(&request), Ok(()));
    }

    #[rstest]
    #[case(200)]
    #[case(204)]
    #[case(299)]
    fn success_statuses_yield_success(#[case] status: u16) {
        assert_eq!(outcome_from_status(status, None), SubmissionOutcome::Success);
    }

    #[rstest]
    #[case(302)]
    #[case(404)]
    #[case(500)]
    fn non_success_statuses_yield_server_failure(#[case] status: u16) {
        match outcome_from_status(status, None) {
            SubmissionOutcome::Failure(SubmitError::Server { status: s, reason }) => {
                assert_eq!(s, status);
                assert!(reason.contains(&status.to_string()));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn relay_detail_is_surfaced_in_the_failure() {
        let outcome = outcome_from_status(422, Some("Email is required".to_string()));
        match outcome {
            SubmissionOutcome::Failure(err) => {
                assert!(err.to_string().contains("Email is required"));
            }
            SubmissionOutcome::Success => panic!("422 must not be a success"),
        }
    }

    #[test]
    fn relay_error_body_decodes() {
        let body: RelayErrorBody =
            serde_json::from_str(r#"{"error": "Form not found"}"#).unwrap();
        assert_eq!(body.error, "Form not found");
    }
}
