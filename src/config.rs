//! Build-time site configuration.
//!
//! The two Formspree form ids arrive through the environment when the
//! site is compiled. A production build refuses to start without them; a
//! development build substitutes a placeholder and keeps going so the rest
//! of the site stays usable, with a console warning so nobody mistakes the
//! degraded mode for a working form.

use log::warn;

pub const COMPANY_NAME: &str = "FastRetrieve.AI";
pub const COMPANY_TAGLINE: &str = "Precise and Trustworthy, Tailored for You";
pub const COMPANY_EMAIL: &str = "fastretrieve.ai@gmail.com";
pub const COMPANY_LOCATION: &str = "Taipei, TAIWAN";

/// Substituted for a missing form id in development builds. Submissions
/// against it go nowhere.
pub const PLACEHOLDER_FORM_ID: &str = "development-mode";

const MIN_FORM_ID_LEN: usize = 8;

const CHAT_FORM_ID: Option<&str> = option_env!("FORMSPREE_CHAT_FORM_ID");
const NEWSLETTER_FORM_ID: Option<&str> = option_env!("FORMSPREE_NEWSLETTER_FORM_ID");

#[cfg(debug_assertions)]
pub fn is_production() -> bool {
    false
}

#[cfg(not(debug_assertions))]
pub fn is_production() -> bool {
    true
}

/// A usable form id is present and at least 8 characters.
fn checked_form_id(id: Option<&str>, kind: &str) -> Result<String, String> {
    match id {
        Some(id) if id.len() >= MIN_FORM_ID_LEN => Ok(id.to_string()),
        _ => Err(format!("missing Formspree {kind} form id")),
    }
}

fn form_id(id: Option<&str>, kind: &str) -> String {
    match checked_form_id(id, kind) {
        Ok(id) => id,
        Err(reason) => {
            if is_production() {
                panic!("{reason} in a production build");
            }
            warn!("{reason} in this development build; form submissions will not work");
            PLACEHOLDER_FORM_ID.to_string()
        }
    }
}

pub fn chat_form_id() -> String {
    form_id(CHAT_FORM_ID, "chat")
}

pub fn newsletter_form_id() -> String {
    form_id(NEWSLETTER_FORM_ID, "newsletter")
}

/// Resolve both form ids once before rendering, so a misconfigured
/// production build dies immediately instead of failing on first submit.
pub fn validate_at_startup() {
    let _ = chat_form_id();
    let _ = newsletter_form_id();
}

pub fn formspree_url(form_id: &str) -> String {
    if form_id == PLACEHOLDER_FORM_ID {
        warn!("using the development placeholder form id; form submissions will not work");
        return format!("#{PLACEHOLDER_FORM_ID}");
    }
    format!("https://formspree.io/f/{form_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_id_is_rejected() {
        assert!(checked_form_id(None, "chat").is_err());
    }

    #[test]
    fn short_id_is_rejected() {
        assert!(checked_form_id(Some("abc"), "chat").is_err());
    }

    #[test]
    fn valid_id_passes_through() {
        assert_eq!(
            checked_form_id(Some("xgegpnnw"), "newsletter"),
            Ok("xgegpnnw".to_string())
        );
    }

    #[test]
    fn rejection_names_the_form_kind() {
        let reason = checked_form_id(None, "newsletter").unwrap_err();
        assert!(reason.contains("newsletter"));
    }

    #[test]
    fn placeholder_id_maps_to_inert_url() {
        assert_eq!(formspree_url(PLACEHOLDER_FORM_ID), "#development-mode");
    }

    #[test]
    fn valid_id_maps_to_relay_url() {
        assert_eq!(formspree_url("xgegpnnw"), "https://formspree.io/f/xgegpnnw");
    }
}
