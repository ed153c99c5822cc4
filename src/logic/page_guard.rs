//! Page-Side Guard
//!
//! Decision logic for the in-page guard: a weaker, independent pre-filter
//! that intercepts sensitive form submissions and suspicious link clicks and
//! asks for confirmation. Purely local - no remote calls, no shared state
//! with the orchestrator beyond the suspicion policy module.
//!
//! The page context owns rendering and re-issuing the original action on
//! "anyway"; this module only decides whether to prompt and with what text.

use crate::logic::suspicion::{self, rules, Profile};

// ============================================================================
// PROMPT MODEL
// ============================================================================

/// One blocking confirmation dialog. Modal, rendered by the page context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardPrompt {
    pub title: String,
    pub message: String,
    pub cancel_label: &'static str,
    pub proceed_label: &'static str,
}

/// A form field as seen at submit time
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

// ============================================================================
// INSTALL GATE
// ============================================================================

/// The guard installs once per top-level document, and only on pages its
/// looser pre-filter flags.
pub fn should_install(page_url: &str, is_top_frame: bool, already_installed: bool) -> bool {
    if !is_top_frame || already_installed {
        return false;
    }
    suspicion::evaluate(page_url, Profile::PageGuard).suspicious
}

// ============================================================================
// FORM-SUBMIT INTERCEPTOR
// ============================================================================

/// Inspect a form submission. Returns a prompt when a sensitive field is
/// present AND the stricter current-site check (brand word plus bad TLD
/// co-occurrence) also holds; `None` lets the submit proceed untouched.
pub fn inspect_form_submission(page_url: &str, fields: &[FormField]) -> Option<GuardPrompt> {
    let sensitive = fields.iter().find(|f| is_sensitive_field(f))?;

    let host = url::Url::parse(page_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))?;
    if !suspicion::brand_tld_cooccurrence(&host) {
        return None;
    }

    Some(GuardPrompt {
        title: "Suspicious form submission".to_string(),
        message: format!(
            "This page ({}) looks like a phishing site and the form includes \
             a sensitive field ('{}'). Submit anyway?",
            host, sensitive.name
        ),
        cancel_label: "Cancel",
        proceed_label: "Submit Anyway",
    })
}

fn is_sensitive_field(field: &FormField) -> bool {
    rules::SENSITIVE_FIELD.is_match(&field.name)
        || rules::CARD_VALUE.is_match(field.value.trim())
        || rules::SSN_VALUE.is_match(field.value.trim())
}

// ============================================================================
// LINK-CLICK INTERCEPTOR
// ============================================================================

/// Inspect a clicked anchor target. Returns a prompt for brand-impersonation
/// hosts, IP hosts with a sensitive path, or known phishing-kit tokens.
pub fn inspect_link_click(href: &str) -> Option<GuardPrompt> {
    let lower = href.to_lowercase();

    let url = url::Url::parse(&lower).ok()?;
    let host = url.host_str()?;

    let reason = if rules::BRAND_IMPERSONATION.is_match(host) {
        "the address imitates a well-known brand"
    } else if rules::IPV4_HOST.is_match(host) && suspicion::policy::has_sensitive_path(url.path())
    {
        "it points at a raw IP address asking for credentials"
    } else if rules::MALICIOUS_TOKENS.iter().any(|t| lower.contains(t)) {
        "the address matches known phishing patterns"
    } else {
        return None;
    };

    Some(GuardPrompt {
        title: "Suspicious link".to_string(),
        message: format!("This link ({}) was flagged because {}. Visit anyway?", host, reason),
        cancel_label: "Cancel",
        proceed_label: "Visit Anyway",
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, value: &str) -> FormField {
        FormField { name: name.to_string(), value: value.to_string() }
    }

    #[test]
    fn test_install_gate() {
        assert!(should_install("http://paypal-verify.tk/", true, false));
        // Framed content and double installation are both refused
        assert!(!should_install("http://paypal-verify.tk/", false, false));
        assert!(!should_install("http://paypal-verify.tk/", true, true));
        // Trusted pages never get a guard
        assert!(!should_install("https://github.com/foo", true, false));
    }

    #[test]
    fn test_form_prompt_needs_both_conditions() {
        let password = [field("user", "alice"), field("password", "hunter2")];

        // Sensitive field on a high-risk host: prompt
        let prompt = inspect_form_submission("http://paypal-login.tk/", &password).unwrap();
        assert_eq!(prompt.proceed_label, "Submit Anyway");
        assert!(prompt.message.contains("paypal-login.tk"));

        // Sensitive field on an ordinary host: no prompt
        assert!(inspect_form_submission("http://blog.example.org/", &password).is_none());

        // High-risk host without sensitive fields: no prompt
        let harmless = [field("query", "cats")];
        assert!(inspect_form_submission("http://paypal-login.tk/", &harmless).is_none());
    }

    #[test]
    fn test_form_prompt_matches_value_shapes() {
        let card = [field("field_1", "4111111111111111")];
        assert!(inspect_form_submission("http://secure-pay.xyz/", &card).is_some());

        let ssn = [field("field_2", "078-05-1120")];
        assert!(inspect_form_submission("http://secure-pay.xyz/", &ssn).is_some());
    }

    #[test]
    fn test_link_brand_impersonation() {
        let prompt = inspect_link_click("http://paypal-support.tk/webapps").unwrap();
        assert_eq!(prompt.proceed_label, "Visit Anyway");
        assert!(prompt.message.contains("imitates"));
    }

    #[test]
    fn test_link_ip_with_sensitive_path() {
        assert!(inspect_link_click("http://203.0.113.9/login").is_some());
        // Bare IP without a sensitive path is left to the background filter
        assert!(inspect_link_click("http://203.0.113.9/index.html").is_none());
    }

    #[test]
    fn test_link_malicious_token() {
        assert!(inspect_link_click("http://host.example/webscr?cmd=_login").is_some());
    }

    #[test]
    fn test_ordinary_link_passes() {
        assert!(inspect_link_click("https://docs.example.org/guide").is_none());
        assert!(inspect_link_click("not a url").is_none());
    }
}
