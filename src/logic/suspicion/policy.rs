//! Suspicion Policy
//!
//! One shared, pure classification function consumed by both the background
//! orchestrator and the page-side guard. The two contexts differ only in the
//! profile they evaluate with; the rule tables live in `rules`.
//!
//! Fail-open contract: a URL that does not parse is never suspicious. A false
//! negative here only means "no remote check"; a false positive only costs
//! one extra classification call.

use url::Url;

use super::rules;

// ============================================================================
// PROFILES
// ============================================================================

/// Which subset of the rule tables applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Full rule set, used by the background pre-filter
    Background,
    /// Looser strict-subset used inside the page context (no remote calls)
    PageGuard,
}

/// Outcome of one policy evaluation. Reasons are diagnostic only.
#[derive(Debug, Clone)]
pub struct SuspicionVerdict {
    pub suspicious: bool,
    pub reasons: Vec<String>,
}

impl SuspicionVerdict {
    fn clean() -> Self {
        Self { suspicious: false, reasons: Vec::new() }
    }
}

// ============================================================================
// EVALUATION
// ============================================================================

/// Background pre-filter contract: deterministic, side-effect-free, sub-ms.
pub fn is_suspicious(raw: &str) -> bool {
    evaluate(raw, Profile::Background).suspicious
}

/// Evaluate a URL against the given profile.
pub fn evaluate(raw: &str, profile: Profile) -> SuspicionVerdict {
    let url = match Url::parse(raw) {
        Ok(u) => u,
        Err(e) => {
            // Fail open: unparseable input never reaches the classifier
            log::debug!("Unparseable URL skipped: {} ({})", raw, e);
            return SuspicionVerdict::clean();
        }
    };

    let host = match url.host_str() {
        Some(h) => h.to_lowercase(),
        None => return SuspicionVerdict::clean(),
    };

    // Allow-list override beats every following rule
    if is_trusted_host(&host) {
        return SuspicionVerdict::clean();
    }

    let mut reasons = Vec::new();

    if has_tld(&host, rules::SUSPICIOUS_TLDS) {
        reasons.push("High-risk top level domain".to_string());
    }
    if rules::IPV4_HOST.is_match(&host) {
        reasons.push("URL contains IP address instead of domain".to_string());
    }
    if let Some(word) = rules::BRAND_KEYWORDS.iter().find(|k| host.contains(*k)) {
        reasons.push(format!("Hostname contains brand/urgency keyword '{}'", word));
    }
    if is_shortener(&host) {
        reasons.push("Uses URL shortening service".to_string());
    }
    if is_homograph(&host) {
        reasons.push("Hostname contains homograph-capable characters".to_string());
    }

    if profile == Profile::Background {
        if rules::BRAND_HYPHEN.is_match(&host) {
            reasons.push("Domain contains prefix/suffix separators".to_string());
        }
        if rules::DIGIT_RUN.is_match(&host) {
            reasons.push("Hostname contains long digit run".to_string());
        }
        if !url.username().is_empty() {
            reasons.push("URL contains @ symbol (credential hiding)".to_string());
        }
        if rules::MIXED_RUN.is_match(&host) {
            reasons.push("Hostname mixes digits and letters".to_string());
        }
        if host.len() < 6 && !host.contains('.') {
            reasons.push("Unusually short hostname".to_string());
        }
        if host.split('.').count() > 4 {
            reasons.push("Excessive subdomain levels".to_string());
        }
        if has_sensitive_path(url.path()) {
            reasons.push("Path targets a sensitive action".to_string());
        }
        if has_tld(&host, rules::UNCOMMON_TLDS) {
            reasons.push("Uncommon top level domain".to_string());
        }
    }

    SuspicionVerdict { suspicious: !reasons.is_empty(), reasons }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Exact or subdomain match against the trusted allow-list
pub fn is_trusted_host(host: &str) -> bool {
    rules::TRUSTED_DOMAINS
        .iter()
        .any(|d| host == *d || host.ends_with(&format!(".{}", d)))
}

/// Stricter co-occurrence check used by the page-side guard before it
/// cancels a form submission: brand word AND bad TLD on the same host.
pub fn brand_tld_cooccurrence(host: &str) -> bool {
    let host = host.to_lowercase();
    let branded = rules::BRAND_KEYWORDS.iter().any(|k| host.contains(k))
        || rules::BRAND_HYPHEN.is_match(&host);
    branded && (has_tld(&host, rules::SUSPICIOUS_TLDS) || has_tld(&host, rules::UNCOMMON_TLDS))
}

pub(crate) fn has_sensitive_path(path: &str) -> bool {
    let path = path.to_lowercase();
    rules::SENSITIVE_PATHS.iter().any(|p| path.contains(p))
}

fn has_tld(host: &str, set: &[&str]) -> bool {
    if !host.contains('.') {
        return false;
    }
    match host.rsplit('.').next() {
        Some(tld) => set.contains(&tld),
        None => false,
    }
}

fn is_shortener(host: &str) -> bool {
    // Exact domain suffix, not substring ("robit.ly.com" must not match)
    rules::URL_SHORTENERS
        .iter()
        .any(|s| host == *s || host.ends_with(&format!(".{}", s)))
}

fn is_homograph(host: &str) -> bool {
    // Url normalizes IDN hosts to punycode, so check both encodings
    rules::HOMOGRAPH.is_match(host) || host.split('.').any(|label| label.starts_with("xn--"))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trusted_domains_never_suspicious() {
        // Allow-list wins regardless of path or query
        assert!(!is_suspicious("https://github.com/foo"));
        assert!(!is_suspicious("https://accounts.google.com/login?next=/verify"));
        assert!(!is_suspicious("https://www.paypal.com/signin"));
    }

    #[test]
    fn test_ipv4_host_is_suspicious() {
        assert!(is_suspicious("http://192.168.1.1/login"));
        assert!(is_suspicious("https://8.8.8.8/"));
    }

    #[test]
    fn test_suspicious_tld() {
        assert!(is_suspicious("http://example.tk/"));
        assert!(is_suspicious("http://free-stuff.xyz/"));
        assert!(!is_suspicious("https://example.org/"));
    }

    #[test]
    fn test_brand_keyword_in_host() {
        assert!(is_suspicious("http://paypal-resolution.center.example.net/"));
        assert!(is_suspicious("http://secure-verify.example.net/"));
    }

    #[test]
    fn test_url_shortener() {
        assert!(is_suspicious("https://bit.ly/3abcde"));
        // Substring of a shortener is not a shortener
        assert!(!is_suspicious("https://orbit.lycos-mirror.org/"));
    }

    #[test]
    fn test_credential_injection() {
        assert!(is_suspicious("http://user@example.org/"));
    }

    #[test]
    fn test_excessive_subdomains() {
        assert!(is_suspicious("http://a.b.c.d.example.org/"));
        assert!(!is_suspicious("https://docs.example.org/"));
    }

    #[test]
    fn test_sensitive_path() {
        assert!(is_suspicious("http://example.org/verify"));
        assert!(is_suspicious("http://example.org/accounts/login"));
    }

    #[test]
    fn test_homograph_punycode() {
        // "аррӏе.com" (Cyrillic) parses to punycode
        assert!(is_suspicious("https://xn--80ak6aa92e.com/"));
    }

    #[test]
    fn test_malformed_url_fails_open() {
        assert!(!is_suspicious("not a url at all"));
        assert!(!is_suspicious(""));
    }

    #[test]
    fn test_page_guard_profile_is_subset() {
        // Sensitive path alone is a Background-only rule
        let v = evaluate("http://example.org/verify", Profile::PageGuard);
        assert!(!v.suspicious);
        // IPv4 fires in both profiles
        let v = evaluate("http://192.168.1.1/", Profile::PageGuard);
        assert!(v.suspicious);
    }

    #[test]
    fn test_reasons_are_reported() {
        let v = evaluate("http://192.168.1.1/login", Profile::Background);
        assert!(v.suspicious);
        assert!(v.reasons.iter().any(|r| r.contains("IP address")));
        assert!(v.reasons.iter().any(|r| r.contains("sensitive action")));
    }

    #[test]
    fn test_brand_tld_cooccurrence() {
        assert!(brand_tld_cooccurrence("paypal-login.tk"));
        assert!(!brand_tld_cooccurrence("paypal-login.example.org"));
        assert!(!brand_tld_cooccurrence("plain.tk"));
    }
}
