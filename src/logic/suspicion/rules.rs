//! Suspicion Rule Tables
//!
//! Static allow-lists, deny-lists and patterns shared by the background
//! pre-filter and the page-side guard. No logic here - only data.

use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// DOMAIN LISTS
// ============================================================================

/// Trusted domains. Exact or subdomain match overrides every other rule.
pub const TRUSTED_DOMAINS: &[&str] = &[
    "google.com",
    "youtube.com",
    "facebook.com",
    "amazon.com",
    "wikipedia.org",
    "github.com",
    "microsoft.com",
    "apple.com",
    "netflix.com",
    "paypal.com",
    "twitter.com",
    "linkedin.com",
    "instagram.com",
    "reddit.com",
    "stackoverflow.com",
    "mozilla.org",
    "cloudflare.com",
];

/// High-risk top level domains (free registration, phishing-heavy)
pub const SUSPICIOUS_TLDS: &[&str] = &["tk", "ml", "ga", "cf", "gq", "pw", "top", "click", "xyz"];

/// Secondary set of uncommon TLDs that still warrant a remote check
pub const UNCOMMON_TLDS: &[&str] = &["work", "loan", "racing", "win", "bid", "stream", "download"];

/// URL shortening services. Matched with exact domain suffix, not substring.
pub const URL_SHORTENERS: &[&str] = &[
    "bit.ly",
    "tinyurl.com",
    "t.co",
    "goo.gl",
    "ow.ly",
    "short.link",
    "tiny.cc",
    "is.gd",
    "buff.ly",
    "short.url",
];

// ============================================================================
// KEYWORD LISTS
// ============================================================================

/// Brand and urgency keywords that rarely appear in legitimate hostnames
pub const BRAND_KEYWORDS: &[&str] = &[
    "verify",
    "secure",
    "account",
    "update",
    "login",
    "signin",
    "banking",
    "confirm",
    "suspended",
    "urgent",
    "paypal",
    "appleid",
    "microsoft",
    "amazon",
    "netflix",
    "wallet",
];

/// Security-sense words checked for `word-` / `-word` hyphenation patterns
pub const SECURITY_WORDS: &[&str] =
    &["secure", "login", "verify", "account", "update", "signin", "support", "confirm"];

/// Path segments that indicate a sensitive action on the target page
pub const SENSITIVE_PATHS: &[&str] = &[
    "/login", "/signin", "/verify", "/account", "/secure", "/update", "/confirm", "/password",
    "/banking", "/wallet",
];

/// URL tokens common in phishing kits
pub const MALICIOUS_TOKENS: &[&str] = &[
    "webscr",
    "cmd=_login",
    "account-verify",
    "secure-update",
    "confirm-identity",
    "wp-includes/login",
];

// ============================================================================
// PATTERNS
// ============================================================================

/// Bare IPv4 literal used as hostname
pub static IPV4_HOST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,3}(?:\.\d{1,3}){3}$").unwrap());

/// Run of four or more digits inside a hostname
pub static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4,}").unwrap());

/// Alternating digit/letter runs (auto-generated throwaway hosts)
pub static MIXED_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:[a-z]\d){3,}|(?:\d[a-z]){3,}").unwrap());

/// Non-Latin letters plausibly used for homograph spoofing
pub static HOMOGRAPH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Cyrillic}|\p{Greek}|\p{Armenian}").unwrap());

/// `brand-` / `-brand` hyphenation of security-sense words
pub static BRAND_HYPHEN: Lazy<Regex> = Lazy::new(|| {
    let words = SECURITY_WORDS.join("|");
    Regex::new(&format!(r"(?:^|\.)(?:{words})-|-(?:{words})(?:\.|$)")).unwrap()
});

/// Well-known brand followed by a high-risk TLD anywhere after it
pub static BRAND_IMPERSONATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:paypal|apple|appleid|microsoft|amazon|netflix|google|facebook|bank)[a-z0-9.-]*\.(?:tk|ml|ga|cf|gq|pw|top|click|xyz)$",
    )
    .unwrap()
});

/// Form field names that carry credentials or payment data
pub static SENSITIVE_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)pass(?:word)?|pwd|pin|card|cc[-_]?num|cvv|ssn|social|login|user(?:name)?")
        .unwrap()
});

/// Field value shaped like a payment card number
pub static CARD_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{13,19}$").unwrap());

/// Field value shaped like a US social security number
pub static SSN_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3}-?\d{2}-?\d{4}$").unwrap());

// ============================================================================
// TESTS
// ============================================================================
