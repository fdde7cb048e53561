//! # URL Detection
//!
//! Finds URLs embedded in item values.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

const SCHEMES: &[&str] = &["http://", "https://"];

/// Returns true if `token` is an absolute http(s) URL with a non-empty remainder.
pub fn is_url(token: &str) -> bool {
    SCHEMES.iter().any(|scheme| {
        token.len() > scheme.len()
            && token
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Returns the first whitespace-delimited token of `value` that is a URL.
pub fn extract_url(value: &str) -> Option<&str> {
    value.split_whitespace().find(|token| is_url(token))
}
