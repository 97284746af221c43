//! DNS name normalization and validation
//!
//! Shared by the instance model and the RRSet model: both normalize their
//! host/domain fields through [`normalize`] at construction time, so a name
//! that made it into a value object is always lower-case, trimmed, and
//! grammatically valid.

use crate::error::{Error, Result};

/// Maximum total length of a DNS name
const MAX_NAME_LEN: usize = 253;

/// Maximum length of a single label
const MAX_LABEL_LEN: usize = 63;

/// Normalize a raw host/domain name.
///
/// Strips surrounding whitespace and a single trailing dot, lower-cases the
/// result, and verifies it against the DNS host-name grammar: labels of 1-63
/// characters from `[a-z0-9-]` with no leading or trailing hyphen, joined by
/// `.`, at most 253 characters in total.
///
/// Normalization is idempotent: feeding an already-normalized name back in
/// returns the same value.
///
/// # Errors
///
/// Returns [`Error::Validation`] when the input does not conform.
pub fn normalize(raw: &str) -> Result<String> {
    let name = raw.trim().to_ascii_lowercase();
    let name = name.strip_suffix('.').unwrap_or(&name).to_string();

    if name.is_empty() {
        return Err(Error::validation("DNS name cannot be empty"));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(Error::validation(format!(
            "DNS name {:?} exceeds {} characters",
            name, MAX_NAME_LEN
        )));
    }

    for label in name.split('.') {
        validate_label(&name, label)?;
    }

    Ok(name)
}

fn validate_label(name: &str, label: &str) -> Result<()> {
    if label.is_empty() {
        return Err(Error::validation(format!(
            "DNS name {:?} contains an empty label",
            name
        )));
    }
    if label.len() > MAX_LABEL_LEN {
        return Err(Error::validation(format!(
            "Label {:?} in {:?} exceeds {} characters",
            label, name, MAX_LABEL_LEN
        )));
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(Error::validation(format!(
            "Label {:?} in {:?} cannot start or end with a hyphen",
            label, name
        )));
    }
    if let Some(c) = label
        .chars()
        .find(|c| !c.is_ascii_lowercase() && !c.is_ascii_digit() && *c != '-')
    {
        return Err(Error::validation(format!(
            "Invalid character {:?} in DNS name {:?}",
            c, name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize("Example.COM. ").unwrap(), "example.com");
        assert_eq!(normalize("  web1  ").unwrap(), "web1");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("Example.COM. ").unwrap();
        let twice = normalize(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_accepts_valid_names() {
        for name in ["example.com", "a.b.c", "web-1.example.com", "0.example.com"] {
            assert!(normalize(name).is_ok(), "expected {:?} to be valid", name);
        }
    }

    #[test]
    fn test_rejects_invalid_names() {
        for name in [
            "",
            " ",
            "exa mple.com",
            "example..com",
            "-web.example.com",
            "web-.example.com",
            "under_score.example.com",
            "héllo.example.com",
        ] {
            assert!(normalize(name).is_err(), "expected {:?} to be rejected", name);
        }
    }

    #[test]
    fn test_rejects_overlong_names() {
        let label = "a".repeat(64);
        assert!(normalize(&label).is_err());

        // 63-character labels are fine, but the total must stay under 254
        let long_name = vec!["a".repeat(63); 4].join(".");
        assert!(long_name.len() > MAX_NAME_LEN);
        assert!(normalize(&long_name).is_err());
        assert!(normalize(&"a".repeat(63)).is_ok());
    }
}
