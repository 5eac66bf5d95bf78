//! EmailAddress value object and the email validity predicate.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Shortest accepted address, in characters.
pub const MIN_EMAIL_LEN: usize = 3;

/// Longest accepted address, in characters.
pub const MAX_EMAIL_LEN: usize = 256;

// ASCII word class on purpose: `\w` in the regex crate is Unicode-aware.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_]{1,64}@[A-Za-z0-9_]{1,64}\.[A-Za-z0-9_]{1,64}$")
        .expect("Failed to compile email regex")
});

/// Check whether a candidate email address is acceptable.
///
/// A candidate is valid when it is present, between [`MIN_EMAIL_LEN`] and
/// [`MAX_EMAIL_LEN`] characters long, and is exactly `local@domain.tld` where
/// every segment is 1-64 ASCII word characters (`[A-Za-z0-9_]`).
///
/// This is intentionally much narrower than RFC 5321: hyphens, plus signs,
/// subdomains and surrounding whitespace are all rejected.
///
/// # Example
///
/// ```
/// use contact_app::domain::email::is_valid;
///
/// assert!(is_valid(Some("a@b.c")));
/// assert!(!is_valid(Some("a-b@c.d")));
/// assert!(!is_valid(None));
/// ```
pub fn is_valid(email: Option<&str>) -> bool {
    let Some(email) = email else {
        return false;
    };

    let len = email.chars().count();
    (MIN_EMAIL_LEN..=MAX_EMAIL_LEN).contains(&len) && EMAIL_REGEX.is_match(email)
}

/// A type-safe wrapper for email addresses.
///
/// The only constructor runs [`is_valid`], so every `EmailAddress` held by a
/// contact satisfied the predicate when it was admitted.
///
/// # Example
///
/// ```
/// use contact_app::domain::EmailAddress;
///
/// let email = EmailAddress::new("user@example.com").unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email fails [`is_valid`].
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !is_valid(Some(&email)) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or("", |(local, _)| local)
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for EmailAddress {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EmailAddress {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_boundaries() {
        assert!(!is_valid(Some("")));
        assert!(is_valid(Some("a@b.c")));
        assert!(!is_valid(Some("a@b")));
        assert!(!is_valid(Some("a@b.c.d")));
        assert!(!is_valid(Some("a-b@c.d")));
        assert!(!is_valid(Some("ab")));
        assert!(!is_valid(None));
        assert!(is_valid(Some("A_1@B_2.C_3")));
    }

    #[test]
    fn test_predicate_rejects_overlong_input() {
        let long = format!("{}@{}.{}", "a".repeat(64), "b".repeat(64), "c".repeat(127));
        assert_eq!(long.len(), 257);
        assert!(!is_valid(Some(&long)));
    }

    #[test]
    fn test_predicate_segment_limits() {
        let max = format!("{}@{}.{}", "a".repeat(64), "b".repeat(64), "c".repeat(64));
        assert!(is_valid(Some(&max)));

        let local_too_long = format!("{}@b.c", "a".repeat(65));
        assert!(!is_valid(Some(&local_too_long)));

        let tld_too_long = format!("a@b.{}", "c".repeat(65));
        assert!(!is_valid(Some(&tld_too_long)));
    }

    #[test]
    fn test_predicate_rejects_structure_outside_word_class() {
        assert!(!is_valid(Some("a@@b.c")));
        assert!(!is_valid(Some("a@b@c.d")));
        assert!(!is_valid(Some(" a@b.c")));
        assert!(!is_valid(Some("a@b.c ")));
        assert!(!is_valid(Some("a@b.c\n")));
        assert!(!is_valid(Some("a+tag@b.c")));
        assert!(!is_valid(Some("first.last@b.c")));
        assert!(!is_valid(Some("a@mail.example.com")));
        assert!(!is_valid(Some("@b.c")));
        assert!(!is_valid(Some("a@.c")));
        assert!(!is_valid(Some("a@b.")));
    }

    #[test]
    fn test_predicate_is_ascii_only() {
        assert!(!is_valid(Some("é@b.c")));
        assert!(!is_valid(Some("a@ü.c")));
        assert!(!is_valid(Some("a@b.日本")));
    }

    #[test]
    fn test_email_valid() {
        let email = EmailAddress::new("user@example.com").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
        assert_eq!(email, "user@example.com");
    }

    #[test]
    fn test_email_validates_format() {
        assert!(EmailAddress::new("invalid").is_err());
        assert!(EmailAddress::new("@example.com").is_err());
        assert!(EmailAddress::new("user@").is_err());
        assert!(EmailAddress::new("user@domain").is_err());
        assert!(EmailAddress::new("user.name+tag@example.co.uk").is_err());
        assert!(EmailAddress::new("valid@example.com").is_ok());
    }

    #[test]
    fn test_email_error_carries_candidate() {
        let err = EmailAddress::new("nope").unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail("nope".to_string()));
    }

    #[test]
    fn test_email_parts() {
        let email = EmailAddress::new("user@example.com").unwrap();
        assert_eq!(email.local_part(), "user");
        assert_eq!(email.domain(), "example.com");
    }

    #[test]
    fn test_email_display() {
        let email = EmailAddress::try_from("user@example.com").unwrap();
        assert_eq!(format!("{}", email), "user@example.com");
    }
}
