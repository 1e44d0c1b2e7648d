//! Field validation rules and their error type

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum length for a name supplied on update
pub const MIN_NAME_LEN: usize = 3;

/// local-part@domain.tld with a letters-only TLD of 2+ characters
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("invalid email regex")
});

/// Check an email address against the accepted pattern.
///
/// Purely syntactic; no DNS lookup is performed.
///
/// # Example
/// ```
/// use users_server::models::is_valid_email;
///
/// assert!(is_valid_email("ann@example.com"));
/// assert!(!is_valid_email("not-an-email"));
/// ```
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// Validation error for request bodies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is missing or empty
    Required { field: &'static str },

    /// Field is shorter than the minimum length
    TooShort { field: &'static str, min: usize },

    /// Field doesn't match the required format
    InvalidFormat { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{} is required", capitalize(field)),
            Self::TooShort { field, min } => {
                write!(f, "{} must be at least {} characters", capitalize(field), min)
            }
            Self::InvalidFormat { field } => write!(f, "Invalid {} format", field),
        }
    }
}

impl std::error::Error for ValidationError {}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Name on create: must be non-empty.
pub fn check_required_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }
    Ok(())
}

/// Name on update: empty means unchanged, otherwise at least [`MIN_NAME_LEN`] characters.
pub fn check_name_change(name: &str) -> Result<(), ValidationError> {
    if !name.is_empty() && name.chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::TooShort {
            field: "name",
            min: MIN_NAME_LEN,
        });
    }
    Ok(())
}

/// Email on create: must be present and well-formed.
pub fn check_required_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || !is_valid_email(email) {
        return Err(ValidationError::InvalidFormat { field: "email" });
    }
    Ok(())
}

/// Email on update: empty means unchanged, otherwise must be well-formed.
pub fn check_email_change(email: &str) -> Result<(), ValidationError> {
    if !email.is_empty() && !is_valid_email(email) {
        return Err(ValidationError::InvalidFormat { field: "email" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for email in [
            "ann@example.com",
            "first.last@sub.example.org",
            "a+tag@example.co",
            "x_y%z-1@my-host.io",
            "UPPER@EXAMPLE.COM",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "",
            "not-an-email",
            "ann.example.com",
            "ann@example",
            "ann@example.c",
            "ann@example.c0m",
            "@example.com",
            "ann@.com",
            "ann smith@example.com",
            "ann@example.com ",
        ] {
            assert!(!is_valid_email(email), "{email:?} should be invalid");
        }
    }

    #[test]
    fn error_display() {
        assert_eq!(
            ValidationError::Required { field: "name" }.to_string(),
            "Name is required"
        );
        assert_eq!(
            ValidationError::TooShort { field: "name", min: 3 }.to_string(),
            "Name must be at least 3 characters"
        );
        assert_eq!(
            ValidationError::InvalidFormat { field: "email" }.to_string(),
            "Invalid email format"
        );
    }

    #[test]
    fn create_rules() {
        assert!(check_required_name("Ann").is_ok());
        assert!(check_required_name("A").is_ok());
        assert_eq!(
            check_required_name(""),
            Err(ValidationError::Required { field: "name" })
        );
        assert!(check_required_email("ann@example.com").is_ok());
        assert!(check_required_email("").is_err());
        assert!(check_required_email("ann@").is_err());
    }

    #[test]
    fn update_rules_treat_empty_as_unchanged() {
        assert!(check_name_change("").is_ok());
        assert!(check_email_change("").is_ok());
        assert!(check_name_change("Bob").is_ok());
        assert!(check_name_change("Bo").is_err());
        assert!(check_email_change("bob@").is_err());
    }

    #[test]
    fn name_length_counts_characters() {
        // three characters, six bytes
        assert!(check_name_change("Łéó").is_ok());
        // two characters, four bytes
        assert!(check_name_change("Łé").is_err());
    }
}
