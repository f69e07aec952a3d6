//! Email validity predicate.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{MAX_EMAIL_LENGTH, MIN_EMAIL_LENGTH};

/// Dot-atom local part (RFC 5322 atext), "@", then at least two domain labels.
/// A label is alphanumeric with interior hyphens.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~\-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~\-]+)*",
        r"@[A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?)+$",
    ))
    .expect("email regex is valid")
});

/// Check whether a string is an acceptable user email.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() < MIN_EMAIL_LENGTH || email.len() > MAX_EMAIL_LENGTH {
        return false;
    }
    EMAIL_REGEX.is_match(email)
}
