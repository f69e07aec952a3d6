//! Domain-level constants.
//!
//! These constants define request parameters and validation requirements.

// =============================================================================
// Requests and Tables
// =============================================================================

/// Query string parameter carrying the email on fetch and delete requests
pub const EMAIL_QUERY_PARAM: &str = "email";

/// Default table holding user records
pub const DEFAULT_TABLE_NAME: &str = "users";

// =============================================================================
// Validation
// =============================================================================

/// Shortest address the email predicate accepts
pub const MIN_EMAIL_LENGTH: usize = 3;

/// Longest address the email predicate accepts (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;
