//! Common types used across plugrun modules.

/// Timestamp wrapper for consistent serialization.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Get current UTC timestamp.
pub fn now() -> Timestamp {
    chrono::Utc::now()
}

/// Check that a registry name is usable.
///
/// Names must be non-empty and must not consist only of whitespace.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}
