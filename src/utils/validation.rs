//! Validation helpers
//!
//! Custom validators used by the request payloads plus normalisation of
//! list/search query parameters.

use validator::ValidationError;

/// Default page size for list endpoints
pub const DEFAULT_LIMIT: i64 = 100;

/// Reject strings that are empty once trimmed
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Resolve `skip`/`limit` query parameters into a non-negative offset and limit
pub fn page_bounds(skip: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let offset = skip.unwrap_or(0).max(0);
    let limit = limit.unwrap_or(DEFAULT_LIMIT).max(0);
    (offset, limit)
}

/// Treat empty or whitespace-only filter values as absent
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
