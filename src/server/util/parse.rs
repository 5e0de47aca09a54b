use crate::server::error::AppError;

/// Parses a path identifier into a database id.
///
/// Malformed identifiers are indistinguishable from missing records for the client, so
/// both resolve to the same 404 message.
///
/// # Arguments
/// - `value` - Raw path segment
/// - `not_found` - Message returned when the value is not a positive integer
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::NotFound)` - Value is not a positive integer
pub fn parse_id(value: &str, not_found: &str) -> Result<i32, AppError> {
    value
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::NotFound(not_found.to_string()))
}
