//! Scalar decoration stripping
//!
//! The controller wraps scalar values in structural decoration when they are
//! rendered out of a JSON node: strings keep their quotes (`"107"`) and list
//! wrapped scalars keep their brackets (`["107"]`). These transforms peel one
//! layer each and compose for the combined case.

/// Strip one layer of surrounding double quotes, if present on both ends.
pub fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Strip one layer of surrounding square brackets, if present on both ends.
pub fn strip_square_brackets(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('[') && value.ends_with(']') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
