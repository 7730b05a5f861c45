//! Input validation utilities
//!
//! Checks for user-supplied column ids and query parameter names.

use crate::error::UtilsError;

/// Validate a column id from a layout file
pub fn validate_column_id(id: &str) -> Result<(), UtilsError> {
    if id.trim().is_empty() {
        return Err(UtilsError::Validation {
            message: "Column id cannot be empty".to_string(),
        });
    }

    if id.trim() != id {
        return Err(UtilsError::Validation {
            message: format!("Column id '{}' has leading or trailing whitespace", id),
        });
    }

    Ok(())
}

/// Validate the name of a sort query parameter
pub fn validate_param_name(name: &str) -> Result<(), UtilsError> {
    if name.is_empty() {
        return Err(UtilsError::Validation {
            message: "Parameter name cannot be empty".to_string(),
        });
    }

    // These would split or corrupt the query string
    if name.contains(['&', '=', '#', '?']) || name.chars().any(char::is_whitespace) {
        return Err(UtilsError::Validation {
            message: format!(
                "Invalid parameter name '{}': must not contain '&', '=', '#', '?' or whitespace",
                name
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_column_id_accepts_valid_ids() {
        assert!(validate_column_id("name").is_ok());
        assert!(validate_column_id("first name").is_ok());
        assert!(validate_column_id("42").is_ok());
    }

    #[test]
    fn test_validate_column_id_rejects_invalid_ids() {
        assert!(validate_column_id("").is_err());
        assert!(validate_column_id("   ").is_err());
        assert!(validate_column_id(" name").is_err());
    }

    #[test]
    fn test_validate_param_name() {
        assert!(validate_param_name("sort").is_ok());
        assert!(validate_param_name("order_by").is_ok());
        assert!(validate_param_name("").is_err());
        assert!(validate_param_name("a=b").is_err());
        assert!(validate_param_name("a&b").is_err());
        assert!(validate_param_name("sort order").is_err());
    }
}
