use super::ApiError;

const MAX_ID_LEN: usize = 64;

/// Path and body identifiers are opaque strings (UUIDs in practice).
pub fn validate_id<'a>(field: &str, id: &'a str) -> Result<&'a str, ApiError> {
    let trimmed = id.trim();

    if trimmed.is_empty() {
        return Err(ApiError::validation(format!("{field} cannot be empty")));
    }

    if trimmed.len() > MAX_ID_LEN {
        return Err(ApiError::validation(format!(
            "{field} must be {MAX_ID_LEN} characters or less"
        )));
    }

    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_ids() {
        assert_eq!(validate_id("group_id", " g1 ").unwrap(), "g1");
    }

    #[test]
    fn rejects_blank_and_oversized_ids() {
        assert!(validate_id("group_id", "   ").is_err());
        assert!(validate_id("group_id", &"x".repeat(65)).is_err());
        assert!(validate_id("group_id", &"x".repeat(64)).is_ok());
    }
}
