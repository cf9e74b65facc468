//! Custom validation functions for the loader's structural checks.

use chrono::TimeDelta;
use validator::ValidationError;

/// Validate that a duration is at least one second.
pub fn validate_at_least_one_second(value: &TimeDelta) -> Result<(), ValidationError> {
    if *value >= TimeDelta::seconds(1) {
        Ok(())
    } else {
        Err(ValidationError::new("min_one_second").with_message("must be at least 1s".into()))
    }
}

/// Validate that no entry in a name list is blank.
pub fn validate_names(names: &[String]) -> Result<(), ValidationError> {
    if names.iter().any(|name| name.trim().is_empty()) {
        return Err(ValidationError::new("blank_name"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_second_is_the_floor() {
        assert!(validate_at_least_one_second(&TimeDelta::seconds(1)).is_ok());
        assert!(validate_at_least_one_second(&TimeDelta::milliseconds(999)).is_err());
        assert!(validate_at_least_one_second(&TimeDelta::seconds(-1)).is_err());
    }

    #[test]
    fn blank_check_names_are_rejected() {
        assert!(validate_names(&["database".into(), "redis".into()]).is_ok());
        assert!(validate_names(&["database".into(), " ".into()]).is_err());
    }
}
