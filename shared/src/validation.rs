//! Input validation functions
//!
//! This module provides validation utilities for user input.
//! Email checks delegate to the `validator` crate.

use validator::ValidateEmail;

/// Maximum username length in characters
pub const MAX_USERNAME_LEN: usize = 50;

/// Maximum length for free-text names (exercises, foods)
pub const MAX_NAME_LEN: usize = 200;

/// Validate username
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Username cannot be empty".to_string());
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(format!(
            "Username must be at most {} characters",
            MAX_USERNAME_LEN
        ));
    }
    if username.chars().any(char::is_whitespace) {
        return Err("Username cannot contain whitespace".to_string());
    }
    Ok(())
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    if !email.validate_email() {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate a required name field (exercise name, food name)
pub fn validate_name(field: &str, value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", field));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(format!("{} must be at most {} characters", field, MAX_NAME_LEN));
    }
    Ok(())
}

/// Validate rep count
pub fn validate_reps(reps: i32) -> Result<(), String> {
    if reps < 0 {
        return Err("Reps cannot be negative".to_string());
    }
    Ok(())
}

/// Validate a non-negative measurement (weight, calories, macros)
pub fn validate_non_negative(field: &str, value: f32) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err(format!("{} must be a valid number", field));
    }
    if value < 0.0 {
        return Err(format!("{} cannot be negative", field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("lifter")]
    #[case("j.doe-99")]
    #[case("a")]
    fn test_valid_usernames(#[case] username: &str) {
        assert!(validate_username(username).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("two words")]
    #[case("tab\tname")]
    fn test_invalid_usernames(#[case] username: &str) {
        assert!(validate_username(username).is_err());
    }

    #[test]
    fn test_username_too_long() {
        let name = "x".repeat(MAX_USERNAME_LEN + 1);
        assert!(validate_username(&name).is_err());
        let name = "x".repeat(MAX_USERNAME_LEN);
        assert!(validate_username(&name).is_ok());
    }

    #[rstest]
    #[case("user@example.com", true)]
    #[case("first.last@sub.example.org", true)]
    #[case("", false)]
    #[case("not-an-email", false)]
    #[case("missing@", false)]
    fn test_email_validation(#[case] email: &str, #[case] valid: bool) {
        assert_eq!(validate_email(email).is_ok(), valid);
    }

    #[test]
    fn test_name_validation() {
        assert!(validate_name("Exercise name", "Bench Press").is_ok());
        assert!(validate_name("Exercise name", "   ").is_err());
        assert!(validate_name("Food name", &"y".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_non_negative_rejects_nan_and_infinity() {
        assert!(validate_non_negative("Weight", f32::NAN).is_err());
        assert!(validate_non_negative("Weight", f32::INFINITY).is_err());
        assert!(validate_non_negative("Weight", -0.5).is_err());
        assert!(validate_non_negative("Weight", 0.0).is_ok());
    }

    proptest! {
        #[test]
        fn prop_non_negative_reps_accepted(reps in 0i32..10_000) {
            prop_assert!(validate_reps(reps).is_ok());
        }

        #[test]
        fn prop_negative_reps_rejected(reps in i32::MIN..0) {
            prop_assert!(validate_reps(reps).is_err());
        }

        #[test]
        fn prop_finite_non_negative_measurements_accepted(value in 0.0f32..10_000.0) {
            prop_assert!(validate_non_negative("Calories", value).is_ok());
        }
    }
}
