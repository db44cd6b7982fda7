//! Custom field validators for `#[validate(custom(...))]`

use std::borrow::Cow;

use hl_shared::validation::{is_verification_code, validators};
use validator::ValidationError;

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if validators::not_blank(value) {
        Ok(())
    } else {
        Err(failure("required", "Must not be blank"))
    }
}

pub(crate) fn verification_code(value: &str) -> Result<(), ValidationError> {
    if is_verification_code(value) {
        Ok(())
    } else {
        Err(failure("code_format", "Code must be exactly 6 digits"))
    }
}

pub(crate) fn image_data_uri(value: &str) -> Result<(), ValidationError> {
    if value.starts_with("data:image/") {
        Ok(())
    } else {
        Err(failure("image_format", "Profile image must be a data:image URI"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Jane").is_ok());
        assert!(not_blank("   ").is_err());
    }

    #[test]
    fn test_verification_code() {
        assert!(verification_code("123456").is_ok());
        assert!(verification_code("12345").is_err());
        assert!(verification_code("12a456").is_err());
    }

    #[test]
    fn test_image_data_uri() {
        assert!(image_data_uri("data:image/png;base64,AAAA").is_ok());
        assert!(image_data_uri("https://example.com/a.png").is_err());
    }
}
