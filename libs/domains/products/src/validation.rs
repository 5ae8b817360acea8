//! Submission validity for create/edit forms.

use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

/// Field errors collected for one submitted payload.
///
/// Controllers only read [`ModelState::is_valid`]; the errors travel back to
/// the form so the user can correct them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelState {
    errors: ValidationErrors,
}

impl ModelState {
    /// A state with no errors.
    pub fn valid() -> Self {
        Self::default()
    }

    /// Runs the payload's `Validate` rules.
    pub fn of<T: Validate>(payload: &T) -> Self {
        match payload.validate() {
            Ok(()) => Self::valid(),
            Err(errors) => Self { errors },
        }
    }

    pub fn add_error(&mut self, field: &'static str, message: impl Into<Cow<'static, str>>) {
        let mut error = ValidationError::new("invalid");
        error.message = Some(message.into());
        self.errors.add(field, error);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// The collected errors, or `None` when the state is valid.
    pub fn into_errors(self) -> Option<ValidationErrors> {
        if self.is_valid() {
            None
        } else {
            Some(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use rust_decimal::Decimal;

    #[test]
    fn test_valid_payload() {
        let product = Product::new(1, "Kalem", Decimal::from(100), 12, "Kırmızı");
        let state = ModelState::of(&product);
        assert!(state.is_valid());
        assert_eq!(state.into_errors(), None);
    }

    #[test]
    fn test_invalid_payload_keeps_field_errors() {
        let product = Product {
            name: String::new(),
            ..Product::new(1, "x", Decimal::from(1), 1, "Mavi")
        };
        let state = ModelState::of(&product);

        assert!(!state.is_valid());
        assert!(state.errors().field_errors().contains_key("name"));
    }

    #[test]
    fn test_add_error_invalidates() {
        let mut state = ModelState::valid();
        assert!(state.is_valid());

        state.add_error("Name", "Required");

        assert!(!state.is_valid());
        let errors = state.into_errors().unwrap();
        let name_errors = errors.field_errors()["Name"];
        assert_eq!(name_errors[0].message.as_deref(), Some("Required"));
    }
}
