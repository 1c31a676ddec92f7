use thiserror::Error;

/// A single field constraint that a form submission broke.
///
/// `Display` is the message shown under the offending field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Nazwa jest wymagana")]
    LabelRequired,

    #[error("Nazwa musi mieć co najmniej {min} znaki")]
    LabelTooShort { min: usize },

    #[error("Nazwa może mieć maksymalnie {max} znaków")]
    LabelTooLong { max: usize },

    #[error("Podaj poprawny adres URL")]
    InvalidUrl,
}

/// Per-field validation outcome for the item form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub label: Option<ValidationError>,
    pub url: Option<ValidationError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.url.is_none()
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msgs = [self.label, self.url]
            .into_iter()
            .flatten()
            .map(|e| e.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", msgs.join("; "))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("{0}")]
    Validation(FormErrors),

    /// The referenced item is no longer in the tree (e.g. a stale drop target).
    #[error("Nie znaleziono pozycji {0}")]
    NotFound(String),

    /// The asynchronous save of an add/edit/delete was rejected.
    #[error("Nie udało się zapisać zmian: {0}")]
    OperationFailed(String),
}

impl From<FormErrors> for NavError {
    fn from(errors: FormErrors) -> Self {
        NavError::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::LabelRequired.to_string(), "Nazwa jest wymagana");
        assert_eq!(
            ValidationError::LabelTooShort { min: 2 }.to_string(),
            "Nazwa musi mieć co najmniej 2 znaki"
        );
        assert_eq!(
            ValidationError::LabelTooLong { max: 50 }.to_string(),
            "Nazwa może mieć maksymalnie 50 znaków"
        );
    }

    #[test]
    fn test_form_errors_display_joins_fields() {
        let errors = FormErrors {
            label: Some(ValidationError::LabelRequired),
            url: Some(ValidationError::InvalidUrl),
        };
        assert!(!errors.is_empty());
        assert_eq!(
            NavError::from(errors).to_string(),
            "Nazwa jest wymagana; Podaj poprawny adres URL"
        );
    }

    #[test]
    fn test_operation_failed_message() {
        let e = NavError::OperationFailed("timeout".to_string());
        assert_eq!(e.to_string(), "Nie udało się zapisać zmian: timeout");
    }
}
