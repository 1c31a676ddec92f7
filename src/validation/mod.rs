use crate::errors::{FormErrors, ValidationError};
use crate::models::NavItemInput;
use url::Url;

pub(crate) const LABEL_MIN_CHARS: usize = 2;
pub(crate) const LABEL_MAX_CHARS: usize = 50;

pub(crate) fn validate_label(raw: &str) -> Result<String, ValidationError> {
    let label = raw.trim();
    // Count characters, not bytes: labels are often non-ASCII ("Nowości").
    let len = label.chars().count();
    if len == 0 {
        Err(ValidationError::LabelRequired)
    } else if len < LABEL_MIN_CHARS {
        Err(ValidationError::LabelTooShort {
            min: LABEL_MIN_CHARS,
        })
    } else if len > LABEL_MAX_CHARS {
        Err(ValidationError::LabelTooLong {
            max: LABEL_MAX_CHARS,
        })
    } else {
        Ok(label.to_string())
    }
}

/// Empty link fields mean "no link".
pub(crate) fn validate_url(raw: &str) -> Result<Option<String>, ValidationError> {
    let url = raw.trim();
    if url.is_empty() {
        return Ok(None);
    }
    Url::parse(url)
        .map(|_| Some(url.to_string()))
        .map_err(|_| ValidationError::InvalidUrl)
}

/// Validate both fields of the item form, reporting every failing field.
pub(crate) fn validate_form(label: &str, url: &str) -> Result<NavItemInput, FormErrors> {
    match (validate_label(label), validate_url(url)) {
        (Ok(label), Ok(url)) => Ok(NavItemInput { label, url }),
        (label, url) => Err(FormErrors {
            label: label.err(),
            url: url.err(),
        }),
    }
}
