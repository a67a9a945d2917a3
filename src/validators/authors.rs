//! Validation for the author table page action.

use log::warn;
use validator::{Validate, ValidationError};

use crate::constants::{
    ACTION_LOAD_AUTHORS_PAGE, CODE_BAD_REQUEST, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE,
    ERR_INVALID_PAGE_SIZE, ERR_UNKNOWN_ACTION,
};
use crate::errors::ApiError;
use crate::models::{AuthorsPageQuery, LoadAuthorsPageForm};
use crate::services::pagination::{PageRequest, PageSize};
use crate::validators::{coerce_int, validation_errors_to_api_error};

/// Custom validator for the per-page field.
/// Validates that the value is one of the selector's options.
pub fn validate_page_size(per_page: u32) -> Result<(), ValidationError> {
    match PageSize::new(per_page) {
        Some(_) => Ok(()),
        None => {
            let mut error = ValidationError::new("invalid_page_size");
            error.message = Some(ERR_INVALID_PAGE_SIZE.into());
            Err(error)
        }
    }
}

/// Coerce a form field, treating a missing or blank value as `default`.
fn coerce_field(raw: Option<&str>, default: u32) -> i64 {
    match raw {
        Some(value) if !value.trim().is_empty() => coerce_int(value),
        _ => i64::from(default),
    }
}

/// Reject any action other than the page action.
pub fn validate_action(action: Option<&str>) -> Result<(), ApiError> {
    match action {
        None => Ok(()),
        Some(name) if name == ACTION_LOAD_AUTHORS_PAGE => Ok(()),
        Some(name) => {
            warn!("Rejected unknown action: {}", name);
            Err(ApiError::BadRequest {
                code: CODE_BAD_REQUEST.to_string(),
                message: ERR_UNKNOWN_ACTION.to_string(),
            })
        }
    }
}

/// Turn the raw form into a validated page request.
///
/// `page` is clamped to at least 1. `per_page` must be one of the
/// selector's options; anything else fails validation.
pub fn parse_page_request(form: &LoadAuthorsPageForm) -> Result<PageRequest, ApiError> {
    validate_action(form.action.as_deref())?;

    let page = coerce_field(form.page.as_deref(), DEFAULT_PAGE_NUMBER);
    let per_page = coerce_field(form.per_page.as_deref(), DEFAULT_PAGE_SIZE);

    let query = AuthorsPageQuery {
        page: page.clamp(1, i64::from(u32::MAX)) as u32,
        per_page: u32::try_from(per_page).unwrap_or(0),
    };
    query.validate().map_err(|e| {
        let err = validation_errors_to_api_error(e);
        warn!("Validation failed for authors page: {}", err);
        err
    })?;

    // per_page passed validate_page_size above
    let page_size = PageSize::new(query.per_page).unwrap_or_default();

    Ok(PageRequest::new(query.page, page_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CODE_VALIDATION_FAILED;

    fn form(page: Option<&str>, per_page: Option<&str>) -> LoadAuthorsPageForm {
        LoadAuthorsPageForm {
            action: Some(ACTION_LOAD_AUTHORS_PAGE.to_string()),
            page: page.map(str::to_string),
            per_page: per_page.map(str::to_string),
        }
    }

    #[test]
    fn test_defaults_when_missing() {
        let request = parse_page_request(&LoadAuthorsPageForm::default()).unwrap();
        assert_eq!(request, PageRequest::default());
        assert_eq!(request.page(), 1);
        assert_eq!(request.page_size().get(), 10);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let request = parse_page_request(&form(Some(""), Some("  "))).unwrap();
        assert_eq!(request, PageRequest::default());
    }

    #[test]
    fn test_valid_values() {
        let request = parse_page_request(&form(Some("3"), Some("15"))).unwrap();
        assert_eq!(request.page(), 3);
        assert_eq!(request.page_size().get(), 15);
    }

    #[test]
    fn test_page_is_clamped_to_one() {
        for raw in ["0", "-4", "abc"] {
            let request = parse_page_request(&form(Some(raw), Some("20"))).unwrap();
            assert_eq!(request.page(), 1, "page {:?}", raw);
        }
    }

    #[test]
    fn test_huge_page_saturates() {
        let request = parse_page_request(&form(Some("99999999999"), None)).unwrap();
        assert_eq!(request.page(), u32::MAX);
    }

    #[test]
    fn test_invalid_page_size_rejected() {
        for raw in ["12", "0", "-10", "abc", "100"] {
            let err = parse_page_request(&form(None, Some(raw))).unwrap_err();
            match err {
                ApiError::ValidationError { code, errors } => {
                    assert_eq!(code, CODE_VALIDATION_FAILED);
                    assert_eq!(errors, vec![ERR_INVALID_PAGE_SIZE.to_string()]);
                }
                other => panic!("unexpected error for {:?}: {}", raw, other),
            }
        }
    }

    #[test]
    fn test_unknown_action_rejected() {
        let mut bad = form(None, None);
        bad.action = Some("delete_authors".to_string());
        let err = parse_page_request(&bad).unwrap_err();
        assert_eq!(err.code(), CODE_BAD_REQUEST);
    }

    #[test]
    fn test_action_is_optional() {
        let mut no_action = form(Some("2"), Some("10"));
        no_action.action = None;
        assert_eq!(parse_page_request(&no_action).unwrap().page(), 2);
    }

    #[test]
    fn test_validate_page_size() {
        assert!(validate_page_size(10).is_ok());
        assert!(validate_page_size(15).is_ok());
        assert!(validate_page_size(20).is_ok());
        assert!(validate_page_size(11).is_err());
    }

    #[test]
    fn test_query_validation_checks_page_size() {
        let valid = AuthorsPageQuery {
            page: 1,
            per_page: 15,
        };
        assert!(valid.validate().is_ok());

        let invalid = AuthorsPageQuery {
            page: 1,
            per_page: 12,
        };
        let errors = invalid.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("per_page"));
        assert_eq!(errors.field_errors().len(), 1);
    }
}
