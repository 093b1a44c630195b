//! Tour field rules.

use crate::error::AppError;

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESTINATION_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 300;

/// Field checks applied before anything reaches the tours table.
pub struct TourRules;

impl TourRules {
    /// Trimmed, non-empty, at most `max` characters.
    pub fn required_text(field: &str, value: &str, max: usize) -> Result<String, AppError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(AppError::Validation(format!("{} is required", field)));
        }
        Self::bounded_text(field, value, max)
    }

    pub fn bounded_text(field: &str, value: &str, max: usize) -> Result<String, AppError> {
        if value.chars().count() > max {
            return Err(AppError::Validation(format!(
                "{} must be at most {} characters",
                field, max
            )));
        }
        Ok(value.to_string())
    }

    pub fn price(price: f64) -> Result<f64, AppError> {
        if !price.is_finite() || price < 0.0 {
            return Err(AppError::Validation(
                "price must be a finite, non-negative number".into(),
            ));
        }
        Ok(price)
    }

    pub fn limit(limit: i64) -> Result<i64, AppError> {
        if limit < 1 {
            return Err(AppError::Validation("limit must be greater than 0".into()));
        }
        Ok(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_trims() {
        assert_eq!(
            TourRules::required_text("title", "  Paris  ", TITLE_MAX_CHARS).unwrap(),
            "Paris"
        );
    }

    #[test]
    fn required_text_rejects_blank() {
        let err = TourRules::required_text("title", "   ", TITLE_MAX_CHARS).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn bounded_text_counts_chars_not_bytes() {
        let word = "é".repeat(DESCRIPTION_MAX_CHARS);
        assert!(TourRules::bounded_text("description", &word, DESCRIPTION_MAX_CHARS).is_ok());
        let longer = format!("{}x", word);
        assert!(TourRules::bounded_text("description", &longer, DESCRIPTION_MAX_CHARS).is_err());
    }

    #[test]
    fn price_rejects_negative_and_nan() {
        assert!(TourRules::price(0.0).is_ok());
        assert!(TourRules::price(-1.0).is_err());
        assert!(TourRules::price(f64::NAN).is_err());
        assert!(TourRules::price(f64::INFINITY).is_err());
    }

    #[test]
    fn limit_must_be_positive() {
        assert!(TourRules::limit(0).is_err());
        assert!(TourRules::limit(-3).is_err());
        assert_eq!(TourRules::limit(1).unwrap(), 1);
    }
}
