// src/domain/catalog/mod.rs
pub mod category;
pub mod format;
pub mod frame;
pub mod photo;
pub mod price;
pub mod size;

use crate::domain::errors::{DomainError, DomainResult};

pub use category::{Category, CategoryId, CategoryName, CategoryRepository, NewCategory};
pub use format::{Format, FormatId, FormatRepository, NewFormat};
pub use frame::{Frame, FrameId, FrameRepository, NewFrame};
pub use photo::{NewPhoto, Photo, PhotoId, PhotoRepository, PhotoTitle};
pub use price::{NewPrice, Price, PriceId, PriceRepository};
pub use size::{NewSize, Size, SizeId, SizeRepository};

/// A non-negative amount in the store currency.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::validation("price must be a non-negative number"));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Amount> for f64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

/// Trims a required label, reporting `what` when it is blank.
pub(crate) fn required_label(value: impl Into<String>, what: &str) -> DomainResult<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{what} is required")));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_rejects_negative_and_non_finite() {
        assert!(Amount::new(-0.01).is_err());
        assert!(Amount::new(f64::NAN).is_err());
        assert!(Amount::new(f64::INFINITY).is_err());
        assert_eq!(Amount::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Amount::new(49.5).unwrap().value(), 49.5);
    }

    #[test]
    fn required_label_trims() {
        assert_eq!(required_label("  Walnut ", "Frame style").unwrap(), "Walnut");
        let err = required_label(" ", "Frame style").unwrap_err();
        assert_eq!(err.to_string(), "validation error: Frame style is required");
    }
}
