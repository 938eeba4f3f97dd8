//! Typed invariant violations raised before any repository write.

use rust_decimal::Decimal;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Business rule violated by a create/update/search payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is missing or blank after trim.
    BlankName { entity: &'static str },
    /// User email is missing or blank after trim.
    BlankEmail,
    /// Another live user already owns this email (case-insensitive).
    DuplicateEmail(String),
    /// Product price was not supplied on create.
    MissingPrice,
    /// Product price is below zero.
    NegativePrice(Decimal),
    /// Product stock was not supplied on create.
    MissingStock,
    /// Product stock is below zero.
    NegativeStock(i64),
    /// Product stock exceeds the storable range.
    StockOutOfRange(i64),
    /// Decrease would drive stock below zero.
    InsufficientStock { available: u32, requested: u64 },
    /// Price range search with `min > max`.
    InvertedPriceRange { min: Decimal, max: Decimal },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName { entity } => write!(f, "{entity} name cannot be empty"),
            Self::BlankEmail => write!(f, "user email cannot be empty"),
            Self::DuplicateEmail(email) => {
                write!(f, "user with email {email} already exists")
            }
            Self::MissingPrice => write!(f, "product price is required"),
            Self::NegativePrice(price) => {
                write!(f, "product price must not be negative, got {price}")
            }
            Self::MissingStock => write!(f, "product stock is required"),
            Self::NegativeStock(stock) => {
                write!(f, "product stock cannot be negative, got {stock}")
            }
            Self::StockOutOfRange(stock) => {
                write!(f, "product stock {stock} exceeds the supported range")
            }
            Self::InsufficientStock {
                available,
                requested,
            } => write!(
                f,
                "insufficient stock: requested {requested}, available {available}"
            ),
            Self::InvertedPriceRange { min, max } => write!(
                f,
                "min price ({min}) cannot be greater than max price ({max})"
            ),
        }
    }
}

impl Error for ValidationError {}

impl ValidationError {
    /// Stable machine-readable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BlankName { .. } => "blank_name",
            Self::BlankEmail => "blank_email",
            Self::DuplicateEmail(_) => "duplicate_email",
            Self::MissingPrice => "missing_price",
            Self::NegativePrice(_) => "negative_price",
            Self::MissingStock => "missing_stock",
            Self::NegativeStock(_) => "negative_stock",
            Self::StockOutOfRange(_) => "stock_out_of_range",
            Self::InsufficientStock { .. } => "insufficient_stock",
            Self::InvertedPriceRange { .. } => "inverted_price_range",
        }
    }
}

/// Returns the trimmed value when it carries non-whitespace content.
///
/// Blank and absent inputs are treated identically by every write path.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|trimmed| !trimmed.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{non_blank, ValidationError};

    #[test]
    fn non_blank_filters_whitespace_only_values() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(Some(" x ")), Some("x"));
    }

    #[test]
    fn duplicate_email_message_mentions_already_exists() {
        let err = ValidationError::DuplicateEmail("a@x.com".to_string());
        assert!(err.to_string().contains("already exists"));
    }
}
