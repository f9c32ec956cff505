//! Product Model
//!
//! A product is priced in exactly one of two modes:
//! - flat: a single `price` for the whole product
//! - tiered: per-size prices (`priceS`/`priceM`/`priceL`), a tier being
//!   offerable only when its price is present and positive

use serde::{Deserialize, Serialize};
use std::fmt;

/// Size tier for tiered-priced products
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    S,
    M,
    L,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::S => write!(f, "S"),
            Size::M => write!(f, "M"),
            Size::L => write!(f, "L"),
        }
    }
}

/// Product entity
///
/// Wire field names keep the original camelCase price columns so existing
/// catalog exports stay importable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Flat price (VND); `None` when the product is size-tiered
    pub price: Option<i64>,
    #[serde(rename = "priceS")]
    #[cfg_attr(feature = "db", sqlx(rename = "priceS"))]
    pub price_s: Option<i64>,
    #[serde(rename = "priceM")]
    #[cfg_attr(feature = "db", sqlx(rename = "priceM"))]
    pub price_m: Option<i64>,
    #[serde(rename = "priceL")]
    #[cfg_attr(feature = "db", sqlx(rename = "priceL"))]
    pub price_l: Option<i64>,
    /// Category name; detached (set to `None`) when the category is deleted
    pub category: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl Product {
    /// Price of one size tier, `None` when the tier is not offered
    pub fn tier_price(&self, size: Size) -> Option<i64> {
        let price = match size {
            Size::S => self.price_s,
            Size::M => self.price_m,
            Size::L => self.price_l,
        };
        price.filter(|p| *p > 0)
    }

    /// Whether any size tier carries a positive price
    pub fn has_tiers(&self) -> bool {
        [Size::S, Size::M, Size::L]
            .into_iter()
            .any(|s| self.tier_price(s).is_some())
    }
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: Option<i64>,
    #[serde(rename = "priceS")]
    pub price_s: Option<i64>,
    #[serde(rename = "priceM")]
    pub price_m: Option<i64>,
    #[serde(rename = "priceL")]
    pub price_l: Option<i64>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl ProductCreate {
    /// Enforce the pricing-mode invariant: flat XOR tiered, and at least
    /// one priced tier when tiered. Returns a human-readable reason on
    /// violation.
    pub fn validate_pricing(&self) -> Result<(), String> {
        let flat = self.price.filter(|p| *p > 0).is_some();
        let tiered = [self.price_s, self.price_m, self.price_l]
            .into_iter()
            .any(|p| p.filter(|v| *v > 0).is_some());
        match (flat, tiered) {
            (true, true) => Err("product cannot have both a flat price and size prices".into()),
            (false, false) => Err("product needs a flat price or at least one size price".into()),
            _ => Ok(()),
        }
    }
}

/// Update product payload (full replacement, matching the admin UI form)
pub type ProductUpdate = ProductCreate;

#[cfg(test)]
mod tests {
    use super::*;

    fn tiered(m: Option<i64>, l: Option<i64>) -> Product {
        Product {
            id: 1,
            name: "Trà Sữa".into(),
            price: None,
            price_s: None,
            price_m: m,
            price_l: l,
            category: Some("Đồ uống".into()),
            image: None,
            description: None,
        }
    }

    #[test]
    fn tier_price_requires_positive_amount() {
        let p = tiered(Some(20000), Some(0));
        assert_eq!(p.tier_price(Size::M), Some(20000));
        assert_eq!(p.tier_price(Size::L), None);
        assert_eq!(p.tier_price(Size::S), None);
    }

    #[test]
    fn pricing_mode_is_exclusive() {
        let both = ProductCreate {
            name: "x".into(),
            price: Some(30000),
            price_s: None,
            price_m: Some(20000),
            price_l: None,
            category: None,
            image: None,
            description: None,
        };
        assert!(both.validate_pricing().is_err());

        let neither = ProductCreate {
            price: None,
            price_m: None,
            ..both.clone()
        };
        assert!(neither.validate_pricing().is_err());

        let flat = ProductCreate {
            price: Some(30000),
            price_m: None,
            ..both
        };
        assert!(flat.validate_pricing().is_ok());
    }
}
