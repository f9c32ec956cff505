//! Payment Model
//!
//! Append-only record of one completed checkout. The `method` field on the
//! wire accepts legacy aliases (Vietnamese labels and an old
//! `payment_method` key); everything is normalized to [`PaymentMethod`]
//! before touching storage.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::order::LineItem;

/// Where an order originated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Table,
    Takeaway,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Table => write!(f, "table"),
            OrderType::Takeaway => write!(f, "takeaway"),
        }
    }
}

/// Canonical payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Bank,
}

impl PaymentMethod {
    /// Normalize a wire value, accepting the Vietnamese labels the old
    /// client sent ("tiền mặt" / "chuyển khoản") alongside the canonical
    /// names. Unknown methods yield `None` and are rejected upstream.
    pub fn parse_alias(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "cash" | "tiền mặt" => Some(PaymentMethod::Cash),
            "bank" | "chuyển khoản" => Some(PaymentMethod::Bank),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Bank => "bank",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored payment record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub order_type: OrderType,
    pub order_id: String,
    /// Line-item snapshot taken at checkout
    pub orders: Vec<LineItem>,
    pub total: i64,
    pub method: PaymentMethod,
    /// Unix millis, assigned server-side when the client leaves it unset
    pub time: i64,
}

/// Create payment payload (`POST /api/payments`)
///
/// `payment_method` is the legacy field name; the first non-empty of
/// `method` / `payment_method` wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCreate {
    pub order_type: OrderType,
    pub order_id: String,
    #[serde(default)]
    pub orders: Vec<LineItem>,
    pub total: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
}

impl PaymentCreate {
    /// First non-empty of the two accepted method field names
    pub fn raw_method(&self) -> Option<&str> {
        [self.method.as_deref(), self.payment_method.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_normalize_to_canonical_methods() {
        assert_eq!(PaymentMethod::parse_alias("cash"), Some(PaymentMethod::Cash));
        assert_eq!(PaymentMethod::parse_alias("Tiền mặt"), Some(PaymentMethod::Cash));
        assert_eq!(PaymentMethod::parse_alias("bank"), Some(PaymentMethod::Bank));
        assert_eq!(PaymentMethod::parse_alias("chuyển khoản"), Some(PaymentMethod::Bank));
        assert_eq!(PaymentMethod::parse_alias("momo"), None);
        assert_eq!(PaymentMethod::parse_alias(""), None);
    }

    #[test]
    fn legacy_method_field_is_honored() {
        let body = r#"{"order_type":"table","order_id":"Bàn 3","orders":[],"total":50000,"payment_method":"bank"}"#;
        let create: PaymentCreate = serde_json::from_str(body).unwrap();
        assert_eq!(create.raw_method(), Some("bank"));

        let both = PaymentCreate {
            method: Some("cash".into()),
            payment_method: Some("bank".into()),
            ..create
        };
        // canonical field wins when both are present
        assert_eq!(both.raw_method(), Some("cash"));
    }
}
