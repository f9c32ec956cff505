//! Pricing & surcharge engine
//!
//! Pure functions: resolve a unit price from a product's pricing mode, and
//! apply the per-unit dish surcharge that differs between dine-in and
//! takeaway. A price of 0 is a valid result ("unavailable") — the caller
//! disables the add action for non-positive prices instead of this module
//! erroring.

use shared::models::{OrderType, Product, Size};
use shared::order::LineItem;

/// Unit price for a product and an optional chosen size
///
/// Tiered products resolve through the chosen tier (0 when the tier isn't
/// offered or no size was chosen); flat products ignore the size.
pub fn unit_price(product: &Product, size: Option<Size>) -> i64 {
    if product.has_tiers() {
        return size
            .and_then(|s| product.tier_price(s))
            .unwrap_or(0);
    }
    product.price.filter(|p| *p > 0).unwrap_or(0)
}

/// Per-unit surcharge applied to recognized dishes, with a distinct fee
/// per order type
///
/// The shop charges a packing fee on spicy noodles for takeaway orders;
/// dine-in carries no fee. Matching is a case-insensitive substring test
/// against the line's product name.
#[derive(Debug, Clone)]
pub struct SurchargeTable {
    /// Lowercase name fragments that mark a surchargeable dish
    patterns: Vec<String>,
    /// Per-unit fee for dine-in lines
    pub table_fee: i64,
    /// Per-unit fee for takeaway lines
    pub takeaway_fee: i64,
}

impl SurchargeTable {
    pub fn new(patterns: Vec<String>, table_fee: i64, takeaway_fee: i64) -> Self {
        Self {
            patterns: patterns.into_iter().map(|p| p.to_lowercase()).collect(),
            table_fee,
            takeaway_fee,
        }
    }

    /// Per-unit fee for one product name under one order type
    pub fn per_unit_fee(&self, name: &str, order_type: OrderType) -> i64 {
        let lower = name.to_lowercase();
        if !self.patterns.iter().any(|p| lower.contains(p.as_str())) {
            return 0;
        }
        match order_type {
            OrderType::Table => self.table_fee,
            OrderType::Takeaway => self.takeaway_fee,
        }
    }
}

impl Default for SurchargeTable {
    /// The shop's rule: 3000đ/unit packing fee on spicy noodles, takeaway
    /// only (both spellings of the dish circulate on the menu)
    fn default() -> Self {
        Self::new(vec!["mì cay".into(), "mỳ cay".into()], 0, 3000)
    }
}

/// Total for one line: unit price × quantity + surcharge × quantity
pub fn line_total(line: &LineItem, order_type: OrderType, surcharges: &SurchargeTable) -> i64 {
    let fee = surcharges.per_unit_fee(&line.name, order_type);
    (line.price + fee) * line.quantity
}

/// Total over all active lines of a slot
pub fn order_total(lines: &[LineItem], order_type: OrderType, surcharges: &SurchargeTable) -> i64 {
    lines
        .iter()
        .map(|line| line_total(line, order_type, surcharges))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiered_product() -> Product {
        Product {
            id: 1,
            name: "Trà Sữa".into(),
            price: None,
            price_s: None,
            price_m: Some(20000),
            price_l: Some(25000),
            category: Some("Đồ uống".into()),
            image: None,
            description: None,
        }
    }

    fn line(name: &str, price: i64, quantity: i64) -> LineItem {
        LineItem {
            name: name.into(),
            price,
            quantity,
            note: None,
            size: None,
        }
    }

    #[test]
    fn tiered_price_resolves_the_chosen_size() {
        let product = tiered_product();
        assert_eq!(unit_price(&product, Some(Size::M)), 20000);
        assert_eq!(unit_price(&product, Some(Size::L)), 25000);
    }

    #[test]
    fn unoffered_tier_is_zero_not_a_crash() {
        let product = tiered_product();
        assert_eq!(unit_price(&product, Some(Size::S)), 0);
        assert_eq!(unit_price(&product, None), 0);
    }

    #[test]
    fn flat_price_ignores_size() {
        let product = Product {
            price: Some(30000),
            price_m: None,
            price_l: None,
            ..tiered_product()
        };
        assert_eq!(unit_price(&product, None), 30000);
        assert_eq!(unit_price(&product, Some(Size::L)), 30000);
    }

    #[test]
    fn takeaway_spicy_noodles_carry_the_packing_fee() {
        let surcharges = SurchargeTable::default();
        // 3 × 30000 + 3 × 3000
        let noodles = line("Mỳ Cay Bò", 30000, 3);
        assert_eq!(line_total(&noodles, OrderType::Takeaway, &surcharges), 99000);
        // dine-in: no fee
        assert_eq!(line_total(&noodles, OrderType::Table, &surcharges), 90000);
        // other dishes: no fee either way
        let tea = line("Trà Sữa", 25000, 2);
        assert_eq!(line_total(&tea, OrderType::Takeaway, &surcharges), 50000);
    }

    #[test]
    fn configured_fee_amounts_are_respected() {
        let surcharges = SurchargeTable::new(vec!["mỳ cay".into()], 0, 2000);
        let noodles = line("Mỳ Cay", 30000, 3);
        assert_eq!(line_total(&noodles, OrderType::Takeaway, &surcharges), 96000);
    }

    #[test]
    fn order_total_sums_all_lines() {
        let surcharges = SurchargeTable::default();
        let lines = vec![line("Mỳ Cay Bò", 30000, 1), line("Trà Sữa", 25000, 2)];
        assert_eq!(order_total(&lines, OrderType::Takeaway, &surcharges), 83000);
        assert_eq!(order_total(&[], OrderType::Takeaway, &surcharges), 0);
    }
}
