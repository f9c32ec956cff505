//! Validation tests for the payment recorder boundary

use super::handler::normalize;
use shared::models::{OrderType, PaymentCreate, PaymentMethod};
use shared::order::LineItem;

fn base_body() -> PaymentCreate {
    PaymentCreate {
        order_type: OrderType::Table,
        order_id: "Bàn 2".into(),
        orders: vec![LineItem {
            name: "Trà Sữa".into(),
            price: 25000,
            quantity: 2,
            note: None,
            size: None,
        }],
        total: Some(50000),
        method: Some("cash".into()),
        payment_method: None,
        time: Some(1_710_459_000_000),
    }
}

#[test]
fn valid_body_normalizes() {
    let data = normalize(base_body()).unwrap();
    assert_eq!(data.total, 50000);
    assert_eq!(data.method, PaymentMethod::Cash);
    assert_eq!(data.time, 1_710_459_000_000);
}

#[test]
fn empty_orders_are_rejected() {
    let mut body = base_body();
    body.orders.clear();
    assert!(normalize(body).is_err());
}

#[test]
fn missing_total_is_rejected() {
    let mut body = base_body();
    body.total = None;
    assert!(normalize(body).is_err());
}

#[test]
fn method_falls_back_to_legacy_field() {
    let mut body = base_body();
    body.method = Some("  ".into());
    body.payment_method = Some("chuyển khoản".into());
    let data = normalize(body).unwrap();
    assert_eq!(data.method, PaymentMethod::Bank);
}

#[test]
fn missing_method_under_both_names_is_rejected() {
    let mut body = base_body();
    body.method = None;
    body.payment_method = None;
    assert!(normalize(body).is_err());
}

#[test]
fn unknown_method_is_rejected() {
    let mut body = base_body();
    body.method = Some("momo".into());
    assert!(normalize(body).is_err());
}

#[test]
fn unset_time_gets_a_server_timestamp() {
    let mut body = base_body();
    body.time = None;
    let before = shared::util::now_millis();
    let data = normalize(body).unwrap();
    assert!(data.time >= before);
}
