//! Counter-side client library
//!
//! Everything the till needs between the menu and the payment record:
//! pricing with size tiers and the takeaway packing fee, per-slot carts
//! with durable local storage, and checkout against the pos-server
//! payments API.

pub mod cart;
pub mod error;
pub mod gateway;
pub mod pricing;
pub mod storage;

pub use cart::{SlotKey, SlotManager, TABLE_COUNT};
pub use error::{ClientError, ClientResult};
pub use gateway::{HttpGateway, PaymentGateway};
pub use pricing::SurchargeTable;
pub use storage::SlotStorage;
