//! Slot manager
//!
//! Owns the fixed table roster and the dynamic takeaway slots, routes
//! item mutations at the currently selected slot, and runs checkout
//! against a [`PaymentGateway`]. Every mutation persists the affected
//! collection before returning, so a crash never loses more than the
//! in-flight call.

use shared::models::{OrderType, Payment, PaymentCreate, PaymentMethod, Product, Size};
use shared::order::{HistoryEntry, LineItem, OrderSlot};
use shared::util::now_millis;

use crate::error::{ClientError, ClientResult};
use crate::gateway::PaymentGateway;
use crate::pricing::{self, SurchargeTable};
use crate::storage::SlotStorage;

/// Number of dine-in tables the shop runs
pub const TABLE_COUNT: i64 = 10;

/// Identifies one slot: a table number or a takeaway order number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotKey {
    pub order_type: OrderType,
    pub id: i64,
}

impl SlotKey {
    pub fn table(id: i64) -> Self {
        Self { order_type: OrderType::Table, id }
    }

    pub fn takeaway(id: i64) -> Self {
        Self { order_type: OrderType::Takeaway, id }
    }

    /// Operator-facing label, also used as the payment's order id
    pub fn label(&self) -> String {
        match self.order_type {
            OrderType::Table => format!("Bàn {}", self.id),
            OrderType::Takeaway => format!("Đơn mang về {}", self.id),
        }
    }
}

/// Cart state for the whole shop floor
pub struct SlotManager {
    storage: SlotStorage,
    surcharges: SurchargeTable,
    tables: Vec<OrderSlot>,
    takeaway: Vec<OrderSlot>,
    next_takeaway_id: i64,
    selected: Option<SlotKey>,
}

impl SlotManager {
    /// Load both collections from storage; a missing or damaged tables
    /// file falls back to the fixed empty roster.
    pub fn load(storage: SlotStorage, surcharges: SurchargeTable) -> Self {
        let tables = storage.load_tables(|| (1..=TABLE_COUNT).map(OrderSlot::new).collect());
        let takeaway = storage.load_takeaway();
        let next_takeaway_id = takeaway.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        Self {
            storage,
            surcharges,
            tables,
            takeaway,
            next_takeaway_id,
            selected: None,
        }
    }

    pub fn tables(&self) -> &[OrderSlot] {
        &self.tables
    }

    pub fn takeaway(&self) -> &[OrderSlot] {
        &self.takeaway
    }

    pub fn selected(&self) -> Option<SlotKey> {
        self.selected
    }

    /// Point subsequent mutations at `key`
    pub fn select(&mut self, key: SlotKey) -> ClientResult<()> {
        if self.find(key).is_none() {
            return Err(ClientError::Validation(format!("no such slot: {}", key.label())));
        }
        self.selected = Some(key);
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Open a new takeaway slot with the next order number and persist it
    pub fn create_takeaway(&mut self) -> ClientResult<SlotKey> {
        let id = self.next_takeaway_id;
        self.next_takeaway_id += 1;
        self.takeaway.push(OrderSlot::new(id));
        self.storage.save_takeaway(&self.takeaway)?;
        Ok(SlotKey::takeaway(id))
    }

    /// Add `quantity` units of a product configuration to the selected slot
    ///
    /// Merges into an existing line when name, note and size all match;
    /// otherwise appends a new line priced at add time.
    pub fn add_item(
        &mut self,
        product: &Product,
        size: Option<Size>,
        note: Option<String>,
        quantity: i64,
    ) -> ClientResult<()> {
        let key = self.require_selected()?;
        if quantity <= 0 {
            return Err(ClientError::Validation(format!(
                "quantity must be positive, got {quantity}"
            )));
        }

        let line = LineItem {
            name: product.name.clone(),
            price: pricing::unit_price(product, size),
            quantity,
            note,
            size,
        };

        let slot = self
            .find_mut(key)
            .ok_or_else(|| ClientError::Validation(format!("no such slot: {}", key.label())))?;
        match slot.orders.iter_mut().find(|l| l.merge_key() == line.merge_key()) {
            Some(existing) => existing.quantity += quantity,
            None => slot.orders.push(line),
        }
        self.persist(key.order_type)
    }

    /// Drop one line from the selected slot; out-of-range indexes are a
    /// no-op so a stale UI row can't fail the call
    pub fn remove_item(&mut self, index: usize) -> ClientResult<()> {
        let key = self.require_selected()?;
        let slot = self
            .find_mut(key)
            .ok_or_else(|| ClientError::Validation(format!("no such slot: {}", key.label())))?;
        if index >= slot.orders.len() {
            return Ok(());
        }
        slot.orders.remove(index);
        self.persist(key.order_type)
    }

    /// Running total of the selected slot, surcharges included
    pub fn current_total(&self) -> i64 {
        let Some(key) = self.selected else { return 0 };
        self.find(key)
            .map(|slot| pricing::order_total(&slot.orders, key.order_type, &self.surcharges))
            .unwrap_or(0)
    }

    /// Record the selected slot's order as a payment, then move its lines
    /// into history
    ///
    /// The slot is only mutated after the gateway accepts the payment; a
    /// refused or failed call leaves the cart exactly as it was.
    pub async fn checkout(
        &mut self,
        gateway: &dyn PaymentGateway,
        method: PaymentMethod,
    ) -> ClientResult<Payment> {
        let key = self.require_selected()?;
        let slot = self
            .find(key)
            .ok_or_else(|| ClientError::Validation(format!("no such slot: {}", key.label())))?;
        if slot.orders.is_empty() {
            return Err(ClientError::Validation(format!(
                "nothing to check out on {}",
                key.label()
            )));
        }

        let orders = slot.orders.clone();
        let total = pricing::order_total(&orders, key.order_type, &self.surcharges);
        let request = PaymentCreate {
            order_type: key.order_type,
            order_id: key.label(),
            orders: orders.clone(),
            total: Some(total),
            method: Some(method.as_str().to_string()),
            payment_method: None,
            time: None,
        };

        let payment = gateway.record_payment(request).await?;
        tracing::info!(slot = %key.label(), total, %method, "checkout recorded");

        // Accepted upstream: archive and clear in one step
        if let Some(slot) = self.find_mut(key) {
            slot.history.push(HistoryEntry {
                orders,
                total,
                method,
                time: now_millis(),
            });
            slot.orders.clear();
        }
        self.persist(key.order_type)?;
        Ok(payment)
    }

    fn require_selected(&self) -> ClientResult<SlotKey> {
        self.selected
            .ok_or_else(|| ClientError::Validation("no slot selected".into()))
    }

    fn collection(&self, order_type: OrderType) -> &[OrderSlot] {
        match order_type {
            OrderType::Table => &self.tables,
            OrderType::Takeaway => &self.takeaway,
        }
    }

    fn find(&self, key: SlotKey) -> Option<&OrderSlot> {
        self.collection(key.order_type).iter().find(|s| s.id == key.id)
    }

    fn find_mut(&mut self, key: SlotKey) -> Option<&mut OrderSlot> {
        let slots = match key.order_type {
            OrderType::Table => &mut self.tables,
            OrderType::Takeaway => &mut self.takeaway,
        };
        slots.iter_mut().find(|s| s.id == key.id)
    }

    fn persist(&self, order_type: OrderType) -> ClientResult<()> {
        match order_type {
            OrderType::Table => self.storage.save_tables(&self.tables),
            OrderType::Takeaway => self.storage.save_takeaway(&self.takeaway),
        }
    }
}
