use std::collections::HashSet;

use chrono::{DateTime, Local, SubsecRound};
use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{Order, OrderCreate, OrderStatus};
use super::aggregates::{RevenueSummary, StatusHistogram};
use super::error::LedgerError;

/// Largest accepted unit price. Keeps the revenue total of any ledger that
/// fits in memory within `Decimal` range.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

type Clock = Box<dyn Fn() -> DateTime<Local> + Send + Sync>;

/// Append-only, insertion-ordered table of orders for one session.
pub struct Ledger {
    orders: Vec<Order>,
    clock: Clock,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_clock(Local::now)
    }

    /// Creates an empty ledger that stamps new orders using `clock`.
    pub fn with_clock(clock: impl Fn() -> DateTime<Local> + Send + Sync + 'static) -> Self {
        Self {
            orders: Vec::new(),
            clock: Box::new(clock),
        }
    }

    /// Appends a new Pending order to the end of the ledger.
    ///
    /// # Errors
    /// `ValidationError` if a text field is empty, `quantity` is zero or
    /// `price` is outside `0..=MAX_PRICE`. The ledger is left unchanged.
    pub fn append(&mut self, params: OrderCreate) -> Result<Order, LedgerError> {
        validate(&params)?;

        let created_at = (self.clock)().trunc_subsecs(0);
        let order = Order::from_create(params, created_at);
        self.orders.push(order.clone());
        debug!(order_id = %order.order_id, len = self.orders.len(), "Order appended");
        Ok(order)
    }

    /// Overwrites the status of the first order whose id matches.
    ///
    /// Order ids are not unique; later duplicates are never touched.
    pub fn set_status(&mut self, order_id: &str, status: OrderStatus) -> Result<Order, LedgerError> {
        let order = self
            .orders
            .iter_mut()
            .find(|order| order.order_id == order_id)
            .ok_or_else(|| LedgerError::NotFound(order_id.to_string()))?;

        order.status = status;
        Ok(order.clone())
    }

    pub fn count_by_status(&self, status: OrderStatus) -> usize {
        self.orders.iter().filter(|order| order.status == status).count()
    }

    /// Sums unit `price` over every order regardless of status. Quantity is
    /// not factored in.
    pub fn aggregate_revenue(&self) -> RevenueSummary {
        RevenueSummary::from_prices(self.orders.iter().map(|order| order.price))
    }

    pub fn status_histogram(&self) -> StatusHistogram {
        StatusHistogram::from_statuses(self.orders.iter().map(|order| order.status))
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Distinct order ids in order of first appearance.
    pub fn order_ids(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.orders
            .iter()
            .filter(|order| seen.insert(order.order_id.as_str()))
            .map(|order| order.order_id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

fn validate(params: &OrderCreate) -> Result<(), LedgerError> {
    if params.order_id.is_empty() {
        return Err(LedgerError::ValidationError("order id is required".to_string()));
    }
    if params.customer_name.is_empty() {
        return Err(LedgerError::ValidationError("customer name is required".to_string()));
    }
    if params.product.is_empty() {
        return Err(LedgerError::ValidationError("product is required".to_string()));
    }
    if params.quantity < 1 {
        return Err(LedgerError::ValidationError(format!(
            "quantity must be at least 1, got {}",
            params.quantity
        )));
    }
    if params.price < Decimal::ZERO {
        return Err(LedgerError::ValidationError(format!(
            "price must not be negative, got {}",
            params.price
        )));
    }
    if params.price > MAX_PRICE {
        return Err(LedgerError::ValidationError(format!(
            "price must not exceed {}, got {}",
            MAX_PRICE, params.price
        )));
    }
    Ok(())
}
