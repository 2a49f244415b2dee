use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use rust_decimal::Decimal;

/// Lifecycle state of an order. Any state may move to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderStatus {
    Pending,
    Completed,
    Canceled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Completed,
        OrderStatus::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Completed => "Completed",
            OrderStatus::Canceled => "Canceled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown order status: {}", s))
    }
}

/// One row of the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: String,
    pub customer_name: String,
    pub product: String,
    pub quantity: u32,
    /// Unit price.
    pub price: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Local>,
}

/// Payload for appending a new order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub order_id: String,
    pub customer_name: String,
    pub product: String,
    pub quantity: u32,
    pub price: Decimal,
}

impl OrderCreate {
    pub fn new(
        order_id: impl Into<String>,
        customer_name: impl Into<String>,
        product: impl Into<String>,
        quantity: u32,
        price: Decimal,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            customer_name: customer_name.into(),
            product: product.into(),
            quantity,
            price,
        }
    }

    /// Returns true when any of the required text fields is empty.
    pub fn has_missing_fields(&self) -> bool {
        self.order_id.is_empty() || self.customer_name.is_empty() || self.product.is_empty()
    }
}

impl Order {
    /// Builds a new Pending order stamped with `created_at`.
    pub fn from_create(params: OrderCreate, created_at: DateTime<Local>) -> Self {
        Self {
            order_id: params.order_id,
            customer_name: params.customer_name,
            product: params.product,
            quantity: params.quantity,
            price: params.price,
            status: OrderStatus::Pending,
            created_at,
        }
    }
}
