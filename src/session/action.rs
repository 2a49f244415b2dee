use tracing::{info, warn};

use crate::domain::{Order, OrderCreate, OrderStatus};
use crate::ledger::{Ledger, LedgerError, RevenueSummary, StatusHistogram};

/// A single user action coming from the menu.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ShowDashboard,
    SubmitOrder(OrderCreate),
    ShowOrders,
    UpdateStatus { order_id: String, status: OrderStatus },
    ShowAnalytics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardMetrics {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsReport {
    pub revenue: RevenueSummary,
    pub completed: usize,
    pub histogram: StatusHistogram,
}

/// Everything the console needs to render the outcome of one action.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard(DashboardMetrics),
    OrderCreated(Order),
    ValidationFailed(String),
    Orders { orders: Vec<Order>, order_ids: Vec<String> },
    StatusUpdated { order_id: String, status: OrderStatus },
    NotFound(String),
    Analytics(AnalyticsReport),
    Notice(String),
}

pub const MISSING_FIELDS: &str = "Please fill out all required fields!";
pub const NO_ORDERS_TO_MANAGE: &str = "No orders available to manage.";
pub const NO_ORDERS_TO_ANALYZE: &str = "No orders to analyze.";

/// Applies one action to the ledger and returns the view to render.
///
/// Presence of the required text fields is checked here, before the ledger
/// is touched.
pub fn apply(ledger: &mut Ledger, action: Action) -> View {
    match action {
        Action::ShowDashboard => View::Dashboard(DashboardMetrics {
            total: ledger.len(),
            pending: ledger.count_by_status(OrderStatus::Pending),
            completed: ledger.count_by_status(OrderStatus::Completed),
        }),
        Action::SubmitOrder(params) => {
            if params.has_missing_fields() {
                warn!("Order form submitted with missing fields");
                return View::ValidationFailed(MISSING_FIELDS.to_string());
            }
            match ledger.append(params) {
                Ok(order) => {
                    info!(order_id = %order.order_id, "Order added");
                    View::OrderCreated(order)
                }
                Err(e) => {
                    warn!(error = %e, "Order rejected");
                    View::ValidationFailed(e.to_string())
                }
            }
        }
        Action::ShowOrders => {
            if ledger.is_empty() {
                return View::Notice(NO_ORDERS_TO_MANAGE.to_string());
            }
            View::Orders {
                orders: ledger.orders().to_vec(),
                order_ids: ledger.order_ids(),
            }
        }
        Action::UpdateStatus { order_id, status } => match ledger.set_status(&order_id, status) {
            Ok(_) => {
                info!(order_id = %order_id, status = %status, "Order status updated");
                View::StatusUpdated { order_id, status }
            }
            Err(LedgerError::NotFound(id)) => {
                warn!(order_id = %id, "Status update for unknown order");
                View::NotFound(id)
            }
            Err(e) => View::Notice(e.to_string()),
        },
        Action::ShowAnalytics => {
            if ledger.is_empty() {
                return View::Notice(NO_ORDERS_TO_ANALYZE.to_string());
            }
            let histogram = ledger.status_histogram();
            View::Analytics(AnalyticsReport {
                revenue: ledger.aggregate_revenue(),
                completed: histogram.get(OrderStatus::Completed),
                histogram,
            })
        }
    }
}
