use tokio::sync::oneshot;

#[cfg(test)]
use crate::domain::{Order, OrderCreate, OrderStatus};
use crate::ledger::LedgerError;
#[cfg(test)]
use crate::ledger::{RevenueSummary, StatusHistogram};
use crate::session::{Action, View};

/// Generic type aliases for service communication
pub type ServiceResult<T> = std::result::Result<T, LedgerError>;
pub type ServiceResponse<T> = oneshot::Sender<ServiceResult<T>>;

/// Requests understood by the ledger service. Each variant carries its
/// parameters and a oneshot channel for the reply.
#[derive(Debug)]
pub enum LedgerRequest {
    Dispatch {
        action: Action,
        respond_to: ServiceResponse<View>,
    },
    Shutdown,
    // Test-only requests for inspecting and driving the ledger directly
    #[cfg(test)]
    Append {
        params: OrderCreate,
        respond_to: ServiceResponse<Order>,
    },
    #[cfg(test)]
    SetStatus {
        order_id: String,
        status: OrderStatus,
        respond_to: ServiceResponse<Order>,
    },
    #[cfg(test)]
    CountByStatus {
        status: OrderStatus,
        respond_to: ServiceResponse<usize>,
    },
    #[cfg(test)]
    AggregateRevenue {
        respond_to: ServiceResponse<RevenueSummary>,
    },
    #[cfg(test)]
    StatusHistogram {
        respond_to: ServiceResponse<StatusHistogram>,
    },
    #[cfg(test)]
    ListOrders {
        respond_to: ServiceResponse<Vec<Order>>,
    },
}
