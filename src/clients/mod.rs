use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

#[cfg(test)]
use crate::domain::{Order, OrderCreate, OrderStatus};
use crate::ledger::LedgerError;
#[cfg(test)]
use crate::ledger::{RevenueSummary, StatusHistogram};
use crate::messages::LedgerRequest;
use crate::session::{Action, View};

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, LedgerError> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| LedgerError::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| LedgerError::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

/// Handle to the ledger service. Cheap to clone; every clone talks to the
/// same ledger.
#[derive(Clone, Debug)]
pub struct LedgerClient {
    sender: mpsc::Sender<LedgerRequest>,
}

impl LedgerClient {
    pub fn new(sender: mpsc::Sender<LedgerRequest>) -> Self {
        Self { sender }
    }

    /// Asks the service to stop. Requests already queued are answered first.
    pub async fn shutdown(&self) -> Result<(), LedgerError> {
        self.sender
            .send(LedgerRequest::Shutdown)
            .await
            .map_err(|_| LedgerError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(LedgerClient => fn dispatch(action: Action) -> View as LedgerRequest::Dispatch);

// Direct ledger access for tests; the console only goes through `dispatch`.
#[cfg(test)]
client_method!(LedgerClient => fn append(params: OrderCreate) -> Order as LedgerRequest::Append);
#[cfg(test)]
client_method!(LedgerClient => fn set_status(order_id: String, status: OrderStatus) -> Order as LedgerRequest::SetStatus);
#[cfg(test)]
client_method!(LedgerClient => fn count_by_status(status: OrderStatus) -> usize as LedgerRequest::CountByStatus);
#[cfg(test)]
client_method!(LedgerClient => fn aggregate_revenue() -> RevenueSummary as LedgerRequest::AggregateRevenue);
#[cfg(test)]
client_method!(LedgerClient => fn status_histogram() -> StatusHistogram as LedgerRequest::StatusHistogram);
#[cfg(test)]
client_method!(LedgerClient => fn list_orders() -> Vec<Order> as LedgerRequest::ListOrders);
