use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
#[cfg(test)]
use tracing::warn;

use crate::clients::LedgerClient;
#[cfg(test)]
use crate::domain::{Order, OrderCreate, OrderStatus};
use crate::ledger::Ledger;
use crate::messages::{LedgerRequest, ServiceResponse};
use crate::session::{self, Action, View};

/// Sole owner of the session's ledger. Requests are handled one at a time in
/// arrival order, so callers never observe interleaved mutations.
pub struct LedgerService {
    receiver: mpsc::Receiver<LedgerRequest>,
    ledger: Ledger,
}

impl LedgerService {
    pub fn new(buffer_size: usize, ledger: Ledger) -> (Self, LedgerClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, ledger };
        (service, LedgerClient::new(sender))
    }

    #[instrument(name = "ledger_service", skip(self))]
    pub async fn run(mut self) {
        info!("LedgerService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                #[cfg(test)]
                LedgerRequest::Append { params, respond_to } => {
                    self.handle_append(params, respond_to);
                }
                #[cfg(test)]
                LedgerRequest::SetStatus { order_id, status, respond_to } => {
                    self.handle_set_status(order_id, status, respond_to);
                }
                #[cfg(test)]
                LedgerRequest::CountByStatus { status, respond_to } => {
                    let _ = respond_to.send(Ok(self.ledger.count_by_status(status)));
                }
                #[cfg(test)]
                LedgerRequest::AggregateRevenue { respond_to } => {
                    let _ = respond_to.send(Ok(self.ledger.aggregate_revenue()));
                }
                #[cfg(test)]
                LedgerRequest::StatusHistogram { respond_to } => {
                    let _ = respond_to.send(Ok(self.ledger.status_histogram()));
                }
                #[cfg(test)]
                LedgerRequest::ListOrders { respond_to } => {
                    let _ = respond_to.send(Ok(self.ledger.orders().to_vec()));
                }
                LedgerRequest::Dispatch { action, respond_to } => {
                    self.handle_dispatch(action, respond_to);
                }
                LedgerRequest::Shutdown => {
                    info!("LedgerService shutting down");
                    break;
                }
            }
        }
        info!(orders = self.ledger.len(), "LedgerService stopped, discarding ledger");
    }

    #[cfg(test)]
    #[instrument(fields(order_id = %params.order_id), skip(self, params, respond_to))]
    fn handle_append(&mut self, params: OrderCreate, respond_to: ServiceResponse<Order>) {
        debug!("Processing append request");
        let result = self.ledger.append(params);
        match &result {
            Ok(_) => info!(len = self.ledger.len(), "Order appended"),
            Err(e) => warn!(error = %e, "Append rejected"),
        }
        let _ = respond_to.send(result);
    }

    #[cfg(test)]
    #[instrument(fields(order_id = %order_id, status = %status), skip(self, order_id, status, respond_to))]
    fn handle_set_status(
        &mut self,
        order_id: String,
        status: OrderStatus,
        respond_to: ServiceResponse<Order>,
    ) {
        debug!("Processing set_status request");
        let result = self.ledger.set_status(&order_id, status);
        match &result {
            Ok(_) => info!("Status updated"),
            Err(e) => warn!(error = %e, "Status update rejected"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_dispatch(&mut self, action: Action, respond_to: ServiceResponse<View>) {
        debug!("Processing dispatch request");
        let view = session::apply(&mut self.ledger, action);
        let _ = respond_to.send(Ok(view));
    }
}
