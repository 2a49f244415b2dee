use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::clients::LedgerClient;
use crate::ledger::Ledger;
use crate::ledger_actor::LedgerService;
use super::error::SystemError;

/// Owns the ledger service for one session.
///
/// The ledger is created empty in [`LedgerSystem::new`] and discarded by
/// [`LedgerSystem::shutdown`]; nothing survives the session.
pub struct LedgerSystem {
    pub ledger_client: LedgerClient,
    handle: JoinHandle<()>,
}

impl LedgerSystem {
    pub fn new(channel_capacity: usize) -> Self {
        Self::with_ledger(channel_capacity, Ledger::new())
    }

    pub fn with_ledger(channel_capacity: usize, ledger: Ledger) -> Self {
        info!(channel_capacity, "Starting ledger system");
        let (service, ledger_client) = LedgerService::new(channel_capacity, ledger);
        let handle = tokio::spawn(service.run());
        Self { ledger_client, handle }
    }

    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        // A dead service can no longer take the message; the join below reports why.
        if let Err(e) = self.ledger_client.shutdown().await {
            warn!(error = %e, "Ledger service already stopped");
        }

        if let Err(e) = self.handle.await {
            error!("Ledger task failed: {:?}", e);
            return Err(SystemError::TaskFailed(e.to_string()));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
