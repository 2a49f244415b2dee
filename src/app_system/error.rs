use thiserror::Error;

use crate::ledger::LedgerError;

/// Failures that end the session.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Ledger service task failed: {0}")]
    TaskFailed(String),
}
