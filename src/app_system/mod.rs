//! System orchestration, startup, and shutdown logic.

pub mod error;
pub mod ledger_system;
pub mod tracing;

pub use error::*;
pub use ledger_system::*;
pub use self::tracing::setup_tracing;
