//! The service task that owns the ledger for the lifetime of a session.

mod service;

pub use service::LedgerService;
