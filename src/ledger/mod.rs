//! The order ledger: the session's only table of orders and its
//! mutation/query surface.

pub mod aggregates;
pub mod error;
mod store;

pub use aggregates::*;
pub use error::*;
pub use store::{Ledger, MAX_PRICE};
