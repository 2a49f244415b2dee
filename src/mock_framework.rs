//! # Mock Framework
//!
//! Utilities for testing the console in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver, then use
//! [`expect_dispatch`] or [`expect_shutdown`] to assert what was sent and
//! answer it.

use tokio::sync::mpsc;

use crate::clients::LedgerClient;
use crate::messages::{LedgerRequest, ServiceResponse};
use crate::session::{Action, View};

/// Creates a client whose requests land on a receiver the test controls, so
/// replies (including failures) are scripted instead of coming from a real
/// ledger service.
pub fn create_mock_client(buffer_size: usize) -> (LedgerClient, mpsc::Receiver<LedgerRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (LedgerClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Dispatch request
pub async fn expect_dispatch(
    receiver: &mut mpsc::Receiver<LedgerRequest>,
) -> Option<(Action, ServiceResponse<View>)> {
    match receiver.recv().await {
        Some(LedgerRequest::Dispatch { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Shutdown request
pub async fn expect_shutdown(receiver: &mut mpsc::Receiver<LedgerRequest>) -> bool {
    matches!(receiver.recv().await, Some(LedgerRequest::Shutdown))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.dispatch(Action::ShowDashboard).await });

        let (action, responder) = expect_dispatch(&mut receiver).await.expect("Expected Dispatch request");
        assert_eq!(action, Action::ShowDashboard);
        responder.send(Ok(View::Notice("ok".to_string()))).unwrap();

        let result = task.await.unwrap();
        assert_eq!(result, Ok(View::Notice("ok".to_string())));
    }

    #[tokio::test]
    async fn test_mock_shutdown() {
        let (client, mut receiver) = create_mock_client(10);
        client.shutdown().await.unwrap();
        assert!(expect_shutdown(&mut receiver).await);
    }
}
