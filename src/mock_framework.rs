//! # Mock Framework
//!
//! Utilities for testing [`LedgerClient`] callers without a running service.
//!
//! [`create_mock_client`] returns a client wired to a mailbox the test owns.
//! Helpers like [`expect_purchase`] pop the next request so the test can
//! assert on it and script the reply.

use tokio::sync::{broadcast, mpsc};

use crate::clients::LedgerClient;
use crate::domain::{Amount, Identity, Product, ProductId};
use crate::ledger::LedgerError;
use crate::messages::{LedgerRequest, ServiceResponse};

/// Creates a client and the receiving end of its mailbox.
pub fn create_mock_client(buffer_size: usize) -> (LedgerClient, mpsc::Receiver<LedgerRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (events, _) = broadcast::channel(buffer_size);
    (LedgerClient::new(sender, events), receiver)
}

/// Helper to verify that the next message is a ListProduct request
pub async fn expect_list(
    receiver: &mut mpsc::Receiver<LedgerRequest>,
) -> Option<(String, Amount, Identity, ServiceResponse<Product, LedgerError>)> {
    match receiver.recv().await {
        Some(LedgerRequest::ListProduct { name, price, seller, respond_to }) => Some((name, price, seller, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a PurchaseProduct request
pub async fn expect_purchase(
    receiver: &mut mpsc::Receiver<LedgerRequest>,
) -> Option<(ProductId, Identity, Amount, ServiceResponse<Product, LedgerError>)> {
    match receiver.recv().await {
        Some(LedgerRequest::PurchaseProduct { id, buyer, payment, respond_to }) => Some((id, buyer, payment, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client_round_trip() {
        let (client, mut receiver) = create_mock_client(10);

        let purchase_task = tokio::spawn(async move {
            client.purchase_product(3, Identity::new("0xBuyer"), 42).await
        });

        let (id, buyer, payment, responder) = expect_purchase(&mut receiver).await.expect("Expected Purchase request");
        assert_eq!(id, 3);
        assert_eq!(buyer, Identity::new("0xBuyer"));
        assert_eq!(payment, 42);
        responder.send(Err(LedgerError::AlreadyPurchased(3))).unwrap();

        let result = purchase_task.await.unwrap();
        assert_eq!(result, Err(LedgerError::AlreadyPurchased(3)));
    }

    #[tokio::test]
    async fn test_dropped_reply_is_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        let list_task = tokio::spawn(async move {
            client.list_product("Lamp".to_string(), 10, Identity::new("0xSeller")).await
        });

        let (name, price, _, responder) = expect_list(&mut receiver).await.expect("Expected List request");
        assert_eq!(name, "Lamp");
        assert_eq!(price, 10);
        drop(responder);

        let result = list_task.await.unwrap();
        assert_eq!(
            result,
            Err(LedgerError::ActorCommunicationError("Actor dropped".to_string()))
        );
    }

    #[tokio::test]
    async fn test_closed_mailbox_is_communication_error() {
        let (client, receiver) = create_mock_client(10);
        drop(receiver);

        let result = client.get_product(1).await;
        assert_eq!(
            result,
            Err(LedgerError::ActorCommunicationError("Actor closed".to_string()))
        );
    }
}
