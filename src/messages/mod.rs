use tokio::sync::oneshot;

use crate::domain::{Amount, EventRecord, Identity, Product, ProductId};
use crate::ledger::LedgerError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Mailbox messages of the ledger service. Each variant carries its
/// parameters and a oneshot channel for the reply.
#[derive(Debug)]
pub enum LedgerRequest {
    ListProduct {
        name: String,
        price: Amount,
        seller: Identity,
        respond_to: ServiceResponse<Product, LedgerError>,
    },
    PurchaseProduct {
        id: ProductId,
        buyer: Identity,
        payment: Amount,
        respond_to: ServiceResponse<Product, LedgerError>,
    },
    GetProduct {
        id: ProductId,
        respond_to: ServiceResponse<Product, LedgerError>,
    },
    GetProductCount {
        respond_to: ServiceResponse<u64, LedgerError>,
    },
    ListProducts {
        respond_to: ServiceResponse<Vec<Product>, LedgerError>,
    },
    Deposit {
        identity: Identity,
        amount: Amount,
        respond_to: ServiceResponse<Amount, LedgerError>,
    },
    BalanceOf {
        identity: Identity,
        respond_to: ServiceResponse<Amount, LedgerError>,
    },
    EventsSince {
        sequence: u64,
        respond_to: ServiceResponse<Vec<EventRecord>, LedgerError>,
    },
    MarketplaceName {
        respond_to: ServiceResponse<String, LedgerError>,
    },
    Shutdown,
}
