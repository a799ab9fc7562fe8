use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, instrument};

use crate::domain::{Amount, EventRecord, Identity, Product, ProductId};
use crate::ledger::LedgerError;
use crate::messages::LedgerRequest;

// =============================================================================
// CLIENT METHOD MACRO
// =============================================================================

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
/// A closed mailbox or a dropped reply becomes `ActorCommunicationError`.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

// =============================================================================
// LEDGER CLIENT
// =============================================================================

/// Cloneable handle to the ledger service. Any number of tasks may hold one;
/// their calls are serialized by the service mailbox.
#[derive(Clone)]
pub struct LedgerClient {
    sender: mpsc::Sender<LedgerRequest>,
    events: broadcast::Sender<EventRecord>,
}

impl LedgerClient {
    pub fn new(sender: mpsc::Sender<LedgerRequest>, events: broadcast::Sender<EventRecord>) -> Self {
        Self { sender, events }
    }

    /// Receives every event committed after this call.
    ///
    /// Slow receivers may observe `RecvError::Lagged`; use
    /// [`events_since`](Self::events_since) to catch up from the history.
    pub fn subscribe(&self) -> broadcast::Receiver<EventRecord> {
        self.events.subscribe()
    }

    /// Manual method for special cases (no response needed)
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), LedgerError> {
        debug!("Sending shutdown request");
        self.sender
            .send(LedgerRequest::Shutdown)
            .await
            .map_err(|_| LedgerError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(LedgerClient => fn list_product(name: String, price: Amount, seller: Identity) -> Product as LedgerRequest::ListProduct, Error = LedgerError);
client_method!(LedgerClient => fn purchase_product(id: ProductId, buyer: Identity, payment: Amount) -> Product as LedgerRequest::PurchaseProduct, Error = LedgerError);
client_method!(LedgerClient => fn get_product(id: ProductId) -> Product as LedgerRequest::GetProduct, Error = LedgerError);
client_method!(LedgerClient => fn product_count() -> u64 as LedgerRequest::GetProductCount, Error = LedgerError);
client_method!(LedgerClient => fn products() -> Vec<Product> as LedgerRequest::ListProducts, Error = LedgerError);
client_method!(LedgerClient => fn deposit(identity: Identity, amount: Amount) -> Amount as LedgerRequest::Deposit, Error = LedgerError);
client_method!(LedgerClient => fn balance_of(identity: Identity) -> Amount as LedgerRequest::BalanceOf, Error = LedgerError);
client_method!(LedgerClient => fn events_since(sequence: u64) -> Vec<EventRecord> as LedgerRequest::EventsSince, Error = LedgerError);
client_method!(LedgerClient => fn marketplace_name() -> String as LedgerRequest::MarketplaceName, Error = LedgerError);
