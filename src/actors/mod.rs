use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, instrument, warn};

use crate::app_system::LedgerConfig;
use crate::clients::LedgerClient;
use crate::domain::{Amount, EventRecord, Identity, Product, ProductId};
use crate::ledger::{LedgerError, MarketplaceLedger};
use crate::messages::{LedgerRequest, ServiceResponse};

// =============================================================================
// LEDGER SERVICE
// =============================================================================

/// Single writer of the marketplace ledger.
///
/// The service owns its [`MarketplaceLedger`] and handles one mailbox message
/// at a time. Handlers are synchronous, so nothing can interleave between a
/// purchase's validation and its effects. Reads travel through the same
/// mailbox and only ever see committed state.
pub struct LedgerService {
    receiver: mpsc::Receiver<LedgerRequest>,
    ledger: MarketplaceLedger,
    events: broadcast::Sender<EventRecord>,
}

impl LedgerService {
    pub fn new(ledger: MarketplaceLedger, config: &LedgerConfig) -> (Self, LedgerClient) {
        let (sender, receiver) = mpsc::channel(config.mailbox_capacity);
        let (events, _) = broadcast::channel(config.event_capacity);
        let client = LedgerClient::new(sender, events.clone());
        let service = Self {
            receiver,
            ledger,
            events,
        };
        (service, client)
    }

    /// Main actor loop. Returns the final ledger once the mailbox closes or a
    /// shutdown request arrives.
    #[instrument(name = "ledger_service", skip(self))]
    pub async fn run(mut self) -> MarketplaceLedger {
        info!(marketplace = %self.ledger.name(), "LedgerService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                LedgerRequest::ListProduct {
                    name,
                    price,
                    seller,
                    respond_to,
                } => {
                    self.handle_list_product(name, price, seller, respond_to);
                }
                LedgerRequest::PurchaseProduct {
                    id,
                    buyer,
                    payment,
                    respond_to,
                } => {
                    self.handle_purchase_product(id, buyer, payment, respond_to);
                }
                LedgerRequest::GetProduct { id, respond_to } => {
                    self.handle_get_product(id, respond_to);
                }
                LedgerRequest::GetProductCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.ledger.product_count()));
                }
                LedgerRequest::ListProducts { respond_to } => {
                    let _ = respond_to.send(Ok(self.ledger.products()));
                }
                LedgerRequest::Deposit {
                    identity,
                    amount,
                    respond_to,
                } => {
                    self.handle_deposit(identity, amount, respond_to);
                }
                LedgerRequest::BalanceOf { identity, respond_to } => {
                    let _ = respond_to.send(Ok(self.ledger.balance_of(&identity)));
                }
                LedgerRequest::EventsSince { sequence, respond_to } => {
                    let _ = respond_to.send(Ok(self.ledger.events_since(sequence).to_vec()));
                }
                LedgerRequest::MarketplaceName { respond_to } => {
                    let _ = respond_to.send(Ok(self.ledger.name().to_string()));
                }
                LedgerRequest::Shutdown => {
                    info!("LedgerService shutting down");
                    break;
                }
            }
        }

        info!(
            products = self.ledger.product_count(),
            events = self.ledger.last_sequence(),
            "LedgerService stopped"
        );
        self.ledger
    }

    #[instrument(fields(product_name = %name, seller = %seller), skip(self, name, seller, respond_to))]
    fn handle_list_product(
        &mut self,
        name: String,
        price: Amount,
        seller: Identity,
        respond_to: ServiceResponse<Product, LedgerError>,
    ) {
        debug!("Processing list_product request");
        let since = self.ledger.last_sequence();

        let result = self.ledger.list_product(&name, price, seller);
        match &result {
            Ok(product) => {
                info!(product_id = product.id, "Product listed");
                self.publish_since(since);
            }
            Err(e) => warn!(error = %e, "Listing rejected"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_id = id, buyer = %buyer), skip(self, buyer, respond_to))]
    fn handle_purchase_product(
        &mut self,
        id: ProductId,
        buyer: Identity,
        payment: Amount,
        respond_to: ServiceResponse<Product, LedgerError>,
    ) {
        debug!("Processing purchase_product request");
        let since = self.ledger.last_sequence();

        let result = self.ledger.purchase_product(id, buyer, payment);
        match &result {
            Ok(product) => {
                info!(price = %product.price, "Product purchased");
                self.publish_since(since);
            }
            Err(e) => warn!(error = %e, "Purchase rejected"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_id = id), skip(self, respond_to))]
    fn handle_get_product(&self, id: ProductId, respond_to: ServiceResponse<Product, LedgerError>) {
        debug!("Processing get_product request");

        let result = self.ledger.get_product(id);
        match &result {
            Ok(product) => debug!(product_name = %product.name, status = %product.status(), "Product found"),
            Err(_) => debug!("Product not found"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(identity = %identity), skip(self, identity, respond_to))]
    fn handle_deposit(&mut self, identity: Identity, amount: Amount, respond_to: ServiceResponse<Amount, LedgerError>) {
        debug!("Processing deposit request");

        let result = self.ledger.deposit(identity, amount);
        match &result {
            Ok(balance) => info!(balance = %balance, "Deposit credited"),
            Err(e) => warn!(error = %e, "Deposit rejected"),
        }

        let _ = respond_to.send(result);
    }

    /// Fans out everything committed after `sequence` to subscribers.
    fn publish_since(&self, sequence: u64) {
        for record in self.ledger.events_since(sequence) {
            debug!(sequence = record.sequence, event = record.event.name(), "Publishing event");
            // No subscribers is not an error; the history keeps the record.
            if self.events.send(record.clone()).is_err() {
                debug!("No event subscribers");
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
