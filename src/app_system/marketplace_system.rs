use tracing::{error, info};

use super::config::LedgerConfig;
use super::error::SystemError;
use crate::actors::LedgerService;
use crate::clients::LedgerClient;
use crate::ledger::MarketplaceLedger;

/// The application system that owns the ledger service.
///
/// Responsible for starting the service task, handing out the client, and
/// shutting down gracefully.
pub struct MarketplaceSystem {
    pub ledger_client: LedgerClient,
    handle: tokio::task::JoinHandle<MarketplaceLedger>,
}

impl MarketplaceSystem {
    /// Starts a service around an empty ledger. Must be called inside a tokio runtime.
    pub fn new(config: LedgerConfig) -> Self {
        let ledger = MarketplaceLedger::new(config.marketplace_name.clone());
        Self::with_ledger(ledger, config)
    }

    /// Starts a service around an existing ledger, e.g. one returned by an
    /// earlier [`shutdown`](Self::shutdown).
    pub fn with_ledger(ledger: MarketplaceLedger, config: LedgerConfig) -> Self {
        info!(
            marketplace = %ledger.name(),
            mailbox_capacity = config.mailbox_capacity,
            event_capacity = config.event_capacity,
            "Starting marketplace system"
        );
        let (service, ledger_client) = LedgerService::new(ledger, &config);
        let handle = tokio::spawn(service.run());

        Self { ledger_client, handle }
    }

    /// Stops the service and returns the final ledger state.
    ///
    /// Requests already queued ahead of the shutdown message are still
    /// processed; later ones fail with `ActorCommunicationError`.
    pub async fn shutdown(self) -> Result<MarketplaceLedger, SystemError> {
        info!("Shutting down system...");
        self.ledger_client.shutdown().await?;
        drop(self.ledger_client);

        match self.handle.await {
            Ok(ledger) => {
                info!("System shutdown complete.");
                Ok(ledger)
            }
            Err(e) => {
                error!("Ledger task failed: {:?}", e);
                Err(SystemError::TaskFailed(e))
            }
        }
    }
}
