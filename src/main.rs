use tracing::{error, info, Instrument};

use marketplace_ledger::{setup_tracing, Identity, LedgerConfig, MarketplaceSystem, ProductCreate, SystemError};

/// One ether in wei.
const ONE_ETHER: u128 = 1_000_000_000_000_000_000;

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    setup_tracing();

    let config = LedgerConfig::from_env()?;
    info!(marketplace = %config.marketplace_name, "Starting marketplace ledger");

    let system = MarketplaceSystem::new(config);
    let client = system.ledger_client.clone();

    let seller = Identity::new("0xSeller");
    let buyer = Identity::new("0xBuyer");

    let listing = ProductCreate::new("iPhone", ONE_ETHER, seller.clone());
    let product = async {
        info!("Listing product");
        client.list_product(listing.name, listing.price, listing.seller).await
    }
    .instrument(tracing::info_span!("listing"))
    .await?;

    info!(product_id = product.id, "Product listed successfully");

    let purchase = async {
        info!("Purchasing product");
        client.purchase_product(product.id, buyer.clone(), ONE_ETHER).await
    }
    .instrument(tracing::info_span!("purchase"))
    .await;

    match purchase {
        Ok(product) => info!(product_id = product.id, owner = %product.owner, "Product purchased successfully"),
        Err(e) => error!(error = %e, "Purchase failed"),
    }

    // A second purchase of the same listing is always rejected.
    if let Err(e) = client.purchase_product(product.id, buyer.clone(), ONE_ETHER).await {
        info!(error = %e, "Repeat purchase rejected");
    }

    let seller_balance = client.balance_of(seller).await?;
    let buyer_balance = client.balance_of(buyer).await?;
    info!(seller_balance = %seller_balance, buyer_balance = %buyer_balance, "Balances after trading");

    for record in client.events_since(0).await? {
        println!("{}", serde_json::to_string(&record)?);
    }

    drop(client);
    let ledger = system.shutdown().await?;
    info!(products = ledger.product_count(), "Application completed successfully");
    Ok(())
}
