use serde::{Deserialize, Serialize};

use super::identity::{Amount, Identity};
use super::product::Product;

/// Something the ledger committed. Payloads carry the post-mutation product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LedgerEvent {
    ProductListed {
        product: Product,
    },
    ProductPurchased {
        product: Product,
        seller: Identity,
        paid: Amount,
        refunded: Amount,
    },
}

impl LedgerEvent {
    pub fn product(&self) -> &Product {
        match self {
            LedgerEvent::ProductListed { product } => product,
            LedgerEvent::ProductPurchased { product, .. } => product,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LedgerEvent::ProductListed { .. } => "ProductListed",
            LedgerEvent::ProductPurchased { .. } => "ProductPurchased",
        }
    }
}

/// An entry of the append-only event history. Sequences start at 1 with no gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub sequence: u64,
    pub event: LedgerEvent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_with_type_tag() {
        let record = EventRecord {
            sequence: 1,
            event: LedgerEvent::ProductListed {
                product: Product {
                    id: 1,
                    name: "iPhone".to_string(),
                    price: 1_000_000,
                    owner: Identity::new("seller"),
                    purchased: false,
                },
            },
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["sequence"], 1);
        assert_eq!(json["event"]["type"], "ProductListed");
        assert_eq!(json["event"]["product"]["owner"], "seller");
        assert_eq!(json["event"]["product"]["purchased"], false);
    }
}
