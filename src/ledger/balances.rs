use std::collections::HashMap;

use crate::domain::{Amount, Identity};

use super::error::LedgerError;

/// Value credited to each identity: sale proceeds and deposits.
/// Identities never seen hold zero.
#[derive(Debug, Default, Clone)]
pub struct Balances {
    accounts: HashMap<Identity, Amount>,
}

impl Balances {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance_of(&self, identity: &Identity) -> Amount {
        self.accounts.get(identity).copied().unwrap_or(0)
    }

    /// Computes `identity`'s balance after adding `amount` without applying it.
    pub fn credited(&self, identity: &Identity, amount: Amount) -> Result<Amount, LedgerError> {
        self.balance_of(identity)
            .checked_add(amount)
            .ok_or_else(|| LedgerError::BalanceOverflow(identity.clone()))
    }

    /// Writes a balance computed by [`credited`](Self::credited).
    /// Infallible so it can run after validation.
    pub fn set(&mut self, identity: Identity, balance: Amount) {
        self.accounts.insert(identity, balance);
    }

    /// Sum of every balance, saturating.
    pub fn total(&self) -> Amount {
        self.accounts.values().fold(0, |acc, v| acc.saturating_add(*v))
    }
}
