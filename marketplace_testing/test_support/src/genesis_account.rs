use casper_types::{account::AccountHash, U512};
use serde::{Deserialize, Serialize};

/// An account funded when the marketplace under test is deployed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisAccount {
    account_hash: AccountHash,
    balance: U512,
}

impl GenesisAccount {
    /// Returns a [`GenesisAccount`] holding `balance`.
    pub fn new(account_hash: AccountHash, balance: U512) -> Self {
        GenesisAccount {
            account_hash,
            balance,
        }
    }

    /// Returns the account hash.
    pub fn account_hash(&self) -> AccountHash {
        self.account_hash
    }

    /// Returns the initial balance.
    pub fn balance(&self) -> U512 {
        self.balance
    }
}
