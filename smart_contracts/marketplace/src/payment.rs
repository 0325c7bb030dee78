//! Settlement of purchases and the withdrawable balances they produce.
use std::collections::BTreeMap;

use casper_types::{account::AccountHash, U512};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How the value attached to a purchase is reconciled against its price.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentPolicy {
    /// The attached value must equal the price.
    Exact,
    /// The attached value must cover the price; the excess is credited back to the buyer.
    #[default]
    AtLeast,
    /// Any attached value is accepted and credited to the seller.
    Ignore,
}

/// The credits produced by one purchase.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Settlement {
    /// Amount credited to the owner of the store.
    pub seller_credit: U512,
    /// Amount credited back to the buyer.
    pub refund: U512,
}

impl PaymentPolicy {
    /// Splits `attached` between seller and buyer for a purchase costing `price`.
    pub fn settle(self, price: U512, attached: U512) -> Result<Settlement, Error> {
        match self {
            PaymentPolicy::Exact if attached == price => Ok(Settlement {
                seller_credit: price,
                refund: U512::zero(),
            }),
            PaymentPolicy::Exact => Err(Error::IncorrectPayment),
            PaymentPolicy::AtLeast => {
                let refund = attached
                    .checked_sub(price)
                    .ok_or(Error::IncorrectPayment)?;
                Ok(Settlement {
                    seller_credit: price,
                    refund,
                })
            }
            PaymentPolicy::Ignore => Ok(Settlement {
                seller_credit: attached,
                refund: U512::zero(),
            }),
        }
    }
}

/// Withdrawable balances held by the marketplace on behalf of accounts.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Ledger {
    balances: BTreeMap<AccountHash, U512>,
    total: U512,
}

impl Ledger {
    /// Returns the withdrawable balance of `account`.
    pub fn balance_of(&self, account: &AccountHash) -> U512 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    /// Returns the sum of all balances.
    pub fn total(&self) -> U512 {
        self.total
    }

    /// Checks that crediting `amounts` would not overflow any balance or the total.
    pub(crate) fn check_credits(&self, amounts: &[(AccountHash, U512)]) -> Result<(), Error> {
        let mut pending: BTreeMap<AccountHash, U512> = BTreeMap::new();
        let mut total = self.total;
        for (account, amount) in amounts {
            let balance = pending
                .get(account)
                .copied()
                .unwrap_or_else(|| self.balance_of(account));
            pending.insert(*account, balance.checked_add(*amount).ok_or(Error::Overflow)?);
            total = total.checked_add(*amount).ok_or(Error::Overflow)?;
        }
        Ok(())
    }

    /// Credits `amount` to `account`; callers run [`Ledger::check_credits`] first.
    pub(crate) fn credit(&mut self, account: AccountHash, amount: U512) {
        if amount.is_zero() {
            return;
        }
        let balance = self.balances.entry(account).or_default();
        *balance = balance.saturating_add(amount);
        self.total = self.total.saturating_add(amount);
    }

    /// Removes and returns the whole balance of `account`.
    pub(crate) fn drain(&mut self, account: &AccountHash) -> Result<U512, Error> {
        let amount = self
            .balances
            .remove(account)
            .filter(|amount| !amount.is_zero())
            .ok_or(Error::NothingToWithdraw)?;
        self.total = self.total.saturating_sub(amount);
        Ok(amount)
    }
}
