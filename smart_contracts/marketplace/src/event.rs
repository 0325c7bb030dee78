//! Records of accepted state changes.
use casper_types::{account::AccountHash, U512};
use serde::{Deserialize, Serialize};

use crate::identifiers::{ProductId, StoreId};

/// One entry of the marketplace event log, appended by every successful mutating call.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MarketplaceEvent {
    /// An account was granted admin rights by the owner.
    AdminAdded {
        /// The new admin.
        account: AccountHash,
    },
    /// An account was granted store-owner rights.
    StoreOwnerAdded {
        /// The new store owner.
        account: AccountHash,
        /// The admin who granted the rights.
        admin: AccountHash,
    },
    /// A store was created.
    StoreAdded {
        /// Id of the new store.
        store_id: StoreId,
        /// The store owner who created it.
        owner: AccountHash,
    },
    /// A product was added to a store.
    ProductAdded {
        /// Id of the store offering the product.
        store_id: StoreId,
        /// Id of the new product.
        product_id: ProductId,
        /// Initial stock.
        quantity: u64,
        /// Unit value in motes.
        value: U512,
    },
    /// Units of a product were bought.
    ProductPurchased {
        /// Id of the bought product.
        product_id: ProductId,
        /// The buying account.
        buyer: AccountHash,
        /// Number of units bought.
        quantity: u64,
        /// Total value attached by the buyer.
        paid: U512,
    },
    /// An account withdrew its whole balance.
    FundsWithdrawn {
        /// The withdrawing account.
        account: AccountHash,
        /// Amount paid out.
        amount: U512,
    },
}
