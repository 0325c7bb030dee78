//! Capability tiers of the marketplace: the owner, admins and store owners.
use casper_types::account::AccountHash;
use serde::{Deserialize, Serialize};

use crate::{error::Error, ordered_set::OrderedSet};

/// The capability an entry point requires from its caller.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Access {
    /// Anyone may call.
    Public,
    /// Only the marketplace owner may call.
    Owner,
    /// Only an admin may call.
    Admin,
    /// Only a store owner may call.
    StoreOwner,
}

/// The three capability sets.
///
/// Tiers are independent: being the owner does not make an account an admin, and an account may
/// be granted several tiers.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Roles {
    owner: AccountHash,
    admins: OrderedSet<AccountHash>,
    store_owners: OrderedSet<AccountHash>,
}

impl Roles {
    pub(crate) fn new(owner: AccountHash) -> Self {
        Roles {
            owner,
            admins: OrderedSet::new(),
            store_owners: OrderedSet::new(),
        }
    }

    /// Returns the owner.
    pub fn owner(&self) -> AccountHash {
        self.owner
    }

    /// Returns the ordered admins.
    pub fn admins(&self) -> &OrderedSet<AccountHash> {
        &self.admins
    }

    /// Returns the ordered store owners.
    pub fn store_owners(&self) -> &OrderedSet<AccountHash> {
        &self.store_owners
    }

    /// Checks that `caller` holds the capability required by `access`.
    pub fn authorize(&self, caller: AccountHash, access: Access) -> Result<(), Error> {
        match access {
            Access::Public => Ok(()),
            Access::Owner if caller == self.owner => Ok(()),
            Access::Owner => Err(Error::NotOwner),
            Access::Admin if self.admins.contains(&caller) => Ok(()),
            Access::Admin => Err(Error::NotAdmin),
            Access::StoreOwner if self.store_owners.contains(&caller) => Ok(()),
            Access::StoreOwner => Err(Error::NotStoreOwner),
        }
    }

    pub(crate) fn ensure_new_admin(&self, account: &AccountHash) -> Result<(), Error> {
        if self.admins.contains(account) {
            return Err(Error::DuplicateAdmin);
        }
        Ok(())
    }

    pub(crate) fn ensure_new_store_owner(&self, account: &AccountHash) -> Result<(), Error> {
        if self.store_owners.contains(account) {
            return Err(Error::DuplicateStoreOwner);
        }
        Ok(())
    }

    pub(crate) fn grant_admin(&mut self, account: AccountHash) {
        self.admins.insert(account);
    }

    pub(crate) fn grant_store_owner(&mut self, account: AccountHash) {
        self.store_owners.insert(account);
    }
}
