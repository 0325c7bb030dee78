//! The marketplace registry.
use casper_types::{account::AccountHash, bytesrepr::ToBytes, CLTyped, CLValue, RuntimeArgs, U512};
use tracing::{debug, warn};

use crate::{
    catalog::{Catalog, Product, Store},
    config::MarketplaceConfig,
    constants::{
        ARG_ACCOUNT, ARG_INDEX, ARG_NAME, ARG_PRODUCT_ID, ARG_QUANTITY, ARG_STORE_ID, ARG_VALUE,
        METHOD_ADD_ADMIN, METHOD_ADD_PRODUCT, METHOD_ADD_STORE, METHOD_ADD_STORE_OWNER,
        METHOD_ADMIN, METHOD_ADMINS, METHOD_ADMIN_COUNT, METHOD_BALANCE_OF, METHOD_BUY_PRODUCT,
        METHOD_OWNER, METHOD_PRODUCT, METHOD_STORE, METHOD_STORES, METHOD_STORE_COUNT,
        METHOD_STORE_OWNER, METHOD_STORE_OWNERS, METHOD_STORE_OWNER_COUNT,
        METHOD_STORE_PRODUCTS, METHOD_WITHDRAW,
    },
    entry_points::{get_entry_points, EntryPoints},
    error::Error,
    event::MarketplaceEvent,
    identifiers::{ProductId, StoreId},
    payment::Ledger,
    roles::Roles,
    runtime::{check_declared_args, get_named_arg, CallContext},
};

/// Registry of admins, store owners, stores and products.
///
/// Every mutating operation checks all of its guards before touching any state, so a rejected
/// call leaves the registry exactly as it was.
#[derive(Clone, Debug)]
pub struct Marketplace {
    config: MarketplaceConfig,
    entry_points: EntryPoints,
    roles: Roles,
    catalog: Catalog,
    ledger: Ledger,
    events: Vec<MarketplaceEvent>,
}

impl Marketplace {
    /// Creates an empty marketplace owned by `owner`.
    pub fn new(owner: AccountHash, config: MarketplaceConfig) -> Self {
        Marketplace {
            config,
            entry_points: get_entry_points(),
            roles: Roles::new(owner),
            catalog: Catalog::default(),
            ledger: Ledger::default(),
            events: Vec::new(),
        }
    }

    /// Grants admin rights to `account`.  Only the owner may call this.
    pub fn add_admin(&mut self, ctx: &CallContext, account: AccountHash) -> Result<(), Error> {
        self.ensure_callable(ctx, METHOD_ADD_ADMIN)?;
        self.roles.ensure_new_admin(&account)?;

        self.roles.grant_admin(account);
        debug!(?account, "admin added");
        self.events.push(MarketplaceEvent::AdminAdded { account });
        Ok(())
    }

    /// Grants store-owner rights to `account`.  Only an admin may call this.
    pub fn add_store_owner(
        &mut self,
        ctx: &CallContext,
        account: AccountHash,
    ) -> Result<(), Error> {
        self.ensure_callable(ctx, METHOD_ADD_STORE_OWNER)?;
        self.roles.ensure_new_store_owner(&account)?;

        self.roles.grant_store_owner(account);
        debug!(?account, admin = ?ctx.caller(), "store owner added");
        self.events.push(MarketplaceEvent::StoreOwnerAdded {
            account,
            admin: ctx.caller(),
        });
        Ok(())
    }

    /// Creates a store owned by the caller, who must be a store owner.
    pub fn add_store(
        &mut self,
        ctx: &CallContext,
        store_id: StoreId,
        name: String,
    ) -> Result<(), Error> {
        self.ensure_callable(ctx, METHOD_ADD_STORE)?;
        self.ensure_valid_name(&name)?;
        self.catalog.ensure_new_store(&store_id)?;

        let owner = ctx.caller();
        self.catalog.insert_store(Store::new(store_id, name, owner));
        debug!(%store_id, ?owner, "store added");
        self.events.push(MarketplaceEvent::StoreAdded { store_id, owner });
        Ok(())
    }

    /// Adds a product to a store owned by the caller.
    pub fn add_product(
        &mut self,
        ctx: &CallContext,
        store_id: StoreId,
        product_id: ProductId,
        name: String,
        quantity: u64,
        value: U512,
    ) -> Result<(), Error> {
        self.ensure_callable(ctx, METHOD_ADD_PRODUCT)?;
        let store = self.catalog.store(&store_id).ok_or(Error::UnknownStore)?;
        if store.owner() != ctx.caller() {
            return Err(Error::NotOwnerOfStore);
        }
        self.ensure_valid_name(&name)?;
        self.catalog.ensure_new_product(&product_id)?;

        self.catalog
            .insert_product(Product::new(product_id, store_id, name, quantity, value));
        debug!(%store_id, %product_id, quantity, %value, "product added");
        self.events.push(MarketplaceEvent::ProductAdded {
            store_id,
            product_id,
            quantity,
            value,
        });
        Ok(())
    }

    /// Buys `quantity` units of a product, paying with the value attached to the call.
    pub fn buy_product(
        &mut self,
        ctx: &CallContext,
        product_id: ProductId,
        quantity: u64,
    ) -> Result<(), Error> {
        self.ensure_callable(ctx, METHOD_BUY_PRODUCT)?;
        let product = self
            .catalog
            .product(&product_id)
            .ok_or(Error::UnknownProduct)?;
        if quantity == 0 {
            return Err(Error::InvalidQuantity);
        }
        if quantity > product.quantity() {
            return Err(Error::InsufficientQuantity);
        }
        let price = product.price_of(quantity).ok_or(Error::Overflow)?;
        let settlement = self
            .config
            .payment
            .policy
            .settle(price, ctx.attached_value())?;
        let seller = self
            .catalog
            .store(&product.store_id())
            .map(Store::owner)
            .ok_or(Error::UnknownStore)?;
        let buyer = ctx.caller();
        let credits = [(seller, settlement.seller_credit), (buyer, settlement.refund)];
        self.ledger.check_credits(&credits)?;

        self.catalog.take_stock(&product_id, quantity)?;
        for (account, amount) in credits {
            self.ledger.credit(account, amount);
        }
        debug!(%product_id, ?buyer, quantity, paid = %ctx.attached_value(), "product purchased");
        self.events.push(MarketplaceEvent::ProductPurchased {
            product_id,
            buyer,
            quantity,
            paid: ctx.attached_value(),
        });
        Ok(())
    }

    /// Pays out the caller's whole withdrawable balance.
    pub fn withdraw(&mut self, ctx: &CallContext) -> Result<U512, Error> {
        self.ensure_callable(ctx, METHOD_WITHDRAW)?;
        let account = ctx.caller();
        let amount = self.ledger.drain(&account)?;
        debug!(?account, %amount, "funds withdrawn");
        self.events.push(MarketplaceEvent::FundsWithdrawn { account, amount });
        Ok(amount)
    }

    /// Returns the owner.
    pub fn owner(&self) -> AccountHash {
        self.roles.owner()
    }

    /// Returns `true` if `account` is an admin.
    pub fn is_admin(&self, account: &AccountHash) -> bool {
        self.roles.admins().contains(account)
    }

    /// Returns the admin granted at position `index`.
    pub fn admins(&self, index: usize) -> Option<AccountHash> {
        self.roles.admins().get(index).copied()
    }

    /// Returns the number of admins.
    pub fn admin_count(&self) -> usize {
        self.roles.admins().len()
    }

    /// Returns `true` if `account` is a store owner.
    pub fn is_store_owner(&self, account: &AccountHash) -> bool {
        self.roles.store_owners().contains(account)
    }

    /// Returns the store owner granted at position `index`.
    pub fn store_owners(&self, index: usize) -> Option<AccountHash> {
        self.roles.store_owners().get(index).copied()
    }

    /// Returns the number of store owners.
    pub fn store_owner_count(&self) -> usize {
        self.roles.store_owners().len()
    }

    /// Returns the id of the store created at position `index`.
    pub fn stores(&self, index: usize) -> Option<StoreId> {
        self.catalog.store_at(index)
    }

    /// Returns the number of stores.
    pub fn store_count(&self) -> usize {
        self.catalog.store_count()
    }

    /// Returns the store with the given id.
    pub fn store(&self, store_id: &StoreId) -> Option<&Store> {
        self.catalog.store(store_id)
    }

    /// Returns the products of a store in the order they were added.
    pub fn store_products(&self, store_id: &StoreId) -> &[ProductId] {
        self.catalog.store_products(store_id)
    }

    /// Returns the product with the given id.
    pub fn product(&self, product_id: &ProductId) -> Option<&Product> {
        self.catalog.product(product_id)
    }

    /// Returns the withdrawable balance of `account`.
    pub fn balance_of(&self, account: &AccountHash) -> U512 {
        self.ledger.balance_of(account)
    }

    /// Returns the value held on behalf of all accounts.
    pub fn total_held(&self) -> U512 {
        self.ledger.total()
    }

    /// Returns the event log, oldest first.
    pub fn events(&self) -> &[MarketplaceEvent] {
        &self.events
    }

    /// Returns the config the marketplace was created with.
    pub fn config(&self) -> &MarketplaceConfig {
        &self.config
    }

    /// Returns the entry points of the marketplace.
    pub fn entry_points(&self) -> &EntryPoints {
        &self.entry_points
    }

    /// Calls `entry_point` with named `args`.
    ///
    /// Mutating entry points return `None` (or the withdrawn amount); accessors return their
    /// value.  Missing records and indices past the end are reported as errors.
    pub fn call(
        &mut self,
        ctx: &CallContext,
        entry_point: &str,
        args: &RuntimeArgs,
    ) -> Result<Option<CLValue>, Error> {
        let result = self.dispatch(ctx, entry_point, args);
        if let Err(error) = &result {
            warn!(entry_point, caller = ?ctx.caller(), %error, "call reverted");
        }
        result
    }

    fn dispatch(
        &mut self,
        ctx: &CallContext,
        entry_point: &str,
        args: &RuntimeArgs,
    ) -> Result<Option<CLValue>, Error> {
        let declaration = self
            .entry_points
            .get(entry_point)
            .ok_or(Error::UnknownEntryPoint)?;
        if self.config.registry.strict_argument_checking {
            check_declared_args(declaration, args)?;
        }

        match entry_point {
            METHOD_ADD_ADMIN => {
                let account = get_named_arg(args, ARG_ACCOUNT)?;
                self.add_admin(ctx, account).map(|_| None)
            }
            METHOD_ADD_STORE_OWNER => {
                let account = get_named_arg(args, ARG_ACCOUNT)?;
                self.add_store_owner(ctx, account).map(|_| None)
            }
            METHOD_ADD_STORE => {
                let store_id = get_named_arg(args, ARG_STORE_ID)?;
                let name = get_named_arg(args, ARG_NAME)?;
                self.add_store(ctx, store_id, name).map(|_| None)
            }
            METHOD_ADD_PRODUCT => {
                let store_id = get_named_arg(args, ARG_STORE_ID)?;
                let product_id = get_named_arg(args, ARG_PRODUCT_ID)?;
                let name = get_named_arg(args, ARG_NAME)?;
                let quantity = get_named_arg(args, ARG_QUANTITY)?;
                let value = get_named_arg(args, ARG_VALUE)?;
                self.add_product(ctx, store_id, product_id, name, quantity, value)
                    .map(|_| None)
            }
            METHOD_BUY_PRODUCT => {
                let product_id = get_named_arg(args, ARG_PRODUCT_ID)?;
                let quantity = get_named_arg(args, ARG_QUANTITY)?;
                self.buy_product(ctx, product_id, quantity).map(|_| None)
            }
            METHOD_WITHDRAW => self.withdraw(ctx).and_then(|amount| ret(amount).map(Some)),
            _ => {
                self.ensure_callable(ctx, entry_point)?;
                self.read(entry_point, args).map(Some)
            }
        }
    }

    /// Evaluates the read-only entry point `entry_point` without a caller.
    pub fn query(&self, entry_point: &str, args: &RuntimeArgs) -> Result<CLValue, Error> {
        let declaration = self
            .entry_points
            .get(entry_point)
            .ok_or(Error::UnknownEntryPoint)?;
        if self.config.registry.strict_argument_checking {
            check_declared_args(declaration, args)?;
        }
        self.read(entry_point, args)
    }

    fn read(&self, entry_point: &str, args: &RuntimeArgs) -> Result<CLValue, Error> {
        match entry_point {
            METHOD_OWNER => ret(self.owner()),
            METHOD_ADMIN => {
                let account: AccountHash = get_named_arg(args, ARG_ACCOUNT)?;
                ret(self.is_admin(&account))
            }
            METHOD_ADMINS => {
                let index = get_index(args)?;
                ret(self.admins(index).ok_or(Error::IndexOutOfBounds)?)
            }
            METHOD_ADMIN_COUNT => ret(self.admin_count() as u64),
            METHOD_STORE_OWNER => {
                let account: AccountHash = get_named_arg(args, ARG_ACCOUNT)?;
                ret(self.is_store_owner(&account))
            }
            METHOD_STORE_OWNERS => {
                let index = get_index(args)?;
                ret(self.store_owners(index).ok_or(Error::IndexOutOfBounds)?)
            }
            METHOD_STORE_OWNER_COUNT => ret(self.store_owner_count() as u64),
            METHOD_STORES => {
                let index = get_index(args)?;
                ret(self.stores(index).ok_or(Error::IndexOutOfBounds)?)
            }
            METHOD_STORE_COUNT => ret(self.store_count() as u64),
            METHOD_STORE => {
                let store_id: StoreId = get_named_arg(args, ARG_STORE_ID)?;
                ret(self.store(&store_id).cloned().ok_or(Error::UnknownStore)?)
            }
            METHOD_STORE_PRODUCTS => {
                let store_id: StoreId = get_named_arg(args, ARG_STORE_ID)?;
                ret(self.store_products(&store_id).to_vec())
            }
            METHOD_PRODUCT => {
                let product_id: ProductId = get_named_arg(args, ARG_PRODUCT_ID)?;
                ret(self
                    .product(&product_id)
                    .cloned()
                    .ok_or(Error::UnknownProduct)?)
            }
            METHOD_BALANCE_OF => {
                let account: AccountHash = get_named_arg(args, ARG_ACCOUNT)?;
                ret(self.balance_of(&account))
            }
            _ => Err(Error::UnknownEntryPoint),
        }
    }

    /// Checks the caller's capability and the attached value against the entry point.
    fn ensure_callable(&self, ctx: &CallContext, entry_point: &str) -> Result<(), Error> {
        let declaration = self
            .entry_points
            .get(entry_point)
            .ok_or(Error::UnknownEntryPoint)?;
        ctx.ensure_payable(declaration)?;
        self.roles.authorize(ctx.caller(), declaration.access())
    }

    fn ensure_valid_name(&self, name: &str) -> Result<(), Error> {
        if name.is_empty() || name.len() > self.config.registry.max_name_length as usize {
            return Err(Error::InvalidName);
        }
        Ok(())
    }
}

fn get_index(args: &RuntimeArgs) -> Result<usize, Error> {
    let index: u64 = get_named_arg(args, ARG_INDEX)?;
    usize::try_from(index).map_err(|_| Error::IndexOutOfBounds)
}

fn ret<T: CLTyped + ToBytes>(value: T) -> Result<CLValue, Error> {
    CLValue::from_t(value).map_err(|_| Error::CLValue)
}
