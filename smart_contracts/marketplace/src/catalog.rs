//! Stores and the products they offer.
use std::collections::BTreeMap;

use casper_types::{
    account::AccountHash,
    bytesrepr::{self, FromBytes, ToBytes},
    CLType, CLTyped, U512,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    identifiers::{ProductId, StoreId},
    ordered_set::OrderedSet,
};

/// A named catalog container owned by a store owner.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Store {
    id: StoreId,
    name: String,
    owner: AccountHash,
}

impl Store {
    /// Constructs a new store record.
    pub fn new(id: StoreId, name: String, owner: AccountHash) -> Self {
        Store { id, name, owner }
    }

    /// Returns the id of the store.
    pub fn id(&self) -> StoreId {
        self.id
    }

    /// Returns the display name of the store.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the account owning the store.
    pub fn owner(&self) -> AccountHash {
        self.owner
    }
}

impl CLTyped for Store {
    fn cl_type() -> CLType {
        CLType::Any
    }
}

impl ToBytes for Store {
    fn to_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        let mut result = bytesrepr::allocate_buffer(self)?;
        result.append(&mut self.id.to_bytes()?);
        result.append(&mut self.name.to_bytes()?);
        result.append(&mut self.owner.to_bytes()?);
        Ok(result)
    }

    fn serialized_length(&self) -> usize {
        self.id.serialized_length() + self.name.serialized_length() + self.owner.serialized_length()
    }
}

impl FromBytes for Store {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), bytesrepr::Error> {
        let (id, remainder) = StoreId::from_bytes(bytes)?;
        let (name, remainder) = String::from_bytes(remainder)?;
        let (owner, remainder) = AccountHash::from_bytes(remainder)?;
        Ok((Store { id, name, owner }, remainder))
    }
}

/// A purchasable item belonging to a store.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    store_id: StoreId,
    name: String,
    quantity: u64,
    value: U512,
}

impl Product {
    /// Constructs a new product record.
    pub fn new(id: ProductId, store_id: StoreId, name: String, quantity: u64, value: U512) -> Self {
        Product {
            id,
            store_id,
            name,
            quantity,
            value,
        }
    }

    /// Returns the id of the product.
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Returns the id of the store offering the product.
    pub fn store_id(&self) -> StoreId {
        self.store_id
    }

    /// Returns the name of the product.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the available quantity.
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Returns the unit value in motes.
    pub fn value(&self) -> U512 {
        self.value
    }

    /// Returns the price of `quantity` units, or `None` on overflow.
    pub fn price_of(&self, quantity: u64) -> Option<U512> {
        self.value.checked_mul(U512::from(quantity))
    }
}

impl CLTyped for Product {
    fn cl_type() -> CLType {
        CLType::Any
    }
}

impl ToBytes for Product {
    fn to_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        let mut result = bytesrepr::allocate_buffer(self)?;
        result.append(&mut self.id.to_bytes()?);
        result.append(&mut self.store_id.to_bytes()?);
        result.append(&mut self.name.to_bytes()?);
        result.append(&mut self.quantity.to_bytes()?);
        result.append(&mut self.value.to_bytes()?);
        Ok(result)
    }

    fn serialized_length(&self) -> usize {
        self.id.serialized_length()
            + self.store_id.serialized_length()
            + self.name.serialized_length()
            + self.quantity.serialized_length()
            + self.value.serialized_length()
    }
}

impl FromBytes for Product {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), bytesrepr::Error> {
        let (id, remainder) = ProductId::from_bytes(bytes)?;
        let (store_id, remainder) = StoreId::from_bytes(remainder)?;
        let (name, remainder) = String::from_bytes(remainder)?;
        let (quantity, remainder) = u64::from_bytes(remainder)?;
        let (value, remainder) = U512::from_bytes(remainder)?;
        let product = Product {
            id,
            store_id,
            name,
            quantity,
            value,
        };
        Ok((product, remainder))
    }
}

/// All stores and products of the marketplace.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Catalog {
    store_ids: OrderedSet<StoreId>,
    stores: BTreeMap<StoreId, Store>,
    store_products: BTreeMap<StoreId, Vec<ProductId>>,
    products: BTreeMap<ProductId, Product>,
}

impl Catalog {
    /// Returns the id of the store created at position `index`.
    pub fn store_at(&self, index: usize) -> Option<StoreId> {
        self.store_ids.get(index).copied()
    }

    /// Returns the number of stores.
    pub fn store_count(&self) -> usize {
        self.store_ids.len()
    }

    /// Returns the store with the given id.
    pub fn store(&self, store_id: &StoreId) -> Option<&Store> {
        self.stores.get(store_id)
    }

    /// Returns the product with the given id.
    pub fn product(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.get(product_id)
    }

    /// Returns the ids of the products of a store, in the order they were added.
    pub fn store_products(&self, store_id: &StoreId) -> &[ProductId] {
        self.store_products
            .get(store_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub(crate) fn ensure_new_store(&self, store_id: &StoreId) -> Result<(), Error> {
        if self.store_ids.contains(store_id) {
            return Err(Error::DuplicateStore);
        }
        Ok(())
    }

    pub(crate) fn ensure_new_product(&self, product_id: &ProductId) -> Result<(), Error> {
        if self.products.contains_key(product_id) {
            return Err(Error::DuplicateProduct);
        }
        Ok(())
    }

    pub(crate) fn insert_store(&mut self, store: Store) {
        let store_id = store.id();
        self.store_ids.insert(store_id);
        self.stores.insert(store_id, store);
    }

    pub(crate) fn insert_product(&mut self, product: Product) {
        self.store_products
            .entry(product.store_id())
            .or_default()
            .push(product.id());
        self.products.insert(product.id(), product);
    }

    /// Removes `quantity` units from the stock of a product.
    pub(crate) fn take_stock(
        &mut self,
        product_id: &ProductId,
        quantity: u64,
    ) -> Result<(), Error> {
        let product = self
            .products
            .get_mut(product_id)
            .ok_or(Error::UnknownProduct)?;
        product.quantity = product
            .quantity
            .checked_sub(quantity)
            .ok_or(Error::InsufficientQuantity)?;
        Ok(())
    }
}
