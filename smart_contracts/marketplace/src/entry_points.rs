//! Contains definition of the entry points.
use std::collections::BTreeMap;

use casper_types::{account::AccountHash, CLType, CLTyped, Parameter, U512};

use crate::{
    catalog::{Product, Store},
    constants::{
        ARG_ACCOUNT, ARG_INDEX, ARG_NAME, ARG_PRODUCT_ID, ARG_QUANTITY, ARG_STORE_ID, ARG_VALUE,
        METHOD_ADD_ADMIN, METHOD_ADD_PRODUCT, METHOD_ADD_STORE, METHOD_ADD_STORE_OWNER,
        METHOD_ADMIN, METHOD_ADMINS, METHOD_ADMIN_COUNT, METHOD_BALANCE_OF, METHOD_BUY_PRODUCT,
        METHOD_OWNER, METHOD_PRODUCT, METHOD_STORE, METHOD_STORES, METHOD_STORE_COUNT,
        METHOD_STORE_OWNER, METHOD_STORE_OWNERS, METHOD_STORE_OWNER_COUNT,
        METHOD_STORE_PRODUCTS, METHOD_WITHDRAW,
    },
    identifiers::{ProductId, StoreId},
    roles::Access,
};

/// Type signature and access requirements of a single entry point.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EntryPoint {
    name: String,
    args: Vec<Parameter>,
    ret: CLType,
    access: Access,
    payable: bool,
}

impl EntryPoint {
    /// Constructs a new non-payable entry point.
    pub fn new<T: Into<String>>(
        name: T,
        args: Vec<Parameter>,
        ret: CLType,
        access: Access,
    ) -> Self {
        EntryPoint {
            name: name.into(),
            args,
            ret,
            access,
            payable: false,
        }
    }

    /// Marks the entry point as accepting attached value.
    pub fn payable(mut self) -> Self {
        self.payable = true;
        self
    }

    /// Returns the name of the entry point.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared parameters.
    pub fn args(&self) -> &[Parameter] {
        &self.args
    }

    /// Returns the type of the returned value.
    pub fn ret(&self) -> &CLType {
        &self.ret
    }

    /// Returns the capability required from callers.
    pub fn access(&self) -> Access {
        self.access
    }

    /// Returns `true` if the entry point accepts attached value.
    pub fn is_payable(&self) -> bool {
        self.payable
    }

    /// Returns `true` if `name` is one of the declared parameters.
    pub fn declares_arg(&self, name: &str) -> bool {
        self.args.iter().any(|parameter| parameter.name() == name)
    }
}

/// Collection of entry points, keyed by name.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct EntryPoints(BTreeMap<String, EntryPoint>);

impl EntryPoints {
    /// Creates an empty collection.
    pub fn new() -> Self {
        EntryPoints::default()
    }

    /// Adds an entry point, replacing any previous one with the same name.
    pub fn add_entry_point(&mut self, entry_point: EntryPoint) {
        self.0.insert(entry_point.name().to_string(), entry_point);
    }

    /// Returns the entry point called `name`.
    pub fn get(&self, name: &str) -> Option<&EntryPoint> {
        self.0.get(name)
    }

    /// Iterates over all entry points in name order.
    pub fn iter(&self) -> impl Iterator<Item = &EntryPoint> {
        self.0.values()
    }
}

/// Returns entry points of the marketplace.
pub fn get_entry_points() -> EntryPoints {
    let mut entry_points = EntryPoints::new();

    let add_admin_entry_point = EntryPoint::new(
        METHOD_ADD_ADMIN,
        vec![Parameter::new(ARG_ACCOUNT, AccountHash::cl_type())],
        CLType::Unit,
        Access::Owner,
    );

    let add_store_owner_entry_point = EntryPoint::new(
        METHOD_ADD_STORE_OWNER,
        vec![Parameter::new(ARG_ACCOUNT, AccountHash::cl_type())],
        CLType::Unit,
        Access::Admin,
    );

    let add_store_entry_point = EntryPoint::new(
        METHOD_ADD_STORE,
        vec![
            Parameter::new(ARG_STORE_ID, StoreId::cl_type()),
            Parameter::new(ARG_NAME, String::cl_type()),
        ],
        CLType::Unit,
        Access::StoreOwner,
    );

    let add_product_entry_point = EntryPoint::new(
        METHOD_ADD_PRODUCT,
        vec![
            Parameter::new(ARG_STORE_ID, StoreId::cl_type()),
            Parameter::new(ARG_PRODUCT_ID, ProductId::cl_type()),
            Parameter::new(ARG_NAME, String::cl_type()),
            Parameter::new(ARG_QUANTITY, u64::cl_type()),
            Parameter::new(ARG_VALUE, U512::cl_type()),
        ],
        CLType::Unit,
        Access::StoreOwner,
    );

    let buy_product_entry_point = EntryPoint::new(
        METHOD_BUY_PRODUCT,
        vec![
            Parameter::new(ARG_PRODUCT_ID, ProductId::cl_type()),
            Parameter::new(ARG_QUANTITY, u64::cl_type()),
        ],
        CLType::Unit,
        Access::Public,
    )
    .payable();

    let withdraw_entry_point =
        EntryPoint::new(METHOD_WITHDRAW, Vec::new(), U512::cl_type(), Access::Public);

    let owner_entry_point = EntryPoint::new(
        METHOD_OWNER,
        Vec::new(),
        AccountHash::cl_type(),
        Access::Public,
    );

    let admin_entry_point = EntryPoint::new(
        METHOD_ADMIN,
        vec![Parameter::new(ARG_ACCOUNT, AccountHash::cl_type())],
        bool::cl_type(),
        Access::Public,
    );

    let admins_entry_point = EntryPoint::new(
        METHOD_ADMINS,
        vec![Parameter::new(ARG_INDEX, u64::cl_type())],
        AccountHash::cl_type(),
        Access::Public,
    );

    let admin_count_entry_point =
        EntryPoint::new(METHOD_ADMIN_COUNT, Vec::new(), u64::cl_type(), Access::Public);

    let store_owner_entry_point = EntryPoint::new(
        METHOD_STORE_OWNER,
        vec![Parameter::new(ARG_ACCOUNT, AccountHash::cl_type())],
        bool::cl_type(),
        Access::Public,
    );

    let store_owners_entry_point = EntryPoint::new(
        METHOD_STORE_OWNERS,
        vec![Parameter::new(ARG_INDEX, u64::cl_type())],
        AccountHash::cl_type(),
        Access::Public,
    );

    let store_owner_count_entry_point = EntryPoint::new(
        METHOD_STORE_OWNER_COUNT,
        Vec::new(),
        u64::cl_type(),
        Access::Public,
    );

    let stores_entry_point = EntryPoint::new(
        METHOD_STORES,
        vec![Parameter::new(ARG_INDEX, u64::cl_type())],
        StoreId::cl_type(),
        Access::Public,
    );

    let store_count_entry_point =
        EntryPoint::new(METHOD_STORE_COUNT, Vec::new(), u64::cl_type(), Access::Public);

    let store_entry_point = EntryPoint::new(
        METHOD_STORE,
        vec![Parameter::new(ARG_STORE_ID, StoreId::cl_type())],
        Store::cl_type(),
        Access::Public,
    );

    let store_products_entry_point = EntryPoint::new(
        METHOD_STORE_PRODUCTS,
        vec![Parameter::new(ARG_STORE_ID, StoreId::cl_type())],
        Vec::<ProductId>::cl_type(),
        Access::Public,
    );

    let product_entry_point = EntryPoint::new(
        METHOD_PRODUCT,
        vec![Parameter::new(ARG_PRODUCT_ID, ProductId::cl_type())],
        Product::cl_type(),
        Access::Public,
    );

    let balance_of_entry_point = EntryPoint::new(
        METHOD_BALANCE_OF,
        vec![Parameter::new(ARG_ACCOUNT, AccountHash::cl_type())],
        U512::cl_type(),
        Access::Public,
    );

    entry_points.add_entry_point(add_admin_entry_point);
    entry_points.add_entry_point(add_store_owner_entry_point);
    entry_points.add_entry_point(add_store_entry_point);
    entry_points.add_entry_point(add_product_entry_point);
    entry_points.add_entry_point(buy_product_entry_point);
    entry_points.add_entry_point(withdraw_entry_point);
    entry_points.add_entry_point(owner_entry_point);
    entry_points.add_entry_point(admin_entry_point);
    entry_points.add_entry_point(admins_entry_point);
    entry_points.add_entry_point(admin_count_entry_point);
    entry_points.add_entry_point(store_owner_entry_point);
    entry_points.add_entry_point(store_owners_entry_point);
    entry_points.add_entry_point(store_owner_count_entry_point);
    entry_points.add_entry_point(stores_entry_point);
    entry_points.add_entry_point(store_count_entry_point);
    entry_points.add_entry_point(store_entry_point);
    entry_points.add_entry_point(store_products_entry_point);
    entry_points.add_entry_point(product_entry_point);
    entry_points.add_entry_point(balance_of_entry_point);
    entry_points
}
