//! A library to support testing of the marketplace registry.
//!
//! Calls are described by [`CallRequest`]s and run by a [`MarketplaceTestBuilder`], which tracks
//! the balances of a set of funded accounts alongside the registry:
//! ```
//! use casper_marketplace::constants::{ARG_ACCOUNT, METHOD_ADD_ADMIN};
//! use casper_marketplace_test_support::{
//!     CallRequestBuilder, MarketplaceTestBuilder, DEFAULT_ADMIN_ADDR, DEFAULT_OWNER_ADDR,
//! };
//! use casper_types::{runtime_args, RuntimeArgs};
//!
//! let mut builder = MarketplaceTestBuilder::default();
//! builder.deploy(DEFAULT_OWNER_ADDR);
//!
//! let request = CallRequestBuilder::contract_call(
//!     DEFAULT_OWNER_ADDR,
//!     METHOD_ADD_ADMIN,
//!     runtime_args! { ARG_ACCOUNT => DEFAULT_ADMIN_ADDR },
//! )
//! .build();
//! builder.exec(request).expect_success().commit();
//!
//! assert!(builder.get_marketplace().is_admin(&DEFAULT_ADMIN_ADDR));
//! ```
#![warn(missing_docs)]

mod call_request_builder;
mod error;
mod execution_result;
mod genesis_account;
pub mod logging;
mod marketplace_test_builder;

use std::path::PathBuf;

use casper_types::{account::AccountHash, U512};
use once_cell::sync::Lazy;

pub use call_request_builder::{CallRequest, CallRequestBuilder};
pub use error::{Error, Result};
pub use execution_result::{ExecError, ExecutionResult};
pub use genesis_account::GenesisAccount;
pub use marketplace_test_builder::MarketplaceTestBuilder;

/// Default owner of a deployed marketplace.
pub const DEFAULT_OWNER_ADDR: AccountHash = AccountHash::new([1u8; 32]);
/// Default admin account.
pub const DEFAULT_ADMIN_ADDR: AccountHash = AccountHash::new([2u8; 32]);
/// Default store owner account.
pub const DEFAULT_STORE_OWNER_ADDR: AccountHash = AccountHash::new([3u8; 32]);
/// Default customer account.
pub const DEFAULT_CUSTOMER_ADDR: AccountHash = AccountHash::new([4u8; 32]);

/// Default initial balance of a test account.
pub const DEFAULT_ACCOUNT_INITIAL_BALANCE: u64 = 100_000_000_000;

/// Accounts funded on deployment unless overridden.
pub static DEFAULT_ACCOUNTS: Lazy<Vec<GenesisAccount>> = Lazy::new(|| {
    [
        DEFAULT_OWNER_ADDR,
        DEFAULT_ADMIN_ADDR,
        DEFAULT_STORE_OWNER_ADDR,
        DEFAULT_CUSTOMER_ADDR,
    ]
    .into_iter()
    .map(|account_hash| {
        GenesisAccount::new(account_hash, U512::from(DEFAULT_ACCOUNT_INITIAL_BALANCE))
    })
    .collect()
});

/// Path to the marketplace config used for local testing.
pub static LOCAL_CONFIG_PATH: Lazy<PathBuf> = Lazy::new(|| {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../resources/local")
        .join(casper_marketplace::config::CONFIG_NAME)
});
