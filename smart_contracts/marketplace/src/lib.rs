//! A marketplace registry in the shape of a Casper contract.
//!
//! The marketplace has a single owner who grants admin rights.  Admins grant store-owner rights,
//! store owners open stores and stock them with products, and anyone can buy products by attaching
//! value to a call.  Every rejected call leaves the registry unchanged and is reported as an
//! [`Error`], which converts into [`casper_types::ApiError::User`].
//!
//! Calls can be made through typed methods on [`Marketplace`] or by entry point name with
//! [`casper_types::RuntimeArgs`] through [`Marketplace::call`].

#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod constants;
pub mod entry_points;
pub mod error;
pub mod event;
pub mod identifiers;
mod marketplace;
pub mod ordered_set;
pub mod payment;
pub mod roles;
pub mod runtime;

pub use catalog::{Product, Store};
pub use config::{ConfigError, MarketplaceConfig};
pub use entry_points::{get_entry_points, EntryPoint, EntryPoints};
pub use error::Error;
pub use event::MarketplaceEvent;
pub use identifiers::{ProductId, StoreId};
pub use marketplace::Marketplace;
pub use payment::PaymentPolicy;
pub use roles::Access;
pub use runtime::CallContext;
