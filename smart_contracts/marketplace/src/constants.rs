//! Names of the entry points and their named arguments.

/// Name of the `add_admin` entry point.
pub const METHOD_ADD_ADMIN: &str = "add_admin";
/// Name of the `add_store_owner` entry point.
pub const METHOD_ADD_STORE_OWNER: &str = "add_store_owner";
/// Name of the `add_store` entry point.
pub const METHOD_ADD_STORE: &str = "add_store";
/// Name of the `add_product` entry point.
pub const METHOD_ADD_PRODUCT: &str = "add_product";
/// Name of the `buy_product` entry point.
pub const METHOD_BUY_PRODUCT: &str = "buy_product";
/// Name of the `withdraw` entry point.
pub const METHOD_WITHDRAW: &str = "withdraw";

/// Name of the `owner` entry point.
pub const METHOD_OWNER: &str = "owner";
/// Name of the `admin` entry point.
pub const METHOD_ADMIN: &str = "admin";
/// Name of the `admins` entry point.
pub const METHOD_ADMINS: &str = "admins";
/// Name of the `admin_count` entry point.
pub const METHOD_ADMIN_COUNT: &str = "admin_count";
/// Name of the `store_owner` entry point.
pub const METHOD_STORE_OWNER: &str = "store_owner";
/// Name of the `store_owners` entry point.
pub const METHOD_STORE_OWNERS: &str = "store_owners";
/// Name of the `store_owner_count` entry point.
pub const METHOD_STORE_OWNER_COUNT: &str = "store_owner_count";
/// Name of the `stores` entry point.
pub const METHOD_STORES: &str = "stores";
/// Name of the `store_count` entry point.
pub const METHOD_STORE_COUNT: &str = "store_count";
/// Name of the `store` entry point.
pub const METHOD_STORE: &str = "store";
/// Name of the `store_products` entry point.
pub const METHOD_STORE_PRODUCTS: &str = "store_products";
/// Name of the `product` entry point.
pub const METHOD_PRODUCT: &str = "product";
/// Name of the `balance_of` entry point.
pub const METHOD_BALANCE_OF: &str = "balance_of";

/// Name of the `account` named argument.
pub const ARG_ACCOUNT: &str = "account";
/// Name of the `index` named argument.
pub const ARG_INDEX: &str = "index";
/// Name of the `store_id` named argument.
pub const ARG_STORE_ID: &str = "store_id";
/// Name of the `product_id` named argument.
pub const ARG_PRODUCT_ID: &str = "product_id";
/// Name of the `name` named argument.
pub const ARG_NAME: &str = "name";
/// Name of the `quantity` named argument.
pub const ARG_QUANTITY: &str = "quantity";
/// Name of the `value` named argument.
pub const ARG_VALUE: &str = "value";
