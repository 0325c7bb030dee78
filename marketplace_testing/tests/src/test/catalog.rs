use casper_marketplace::{
    constants::{
        ARG_INDEX, ARG_NAME, ARG_PRODUCT_ID, ARG_QUANTITY, ARG_STORE_ID, ARG_VALUE,
        METHOD_ADD_PRODUCT, METHOD_PRODUCT, METHOD_STORE, METHOD_STORES, METHOD_STORE_COUNT,
        METHOD_STORE_PRODUCTS,
    },
    Error, Product, ProductId, Store, StoreId,
};
use casper_marketplace_test_support::{
    CallRequest, CallRequestBuilder, DEFAULT_ADMIN_ADDR, DEFAULT_CUSTOMER_ADDR,
    DEFAULT_OWNER_ADDR, DEFAULT_STORE_OWNER_ADDR,
};
use casper_types::{account::AccountHash, runtime_args, RuntimeArgs, U512};

use super::fixture::{
    self, add_admin_request, add_store_owner_request, add_store_request, PRODUCT_ID,
    PRODUCT_NAME, PRODUCT_QUANTITY, PRODUCT_VALUE, STORE_ID, STORE_NAME,
};

const OTHER_STORE_OWNER_ADDR: AccountHash = DEFAULT_CUSTOMER_ADDR;
const OTHER_STORE_ID: StoreId = StoreId::new([21u8; 32]);
const OTHER_PRODUCT_ID: ProductId = ProductId::new([22u8; 32]);

fn add_product_request(
    sender: AccountHash,
    store_id: StoreId,
    product_id: ProductId,
) -> CallRequest {
    CallRequestBuilder::contract_call(
        sender,
        METHOD_ADD_PRODUCT,
        runtime_args! {
            ARG_STORE_ID => store_id,
            ARG_PRODUCT_ID => product_id,
            ARG_NAME => "gadget",
            ARG_QUANTITY => 3u64,
            ARG_VALUE => U512::from(7),
        },
    )
    .build()
}

#[test]
fn should_add_store() {
    let builder = fixture::setup_stocked();

    let first_store: StoreId = builder
        .query(METHOD_STORES, runtime_args! { ARG_INDEX => 0u64 })
        .expect("should query first store");
    assert_eq!(first_store, STORE_ID);

    let store_count: u64 = builder
        .query(METHOD_STORE_COUNT, RuntimeArgs::new())
        .expect("should query store count");
    assert_eq!(store_count, 1);

    let store: Store = builder
        .query(METHOD_STORE, runtime_args! { ARG_STORE_ID => STORE_ID })
        .expect("should query store");
    assert_eq!(store.id(), STORE_ID);
    assert_eq!(store.name(), STORE_NAME);
    assert_eq!(store.owner(), DEFAULT_STORE_OWNER_ADDR);
}

#[test]
fn should_add_product() {
    let builder = fixture::setup_stocked();

    let product: Product = builder
        .query(METHOD_PRODUCT, runtime_args! { ARG_PRODUCT_ID => PRODUCT_ID })
        .expect("should query product");
    assert_eq!(product.id(), PRODUCT_ID);
    assert_eq!(product.store_id(), STORE_ID);
    assert_eq!(product.name(), PRODUCT_NAME);
    assert_eq!(product.quantity(), PRODUCT_QUANTITY);
    assert_eq!(product.value(), U512::from(PRODUCT_VALUE));

    let store_products: Vec<ProductId> = builder
        .query(
            METHOD_STORE_PRODUCTS,
            runtime_args! { ARG_STORE_ID => STORE_ID },
        )
        .expect("should query store products");
    assert_eq!(store_products, vec![PRODUCT_ID]);
}

#[test]
fn should_not_add_store_if_not_store_owner() {
    let mut builder = fixture::setup_stocked();
    for sender in [DEFAULT_OWNER_ADDR, DEFAULT_ADMIN_ADDR, DEFAULT_CUSTOMER_ADDR] {
        builder
            .exec(add_store_request(sender, OTHER_STORE_ID, "other-store"))
            .expect_failure();
        assert_eq!(builder.get_revert(), Some(Error::NotStoreOwner));
    }
    assert_eq!(builder.get_marketplace().store_count(), 1);
}

#[test]
fn should_not_add_product_if_not_store_owner() {
    let mut builder = fixture::setup_stocked();
    for sender in [DEFAULT_OWNER_ADDR, DEFAULT_ADMIN_ADDR, DEFAULT_CUSTOMER_ADDR] {
        builder
            .exec(add_product_request(sender, STORE_ID, OTHER_PRODUCT_ID))
            .expect_failure();
        assert_eq!(builder.get_revert(), Some(Error::NotStoreOwner));
    }
    assert!(builder.get_product(OTHER_PRODUCT_ID).is_none());
    assert_eq!(builder.get_marketplace().store_products(&STORE_ID), &[PRODUCT_ID]);
}

#[test]
fn should_not_add_existing_store_id() {
    let mut builder = fixture::setup_stocked();
    builder
        .exec(add_store_request(
            DEFAULT_STORE_OWNER_ADDR,
            STORE_ID,
            "renamed-store",
        ))
        .expect_failure();
    assert_eq!(builder.get_revert(), Some(Error::DuplicateStore));

    let store = builder.get_store(STORE_ID).expect("should have store");
    assert_eq!(store.name(), STORE_NAME);
    assert_eq!(builder.get_marketplace().store_count(), 1);
}

#[test]
fn should_not_add_existing_product_id() {
    let mut builder = fixture::setup_stocked();
    builder
        .exec(add_product_request(
            DEFAULT_STORE_OWNER_ADDR,
            STORE_ID,
            PRODUCT_ID,
        ))
        .expect_failure();
    assert_eq!(builder.get_revert(), Some(Error::DuplicateProduct));
    assert_eq!(fixture::product_quantity(&builder), PRODUCT_QUANTITY);
    assert_eq!(builder.get_marketplace().store_products(&STORE_ID).len(), 1);
}

#[test]
fn should_not_add_product_to_unknown_store() {
    let mut builder = fixture::setup_stocked();
    builder
        .exec(add_product_request(
            DEFAULT_STORE_OWNER_ADDR,
            OTHER_STORE_ID,
            OTHER_PRODUCT_ID,
        ))
        .expect_failure();
    assert_eq!(builder.get_revert(), Some(Error::UnknownStore));
    assert!(builder.get_product(OTHER_PRODUCT_ID).is_none());
}

#[test]
fn should_not_add_product_to_store_of_another_owner() {
    let mut builder = fixture::setup_stocked();
    builder
        .exec(add_store_owner_request(
            DEFAULT_ADMIN_ADDR,
            OTHER_STORE_OWNER_ADDR,
        ))
        .expect_success()
        .commit();

    builder
        .exec(add_product_request(
            OTHER_STORE_OWNER_ADDR,
            STORE_ID,
            OTHER_PRODUCT_ID,
        ))
        .expect_failure();
    assert_eq!(builder.get_revert(), Some(Error::NotOwnerOfStore));

    builder
        .exec(add_store_request(
            OTHER_STORE_OWNER_ADDR,
            OTHER_STORE_ID,
            "other-store",
        ))
        .expect_success()
        .commit();
    builder
        .exec(add_product_request(
            OTHER_STORE_OWNER_ADDR,
            OTHER_STORE_ID,
            OTHER_PRODUCT_ID,
        ))
        .expect_success()
        .commit();

    let marketplace = builder.get_marketplace();
    assert_eq!(marketplace.stores(1), Some(OTHER_STORE_ID));
    assert_eq!(marketplace.store_products(&OTHER_STORE_ID), &[OTHER_PRODUCT_ID]);
    assert_eq!(marketplace.store_products(&STORE_ID), &[PRODUCT_ID]);
}

#[test]
fn should_reject_invalid_store_names() {
    let mut builder = fixture::setup_stocked();
    let too_long = "s".repeat(65);
    for name in ["", too_long.as_str()] {
        builder
            .exec(add_store_request(
                DEFAULT_STORE_OWNER_ADDR,
                OTHER_STORE_ID,
                name,
            ))
            .expect_failure();
        assert_eq!(builder.get_revert(), Some(Error::InvalidName));
    }

    let longest = "s".repeat(64);
    builder
        .exec(add_store_request(
            DEFAULT_STORE_OWNER_ADDR,
            OTHER_STORE_ID,
            &longest,
        ))
        .expect_success();
}

#[test]
fn should_revert_when_reading_unknown_records() {
    let mut builder = fixture::setup_stocked();
    let request = CallRequestBuilder::contract_call(
        DEFAULT_CUSTOMER_ADDR,
        METHOD_PRODUCT,
        runtime_args! { ARG_PRODUCT_ID => OTHER_PRODUCT_ID },
    )
    .build();
    builder.exec(request).expect_failure();
    assert_eq!(builder.get_revert(), Some(Error::UnknownProduct));

    let request = CallRequestBuilder::contract_call(
        DEFAULT_CUSTOMER_ADDR,
        METHOD_STORE,
        runtime_args! { ARG_STORE_ID => OTHER_STORE_ID },
    )
    .build();
    builder.exec(request).expect_failure();
    assert_eq!(builder.get_revert(), Some(Error::UnknownStore));

    let store_products: Vec<ProductId> = builder
        .query(
            METHOD_STORE_PRODUCTS,
            runtime_args! { ARG_STORE_ID => OTHER_STORE_ID },
        )
        .expect("should query store products");
    assert!(store_products.is_empty());
}

#[test]
fn granting_admin_should_not_grant_store_ownership() {
    let mut builder = fixture::setup();
    builder
        .exec(add_admin_request(DEFAULT_OWNER_ADDR, DEFAULT_ADMIN_ADDR))
        .expect_success()
        .commit();
    builder
        .exec(add_store_request(DEFAULT_ADMIN_ADDR, STORE_ID, STORE_NAME))
        .expect_failure();
    assert_eq!(builder.get_revert(), Some(Error::NotStoreOwner));
}
