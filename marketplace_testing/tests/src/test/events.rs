use casper_marketplace::MarketplaceEvent;
use casper_marketplace_test_support::{
    DEFAULT_ADMIN_ADDR, DEFAULT_CUSTOMER_ADDR, DEFAULT_OWNER_ADDR, DEFAULT_STORE_OWNER_ADDR,
};
use casper_types::U512;

use super::fixture::{
    self, add_admin_request, buy_product_request, PRODUCT_ID, PRODUCT_QUANTITY, PRODUCT_VALUE,
    STORE_ID,
};

#[test]
fn should_log_accepted_mutations_in_order() {
    let builder = fixture::setup_stocked();
    assert_eq!(
        builder.get_marketplace().events(),
        &[
            MarketplaceEvent::AdminAdded {
                account: DEFAULT_ADMIN_ADDR,
            },
            MarketplaceEvent::StoreOwnerAdded {
                account: DEFAULT_STORE_OWNER_ADDR,
                admin: DEFAULT_ADMIN_ADDR,
            },
            MarketplaceEvent::StoreAdded {
                store_id: STORE_ID,
                owner: DEFAULT_STORE_OWNER_ADDR,
            },
            MarketplaceEvent::ProductAdded {
                store_id: STORE_ID,
                product_id: PRODUCT_ID,
                quantity: PRODUCT_QUANTITY,
                value: U512::from(PRODUCT_VALUE),
            },
        ]
    );
}

#[test]
fn should_emit_purchase_event() {
    let mut builder = fixture::setup_stocked();
    builder
        .exec(buy_product_request(
            DEFAULT_CUSTOMER_ADDR,
            PRODUCT_ID,
            2,
            PRODUCT_VALUE * 2 + 1,
        ))
        .expect_success();
    assert_eq!(
        builder.get_last_events(),
        &[MarketplaceEvent::ProductPurchased {
            product_id: PRODUCT_ID,
            buyer: DEFAULT_CUSTOMER_ADDR,
            quantity: 2,
            paid: U512::from(PRODUCT_VALUE * 2 + 1),
        }]
    );
}

#[test]
fn rejected_call_should_not_emit_events() {
    let mut builder = fixture::setup();
    builder
        .exec(add_admin_request(DEFAULT_CUSTOMER_ADDR, DEFAULT_ADMIN_ADDR))
        .expect_failure()
        .commit();
    assert!(builder.get_last_events().is_empty());
    assert!(builder.get_marketplace().events().is_empty());

    builder
        .exec(add_admin_request(DEFAULT_OWNER_ADDR, DEFAULT_ADMIN_ADDR))
        .expect_success()
        .commit();
    assert_eq!(builder.get_marketplace().events().len(), 1);
}
