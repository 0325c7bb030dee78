use casper_marketplace::{Error, MarketplaceConfig, PaymentPolicy};
use casper_marketplace_test_support::{
    MarketplaceTestBuilder, DEFAULT_ACCOUNT_INITIAL_BALANCE, DEFAULT_CUSTOMER_ADDR,
    DEFAULT_STORE_OWNER_ADDR,
};
use casper_types::U512;

use super::fixture::{self, buy_product_request, PRODUCT_ID, PRODUCT_QUANTITY, PRODUCT_VALUE};

fn setup_with_policy(policy: PaymentPolicy) -> MarketplaceTestBuilder {
    fixture::setup_stocked_with_config(MarketplaceConfig::default().with_payment_policy(policy))
}

#[test]
fn exact_policy_should_only_accept_exact_price() {
    let mut builder = setup_with_policy(PaymentPolicy::Exact);

    for attached in [PRODUCT_VALUE * 2 - 1, PRODUCT_VALUE * 2 + 1] {
        builder
            .exec(buy_product_request(
                DEFAULT_CUSTOMER_ADDR,
                PRODUCT_ID,
                2,
                attached,
            ))
            .expect_failure();
        assert_eq!(builder.get_revert(), Some(Error::IncorrectPayment));
    }

    builder
        .exec(buy_product_request(
            DEFAULT_CUSTOMER_ADDR,
            PRODUCT_ID,
            2,
            PRODUCT_VALUE * 2,
        ))
        .expect_success()
        .commit();
    assert_eq!(fixture::product_quantity(&builder), PRODUCT_QUANTITY - 2);
    assert_eq!(
        builder.get_marketplace().balance_of(&DEFAULT_STORE_OWNER_ADDR),
        U512::from(PRODUCT_VALUE * 2)
    );
}

#[test]
fn at_least_policy_should_credit_excess_to_buyer() {
    let mut builder = setup_with_policy(PaymentPolicy::AtLeast);
    builder
        .exec(buy_product_request(
            DEFAULT_CUSTOMER_ADDR,
            PRODUCT_ID,
            1,
            PRODUCT_VALUE * 3,
        ))
        .expect_success()
        .commit();

    let marketplace = builder.get_marketplace();
    assert_eq!(
        marketplace.balance_of(&DEFAULT_STORE_OWNER_ADDR),
        U512::from(PRODUCT_VALUE)
    );
    assert_eq!(
        marketplace.balance_of(&DEFAULT_CUSTOMER_ADDR),
        U512::from(PRODUCT_VALUE * 2)
    );
}

#[test]
fn ignore_policy_should_accept_any_payment() {
    let mut builder = setup_with_policy(PaymentPolicy::Ignore);

    builder
        .exec(buy_product_request(DEFAULT_CUSTOMER_ADDR, PRODUCT_ID, 1, 1u64))
        .expect_success()
        .commit();
    builder
        .exec(buy_product_request(DEFAULT_CUSTOMER_ADDR, PRODUCT_ID, 1, 0u64))
        .expect_success()
        .commit();

    assert_eq!(fixture::product_quantity(&builder), PRODUCT_QUANTITY - 2);
    assert_eq!(
        builder.get_marketplace().balance_of(&DEFAULT_STORE_OWNER_ADDR),
        U512::one()
    );
    assert!(builder
        .get_marketplace()
        .balance_of(&DEFAULT_CUSTOMER_ADDR)
        .is_zero());
    assert_eq!(
        builder.get_account_balance(DEFAULT_CUSTOMER_ADDR),
        Some(U512::from(DEFAULT_ACCOUNT_INITIAL_BALANCE - 1))
    );
}
