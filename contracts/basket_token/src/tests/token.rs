use pretty_assertions::assert_eq;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

use super::setup::{setup_two_asset_basket, EXPIRATION_LEDGER};

#[test]
fn transfer_moves_basket_tokens() {
    let env = Env::default();
    env.mock_all_auths();

    let fixture = setup_two_asset_basket(&env);
    let recipient = Address::generate(&env);

    fixture.basket.create(&fixture.buyer, &100);
    fixture.basket.transfer(&fixture.buyer, &recipient, &40);

    assert_eq!(fixture.basket.balance(&fixture.buyer), 60);
    assert_eq!(fixture.basket.balance(&recipient), 40);
    assert_eq!(fixture.basket.query_total_supply(), 100);
}

#[test]
fn transfer_from_respects_the_allowance() {
    let env = Env::default();
    env.mock_all_auths();

    let fixture = setup_two_asset_basket(&env);
    let spender = Address::generate(&env);
    let recipient = Address::generate(&env);

    fixture.basket.create(&fixture.buyer, &100);
    fixture
        .basket
        .approve(&fixture.buyer, &spender, &30, &EXPIRATION_LEDGER);
    assert_eq!(fixture.basket.allowance(&fixture.buyer, &spender), 30);

    fixture
        .basket
        .transfer_from(&spender, &fixture.buyer, &recipient, &30);

    assert_eq!(fixture.basket.balance(&recipient), 30);
    assert_eq!(fixture.basket.allowance(&fixture.buyer, &spender), 0);

    // Allowance is spent, the next pull must fail.
    assert!(fixture
        .basket
        .try_transfer_from(&spender, &fixture.buyer, &recipient, &1)
        .is_err());
}

#[test]
fn burn_reduces_supply_and_frees_collateral() {
    let env = Env::default();
    env.mock_all_auths();

    let fixture = setup_two_asset_basket(&env);

    fixture.basket.create(&fixture.buyer, &100);
    fixture.basket.burn(&fixture.buyer, &40);

    assert_eq!(fixture.basket.balance(&fixture.buyer), 60);
    assert_eq!(fixture.basket.query_total_supply(), 60);

    // 60 outstanding units still need 30 of token A; the remaining 20 the
    // burner walked away from is excess.
    fixture
        .basket
        .withdraw_excess_token(&fixture.admin, &fixture.token_a.address);
    assert_eq!(fixture.token_a.balance(&fixture.admin), 20);
    assert_eq!(fixture.token_a.balance(&fixture.basket.address), 30);
}

#[test]
#[should_panic(expected = "negative amount is not allowed")]
fn transfer_rejects_negative_amount() {
    let env = Env::default();
    env.mock_all_auths();

    let fixture = setup_two_asset_basket(&env);
    let recipient = Address::generate(&env);

    fixture.basket.create(&fixture.buyer, &100);
    fixture.basket.transfer(&fixture.buyer, &recipient, &-1);
}

#[test]
#[should_panic(expected = "Error(Contract, #6)")]
fn transfer_fails_without_balance() {
    let env = Env::default();
    env.mock_all_auths();

    let fixture = setup_two_asset_basket(&env);
    let recipient = Address::generate(&env);

    fixture.basket.transfer(&fixture.buyer, &recipient, &10);
}
