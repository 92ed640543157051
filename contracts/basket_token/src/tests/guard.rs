use pretty_assertions::assert_eq;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

use super::setup::setup_two_asset_basket;

#[test]
fn pause_blocks_creation_until_unpause() {
    let env = Env::default();
    env.mock_all_auths();

    let fixture = setup_two_asset_basket(&env);

    fixture.basket.pause(&fixture.admin);
    assert!(fixture.basket.query_is_paused());
    assert!(fixture.basket.try_create(&fixture.buyer, &100).is_err());
    assert_eq!(fixture.basket.query_total_supply(), 0);

    fixture.basket.unpause(&fixture.admin);
    assert!(!fixture.basket.query_is_paused());

    fixture.basket.create(&fixture.buyer, &100);
    assert_eq!(fixture.basket.balance(&fixture.buyer), 100);
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")]
fn pause_requires_owner() {
    let env = Env::default();
    env.mock_all_auths();

    let fixture = setup_two_asset_basket(&env);
    fixture.basket.pause(&fixture.buyer);
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")]
fn unpause_requires_owner() {
    let env = Env::default();
    env.mock_all_auths();

    let fixture = setup_two_asset_basket(&env);
    fixture.basket.pause(&fixture.admin);
    fixture.basket.unpause(&fixture.buyer);
}

#[test]
#[should_panic(expected = "Error(Contract, #4)")]
fn pause_fails_when_already_paused() {
    let env = Env::default();
    env.mock_all_auths();

    let fixture = setup_two_asset_basket(&env);
    fixture.basket.pause(&fixture.admin);
    fixture.basket.pause(&fixture.admin);
}

#[test]
#[should_panic(expected = "Error(Contract, #5)")]
fn unpause_fails_when_not_paused() {
    let env = Env::default();
    env.mock_all_auths();

    let fixture = setup_two_asset_basket(&env);
    fixture.basket.unpause(&fixture.admin);
}

#[test]
fn set_admin_hands_over_control() {
    let env = Env::default();
    env.mock_all_auths();

    let fixture = setup_two_asset_basket(&env);
    let new_admin = Address::generate(&env);

    fixture.basket.set_admin(&fixture.admin, &new_admin);
    assert_eq!(fixture.basket.query_admin(), new_admin);

    // The previous owner has no privileges left.
    assert!(fixture.basket.try_pause(&fixture.admin).is_err());

    fixture.basket.pause(&new_admin);
    assert!(fixture.basket.query_is_paused());
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")]
fn set_admin_requires_owner() {
    let env = Env::default();
    env.mock_all_auths();

    let fixture = setup_two_asset_basket(&env);
    let new_admin = Address::generate(&env);

    fixture.basket.set_admin(&fixture.buyer, &new_admin);
}
