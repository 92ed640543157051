use basket::constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, MAX_BASKET_ASSETS};
use basket::error::ErrorCode;
use basket::math::safe_math::SafeMath;
use basket::validate_int_parameters;
use soroban_sdk::token::{self, Interface as _};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, Address, Env, String, Vec,
};
use soroban_token_sdk::metadata::TokenMetadata;
use soroban_token_sdk::TokenUtils;

use crate::admin::{read_administrator, write_administrator};
use crate::allowance::{read_allowance, spend_allowance, write_allowance};
use crate::balance::{read_balance, receive_balance, spend_balance};
use crate::basket_token::BasketTokenTrait;
use crate::events::BasketTokenEvents;
use crate::metadata::{read_decimal, read_name, read_symbol, write_metadata};
use crate::storage::{
    amount_owed, get_config, is_paused, per_asset_amount, read_total_supply, save_config,
    write_paused, write_total_supply, BasketAsset, Config,
};

/// Privileged operations take the caller identity explicitly and check it
/// against the stored owner exactly once.
fn verify_owner(env: &Env, sender: &Address) {
    sender.require_auth();

    let admin = read_administrator(env);
    if admin != *sender {
        log!(env, "Basket Token: You are not authorized!");
        panic_with_error!(env, ErrorCode::NotAuthorized);
    }
}

/// Creation and redemption amounts must be positive exact multiples of the
/// creation unit. Non divisible amounts are rejected, never rounded.
fn validate_quantity(env: &Env, amount: i128, creation_unit: i128) {
    if amount < 1 || amount % creation_unit != 0 {
        log!(
            env,
            "Basket Token: amount must be a positive multiple of the creation unit"
        );
        panic_with_error!(env, ErrorCode::InvalidQuantity);
    }
}

fn increase_total_supply(env: &Env, amount: i128) {
    let total_supply = match read_total_supply(env).safe_add(amount, env) {
        Ok(result) => result,
        Err(err) => panic_with_error!(env, err),
    };
    write_total_supply(env, total_supply);
}

fn reduce_total_supply(env: &Env, amount: i128) {
    let total_supply = match read_total_supply(env).safe_sub(amount, env) {
        Ok(result) => result,
        Err(err) => panic_with_error!(env, err),
    };
    write_total_supply(env, total_supply);
}

contractmeta!(
    key = "Description",
    val = "Token fully collateralized by a fixed weight bundle of other tokens"
);

#[contract]
pub struct BasketToken;

#[contractimpl]
impl BasketToken {
    #[allow(clippy::too_many_arguments)]
    pub fn __constructor(
        env: Env,
        admin: Address,
        assets: Vec<BasketAsset>,
        creation_unit: i128,
        native_token: Address,
        decimal: u32,
        name: String,
        symbol: String,
    ) {
        if assets.is_empty() {
            log!(&env, "Basket Token: Constructor: no underlying assets");
            panic_with_error!(&env, ErrorCode::InvalidConfiguration);
        }
        if assets.len() > MAX_BASKET_ASSETS {
            log!(&env, "Basket Token: Constructor: too many underlying assets");
            panic_with_error!(&env, ErrorCode::InvalidConfiguration);
        }
        if creation_unit < 1 {
            log!(&env, "Basket Token: Constructor: creation unit must be positive");
            panic_with_error!(&env, ErrorCode::InvalidConfiguration);
        }
        for asset in assets.iter() {
            if asset.weight < 1 {
                log!(&env, "Basket Token: Constructor: asset weights must be positive");
                panic_with_error!(&env, ErrorCode::InvalidConfiguration);
            }
        }
        if decimal > 18 {
            panic!("Decimal must not be greater than 18");
        }

        write_administrator(&env, &admin);
        write_metadata(
            &env,
            TokenMetadata {
                decimal,
                name: name.clone(),
                symbol: symbol.clone(),
            },
        );
        save_config(
            &env,
            &Config {
                assets,
                creation_unit,
                native_token,
            },
        );
        write_total_supply(&env, 0);

        BasketTokenEvents::initialize(&env, admin, name, symbol);
    }
}

#[contractimpl]
impl BasketTokenTrait for BasketToken {
    fn create(env: Env, sender: Address, amount: i128) {
        sender.require_auth();

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if is_paused(&env) {
            log!(&env, "Basket Token: Create: creation is paused");
            panic_with_error!(&env, ErrorCode::OperationPaused);
        }

        let config = get_config(&env);
        validate_quantity(&env, amount, config.creation_unit);

        // Pull every underlying in asset order. A failing pull (balance or
        // allowance shortfall in the asset contract) aborts the invocation
        // and the host rolls back the pulls already made.
        let contract_address = env.current_contract_address();
        for asset in config.assets.iter() {
            let asset_amount =
                per_asset_amount(&env, asset.weight, amount, config.creation_unit);
            token::Client::new(&env, &asset.address).transfer_from(
                &contract_address,
                &sender,
                &contract_address,
                &asset_amount,
            );
        }

        receive_balance(&env, sender.clone(), amount);
        increase_total_supply(&env, amount);

        TokenUtils::new(&env)
            .events()
            .mint(contract_address, sender.clone(), amount);
        BasketTokenEvents::create(&env, sender, amount);
    }

    fn redeem(env: Env, sender: Address, amount: i128, skip_assets: Vec<Address>) {
        sender.require_auth();

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        validate_quantity(&env, amount, config.creation_unit);

        if amount > read_total_supply(&env) {
            log!(&env, "Basket Token: Redeem: amount exceeds total supply");
            panic_with_error!(&env, ErrorCode::InvalidQuantity);
        }

        // Burn before any asset leaves so supply accounting is already
        // settled when the payouts run.
        spend_balance(&env, sender.clone(), amount);
        reduce_total_supply(&env, amount);
        TokenUtils::new(&env).events().burn(sender.clone(), amount);

        let contract_address = env.current_contract_address();
        for asset in config.assets.iter() {
            if skip_assets.contains(&asset.address) {
                continue;
            }
            let asset_amount =
                per_asset_amount(&env, asset.weight, amount, config.creation_unit);
            token::Client::new(&env, &asset.address).transfer(
                &contract_address,
                &sender,
                &asset_amount,
            );
        }

        BasketTokenEvents::redeem(&env, sender, amount, skip_assets);
    }

    fn pause(env: Env, sender: Address) {
        verify_owner(&env, &sender);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if is_paused(&env) {
            log!(&env, "Basket Token: Pause: creation is already paused");
            panic_with_error!(&env, ErrorCode::OperationPaused);
        }
        write_paused(&env, true);

        BasketTokenEvents::pause(&env, sender);
    }

    fn unpause(env: Env, sender: Address) {
        verify_owner(&env, &sender);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if !is_paused(&env) {
            log!(&env, "Basket Token: Unpause: creation is not paused");
            panic_with_error!(&env, ErrorCode::OperationNotPaused);
        }
        write_paused(&env, false);

        BasketTokenEvents::unpause(&env, sender);
    }

    fn set_admin(env: Env, sender: Address, new_admin: Address) {
        verify_owner(&env, &sender);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        write_administrator(&env, &new_admin);
        TokenUtils::new(&env).events().set_admin(sender, new_admin);
    }

    fn withdraw_excess_token(env: Env, sender: Address, token: Address) {
        verify_owner(&env, &sender);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let client = token::Client::new(&env, &token);
        let contract_address = env.current_contract_address();

        let balance = client.balance(&contract_address);
        let owed = amount_owed(&env, &config, &token);
        if balance < owed {
            // Collateral shortfall. Withdrawing here would dip into what
            // holders are owed, so refuse outright.
            log!(&env, "Basket Token: Withdraw: balance is below the owed amount");
            panic_with_error!(&env, ErrorCode::MathError);
        }
        let excess = balance - owed;

        client.transfer(&contract_address, &sender, &excess);

        BasketTokenEvents::withdraw_excess(&env, token, excess);
    }

    fn withdraw_native(env: Env, sender: Address) {
        verify_owner(&env, &sender);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let client = token::Client::new(&env, &config.native_token);
        let contract_address = env.current_contract_address();

        let balance = client.balance(&contract_address);
        client.transfer(&contract_address, &sender, &balance);

        BasketTokenEvents::withdraw_native(&env, sender, balance);
    }

    fn query_config(env: Env) -> Config {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_config(&env)
    }

    fn query_admin(env: Env) -> Address {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        read_administrator(&env)
    }

    fn query_is_paused(env: Env) -> bool {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        is_paused(&env)
    }

    fn query_total_supply(env: Env) -> i128 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        read_total_supply(&env)
    }
}

#[contractimpl]
impl token::Interface for BasketToken {
    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        read_allowance(&env, from, spender).amount
    }

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();

        validate_int_parameters!(amount);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        write_allowance(&env, from.clone(), spender.clone(), amount, expiration_ledger);
        TokenUtils::new(&env)
            .events()
            .approve(from, spender, amount, expiration_ledger);
    }

    fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        read_balance(&env, id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        validate_int_parameters!(amount);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        spend_balance(&env, from.clone(), amount);
        receive_balance(&env, to.clone(), amount);
        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();

        validate_int_parameters!(amount);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        spend_allowance(&env, from.clone(), spender, amount);
        spend_balance(&env, from.clone(), amount);
        receive_balance(&env, to.clone(), amount);
        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn burn(env: Env, from: Address, amount: i128) {
        from.require_auth();

        validate_int_parameters!(amount);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        spend_balance(&env, from.clone(), amount);
        reduce_total_supply(&env, amount);
        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();

        validate_int_parameters!(amount);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        spend_allowance(&env, from.clone(), spender, amount);
        spend_balance(&env, from.clone(), amount);
        reduce_total_supply(&env, amount);
        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn decimals(env: Env) -> u32 {
        read_decimal(&env)
    }

    fn name(env: Env) -> String {
        read_name(&env)
    }

    fn symbol(env: Env) -> String {
        read_symbol(&env)
    }
}
