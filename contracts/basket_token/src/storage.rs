use basket::constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use basket::math::safe_math::SafeMath;
use soroban_sdk::{contracttype, panic_with_error, Address, Env, Vec};

#[derive(Clone)]
#[contracttype]
pub struct AllowanceDataKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Allowance(AllowanceDataKey),
    Balance(Address),
    Config,
    TotalSupply,
    Paused,
    Admin,
}

/// One underlying asset entry. A repeated address is allowed and simply
/// double-weights that asset.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BasketAsset {
    pub address: Address,
    /// Units of the asset backing each creation unit of basket tokens.
    pub weight: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Ordered list of underlying assets with their weights.
    pub assets: Vec<BasketAsset>,
    /// Smallest basket token granularity for which the weights are exact.
    /// Creation and redemption amounts must be exact multiples of it.
    pub creation_unit: i128,
    /// Token contract of the native asset, recoverable by the owner.
    pub native_token: Address,
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().persistent().set(&DataKey::Config, config);
    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .expect("Basket Token: Config not set");
    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    config
}

// ################################################################

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_total_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &amount);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn write_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

// ################################################################

/// Units of an underlying asset moved for `quantity` basket tokens.
/// `quantity` is validated as a multiple of the creation unit before any
/// caller reaches this, so the division is exact; the multiplication is the
/// one place the weight table can overflow and is checked.
pub fn per_asset_amount(env: &Env, weight: i128, quantity: i128, creation_unit: i128) -> i128 {
    match weight.safe_mul(quantity, env) {
        Ok(scaled) => scaled / creation_unit,
        Err(err) => panic_with_error!(env, err),
    }
}

/// Amount of `token` owed to current basket holders. Sums every config
/// entry matching `token`, so a double-weighted asset is double-owed.
/// Unlisted tokens owe nothing and their whole balance is excess.
pub fn amount_owed(env: &Env, config: &Config, token: &Address) -> i128 {
    let total_supply = read_total_supply(env);

    let mut owed = 0i128;
    for asset in config.assets.iter() {
        if asset.address == *token {
            let entry = per_asset_amount(env, asset.weight, total_supply, config.creation_unit);
            owed = match owed.safe_add(entry, env) {
                Ok(result) => result,
                Err(err) => panic_with_error!(env, err),
            };
        }
    }
    owed
}
