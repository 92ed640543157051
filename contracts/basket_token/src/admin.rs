use soroban_sdk::{Address, Env};

use crate::storage::DataKey;

/// The owner address, set by the constructor before any other entry point
/// can run.
pub fn read_administrator(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("Basket Token: Admin not set")
}

pub fn write_administrator(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}
