use soroban_sdk::{contractclient, Address, Env, Vec};

use crate::storage::Config;

#[contractclient(name = "BasketTokenClient")]
pub trait BasketTokenTrait {
    // ################################################################
    //                             USER
    // ################################################################

    /// Deposit the proportional amount of every underlying asset and mint
    /// `amount` basket tokens to `sender`. `amount` must be a positive
    /// multiple of the creation unit and every underlying pull must succeed,
    /// otherwise the whole call reverts.
    fn create(env: Env, sender: Address, amount: i128);

    /// Burn `amount` basket tokens from `sender` and pay out the
    /// proportional amount of every underlying asset not listed in
    /// `skip_assets`. Skipped payouts stay in the contract. Never gated by
    /// the pause switch so holders can always exit.
    fn redeem(env: Env, sender: Address, amount: i128, skip_assets: Vec<Address>);

    // ################################################################
    //                             ADMIN
    // ################################################################

    fn pause(env: Env, sender: Address);

    fn unpause(env: Env, sender: Address);

    /// Single step ownership handoff.
    fn set_admin(env: Env, sender: Address, new_admin: Address);

    /// Withdraw whatever balance of `token` the contract holds beyond the
    /// amount owed to current basket holders.
    fn withdraw_excess_token(env: Env, sender: Address, token: Address);

    /// Sweep the contract's entire native asset balance to the owner.
    fn withdraw_native(env: Env, sender: Address);

    // ################################################################
    //                            QUERIES
    // ################################################################

    fn query_config(env: Env) -> Config;

    fn query_admin(env: Env) -> Address;

    fn query_is_paused(env: Env) -> bool;

    fn query_total_supply(env: Env) -> i128;
}
