use soroban_sdk::{Address, Env, String, Symbol, Vec};

pub struct BasketTokenEvents {}

impl BasketTokenEvents {
    /// Emitted when the basket token is deployed
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[name: String, symbol: String]`
    pub fn initialize(e: &Env, admin: Address, name: String, symbol: String) {
        let topics = (Symbol::new(e, "initialize"), admin);
        e.events().publish(topics, (name, symbol));
    }

    /// Emitted when basket tokens are created against underlying deposits
    ///
    /// - topics - `["create", sender: Address]`
    /// - data - `[amount: i128]`
    pub fn create(e: &Env, sender: Address, amount: i128) {
        let topics = (Symbol::new(e, "create"), sender);
        e.events().publish(topics, amount);
    }

    /// Emitted when basket tokens are redeemed for the underlying assets
    ///
    /// - topics - `["redeem", redeemer: Address]`
    /// - data - `[amount: i128, skipped: Vec<Address>]`
    pub fn redeem(e: &Env, redeemer: Address, amount: i128, skipped: Vec<Address>) {
        let topics = (Symbol::new(e, "redeem"), redeemer);
        e.events().publish(topics, (amount, skipped));
    }

    /// Emitted when the owner pauses creation
    ///
    /// - topics - `["pause", admin: Address]`
    /// - data - `[]`
    pub fn pause(e: &Env, admin: Address) {
        let topics = (Symbol::new(e, "pause"), admin);
        e.events().publish(topics, ());
    }

    /// Emitted when the owner resumes creation
    ///
    /// - topics - `["unpause", admin: Address]`
    /// - data - `[]`
    pub fn unpause(e: &Env, admin: Address) {
        let topics = (Symbol::new(e, "unpause"), admin);
        e.events().publish(topics, ());
    }

    /// Emitted when the owner recovers an excess token balance
    ///
    /// - topics - `["withdraw_excess", token: Address]`
    /// - data - `[amount: i128]`
    pub fn withdraw_excess(e: &Env, token: Address, amount: i128) {
        let topics = (Symbol::new(e, "withdraw_excess"), token);
        e.events().publish(topics, amount);
    }

    /// Emitted when the owner sweeps the native asset balance
    ///
    /// - topics - `["withdraw_native", admin: Address]`
    /// - data - `[amount: i128]`
    pub fn withdraw_native(e: &Env, admin: Address, amount: i128) {
        let topics = (Symbol::new(e, "withdraw_native"), admin);
        e.events().publish(topics, amount);
    }
}
