#![no_std]

mod admin;
mod allowance;
mod balance;
mod basket_token;
mod contract;
mod events;
mod metadata;
mod storage;

#[cfg(test)]
mod tests;

pub use crate::contract::BasketTokenClient;
pub use crate::storage::{BasketAsset, Config};
