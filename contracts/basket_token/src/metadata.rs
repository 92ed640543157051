use soroban_sdk::{Env, String};
use soroban_token_sdk::metadata::TokenMetadata;
use soroban_token_sdk::TokenUtils;

fn read_metadata(env: &Env) -> TokenMetadata {
    TokenUtils::new(env).metadata().get_metadata()
}

pub fn read_decimal(env: &Env) -> u32 {
    read_metadata(env).decimal
}

pub fn read_name(env: &Env) -> String {
    read_metadata(env).name
}

pub fn read_symbol(env: &Env) -> String {
    read_metadata(env).symbol
}

pub fn write_metadata(env: &Env, metadata: TokenMetadata) {
    TokenUtils::new(env).metadata().set_metadata(&metadata);
}
