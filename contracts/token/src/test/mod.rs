#![cfg(test)]

// ---------------------------------------------------------------------------
// Token test suite
//
// supply    — construction, metadata and the supply invariant
// transfer  — direct transfers between accounts
// allowance — approve / transfer_from / allowance adjustment
// auth      — which address each mutation must be authorized by
// math      — checked U256 helpers (no contract needed)
// ---------------------------------------------------------------------------


use soroban_sdk::{testutils::Address as _, Address, Env, String, U256};

use crate::{FixedSupplyToken, FixedSupplyTokenClient};

/// 8,000,000 tokens at 18 decimals.
pub const TOTAL_SUPPLY: u128 = 8_000_000_000_000_000_000_000_000;
pub const DECIMALS: u32 = 18;

pub fn amount(env: &Env, value: u128) -> U256 {
    U256::from_u128(env, value)
}

pub fn register<'a>(env: &Env) -> FixedSupplyTokenClient<'a> {
    let contract_id = env.register_contract(None, FixedSupplyToken);
    FixedSupplyTokenClient::new(env, &contract_id)
}

/// Fresh environment with all auths mocked and a token whose whole supply
/// sits with the returned owner.
pub fn setup<'a>() -> (Env, FixedSupplyTokenClient<'a>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let client = register(&env);
    let owner = Address::generate(&env);
    client.initialize(
        &owner,
        &amount(&env, TOTAL_SUPPLY),
        &DECIMALS,
        &String::from_str(&env, "MyToken"),
        &String::from_str(&env, "MTK"),
    );

    (env, client, owner)
}

pub fn sum_balances(env: &Env, client: &FixedSupplyTokenClient, accounts: &[&Address]) -> U256 {
    accounts
        .iter()
        .fold(U256::from_u32(env, 0), |acc, id| acc.add(&client.balance(id)))
}
