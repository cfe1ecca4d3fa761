#![no_std]

mod allowance;
mod balance;
mod errors;
mod math;
mod storage;

#[cfg(test)]
extern crate std; // soroban-sdk testutils require std; the contract is no_std so we must opt-in explicitly.

#[cfg(test)]
mod test;

pub use errors::TokenError;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, U256};
use storage::TokenMetadata;

#[contract]
pub struct FixedSupplyToken;

#[contractimpl]
impl FixedSupplyToken {
    /// Mints the whole supply to `owner` and records the token metadata.
    ///
    /// The supply is fixed from here on: no entry point creates or destroys
    /// tokens afterwards.
    pub fn initialize(
        env: Env,
        owner: Address,
        total_supply: U256,
        decimals: u32,
        name: String,
        symbol: String,
    ) -> Result<(), TokenError> {
        if storage::is_initialized(&env) {
            return Err(TokenError::AlreadyInitialized);
        }

        storage::set_total_supply(&env, &total_supply);
        storage::set_metadata(
            &env,
            &TokenMetadata {
                decimals,
                name,
                symbol,
            },
        );
        storage::write_balance(&env, &owner, &total_supply);
        storage::extend_instance_ttl(&env);

        log!(&env, "initialize", owner, total_supply);
        Ok(())
    }

    pub fn total_supply(env: Env) -> U256 {
        storage::get_total_supply(&env).unwrap_or_else(|| math::zero(&env))
    }

    pub fn balance(env: Env, id: Address) -> U256 {
        storage::read_balance(&env, &id)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> U256 {
        storage::read_allowance(&env, &owner, &spender)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: U256) -> Result<(), TokenError> {
        from.require_auth();
        require_initialized(&env)?;

        balance::move_balance(&env, &from, &to, &amount)?;

        log!(&env, "transfer", from, to, amount);
        Ok(())
    }

    /// Sets the allowance of `spender` over `owner`'s balance to exactly
    /// `amount`. A later approval replaces this one; it never accumulates.
    pub fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        owner.require_auth();
        require_initialized(&env)?;

        allowance::set_allowance(&env, &owner, &spender, &amount);

        log!(&env, "approve", owner, spender, amount);
        Ok(())
    }

    /// Moves `amount` from `from` to `to` on behalf of `spender`, drawing
    /// down the allowance `from` granted to `spender`.
    ///
    /// The allowance is checked before the balance, so a call that exceeds
    /// both reports `InsufficientAllowance`.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        require_initialized(&env)?;

        let remaining = allowance::remaining_after_spend(&env, &from, &spender, &amount)?;
        balance::move_balance(&env, &from, &to, &amount)?;
        allowance::set_allowance(&env, &from, &spender, &remaining);

        log!(&env, "transfer_from", spender, from, to, amount);
        Ok(())
    }

    pub fn increase_allowance(
        env: Env,
        owner: Address,
        spender: Address,
        added: U256,
    ) -> Result<U256, TokenError> {
        owner.require_auth();
        require_initialized(&env)?;

        let updated = allowance::increase_allowance(&env, &owner, &spender, &added)?;

        log!(&env, "increase_allowance", owner, spender, updated);
        Ok(updated)
    }

    pub fn decrease_allowance(
        env: Env,
        owner: Address,
        spender: Address,
        subtracted: U256,
    ) -> Result<U256, TokenError> {
        owner.require_auth();
        require_initialized(&env)?;

        let updated = allowance::decrease_allowance(&env, &owner, &spender, &subtracted)?;

        log!(&env, "decrease_allowance", owner, spender, updated);
        Ok(updated)
    }

    pub fn decimals(env: Env) -> u32 {
        storage::get_metadata(&env).map(|m| m.decimals).unwrap_or(0)
    }

    pub fn name(env: Env) -> String {
        storage::get_metadata(&env)
            .map(|m| m.name)
            .unwrap_or_else(|| String::from_str(&env, ""))
    }

    pub fn symbol(env: Env) -> String {
        storage::get_metadata(&env)
            .map(|m| m.symbol)
            .unwrap_or_else(|| String::from_str(&env, ""))
    }
}

fn require_initialized(env: &Env) -> Result<(), TokenError> {
    if !storage::is_initialized(env) {
        return Err(TokenError::NotInitialized);
    }
    storage::extend_instance_ttl(env);
    Ok(())
}
