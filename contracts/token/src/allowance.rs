use soroban_sdk::{Address, Env, U256};

use crate::{
    errors::TokenError,
    math,
    storage::{read_allowance, write_allowance},
};

/// Replaces the allowance outright. The previous value is discarded
/// regardless of whether the new one is larger or smaller.
pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, amount: &U256) {
    write_allowance(env, owner, spender, amount);
}

pub fn increase_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    added: &U256,
) -> Result<U256, TokenError> {
    let current = read_allowance(env, owner, spender);
    let updated = math::checked_add(env, &current, added).ok_or(TokenError::Overflow)?;
    write_allowance(env, owner, spender, &updated);
    Ok(updated)
}

pub fn decrease_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    subtracted: &U256,
) -> Result<U256, TokenError> {
    let current = read_allowance(env, owner, spender);
    let updated =
        math::checked_sub(&current, subtracted).ok_or(TokenError::InsufficientAllowance)?;
    write_allowance(env, owner, spender, &updated);
    Ok(updated)
}

/// Computes the allowance left after `spender` draws `amount` from `owner`.
///
/// Nothing is written: the caller persists the result only once the balance
/// move has succeeded, keeping a failed delegated transfer free of side
/// effects.
pub fn remaining_after_spend(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: &U256,
) -> Result<U256, TokenError> {
    let current = read_allowance(env, owner, spender);
    math::checked_sub(&current, amount).ok_or(TokenError::InsufficientAllowance)
}
