use soroban_sdk::{Address, Env, U256};

use crate::{
    errors::TokenError,
    math,
    storage::{read_balance, write_balance},
};

/// Moves `amount` from `from` to `to`.
///
/// Both the debit and the credit are computed before either balance is
/// written, so an `Err` leaves storage untouched. A self-transfer only
/// checks that `from` holds `amount`.
///
/// # Errors
/// | Error                 | Condition                               |
/// |-----------------------|-----------------------------------------|
/// | `InsufficientBalance` | `balance(from) < amount`                |
/// | `Overflow`            | `balance(to) + amount` exceeds 2^256 - 1 |
pub fn move_balance(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: &U256,
) -> Result<(), TokenError> {
    let from_balance = read_balance(env, from);
    let new_from_balance =
        math::checked_sub(&from_balance, amount).ok_or(TokenError::InsufficientBalance)?;

    if from == to {
        return Ok(());
    }

    let to_balance = read_balance(env, to);
    let new_to_balance =
        math::checked_add(env, &to_balance, amount).ok_or(TokenError::Overflow)?;

    write_balance(env, from, &new_from_balance);
    write_balance(env, to, &new_to_balance);
    Ok(())
}
