//! Checked arithmetic over 256-bit amounts.
//!
//! The host traps on `U256` overflow and underflow, so every operation here
//! compares its operands first and reports out-of-range results as `None`.

use soroban_sdk::{Env, U256};

pub fn zero(env: &Env) -> U256 {
    U256::from_u32(env, 0)
}

/// Largest representable amount, 2^256 - 1.
pub fn max(env: &Env) -> U256 {
    U256::from_parts(env, u64::MAX, u64::MAX, u64::MAX, u64::MAX)
}

pub fn checked_add(env: &Env, a: &U256, b: &U256) -> Option<U256> {
    let headroom = max(env).sub(a);
    if b.gt(&headroom) {
        return None;
    }
    Some(a.add(b))
}

pub fn checked_sub(a: &U256, b: &U256) -> Option<U256> {
    if b.gt(a) {
        return None;
    }
    Some(a.sub(b))
}
