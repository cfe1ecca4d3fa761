use soroban_sdk::{contracttype, Address, Env, String, U256};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers
const BALANCE_LIFETIME_THRESHOLD: u32 = 17280;
const BALANCE_BUMP_AMOUNT: u32 = 518400;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub decimals: u32,
    pub name: String,
    pub symbol: String,
}

/// Instance keys hold the constants fixed at initialization; balances and
/// allowances live in persistent storage, one entry per account or pair.
#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    TotalSupply,
    Metadata,
    Balance(Address),
    Allowance(Address, Address),
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::TotalSupply)
}

pub fn get_total_supply(env: &Env) -> Option<U256> {
    env.storage().instance().get(&DataKey::TotalSupply)
}

pub fn set_total_supply(env: &Env, supply: &U256) {
    env.storage().instance().set(&DataKey::TotalSupply, supply);
}

pub fn get_metadata(env: &Env) -> Option<TokenMetadata> {
    env.storage().instance().get(&DataKey::Metadata)
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
}

/// Reads a balance, treating a missing entry as zero.
pub fn read_balance(env: &Env, id: &Address) -> U256 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get::<_, U256>(&key) {
        Some(balance) => {
            extend_persistent_ttl(env, &key);
            balance
        }
        None => U256::from_u32(env, 0),
    }
}

/// Writes a balance. A zero balance removes the entry rather than storing it.
pub fn write_balance(env: &Env, id: &Address, amount: &U256) {
    let key = DataKey::Balance(id.clone());
    if *amount == U256::from_u32(env, 0) {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, amount);
        extend_persistent_ttl(env, &key);
    }
}

pub fn read_allowance(env: &Env, owner: &Address, spender: &Address) -> U256 {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    match env.storage().persistent().get::<_, U256>(&key) {
        Some(allowance) => {
            extend_persistent_ttl(env, &key);
            allowance
        }
        None => U256::from_u32(env, 0),
    }
}

pub fn write_allowance(env: &Env, owner: &Address, spender: &Address, amount: &U256) {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    if *amount == U256::from_u32(env, 0) {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, amount);
        extend_persistent_ttl(env, &key);
    }
}
