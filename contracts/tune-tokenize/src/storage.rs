use soroban_sdk::{contracttype, panic_with_error, Address, Env, IntoVal, String, Val};

use crate::errors::TuneTokenizeError;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_EXTEND_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_EXTEND_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const TOKEN_EXTEND_AMOUNT: u32 = 31 * DAY_IN_LEDGERS;
pub(crate) const TOKEN_TTL_THRESHOLD: u32 = TOKEN_EXTEND_AMOUNT - DAY_IN_LEDGERS;

/// Deployment parameters fixed by the constructor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub owner: Address,
    pub price_feed: Address,
    pub payment_token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApprovalData {
    pub approved: Address,
    pub live_until_ledger: u32,
}

#[contracttype]
pub enum DataKey {
    Config,
    NextTokenId,
}

#[contracttype]
pub enum NFTStorageKey {
    Owner(u32),
    Minter(u32),
    TokenUri(u32),
    Balance(Address),
    Approval(u32),
    ApprovalForAll(Address /* owner */, Address /* operator */),
    Name,
    Symbol,
}

pub(crate) fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_EXTEND_AMOUNT);
}

pub(crate) fn config(e: &Env) -> Config {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(e, TuneTokenizeError::NotInitialized))
}

pub(crate) fn set_config(e: &Env, config: &Config) {
    e.storage().instance().set(&DataKey::Config, config);
}

pub(crate) fn next_token_id(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::NextTokenId).unwrap_or(1)
}

pub(crate) fn set_next_token_id(e: &Env, token_id: u32) {
    e.storage().instance().set(&DataKey::NextTokenId, &token_id);
}

pub(crate) fn metadata(e: &Env, key: &NFTStorageKey) -> String {
    e.storage()
        .instance()
        .get(key)
        .unwrap_or_else(|| panic_with_error!(e, TuneTokenizeError::NotInitialized))
}

fn write_persistent<V: IntoVal<Env, Val>>(e: &Env, key: &NFTStorageKey, value: &V) {
    e.storage().persistent().set(key, value);
    e.storage()
        .persistent()
        .extend_ttl(key, TOKEN_TTL_THRESHOLD, TOKEN_EXTEND_AMOUNT);
}

pub(crate) fn owner_of(e: &Env, token_id: u32) -> Option<Address> {
    e.storage().persistent().get(&NFTStorageKey::Owner(token_id))
}

pub(crate) fn set_owner(e: &Env, token_id: u32, owner: &Address) {
    write_persistent(e, &NFTStorageKey::Owner(token_id), owner);
}

pub(crate) fn minter(e: &Env, token_id: u32) -> Option<Address> {
    e.storage().persistent().get(&NFTStorageKey::Minter(token_id))
}

pub(crate) fn set_minter(e: &Env, token_id: u32, minter: &Address) {
    write_persistent(e, &NFTStorageKey::Minter(token_id), minter);
}

pub(crate) fn token_uri(e: &Env, token_id: u32) -> Option<String> {
    e.storage().persistent().get(&NFTStorageKey::TokenUri(token_id))
}

pub(crate) fn set_token_uri(e: &Env, token_id: u32, uri: &String) {
    write_persistent(e, &NFTStorageKey::TokenUri(token_id), uri);
}

pub(crate) fn balance(e: &Env, owner: &Address) -> u32 {
    e.storage()
        .persistent()
        .get(&NFTStorageKey::Balance(owner.clone()))
        .unwrap_or(0)
}

pub(crate) fn set_balance(e: &Env, owner: &Address, balance: u32) {
    write_persistent(e, &NFTStorageKey::Balance(owner.clone()), &balance);
}

/// Returns the approval of `token_id` unless it expired.
pub(crate) fn approval(e: &Env, token_id: u32) -> Option<ApprovalData> {
    let approval: ApprovalData = e
        .storage()
        .persistent()
        .get(&NFTStorageKey::Approval(token_id))?;
    (approval.live_until_ledger >= e.ledger().sequence()).then_some(approval)
}

pub(crate) fn set_approval(e: &Env, token_id: u32, approval: &ApprovalData) {
    write_persistent(e, &NFTStorageKey::Approval(token_id), approval);
}

pub(crate) fn is_operator(e: &Env, owner: &Address, operator: &Address) -> bool {
    let live_until_ledger: u32 = e
        .storage()
        .persistent()
        .get(&NFTStorageKey::ApprovalForAll(owner.clone(), operator.clone()))
        .unwrap_or(0);
    live_until_ledger != 0 && live_until_ledger >= e.ledger().sequence()
}

pub(crate) fn set_operator(e: &Env, owner: &Address, operator: &Address, live_until_ledger: u32) {
    let key = NFTStorageKey::ApprovalForAll(owner.clone(), operator.clone());
    if live_until_ledger == 0 {
        e.storage().persistent().remove(&key);
    } else {
        write_persistent(e, &key, &live_until_ledger);
    }
}

/// Drops everything stored for `token_id`.
pub(crate) fn remove_token(e: &Env, token_id: u32) {
    let persistent = e.storage().persistent();
    persistent.remove(&NFTStorageKey::Owner(token_id));
    persistent.remove(&NFTStorageKey::Minter(token_id));
    persistent.remove(&NFTStorageKey::TokenUri(token_id));
    persistent.remove(&NFTStorageKey::Approval(token_id));
}

pub(crate) fn remove_approval(e: &Env, token_id: u32) {
    e.storage().persistent().remove(&NFTStorageKey::Approval(token_id));
}
