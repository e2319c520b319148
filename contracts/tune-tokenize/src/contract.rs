//! Tune Tokenize NFT

use soroban_sdk::{contractimpl, log, panic_with_error, token::TokenClient, Address, BytesN, Env, String};

use crate::errors::TuneTokenizeError;
use crate::events::{Approve, ApproveForAll, Burn, Minted, OwnershipTransferred, Transfer, Upgrade, Withdraw};
use crate::storage::{self, ApprovalData, Config, NFTStorageKey};
use crate::{price_feed, TuneTokenize, TuneTokenizeArgs, TuneTokenizeClient, TuneTokenizeTrait};

pub const NAME: &str = "Tune Tokenize";
pub const SYMBOL: &str = "TT";

fn require_owner_of(e: &Env, token_id: u32) -> Address {
    storage::owner_of(e, token_id)
        .unwrap_or_else(|| panic_with_error!(e, TuneTokenizeError::NonExistentToken))
}

fn move_token(e: &Env, from: &Address, to: &Address, token_id: u32) {
    let owner = require_owner_of(e, token_id);
    if owner != *from {
        panic_with_error!(e, TuneTokenizeError::IncorrectOwner);
    }

    storage::remove_approval(e, token_id);
    storage::set_balance(e, from, storage::balance(e, from) - 1);
    storage::set_balance(e, to, storage::balance(e, to) + 1);
    storage::set_owner(e, token_id, to);

    Transfer { from: from.clone(), to: to.clone(), token_id }.publish(e);
}

#[contractimpl]
impl TuneTokenizeTrait for TuneTokenize {

    fn __constructor(e: &Env, owner: Address, price_feed: Address, payment_token: Address) {
        storage::set_config(e, &Config { owner, price_feed, payment_token });
        storage::set_next_token_id(e, 1);

        e.storage().instance().set(&NFTStorageKey::Name, &String::from_str(e, NAME));
        e.storage().instance().set(&NFTStorageKey::Symbol, &String::from_str(e, SYMBOL));
        storage::extend_instance(e);
    }

    fn upgrade(e: &Env, wasm_hash: BytesN<32>) {
        let owner = storage::config(e).owner;
        owner.require_auth();

        e.deployer().update_current_contract_wasm(wasm_hash.clone());

        Upgrade { owner, wasm_hash }.publish(e);
    }

    fn transfer_ownership(e: &Env, new_owner: Address) {
        let mut config = storage::config(e);
        config.owner.require_auth();

        let previous_owner = config.owner.clone();
        config.owner = new_owner.clone();
        storage::set_config(e, &config);
        storage::extend_instance(e);

        log!(e, "ownership transferred", previous_owner, new_owner);
        OwnershipTransferred { previous_owner, new_owner }.publish(e);
    }

    fn get_latest_price(e: &Env) -> i128 {
        price_feed::latest_answer(e, &storage::config(e).price_feed)
    }

    fn get_mint_price_eth(e: &Env) -> i128 {
        let config = storage::config(e);
        price_feed::mint_price(e, &config.price_feed, &config.payment_token)
    }

    fn mint_token(e: &Env, minter: Address, token_uri: String, payment: i128) -> u32 {
        minter.require_auth();

        if token_uri.is_empty() {
            panic_with_error!(e, TuneTokenizeError::InvalidTokenUri);
        }

        let config = storage::config(e);
        let mint_price = price_feed::mint_price(e, &config.price_feed, &config.payment_token);
        if payment < mint_price {
            panic_with_error!(e, TuneTokenizeError::NeedMoreEthSent);
        }

        let token_id = storage::next_token_id(e);
        let next_token_id = token_id
            .checked_add(1)
            .unwrap_or_else(|| panic_with_error!(e, TuneTokenizeError::TokenIDsAreDepleted));
        storage::set_next_token_id(e, next_token_id);
        storage::extend_instance(e);

        storage::set_owner(e, token_id, &minter);
        storage::set_minter(e, token_id, &minter);
        storage::set_token_uri(e, token_id, &token_uri);
        storage::set_balance(e, &minter, storage::balance(e, &minter) + 1);

        log!(e, "minted", token_id, minter, payment);
        Minted { token_id, token_uri }.publish(e);

        // Payment is pulled after all state is written
        TokenClient::new(e, &config.payment_token).transfer(
            &minter,
            &e.current_contract_address(),
            &payment,
        );

        token_id
    }

    fn burn(e: &Env, caller: Address, token_id: u32) {
        caller.require_auth();

        let owned_by_minter = match (storage::owner_of(e, token_id), storage::minter(e, token_id)) {
            (Some(owner), Some(minter)) => owner == caller && minter == caller,
            _ => false,
        };
        if !owned_by_minter {
            panic_with_error!(e, TuneTokenizeError::CanOnlyBeBurnedIfOwnedByMinter);
        }

        storage::remove_token(e, token_id);
        storage::set_balance(e, &caller, storage::balance(e, &caller) - 1);

        log!(e, "burned", token_id, caller);
        Burn { from: caller, token_id }.publish(e);
    }

    fn withdraw(e: &Env) {
        let config = storage::config(e);
        config.owner.require_auth();

        let token = TokenClient::new(e, &config.payment_token);
        let contract = e.current_contract_address();
        let amount = token.balance(&contract);
        if amount <= 0 {
            panic_with_error!(e, TuneTokenizeError::NothingToWithdraw);
        }

        token.transfer(&contract, &config.owner, &amount);

        log!(e, "withdrawn", amount, config.owner);
        Withdraw { to: config.owner, amount }.publish(e);
    }

    fn get_current_token_id(e: &Env) -> u32 {
        storage::next_token_id(e)
    }

    fn minter(e: &Env, token_id: u32) -> Address {
        storage::minter(e, token_id)
            .unwrap_or_else(|| panic_with_error!(e, TuneTokenizeError::NonExistentToken))
    }

    fn owner(e: &Env) -> Address {
        storage::config(e).owner
    }

    fn price_feed(e: &Env) -> Address {
        storage::config(e).price_feed
    }

    fn payment_token(e: &Env) -> Address {
        storage::config(e).payment_token
    }

    fn balance(e: &Env, owner: Address) -> u32 {
        storage::balance(e, &owner)
    }

    fn owner_of(e: &Env, token_id: u32) -> Address {
        require_owner_of(e, token_id)
    }

    fn transfer(e: &Env, from: Address, to: Address, token_id: u32) {
        from.require_auth();

        move_token(e, &from, &to, token_id);
    }

    fn transfer_from(e: &Env, spender: Address, from: Address, to: Address, token_id: u32) {
        spender.require_auth();

        let owner = require_owner_of(e, token_id);
        let approved = storage::approval(e, token_id).is_some_and(|approval| approval.approved == spender);
        if spender != owner && !approved && !storage::is_operator(e, &owner, &spender) {
            panic_with_error!(e, TuneTokenizeError::InsufficientApproval);
        }

        move_token(e, &from, &to, token_id);
    }

    fn approve(e: &Env, approver: Address, approved: Address, token_id: u32, live_until_ledger: u32) {
        approver.require_auth();

        let owner = require_owner_of(e, token_id);
        if approver != owner && !storage::is_operator(e, &owner, &approver) {
            panic_with_error!(e, TuneTokenizeError::InvalidApprover);
        }
        if live_until_ledger < e.ledger().sequence() {
            panic_with_error!(e, TuneTokenizeError::InvalidLiveUntilLedger);
        }

        storage::set_approval(e, token_id, &ApprovalData { approved: approved.clone(), live_until_ledger });

        Approve { approver, token_id, approved, live_until_ledger }.publish(e);
    }

    fn approve_for_all(e: &Env, owner: Address, operator: Address, live_until_ledger: u32) {
        owner.require_auth();

        if live_until_ledger != 0 && live_until_ledger < e.ledger().sequence() {
            panic_with_error!(e, TuneTokenizeError::InvalidLiveUntilLedger);
        }

        storage::set_operator(e, &owner, &operator, live_until_ledger);

        ApproveForAll { owner, operator, live_until_ledger }.publish(e);
    }

    fn get_approved(e: &Env, token_id: u32) -> Option<Address> {
        require_owner_of(e, token_id);
        storage::approval(e, token_id).map(|approval| approval.approved)
    }

    fn is_approved_for_all(e: &Env, owner: Address, operator: Address) -> bool {
        storage::is_operator(e, &owner, &operator)
    }

    fn name(e: &Env) -> String {
        storage::metadata(e, &NFTStorageKey::Name)
    }

    fn symbol(e: &Env) -> String {
        storage::metadata(e, &NFTStorageKey::Symbol)
    }

    fn token_uri(e: &Env, token_id: u32) -> String {
        storage::token_uri(e, token_id)
            .unwrap_or_else(|| panic_with_error!(e, TuneTokenizeError::NonExistentToken))
    }
}
