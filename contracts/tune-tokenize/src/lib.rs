#![no_std]
#![allow(dead_code)]

use soroban_sdk::{contract, contractmeta, Env, Address, String, BytesN};

contractmeta!(key = "Description", val = "Tune Tokenize NFT");

mod contract;
mod price_feed;
mod storage;

mod errors;
mod events;

pub use errors::TuneTokenizeError;
pub use price_feed::{PriceFeedClient, RoundData, MINT_PRICE_USD};

#[contract]
pub struct TuneTokenize;

pub trait TuneTokenizeTrait {

    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `owner` - Account allowed to withdraw payments and upgrade.
    /// * `price_feed` - Aggregator quoting the payment asset in USD.
    /// * `payment_token` - Token contract of the native asset mints are paid in.
    fn __constructor(e: &Env, owner: Address, price_feed: Address, payment_token: Address);

    fn upgrade(e: &Env, wasm_hash: BytesN<32>);

    /// Hand the contract over to `new_owner`.
    ///
    /// # Events
    ///
    /// * topics - `["ownership_transferred", previous_owner: Address, new_owner: Address]`
    fn transfer_ownership(e: &Env, new_owner: Address);

    /// Returns the latest answer of the price feed, unscaled.
    fn get_latest_price(e: &Env) -> i128;

    /// Returns the amount of the payment token required to mint one token.
    ///
    /// The fixed USD price is converted with the latest feed answer and
    /// rounded up to the token's smallest unit.
    ///
    /// # Panics
    ///
    /// * If the feed answer is not strictly positive.
    /// * If the conversion overflows.
    fn get_mint_price_eth(e: &Env) -> i128;

    /// Mint a new token for `minter` with the given metadata URI.
    ///
    /// The whole `payment` is moved from `minter` to the contract; anything
    /// above the mint price is kept.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `minter` - Account paying for and receiving the token.
    /// * `token_uri` - Metadata URI, must not be empty.
    /// * `payment` - Amount of the payment token sent along.
    ///
    /// # Returns
    ///
    /// The id of the new token.
    ///
    /// # Panics
    ///
    /// * If `token_uri` is empty.
    /// * If `payment` is lower than `get_mint_price_eth()`.
    ///
    /// # Events
    ///
    /// * topics - `["minted", token_id: u32]`
    /// * data - `[token_uri: String]`
    fn mint_token(e: &Env, minter: Address, token_uri: String, payment: i128) -> u32;

    /// Burn `token_id`.
    ///
    /// Only allowed while `caller` is both the current owner and the
    /// account that minted the token.
    ///
    /// # Events
    ///
    /// * topics - `["burn", from: Address]`
    /// * data - `[token_id: u32]`
    fn burn(e: &Env, caller: Address, token_id: u32);

    /// Send the whole payment token balance of the contract to the owner.
    ///
    /// # Panics
    ///
    /// * If the caller is not the owner.
    /// * If there is nothing to withdraw.
    ///
    /// # Events
    ///
    /// * topics - `["withdraw", to: Address]`
    /// * data - `[amount: i128]`
    fn withdraw(e: &Env);

    /// Returns the id the next minted token will receive.
    fn get_current_token_id(e: &Env) -> u32;

    /// Returns the account that minted `token_id`.
    ///
    /// # Notes
    ///
    /// If the token does not exist, this function is expected to panic.
    fn minter(e: &Env, token_id: u32) -> Address;

    fn owner(e: &Env) -> Address;

    fn price_feed(e: &Env) -> Address;

    fn payment_token(e: &Env) -> Address;

    /// Returns the number of tokens in `owner`'s account.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `owner` - Account of the token's owner.
    fn balance(e: &Env, owner: Address) -> u32;

    /// Returns the address of the owner of the given `token_id`.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `token_id` - Token id as a number.
    ///
    /// # Notes
    ///
    /// If the token does not exist, this function is expected to panic.
    fn owner_of(e: &Env, token_id: u32) -> Address;

    /// Transfers `token_id` token from `from` to `to`.
    ///
    /// The minter of the token is left untouched.
    ///
    /// # Events
    ///
    /// * topics - `["transfer", from: Address, to: Address]`
    /// * data - `[token_id: u32]`
    fn transfer(e: &Env, from: Address, to: Address, token_id: u32);

    /// Transfers `token_id` token from `from` to `to` by using `spender`s
    /// approval.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `spender` - The address authorizing the transfer.
    /// * `from` - Account of the sender.
    /// * `to` - Account of the recipient.
    /// * `token_id` - Token id as a number.
    ///
    /// # Events
    ///
    /// * topics - `["transfer", from: Address, to: Address]`
    /// * data - `[token_id: u32]`
    fn transfer_from(e: &Env, spender: Address, from: Address, to: Address, token_id: u32);

    /// Gives permission to `approved` to transfer `token_id` token to another
    /// account. The approval is cleared when the token is transferred.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to Soroban environment.
    /// * `approver` - The address of the approver (should be `owner` or `operator`).
    /// * `approved` - The address receiving the approval.
    /// * `token_id` - Token id as a number.
    /// * `live_until_ledger` - The ledger number at which the allowance
    ///   expires.
    ///
    /// # Events
    ///
    /// * topics - `["approve", approver: Address, token_id: u32]`
    /// * data - `[approved: Address, live_until_ledger: u32]`
    fn approve(e: &Env, approver: Address, approved: Address, token_id: u32, live_until_ledger: u32);

    /// Approve or remove `operator` as an operator for the owner.
    ///
    /// If `live_until_ledger` is `0`, the approval is revoked.
    ///
    /// # Events
    ///
    /// * topics - `["approve_for_all", owner: Address]`
    /// * data - `[operator: Address, live_until_ledger: u32]`
    fn approve_for_all(e: &Env, owner: Address, operator: Address, live_until_ledger: u32);

    fn get_approved(e: &Env, token_id: u32) -> Option<Address>;

    fn is_approved_for_all(e: &Env, owner: Address, operator: Address) -> bool;

    /// Returns the token collection name.
    fn name(e: &Env) -> String;

    /// Returns the token collection symbol.
    fn symbol(e: &Env) -> String;

    /// Returns the metadata URI stored for `token_id` at mint.
    ///
    /// # Notes
    ///
    /// If the token does not exist, this function is expected to panic.
    fn token_uri(e: &Env, token_id: u32) -> String;
}
