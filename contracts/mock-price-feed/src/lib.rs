#![no_std]
#![allow(dead_code)]

use soroban_sdk::{contract, contractmeta, contracttype, Env, String};

contractmeta!(key = "Description", val = "Mock V3 price aggregator");

mod contract;

#[cfg(test)]
mod test;
mod errors;
mod events;

pub use errors::MockPriceFeedError;

#[contract]
pub struct MockV3Aggregator;

/// A single price round, laid out like the aggregator `latestRoundData` tuple.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundData {
    pub round_id: u64,
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u64,
}

pub trait MockV3AggregatorTrait {

    fn __constructor(e: &Env, decimals: u32, initial_answer: i128);

    /// Publish a new answer as the next round.
    ///
    /// The round is stamped with the current ledger timestamp.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `answer` - The new price, scaled by `decimals()`.
    ///
    /// # Events
    ///
    /// * topics - `["answer_updated", current: i128, round_id: u64]`
    /// * data - `[updated_at: u64]`
    /// * topics - `["new_round", round_id: u64]`
    /// * data - `[started_at: u64]`
    fn update_answer(e: &Env, answer: i128);

    /// Overwrite `round_id` with explicit values and make it the latest round.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `round_id` - Round to write.
    /// * `answer` - The price for that round.
    /// * `timestamp` - When the answer was last updated.
    /// * `started_at` - When the round started.
    fn update_round_data(e: &Env, round_id: u64, answer: i128, timestamp: u64, started_at: u64);

    /// Returns the data of `round_id`.
    ///
    /// # Panics
    ///
    /// * If the round was never written.
    fn get_round_data(e: &Env, round_id: u64) -> RoundData;

    /// Returns the data of the latest round.
    fn latest_round_data(e: &Env) -> RoundData;

    fn latest_answer(e: &Env) -> i128;

    fn latest_timestamp(e: &Env) -> u64;

    fn latest_round(e: &Env) -> u64;

    /// Number of decimals the answers are scaled by.
    fn decimals(e: &Env) -> u32;

    fn description(e: &Env) -> String;

    fn version(e: &Env) -> u32;
}
