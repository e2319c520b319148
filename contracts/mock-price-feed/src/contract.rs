//! Mock V3 aggregator

use soroban_sdk::{contractimpl, contracttype, panic_with_error, Env, String};

use crate::errors::MockPriceFeedError;
use crate::events::{AnswerUpdated, NewRound};
use crate::{MockV3Aggregator, MockV3AggregatorArgs, MockV3AggregatorClient, MockV3AggregatorTrait, RoundData};

const VERSION: u32 = 0;

const DAY_IN_LEDGERS: u32 = 17280;
const TTL_EXTEND_AMOUNT: u32 = 31 * DAY_IN_LEDGERS;
const TTL_THRESHOLD: u32 = TTL_EXTEND_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
pub enum DataKey {
    Decimals,
    LatestRound,
    Round(u64),
}

fn write_round(e: &Env, round: &RoundData) {
    let key = DataKey::Round(round.round_id);
    e.storage().persistent().set(&key, round);
    e.storage().persistent().extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_AMOUNT);

    e.storage().instance().set(&DataKey::LatestRound, &round.round_id);
    e.storage().instance().extend_ttl(TTL_THRESHOLD, TTL_EXTEND_AMOUNT);
}

fn read_round(e: &Env, round_id: u64) -> RoundData {
    e.storage()
        .persistent()
        .get(&DataKey::Round(round_id))
        .unwrap_or_else(|| panic_with_error!(e, MockPriceFeedError::NoDataPresent))
}

fn latest_round_id(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::LatestRound)
        .unwrap_or_else(|| panic_with_error!(e, MockPriceFeedError::NotInitialized))
}

#[contractimpl]
impl MockV3AggregatorTrait for MockV3Aggregator {

    fn __constructor(e: &Env, decimals: u32, initial_answer: i128) {
        e.storage().instance().set(&DataKey::Decimals, &decimals);
        e.storage().instance().set(&DataKey::LatestRound, &0u64);
        Self::update_answer(e, initial_answer);
    }

    fn update_answer(e: &Env, answer: i128) {
        let round_id = latest_round_id(e)
            .checked_add(1)
            .unwrap_or_else(|| panic_with_error!(e, MockPriceFeedError::RoundIdOverflow));
        let now = e.ledger().timestamp();

        write_round(e, &RoundData {
            round_id,
            answer,
            started_at: now,
            updated_at: now,
            answered_in_round: round_id,
        });

        AnswerUpdated { current: answer, round_id, updated_at: now }.publish(e);
        NewRound { round_id, started_at: now }.publish(e);
    }

    fn update_round_data(e: &Env, round_id: u64, answer: i128, timestamp: u64, started_at: u64) {
        write_round(e, &RoundData {
            round_id,
            answer,
            started_at,
            updated_at: timestamp,
            answered_in_round: round_id,
        });
    }

    fn get_round_data(e: &Env, round_id: u64) -> RoundData {
        read_round(e, round_id)
    }

    fn latest_round_data(e: &Env) -> RoundData {
        read_round(e, latest_round_id(e))
    }

    fn latest_answer(e: &Env) -> i128 {
        Self::latest_round_data(e).answer
    }

    fn latest_timestamp(e: &Env) -> u64 {
        Self::latest_round_data(e).updated_at
    }

    fn latest_round(e: &Env) -> u64 {
        latest_round_id(e)
    }

    fn decimals(e: &Env) -> u32 {
        e.storage()
            .instance()
            .get(&DataKey::Decimals)
            .unwrap_or_else(|| panic_with_error!(e, MockPriceFeedError::NotInitialized))
    }

    fn description(e: &Env) -> String {
        String::from_str(e, "Mock V3 Aggregator")
    }

    fn version(_e: &Env) -> u32 {
        VERSION
    }
}
