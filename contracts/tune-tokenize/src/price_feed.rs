//! Price feed access and mint price conversion

use soroban_sdk::{contractclient, contracttype, panic_with_error, token::TokenClient, Address, Env};

use crate::errors::TuneTokenizeError;

/// Mint price in whole US dollars.
pub const MINT_PRICE_USD: i128 = 50;

/// Round data as answered by an aggregator's `latest_round_data`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundData {
    pub round_id: u64,
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u64,
}

#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    fn latest_round_data(env: Env) -> RoundData;

    fn decimals(env: Env) -> u32;
}

pub fn latest_answer(e: &Env, price_feed: &Address) -> i128 {
    PriceFeedClient::new(e, price_feed).latest_round_data().answer
}

pub fn mint_price(e: &Env, price_feed: &Address, payment_token: &Address) -> i128 {
    let feed = PriceFeedClient::new(e, price_feed);
    let answer = feed.latest_round_data().answer;
    let feed_decimals = feed.decimals();
    let token_decimals = TokenClient::new(e, payment_token).decimals();

    convert_usd_price(MINT_PRICE_USD, answer, feed_decimals, token_decimals)
        .unwrap_or_else(|error| panic_with_error!(e, error))
}

/// Convert `usd` whole dollars into the smallest unit of a token quoted at
/// `answer` (scaled by `feed_decimals`), rounding up.
pub(crate) fn convert_usd_price(
    usd: i128,
    answer: i128,
    feed_decimals: u32,
    token_decimals: u32,
) -> Result<i128, TuneTokenizeError> {
    if answer <= 0 {
        return Err(TuneTokenizeError::InvalidPrice);
    }

    let numerator = 10i128
        .checked_pow(feed_decimals)
        .and_then(|feed_scale| usd.checked_mul(feed_scale))
        .and_then(|scaled| {
            10i128
                .checked_pow(token_decimals)
                .and_then(|token_scale| scaled.checked_mul(token_scale))
        })
        .ok_or(TuneTokenizeError::MintPriceOverflow)?;

    let price = numerator / answer + i128::from(numerator % answer != 0);
    if price <= 0 {
        return Err(TuneTokenizeError::InvalidPrice);
    }
    Ok(price)
}
