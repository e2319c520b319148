extern crate std;

use soroban_sdk::{testutils::Ledger as _, Env, String};

use crate::{MockPriceFeedError, MockV3Aggregator, MockV3AggregatorClient, RoundData};

const DECIMALS: u32 = 18;
const INITIAL_PRICE: i128 = 200_000_000_000_000_000_000;

fn create_client<'a>(e: &Env) -> MockV3AggregatorClient<'a> {
    let address = e.register(MockV3Aggregator, (DECIMALS, INITIAL_PRICE));
    MockV3AggregatorClient::new(e, &address)
}

#[test]
fn test_constructor_starts_first_round() {
    let e = Env::default();
    e.ledger().set_timestamp(1_000);
    let client = create_client(&e);

    assert_eq!(client.decimals(), DECIMALS);
    assert_eq!(client.latest_round(), 1);
    assert_eq!(client.latest_answer(), INITIAL_PRICE);
    assert_eq!(client.latest_timestamp(), 1_000);
    assert_eq!(
        client.latest_round_data(),
        RoundData {
            round_id: 1,
            answer: INITIAL_PRICE,
            started_at: 1_000,
            updated_at: 1_000,
            answered_in_round: 1,
        }
    );
    assert_eq!(client.description(), String::from_str(&e, "Mock V3 Aggregator"));
    assert_eq!(client.version(), 0);
}

#[test]
fn test_update_answer_advances_round() {
    let e = Env::default();
    let client = create_client(&e);

    e.ledger().set_timestamp(5_000);
    client.update_answer(&150_000_000_000_000_000_000);

    let latest = client.latest_round_data();
    assert_eq!(latest.round_id, 2);
    assert_eq!(latest.answer, 150_000_000_000_000_000_000);
    assert_eq!(latest.updated_at, 5_000);

    // Older rounds stay readable
    assert_eq!(client.get_round_data(&1).answer, INITIAL_PRICE);
}

#[test]
fn test_update_round_data() {
    let e = Env::default();
    let client = create_client(&e);

    client.update_round_data(&7, &42, &900, &800);

    assert_eq!(client.latest_round(), 7);
    assert_eq!(
        client.get_round_data(&7),
        RoundData {
            round_id: 7,
            answer: 42,
            started_at: 800,
            updated_at: 900,
            answered_in_round: 7,
        }
    );
}

#[test]
fn test_unknown_round() {
    let e = Env::default();
    let client = create_client(&e);

    let result = client.try_get_round_data(&99);
    assert_eq!(result, Err(Ok(MockPriceFeedError::NoDataPresent.into())));
}

#[test]
fn test_update_answer_after_last_round_id() {
    let e = Env::default();
    let client = create_client(&e);

    client.update_round_data(&u64::MAX, &42, &900, &800);

    let result = client.try_update_answer(&43);
    assert_eq!(result, Err(Ok(MockPriceFeedError::RoundIdOverflow.into())));
    assert_eq!(client.latest_answer(), 42);
}
