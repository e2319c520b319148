use soroban_sdk::contractevent;

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnswerUpdated {
    #[topic]
    pub current: i128,
    #[topic]
    pub round_id: u64,
    pub updated_at: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewRound {
    #[topic]
    pub round_id: u64,
    pub started_at: u64,
}
