use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockPriceFeedError {
    /// Indicates the requested round was never written.
    NoDataPresent = 100,
    /// Indicates the feed was not constructed.
    NotInitialized = 101,
    /// Indicates the latest round id cannot be advanced.
    RoundIdOverflow = 102,
}
