use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TuneTokenizeError {
    /// Indicates an empty metadata URI was supplied to mint.
    InvalidTokenUri = 200,
    /// Indicates the payment is lower than the current mint price.
    NeedMoreEthSent = 201,
    /// Indicates a burn by an account that is not both owner and minter.
    CanOnlyBeBurnedIfOwnedByMinter = 202,
    /// Indicates the contract holds no payment to withdraw.
    NothingToWithdraw = 203,
    /// Indicates a non-existent `token_id`.
    NonExistentToken = 204,
    /// Indicates an error related to the ownership over a particular token.
    /// Used in transfers.
    IncorrectOwner = 205,
    /// Indicates a failure with the `spender`’s approval.
    InsufficientApproval = 206,
    /// Indicates a failure with the `approver` of a token to be approved.
    InvalidApprover = 207,
    /// Indicates the price feed answered with a non-positive price.
    InvalidPrice = 208,
    /// Indicates the mint price conversion overflowed.
    MintPriceOverflow = 209,
    /// Indicates all possible `token_id`s are already in use.
    TokenIDsAreDepleted = 210,
    /// Indicates the contract configuration is missing.
    NotInitialized = 211,
    /// Indicates an approval that expires in the past.
    InvalidLiveUntilLedger = 212,
}
