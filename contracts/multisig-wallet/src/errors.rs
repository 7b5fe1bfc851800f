use soroban_sdk::contracterror;

/// Errors returned by the multisig wallet entry points.
///
/// Every error aborts the invocation, so storage writes and events made
/// before the error are discarded. A failed downstream call is not an
/// error: it is reported through `ExecutionFailureEvent`.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    /// Owner list empty or duplicated, or quorum outside `1..=owners`
    InvalidConfiguration = 1,
    /// `initialize` was already called
    AlreadyInitialized = 2,
    /// Wallet has not been initialized
    NotInitialized = 3,
    /// Caller is not an owner
    Unauthorized = 4,
    /// No transaction was ever submitted under this id
    TransactionNotFound = 5,
    /// Caller already confirmed this transaction
    AlreadyConfirmed = 6,
    /// Transaction was already executed
    AlreadyExecuted = 7,
    /// Negative amount
    InvalidAmount = 8,
    /// Transaction counter overflow
    Overflow = 9,
}
