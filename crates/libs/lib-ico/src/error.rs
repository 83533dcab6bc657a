//! # Error Types
//!
//! Errors are layered the same way the calls are:
//!
//! - [`ProviderError`]: the wallet provider or its transport failed
//! - [`ContractError`]: a contract call could not be encoded, executed or decoded
//! - [`DashboardError`]: a dashboard operation failed, carrying one of the above
//! - [`ConfigError`]: the build or process environment is misconfigured
//!
//! ## Handling policy
//!
//! | Failure | Surfaced as | Effect |
//! |---|---|---|
//! | wrong network | [`DashboardError::WrongNetwork`] | alert shown, operation aborted |
//! | connect rejected | [`DashboardError::Connection`] | logged, stays disconnected |
//! | read failed | [`DashboardError::Read`] | logged, last-known value kept |
//! | write failed | [`DashboardError::Write`] | logged, loading flag cleared |
//!
//! Nothing is retried; the user re-attempts from the page.

use alloy_primitives::TxHash;
use thiserror::Error;

/// Convenience type alias for `Result<T, DashboardError>`.
pub type Result<T> = std::result::Result<T, DashboardError>;

/// EIP-1193 error code for "user rejected the request".
pub const USER_REJECTED_CODE: i64 = 4001;

/// Failure reported by a wallet provider or its transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// JSON-RPC error object returned by the wallet or node.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The user dismissed the wallet prompt.
    #[error("User rejected the request")]
    UserRejected,

    /// The wallet is unlocked but exposes no account.
    #[error("Wallet returned no accounts")]
    NoAccounts,

    /// No wallet is injected into the page.
    #[error("No wallet provider available: {0}")]
    Unavailable(String),

    /// The response did not have the expected shape.
    #[error("Failed to decode {0}")]
    Decode(String),

    /// The request never reached the provider.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl ProviderError {
    /// Build the error for a JSON-RPC error object, folding the rejection code.
    pub fn from_rpc(code: i64, message: impl Into<String>) -> Self {
        if code == USER_REJECTED_CODE {
            ProviderError::UserRejected
        } else {
            ProviderError::Rpc {
                code,
                message: message.into(),
            }
        }
    }
}

/// Failure of a single contract interaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The call returned data that does not match the ABI.
    #[error("ABI decode error: {0}")]
    Abi(String),

    /// The transaction was mined with a failure status.
    #[error("Transaction {0} reverted")]
    Reverted(TxHash),
}

/// Failure of a dashboard operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// The wallet is on a different chain than the contracts.
    #[error("Wrong network: expected chain {expected}, wallet is on chain {actual}")]
    WrongNetwork { expected: u64, actual: u64 },

    /// An operation ran before the session created its connection helper.
    #[error("Wallet connection helper not initialized")]
    NotInitialized,

    #[error("Wallet connection failed: {0}")]
    Connection(ProviderError),

    #[error("Contract read failed: {0}")]
    Read(ContractError),

    #[error("Transaction failed: {0}")]
    Write(ContractError),

    #[error("Transaction {0} reverted")]
    TransactionReverted(TxHash),

    /// Mint amount is zero.
    #[error("Amount must be a positive whole number of tokens")]
    InvalidAmount,

    /// Price times amount does not fit in 256 bits.
    #[error("Mint price overflow")]
    Arithmetic,
}

impl DashboardError {
    /// Map a failed write, lifting reverts to their own variant.
    pub fn from_write(err: ContractError) -> Self {
        match err {
            ContractError::Reverted(hash) => DashboardError::TransactionReverted(hash),
            other => DashboardError::Write(other),
        }
    }
}

/// Misconfigured environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingEnv(&'static str),

    #[error("{0} has the wrong format")]
    WrongFormat(&'static str),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
