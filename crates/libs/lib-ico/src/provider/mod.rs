//! # Wallet Provider Abstraction
//!
//! The dashboard never talks to a wallet directly. It goes through two seams:
//!
//! - [`WalletConnector`]: the wallet-selection facility. Each `connect` hands
//!   back a provider; the first one triggers the extension's prompt.
//! - [`WalletProvider`]: network identity, accounts, read calls, transaction
//!   submission and confirmation.
//!
//! The browser implements both on top of `window.ethereum` through
//! [`Eip1193Provider`]; tests implement them with in-memory fakes.
//!
//! All traits are `?Send`: the page is single-threaded and browser futures
//! cannot cross threads.

mod eip1193;

use std::rc::Rc;

use alloy_primitives::{Address, Bytes, TxHash, U256};
use async_trait::async_trait;
use serde::Serialize;

use crate::error::ProviderError;

pub use eip1193::{Eip1193Provider, Eip1193Transport};

/// Transaction handed to the wallet for signing and submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub from: Address,
    pub to: Address,
    pub data: Bytes,
    pub value: U256,
}

/// Mined transaction outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub transaction_hash: TxHash,
    pub block_number: u64,
    /// `true` when execution succeeded
    pub status: bool,
}

/// Provider handle for one chain connection.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Chain the wallet is currently on
    async fn chain_id(&self) -> Result<u64, ProviderError>;

    /// Accounts the user exposed to the page, prompting if needed
    async fn accounts(&self) -> Result<Vec<Address>, ProviderError>;

    /// Execute a read-only call against the latest block
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, ProviderError>;

    /// Sign and broadcast a transaction, returning its hash
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, ProviderError>;

    /// Block until `hash` is mined with at least `confirmations` confirmations.
    ///
    /// There is no timeout.
    async fn wait_for_confirmation(
        &self,
        hash: TxHash,
        confirmations: u64,
    ) -> Result<TransactionReceipt, ProviderError>;
}

/// Wallet-selection facility.
#[async_trait(?Send)]
pub trait WalletConnector {
    async fn connect(&self) -> Result<Rc<dyn WalletProvider>, ProviderError>;
}
