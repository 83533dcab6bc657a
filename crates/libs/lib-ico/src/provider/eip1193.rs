//! [`WalletProvider`] over any EIP-1193 `request({ method, params })` endpoint.

use alloy_primitives::{Address, Bytes, TxHash, U64};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::{TransactionReceipt, TransactionRequest, WalletProvider};
use crate::error::ProviderError;

/// Raw EIP-1193 request channel.
#[async_trait(?Send)]
pub trait Eip1193Transport {
    /// Send one JSON-RPC request and return its `result`.
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError>;

    /// Sleep between receipt polls.
    async fn pause(&self, millis: u32);
}

/// JSON-RPC wallet provider.
pub struct Eip1193Provider<T> {
    transport: T,
    poll_interval_ms: u32,
}

impl<T: Eip1193Transport> Eip1193Provider<T> {
    pub fn new(transport: T, poll_interval_ms: u32) -> Self {
        Self {
            transport,
            poll_interval_ms,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn request_as<R: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<R, ProviderError> {
        let value = self.transport.request(method, params).await?;
        serde_json::from_value(value)
            .map_err(|e| ProviderError::Decode(format!("{} response: {}", method, e)))
    }

    async fn receipt(&self, hash: TxHash) -> Result<Option<TransactionReceipt>, ProviderError> {
        let receipt: Option<RpcReceipt> = self
            .request_as("eth_getTransactionReceipt", json!([hash]))
            .await?;
        Ok(receipt.map(TransactionReceipt::from))
    }

    async fn block_number(&self) -> Result<u64, ProviderError> {
        let head: U64 = self.request_as("eth_blockNumber", json!([])).await?;
        Ok(head.to())
    }
}

#[async_trait(?Send)]
impl<T: Eip1193Transport> WalletProvider for Eip1193Provider<T> {
    async fn chain_id(&self) -> Result<u64, ProviderError> {
        let chain: U64 = self.request_as("eth_chainId", json!([])).await?;
        Ok(chain.to())
    }

    async fn accounts(&self) -> Result<Vec<Address>, ProviderError> {
        self.request_as("eth_requestAccounts", json!([])).await
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, ProviderError> {
        self.request_as("eth_call", json!([{ "to": to, "data": data }, "latest"]))
            .await
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, ProviderError> {
        self.request_as("eth_sendTransaction", json!([tx])).await
    }

    async fn wait_for_confirmation(
        &self,
        hash: TxHash,
        confirmations: u64,
    ) -> Result<TransactionReceipt, ProviderError> {
        loop {
            if let Some(receipt) = self.receipt(hash).await? {
                if confirmations <= 1 {
                    return Ok(receipt);
                }
                let head = self.block_number().await?;
                if head + 1 >= receipt.block_number + confirmations {
                    return Ok(receipt);
                }
            }
            debug!(%hash, "transaction not yet confirmed");
            self.transport.pause(self.poll_interval_ms).await;
        }
    }
}

/// `eth_getTransactionReceipt` result, reduced to the fields the dashboard reads.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RpcReceipt {
    transaction_hash: TxHash,
    block_number: U64,
    /// Absent on pre-Byzantium receipts
    status: Option<U64>,
}

impl From<RpcReceipt> for TransactionReceipt {
    fn from(receipt: RpcReceipt) -> Self {
        Self {
            transaction_hash: receipt.transaction_hash,
            block_number: receipt.block_number.to(),
            status: receipt.status.map_or(true, |status| status == U64::from(1)),
        }
    }
}
