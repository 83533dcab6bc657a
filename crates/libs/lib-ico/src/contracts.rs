//! # Contract Handles
//!
//! Typed wrappers binding a contract address to a provider. Reads decode the
//! ABI return value; writes hand back a [`PendingTransaction`] so the caller
//! decides when to block on confirmation.

use std::rc::Rc;

use alloy_primitives::{Address, Bytes, TxHash, U256};
use alloy_sol_types::SolCall;

use crate::abi::{ICryptoDevToken, ICryptoDevs};
use crate::error::ContractError;
use crate::provider::{TransactionReceipt, TransactionRequest, WalletProvider};

async fn read<C: SolCall>(
    provider: &dyn WalletProvider,
    to: Address,
    call: C,
) -> Result<C::Return, ContractError> {
    let output = provider.call(to, Bytes::from(call.abi_encode())).await?;
    C::abi_decode_returns(&output).map_err(|e| ContractError::Abi(format!("{}: {}", C::SIGNATURE, e)))
}

async fn write<C: SolCall>(
    provider: &Rc<dyn WalletProvider>,
    from: Address,
    to: Address,
    call: C,
    value: U256,
) -> Result<PendingTransaction, ContractError> {
    let tx = TransactionRequest {
        from,
        to,
        data: Bytes::from(call.abi_encode()),
        value,
    };
    let hash = provider.send_transaction(tx).await?;
    Ok(PendingTransaction {
        hash,
        provider: Rc::clone(provider),
    })
}

/// Submitted, not yet confirmed transaction.
pub struct PendingTransaction {
    hash: TxHash,
    provider: Rc<dyn WalletProvider>,
}

impl PendingTransaction {
    pub fn hash(&self) -> TxHash {
        self.hash
    }

    /// Wait for one confirmation; a failed status becomes [`ContractError::Reverted`].
    pub async fn confirm(self) -> Result<TransactionReceipt, ContractError> {
        let receipt = self.provider.wait_for_confirmation(self.hash, 1).await?;
        if !receipt.status {
            return Err(ContractError::Reverted(self.hash));
        }
        Ok(receipt)
    }
}

/// Read-only handle on the collectible contract.
pub struct NftContract {
    address: Address,
    provider: Rc<dyn WalletProvider>,
}

impl NftContract {
    pub fn new(address: Address, provider: Rc<dyn WalletProvider>) -> Self {
        Self { address, provider }
    }

    pub async fn balance_of(&self, owner: Address) -> Result<U256, ContractError> {
        read(
            self.provider.as_ref(),
            self.address,
            ICryptoDevs::balanceOfCall { owner },
        )
        .await
    }

    pub async fn token_of_owner_by_index(
        &self,
        owner: Address,
        index: U256,
    ) -> Result<U256, ContractError> {
        read(
            self.provider.as_ref(),
            self.address,
            ICryptoDevs::tokenOfOwnerByIndexCall { owner, index },
        )
        .await
    }
}

/// Handle on the token contract.
pub struct TokenContract {
    address: Address,
    provider: Rc<dyn WalletProvider>,
}

impl TokenContract {
    pub fn new(address: Address, provider: Rc<dyn WalletProvider>) -> Self {
        Self { address, provider }
    }

    /// Whether collectible `token_id` was already redeemed.
    pub async fn token_ids_claimed(&self, token_id: U256) -> Result<bool, ContractError> {
        read(
            self.provider.as_ref(),
            self.address,
            ICryptoDevToken::tokenIdsClaimedCall { tokenId: token_id },
        )
        .await
    }

    pub async fn balance_of(&self, account: Address) -> Result<U256, ContractError> {
        read(
            self.provider.as_ref(),
            self.address,
            ICryptoDevToken::balanceOfCall { account },
        )
        .await
    }

    pub async fn total_supply(&self) -> Result<U256, ContractError> {
        read(
            self.provider.as_ref(),
            self.address,
            ICryptoDevToken::totalSupplyCall {},
        )
        .await
    }

    /// Mint `amount` whole tokens, paying `value` wei.
    pub async fn mint(
        &self,
        from: Address,
        amount: U256,
        value: U256,
    ) -> Result<PendingTransaction, ContractError> {
        write(
            &self.provider,
            from,
            self.address,
            ICryptoDevToken::mintCall { amount },
            value,
        )
        .await
    }

    /// Claim tokens for every unclaimed collectible `from` owns.
    pub async fn claim(&self, from: Address) -> Result<PendingTransaction, ContractError> {
        write(
            &self.provider,
            from,
            self.address,
            ICryptoDevToken::claimCall {},
            U256::ZERO,
        )
        .await
    }
}
