//! # Wallet-Connected Token Dashboard
//!
//! Orchestrates the wallet handshake, the three on-chain reads and the two
//! writes, and owns the resulting view state.
//!
//! ## Call shape
//!
//! Every operation resolves its own provider through the injected
//! [`ConnectorSlot`] and re-checks the chain id, so a user who switches
//! networks mid-session is caught on their next action:
//!
//! ```text
//! connector.connect() -> provider.chain_id() == config.chain_id ? -> contract call(s)
//!                                        \-- no: alert + WrongNetwork
//! ```
//!
//! ## Failure policy
//!
//! - Reads log and keep the last-known value.
//! - Writes log; the loading flag is released on every path by [`LoadingGuard`].
//! - Nothing retries.
//!
//! ## Observing state
//!
//! Front ends register a callback with [`Dashboard::subscribe`]; it receives a
//! snapshot after every mutation.

use std::cell::RefCell;
use std::rc::Rc;

use alloy_primitives::{Address, TxHash, U256};
use tracing::{error, info, warn};

use crate::config::IcoConfig;
use crate::contracts::{NftContract, TokenContract};
use crate::error::{DashboardError, ProviderError, Result};
use crate::notify::{Notifier, MINT_SUCCESS_MESSAGE};
use crate::provider::WalletProvider;
use crate::session::ConnectorSlot;
use crate::view::{self, DashboardView};

/// Derived view state for one page lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    /// Set once the wallet handshake succeeds; never cleared
    pub connected: bool,

    /// A submitted transaction is awaiting confirmation
    pub loading: bool,

    /// Owned collectibles not yet redeemed
    pub claimable: U256,

    /// Caller's token balance in smallest units
    pub token_balance: U256,

    /// Global minted supply in smallest units
    pub total_minted: U256,

    /// Whole tokens the user entered to mint; `None` unless a positive integer
    pub mint_amount: Option<U256>,

    /// Last resolved signer address
    pub account: Option<Address>,
}

/// Provider bound to the caller's address.
struct Signer {
    provider: Rc<dyn WalletProvider>,
    address: Address,
}

type Observer = Box<dyn Fn(&DashboardState)>;

pub struct Dashboard {
    config: Rc<IcoConfig>,
    connector: Rc<ConnectorSlot>,
    notifier: Rc<dyn Notifier>,
    state: RefCell<DashboardState>,
    observers: RefCell<Vec<Observer>>,
}

impl Dashboard {
    pub fn new(
        config: Rc<IcoConfig>,
        connector: Rc<ConnectorSlot>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            connector,
            notifier,
            state: RefCell::new(DashboardState::default()),
            observers: RefCell::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &IcoConfig {
        &self.config
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    /// Render the current state.
    pub fn view(&self) -> DashboardView {
        view::render(&self.state.borrow(), &self.config)
    }

    /// Register a callback invoked with a snapshot after every state change.
    pub fn subscribe(&self, observer: impl Fn(&DashboardState) + 'static) {
        self.observers.borrow_mut().push(Box::new(observer));
    }

    /// Record the raw text of the mint amount input.
    pub fn set_mint_input(&self, input: &str) {
        let amount = view::parse_mint_amount(input);
        self.update(|state| state.mint_amount = amount);
    }

    fn update(&self, mutate: impl FnOnce(&mut DashboardState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            mutate(&mut state);
            state.clone()
        };
        for observer in self.observers.borrow().iter() {
            observer(&snapshot);
        }
    }

    fn begin_loading(&self) -> LoadingGuard<'_> {
        self.update(|state| state.loading = true);
        LoadingGuard { dashboard: self }
    }

    // ------------------------------------------------------------------
    // Provider resolution
    // ------------------------------------------------------------------

    async fn resolve_provider(&self) -> Result<Rc<dyn WalletProvider>> {
        let connector = self.connector.get().ok_or(DashboardError::NotInitialized)?;
        let provider = connector
            .connect()
            .await
            .map_err(DashboardError::Connection)?;

        let actual = provider
            .chain_id()
            .await
            .map_err(DashboardError::Connection)?;
        if actual != self.config.chain_id {
            self.notifier.alert(&self.config.wrong_network_message());
            return Err(DashboardError::WrongNetwork {
                expected: self.config.chain_id,
                actual,
            });
        }

        Ok(provider)
    }

    async fn resolve_signer(&self) -> Result<Signer> {
        let provider = self.resolve_provider().await?;
        let address = provider
            .accounts()
            .await
            .map_err(DashboardError::Connection)?
            .into_iter()
            .next()
            .ok_or(DashboardError::Connection(ProviderError::NoAccounts))?;

        if self.state.borrow().account != Some(address) {
            self.update(|state| state.account = Some(address));
        }
        Ok(Signer { provider, address })
    }

    // ------------------------------------------------------------------
    // Connection
    // ------------------------------------------------------------------

    /// Perform the wallet handshake and mark the page connected.
    pub async fn connect_wallet(&self) -> Result<()> {
        match self.resolve_signer().await {
            Ok(signer) => {
                info!(account = %signer.address, "wallet connected");
                self.update(|state| state.connected = true);
                Ok(())
            }
            Err(err) => {
                error!(%err, "wallet connection failed");
                Err(err)
            }
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Count owned collectibles whose tokens were not claimed yet.
    pub async fn compute_claimable(&self) -> Result<U256> {
        match self.count_claimable().await {
            Ok(count) => {
                self.update(|state| state.claimable = count);
                Ok(count)
            }
            Err(err) => {
                warn!(%err, "claimable count unavailable, keeping last value");
                Err(err)
            }
        }
    }

    async fn count_claimable(&self) -> Result<U256> {
        let signer = self.resolve_signer().await?;
        let nft = NftContract::new(self.config.nft_contract, Rc::clone(&signer.provider));
        let token = TokenContract::new(self.config.token_contract, signer.provider);

        let owned = nft
            .balance_of(signer.address)
            .await
            .map_err(DashboardError::Read)?;

        let mut unclaimed = U256::ZERO;
        let mut index = U256::ZERO;
        while index < owned {
            let token_id = nft
                .token_of_owner_by_index(signer.address, index)
                .await
                .map_err(DashboardError::Read)?;
            let claimed = token
                .token_ids_claimed(token_id)
                .await
                .map_err(DashboardError::Read)?;
            if !claimed {
                unclaimed += U256::from(1u8);
            }
            index += U256::from(1u8);
        }

        Ok(unclaimed)
    }

    /// Fetch the caller's token balance.
    pub async fn compute_token_balance(&self) -> Result<U256> {
        let outcome = async {
            let signer = self.resolve_signer().await?;
            TokenContract::new(self.config.token_contract, signer.provider)
                .balance_of(signer.address)
                .await
                .map_err(DashboardError::Read)
        }
        .await;

        match outcome {
            Ok(balance) => {
                self.update(|state| state.token_balance = balance);
                Ok(balance)
            }
            Err(err) => {
                warn!(%err, "token balance unavailable, keeping last value");
                Err(err)
            }
        }
    }

    /// Fetch the global minted supply.
    pub async fn compute_total_minted(&self) -> Result<U256> {
        let outcome = async {
            let provider = self.resolve_provider().await?;
            TokenContract::new(self.config.token_contract, provider)
                .total_supply()
                .await
                .map_err(DashboardError::Read)
        }
        .await;

        match outcome {
            Ok(total) => {
                self.update(|state| state.total_minted = total);
                Ok(total)
            }
            Err(err) => {
                warn!(%err, "total minted unavailable, keeping last value");
                Err(err)
            }
        }
    }

    /// Re-run all three reads in sequence. Failures are logged by each read.
    pub async fn refresh_all(&self) {
        self.compute_token_balance().await.ok();
        self.compute_total_minted().await.ok();
        self.compute_claimable().await.ok();
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    /// Mint `amount` whole tokens at the configured unit price.
    pub async fn mint(&self, amount: U256) -> Result<TxHash> {
        let outcome = self.submit_mint(amount).await;
        if let Err(err) = &outcome {
            error!(%err, %amount, "mint failed");
        }
        outcome
    }

    /// Mint the amount currently held in the input.
    pub async fn mint_entered_amount(&self) -> Result<TxHash> {
        let amount = self
            .state
            .borrow()
            .mint_amount
            .ok_or(DashboardError::InvalidAmount)?;
        self.mint(amount).await
    }

    async fn submit_mint(&self, amount: U256) -> Result<TxHash> {
        if amount.is_zero() {
            return Err(DashboardError::InvalidAmount);
        }
        let value = self
            .config
            .mint_price(amount)
            .ok_or(DashboardError::Arithmetic)?;

        let signer = self.resolve_signer().await?;
        let pending = TokenContract::new(self.config.token_contract, signer.provider)
            .mint(signer.address, amount, value)
            .await
            .map_err(DashboardError::Write)?;
        let hash = pending.hash();
        info!(tx = %hash, %amount, %value, "mint submitted");

        {
            let _loading = self.begin_loading();
            pending.confirm().await.map_err(DashboardError::from_write)?;
        }
        info!(tx = %hash, "mint confirmed");

        self.notifier.alert(MINT_SUCCESS_MESSAGE);
        self.refresh_all().await;
        Ok(hash)
    }

    /// Claim tokens for every unclaimed collectible the caller owns.
    pub async fn claim(&self) -> Result<TxHash> {
        let outcome = self.submit_claim().await;
        if let Err(err) = &outcome {
            error!(%err, "claim failed");
        }
        outcome
    }

    async fn submit_claim(&self) -> Result<TxHash> {
        let signer = self.resolve_signer().await?;
        let pending = TokenContract::new(self.config.token_contract, signer.provider)
            .claim(signer.address)
            .await
            .map_err(DashboardError::Write)?;
        let hash = pending.hash();
        info!(tx = %hash, "claim submitted");

        {
            let _loading = self.begin_loading();
            pending.confirm().await.map_err(DashboardError::from_write)?;
        }
        info!(tx = %hash, "claim confirmed");

        self.refresh_all().await;
        Ok(hash)
    }
}

/// Clears the loading flag when dropped, whichever way the write ends.
struct LoadingGuard<'a> {
    dashboard: &'a Dashboard,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.dashboard.update(|state| state.loading = false);
    }
}
