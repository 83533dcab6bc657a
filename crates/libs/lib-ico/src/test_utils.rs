//! In-memory chain, connector and notifier used by the unit tests.
//!
//! `FakeChain` decodes calldata with the same `sol!` bindings the contract
//! handles use, so a test exercises the real encoding path end to end.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use alloy_primitives::{Address, Bytes, TxHash, U256};
use alloy_sol_types::{SolInterface, SolValue};
use async_trait::async_trait;

use crate::abi::{ICryptoDevToken, ICryptoDevs};
use crate::config::IcoConfig;
use crate::error::ProviderError;
use crate::notify::Notifier;
use crate::provider::{TransactionReceipt, TransactionRequest, WalletConnector, WalletProvider};

pub const CHAIN_ID: u64 = 4;

pub fn user() -> Address {
    Address::repeat_byte(0xaa)
}

pub fn test_config() -> IcoConfig {
    IcoConfig {
        chain_id: CHAIN_ID,
        network_name: "Rinkeby".to_string(),
        nft_contract: Address::repeat_byte(0x01),
        token_contract: Address::repeat_byte(0x02),
        price_per_token: U256::from(1_000_000_000_000_000u64),
        token_decimals: 18,
        max_supply: 10_000,
        tokens_per_nft: 10,
        poll_interval_ms: 0,
    }
}

/// Whole tokens to smallest units.
pub fn tokens(n: u64) -> U256 {
    U256::from(n) * shared::unit_scale(18)
}

pub struct FakeChain {
    config: IcoConfig,
    pub chain_id: Cell<u64>,
    pub accounts: RefCell<Vec<Address>>,
    pub owned: RefCell<HashMap<Address, Vec<U256>>>,
    pub claimed: RefCell<HashSet<U256>>,
    pub balances: RefCell<HashMap<Address, U256>>,
    pub total_supply: Cell<U256>,
    pub fail_reads: Cell<bool>,
    pub reject_send: Cell<bool>,
    pub revert_next: Cell<bool>,
    pub sent: RefCell<Vec<TransactionRequest>>,
    pub reads: Cell<usize>,
    receipts: RefCell<HashMap<TxHash, TransactionReceipt>>,
    block: Cell<u64>,
}

impl FakeChain {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            config: test_config(),
            chain_id: Cell::new(CHAIN_ID),
            accounts: RefCell::new(vec![user()]),
            owned: RefCell::new(HashMap::new()),
            claimed: RefCell::new(HashSet::new()),
            balances: RefCell::new(HashMap::new()),
            total_supply: Cell::new(U256::ZERO),
            fail_reads: Cell::new(false),
            reject_send: Cell::new(false),
            revert_next: Cell::new(false),
            sent: RefCell::new(Vec::new()),
            reads: Cell::new(0),
            receipts: RefCell::new(HashMap::new()),
            block: Cell::new(100),
        })
    }

    /// Give `owner` the collectibles `ids`, marking `claimed` ones as redeemed.
    pub fn give_nfts(&self, owner: Address, ids: &[u64], claimed: &[u64]) {
        self.owned
            .borrow_mut()
            .insert(owner, ids.iter().map(|id| U256::from(*id)).collect());
        self.claimed
            .borrow_mut()
            .extend(claimed.iter().map(|id| U256::from(*id)));
    }

    pub fn balance(&self, owner: Address) -> U256 {
        self.balances.borrow().get(&owner).copied().unwrap_or_default()
    }

    fn credit(&self, owner: Address, amount: U256) {
        *self.balances.borrow_mut().entry(owner).or_default() += amount;
        self.total_supply.set(self.total_supply.get() + amount);
    }

    fn nft_call(&self, data: &[u8]) -> Result<Vec<u8>, ProviderError> {
        let call = ICryptoDevs::ICryptoDevsCalls::abi_decode(data)
            .map_err(|e| ProviderError::Rpc { code: -32000, message: e.to_string() })?;
        let owned = self.owned.borrow();
        match call {
            ICryptoDevs::ICryptoDevsCalls::balanceOf(c) => {
                let count = owned.get(&c.owner).map_or(0, Vec::len);
                Ok(U256::from(count).abi_encode())
            }
            ICryptoDevs::ICryptoDevsCalls::tokenOfOwnerByIndex(c) => owned
                .get(&c.owner)
                .and_then(|ids| ids.get(c.index.to::<usize>()))
                .map(|id| id.abi_encode())
                .ok_or_else(|| revert("owner index out of bounds")),
        }
    }

    fn token_call(&self, data: &[u8]) -> Result<Vec<u8>, ProviderError> {
        use ICryptoDevToken::ICryptoDevTokenCalls as Calls;

        let call = Calls::abi_decode(data)
            .map_err(|e| ProviderError::Rpc { code: -32000, message: e.to_string() })?;
        match call {
            Calls::tokenIdsClaimed(c) => Ok(self.claimed.borrow().contains(&c.tokenId).abi_encode()),
            Calls::balanceOf(c) => Ok(self.balance(c.account).abi_encode()),
            Calls::totalSupply(_) => Ok(self.total_supply.get().abi_encode()),
            Calls::mint(_) | Calls::claim(_) => Err(revert("state-changing call via eth_call")),
        }
    }

    /// Apply a transaction; `false` when the contract would revert.
    fn execute(&self, tx: &TransactionRequest) -> bool {
        use ICryptoDevToken::ICryptoDevTokenCalls as Calls;

        if tx.to != self.config.token_contract {
            return false;
        }
        match Calls::abi_decode(&tx.data) {
            Ok(Calls::mint(c)) => {
                if tx.value != self.config.price_per_token * c.amount {
                    return false;
                }
                self.credit(tx.from, c.amount * shared::unit_scale(18));
                true
            }
            Ok(Calls::claim(_)) => {
                let ids = self.owned.borrow().get(&tx.from).cloned().unwrap_or_default();
                let mut claimed = self.claimed.borrow_mut();
                let fresh: Vec<U256> = ids.into_iter().filter(|id| !claimed.contains(id)).collect();
                if fresh.is_empty() {
                    return false;
                }
                claimed.extend(fresh.iter().copied());
                drop(claimed);
                self.credit(tx.from, tokens(10 * fresh.len() as u64));
                true
            }
            _ => false,
        }
    }
}

fn revert(reason: &str) -> ProviderError {
    ProviderError::Rpc {
        code: 3,
        message: format!("execution reverted: {}", reason),
    }
}

#[async_trait(?Send)]
impl WalletProvider for FakeChain {
    async fn chain_id(&self) -> Result<u64, ProviderError> {
        Ok(self.chain_id.get())
    }

    async fn accounts(&self) -> Result<Vec<Address>, ProviderError> {
        let accounts = self.accounts.borrow().clone();
        if accounts.is_empty() {
            return Err(ProviderError::UserRejected);
        }
        Ok(accounts)
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, ProviderError> {
        self.reads.set(self.reads.get() + 1);
        if self.fail_reads.get() {
            return Err(ProviderError::Transport("node unreachable".to_string()));
        }
        let output = if to == self.config.nft_contract {
            self.nft_call(&data)?
        } else if to == self.config.token_contract {
            self.token_call(&data)?
        } else {
            Vec::new()
        };
        Ok(Bytes::from(output))
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, ProviderError> {
        if self.reject_send.get() {
            return Err(ProviderError::UserRejected);
        }
        self.sent.borrow_mut().push(tx.clone());

        let status = !self.revert_next.replace(false) && self.execute(&tx);
        let block = self.block.get() + 1;
        self.block.set(block);
        let hash = TxHash::with_last_byte(self.sent.borrow().len() as u8);
        self.receipts.borrow_mut().insert(
            hash,
            TransactionReceipt {
                transaction_hash: hash,
                block_number: block,
                status,
            },
        );
        Ok(hash)
    }

    async fn wait_for_confirmation(
        &self,
        hash: TxHash,
        _confirmations: u64,
    ) -> Result<TransactionReceipt, ProviderError> {
        self.receipts
            .borrow()
            .get(&hash)
            .cloned()
            .ok_or_else(|| ProviderError::Rpc {
                code: -32000,
                message: "unknown transaction".to_string(),
            })
    }
}

/// Connector handing out the same fake chain, optionally refusing.
pub struct FakeConnector {
    pub chain: Rc<FakeChain>,
    pub refuse: Cell<bool>,
    pub connects: Cell<usize>,
}

impl FakeConnector {
    pub fn new(chain: Rc<FakeChain>) -> Rc<Self> {
        Rc::new(Self {
            chain,
            refuse: Cell::new(false),
            connects: Cell::new(0),
        })
    }
}

#[async_trait(?Send)]
impl WalletConnector for FakeConnector {
    async fn connect(&self) -> Result<Rc<dyn WalletProvider>, ProviderError> {
        self.connects.set(self.connects.get() + 1);
        if self.refuse.get() {
            return Err(ProviderError::Unavailable("no injected wallet".to_string()));
        }
        Ok(Rc::clone(&self.chain) as Rc<dyn WalletProvider>)
    }
}

/// Notifier that records every alert.
#[derive(Default)]
pub struct RecordingNotifier {
    pub alerts: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
