//! # Dashboard Configuration
//!
//! Contract addresses and sale constants. In the browser they are baked in at
//! compile time ([`IcoConfig::from_build_env`]); native tools read the process
//! environment ([`IcoConfig::from_env`]). Both paths share the same parsing and
//! validation so a bad value fails fast in either.
//!
//! | Variable | Default |
//! |---|---|
//! | `ICO_CHAIN_ID` | `4` |
//! | `ICO_NETWORK_NAME` | `Rinkeby` |
//! | `ICO_NFT_CONTRACT_ADDRESS` | required |
//! | `ICO_TOKEN_CONTRACT_ADDRESS` | required |
//! | `ICO_PRICE_PER_TOKEN` | `0.001` (ether) |
//! | `ICO_TOKEN_DECIMALS` | `18` |
//! | `ICO_MAX_SUPPLY` | `10000` |
//! | `ICO_TOKENS_PER_NFT` | `10` |
//! | `ICO_POLL_INTERVAL_MS` | `1000` |

use std::str::FromStr;

use alloy_primitives::{Address, U256};

use crate::error::ConfigError;

pub const DEFAULT_CHAIN_ID: u64 = 4;
pub const DEFAULT_NETWORK_NAME: &str = "Rinkeby";
pub const DEFAULT_PRICE_PER_TOKEN: &str = "0.001";
pub const DEFAULT_TOKEN_DECIMALS: u8 = 18;
pub const DEFAULT_MAX_SUPPLY: u64 = 10_000;
pub const DEFAULT_TOKENS_PER_NFT: u64 = 10;
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 1_000;

const CHAIN_ID: &str = "ICO_CHAIN_ID";
const NETWORK_NAME: &str = "ICO_NETWORK_NAME";
const NFT_CONTRACT: &str = "ICO_NFT_CONTRACT_ADDRESS";
const TOKEN_CONTRACT: &str = "ICO_TOKEN_CONTRACT_ADDRESS";
const PRICE_PER_TOKEN: &str = "ICO_PRICE_PER_TOKEN";
const TOKEN_DECIMALS: &str = "ICO_TOKEN_DECIMALS";
const MAX_SUPPLY: &str = "ICO_MAX_SUPPLY";
const TOKENS_PER_NFT: &str = "ICO_TOKENS_PER_NFT";
const POLL_INTERVAL_MS: &str = "ICO_POLL_INTERVAL_MS";

/// Sale and network configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IcoConfig {
    /// Chain every call must be made on
    pub chain_id: u64,

    /// Human name of that chain, used in the wrong-network alert
    pub network_name: String,

    /// Collectible (ERC-721 enumerable) contract
    pub nft_contract: Address,

    /// Token contract holding the claimed registry, supply and mint
    pub token_contract: Address,

    /// Mint price of one whole token, in wei
    pub price_per_token: U256,

    pub token_decimals: u8,

    /// Supply cap in whole tokens (display only; the contract enforces it)
    pub max_supply: u64,

    /// Tokens granted per unclaimed collectible
    pub tokens_per_nft: u64,

    /// Delay between receipt polls while waiting for a confirmation
    pub poll_interval_ms: u32,
}

impl IcoConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration captured when the crate was compiled.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                CHAIN_ID => option_env!("ICO_CHAIN_ID"),
                NETWORK_NAME => option_env!("ICO_NETWORK_NAME"),
                NFT_CONTRACT => option_env!("ICO_NFT_CONTRACT_ADDRESS"),
                TOKEN_CONTRACT => option_env!("ICO_TOKEN_CONTRACT_ADDRESS"),
                PRICE_PER_TOKEN => option_env!("ICO_PRICE_PER_TOKEN"),
                TOKEN_DECIMALS => option_env!("ICO_TOKEN_DECIMALS"),
                MAX_SUPPLY => option_env!("ICO_MAX_SUPPLY"),
                TOKENS_PER_NFT => option_env!("ICO_TOKENS_PER_NFT"),
                POLL_INTERVAL_MS => option_env!("ICO_POLL_INTERVAL_MS"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Build and validate a configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &'static str| lookup(key).filter(|v| !v.trim().is_empty());

        let price = get(PRICE_PER_TOKEN).unwrap_or_else(|| DEFAULT_PRICE_PER_TOKEN.to_string());
        let price_per_token =
            shared::parse_ether(&price).ok_or(ConfigError::WrongFormat(PRICE_PER_TOKEN))?;

        let config = Self {
            chain_id: parse_or(get(CHAIN_ID), CHAIN_ID, DEFAULT_CHAIN_ID)?,
            network_name: get(NETWORK_NAME).unwrap_or_else(|| DEFAULT_NETWORK_NAME.to_string()),
            nft_contract: parse_required(get(NFT_CONTRACT), NFT_CONTRACT)?,
            token_contract: parse_required(get(TOKEN_CONTRACT), TOKEN_CONTRACT)?,
            price_per_token,
            token_decimals: parse_or(get(TOKEN_DECIMALS), TOKEN_DECIMALS, DEFAULT_TOKEN_DECIMALS)?,
            max_supply: parse_or(get(MAX_SUPPLY), MAX_SUPPLY, DEFAULT_MAX_SUPPLY)?,
            tokens_per_nft: parse_or(get(TOKENS_PER_NFT), TOKENS_PER_NFT, DEFAULT_TOKENS_PER_NFT)?,
            poll_interval_ms: parse_or(
                get(POLL_INTERVAL_MS),
                POLL_INTERVAL_MS,
                DEFAULT_POLL_INTERVAL_MS,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate values the contracts and UI depend on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chain_id == 0 {
            return Err(ConfigError::Invalid("chain id must be non-zero".to_string()));
        }
        if self.nft_contract.is_zero() || self.token_contract.is_zero() {
            return Err(ConfigError::Invalid(
                "contract addresses must be non-zero".to_string(),
            ));
        }
        if self.nft_contract == self.token_contract {
            return Err(ConfigError::Invalid(
                "collectible and token contracts must differ".to_string(),
            ));
        }
        if self.price_per_token.is_zero() {
            return Err(ConfigError::Invalid("price per token must be positive".to_string()));
        }
        if self.tokens_per_nft == 0 {
            return Err(ConfigError::Invalid("tokens per NFT must be positive".to_string()));
        }
        if self.token_decimals > 77 {
            return Err(ConfigError::Invalid("token decimals must fit in 256 bits".to_string()));
        }
        Ok(())
    }

    /// Exact wei value to attach when minting `amount` whole tokens.
    ///
    /// `None` when the product overflows 256 bits.
    pub fn mint_price(&self, amount: U256) -> Option<U256> {
        self.price_per_token.checked_mul(amount)
    }

    /// Alert text shown whenever the wallet is on another chain.
    pub fn wrong_network_message(&self) -> String {
        format!("Change the network to {}", self.network_name)
    }
}

fn parse_or<T: FromStr>(
    value: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::WrongFormat(key)),
        None => Ok(default),
    }
}

fn parse_required<T: FromStr>(value: Option<String>, key: &'static str) -> Result<T, ConfigError> {
    let raw = value.ok_or(ConfigError::MissingEnv(key))?;
    raw.trim().parse().map_err(|_| ConfigError::WrongFormat(key))
}
