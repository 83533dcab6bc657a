//! # Render State Machine
//!
//! Pure mapping from [`DashboardState`] to what the page shows. Re-evaluated on
//! every render; it keeps no history.
//!
//! | connected | loading | claimable | panel |
//! |---|---|---|---|
//! | no | - | - | [`ActionPanel::ConnectWallet`] |
//! | yes | yes | - | [`ActionPanel::Loading`] |
//! | yes | no | > 0 | [`ActionPanel::Claim`] |
//! | yes | no | 0 | [`ActionPanel::Mint`] |

use alloy_primitives::U256;
use shared::format_units;

use crate::config::IcoConfig;
use crate::dashboard::DashboardState;

/// The single action area of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionPanel {
    ConnectWallet,
    Loading,
    Claim {
        /// Tokens the claim will grant (claimable count times tokens per NFT)
        claimable_tokens: U256,
    },
    Mint {
        /// The entered amount is a positive integer
        enabled: bool,
    },
}

impl ActionPanel {
    pub fn claim_message(claimable_tokens: U256) -> String {
        format!("{} Tokens can be claimed!", claimable_tokens)
    }
}

/// Everything the page needs for one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardView {
    /// "You have minted ..." line; only while connected
    pub balance_line: Option<String>,
    /// "Overall .../10000 have been minted!!!" line; only while connected
    pub supply_line: Option<String>,
    pub panel: ActionPanel,
}

pub fn render(state: &DashboardState, config: &IcoConfig) -> DashboardView {
    if !state.connected {
        return DashboardView {
            balance_line: None,
            supply_line: None,
            panel: ActionPanel::ConnectWallet,
        };
    }

    let balance_line = format!(
        "You have minted {} Crypto Dev Tokens",
        format_units(state.token_balance, config.token_decimals)
    );
    let supply_line = format!(
        "Overall {}/{} have been minted!!!",
        format_units(state.total_minted, config.token_decimals),
        config.max_supply
    );

    let panel = if state.loading {
        ActionPanel::Loading
    } else if !state.claimable.is_zero() {
        ActionPanel::Claim {
            claimable_tokens: state
                .claimable
                .saturating_mul(U256::from(config.tokens_per_nft)),
        }
    } else {
        ActionPanel::Mint {
            enabled: state.mint_amount.is_some_and(|amount| !amount.is_zero()),
        }
    };

    DashboardView {
        balance_line: Some(balance_line),
        supply_line: Some(supply_line),
        panel,
    }
}

/// Parse the mint amount input.
///
/// Accepts only a positive whole number (surrounding whitespace ignored).
pub fn parse_mint_amount(input: &str) -> Option<U256> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    U256::from_str_radix(input, 10)
        .ok()
        .filter(|amount| !amount.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Address;

    fn config() -> IcoConfig {
        IcoConfig {
            chain_id: 4,
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

    fn connected() -> DashboardState {
        DashboardState {
            connected: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_disconnected_shows_connect_only() {
        let view = render(&DashboardState::default(), &config());
        assert_eq!(view.panel, ActionPanel::ConnectWallet);
        assert_eq!(view.balance_line, None);
        assert_eq!(view.supply_line, None);
    }

    #[test]
    fn test_loading_hides_actions() {
        let state = DashboardState {
            loading: true,
            claimable: U256::from(3u8),
            ..connected()
        };
        assert_eq!(render(&state, &config()).panel, ActionPanel::Loading);
    }

    #[test]
    fn test_claim_offered_when_claimable() {
        let state = DashboardState {
            claimable: U256::from(2u8),
            mint_amount: Some(U256::from(5u8)),
            ..connected()
        };
        let view = render(&state, &config());
        assert_eq!(
            view.panel,
            ActionPanel::Claim {
                claimable_tokens: U256::from(20u8)
            }
        );
        assert_eq!(
            ActionPanel::claim_message(U256::from(20u8)),
            "20 Tokens can be claimed!"
        );
    }

    #[test]
    fn test_mint_enabled_only_for_positive_amount() {
        let none = render(&connected(), &config());
        assert_eq!(none.panel, ActionPanel::Mint { enabled: false });

        let state = DashboardState {
            mint_amount: parse_mint_amount("0"),
            ..connected()
        };
        assert_eq!(render(&state, &config()).panel, ActionPanel::Mint { enabled: false });

        let state = DashboardState {
            mint_amount: parse_mint_amount("5"),
            ..connected()
        };
        assert_eq!(render(&state, &config()).panel, ActionPanel::Mint { enabled: true });
    }

    #[test]
    fn test_connected_lines() {
        let state = DashboardState {
            token_balance: shared::parse_ether("20").unwrap(),
            total_minted: shared::parse_ether("1234.5").unwrap(),
            ..connected()
        };
        let view = render(&state, &config());
        assert_eq!(
            view.balance_line.as_deref(),
            Some("You have minted 20.0 Crypto Dev Tokens")
        );
        assert_eq!(
            view.supply_line.as_deref(),
            Some("Overall 1234.5/10000 have been minted!!!")
        );
    }

    #[test]
    fn test_parse_mint_amount() {
        assert_eq!(parse_mint_amount("5"), Some(U256::from(5u8)));
        assert_eq!(parse_mint_amount(" 12 "), Some(U256::from(12u8)));
        assert_eq!(parse_mint_amount("0"), None);
        assert_eq!(parse_mint_amount("000"), None);
        assert_eq!(parse_mint_amount(""), None);
        assert_eq!(parse_mint_amount("-3"), None);
        assert_eq!(parse_mint_amount("1.5"), None);
        assert_eq!(parse_mint_amount("1e3"), None);
        assert_eq!(parse_mint_amount("abc"), None);
    }
}
