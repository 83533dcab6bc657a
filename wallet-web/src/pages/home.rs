//! ICO Home Page - claim or mint Crypto Dev tokens
//!
//! Single-page layout: heading and totals on the left, hero image on the right.
//! The action area follows the render state machine in [`lib_ico::view`].

use leptos::prelude::*;
use lib_ico::error::ConfigError;
use lib_ico::{ActionPanel, DashboardView};

use crate::state::dashboard::{use_dashboard_context, DashboardContext};
use crate::utils::constants::{AMOUNT_PLACEHOLDER, HERO_IMAGE, PAGE_SUBTITLE, PAGE_TITLE};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_dashboard_context();
    let view_state = Memo::new(move |_| ctx.view());
    // Rebuilding the panel only when its kind changes keeps the amount field focused.
    let panel_kind = Memo::new(move |_| view_state.with(|v| PanelKind::of(&v.panel)));

    view! {
        <div class="main">
            <div>
                <h1 class="title">{PAGE_TITLE}</h1>
                <div class="description">{PAGE_SUBTITLE}</div>

                <Show when=move || ctx.is_connected()>
                    <div>
                        <div class="description">
                            {move || view_state.with(|v| v.balance_line.clone().unwrap_or_default())}
                        </div>
                        <div class="description">
                            {move || view_state.with(|v| v.supply_line.clone().unwrap_or_default())}
                        </div>
                    </div>
                </Show>

                {move || action_panel(ctx, view_state, panel_kind.get())}
            </div>
            <div>
                <img class="image" src=HERO_IMAGE alt="Crypto Devs"/>
            </div>
        </div>
    }
}

/// Which action area is shown, ignoring the data inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PanelKind {
    Connect,
    Loading,
    Claim,
    Mint,
}

impl PanelKind {
    fn of(panel: &ActionPanel) -> Self {
        match panel {
            ActionPanel::ConnectWallet => Self::Connect,
            ActionPanel::Loading => Self::Loading,
            ActionPanel::Claim { .. } => Self::Claim,
            ActionPanel::Mint { .. } => Self::Mint,
        }
    }
}

fn action_panel(ctx: DashboardContext, view_state: Memo<DashboardView>, kind: PanelKind) -> AnyView {
    match kind {
        PanelKind::Connect => view! {
            <button class="button" on:click=move |_| ctx.connect()>
                "Connect your wallet"
            </button>
        }
        .into_any(),

        PanelKind::Loading => view! {
            <div>
                <button class="button" disabled=true>"Loading..."</button>
            </div>
        }
        .into_any(),

        PanelKind::Claim => {
            let message = move || {
                view_state.with(|v| match v.panel {
                    ActionPanel::Claim { claimable_tokens } => {
                        ActionPanel::claim_message(claimable_tokens)
                    }
                    _ => String::new(),
                })
            };
            view! {
                <div style="display: flex-col;">
                    <div class="description">{message}</div>
                    <button class="button" on:click=move |_| ctx.claim()>
                        "Claim Tokens"
                    </button>
                </div>
            }
            .into_any()
        }

        PanelKind::Mint => {
            let disabled =
                move || view_state.with(|v| !matches!(v.panel, ActionPanel::Mint { enabled: true }));
            view! {
                <div style="display: flex-col;">
                    <div>
                        <input
                            type="number"
                            min="1"
                            step="1"
                            class="input"
                            placeholder=AMOUNT_PLACEHOLDER
                            prop:value=move || ctx.mint_input.get()
                            on:input=move |ev| ctx.set_mint_input(event_target_value(&ev))
                        />
                    </div>
                    <button class="button" disabled=disabled on:click=move |_| ctx.mint()>
                        "Mint Tokens"
                    </button>
                </div>
            }
            .into_any()
        }
    }
}

/// Shown instead of the dashboard when the build carries no usable contract configuration.
#[component]
pub fn ConfigErrorPage(error: ConfigError) -> impl IntoView {
    view! {
        <div class="main">
            <div class="card">
                <h1 class="title">"Dashboard unavailable"</h1>
                <p class="description">{error.to_string()}</p>
                <p class="description">
                    "Set ICO_NFT_CONTRACT_ADDRESS and ICO_TOKEN_CONTRACT_ADDRESS when building the page."
                </p>
            </div>
        </div>
    }
}
