//! Navigation Bar Component

use leptos::prelude::*;
use shared::truncate_address;

use crate::state::dashboard::use_dashboard_context;
use crate::utils::constants::BRAND;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_dashboard_context();
    let account = move || {
        ctx.state
            .with(|state| state.account.map(|a| truncate_address(&a.to_string())))
    };

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <span class="nav-title">{BRAND}</span>
                <Show when=move || account().is_some()>
                    <span class="nav-account">{move || account().unwrap_or_default()}</span>
                </Show>
            </div>
        </nav>
    }
}
