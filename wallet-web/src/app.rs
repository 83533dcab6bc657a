//! Crypto Devs ICO Web App - Leptos Frontend
//!
//! Loads the build-time configuration and mounts the dashboard, or explains
//! why it cannot.

use leptos::prelude::*;
use lib_ico::IcoConfig;

use crate::components::{Footer, Navbar};
use crate::pages::{ConfigErrorPage, HomePage};
use crate::state::dashboard::provide_dashboard_context;

#[component]
pub fn App() -> impl IntoView {
    match IcoConfig::from_build_env() {
        Ok(config) => {
            log::info!(
                "[APP] Dashboard for chain {} ({}), token {}",
                config.chain_id,
                config.network_name,
                config.token_contract
            );
            provide_dashboard_context(config);

            view! {
                <div class="app-container">
                    <Navbar/>
                    <HomePage/>
                    <Footer/>
                </div>
            }
            .into_any()
        }
        Err(error) => {
            log::error!("[APP] Invalid configuration: {}", error);
            view! {
                <div class="app-container">
                    <ConfigErrorPage error=error/>
                </div>
            }
            .into_any()
        }
    }
}
