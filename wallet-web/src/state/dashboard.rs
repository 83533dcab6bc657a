//! Dashboard state management
//!
//! Bridges the single-threaded [`Session`] into Leptos: every state change the
//! dashboard publishes is mirrored into a signal, and user actions are spawned
//! as local tasks.

use std::rc::Rc;

use leptos::prelude::*;
use lib_ico::provider::WalletConnector;
use lib_ico::view::render;
use lib_ico::{DashboardState, DashboardView, IcoConfig, Session};

use crate::services::ethereum::{BrowserConnector, BrowserNotifier};

/// Global dashboard context
#[derive(Clone, Copy)]
pub struct DashboardContext {
    session: StoredValue<Rc<Session>, LocalStorage>,
    pub state: RwSignal<DashboardState>,
    pub config: StoredValue<IcoConfig>,
    /// Raw text of the amount field
    pub mint_input: RwSignal<String>,
}

impl DashboardContext {
    fn new(config: IcoConfig) -> Self {
        let poll_interval_ms = config.poll_interval_ms;
        let session = Rc::new(Session::new(
            config.clone(),
            Rc::new(BrowserNotifier),
            move || Rc::new(BrowserConnector::new(poll_interval_ms)) as Rc<dyn WalletConnector>,
        ));

        let state = RwSignal::new(session.dashboard().state());
        session
            .dashboard()
            .subscribe(move |next| state.set(next.clone()));

        Self {
            session: StoredValue::new_local(session),
            state,
            config: StoredValue::new(config),
            mint_input: RwSignal::new(String::new()),
        }
    }

    fn session(&self) -> Rc<Session> {
        self.session.get_value()
    }

    pub fn is_connected(&self) -> bool {
        self.state.with(|state| state.connected)
    }

    /// Current render; tracks the state signal.
    pub fn view(&self) -> DashboardView {
        let state = self.state.get();
        self.config.with_value(|config| render(&state, config))
    }

    pub fn set_mint_input(&self, input: String) {
        self.session().dashboard().set_mint_input(&input);
        self.mint_input.set(input);
    }

    /// Connect Wallet button.
    pub fn connect(&self) {
        let session = self.session();
        leptos::task::spawn_local(async move {
            let dashboard = session.dashboard();
            match dashboard.connect_wallet().await {
                Ok(()) => dashboard.refresh_all().await,
                Err(e) => log::warn!("[DASHBOARD] Connect failed: {}", e),
            }
        });
    }

    /// Claim Tokens button.
    pub fn claim(&self) {
        let session = self.session();
        leptos::task::spawn_local(async move {
            match session.dashboard().claim().await {
                Ok(hash) => log::info!("[DASHBOARD] Claim confirmed: {}", hash),
                Err(e) => log::error!("[DASHBOARD] Claim failed: {}", e),
            }
        });
    }

    /// Mint Tokens button; uses the amount currently entered.
    pub fn mint(&self) {
        let session = self.session();
        leptos::task::spawn_local(async move {
            match session.dashboard().mint_entered_amount().await {
                Ok(hash) => log::info!("[DASHBOARD] Mint confirmed: {}", hash),
                Err(e) => log::error!("[DASHBOARD] Mint failed: {}", e),
            }
        });
    }
}

/// Create the session, expose it to the tree and start the one-shot initialization.
pub fn provide_dashboard_context(config: IcoConfig) -> DashboardContext {
    let context = DashboardContext::new(config);
    provide_context(context);

    let session = context.session();
    leptos::task::spawn_local(async move {
        if session.initialize().await {
            log::info!("[DASHBOARD] Session initialized");
        }
    });

    context
}

pub fn use_dashboard_context() -> DashboardContext {
    expect_context::<DashboardContext>()
}
