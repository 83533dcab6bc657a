//! # Page Session
//!
//! Top-level controller for one page view. It owns the process-scoped
//! connection-helper slot and hands it to the [`Dashboard`] by injection.
//!
//! Initialization is an explicit transition rather than a watcher on the
//! connected flag:
//!
//! ```text
//! Uninitialized --initialize()--> Initialized
//!     (create helper, connect, refresh all reads)
//! ```
//!
//! It fires once, and only while the dashboard is disconnected.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, info};

use crate::config::IcoConfig;
use crate::dashboard::Dashboard;
use crate::notify::Notifier;
use crate::provider::WalletConnector;

/// Holder for the active connection helper.
///
/// Written at initialization, read by every connect attempt.
#[derive(Default)]
pub struct ConnectorSlot {
    current: RefCell<Option<Rc<dyn WalletConnector>>>,
}

impl ConnectorSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Rc<dyn WalletConnector>> {
        self.current.borrow().clone()
    }

    pub fn replace(&self, connector: Rc<dyn WalletConnector>) {
        *self.current.borrow_mut() = Some(connector);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Uninitialized,
    Initialized,
}

type ConnectorFactory = Box<dyn Fn() -> Rc<dyn WalletConnector>>;

pub struct Session {
    slot: Rc<ConnectorSlot>,
    factory: ConnectorFactory,
    dashboard: Rc<Dashboard>,
    phase: Cell<SessionPhase>,
}

impl Session {
    /// Build a session; `factory` creates a fresh connection helper on initialization.
    pub fn new(
        config: IcoConfig,
        notifier: Rc<dyn Notifier>,
        factory: impl Fn() -> Rc<dyn WalletConnector> + 'static,
    ) -> Self {
        let slot = Rc::new(ConnectorSlot::new());
        let dashboard = Rc::new(Dashboard::new(
            Rc::new(config),
            Rc::clone(&slot),
            notifier,
        ));

        Self {
            slot,
            factory: Box::new(factory),
            dashboard,
            phase: Cell::new(SessionPhase::Uninitialized),
        }
    }

    pub fn dashboard(&self) -> Rc<Dashboard> {
        Rc::clone(&self.dashboard)
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase.get()
    }

    /// Run the Disconnected-and-uninitialized transition.
    ///
    /// Returns `false` without side effects if it already ran or the wallet is
    /// connected.
    pub async fn initialize(&self) -> bool {
        if self.phase.get() == SessionPhase::Initialized || self.dashboard.state().connected {
            return false;
        }
        self.phase.set(SessionPhase::Initialized);

        self.slot.replace((self.factory)());
        info!("connection helper created");

        if let Err(e) = self.dashboard.connect_wallet().await {
            debug!(error = %e, "initial connection failed; waiting for the user");
        }
        self.dashboard.refresh_all().await;
        true
    }
}
