//! # Crypto Devs ICO Dashboard Core
//!
//! Platform-independent core of the claim/mint page. The browser crate plugs
//! in a wallet connector, a notifier and a renderer; everything else lives here.
//!
//! ## Modules
//!
//! - **[`config`]**: contract addresses and sale constants
//! - **[`error`]**: layered error types
//! - **[`abi`]**: Solidity bindings for both contracts
//! - **[`provider`]**: wallet seams and the EIP-1193 JSON-RPC provider
//! - **[`contracts`]**: typed contract handles
//! - **[`dashboard`]**: reads, writes and view state
//! - **[`session`]**: page lifetime and one-shot initialization
//! - **[`view`]**: render state machine
//! - **[`notify`]**: user-visible notices
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::rc::Rc;
//! use lib_ico::{IcoConfig, Session};
//! # use lib_ico::{notify::Notifier, provider::WalletConnector};
//! # fn connector() -> Rc<dyn WalletConnector> { unimplemented!() }
//! # struct Alert;
//! # impl Notifier for Alert { fn alert(&self, _: &str) {} }
//! # async fn run() -> Result<(), lib_ico::error::ConfigError> {
//! let config = IcoConfig::from_env()?;
//! let session = Session::new(config, Rc::new(Alert), connector);
//!
//! session.initialize().await;
//! let view = session.dashboard().view();
//! # Ok(())
//! # }
//! ```

pub mod abi;
pub mod config;
pub mod contracts;
pub mod dashboard;
pub mod error;
pub mod notify;
pub mod provider;
pub mod session;
pub mod view;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::IcoConfig;
pub use dashboard::{Dashboard, DashboardState};
pub use error::{DashboardError, Result};
pub use session::Session;
pub use view::{ActionPanel, DashboardView};
