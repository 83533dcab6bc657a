//! Injected Ethereum Wallet Integration via wasm-bindgen
//!
//! Browser implementations of the dashboard seams:
//! - [`BrowserTransport`]: EIP-1193 `window.ethereum.request`
//! - [`BrowserConnector`]: wallet selection (the injected wallet, MetaMask or compatible)
//! - [`BrowserNotifier`]: `window.alert`

use std::rc::Rc;

use async_trait::async_trait;
use js_sys::Reflect;
use lib_ico::error::ProviderError;
use lib_ico::notify::Notifier;
use lib_ico::provider::{Eip1193Provider, Eip1193Transport, WalletConnector, WalletProvider};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

// ============================================================================
// JAVASCRIPT INTEROP
// ============================================================================

#[wasm_bindgen(inline_js = "
export function hasEthereum() {
    return typeof window !== 'undefined' && typeof window.ethereum !== 'undefined';
}

export async function ethereumRequest(method, params) {
    if (!window.ethereum) {
        throw new Error('No injected Ethereum wallet found');
    }
    try {
        const result = await window.ethereum.request({ method, params });
        return result === undefined ? null : result;
    } catch (error) {
        // Keep the EIP-1193 code so rejections (4001) can be told apart
        const code = error && typeof error.code === 'number' ? error.code : undefined;
        const message = error && error.message ? error.message : String(error);
        throw { code, message };
    }
}
")]
extern "C" {
    /// Whether a wallet injected `window.ethereum`
    fn hasEthereum() -> bool;

    /// Forward one JSON-RPC request to the injected wallet
    #[wasm_bindgen(catch)]
    async fn ethereumRequest(method: &str, params: JsValue) -> Result<JsValue, JsValue>;
}

fn provider_error(err: JsValue) -> ProviderError {
    let code = Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|c| c as i64);
    let message = Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));

    match code {
        Some(code) => ProviderError::from_rpc(code, message),
        None => ProviderError::Transport(message),
    }
}

// ============================================================================
// EIP-1193 TRANSPORT
// ============================================================================

/// `window.ethereum` request channel.
#[derive(Clone, Copy, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Eip1193Transport for BrowserTransport {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        let params = params
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| ProviderError::Transport(format!("params for {}: {}", method, e)))?;

        log::debug!("[ETHEREUM] -> {}", method);
        let result = ethereumRequest(method, params).await.map_err(provider_error)?;

        serde_wasm_bindgen::from_value(result)
            .map_err(|e| ProviderError::Decode(format!("{} result: {}", method, e)))
    }

    async fn pause(&self, millis: u32) {
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
}

// ============================================================================
// WALLET SELECTION
// ============================================================================

/// Hands out a provider bound to the injected wallet.
///
/// The account prompt appears on the first `eth_requestAccounts`, which the
/// dashboard issues when it derives the signer.
pub struct BrowserConnector {
    poll_interval_ms: u32,
}

impl BrowserConnector {
    pub fn new(poll_interval_ms: u32) -> Self {
        Self { poll_interval_ms }
    }
}

#[async_trait(?Send)]
impl WalletConnector for BrowserConnector {
    async fn connect(&self) -> Result<Rc<dyn WalletProvider>, ProviderError> {
        if !hasEthereum() {
            return Err(ProviderError::Unavailable(
                "install MetaMask or another injected wallet".to_string(),
            ));
        }
        Ok(Rc::new(Eip1193Provider::new(
            BrowserTransport,
            self.poll_interval_ms,
        )))
    }
}

// ============================================================================
// NOTICES
// ============================================================================

/// Blocking browser alert.
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        let shown = web_sys::window().map(|w| w.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            log::warn!("[ALERT] could not show alert: {}", message);
        }
    }
}
