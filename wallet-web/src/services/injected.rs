//! MetaMask Integration via wasm-bindgen
//!
//! JavaScript interop for the injected EIP-1193 provider
//! (`window.ethereum`). All wallet RPC goes through
//! `ethereum.request({ method, params })`; account-change notifications
//! arrive through `ethereum.on('accountsChanged', ...)`.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use shared::units;

use super::provider::{AccountsChangedCallback, ProviderError, Result, WalletGateway};

// ============================================================================
// INJECTED PROVIDER BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function ethereumAvailable() {
    return typeof window.ethereum !== 'undefined';
}

export async function requestAccounts() {
    return await window.ethereum.request({ method: 'eth_requestAccounts' });
}

export async function listAccounts() {
    return await window.ethereum.request({ method: 'eth_accounts' });
}

export async function getBalance(address) {
    return await window.ethereum.request({
        method: 'eth_getBalance',
        params: [address, 'latest']
    });
}

export async function sendTransaction(from, to, valueHex) {
    return await window.ethereum.request({
        method: 'eth_sendTransaction',
        params: [{ from: from, to: to, value: valueHex }]
    });
}

export function onAccountsChanged(callback) {
    window.ethereum.on('accountsChanged', function (accounts) {
        callback(accounts);
    });
}
")]
extern "C" {
    /// Check if an injected provider is present
    pub fn ethereumAvailable() -> bool;

    /// Request account access (prompts the user on first call)
    #[wasm_bindgen(catch)]
    pub async fn requestAccounts() -> std::result::Result<JsValue, JsValue>;

    /// Query already-authorized accounts without prompting
    #[wasm_bindgen(catch)]
    pub async fn listAccounts() -> std::result::Result<JsValue, JsValue>;

    /// Query the wei balance of an address as a hex quantity
    #[wasm_bindgen(catch)]
    pub async fn getBalance(address: &str) -> std::result::Result<JsValue, JsValue>;

    /// Submit a value transfer; resolves to the transaction hash
    #[wasm_bindgen(catch)]
    pub async fn sendTransaction(
        from: &str,
        to: &str,
        value_hex: &str,
    ) -> std::result::Result<JsValue, JsValue>;

    /// Register a listener for external account changes
    pub fn onAccountsChanged(callback: &js_sys::Function);
}

/// Map a provider rejection (`{ code, message }` per EIP-1193) to
/// [`ProviderError`]. Code 4001 is the user pressing "Reject".
fn decode_provider_error(value: JsValue) -> ProviderError {
    let code = js_sys::Reflect::get(&value, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64());
    if code == Some(4001.0) {
        return ProviderError::Rejected;
    }

    let message = js_sys::Reflect::get(&value, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string());
    match message.or_else(|| value.as_string()) {
        Some(message) => ProviderError::Rpc(message),
        None => ProviderError::Interop(format!("{value:?}")),
    }
}

fn decode_accounts(value: JsValue) -> Result<Vec<String>> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| ProviderError::Interop(format!("account list: {e}")))
}

// ============================================================================
// GATEWAY IMPLEMENTATION
// ============================================================================

/// The production [`WalletGateway`]: `window.ethereum` behind the trait.
pub struct InjectedEthereum;

impl InjectedEthereum {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InjectedEthereum {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl WalletGateway for InjectedEthereum {
    fn available(&self) -> bool {
        ethereumAvailable()
    }

    async fn request_accounts(&self) -> Result<Vec<String>> {
        if !ethereumAvailable() {
            return Err(ProviderError::Unavailable);
        }
        let accounts = requestAccounts().await.map_err(decode_provider_error)?;
        decode_accounts(accounts)
    }

    async fn accounts(&self) -> Result<Vec<String>> {
        if !ethereumAvailable() {
            return Err(ProviderError::Unavailable);
        }
        let accounts = listAccounts().await.map_err(decode_provider_error)?;
        decode_accounts(accounts)
    }

    async fn balance_of(&self, address: &str) -> Result<u128> {
        if !ethereumAvailable() {
            return Err(ProviderError::Unavailable);
        }
        let quantity = getBalance(address).await.map_err(decode_provider_error)?;
        let quantity = quantity
            .as_string()
            .ok_or_else(|| ProviderError::Interop("balance is not a string".to_string()))?;
        units::parse_quantity(&quantity)
            .map_err(|e| ProviderError::Interop(format!("balance {quantity:?}: {e}")))
    }

    async fn send_value(&self, from: &str, to: &str, wei: u128) -> Result<String> {
        if !ethereumAvailable() {
            return Err(ProviderError::Unavailable);
        }
        let value_hex = units::to_quantity(wei);
        let hash = sendTransaction(from, to, &value_hex)
            .await
            .map_err(decode_provider_error)?;
        hash.as_string()
            .ok_or_else(|| ProviderError::Interop("transaction hash is not a string".to_string()))
    }

    fn subscribe_accounts_changed(&self, callback: AccountsChangedCallback) {
        if !ethereumAvailable() {
            return;
        }
        let closure = Closure::<dyn Fn(JsValue)>::new(move |accounts: JsValue| {
            let accounts: Vec<String> = serde_wasm_bindgen::from_value(accounts).unwrap_or_default();
            callback(accounts);
        });
        onAccountsChanged(closure.as_ref().unchecked_ref());
        // The listener lives for the lifetime of the page
        closure.forget();
    }
}
