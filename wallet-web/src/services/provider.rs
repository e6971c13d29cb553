//! Wallet provider gateway.
//!
//! The injected browser extension is the only external collaborator of
//! this app. `WalletGateway` is the seam between the UI and that
//! extension: the production implementation wraps `window.ethereum`
//! ([`crate::services::injected`]), and tests substitute a mock.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from provider gateway operations.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("no injected wallet provider found")]
    Unavailable,
    #[error("the user rejected the request")]
    Rejected,
    #[error("provider error: {0}")]
    Rpc(String),
    #[error("interop error: {0}")]
    Interop(String),
}

/// Result alias for gateway operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Callback invoked when the set of authorized accounts changes externally.
pub type AccountsChangedCallback = Box<dyn Fn(Vec<String>)>;

/// Capabilities this app needs from a wallet provider.
///
/// Futures run on the browser event loop and are not `Send`.
#[async_trait(?Send)]
pub trait WalletGateway {
    /// Whether an injected provider is present at all.
    fn available(&self) -> bool;

    /// Ask the user for account access (`eth_requestAccounts`). Resolves
    /// to the authorized accounts, active account first.
    async fn request_accounts(&self) -> Result<Vec<String>>;

    /// Silently query already-authorized accounts (`eth_accounts`).
    /// Never prompts; resolves to an empty list when nothing is
    /// authorized.
    async fn accounts(&self) -> Result<Vec<String>>;

    /// Current balance of `address` in wei (`eth_getBalance`, latest
    /// block).
    async fn balance_of(&self, address: &str) -> Result<u128>;

    /// Submit a native-currency transfer (`eth_sendTransaction`).
    /// Resolves to the transaction hash once the wallet has signed and
    /// broadcast it.
    async fn send_value(&self, from: &str, to: &str, wei: u128) -> Result<String>;

    /// Register `callback` for external account changes. An empty
    /// account list means the user disconnected the site.
    fn subscribe_accounts_changed(&self, callback: AccountsChangedCallback);
}
