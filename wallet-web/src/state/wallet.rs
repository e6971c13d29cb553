//! Wallet session state management

use leptos::prelude::*;

use crate::services::session::ConnectedAccount;

/// Connection state of the wallet session.
///
/// Address and balance only exist on the `Connected` variant, so a
/// disconnected session structurally cannot carry stale account data.
/// `balance` is `None` while the initial fetch is in flight or after a
/// failed fetch with nothing previously displayed.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    Disconnected,
    Connecting,
    Connected {
        address: String,
        balance: Option<String>,
    },
}

impl SessionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, SessionState::Connected { .. })
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, SessionState::Connecting)
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            SessionState::Connected { address, .. } => Some(address),
            _ => None,
        }
    }

    pub fn balance(&self) -> Option<&str> {
        match self {
            SessionState::Connected {
                balance: Some(balance),
                ..
            } => Some(balance),
            _ => None,
        }
    }
}

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub session: RwSignal<SessionState>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(SessionState::Disconnected),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.session.with(|state| state.is_connected())
    }

    pub fn is_connecting(&self) -> bool {
        self.session.with(|state| state.is_connecting())
    }

    pub fn address(&self) -> Option<String> {
        self.session.with(|state| state.address().map(String::from))
    }

    pub fn balance(&self) -> Option<String> {
        self.session.with(|state| state.balance().map(String::from))
    }

    pub fn set_connecting(&self) {
        self.session.set(SessionState::Connecting);
    }

    pub fn set_connected(&self, account: ConnectedAccount) {
        self.session.set(SessionState::Connected {
            address: account.address,
            balance: account.balance,
        });
    }

    /// Replace the displayed balance. No-op unless connected; a refresh
    /// racing a disconnect must not resurrect account data.
    pub fn set_balance(&self, new_balance: String) {
        self.session.update(|state| {
            if let SessionState::Connected { balance, .. } = state {
                *balance = Some(new_balance);
            }
        });
    }

    pub fn disconnect(&self) {
        self.session.set(SessionState::Disconnected);
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disconnected_carries_no_account_data() {
        let state = SessionState::Disconnected;
        assert!(!state.is_connected());
        assert_eq!(state.address(), None);
        assert_eq!(state.balance(), None);
    }

    #[test]
    fn connected_exposes_address_and_balance() {
        let state = SessionState::Connected {
            address: "0x742d35Cc6634C0532925a3b844Bc454e4438f44e".to_string(),
            balance: Some("1.5".to_string()),
        };
        assert!(state.is_connected());
        assert_eq!(
            state.address(),
            Some("0x742d35Cc6634C0532925a3b844Bc454e4438f44e")
        );
        assert_eq!(state.balance(), Some("1.5"));
    }

    #[test]
    fn pending_balance_reads_as_absent() {
        let state = SessionState::Connected {
            address: "0x742d35Cc6634C0532925a3b844Bc454e4438f44e".to_string(),
            balance: None,
        };
        assert!(state.is_connected());
        assert_eq!(state.balance(), None);
    }
}
