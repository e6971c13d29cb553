//! Session flows: connect, balance sync, transfer submission.
//!
//! Everything here is written against `&dyn WalletGateway` so the flows
//! can be exercised with a mock gateway. The page layer only wires the
//! results into signals and notices.

use shared::units::{self, UnitsError};
use shared::utils::is_address;
use thiserror::Error;

use super::provider::{ProviderError, WalletGateway};

/// Errors surfaced to the user by the session flows.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("provider returned no accounts")]
    NoAccounts,
    #[error("recipient address is empty")]
    EmptyRecipient,
    #[error("recipient is not a valid Ethereum address")]
    InvalidRecipient,
    #[error("invalid amount: {0}")]
    InvalidAmount(#[from] UnitsError),
}

/// Result alias for session flows.
pub type Result<T> = std::result::Result<T, SessionError>;

impl SessionError {
    /// Human-readable message for a transient error notice.
    pub fn user_message(&self) -> String {
        match self {
            SessionError::Provider(ProviderError::Unavailable) => {
                "MetaMask not found. Please install MetaMask to continue.".to_string()
            }
            SessionError::Provider(ProviderError::Rejected) => {
                "The request was rejected in the wallet.".to_string()
            }
            SessionError::Provider(ProviderError::Rpc(message)) => message.clone(),
            SessionError::Provider(ProviderError::Interop(_)) => {
                "Unexpected response from the wallet provider.".to_string()
            }
            SessionError::NoAccounts => "The wallet returned no accounts.".to_string(),
            SessionError::EmptyRecipient | SessionError::InvalidAmount(UnitsError::Empty) => {
                "Please fill all fields and connect your wallet.".to_string()
            }
            SessionError::InvalidRecipient => {
                "The recipient is not a valid Ethereum address.".to_string()
            }
            SessionError::InvalidAmount(e) => e.to_string(),
        }
    }
}

/// A resolved connection: active address plus its formatted balance.
///
/// `balance` is `None` when the balance query failed; the session is
/// still considered connected and the UI keeps whatever it last showed.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectedAccount {
    pub address: String,
    pub balance: Option<String>,
}

async fn resolve_account(
    gateway: &dyn WalletGateway,
    address: String,
) -> ConnectedAccount {
    let balance = match gateway.balance_of(&address).await {
        Ok(wei) => Some(units::format_wei(wei)),
        Err(e) => {
            log::error!("failed to fetch balance for {address}: {e}");
            None
        }
    };
    ConnectedAccount { address, balance }
}

/// Wallet Connector: request account access and resolve the active
/// address and its balance.
///
/// Fails non-fatally when the provider is absent or the user rejects
/// the permission prompt; the caller surfaces the error as a notice.
pub async fn connect(gateway: &dyn WalletGateway) -> Result<ConnectedAccount> {
    let accounts = gateway.request_accounts().await?;
    let address = accounts.into_iter().next().ok_or(SessionError::NoAccounts)?;
    Ok(resolve_account(gateway, address).await)
}

/// Silent reconnect on page load: query already-authorized accounts
/// without prompting. `Ok(None)` when the provider is absent or no
/// account is authorized.
pub async fn restore(gateway: &dyn WalletGateway) -> Result<Option<ConnectedAccount>> {
    if !gateway.available() {
        return Ok(None);
    }
    let accounts = gateway.accounts().await?;
    let Some(address) = accounts.into_iter().next() else {
        return Ok(None);
    };
    Ok(Some(resolve_account(gateway, address).await))
}

/// Balance Synchronizer: fetch the current balance of `address` and
/// return it as a human-readable ether decimal string.
pub async fn refresh_balance(gateway: &dyn WalletGateway, address: &str) -> Result<String> {
    let wei = gateway.balance_of(address).await?;
    Ok(units::format_wei(wei))
}

/// React to an external `accountsChanged` notification.
///
/// `Ok(None)`: no accounts remain, the caller resets the session.
/// `Ok(Some(_))`: the active account switched; the connect flow is
/// re-run so the new address's balance is re-resolved.
pub async fn handle_accounts_changed(
    gateway: &dyn WalletGateway,
    accounts: &[String],
) -> Result<Option<ConnectedAccount>> {
    if accounts.is_empty() {
        return Ok(None);
    }
    connect(gateway).await.map(Some)
}

fn validate_recipient(to: &str) -> Result<&str> {
    let to = to.trim();
    if to.is_empty() {
        return Err(SessionError::EmptyRecipient);
    }
    if !is_address(to) {
        return Err(SessionError::InvalidRecipient);
    }
    Ok(to)
}

/// Transaction Submitter: validate the form input and submit a value
/// transfer. Returns the transaction hash. No transfer is issued unless
/// both fields validate.
pub async fn submit_transfer(
    gateway: &dyn WalletGateway,
    from: &str,
    to: &str,
    amount: &str,
) -> Result<String> {
    let to = validate_recipient(to)?;
    let wei = units::parse_ether(amount)?;
    let hash = gateway.send_value(from, to, wei).await?;
    Ok(hash)
}

/// Submit a transfer and, on success, refresh the sender's balance
/// exactly once. A refresh failure is logged and reported as `None`;
/// the transfer itself still counts as successful.
pub async fn send_and_refresh(
    gateway: &dyn WalletGateway,
    from: &str,
    to: &str,
    amount: &str,
) -> Result<(String, Option<String>)> {
    let hash = submit_transfer(gateway, from, to, amount).await?;
    let balance = match refresh_balance(gateway, from).await {
        Ok(balance) => Some(balance),
        Err(e) => {
            log::error!("balance refresh after transfer failed: {e}");
            None
        }
    };
    Ok((hash, balance))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use async_trait::async_trait;
    use futures::executor::block_on;

    use super::*;
    use crate::services::provider::AccountsChangedCallback;

    type GatewayResult<T> = std::result::Result<T, ProviderError>;

    const ALICE: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";
    const BOB: &str = "0x53d284357ec70cE289D6D64134DfAc8E511c8a3D";

    /// Recording test double for the provider gateway.
    struct MockGateway {
        present: bool,
        accounts: Vec<String>,
        balances: HashMap<String, u128>,
        reject_request: bool,
        fail_send: bool,
        account_queries: RefCell<u32>,
        balance_queries: RefCell<Vec<String>>,
        sent: RefCell<Vec<(String, String, u128)>>,
    }

    impl MockGateway {
        fn new(accounts: &[&str]) -> Self {
            Self {
                present: true,
                accounts: accounts.iter().map(|a| a.to_string()).collect(),
                balances: HashMap::new(),
                reject_request: false,
                fail_send: false,
                account_queries: RefCell::new(0),
                balance_queries: RefCell::new(Vec::new()),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn with_balance(mut self, address: &str, wei: u128) -> Self {
            self.balances.insert(address.to_string(), wei);
            self
        }

        fn absent() -> Self {
            let mut mock = Self::new(&[]);
            mock.present = false;
            mock
        }
    }

    #[async_trait(?Send)]
    impl WalletGateway for MockGateway {
        fn available(&self) -> bool {
            self.present
        }

        async fn request_accounts(&self) -> GatewayResult<Vec<String>> {
            if !self.present {
                return Err(ProviderError::Unavailable);
            }
            if self.reject_request {
                return Err(ProviderError::Rejected);
            }
            Ok(self.accounts.clone())
        }

        async fn accounts(&self) -> GatewayResult<Vec<String>> {
            *self.account_queries.borrow_mut() += 1;
            if !self.present {
                return Err(ProviderError::Unavailable);
            }
            Ok(self.accounts.clone())
        }

        async fn balance_of(&self, address: &str) -> GatewayResult<u128> {
            self.balance_queries.borrow_mut().push(address.to_string());
            match self.balances.get(address) {
                Some(wei) => Ok(*wei),
                None => Err(ProviderError::Rpc("unknown account".to_string())),
            }
        }

        async fn send_value(
            &self,
            from: &str,
            to: &str,
            wei: u128,
        ) -> GatewayResult<String> {
            if self.fail_send {
                return Err(ProviderError::Rpc("insufficient funds".to_string()));
            }
            self.sent
                .borrow_mut()
                .push((from.to_string(), to.to_string(), wei));
            Ok("0xdeadbeef".to_string())
        }

        fn subscribe_accounts_changed(&self, _callback: AccountsChangedCallback) {}
    }

    #[test]
    fn connect_resolves_first_account_and_balance() {
        let mock = MockGateway::new(&[ALICE, BOB]).with_balance(ALICE, 1_500_000_000_000_000_000);
        let account = block_on(connect(&mock)).unwrap();
        assert_eq!(account.address, ALICE);
        assert_eq!(account.balance.as_deref(), Some("1.5"));
    }

    #[test]
    fn connect_stays_connected_when_balance_fetch_fails() {
        // no balance configured: the query errors, the connect still succeeds
        let mock = MockGateway::new(&[ALICE]);
        let account = block_on(connect(&mock)).unwrap();
        assert_eq!(account.address, ALICE);
        assert_eq!(account.balance, None);
    }

    #[test]
    fn connect_with_no_accounts_fails() {
        let mock = MockGateway::new(&[]);
        assert!(matches!(
            block_on(connect(&mock)),
            Err(SessionError::NoAccounts)
        ));
    }

    #[test]
    fn connect_surfaces_user_rejection() {
        let mut mock = MockGateway::new(&[ALICE]);
        mock.reject_request = true;
        let err = block_on(connect(&mock)).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Provider(ProviderError::Rejected)
        ));
        assert_eq!(err.user_message(), "The request was rejected in the wallet.");
    }

    #[test]
    fn restore_without_provider_is_silent() {
        let mock = MockGateway::absent();
        assert_eq!(block_on(restore(&mock)).unwrap(), None);
        // not even a silent accounts query is issued
        assert_eq!(*mock.account_queries.borrow(), 0);
    }

    #[test]
    fn restore_without_authorized_accounts() {
        let mock = MockGateway::new(&[]);
        assert_eq!(block_on(restore(&mock)).unwrap(), None);
        assert_eq!(*mock.account_queries.borrow(), 1);
    }

    #[test]
    fn restore_reconnects_silently() {
        let mock = MockGateway::new(&[ALICE]).with_balance(ALICE, 10_000_000_000_000_000);
        let account = block_on(restore(&mock)).unwrap().unwrap();
        assert_eq!(account.address, ALICE);
        assert_eq!(account.balance.as_deref(), Some("0.01"));
    }

    #[test]
    fn empty_recipient_never_issues_a_transfer() {
        let mock = MockGateway::new(&[ALICE]);
        let err = block_on(submit_transfer(&mock, ALICE, "", "1.0")).unwrap_err();
        assert!(matches!(err, SessionError::EmptyRecipient));
        assert!(mock.sent.borrow().is_empty());
    }

    #[test]
    fn empty_amount_never_issues_a_transfer() {
        let mock = MockGateway::new(&[ALICE]);
        let err = block_on(submit_transfer(&mock, ALICE, BOB, "")).unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidAmount(UnitsError::Empty)
        ));
        assert_eq!(
            err.user_message(),
            "Please fill all fields and connect your wallet."
        );
        assert!(mock.sent.borrow().is_empty());
    }

    #[test]
    fn invalid_input_never_issues_a_transfer() {
        let mock = MockGateway::new(&[ALICE]);
        for (to, amount) in [
            ("not-an-address", "1.0"),
            ("0x1234", "1.0"),
            (BOB, "0"),
            (BOB, "-1"),
            (BOB, "1.2.3"),
        ] {
            assert!(block_on(submit_transfer(&mock, ALICE, to, amount)).is_err());
        }
        assert!(mock.sent.borrow().is_empty());
        assert!(mock.balance_queries.borrow().is_empty());
    }

    #[test]
    fn transfer_sends_parsed_wei() {
        let mock = MockGateway::new(&[ALICE]).with_balance(ALICE, 2_000_000_000_000_000_000);
        let hash = block_on(submit_transfer(&mock, ALICE, BOB, "0.25")).unwrap();
        assert_eq!(hash, "0xdeadbeef");
        assert_eq!(
            mock.sent.borrow().as_slice(),
            &[(ALICE.to_string(), BOB.to_string(), 250_000_000_000_000_000)]
        );
    }

    #[test]
    fn recipient_is_trimmed_before_validation() {
        let mock = MockGateway::new(&[ALICE]);
        let to = format!("  {BOB}  ");
        block_on(submit_transfer(&mock, ALICE, &to, "1")).unwrap();
        assert_eq!(mock.sent.borrow()[0].1, BOB);
    }

    #[test]
    fn successful_transfer_refreshes_balance_exactly_once() {
        let mock = MockGateway::new(&[ALICE]).with_balance(ALICE, 750_000_000_000_000_000);
        let (hash, balance) = block_on(send_and_refresh(&mock, ALICE, BOB, "0.25")).unwrap();
        assert_eq!(hash, "0xdeadbeef");
        assert_eq!(balance.as_deref(), Some("0.75"));
        assert_eq!(mock.balance_queries.borrow().as_slice(), &[ALICE.to_string()]);
    }

    #[test]
    fn failed_transfer_triggers_no_refresh() {
        let mut mock = MockGateway::new(&[ALICE]).with_balance(ALICE, 750_000_000_000_000_000);
        mock.fail_send = true;
        let err = block_on(send_and_refresh(&mock, ALICE, BOB, "0.25")).unwrap_err();
        assert_eq!(err.user_message(), "insufficient funds");
        assert!(mock.balance_queries.borrow().is_empty());
    }

    #[test]
    fn transfer_succeeds_even_if_refresh_fails() {
        // transfer goes through, refresh errors: hash returned, balance None
        let mock = MockGateway::new(&[ALICE]);
        let (hash, balance) = block_on(send_and_refresh(&mock, ALICE, BOB, "1")).unwrap();
        assert_eq!(hash, "0xdeadbeef");
        assert_eq!(balance, None);
    }

    #[test]
    fn zero_remaining_accounts_signals_disconnect() {
        let mock = MockGateway::new(&[ALICE]);
        let outcome = block_on(handle_accounts_changed(&mock, &[])).unwrap();
        assert_eq!(outcome, None);
    }

    #[test]
    fn account_switch_resolves_new_address_and_balance() {
        // the wallet now reports BOB as the active account
        let mock = MockGateway::new(&[BOB]).with_balance(BOB, 3_000_000_000_000_000_000);
        let outcome = block_on(handle_accounts_changed(
            &mock,
            &[BOB.to_string()],
        ))
        .unwrap()
        .unwrap();
        assert_eq!(outcome.address, BOB);
        assert_eq!(outcome.balance.as_deref(), Some("3.0"));
    }
}
