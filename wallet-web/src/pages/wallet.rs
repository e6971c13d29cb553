//! Wallet Page
//!
//! The single page of the demo: wallet card plus send form. Owns the
//! session wiring: connect on click, silent restore on page load, and
//! the external `accountsChanged` subscription.

use leptos::prelude::*;

use crate::components::{SendForm, WalletCard};
use crate::services::{session, use_gateway, GatewayHandle};
use crate::state::notice::{use_notice_context, NoticeContext};
use crate::state::wallet::{use_wallet_context, WalletContext};

#[component]
pub fn WalletPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let notices = use_notice_context();
    let gateway = use_gateway();

    let connect = UnsyncCallback::new({
        let gateway = gateway.clone();
        move |_: ()| {
            // Ignore clicks while a connect request is already pending
            if wallet_ctx.is_connecting() {
                return;
            }
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                run_connect(gateway, wallet_ctx, notices).await;
            });
        }
    });

    // On mount: rebuild the session from already-authorized accounts and
    // subscribe to external account changes
    Effect::new(move || {
        let restore_gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            match session::restore(restore_gateway.0.as_ref()).await {
                Ok(Some(account)) => {
                    log::info!("restored session for {}", account.address);
                    wallet_ctx.set_connected(account);
                }
                Ok(None) => {}
                Err(e) => log::error!("failed to check existing connection: {e}"),
            }
        });

        let notify_gateway = gateway.clone();
        gateway
            .0
            .subscribe_accounts_changed(Box::new(move |accounts| {
                let gateway = notify_gateway.clone();
                leptos::task::spawn_local(async move {
                    match session::handle_accounts_changed(gateway.0.as_ref(), &accounts).await {
                        Ok(None) => {
                            log::info!("wallet disconnected externally");
                            wallet_ctx.disconnect();
                        }
                        Ok(Some(account)) => {
                            log::info!("active account switched to {}", account.address);
                            wallet_ctx.set_connected(account);
                        }
                        Err(e) => {
                            log::error!("reconnect after account switch failed: {e}");
                            wallet_ctx.disconnect();
                            notices.error("Connection failed", e.user_message());
                        }
                    }
                });
            }));
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">"Demo MetaMask"</h1>
            </div>

            <div class="grid">
                <WalletCard on_connect=connect/>
                <SendForm/>
            </div>
        </div>
    }
}

async fn run_connect(gateway: GatewayHandle, wallet_ctx: WalletContext, notices: NoticeContext) {
    wallet_ctx.set_connecting();
    match session::connect(gateway.0.as_ref()).await {
        Ok(account) => {
            wallet_ctx.set_connected(account);
            notices.success("Wallet connected!", "Successfully connected to MetaMask");
        }
        Err(e) => {
            log::error!("wallet connect failed: {e}");
            wallet_ctx.disconnect();
            notices.error("Connection failed", e.user_message());
        }
    }
}
