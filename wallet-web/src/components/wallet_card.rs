//! Wallet Card Component
//!
//! Shows the connect button while disconnected; once connected, shows
//! the balance, the full address, and copy / explorer actions.

use leptos::prelude::*;

use crate::state::notice::use_notice_context;
use crate::state::wallet::use_wallet_context;
use crate::utils::{clipboard, explorer};

#[component]
pub fn WalletCard(on_connect: UnsyncCallback<()>) -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let notices = use_notice_context();

    // Copy the address to the clipboard and confirm with a notice
    let copy_address = move |_| {
        if let Some(address) = wallet_ctx.address() {
            clipboard::copy_text(&address);
            notices.success("Address copied!", "Wallet address copied to clipboard");
        }
    };

    // Open the address on Etherscan in a new tab
    let open_explorer = move |_| {
        if let Some(address) = wallet_ctx.address() {
            explorer::open_in_new_tab(&explorer::address_url(&address));
        }
    };

    view! {
        <div class="card">
            <div class="card-header">
                <h2 class="card-title">"Wallet"</h2>
                {move || (!wallet_ctx.is_connected()).then(|| view! {
                    <button
                        class="btn"
                        disabled=move || wallet_ctx.is_connecting()
                        on:click=move |_| on_connect.run(())
                    >
                        {move || if wallet_ctx.is_connecting() {
                            "Connecting..."
                        } else {
                            "Connect MetaMask"
                        }}
                    </button>
                })}
            </div>

            {move || wallet_ctx.address().map(|address| view! {
                <div class="stack">
                    <div class="panel">
                        <div class="panel-row">
                            <span class="label">"Balance"</span>
                            <span class="balance">
                                {move || wallet_ctx.balance().unwrap_or_else(|| "...".to_string())}
                                " ETH"
                            </span>
                        </div>
                    </div>

                    <div class="panel">
                        <div class="panel-row">
                            <span class="label">"Address"</span>
                            <div class="panel-actions">
                                <button
                                    class="btn-icon"
                                    title="Copy address"
                                    on:click=copy_address
                                >
                                    "Copy"
                                </button>
                                <button
                                    class="btn-icon"
                                    title="View on Etherscan"
                                    on:click=open_explorer
                                >
                                    "Etherscan"
                                </button>
                            </div>
                        </div>
                        <p class="address">{address}</p>
                    </div>
                </div>
            })}
        </div>
    }
}
