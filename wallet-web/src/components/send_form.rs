//! Send ETH Form Component
//!
//! Recipient + amount form. The submit control is disabled while a
//! transfer is pending or a field is blank; validation proper happens
//! in the session flow before anything reaches the provider. On
//! success the fields are cleared, the refreshed balance is published,
//! and the transaction is opened on the explorer.

use leptos::prelude::*;

use shared::utils::short_hash;

use crate::services::{session, use_gateway};
use crate::state::notice::use_notice_context;
use crate::state::wallet::use_wallet_context;
use crate::utils::explorer;

#[component]
pub fn SendForm() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let notices = use_notice_context();
    let gateway = use_gateway();

    let (to_address, set_to_address) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (sending, set_sending) = signal(false);

    let send_transaction = move |_| {
        // One submission in flight at a time
        if sending.get_untracked() {
            return;
        }
        let Some(from) = wallet_ctx.address() else {
            notices.error("Error", "Please fill all fields and connect your wallet");
            return;
        };
        set_sending.set(true);

        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            let to = to_address.get_untracked();
            let value = amount.get_untracked();

            match session::send_and_refresh(gateway.0.as_ref(), &from, &to, &value).await {
                Ok((hash, balance)) => {
                    if let Some(balance) = balance {
                        wallet_ctx.set_balance(balance);
                    }
                    notices.success(
                        "Transaction sent!",
                        format!("Transaction hash: {}", short_hash(&hash)),
                    );
                    explorer::open_in_new_tab(&explorer::tx_url(&hash));
                    set_to_address.set(String::new());
                    set_amount.set(String::new());
                }
                Err(e) => {
                    log::error!("transfer failed: {e}");
                    notices.error("Transaction failed", e.user_message());
                }
            }
            set_sending.set(false);
        });
    };

    view! {
        <div class="card" class:dimmed=move || !wallet_ctx.is_connected()>
            <div class="card-header">
                <h2 class="card-title">"Send ETH"</h2>
            </div>

            {move || if wallet_ctx.is_connected() {
                let send_transaction = send_transaction.clone();
                view! {
                    <div class="stack">
                        <div class="field">
                            <label for="recipient" class="label">"Recipient Address"</label>
                            <input
                                id="recipient"
                                class="input mono"
                                placeholder="0x..."
                                prop:value=move || to_address.get()
                                on:input=move |ev| set_to_address.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="field">
                            <label for="amount" class="label">"Amount (ETH)"</label>
                            <input
                                id="amount"
                                class="input"
                                placeholder="0.01"
                                prop:value=move || amount.get()
                                on:input=move |ev| set_amount.set(event_target_value(&ev))
                            />
                        </div>

                        <button
                            class="btn btn-wide"
                            on:click=send_transaction
                            disabled=move || {
                                sending.get()
                                    || to_address.with(|v| v.trim().is_empty())
                                    || amount.with(|v| v.trim().is_empty())
                            }
                        >
                            {move || if sending.get() {
                                "Sending..."
                            } else {
                                "Send Transaction"
                            }}
                        </button>

                        {move || sending.get().then(|| view! {
                            <p class="muted hint">
                                "Please approve the transaction in your wallet..."
                            </p>
                        })}
                    </div>
                }.into_any()
            } else {
                view! {
                    <p class="muted hint">"Connect your wallet to send ETH"</p>
                }.into_any()
            }}
        </div>
    }
}
