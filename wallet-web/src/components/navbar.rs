//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::utils::constants::NETWORK_NAME;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">"MetaMask Demo"</span>
                </A>
                <span class="nav-badge">{NETWORK_NAME}</span>
            </div>
        </nav>
    }
}
