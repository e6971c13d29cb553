//! MetaMask Demo App - Leptos Frontend
//!
//! Shell: router, navbar, notice stack, and the composition root where
//! the injected provider gateway is handed to the view layer.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::{Navbar, NoticeStack};
use crate::pages::WalletPage;
use crate::services::injected::InjectedEthereum;
use crate::services::provide_gateway;
use crate::state::notice::provide_notice_context;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    provide_wallet_context();
    provide_notice_context();
    // The one place the real provider is chosen; everything below the
    // context boundary works against the WalletGateway trait.
    provide_gateway(Rc::new(InjectedEthereum::new()));

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <NoticeStack/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=WalletPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page-center">
            <div class="card card-narrow">
                <h1 class="page-title">"404 - Page Not Found"</h1>
                <p class="muted">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn">"Go to Home"</span>
                </A>
            </div>
        </div>
    }
}
