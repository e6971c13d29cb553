//! Wallet services: provider gateway, injected implementation, session flows

pub mod injected;
pub mod provider;
pub mod session;

use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;

use provider::WalletGateway;

/// Handle to the wallet gateway injected at the composition root.
///
/// Components never touch `window.ethereum` directly; they reach the
/// provider through this handle so a test double can stand in for it.
///
/// The gateway is `!Send` (it wraps `window.ethereum`), but Leptos
/// context requires `Send + Sync`. `SendWrapper` bridges that on the
/// single-threaded WASM target, where the value is only ever touched
/// from the one browser thread.
#[derive(Clone)]
pub struct GatewayHandle(pub SendWrapper<Rc<dyn WalletGateway>>);

pub fn provide_gateway(gateway: Rc<dyn WalletGateway>) {
    provide_context(GatewayHandle(SendWrapper::new(gateway)));
}

pub fn use_gateway() -> GatewayHandle {
    expect_context::<GatewayHandle>()
}
