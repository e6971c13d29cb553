//! Block explorer links
//!
//! Presentation-only: builds Etherscan URLs for the configured network
//! and opens them in a new browser tab.

use super::constants::EXPLORER_BASE;

/// URL of a transaction on the block explorer.
pub fn tx_url(hash: &str) -> String {
    format!("{EXPLORER_BASE}/tx/{hash}")
}

/// URL of an address on the block explorer.
pub fn address_url(address: &str) -> String {
    format!("{EXPLORER_BASE}/address/{address}")
}

/// Open `url` in a new browser tab. Failures (popup blockers) are
/// logged and otherwise ignored.
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        log::warn!("failed to open {url}: {e:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explorer_urls() {
        assert_eq!(
            tx_url("0xdeadbeef"),
            "https://holesky.etherscan.io/tx/0xdeadbeef"
        );
        assert_eq!(
            address_url("0x742d35Cc6634C0532925a3b844Bc454e4438f44e"),
            "https://holesky.etherscan.io/address/0x742d35Cc6634C0532925a3b844Bc454e4438f44e"
        );
    }
}
