//! # Shared Utility Functions
//!
//! Display helpers for Ethereum addresses and transaction hashes.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";
//! let formatted = format_address(address, 6, 4);
//! assert_eq!(formatted, "0x742d...f44e");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Arguments
///
/// * `address` - The wallet address to format
/// * `prefix_len` - Number of characters to show at the start (including the `0x` prefix)
/// * `suffix_len` - Number of characters to show at the end
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";
/// assert_eq!(format_address(addr, 6, 4), "0x742d...f44e");
/// assert_eq!(format_address(addr, 10, 8), "0x742d35Cc...4438f44e");
/// assert_eq!(format_address("0xabcd", 6, 4), "0xabcd");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Return early if the address is too short to truncate meaningfully
    // Also guard against individual lengths exceeding address length to prevent panics
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    // Safe to slice: `0x`-hex addresses are ASCII-only
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with default 6-character prefix and 4-character suffix.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";
/// assert_eq!(truncate_address(addr), "0x742d...f44e");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Shorten a transaction hash for display in a notification.
///
/// Keeps the first 20 characters followed by an ellipsis; shorter strings
/// are returned unchanged.
pub fn short_hash(hash: &str) -> String {
    if hash.len() <= 20 {
        hash.to_string()
    } else {
        format!("{}...", &hash[..20])
    }
}

/// Plausibility check for an Ethereum address: `0x` followed by exactly
/// 40 hex digits. Checksum casing is not verified; the wallet provider
/// rejects addresses it cannot resolve.
pub fn is_address(value: &str) -> bool {
    match value.strip_prefix("0x") {
        Some(hex) => hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";
        assert_eq!(format_address(addr, 6, 4), "0x742d...f44e");
        assert_eq!(format_address(addr, 10, 8), "0x742d35Cc...4438f44e");
        assert_eq!(format_address(addr, 2, 2), "0x...4e");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("0xabcd", 6, 4), "0xabcd");
        assert_eq!(format_address("abc", 6, 4), "abc");
    }

    #[test]
    fn test_truncate_address() {
        let addr = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";
        assert_eq!(truncate_address(addr), "0x742d...f44e");
    }

    #[test]
    fn test_short_hash() {
        let hash = "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b";
        assert_eq!(short_hash(hash), "0x88df016429689c079f...");
        assert_eq!(short_hash("0xabc"), "0xabc");
    }

    #[test]
    fn test_is_address() {
        assert!(is_address("0x742d35Cc6634C0532925a3b844Bc454e4438f44e"));
        assert!(is_address("0x0000000000000000000000000000000000000000"));
        assert!(!is_address(""));
        assert!(!is_address("0x"));
        assert!(!is_address("742d35Cc6634C0532925a3b844Bc454e4438f44e"));
        assert!(!is_address("0x742d35Cc6634C0532925a3b844Bc454e4438f44"));
        assert!(!is_address("0x742d35Cc6634C0532925a3b844Bc454e4438f44ea"));
        assert!(!is_address("0x742d35Cc6634C0532925a3b844Bc454e4438f44g"));
    }
}
