//! # Shared Helper Library
//!
//! Pure helpers used by the wallet-web frontend. No browser or WASM
//! dependency, so everything here is testable with plain `cargo test`.
//!
//! ## Structure
//!
//! - **[`units`]**: wei/ether conversion
//!   - [`units::format_wei`]: wei to a full-precision ether decimal string
//!   - [`units::parse_ether`]: ether decimal string to wei
//!   - [`units::parse_quantity`] / [`units::to_quantity`]: `0x`-hex
//!     quantities as exchanged with the injected provider
//! - **[`utils`]**: address and hash display helpers
//!   - [`utils::format_address`]: format addresses with ellipsis
//!   - [`utils::truncate_address`]: truncate with default parameters
//!   - [`utils::is_address`]: plausibility check for `0x` addresses

pub mod units;
pub mod utils;

// Re-export commonly used helpers for convenience
pub use units::*;
pub use utils::*;
