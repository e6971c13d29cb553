//! Application constants

/// Test network the demo runs against
pub const NETWORK_NAME: &str = "Holesky";

/// Block explorer for the configured network
pub const EXPLORER_BASE: &str = "https://holesky.etherscan.io";

// UI constants
pub const NOTICE_TIMEOUT_MS: u32 = 5_000;
