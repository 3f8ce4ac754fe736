//! Chain Configuration
//!
//! Chain-level parameters the decoders need: the bech32 account prefix used for
//! signer addresses and the denominations used when converting amounts to base units.

use serde::Deserialize;

use crate::coin::CoinError;

/// Bech32 human-readable prefix for Akash account addresses
pub const DEFAULT_BECH32_PREFIX: &str = "akash";

/// Smallest indivisible denomination
pub const DEFAULT_BASE_DENOM: &str = "uakt";

/// Display denomination (1 akt = 10^6 uakt)
pub const DEFAULT_DISPLAY_DENOM: &str = "akt";

/// Decimal places between the display and base denominations
pub const DEFAULT_DISPLAY_EXPONENT: u32 = 6;

/// Substring marking an IBC voucher denomination (e.g. "ibc/27394FB0...")
pub const DEFAULT_INTER_CHAIN_MARKER: &str = "ibc/";

/// Chain parameters shared by the signer, coin, transfer and proposal decoders
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChainConfig {
    /// Account address prefix
    pub bech32_prefix: String,
    /// Base denomination, amounts in this denom are taken as-is
    pub base_denom: String,
    /// Display denomination, amounts are scaled by 10^display_exponent
    pub display_denom: String,
    /// Scale between display and base denominations
    pub display_exponent: u32,
    /// Denominations containing this marker are bridged assets
    pub inter_chain_marker: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            bech32_prefix: DEFAULT_BECH32_PREFIX.to_string(),
            base_denom: DEFAULT_BASE_DENOM.to_string(),
            display_denom: DEFAULT_DISPLAY_DENOM.to_string(),
            display_exponent: DEFAULT_DISPLAY_EXPONENT,
            inter_chain_marker: DEFAULT_INTER_CHAIN_MARKER.to_string(),
        }
    }
}

impl ChainConfig {
    /// Create a config with a different account prefix and default denominations
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            bech32_prefix: prefix.into(),
            ..Default::default()
        }
    }

    /// Number of base units in one display unit
    ///
    /// # Returns
    /// `10^display_exponent`, or `AmountOverflow` when that exceeds 64 bits
    pub fn display_multiplier(&self) -> Result<u64, CoinError> {
        10u64
            .checked_pow(self.display_exponent)
            .ok_or_else(|| CoinError::AmountOverflow(format!("10^{}", self.display_exponent)))
    }
}
