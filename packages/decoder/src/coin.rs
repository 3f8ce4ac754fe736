//! Coin Amounts
//!
//! Converts chain amounts (`"5000000uakt"`, `"5akt"`, or `{denom, amount}` coins)
//! into integer base units.

use thiserror::Error;

use crate::config::ChainConfig;
use crate::proto::cosmos::base::v1beta1::Coin;

/// Errors that can occur while converting an amount
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoinError {
    #[error("Unrecognized denomination: {0:?}")]
    UnrecognizedDenom(String),

    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("Amount does not fit in 64 bits: {0:?}")]
    AmountOverflow(String),
}

/// Split an amount string into its numeric prefix and denomination suffix
///
/// # Arguments
/// * `value` - An amount such as `"5000000uakt"` or `"12ibc/27394F..."`
///
/// # Returns
/// `(number, denom)` slices of the input
pub fn split_amount(value: &str) -> Result<(&str, &str), CoinError> {
    let value = value.trim();
    let idx = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(value.len());
    let (number, denom) = value.split_at(idx);
    if number.is_empty() {
        return Err(CoinError::InvalidAmount(value.to_string()));
    }
    Ok((number, denom))
}

/// Parse an amount string into base units
///
/// # Arguments
/// * `value` - An amount with its denomination suffix
/// * `config` - Chain denominations
///
/// # Returns
/// The amount in base units, e.g. `"5akt"` → `5_000_000`
pub fn parse_amount(value: &str, config: &ChainConfig) -> Result<u64, CoinError> {
    let (number, denom) = split_amount(value)?;
    to_base_units(number, denom, config)
}

/// Convert a coin object into base units
pub fn coin_amount(coin: &Coin, config: &ChainConfig) -> Result<u64, CoinError> {
    to_base_units(coin.amount.trim(), &coin.denom, config)
}

/// Convert a numeric string in the given denomination into base units
///
/// Base denom amounts must be integers. Display denom amounts may carry up to
/// `display_exponent` fractional digits.
pub fn to_base_units(number: &str, denom: &str, config: &ChainConfig) -> Result<u64, CoinError> {
    if denom == config.base_denom {
        parse_integer(number)
    } else if denom == config.display_denom {
        parse_scaled(number, config)
    } else {
        Err(CoinError::UnrecognizedDenom(denom.to_string()))
    }
}

/// Check whether a denomination is a bridged (inter-chain) asset
pub fn is_inter_chain(denom: &str, config: &ChainConfig) -> bool {
    denom.contains(config.inter_chain_marker.as_str())
}

fn parse_integer(number: &str) -> Result<u64, CoinError> {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoinError::InvalidAmount(number.to_string()));
    }
    number
        .parse::<u64>()
        .map_err(|_| CoinError::AmountOverflow(number.to_string()))
}

fn parse_scaled(number: &str, config: &ChainConfig) -> Result<u64, CoinError> {
    let multiplier = config.display_multiplier()?;
    let exponent = config.display_exponent;
    let (whole, fraction) = match number.split_once('.') {
        Some((whole, fraction)) if !fraction.is_empty() => (whole, fraction),
        Some(_) => return Err(CoinError::InvalidAmount(number.to_string())),
        None => (number, ""),
    };
    if fraction.len() > exponent as usize || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoinError::InvalidAmount(number.to_string()));
    }

    let whole = parse_integer(whole)?;
    let fraction_units = if fraction.is_empty() {
        0
    } else {
        let padding = 10u64
            .checked_pow(exponent - fraction.len() as u32)
            .ok_or_else(|| CoinError::AmountOverflow(number.to_string()))?;
        parse_integer(fraction)?
            .checked_mul(padding)
            .ok_or_else(|| CoinError::AmountOverflow(number.to_string()))?
    };

    whole
        .checked_mul(multiplier)
        .and_then(|units| units.checked_add(fraction_units))
        .ok_or_else(|| CoinError::AmountOverflow(number.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ChainConfig {
        ChainConfig::default()
    }

    // ==================== parse_amount tests ====================

    #[test]
    fn test_parse_amount_base_denom() {
        assert_eq!(parse_amount("5000000uakt", &config()), Ok(5_000_000));
    }

    #[test]
    fn test_parse_amount_display_denom() {
        assert_eq!(parse_amount("5akt", &config()), Ok(5_000_000));
    }

    #[test]
    fn test_parse_amount_fractional_display_denom() {
        assert_eq!(parse_amount("1.5akt", &config()), Ok(1_500_000));
        assert_eq!(parse_amount("0.000001akt", &config()), Ok(1));
    }

    #[test]
    fn test_parse_amount_unknown_denom() {
        assert_eq!(
            parse_amount("5btc", &config()),
            Err(CoinError::UnrecognizedDenom("btc".to_string()))
        );
    }

    #[test]
    fn test_parse_amount_missing_denom() {
        assert_eq!(
            parse_amount("5", &config()),
            Err(CoinError::UnrecognizedDenom(String::new()))
        );
    }

    #[test]
    fn test_parse_amount_missing_number() {
        assert!(matches!(parse_amount("uakt", &config()), Err(CoinError::InvalidAmount(_))));
    }

    #[test]
    fn test_parse_amount_fractional_base_denom_rejected() {
        assert!(matches!(parse_amount("1.5uakt", &config()), Err(CoinError::InvalidAmount(_))));
    }

    #[test]
    fn test_parse_amount_too_precise_rejected() {
        assert!(matches!(parse_amount("0.0000001akt", &config()), Err(CoinError::InvalidAmount(_))));
    }

    #[test]
    fn test_parse_amount_trailing_dot_rejected() {
        assert!(matches!(parse_amount("5.akt", &config()), Err(CoinError::InvalidAmount(_))));
    }

    #[test]
    fn test_parse_amount_overflow() {
        assert!(matches!(
            parse_amount("99999999999999999999uakt", &config()),
            Err(CoinError::AmountOverflow(_))
        ));
        assert!(matches!(
            parse_amount("18446744073710akt", &config()),
            Err(CoinError::AmountOverflow(_))
        ));
    }

    #[test]
    fn test_parse_amount_oversized_display_exponent() {
        let config: ChainConfig = serde_json::from_str(r#"{"displayExponent": 20}"#).unwrap();
        assert!(matches!(parse_amount("1akt", &config), Err(CoinError::AmountOverflow(_))));
        assert!(matches!(parse_amount("0.5akt", &config), Err(CoinError::AmountOverflow(_))));
        assert_eq!(parse_amount("7uakt", &config), Ok(7));
    }

    #[test]
    fn test_parse_amount_widest_display_exponent() {
        let config = ChainConfig {
            display_exponent: 19,
            ..ChainConfig::default()
        };
        assert_eq!(parse_amount("1akt", &config), Ok(10_000_000_000_000_000_000));
        assert_eq!(parse_amount("0.5akt", &config), Ok(5_000_000_000_000_000_000));
        assert!(matches!(parse_amount("2akt", &config), Err(CoinError::AmountOverflow(_))));
    }

    // ==================== split_amount tests ====================

    #[test]
    fn test_split_amount_ibc_denom() {
        let (number, denom) = split_amount("12ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2").unwrap();
        assert_eq!(number, "12");
        assert!(denom.starts_with("ibc/"));
    }

    // ==================== coin_amount tests ====================

    #[test]
    fn test_coin_amount() {
        let coin = Coin {
            denom: "uakt".to_string(),
            amount: "250000000".to_string(),
        };
        assert_eq!(coin_amount(&coin, &config()), Ok(250_000_000));
    }

    #[test]
    fn test_coin_amount_unknown_denom() {
        let coin = Coin {
            denom: "uatom".to_string(),
            amount: "1".to_string(),
        };
        assert_eq!(
            coin_amount(&coin, &config()),
            Err(CoinError::UnrecognizedDenom("uatom".to_string()))
        );
    }

    // ==================== is_inter_chain tests ====================

    #[test]
    fn test_is_inter_chain() {
        assert!(is_inter_chain("ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2", &config()));
        assert!(!is_inter_chain("uakt", &config()));
    }
}
