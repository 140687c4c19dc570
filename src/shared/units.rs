//! Fixed-point unit normalization.
//!
//! On-chain magnitudes arrive as 18-decimal integers. Two helpers exist because the
//! indexers hand them over in two shapes, and each source field uses exactly one:
//!
//! - [`div_eth_unit`]: a value already parsed as a `Decimal` in Wei, divided by
//!   [`ETH_UNIT`] (open-order size).
//! - [`from_fixed_point`]: a raw integer string rescaled by `10^decimals`
//!   (trade price/size, position magnitudes).
//!
//! All math uses `rust_decimal::Decimal`; no binary floating point.

use crate::error::DecodeError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Number of decimals of an 18-decimal fixed-point value.
pub const FIXED_POINT_DECIMALS: u32 = 18;

/// 1 ether in Wei (`10^18`).
pub const ETH_UNIT: Decimal = Decimal::from_parts(2_808_348_672, 232_830_643, 0, false, 0);

/// Divide a Wei amount by [`ETH_UNIT`].
pub fn div_eth_unit(wei: Decimal) -> Decimal {
    (wei / ETH_UNIT).normalize()
}

/// Parse a Wei amount from its decimal string and convert it to ether.
pub fn parse_wei(raw: &str) -> Result<Decimal, DecodeError> {
    let wei = Decimal::from_str(raw.trim()).map_err(|e| DecodeError::InvalidFixedPoint {
        input: raw.to_string(),
        reason: e.to_string(),
    })?;
    Ok(div_eth_unit(wei))
}

/// Rescale a raw fixed-point integer string: `raw / 10^decimals`.
///
/// `"1500000000000000000"` with 18 decimals is `1.5`. Negative values are allowed
/// (short sizes, losses).
pub fn from_fixed_point(raw: &str, decimals: u32) -> Result<Decimal, DecodeError> {
    let invalid = |reason: String| DecodeError::InvalidFixedPoint {
        input: raw.to_string(),
        reason,
    };
    let mantissa = i128::from_str(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    Decimal::try_from_i128_with_scale(mantissa, decimals)
        .map(|d| d.normalize())
        .map_err(|e| invalid(e.to_string()))
}
