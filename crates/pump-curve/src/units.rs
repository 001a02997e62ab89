use anchor_lang::prelude::*;

use crate::error::CurveError;

/// SOL is denominated in lamports, 1e-9 of the display unit.
pub const SOL_DECIMALS: u8 = 9;

/// Launchpad mints are created with six decimals.
pub const TOKEN_DECIMALS: u8 = 6;

pub fn lamports_from_sol(amount: &str) -> Result<u64> {
    base_units_from_decimal(amount, SOL_DECIMALS)
}

pub fn token_base_units(amount: &str) -> Result<u64> {
    base_units_from_decimal(amount, TOKEN_DECIMALS)
}

/// Converts decimal text from a trade form into integer base units.
///
/// Rejection happens here, before any amount reaches the curve math:
/// negative or non-numeric input, and input finer than one base unit, fail
/// instead of being truncated.
pub fn base_units_from_decimal(amount: &str, decimals: u8) -> Result<u64> {
    let amount = amount.trim();
    require!(!amount.is_empty(), CurveError::InvalidAmount);
    require!(!amount.starts_with('-'), CurveError::InvalidAmount);

    let (integer, fraction) = match amount.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (amount, ""),
    };
    require!(
        !integer.is_empty() || !fraction.is_empty(),
        CurveError::InvalidAmount
    );
    require!(
        integer.chars().all(|c| c.is_ascii_digit()),
        CurveError::InvalidAmount
    );
    require!(
        fraction.chars().all(|c| c.is_ascii_digit()),
        CurveError::InvalidAmount
    );
    require!(
        fraction.len() <= decimals as usize,
        CurveError::InvalidAmount
    );

    let whole = if integer.is_empty() {
        0u128
    } else {
        integer
            .parse::<u128>()
            .map_err(|_| error!(CurveError::ValueOverflow))?
    };
    let fractional = if fraction.is_empty() {
        0u128
    } else {
        // cannot overflow, at most `decimals` digits
        fraction
            .parse::<u128>()
            .map_err(|_| error!(CurveError::InvalidAmount))?
    };
    let fractional = fractional * 10u128.pow((decimals as usize - fraction.len()) as u32);

    let value = whole
        .checked_mul(10u128.pow(decimals as u32))
        .and_then(|v| v.checked_add(fractional))
        .ok_or(CurveError::ValueOverflow)?;
    u64::try_from(value).map_err(|_| error!(CurveError::ValueOverflow))
}
