use anchor_lang::prelude::*;

use crate::error::CurveError;

/// Basis-point denominator used by the slippage bounds.
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Tokens received for `lamports_in` against the given virtual reserves.
///
/// Constant product: the invariant `k = vSol * vTok` is held fixed while the
/// sol side grows by the input; whatever the floor division leaves behind
/// stays in the pool. All math runs in u128, the product of two u64 reserves
/// needs the full width.
pub fn quote_buy(
    lamports_in: u64,
    virtual_sol_reserves: u64,
    virtual_token_reserves: u64,
) -> Result<u64> {
    require!(
        virtual_sol_reserves > 0 && virtual_token_reserves > 0,
        CurveError::CurveState
    );
    if lamports_in == 0 {
        return Ok(0);
    }

    let k = virtual_sol_reserves as u128 * virtual_token_reserves as u128;
    let new_virtual_sol = virtual_sol_reserves as u128 + lamports_in as u128;
    let new_virtual_tokens = k / new_virtual_sol;

    Ok((virtual_token_reserves as u128 - new_virtual_tokens) as u64)
}

/// Lamports received for selling `tokens_in`, the mirror image of
/// [`quote_buy`]: the token side grows, the sol side is recomputed from `k`.
pub fn quote_sell(
    tokens_in: u64,
    virtual_sol_reserves: u64,
    virtual_token_reserves: u64,
) -> Result<u64> {
    require!(
        virtual_sol_reserves > 0 && virtual_token_reserves > 0,
        CurveError::CurveState
    );
    if tokens_in == 0 {
        return Ok(0);
    }

    let k = virtual_sol_reserves as u128 * virtual_token_reserves as u128;
    let new_virtual_tokens = virtual_token_reserves as u128 + tokens_in as u128;
    let new_virtual_sol = k / new_virtual_tokens;

    Ok((virtual_sol_reserves as u128 - new_virtual_sol) as u64)
}

/// Upper cost bound for a buy: the quoted input padded by `slippage_bps`.
/// The bound travels in the instruction, so it has to fit the u64 wire range.
pub fn max_sol_cost(lamports_in: u64, slippage_bps: u64) -> Result<u64> {
    let padded =
        lamports_in as u128 * (BPS_DENOMINATOR + slippage_bps as u128) / BPS_DENOMINATOR;
    u64::try_from(padded).map_err(|_| error!(CurveError::ValueOverflow))
}

/// Lower proceeds bound for a sell: the quoted output shaved by
/// `slippage_bps`. More than 100% slippage is meaningless.
pub fn min_sol_output(lamports_out: u64, slippage_bps: u64) -> Result<u64> {
    require!(
        (slippage_bps as u128) <= BPS_DENOMINATOR,
        CurveError::InvalidAmount
    );
    Ok((lamports_out as u128 * (BPS_DENOMINATOR - slippage_bps as u128) / BPS_DENOMINATOR) as u64)
}
