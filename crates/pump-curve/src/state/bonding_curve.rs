use anchor_lang::prelude::*;

use crate::config::{
    INITIAL_REAL_TOKEN_RESERVES, INITIAL_VIRTUAL_SOL_RESERVES, INITIAL_VIRTUAL_TOKEN_RESERVES,
    TOKEN_TOTAL_SUPPLY,
};
use crate::curve;
use crate::error::CurveError;

/// Account-type discriminator the program writes at offset zero.
pub const BONDING_CURVE_DISCRIMINATOR: [u8; 8] = [23, 183, 248, 55, 96, 216, 172, 96];

/// Discriminator, five u64 reserve fields, completion flag.
pub const BONDING_CURVE_MIN_LEN: usize = 8 + 5 * 8 + 1;

/// Reserve snapshot of one bonding curve account.
///
/// Values are a point-in-time copy of on-chain state; other trades may land
/// between the fetch and the quote, which is why every trade instruction
/// carries an explicit cost or proceeds bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BondingCurveState {
    // virtual reserves drive the pricing math
    pub virtual_token_reserves: u64,
    pub virtual_sol_reserves: u64,

    // real reserves are the balances actually held
    pub real_token_reserves: u64,
    pub real_sol_reserves: u64,

    pub token_total_supply: u64,

    // set once the curve has migrated to an AMM pool
    pub complete: bool,
}

impl BondingCurveState {
    /// Decodes an account data blob. Little-endian u64s at fixed offsets
    /// after the 8-byte discriminator; the discriminator itself is not
    /// inspected here, see [`Self::decode_checked`].
    pub fn decode(data: &[u8]) -> Result<Self> {
        require!(
            data.len() >= BONDING_CURVE_MIN_LEN,
            CurveError::MalformedAccount
        );
        Ok(Self {
            virtual_token_reserves: read_u64(data, 8),
            virtual_sol_reserves: read_u64(data, 16),
            real_token_reserves: read_u64(data, 24),
            real_sol_reserves: read_u64(data, 32),
            token_total_supply: read_u64(data, 40),
            complete: data[48] != 0,
        })
    }

    /// [`Self::decode`], but refuses blobs whose account-type discriminator
    /// is not the bonding curve's. Use when the bytes come from an address
    /// the caller did not derive itself.
    pub fn decode_checked(data: &[u8]) -> Result<Self> {
        require!(
            data.len() >= BONDING_CURVE_MIN_LEN,
            CurveError::MalformedAccount
        );
        require!(
            data[..8] == BONDING_CURVE_DISCRIMINATOR,
            CurveError::MalformedAccount
        );
        Self::decode(data)
    }

    /// Decodes the result of an account fetch, where `None` means the chain
    /// holds no account at the derived address: the curve does not exist.
    pub fn from_account_data(data: Option<&[u8]>) -> Result<Self> {
        match data {
            Some(bytes) => Self::decode(bytes),
            None => err!(CurveError::CurveNotFound),
        }
    }

    /// State of a curve the moment it launches, before any trade.
    pub fn initial() -> Self {
        Self {
            virtual_token_reserves: INITIAL_VIRTUAL_TOKEN_RESERVES,
            virtual_sol_reserves: INITIAL_VIRTUAL_SOL_RESERVES,
            real_token_reserves: INITIAL_REAL_TOKEN_RESERVES,
            real_sol_reserves: 0,
            token_total_supply: TOKEN_TOTAL_SUPPLY,
            complete: false,
        }
    }

    /// Tokens out for `lamports_in`. A completed curve no longer trades;
    /// callers surface that as "trading closed", not as a failure.
    pub fn quote_buy(&self, lamports_in: u64) -> Result<u64> {
        require!(!self.complete, CurveError::CurveComplete);
        curve::quote_buy(
            lamports_in,
            self.virtual_sol_reserves,
            self.virtual_token_reserves,
        )
    }

    /// Lamports out for selling `tokens_in`.
    pub fn quote_sell(&self, tokens_in: u64) -> Result<u64> {
        require!(!self.complete, CurveError::CurveComplete);
        curve::quote_sell(
            tokens_in,
            self.virtual_sol_reserves,
            self.virtual_token_reserves,
        )
    }

    /// Display price in SOL per whole token. Floating point, display only,
    /// never an input to settlement math.
    pub fn spot_price_sol(&self) -> f64 {
        if self.virtual_token_reserves == 0 {
            return 0.0;
        }
        // SOL carries 9 decimals, launchpad mints 6
        let v_sol = self.virtual_sol_reserves as f64 / 1e9;
        let v_tokens = self.virtual_token_reserves as f64 / 1e6;
        v_sol / v_tokens
    }

    /// Market cap of the full supply at the current virtual price.
    pub fn market_cap_lamports(&self) -> u64 {
        if self.virtual_token_reserves == 0 {
            return 0;
        }
        ((self.token_total_supply as u128 * self.virtual_sol_reserves as u128)
            / self.virtual_token_reserves as u128) as u64
    }
}

fn read_u64(data: &[u8], offset: usize) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&data[offset..offset + 8]);
    u64::from_le_bytes(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(state: &BondingCurveState, complete_byte: u8, trailing: usize) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&BONDING_CURVE_DISCRIMINATOR);
        data.extend_from_slice(&state.virtual_token_reserves.to_le_bytes());
        data.extend_from_slice(&state.virtual_sol_reserves.to_le_bytes());
        data.extend_from_slice(&state.real_token_reserves.to_le_bytes());
        data.extend_from_slice(&state.real_sol_reserves.to_le_bytes());
        data.extend_from_slice(&state.token_total_supply.to_le_bytes());
        data.push(complete_byte);
        data.extend(std::iter::repeat(0).take(trailing));
        data
    }

    fn sample() -> BondingCurveState {
        BondingCurveState {
            virtual_token_reserves: 1_000_000_000_000_000,
            virtual_sol_reserves: 30_000_000_000,
            real_token_reserves: 793_100_000_000_000,
            real_sol_reserves: 12_345_678,
            token_total_supply: 1_000_000_000_000_000,
            complete: false,
        }
    }

    #[test]
    fn decode_reads_all_reserve_fields() {
        let state = sample();
        let decoded = BondingCurveState::decode(&encode(&state, 0, 0)).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn decode_accepts_trailing_bytes() {
        // live accounts carry more fields after the completion flag
        let state = sample();
        let decoded = BondingCurveState::decode(&encode(&state, 0, 32)).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn short_buffer_is_rejected() {
        let data = encode(&sample(), 0, 0);
        assert_eq!(
            BondingCurveState::decode(&data[..BONDING_CURVE_MIN_LEN - 1]),
            Err(CurveError::MalformedAccount.into())
        );
        assert_eq!(
            BondingCurveState::decode(&[]),
            Err(CurveError::MalformedAccount.into())
        );
    }

    #[test]
    fn any_nonzero_completion_byte_marks_complete() {
        let decoded = BondingCurveState::decode(&encode(&sample(), 2, 0)).unwrap();
        assert!(decoded.complete);
    }

    #[test]
    fn checked_decode_requires_the_account_discriminator() {
        let mut data = encode(&sample(), 0, 0);
        assert!(BondingCurveState::decode_checked(&data).is_ok());

        data[0] ^= 0xff;
        assert_eq!(
            BondingCurveState::decode_checked(&data),
            Err(CurveError::MalformedAccount.into())
        );
        // the unchecked path keeps the observed behavior and does not care
        assert!(BondingCurveState::decode(&data).is_ok());
    }

    #[test]
    fn missing_account_means_no_curve() {
        assert_eq!(
            BondingCurveState::from_account_data(None),
            Err(CurveError::CurveNotFound.into())
        );
        let data = encode(&sample(), 0, 0);
        assert!(BondingCurveState::from_account_data(Some(&data)).is_ok());
    }

    #[test]
    fn completed_curve_refuses_quotes() {
        let state = BondingCurveState {
            complete: true,
            ..sample()
        };
        assert_eq!(
            state.quote_buy(1_000_000_000),
            Err(CurveError::CurveComplete.into())
        );
        assert_eq!(
            state.quote_sell(1_000_000),
            Err(CurveError::CurveComplete.into())
        );
    }

    #[test]
    fn quotes_delegate_to_the_curve_math() {
        let state = sample();
        assert_eq!(state.quote_buy(1_000_000_000).unwrap(), 32_258_064_516_130);
    }

    #[test]
    fn launch_state_market_cap() {
        assert_eq!(
            BondingCurveState::initial().market_cap_lamports(),
            27_958_993_476
        );
    }

    #[test]
    fn spot_price_of_launch_state_is_positive() {
        let price = BondingCurveState::initial().spot_price_sol();
        assert!(price > 0.0);
        assert!(price < 1e-3);
    }
}
