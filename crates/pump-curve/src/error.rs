use anchor_lang::prelude::*;

#[error_code]
pub enum CurveError {
    #[msg("Malformed base58 public key")]
    InvalidAddress,

    #[msg("Bonding curve account data is too short or has the wrong shape")]
    MalformedAccount,

    #[msg("Bonding curve has a zero virtual reserve")]
    CurveState,

    #[msg("Trade amount is negative, non-numeric or finer than one base unit")]
    InvalidAmount,

    #[msg("Amount or bound does not fit the unsigned 64-bit wire range")]
    ValueOverflow,

    #[msg("Bonding curve is complete; trading is closed for this token")]
    CurveComplete,

    #[msg("No bonding curve account exists at the derived address")]
    CurveNotFound,
}
