use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;
use solana_program::pubkey::Pubkey;

use crate::config::{parse_pubkey, ProtocolConfig};

/// Seed prefix of bonding curve accounts.
pub const BONDING_CURVE_SEED: &[u8] = b"bonding-curve";

/// Derives the bonding curve account address for a token mint. The bump is
/// returned for completeness; only the address is needed downstream.
pub fn bonding_curve_address(mint: &Pubkey, config: &ProtocolConfig) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[BONDING_CURVE_SEED, mint.as_ref()], &config.program_id)
}

/// Same derivation for callers holding the mint as base58 text.
pub fn bonding_curve_address_for_mint(
    mint: &str,
    config: &ProtocolConfig,
) -> Result<(Pubkey, u8)> {
    Ok(bonding_curve_address(&parse_pubkey(mint)?, config))
}

/// Token account holding the curve's real token reserves.
pub fn bonding_curve_vault(mint: &Pubkey, bonding_curve: &Pubkey) -> Pubkey {
    get_associated_token_address(bonding_curve, mint)
}

/// The trader's associated token account for the mint.
pub fn user_token_account(user: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(user, mint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CurveError;

    fn config() -> ProtocolConfig {
        ProtocolConfig::mainnet(Pubkey::new_unique())
    }

    #[test]
    fn derivation_is_deterministic() {
        let config = config();
        let mint = Pubkey::new_unique();
        let first = bonding_curve_address(&mint, &config);
        let second = bonding_curve_address(&mint, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn distinct_mints_derive_distinct_curves() {
        let config = config();
        let (a, _) = bonding_curve_address(&Pubkey::new_unique(), &config);
        let (b, _) = bonding_curve_address(&Pubkey::new_unique(), &config);
        assert_ne!(a, b);
    }

    #[test]
    fn text_mint_matches_typed_derivation() {
        let config = config();
        let mint = Pubkey::new_unique();
        let typed = bonding_curve_address(&mint, &config);
        let parsed = bonding_curve_address_for_mint(&mint.to_string(), &config).unwrap();
        assert_eq!(typed, parsed);
    }

    #[test]
    fn malformed_mint_text_is_rejected() {
        let result = bonding_curve_address_for_mint("definitely-not-base58!", &config());
        assert_eq!(result, Err(CurveError::InvalidAddress.into()));
    }

    #[test]
    fn vault_and_user_accounts_differ() {
        let config = config();
        let mint = Pubkey::new_unique();
        let user = Pubkey::new_unique();
        let (curve, _) = bonding_curve_address(&mint, &config);
        assert_ne!(
            bonding_curve_vault(&mint, &curve),
            user_token_account(&user, &mint)
        );
    }
}
