use anchor_lang::prelude::*;
use solana_program::pubkey::Pubkey;

use crate::error::CurveError;

// Pump.fun program ID
pub const PUMPFUN_PROGRAM_ID: &str = "6EF8rrecthR5Dkzon8Nwu78hRvfCKubJ14M5uBEwF6P";

// Global config account
pub const GLOBAL_ACCOUNT: &str = "4wTV1YmiEkRvAtNtsSGPtUrqryQMe5hx1q7SPrqC9Ju";

// Event authority PDA
pub const EVENT_AUTHORITY: &str = "Ce6TQqeHC9p8KetsN6JsjHK7UTZk7nasjjnr7XxXp9F1";

/// Reserve state the program writes for a freshly launched curve.
pub const INITIAL_VIRTUAL_TOKEN_RESERVES: u64 = 1_073_000_000_000_000;
pub const INITIAL_VIRTUAL_SOL_RESERVES: u64 = 30_000_000_000;
pub const INITIAL_REAL_TOKEN_RESERVES: u64 = 793_100_000_000_000;
pub const TOKEN_TOTAL_SUPPLY: u64 = 1_000_000_000_000_000;

/// Fixed protocol addresses a trade instruction references. Built once at
/// startup and passed by reference; a staging deployment only needs a
/// different set of strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolConfig {
    pub program_id: Pubkey,
    pub global: Pubkey,
    pub fee_recipient: Pubkey,
    pub event_authority: Pubkey,
}

impl ProtocolConfig {
    /// Mainnet deployment. The fee recipient is operator-specific and comes
    /// from the caller's own configuration.
    pub fn mainnet(fee_recipient: Pubkey) -> Self {
        Self {
            program_id: PUMPFUN_PROGRAM_ID.parse::<Pubkey>().unwrap(),
            global: GLOBAL_ACCOUNT.parse::<Pubkey>().unwrap(),
            fee_recipient,
            event_authority: EVENT_AUTHORITY.parse::<Pubkey>().unwrap(),
        }
    }

    pub fn from_strs(
        program_id: &str,
        global: &str,
        fee_recipient: &str,
        event_authority: &str,
    ) -> Result<Self> {
        Ok(Self {
            program_id: parse_pubkey(program_id)?,
            global: parse_pubkey(global)?,
            fee_recipient: parse_pubkey(fee_recipient)?,
            event_authority: parse_pubkey(event_authority)?,
        })
    }
}

pub fn parse_pubkey(value: &str) -> Result<Pubkey> {
    value
        .parse::<Pubkey>()
        .map_err(|_| error!(CurveError::InvalidAddress))
}
