use anchor_spl::token;
use solana_program::instruction::AccountMeta;
use solana_program::pubkey::Pubkey;
use solana_program::{system_program, sysvar};

use crate::config::ProtocolConfig;
use crate::pda;

/// Roles an account can fill in a trade instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeAccount {
    Global,
    FeeRecipient,
    Mint,
    BondingCurve,
    BondingCurveVault,
    UserTokenAccount,
    User,
    SystemProgram,
    TokenProgram,
    Rent,
    EventAuthority,
    Program,
}

/// One entry of a fixed account table: a role plus its meta flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountSlot {
    pub account: TradeAccount,
    pub is_signer: bool,
    pub is_writable: bool,
}

const fn readonly(account: TradeAccount) -> AccountSlot {
    AccountSlot {
        account,
        is_signer: false,
        is_writable: false,
    }
}

const fn writable(account: TradeAccount) -> AccountSlot {
    AccountSlot {
        account,
        is_signer: false,
        is_writable: true,
    }
}

const fn signer(account: TradeAccount) -> AccountSlot {
    AccountSlot {
        account,
        is_signer: true,
        is_writable: true,
    }
}

/// Account order the program expects for a buy. The program matches
/// accounts by position, so the order is part of the wire contract.
pub const BUY_ACCOUNTS: [AccountSlot; 12] = [
    readonly(TradeAccount::Global),
    writable(TradeAccount::FeeRecipient),
    readonly(TradeAccount::Mint),
    writable(TradeAccount::BondingCurve),
    writable(TradeAccount::BondingCurveVault),
    writable(TradeAccount::UserTokenAccount),
    signer(TradeAccount::User),
    readonly(TradeAccount::SystemProgram),
    readonly(TradeAccount::TokenProgram),
    readonly(TradeAccount::Rent),
    readonly(TradeAccount::EventAuthority),
    readonly(TradeAccount::Program),
];

/// Sell differs from buy only in dropping the rent sysvar.
pub const SELL_ACCOUNTS: [AccountSlot; 11] = [
    readonly(TradeAccount::Global),
    writable(TradeAccount::FeeRecipient),
    readonly(TradeAccount::Mint),
    writable(TradeAccount::BondingCurve),
    writable(TradeAccount::BondingCurveVault),
    writable(TradeAccount::UserTokenAccount),
    signer(TradeAccount::User),
    readonly(TradeAccount::SystemProgram),
    readonly(TradeAccount::TokenProgram),
    readonly(TradeAccount::EventAuthority),
    readonly(TradeAccount::Program),
];

/// Per-trade addresses filling the variable slots of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeKeys {
    pub user: Pubkey,
    pub mint: Pubkey,
    pub bonding_curve: Pubkey,
    pub bonding_curve_vault: Pubkey,
    pub user_token_account: Pubkey,
}

impl TradeKeys {
    /// Derives the curve account and both associated token accounts for a
    /// trade on `mint` by `user`.
    pub fn derive(config: &ProtocolConfig, user: &Pubkey, mint: &Pubkey) -> Self {
        let (bonding_curve, _bump) = pda::bonding_curve_address(mint, config);
        Self {
            user: *user,
            mint: *mint,
            bonding_curve,
            bonding_curve_vault: pda::bonding_curve_vault(mint, &bonding_curve),
            user_token_account: pda::user_token_account(user, mint),
        }
    }

    fn address_of(&self, account: TradeAccount, config: &ProtocolConfig) -> Pubkey {
        match account {
            TradeAccount::Global => config.global,
            TradeAccount::FeeRecipient => config.fee_recipient,
            TradeAccount::Mint => self.mint,
            TradeAccount::BondingCurve => self.bonding_curve,
            TradeAccount::BondingCurveVault => self.bonding_curve_vault,
            TradeAccount::UserTokenAccount => self.user_token_account,
            TradeAccount::User => self.user,
            TradeAccount::SystemProgram => system_program::ID,
            TradeAccount::TokenProgram => token::ID,
            TradeAccount::Rent => sysvar::rent::ID,
            TradeAccount::EventAuthority => config.event_authority,
            TradeAccount::Program => config.program_id,
        }
    }

    /// Resolves a table into the ordered metas an instruction carries.
    pub fn account_metas(&self, table: &[AccountSlot], config: &ProtocolConfig) -> Vec<AccountMeta> {
        table
            .iter()
            .map(|slot| {
                let key = self.address_of(slot.account, config);
                if slot.is_writable {
                    AccountMeta::new(key, slot.is_signer)
                } else {
                    AccountMeta::new_readonly(key, slot.is_signer)
                }
            })
            .collect()
    }
}
