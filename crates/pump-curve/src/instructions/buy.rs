use anchor_lang::prelude::borsh;
use anchor_lang::AnchorSerialize;
use solana_program::instruction::Instruction;
use solana_program::pubkey::Pubkey;

use crate::config::ProtocolConfig;
use crate::instructions::{TradeKeys, BUY_ACCOUNTS};

/// Arguments of the buy instruction, in wire order.
#[derive(AnchorSerialize)]
pub struct Buy {
    pub amount: u64,
    pub max_sol_cost: u64,
}

impl Buy {
    // global:buy
    pub const DISCRIMINATOR: [u8; 8] = [0x66, 0x06, 0x3d, 0x12, 0x01, 0xda, 0xeb, 0xea];

    pub fn data(&self) -> Vec<u8> {
        let mut data = Self::DISCRIMINATOR.to_vec();
        data.extend_from_slice(&self.amount.to_le_bytes());
        data.extend_from_slice(&self.max_sol_cost.to_le_bytes());
        data
    }
}

/// Buys `amount` token base units, paying at most `max_sol_cost` lamports.
/// The bound is what makes a stale quote fail instead of fill.
pub fn buy_instruction(
    config: &ProtocolConfig,
    user: &Pubkey,
    mint: &Pubkey,
    amount: u64,
    max_sol_cost: u64,
) -> Instruction {
    buy_instruction_with_keys(
        config,
        &TradeKeys::derive(config, user, mint),
        amount,
        max_sol_cost,
    )
}

/// Variant for callers that already resolved the trade accounts.
pub fn buy_instruction_with_keys(
    config: &ProtocolConfig,
    keys: &TradeKeys,
    amount: u64,
    max_sol_cost: u64,
) -> Instruction {
    Instruction {
        program_id: config.program_id,
        accounts: keys.account_metas(&BUY_ACCOUNTS, config),
        data: Buy {
            amount,
            max_sol_cost,
        }
        .data(),
    }
}
