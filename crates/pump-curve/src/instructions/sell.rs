use anchor_lang::prelude::borsh;
use anchor_lang::AnchorSerialize;
use solana_program::instruction::Instruction;
use solana_program::pubkey::Pubkey;

use crate::config::ProtocolConfig;
use crate::instructions::{TradeKeys, SELL_ACCOUNTS};

/// Arguments of the sell instruction, in wire order.
#[derive(AnchorSerialize)]
pub struct Sell {
    pub amount: u64,
    pub min_sol_output: u64,
}

impl Sell {
    // global:sell
    pub const DISCRIMINATOR: [u8; 8] = [0x33, 0xe6, 0x85, 0xa4, 0x01, 0x7f, 0x83, 0xad];

    pub fn data(&self) -> Vec<u8> {
        let mut data = Self::DISCRIMINATOR.to_vec();
        data.extend_from_slice(&self.amount.to_le_bytes());
        data.extend_from_slice(&self.min_sol_output.to_le_bytes());
        data
    }
}

/// Sells `amount` token base units for no less than `min_sol_output`
/// lamports.
pub fn sell_instruction(
    config: &ProtocolConfig,
    user: &Pubkey,
    mint: &Pubkey,
    amount: u64,
    min_sol_output: u64,
) -> Instruction {
    sell_instruction_with_keys(
        config,
        &TradeKeys::derive(config, user, mint),
        amount,
        min_sol_output,
    )
}

/// Variant for callers that already resolved the trade accounts.
pub fn sell_instruction_with_keys(
    config: &ProtocolConfig,
    keys: &TradeKeys,
    amount: u64,
    min_sol_output: u64,
) -> Instruction {
    Instruction {
        program_id: config.program_id,
        accounts: keys.account_metas(&SELL_ACCOUNTS, config),
        data: Sell {
            amount,
            min_sol_output,
        }
        .data(),
    }
}
