//! Client-side quoting and instruction encoding for the pump.fun bonding
//! curve. Everything here is pure computation: callers fetch account bytes
//! and submit the signed transaction through their own RPC layer.

pub mod config;
pub mod curve;
pub mod error;
pub mod instructions;
pub mod pda;
pub mod state;
pub mod units;

pub use config::ProtocolConfig;
pub use error::CurveError;
pub use instructions::{buy_instruction, sell_instruction, TradeKeys, TradeKind};
pub use state::BondingCurveState;
