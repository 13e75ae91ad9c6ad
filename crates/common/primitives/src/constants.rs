use crate::{Epoch, Gwei};

pub const FAR_FUTURE_EPOCH: Epoch = u64::MAX;
pub const SLOTS_PER_EPOCH: u64 = 32;

// Gwei values
pub const EFFECTIVE_BALANCE_INCREMENT: Gwei = 1_000_000_000;
pub const MAX_EFFECTIVE_BALANCE: Gwei = 32_000_000_000;

// Block body capacities
pub const MAX_BLOB_COMMITMENTS_PER_BLOCK: u64 = 16;
pub const MAX_DEPOSITS: u64 = 16;

// Fixed widths
pub const BYTES_PER_COMMITMENT: usize = 48;
pub const BYTES_PER_PUBKEY: usize = 48;
pub const BYTES_PER_SIGNATURE: usize = 96;

// Withdrawal prefixes
pub const BLS_WITHDRAWAL_PREFIX: u8 = 0x00;
pub const ETH1_ADDRESS_WITHDRAWAL_PREFIX: u8 = 0x01;
