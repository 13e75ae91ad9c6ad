use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainSpecError {
    #[error("{field} is {configured}, but the protocol fixes it at {expected}")]
    CapacityMismatch {
        field: &'static str,
        configured: u64,
        expected: u64,
    },

    #[error("EFFECTIVE_BALANCE_INCREMENT must be non-zero")]
    ZeroBalanceIncrement,

    #[error("MAX_EFFECTIVE_BALANCE {max_effective_balance} is not a multiple of {increment}")]
    UnalignedMaxEffectiveBalance {
        max_effective_balance: u64,
        increment: u64,
    },
}
