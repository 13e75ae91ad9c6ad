use tessera_consensus::ConsensusError;
use tessera_primitives::{ValidatorIndex, crypto::BLSPubkey};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Key/value backend error: {0}")]
    Backend(String),

    #[error("Failed to decode SSZ bytes, data corruption? {0}")]
    Decode(String),

    #[error("Validator {index} is out of bounds for a registry of {count}")]
    IndexOutOfBounds {
        index: ValidatorIndex,
        count: u64,
    },

    #[error("Validator with pubkey {0} is already registered")]
    DuplicatePubkey(BLSPubkey),

    #[error("Validator {index} cannot change its pubkey")]
    PubkeyMismatch { index: ValidatorIndex },

    #[error(transparent)]
    Consensus(#[from] ConsensusError),
}
