use tessera_chain_spec::ForkName;
use tessera_merkle::MerkleError;
use tessera_primitives::crypto::BLSPubkey;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsensusError {
    #[error("Withdrawal credentials do not carry an execution address")]
    InvalidWithdrawalCredentials,

    #[error("Cannot attach a {found} execution payload to a {expected} block body")]
    WrongExecutionVariant { expected: ForkName, found: ForkName },

    #[error("{field} holds {count} entries but its capacity is {limit}")]
    CapacityExceeded {
        field: &'static str,
        count: usize,
        limit: usize,
    },

    #[error("Invalid deposit signature for {pubkey}")]
    InvalidDepositSignature { pubkey: BLSPubkey },

    #[error("Signature backend error: {0}")]
    SignatureBackend(String),

    #[error(transparent)]
    Merkle(#[from] MerkleError),
}
