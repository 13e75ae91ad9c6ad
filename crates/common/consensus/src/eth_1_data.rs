use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tessera_merkle::{HashTreeRoot, MerkleError, merkleize_container};

/// Execution-layer deposit contract snapshot voted on by proposers.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode, Hash, Default)]
pub struct Eth1Data {
    pub deposit_root: B256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub deposit_count: u64,
    pub block_hash: B256,
}

impl HashTreeRoot for Eth1Data {
    fn hash_tree_root(&self) -> Result<B256, MerkleError> {
        Ok(merkleize_container(&[
            self.deposit_root,
            self.deposit_count.hash_tree_root()?,
            self.block_hash,
        ]))
    }
}
