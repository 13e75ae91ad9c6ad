use alloy_primitives::{B256, aliases::B32};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tessera_merkle::{HashTreeRoot, MerkleError, merkleize_container};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode)]
pub struct ForkData {
    pub current_version: B32,
    pub genesis_validators_root: B256,
}

impl ForkData {
    /// Return the 32-byte fork data root for the ``current_version`` and
    /// ``genesis_validators_root``. This is used primarily in signature domains to avoid
    /// collisions across forks/chains.
    pub fn compute_fork_data_root(&self) -> Result<B256, MerkleError> {
        self.hash_tree_root()
    }
}

impl HashTreeRoot for ForkData {
    fn hash_tree_root(&self) -> Result<B256, MerkleError> {
        Ok(merkleize_container(&[
            self.current_version.hash_tree_root()?,
            self.genesis_validators_root,
        ]))
    }
}
