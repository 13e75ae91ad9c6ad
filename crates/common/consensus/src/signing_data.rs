use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tessera_merkle::{HashTreeRoot, MerkleError, merkleize_container};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode)]
pub struct SigningData {
    pub object_root: B256,
    pub domain: B256,
}

impl HashTreeRoot for SigningData {
    fn hash_tree_root(&self) -> Result<B256, MerkleError> {
        Ok(merkleize_container(&[self.object_root, self.domain]))
    }
}
