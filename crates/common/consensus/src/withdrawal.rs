use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tessera_merkle::{HashTreeRoot, MerkleError, merkleize_container};
use tessera_primitives::{Gwei, ValidatorIndex};

use crate::misc::checksummed_address;

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode)]
pub struct Withdrawal {
    #[serde(with = "serde_utils::quoted_u64")]
    pub index: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub validator_index: ValidatorIndex,
    #[serde(with = "checksummed_address")]
    pub address: Address,
    #[serde(with = "serde_utils::quoted_u64")]
    pub amount: Gwei,
}

impl HashTreeRoot for Withdrawal {
    fn hash_tree_root(&self) -> Result<B256, MerkleError> {
        Ok(merkleize_container(&[
            self.index.hash_tree_root()?,
            self.validator_index.hash_tree_root()?,
            self.address.hash_tree_root()?,
            self.amount.hash_tree_root()?,
        ]))
    }
}
