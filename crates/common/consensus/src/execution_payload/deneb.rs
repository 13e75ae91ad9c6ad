use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::{
    FixedVector, VariableList,
    serde_utils::{hex_fixed_vec, hex_var_list, list_of_hex_var_list},
};
use tessera_merkle::{HashTreeRoot, MerkleError, merkleize_container};

use super::{Transactions, Withdrawals};
use crate::{
    constants::{BytesPerLogsBloom, MaxExtraDataBytes},
    misc::checksummed_address,
};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode, Default)]
pub struct ExecutionPayloadDeneb {
    // Execution block header fields
    pub parent_hash: B256,
    #[serde(with = "checksummed_address")]
    pub fee_recipient: Address,
    pub state_root: B256,
    pub receipts_root: B256,
    #[serde(with = "hex_fixed_vec")]
    pub logs_bloom: FixedVector<u8, BytesPerLogsBloom>,
    pub prev_randao: B256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub block_number: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub gas_limit: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub gas_used: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub timestamp: u64,
    #[serde(with = "hex_var_list")]
    pub extra_data: VariableList<u8, MaxExtraDataBytes>,
    #[serde(with = "serde_utils::quoted_u256")]
    pub base_fee_per_gas: U256,

    // Extra payload fields
    pub block_hash: B256,
    #[serde(with = "list_of_hex_var_list")]
    pub transactions: Transactions,
    pub withdrawals: Withdrawals,
    #[serde(with = "serde_utils::quoted_u64")]
    pub blob_gas_used: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub excess_blob_gas: u64,
}

impl HashTreeRoot for ExecutionPayloadDeneb {
    fn hash_tree_root(&self) -> Result<B256, MerkleError> {
        Ok(merkleize_container(&[
            self.parent_hash,
            self.fee_recipient.hash_tree_root()?,
            self.state_root,
            self.receipts_root,
            self.logs_bloom.hash_tree_root()?,
            self.prev_randao,
            self.block_number.hash_tree_root()?,
            self.gas_limit.hash_tree_root()?,
            self.gas_used.hash_tree_root()?,
            self.timestamp.hash_tree_root()?,
            self.extra_data.hash_tree_root()?,
            self.base_fee_per_gas.hash_tree_root()?,
            self.block_hash,
            self.transactions.hash_tree_root()?,
            self.withdrawals.hash_tree_root()?,
            self.blob_gas_used.hash_tree_root()?,
            self.excess_blob_gas.hash_tree_root()?,
        ]))
    }
}
