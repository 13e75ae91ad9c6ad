pub mod capella;
pub mod deneb;

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use ssz_types::VariableList;
use tessera_chain_spec::ForkName;
use tessera_merkle::{HashTreeRoot, MerkleError};

pub use self::{capella::ExecutionPayloadCapella, deneb::ExecutionPayloadDeneb};
use crate::{
    constants::{MaxBytesPerTransaction, MaxTransactionsPerPayload, MaxWithdrawalsPerPayload},
    withdrawal::Withdrawal,
};

pub type Transaction = VariableList<u8, MaxBytesPerTransaction>;
pub type Transactions = VariableList<Transaction, MaxTransactionsPerPayload>;
pub type Withdrawals = VariableList<Withdrawal, MaxWithdrawalsPerPayload>;

/// An execution payload of any supported fork, tagged by the fork it belongs to.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(tag = "version", content = "data", rename_all = "lowercase")]
pub enum ExecutionPayload {
    Capella(ExecutionPayloadCapella),
    Deneb(ExecutionPayloadDeneb),
}

impl ExecutionPayload {
    pub fn fork_name(&self) -> ForkName {
        match self {
            ExecutionPayload::Capella(_) => ForkName::Capella,
            ExecutionPayload::Deneb(_) => ForkName::Deneb,
        }
    }

    pub fn block_hash(&self) -> B256 {
        match self {
            ExecutionPayload::Capella(payload) => payload.block_hash,
            ExecutionPayload::Deneb(payload) => payload.block_hash,
        }
    }

    pub fn withdrawals(&self) -> &[Withdrawal] {
        match self {
            ExecutionPayload::Capella(payload) => &payload.withdrawals,
            ExecutionPayload::Deneb(payload) => &payload.withdrawals,
        }
    }
}

impl From<ExecutionPayloadCapella> for ExecutionPayload {
    fn from(payload: ExecutionPayloadCapella) -> Self {
        ExecutionPayload::Capella(payload)
    }
}

impl From<ExecutionPayloadDeneb> for ExecutionPayload {
    fn from(payload: ExecutionPayloadDeneb) -> Self {
        ExecutionPayload::Deneb(payload)
    }
}

impl HashTreeRoot for ExecutionPayload {
    fn hash_tree_root(&self) -> Result<B256, MerkleError> {
        match self {
            ExecutionPayload::Capella(payload) => payload.hash_tree_root(),
            ExecutionPayload::Deneb(payload) => payload.hash_tree_root(),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{Address, U256};
    use tessera_merkle::{merkleize_container, zero_hash};

    use super::*;

    fn capella() -> ExecutionPayloadCapella {
        ExecutionPayloadCapella {
            block_hash: B256::repeat_byte(0xBB),
            fee_recipient: Address::repeat_byte(0x11),
            block_number: 17_034_870,
            base_fee_per_gas: U256::from(7),
            transactions: VariableList::new(vec![
                VariableList::new(vec![0x02, 0xf8, 0x70]).unwrap(),
            ])
            .unwrap(),
            withdrawals: VariableList::new(vec![Withdrawal {
                index: 0,
                validator_index: 42,
                address: Address::repeat_byte(0x22),
                amount: 1_000,
            }])
            .unwrap(),
            ..Default::default()
        }
    }

    fn deneb() -> ExecutionPayloadDeneb {
        let capella = capella();
        ExecutionPayloadDeneb {
            parent_hash: capella.parent_hash,
            fee_recipient: capella.fee_recipient,
            state_root: capella.state_root,
            receipts_root: capella.receipts_root,
            logs_bloom: capella.logs_bloom,
            prev_randao: capella.prev_randao,
            block_number: capella.block_number,
            gas_limit: capella.gas_limit,
            gas_used: capella.gas_used,
            timestamp: capella.timestamp,
            extra_data: capella.extra_data,
            base_fee_per_gas: capella.base_fee_per_gas,
            block_hash: capella.block_hash,
            transactions: capella.transactions,
            withdrawals: capella.withdrawals,
            blob_gas_used: 131_072,
            excess_blob_gas: 0,
        }
    }

    #[test]
    fn test_variant_accessors() {
        let capella = ExecutionPayload::from(capella());
        let deneb = ExecutionPayload::from(deneb());
        assert_eq!(capella.fork_name(), ForkName::Capella);
        assert_eq!(deneb.fork_name(), ForkName::Deneb);
        assert_eq!(capella.block_hash(), deneb.block_hash());
        assert_eq!(deneb.withdrawals()[0].validator_index, 42);
    }

    #[test]
    fn test_forks_commit_to_different_roots() {
        let capella = ExecutionPayload::from(capella());
        let deneb = ExecutionPayload::from(deneb());
        assert_ne!(
            capella.hash_tree_root().unwrap(),
            deneb.hash_tree_root().unwrap()
        );
        assert_eq!(
            capella.hash_tree_root().unwrap(),
            ExecutionPayload::from(self::capella()).hash_tree_root().unwrap()
        );
    }

    #[test]
    fn test_empty_payload_root() {
        let payload = ExecutionPayloadCapella::default();
        let empty_list = |depth| tessera_merkle::mix_in_length(zero_hash(depth), 0);
        // 256-byte bloom spans 8 chunks; transactions list has 2^20 slots, withdrawals 16.
        let expected = merkleize_container(&[
            B256::ZERO,
            B256::ZERO,
            B256::ZERO,
            B256::ZERO,
            zero_hash(3),
            B256::ZERO,
            B256::ZERO,
            B256::ZERO,
            B256::ZERO,
            B256::ZERO,
            empty_list(0),
            B256::ZERO,
            B256::ZERO,
            empty_list(20),
            empty_list(4),
        ]);
        assert_eq!(payload.hash_tree_root().unwrap(), expected);
    }

    #[test]
    fn test_json_is_version_tagged() {
        let json = serde_json::to_value(ExecutionPayload::from(deneb())).unwrap();
        assert_eq!(json["version"], "deneb");
        assert_eq!(json["data"]["blob_gas_used"], "131072");
        assert_eq!(json["data"]["transactions"][0], "0x02f870");

        let decoded: ExecutionPayload = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, ExecutionPayload::from(deneb()));
    }
}
