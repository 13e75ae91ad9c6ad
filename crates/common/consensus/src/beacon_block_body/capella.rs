use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use tessera_chain_spec::ForkName;
use tessera_merkle::{HashTreeRoot, MerkleError, merkleize_container, required_root};
use tessera_primitives::{Bytes32, crypto::BLSSignature};
use tracing::warn;

use super::{BeaconBlockBody, BeaconBlockBodyBase};
use crate::{
    deposit::Deposit,
    errors::ConsensusError,
    eth_1_data::Eth1Data,
    execution_payload::{ExecutionPayload, ExecutionPayloadCapella},
};

#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct BeaconBlockBodyCapella {
    #[serde(flatten)]
    pub base: BeaconBlockBodyBase,

    // Execution
    pub execution_payload: Option<ExecutionPayloadCapella>,
}

impl BeaconBlockBodyCapella {
    pub fn execution_payload(&self) -> Option<&ExecutionPayloadCapella> {
        self.execution_payload.as_ref()
    }

    pub fn set_execution_payload(&mut self, execution_payload: ExecutionPayloadCapella) {
        self.execution_payload = Some(execution_payload);
    }

    pub fn merkle_leaves(&self) -> Result<Vec<B256>, MerkleError> {
        let mut leaves = self.base.field_roots()?.to_vec();
        leaves.push(required_root(
            self.execution_payload.as_ref(),
            "execution_payload",
        )?);
        Ok(leaves)
    }
}

impl BeaconBlockBody for BeaconBlockBodyCapella {
    fn fork_name(&self) -> ForkName {
        ForkName::Capella
    }

    fn randao_reveal(&self) -> &BLSSignature {
        &self.base.randao_reveal
    }

    fn set_randao_reveal(&mut self, randao_reveal: BLSSignature) {
        self.base.randao_reveal = randao_reveal;
    }

    fn eth1_data(&self) -> Option<&Eth1Data> {
        self.base.eth1_data.as_ref()
    }

    fn set_eth1_data(&mut self, eth1_data: Eth1Data) {
        self.base.eth1_data = Some(eth1_data);
    }

    fn graffiti(&self) -> &Bytes32 {
        &self.base.graffiti
    }

    fn set_graffiti(&mut self, graffiti: Bytes32) {
        self.base.graffiti = graffiti;
    }

    fn deposits(&self) -> &[Deposit] {
        &self.base.deposits
    }

    fn set_deposits(&mut self, deposits: Vec<Deposit>) -> Result<(), ConsensusError> {
        self.base.set_deposits(deposits)
    }

    fn attach_execution(&mut self, payload: ExecutionPayload) -> Result<(), ConsensusError> {
        match payload {
            ExecutionPayload::Capella(payload) => {
                self.execution_payload = Some(payload);
                Ok(())
            }
            other => {
                warn!(
                    expected = %ForkName::Capella,
                    found = %other.fork_name(),
                    "Rejected execution payload from another fork"
                );
                Err(ConsensusError::WrongExecutionVariant {
                    expected: ForkName::Capella,
                    found: other.fork_name(),
                })
            }
        }
    }

    fn top_level_roots(&self) -> Result<Vec<B256>, ConsensusError> {
        Ok(self.merkle_leaves()?)
    }
}

impl HashTreeRoot for BeaconBlockBodyCapella {
    fn hash_tree_root(&self) -> Result<B256, MerkleError> {
        Ok(merkleize_container(&self.merkle_leaves()?))
    }
}
