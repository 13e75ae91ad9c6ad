pub mod capella;
pub mod deneb;

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use ssz_types::{VariableList, typenum::Unsigned};
use tessera_chain_spec::ForkName;
use tessera_merkle::{HashTreeRoot, MerkleError, required_root};
use tessera_primitives::{Bytes32, crypto::BLSSignature};

pub use self::{
    capella::BeaconBlockBodyCapella,
    deneb::{BeaconBlockBodyDeneb, verify_blob_kzg_commitment_inclusion_proof},
};
use crate::{
    constants::MaxDeposits, deposit::Deposit, errors::ConsensusError, eth_1_data::Eth1Data,
    execution_payload::ExecutionPayload,
};

pub type Deposits = VariableList<Deposit, MaxDeposits>;

/// Field access and commitments shared by the block bodies of every fork.
pub trait BeaconBlockBody: HashTreeRoot {
    fn fork_name(&self) -> ForkName;

    fn randao_reveal(&self) -> &BLSSignature;

    fn set_randao_reveal(&mut self, randao_reveal: BLSSignature);

    fn eth1_data(&self) -> Option<&Eth1Data>;

    fn set_eth1_data(&mut self, eth1_data: Eth1Data);

    fn graffiti(&self) -> &Bytes32;

    fn set_graffiti(&mut self, graffiti: Bytes32);

    fn deposits(&self) -> &[Deposit];

    /// Replace the deposit list, failing if it holds more than ``MAX_DEPOSITS`` entries.
    fn set_deposits(&mut self, deposits: Vec<Deposit>) -> Result<(), ConsensusError>;

    /// Install ``payload`` as this body's execution payload.
    ///
    /// Fails with [`ConsensusError::WrongExecutionVariant`] when the payload belongs to a
    /// different fork than the body; the body is left untouched in that case.
    fn attach_execution(&mut self, payload: ExecutionPayload) -> Result<(), ConsensusError>;

    /// Roots of every field in declaration order, except ``blob_kzg_commitments``.
    ///
    /// Both forks return five roots; there is no zero placeholder for the blob commitments slot,
    /// so a Deneb caller must not index position 5.
    /// Blob commitments are committed through
    /// [`BeaconBlockBodyDeneb::blob_kzg_commitment_inclusion_proof`] instead.
    fn top_level_roots(&self) -> Result<Vec<B256>, ConsensusError>;
}

/// Fields common to every fork's block body, nested by value in each fork's body.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct BeaconBlockBodyBase {
    pub randao_reveal: BLSSignature,

    /// Eth1 data vote
    pub eth1_data: Option<Eth1Data>,

    /// Arbitrary data
    pub graffiti: Bytes32,

    pub deposits: Deposits,
}

impl BeaconBlockBodyBase {
    pub fn field_roots(&self) -> Result<[B256; 4], MerkleError> {
        Ok([
            self.randao_reveal.hash_tree_root()?,
            required_root(self.eth1_data.as_ref(), "eth1_data")?,
            self.graffiti.hash_tree_root()?,
            self.deposits.hash_tree_root()?,
        ])
    }

    pub fn set_deposits(&mut self, deposits: Vec<Deposit>) -> Result<(), ConsensusError> {
        self.deposits = bounded_list(deposits, "deposits")?;
        Ok(())
    }
}

pub(crate) fn bounded_list<T, N: Unsigned>(
    items: Vec<T>,
    field: &'static str,
) -> Result<VariableList<T, N>, ConsensusError> {
    let count = items.len();
    VariableList::new(items).map_err(|_| ConsensusError::CapacityExceeded {
        field,
        count,
        limit: N::to_usize(),
    })
}
