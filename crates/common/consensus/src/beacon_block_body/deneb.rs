use alloy_primitives::B256;
use anyhow::ensure;
use serde::{Deserialize, Serialize};
use ssz_types::{VariableList, typenum::Unsigned};
use tessera_chain_spec::ForkName;
use tessera_merkle::{
    HashTreeRoot, MerkleError, generate_proof, is_valid_merkle_branch, length_chunk,
    merkle_tree, merkleize_container, required_root,
};
use tessera_primitives::{
    Bytes32,
    crypto::{BLSSignature, KZGCommitment},
};
use tracing::warn;

use super::{BeaconBlockBody, BeaconBlockBodyBase, bounded_list};
use crate::{
    constants::{
        BLOB_KZG_COMMITMENTS_INDEX, BLOCK_BODY_MERKLE_DEPTH, KZG_COMMITMENT_INCLUSION_PROOF_DEPTH,
        KZG_COMMITMENTS_MERKLE_DEPTH, MaxBlobCommitmentsPerBlock,
    },
    deposit::Deposit,
    errors::ConsensusError,
    eth_1_data::Eth1Data,
    execution_payload::{ExecutionPayload, ExecutionPayloadDeneb},
};

pub type BlobKzgCommitments = VariableList<KZGCommitment, MaxBlobCommitmentsPerBlock>;

#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct BeaconBlockBodyDeneb {
    #[serde(flatten)]
    pub base: BeaconBlockBodyBase,

    // Execution
    pub execution_payload: Option<ExecutionPayloadDeneb>,
    pub blob_kzg_commitments: BlobKzgCommitments,
}

impl BeaconBlockBodyDeneb {
    pub fn execution_payload(&self) -> Option<&ExecutionPayloadDeneb> {
        self.execution_payload.as_ref()
    }

    pub fn set_execution_payload(&mut self, execution_payload: ExecutionPayloadDeneb) {
        self.execution_payload = Some(execution_payload);
    }

    pub fn blob_kzg_commitments(&self) -> &[KZGCommitment] {
        &self.blob_kzg_commitments
    }

    /// Replace the commitment list, failing if it holds more than
    /// ``MAX_BLOB_COMMITMENTS_PER_BLOCK`` entries.
    pub fn set_blob_kzg_commitments(
        &mut self,
        blob_kzg_commitments: Vec<KZGCommitment>,
    ) -> Result<(), ConsensusError> {
        self.blob_kzg_commitments = bounded_list(blob_kzg_commitments, "blob_kzg_commitments")?;
        Ok(())
    }

    fn field_roots(&self) -> Result<Vec<B256>, MerkleError> {
        let mut roots = self.base.field_roots()?.to_vec();
        roots.push(required_root(
            self.execution_payload.as_ref(),
            "execution_payload",
        )?);
        Ok(roots)
    }

    pub fn merkle_leaves(&self) -> Result<Vec<B256>, MerkleError> {
        let mut leaves = self.field_roots()?;
        leaves.push(self.blob_kzg_commitments.hash_tree_root()?);
        Ok(leaves)
    }

    /// Branch proving that the commitment at ``index`` is committed to by this body's root.
    ///
    /// The branch is ordered bottom-up: four nodes inside the commitment list, the list length
    /// chunk, then three nodes inside the body.
    pub fn blob_kzg_commitment_inclusion_proof(&self, index: u64) -> anyhow::Result<Vec<B256>> {
        ensure!(
            index < self.blob_kzg_commitments.len() as u64,
            "Blob commitment index {index} out of range"
        );

        // inclusion proof for blob_kzg_commitment in blob_kzg_commitments
        let commitment_roots = self
            .blob_kzg_commitments
            .iter()
            .map(HashTreeRoot::hash_tree_root)
            .collect::<Result<Vec<_>, _>>()?;
        let tree = merkle_tree(&commitment_roots, KZG_COMMITMENTS_MERKLE_DEPTH)?;
        let kzg_commitment_to_kzg_commitments_proof =
            generate_proof(&tree, index, KZG_COMMITMENTS_MERKLE_DEPTH)?;

        // inclusion proof for blob_kzg_commitments in beacon_block_body
        let tree = merkle_tree(&self.merkle_leaves()?, BLOCK_BODY_MERKLE_DEPTH)?;
        let kzg_commitments_to_block_body_proof =
            generate_proof(&tree, BLOB_KZG_COMMITMENTS_INDEX, BLOCK_BODY_MERKLE_DEPTH)?;

        Ok([
            kzg_commitment_to_kzg_commitments_proof,
            vec![length_chunk(self.blob_kzg_commitments.len())],
            kzg_commitments_to_block_body_proof,
        ]
        .concat())
    }
}

/// Check a branch produced by [`BeaconBlockBodyDeneb::blob_kzg_commitment_inclusion_proof`]
/// against a body root.
pub fn verify_blob_kzg_commitment_inclusion_proof(
    body_root: B256,
    commitment: &KZGCommitment,
    index: u64,
    proof: &[B256],
) -> bool {
    if index >= MaxBlobCommitmentsPerBlock::to_u64()
        || proof.len() as u64 != KZG_COMMITMENT_INCLUSION_PROOF_DEPTH
    {
        return false;
    }
    let Ok(leaf) = commitment.hash_tree_root() else {
        return false;
    };
    // Subtree index of the commitment below the body root, skipping the length mix-in level.
    let subtree_index = (BLOB_KZG_COMMITMENTS_INDEX << (KZG_COMMITMENTS_MERKLE_DEPTH + 1)) + index;
    is_valid_merkle_branch(
        leaf,
        proof,
        KZG_COMMITMENT_INCLUSION_PROOF_DEPTH,
        subtree_index,
        body_root,
    )
}

impl BeaconBlockBody for BeaconBlockBodyDeneb {
    fn fork_name(&self) -> ForkName {
        ForkName::Deneb
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
            ExecutionPayload::Deneb(payload) => {
                self.execution_payload = Some(payload);
                Ok(())
            }
            other => {
                warn!(
                    expected = %ForkName::Deneb,
                    found = %other.fork_name(),
                    "Rejected execution payload from another fork"
                );
                Err(ConsensusError::WrongExecutionVariant {
                    expected: ForkName::Deneb,
                    found: other.fork_name(),
                })
            }
        }
    }

    fn top_level_roots(&self) -> Result<Vec<B256>, ConsensusError> {
        Ok(self.field_roots()?)
    }
}

impl HashTreeRoot for BeaconBlockBodyDeneb {
    fn hash_tree_root(&self) -> Result<B256, MerkleError> {
        Ok(merkleize_container(&self.merkle_leaves()?))
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::Address;
    use tessera_primitives::{Bytes48, Bytes96};
    use tracing_test::traced_test;

    use super::*;
    use crate::{
        beacon_block_body::tests::{base, deposit, graffiti},
        constants::{BODY_LENGTH_CAPELLA, BODY_LENGTH_DENEB},
        execution_payload::ExecutionPayloadCapella,
        withdrawal::Withdrawal,
    };

    fn commitments(count: u8) -> Vec<KZGCommitment> {
        (0..count).map(|i| Bytes48::from([i + 1; 48])).collect()
    }

    fn payload() -> ExecutionPayloadDeneb {
        ExecutionPayloadDeneb {
            parent_hash: B256::repeat_byte(0x10),
            fee_recipient: Address::repeat_byte(0x20),
            block_number: 19_426_587,
            gas_limit: 30_000_000,
            gas_used: 12_345_678,
            timestamp: 1_710_338_135,
            block_hash: B256::repeat_byte(0x30),
            withdrawals: VariableList::new(vec![Withdrawal {
                index: 7,
                validator_index: 1_024,
                address: Address::repeat_byte(0x40),
                amount: 17_000_000,
            }])
            .unwrap(),
            blob_gas_used: 393_216,
            ..Default::default()
        }
    }

    fn body() -> BeaconBlockBodyDeneb {
        let mut body = BeaconBlockBodyDeneb {
            base: base(),
            execution_payload: Some(payload()),
            ..Default::default()
        };
        body.set_blob_kzg_commitments(commitments(3)).unwrap();
        body
    }

    #[test]
    fn test_hashing_is_deterministic() {
        let body = body();
        assert_eq!(
            body.hash_tree_root().unwrap(),
            body.hash_tree_root().unwrap()
        );
        assert_eq!(
            body.top_level_roots().unwrap(),
            body.top_level_roots().unwrap()
        );
    }

    #[test]
    fn test_independently_built_bodies_agree() {
        let mut other = BeaconBlockBodyDeneb::default();
        other.set_randao_reveal(Bytes96::from([0xAA; 96]));
        other.set_eth1_data(Eth1Data {
            deposit_root: B256::repeat_byte(0x01),
            deposit_count: 3,
            block_hash: B256::repeat_byte(0x02),
        });
        other.set_graffiti(graffiti("tessera/v0.1.0"));
        other
            .set_deposits(vec![deposit(1), deposit(2), deposit(3)])
            .unwrap();
        other.attach_execution(payload().into()).unwrap();
        other.set_blob_kzg_commitments(commitments(3)).unwrap();

        assert_eq!(other, body());
        assert_eq!(
            other.hash_tree_root().unwrap(),
            body().hash_tree_root().unwrap()
        );
    }

    #[test]
    fn test_permuting_deposits_changes_root() {
        let body = body();
        let mut permuted = body.clone();
        permuted
            .set_deposits(vec![deposit(3), deposit(2), deposit(1)])
            .unwrap();

        let roots = body.top_level_roots().unwrap();
        let permuted_roots = permuted.top_level_roots().unwrap();
        assert_ne!(roots[3], permuted_roots[3]);
        assert_eq!(roots[..3], permuted_roots[..3]);
        assert_ne!(
            body.hash_tree_root().unwrap(),
            permuted.hash_tree_root().unwrap()
        );
    }

    #[test]
    fn test_top_level_roots_exclude_blob_commitments() {
        let body = body();
        let roots = body.top_level_roots().unwrap();
        assert_eq!(roots.len(), BODY_LENGTH_DENEB - 1);
        assert_eq!(roots.len(), BODY_LENGTH_CAPELLA);

        let mut more_blobs = body.clone();
        more_blobs.set_blob_kzg_commitments(commitments(5)).unwrap();
        assert_eq!(more_blobs.top_level_roots().unwrap(), roots);
        assert_ne!(
            more_blobs.hash_tree_root().unwrap(),
            body.hash_tree_root().unwrap()
        );

        let leaves = body.merkle_leaves().unwrap();
        assert_eq!(leaves.len(), BODY_LENGTH_DENEB);
        assert_eq!(leaves[..5], roots[..]);
        assert_eq!(body.hash_tree_root().unwrap(), merkleize_container(&leaves));
    }

    #[test]
    fn test_missing_fields_are_nil_composite() {
        let mut body = body();
        body.execution_payload = None;
        assert_eq!(
            body.top_level_roots(),
            Err(ConsensusError::Merkle(MerkleError::NilComposite {
                field: "execution_payload"
            }))
        );

        let mut body = self::body();
        body.base.eth1_data = None;
        assert_eq!(
            body.hash_tree_root(),
            Err(MerkleError::NilComposite { field: "eth1_data" })
        );
    }

    #[test]
    #[traced_test]
    fn test_attach_execution_rejects_capella_payload() {
        let mut body = body();
        assert_eq!(
            body.attach_execution(ExecutionPayloadCapella::default().into()),
            Err(ConsensusError::WrongExecutionVariant {
                expected: ForkName::Deneb,
                found: ForkName::Capella,
            })
        );
        assert_eq!(body.execution_payload(), Some(&payload()));
        assert!(logs_contain("Rejected execution payload from another fork"));
    }

    #[test]
    fn test_set_blob_kzg_commitments_enforces_capacity() {
        let mut body = body();
        assert_eq!(
            body.set_blob_kzg_commitments(commitments(17)),
            Err(ConsensusError::CapacityExceeded {
                field: "blob_kzg_commitments",
                count: 17,
                limit: 16,
            })
        );
        assert_eq!(body.blob_kzg_commitments(), commitments(3).as_slice());
        assert!(body.set_blob_kzg_commitments(commitments(16)).is_ok());
    }

    #[test]
    fn test_blob_kzg_commitment_inclusion_proof() {
        let body = body();
        let root = body.hash_tree_root().unwrap();

        for (index, commitment) in body.blob_kzg_commitments().iter().enumerate() {
            let proof = body
                .blob_kzg_commitment_inclusion_proof(index as u64)
                .unwrap();
            assert_eq!(proof.len() as u64, KZG_COMMITMENT_INCLUSION_PROOF_DEPTH);
            assert!(verify_blob_kzg_commitment_inclusion_proof(
                root,
                commitment,
                index as u64,
                &proof
            ));
        }

        let proof = body.blob_kzg_commitment_inclusion_proof(0).unwrap();
        let first = body.blob_kzg_commitments()[0];
        assert!(!verify_blob_kzg_commitment_inclusion_proof(
            root, &first, 1, &proof
        ));
        assert!(!verify_blob_kzg_commitment_inclusion_proof(
            root,
            &Bytes48::from([0xFF; 48]),
            0,
            &proof
        ));
        assert!(!verify_blob_kzg_commitment_inclusion_proof(
            root,
            &first,
            0,
            &proof[..7]
        ));
        assert!(body.blob_kzg_commitment_inclusion_proof(3).is_err());
    }
}
