use alloy_primitives::{aliases::B32, fixed_bytes};
use ssz_types::typenum::{U16, U32, U256, U1048576, U1073741824};

pub const DOMAIN_DEPOSIT: B32 = fixed_bytes!("0x03000000");

// Block body layout
pub const BODY_LENGTH_CAPELLA: usize = 5;
pub const BODY_LENGTH_DENEB: usize = 6;
pub const BLOB_KZG_COMMITMENTS_INDEX: u64 = 5;
pub const BLOCK_BODY_MERKLE_DEPTH: u64 = 3;
pub const KZG_COMMITMENTS_MERKLE_DEPTH: u64 = 4;
pub const KZG_COMMITMENT_INCLUSION_PROOF_DEPTH: u64 = 8;

// List capacities
pub type MaxDeposits = U16;
pub type MaxBlobCommitmentsPerBlock = U16;
pub type MaxWithdrawalsPerPayload = U16;
pub type MaxTransactionsPerPayload = U1048576;
pub type MaxBytesPerTransaction = U1073741824;
pub type BytesPerLogsBloom = U256;
pub type MaxExtraDataBytes = U32;

#[cfg(test)]
mod tests {
    use ssz_types::typenum::Unsigned;
    use tessera_primitives::constants::{MAX_BLOB_COMMITMENTS_PER_BLOCK, MAX_DEPOSITS};

    use super::*;

    #[test]
    fn test_list_capacities_match_protocol_constants() {
        assert_eq!(MaxDeposits::to_u64(), MAX_DEPOSITS);
        assert_eq!(MaxBlobCommitmentsPerBlock::to_u64(), MAX_BLOB_COMMITMENTS_PER_BLOCK);
        assert_eq!(
            1 << KZG_COMMITMENTS_MERKLE_DEPTH,
            MaxBlobCommitmentsPerBlock::to_u64()
        );
        assert_eq!(
            KZG_COMMITMENT_INCLUSION_PROOF_DEPTH,
            KZG_COMMITMENTS_MERKLE_DEPTH + 1 + BLOCK_BODY_MERKLE_DEPTH
        );
        assert!(BODY_LENGTH_DENEB <= 1 << BLOCK_BODY_MERKLE_DEPTH);
    }
}
