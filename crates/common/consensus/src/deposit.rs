use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tessera_merkle::{HashTreeRoot, MerkleError, merkleize_container};
use tessera_primitives::{
    Gwei,
    crypto::{BLSPubkey, BLSSignature},
};

use crate::withdrawal_credentials::WithdrawalCredentials;

/// A stake contribution observed on the execution layer. Consumed exactly once.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize, Encode, Decode)]
pub struct Deposit {
    pub pubkey: BLSPubkey,
    pub withdrawal_credentials: WithdrawalCredentials,
    #[serde(with = "serde_utils::quoted_u64")]
    pub amount: Gwei,

    /// Signing over ``DepositMessage``
    pub signature: BLSSignature,
}

impl Deposit {
    pub fn message(&self) -> DepositMessage {
        DepositMessage {
            pubkey: self.pubkey,
            withdrawal_credentials: self.withdrawal_credentials,
            amount: self.amount,
        }
    }
}

impl HashTreeRoot for Deposit {
    fn hash_tree_root(&self) -> Result<B256, MerkleError> {
        Ok(merkleize_container(&[
            self.pubkey.hash_tree_root()?,
            self.withdrawal_credentials.hash_tree_root()?,
            self.amount.hash_tree_root()?,
            self.signature.hash_tree_root()?,
        ]))
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode)]
pub struct DepositMessage {
    pub pubkey: BLSPubkey,
    pub withdrawal_credentials: WithdrawalCredentials,
    #[serde(with = "serde_utils::quoted_u64")]
    pub amount: Gwei,
}

impl HashTreeRoot for DepositMessage {
    fn hash_tree_root(&self) -> Result<B256, MerkleError> {
        Ok(merkleize_container(&[
            self.pubkey.hash_tree_root()?,
            self.withdrawal_credentials.hash_tree_root()?,
            self.amount.hash_tree_root()?,
        ]))
    }
}

#[cfg(test)]
mod tests {
    use tessera_primitives::{Bytes48, Bytes96};

    use super::*;

    fn deposit() -> Deposit {
        Deposit {
            pubkey: Bytes48::from([0x01; 48]),
            withdrawal_credentials: WithdrawalCredentials::from([0x02; 32]),
            amount: 32_000_000_000,
            signature: Bytes96::from([0x03; 96]),
        }
    }

    #[test]
    fn test_message_drops_signature() {
        let deposit = deposit();
        let message = deposit.message();
        assert_eq!(message.pubkey, deposit.pubkey);
        assert_eq!(message.amount, deposit.amount);

        let mut resigned = deposit.clone();
        resigned.signature = Bytes96::from([0x04; 96]);
        assert_eq!(
            resigned.message().hash_tree_root().unwrap(),
            message.hash_tree_root().unwrap()
        );
        assert_ne!(
            resigned.hash_tree_root().unwrap(),
            deposit.hash_tree_root().unwrap()
        );
    }

    #[test]
    fn test_amount_is_quoted_in_json() {
        let json = serde_json::to_value(deposit()).unwrap();
        assert_eq!(json["amount"], "32000000000");
        let decoded: Deposit = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, deposit());
    }
}
