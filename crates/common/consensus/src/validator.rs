use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tessera_chain_spec::ChainSpec;
use tessera_merkle::{HashTreeRoot, MerkleError, merkleize_container};
use tessera_primitives::{Epoch, Gwei, constants::FAR_FUTURE_EPOCH, crypto::BLSPubkey};

use crate::{deposit::Deposit, withdrawal_credentials::WithdrawalCredentials};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode)]
pub struct Validator {
    pub pubkey: BLSPubkey,

    /// Commitment to pubkey for withdrawals
    pub withdrawal_credentials: WithdrawalCredentials,

    /// Balance at stake
    #[serde(with = "serde_utils::quoted_u64")]
    pub effective_balance: Gwei,
    pub slashed: bool,

    /// When criteria for activation were met
    #[serde(with = "serde_utils::quoted_u64")]
    pub activation_eligibility_epoch: Epoch,
    #[serde(with = "serde_utils::quoted_u64")]
    pub activation_epoch: Epoch,
    #[serde(with = "serde_utils::quoted_u64")]
    pub exit_epoch: Epoch,

    /// When validator can withdraw funds
    #[serde(with = "serde_utils::quoted_u64")]
    pub withdrawable_epoch: Epoch,
}

impl Validator {
    /// Create a validator record for a freshly processed deposit.
    ///
    /// The effective balance is ``amount`` floored to a multiple of
    /// ``effective_balance_increment`` and capped at ``max_effective_balance``. A zero increment
    /// leaves ``amount`` unquantized. Every epoch marker starts at ``FAR_FUTURE_EPOCH``.
    pub fn new_from_deposit(
        pubkey: BLSPubkey,
        withdrawal_credentials: WithdrawalCredentials,
        amount: Gwei,
        effective_balance_increment: Gwei,
        max_effective_balance: Gwei,
    ) -> Self {
        let remainder = amount.checked_rem(effective_balance_increment).unwrap_or(0);
        Self {
            pubkey,
            withdrawal_credentials,
            effective_balance: (amount - remainder).min(max_effective_balance),
            slashed: false,
            activation_eligibility_epoch: FAR_FUTURE_EPOCH,
            activation_epoch: FAR_FUTURE_EPOCH,
            exit_epoch: FAR_FUTURE_EPOCH,
            withdrawable_epoch: FAR_FUTURE_EPOCH,
        }
    }

    pub fn from_deposit(deposit: &Deposit, spec: &ChainSpec) -> Self {
        Self::new_from_deposit(
            deposit.pubkey,
            deposit.withdrawal_credentials,
            deposit.amount,
            spec.effective_balance_increment,
            spec.max_effective_balance,
        )
    }

    /// Check if ``validator`` has an 0x01 prefixed "eth1" withdrawal credential.
    pub fn has_eth1_withdrawal_credential(&self) -> bool {
        self.withdrawal_credentials.is_eth1()
    }

    pub fn has_max_effective_balance(&self, max_effective_balance: Gwei) -> bool {
        self.effective_balance == max_effective_balance
    }

    pub fn is_active_validator(&self, epoch: Epoch) -> bool {
        self.activation_epoch <= epoch && epoch < self.exit_epoch
    }

    /// Check if ``validator`` is eligible for activation once ``finalized_epoch`` is finalized.
    pub fn is_eligible_for_activation(&self, finalized_epoch: Epoch) -> bool {
        self.activation_eligibility_epoch <= finalized_epoch
            && self.activation_epoch == FAR_FUTURE_EPOCH
    }

    /// Check if ``validator`` is eligible to be placed into the activation queue.
    pub fn is_eligible_for_activation_queue(&self, max_effective_balance: Gwei) -> bool {
        self.activation_eligibility_epoch == FAR_FUTURE_EPOCH
            && self.has_max_effective_balance(max_effective_balance)
    }

    pub fn is_slashable_validator(&self, epoch: Epoch) -> bool {
        !self.slashed && self.activation_epoch <= epoch && epoch < self.withdrawable_epoch
    }

    pub fn is_exited(&self, epoch: Epoch) -> bool {
        self.exit_epoch <= epoch
    }

    pub fn is_withdrawable(&self, epoch: Epoch) -> bool {
        self.withdrawable_epoch <= epoch
    }

    /// Check if ``validator`` is fully withdrawable.
    pub fn is_fully_withdrawable_validator(&self, balance: Gwei, epoch: Epoch) -> bool {
        self.has_eth1_withdrawal_credential() && self.is_withdrawable(epoch) && balance > 0
    }

    /// Check if ``validator`` is partially withdrawable.
    pub fn is_partially_withdrawable_validator(
        &self,
        balance: Gwei,
        max_effective_balance: Gwei,
    ) -> bool {
        self.has_eth1_withdrawal_credential()
            && self.has_max_effective_balance(max_effective_balance)
            && balance > max_effective_balance
    }
}

impl HashTreeRoot for Validator {
    fn hash_tree_root(&self) -> Result<B256, MerkleError> {
        Ok(merkleize_container(&[
            self.pubkey.hash_tree_root()?,
            self.withdrawal_credentials.hash_tree_root()?,
            self.effective_balance.hash_tree_root()?,
            self.slashed.hash_tree_root()?,
            self.activation_eligibility_epoch.hash_tree_root()?,
            self.activation_epoch.hash_tree_root()?,
            self.exit_epoch.hash_tree_root()?,
            self.withdrawable_epoch.hash_tree_root()?,
        ]))
    }
}
