use std::sync::{Arc, LazyLock};

use alloy_primitives::{aliases::B32, fixed_bytes};
use serde::{Deserialize, Serialize};
use tessera_primitives::{
    Epoch, Gwei, Slot,
    constants::{
        EFFECTIVE_BALANCE_INCREMENT, MAX_BLOB_COMMITMENTS_PER_BLOCK, MAX_DEPOSITS,
        MAX_EFFECTIVE_BALANCE, SLOTS_PER_EPOCH,
    },
};

use crate::{errors::ChainSpecError, fork::ForkName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Dev,
    Custom(String),
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Network::Mainnet => serializer.serialize_str("mainnet"),
            Network::Dev => serializer.serialize_str("dev"),
            Network::Custom(name) => serializer.serialize_str(name),
        }
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match String::deserialize(deserializer)?.as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "dev" => Ok(Network::Dev),
            custom => Ok(Network::Custom(custom.to_string())),
        }
    }
}

/// Runtime parameters of the validator lifecycle and block body schema.
///
/// Capacities are repeated here so that a configuration file can be checked against the
/// consensus-fixed values with [`ChainSpec::validate`]; they are never used to resize a schema.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct ChainSpec {
    #[serde(rename = "CONFIG_NAME")]
    pub network: Network,

    // Gwei values
    #[serde(with = "serde_utils::quoted_u64")]
    pub effective_balance_increment: Gwei,
    #[serde(with = "serde_utils::quoted_u64")]
    pub max_effective_balance: Gwei,

    // Block body
    #[serde(with = "serde_utils::quoted_u64")]
    pub max_deposits_per_block: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub max_blob_commitments_per_block: u64,

    // Forking
    #[serde(with = "crate::b32_hex")]
    pub genesis_fork_version: B32,
    #[serde(with = "serde_utils::quoted_u64")]
    pub deneb_fork_epoch: Epoch,
}

impl ChainSpec {
    pub fn validate(&self) -> Result<(), ChainSpecError> {
        if self.effective_balance_increment == 0 {
            return Err(ChainSpecError::ZeroBalanceIncrement);
        }
        if self.max_effective_balance % self.effective_balance_increment != 0 {
            return Err(ChainSpecError::UnalignedMaxEffectiveBalance {
                max_effective_balance: self.max_effective_balance,
                increment: self.effective_balance_increment,
            });
        }
        if self.max_deposits_per_block != MAX_DEPOSITS {
            return Err(ChainSpecError::CapacityMismatch {
                field: "MAX_DEPOSITS_PER_BLOCK",
                configured: self.max_deposits_per_block,
                expected: MAX_DEPOSITS,
            });
        }
        if self.max_blob_commitments_per_block != MAX_BLOB_COMMITMENTS_PER_BLOCK {
            return Err(ChainSpecError::CapacityMismatch {
                field: "MAX_BLOB_COMMITMENTS_PER_BLOCK",
                configured: self.max_blob_commitments_per_block,
                expected: MAX_BLOB_COMMITMENTS_PER_BLOCK,
            });
        }
        Ok(())
    }

    /// Return the fork whose block body schema applies at ``epoch``.
    pub fn fork_at_epoch(&self, epoch: Epoch) -> ForkName {
        if epoch >= self.deneb_fork_epoch {
            ForkName::Deneb
        } else {
            ForkName::Capella
        }
    }

    pub fn fork_at_slot(&self, slot: Slot) -> ForkName {
        self.fork_at_epoch(slot / SLOTS_PER_EPOCH)
    }
}

pub static MAINNET: LazyLock<Arc<ChainSpec>> = LazyLock::new(|| {
    ChainSpec {
        network: Network::Mainnet,
        effective_balance_increment: EFFECTIVE_BALANCE_INCREMENT,
        max_effective_balance: MAX_EFFECTIVE_BALANCE,
        max_deposits_per_block: MAX_DEPOSITS,
        max_blob_commitments_per_block: MAX_BLOB_COMMITMENTS_PER_BLOCK,
        genesis_fork_version: fixed_bytes!("0x00000000"),
        deneb_fork_epoch: 269568,
    }
    .into()
});

pub static DEV: LazyLock<Arc<ChainSpec>> = LazyLock::new(|| {
    ChainSpec {
        network: Network::Dev,
        effective_balance_increment: EFFECTIVE_BALANCE_INCREMENT,
        max_effective_balance: MAX_EFFECTIVE_BALANCE,
        max_deposits_per_block: MAX_DEPOSITS,
        max_blob_commitments_per_block: MAX_BLOB_COMMITMENTS_PER_BLOCK,
        genesis_fork_version: fixed_bytes!("0x20000089"),
        deneb_fork_epoch: 0,
    }
    .into()
});
