use alloy_primitives::{B256, aliases::B32};
use tessera_chain_spec::ChainSpec;
use tessera_merkle::{HashTreeRoot, MerkleError};
use tessera_primitives::crypto::SignatureVerifier;
use tracing::warn;

use crate::{
    constants::DOMAIN_DEPOSIT, deposit::Deposit, errors::ConsensusError, fork_data::ForkData,
    signing_data::SigningData,
};

pub mod checksummed_address {
    use alloy_primitives::Address;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn serialize<S>(address: &Address, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&address.to_checksum(None))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        s.parse::<Address>().map_err(D::Error::custom)
    }
}

/// Return the domain for the ``domain_type`` and ``fork_version``.
pub fn compute_domain(
    domain_type: B32,
    fork_version: B32,
    genesis_validators_root: Option<B256>,
) -> Result<B256, MerkleError> {
    let fork_data_root = ForkData {
        current_version: fork_version,
        genesis_validators_root: genesis_validators_root.unwrap_or_default(),
    }
    .compute_fork_data_root()?;
    let mut domain = B256::ZERO;
    domain[..4].copy_from_slice(domain_type.as_slice());
    domain[4..].copy_from_slice(&fork_data_root[..28]);
    Ok(domain)
}

pub fn compute_signing_root<T: HashTreeRoot>(
    object: &T,
    domain: B256,
) -> Result<B256, MerkleError> {
    SigningData {
        object_root: object.hash_tree_root()?,
        domain,
    }
    .hash_tree_root()
}

/// Check the proof of possession carried by ``deposit``.
///
/// Deposits are signed over a fork-agnostic domain built from the genesis fork version, so a
/// deposit stays valid across forks.
pub fn verify_deposit_signature<V: SignatureVerifier>(
    deposit: &Deposit,
    spec: &ChainSpec,
    verifier: &V,
) -> Result<(), ConsensusError> {
    let domain = compute_domain(DOMAIN_DEPOSIT, spec.genesis_fork_version, None)?;
    let signing_root = compute_signing_root(&deposit.message(), domain)?;

    match verifier.verify(&deposit.pubkey, signing_root.as_slice(), &deposit.signature) {
        Ok(true) => Ok(()),
        Ok(false) => {
            warn!(pubkey = %deposit.pubkey, "Rejected deposit with invalid signature");
            Err(ConsensusError::InvalidDepositSignature {
                pubkey: deposit.pubkey,
            })
        }
        Err(err) => Err(ConsensusError::SignatureBackend(err.to_string())),
    }
}
