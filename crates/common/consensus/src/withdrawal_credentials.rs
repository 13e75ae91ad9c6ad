use std::{fmt, str::FromStr};

use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tessera_merkle::{HashTreeRoot, MerkleError};
use tessera_primitives::{
    Bytes32,
    constants::{BLS_WITHDRAWAL_PREFIX, ETH1_ADDRESS_WITHDRAWAL_PREFIX},
    errors::BytesError,
};

use crate::errors::ConsensusError;

/// Tagged 32-byte withdrawal destination of a validator.
///
/// Byte 0 is the tag. An ``0x01`` tag is followed by eleven zero bytes and a 20-byte execution
/// address; every other tag is opaque to execution-layer withdrawals.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
#[serde(transparent)]
#[ssz(struct_behaviour = "transparent")]
pub struct WithdrawalCredentials(pub Bytes32);

impl WithdrawalCredentials {
    pub fn from_execution_address(address: Address) -> Self {
        let mut credentials = [0u8; 32];
        credentials[0] = ETH1_ADDRESS_WITHDRAWAL_PREFIX;
        credentials[12..].copy_from_slice(address.as_slice());
        Self(Bytes32::from(credentials))
    }

    /// Return the execution address the credentials route to.
    ///
    /// Fails with [`ConsensusError::InvalidWithdrawalCredentials`] unless the tag is ``0x01``.
    /// The remaining bytes are never read for any other tag.
    pub fn to_execution_address(&self) -> Result<Address, ConsensusError> {
        if !self.is_eth1() {
            return Err(ConsensusError::InvalidWithdrawalCredentials);
        }
        Ok(Address::from_slice(&self.0.as_slice()[12..]))
    }

    pub fn prefix(&self) -> u8 {
        self.0.0[0]
    }

    pub fn is_bls(&self) -> bool {
        self.prefix() == BLS_WITHDRAWAL_PREFIX
    }

    pub fn is_eth1(&self) -> bool {
        self.prefix() == ETH1_ADDRESS_WITHDRAWAL_PREFIX
    }
}

impl From<[u8; 32]> for WithdrawalCredentials {
    fn from(bytes: [u8; 32]) -> Self {
        Self(Bytes32::from(bytes))
    }
}

impl From<Address> for WithdrawalCredentials {
    fn from(address: Address) -> Self {
        Self::from_execution_address(address)
    }
}

impl FromStr for WithdrawalCredentials {
    type Err = BytesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Display for WithdrawalCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for WithdrawalCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WithdrawalCredentials({})", self.0)
    }
}

impl HashTreeRoot for WithdrawalCredentials {
    fn hash_tree_root(&self) -> Result<B256, MerkleError> {
        self.0.hash_tree_root()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use ssz::{Decode, Encode};

    use super::*;

    #[rstest]
    #[case(Address::ZERO)]
    #[case(Address::repeat_byte(0x01))]
    #[case(Address::repeat_byte(0xff))]
    #[case(Address::from_slice(&[
        0xde, 0xad, 0xbe, 0xef, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05,
        0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
    ]))]
    fn test_execution_address_roundtrip(#[case] address: Address) {
        let credentials = WithdrawalCredentials::from_execution_address(address);
        assert!(credentials.is_eth1());
        assert_eq!(credentials.to_execution_address(), Ok(address));
    }

    #[test]
    fn test_layout() {
        let credentials = WithdrawalCredentials::from_execution_address(Address::repeat_byte(0xAA));
        let bytes = credentials.0.as_slice();
        assert_eq!(bytes[0], 0x01);
        assert_eq!(&bytes[1..12], &[0u8; 11]);
        assert_eq!(&bytes[12..], &[0xAA; 20]);
    }

    #[rstest]
    #[case(0x00)]
    #[case(0x02)]
    #[case(0xff)]
    fn test_other_tags_are_opaque(#[case] tag: u8) {
        let mut bytes = [0x11; 32];
        bytes[0] = tag;
        let credentials = WithdrawalCredentials::from(bytes);
        assert!(!credentials.is_eth1());
        assert_eq!(
            credentials.to_execution_address(),
            Err(ConsensusError::InvalidWithdrawalCredentials)
        );
    }

    #[test]
    fn test_zero_value_is_bls() {
        let credentials = WithdrawalCredentials::default();
        assert!(credentials.is_bls());
        assert_eq!(credentials.prefix(), BLS_WITHDRAWAL_PREFIX);
    }

    #[test]
    fn test_codecs() {
        let credentials = WithdrawalCredentials::from_execution_address(Address::repeat_byte(0x22));

        let text = credentials.to_string();
        assert_eq!(text, format!("0x01{}{}", "00".repeat(11), "22".repeat(20)));
        assert_eq!(text.parse::<WithdrawalCredentials>().unwrap(), credentials);
        assert_eq!(
            serde_json::to_string(&credentials).unwrap(),
            format!("\"{text}\"")
        );

        let encoded = credentials.as_ssz_bytes();
        assert_eq!(encoded.len(), 32);
        assert_eq!(
            WithdrawalCredentials::from_ssz_bytes(&encoded).unwrap(),
            credentials
        );
        assert_eq!(
            credentials.hash_tree_root().unwrap(),
            B256::from(credentials.0)
        );
    }
}
