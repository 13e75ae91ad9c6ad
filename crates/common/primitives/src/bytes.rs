use std::{fmt, str::FromStr};

use alloy_primitives::{B256, hex};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use ssz::{Decode, DecodeError, Encode};
use tessera_merkle::{HashTreeRoot, MerkleError, merkleize_bytes};

use crate::errors::BytesError;

/// Fixed-length opaque byte array. Equality is by content and the zero value is all-zero bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteVector<const N: usize>(pub [u8; N]);

pub type Bytes32 = ByteVector<32>;
pub type Bytes48 = ByteVector<48>;
pub type Bytes96 = ByteVector<96>;

impl<const N: usize> ByteVector<N> {
    pub const ZERO: Self = Self([0; N]);

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Decode a `0x`-prefixed hex string of exactly ``N`` bytes.
    pub fn from_hex(input: &str) -> Result<Self, BytesError> {
        let stripped = input.strip_prefix("0x").ok_or(BytesError::MissingPrefix)?;
        let bytes = hex::decode(stripped).map_err(|err| BytesError::InvalidHex(err.to_string()))?;
        Self::try_from(bytes.as_slice())
    }
}

impl<const N: usize> Default for ByteVector<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[u8; N]> for ByteVector<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> TryFrom<&[u8]> for ByteVector<N> {
    type Error = BytesError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; N]>::try_from(bytes)
            .map(Self)
            .map_err(|_| BytesError::BadLength {
                expected: N,
                actual: bytes.len(),
            })
    }
}

impl From<B256> for Bytes32 {
    fn from(value: B256) -> Self {
        Self(value.0)
    }
}

impl From<Bytes32> for B256 {
    fn from(value: Bytes32) -> Self {
        B256::from(value.0)
    }
}

impl<const N: usize> AsRef<[u8]> for ByteVector<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> fmt::Display for ByteVector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<const N: usize> fmt::Debug for ByteVector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<const N: usize> FromStr for ByteVector<N> {
    type Err = BytesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl<const N: usize> Serialize for ByteVector<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de, const N: usize> Deserialize<'de> for ByteVector<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::from_hex(&value).map_err(D::Error::custom)
    }
}

impl<const N: usize> Encode for ByteVector<N> {
    fn is_ssz_fixed_len() -> bool {
        true
    }

    fn ssz_fixed_len() -> usize {
        N
    }

    fn ssz_bytes_len(&self) -> usize {
        N
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.0);
    }
}

impl<const N: usize> Decode for ByteVector<N> {
    fn is_ssz_fixed_len() -> bool {
        true
    }

    fn ssz_fixed_len() -> usize {
        N
    }

    fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        <[u8; N]>::try_from(bytes)
            .map(Self)
            .map_err(|_| DecodeError::InvalidByteLength {
                len: bytes.len(),
                expected: N,
            })
    }
}

impl<const N: usize> HashTreeRoot for ByteVector<N> {
    fn hash_tree_root(&self) -> Result<B256, MerkleError> {
        Ok(merkleize_bytes(&self.0))
    }
}
