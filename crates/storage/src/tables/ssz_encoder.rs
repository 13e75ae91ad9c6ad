use ssz::{Decode, Encode};

use crate::errors::StoreError;

/// Wrapper type to handle values using SSZ encoding
#[derive(Debug)]
pub struct SSZEncoding<T>(pub T);

impl<T: Encode> SSZEncoding<T> {
    pub fn as_bytes(&self) -> Vec<u8> {
        self.0.as_ssz_bytes()
    }
}

impl<T: Decode> SSZEncoding<T> {
    pub fn from_bytes(data: &[u8]) -> Result<Self, StoreError> {
        T::from_ssz_bytes(data)
            .map(Self)
            .map_err(|err| StoreError::Decode(format!("{err:?}")))
    }
}
