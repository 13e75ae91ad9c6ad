use tessera_consensus::Validator;
use tessera_primitives::{ValidatorIndex, crypto::BLSPubkey};

use crate::{
    errors::StoreError,
    kv::KeyValueStore,
    tables::{ssz_encoder::SSZEncoding, table::Table},
};

/// Key prefix for validator records
///
/// Key: validator index, big-endian
/// Value: Validator, SSZ encoded
pub(crate) const VALIDATOR_TABLE: &[u8] = b"validator/";

/// Key prefix for the pubkey index
///
/// Key: BLS pubkey
/// Value: validator index, big-endian
pub(crate) const PUBKEY_INDEX_TABLE: &[u8] = b"validator_pubkey/";

/// Key of the number of registered validators, stored big-endian.
pub(crate) const VALIDATOR_COUNT_KEY: &[u8] = b"validator_count";

fn table_key(prefix: &[u8], key: &[u8]) -> Vec<u8> {
    [prefix, key].concat()
}

fn decode_index(bytes: &[u8]) -> Result<ValidatorIndex, StoreError> {
    <[u8; 8]>::try_from(bytes)
        .map(u64::from_be_bytes)
        .map_err(|_| StoreError::Decode(format!("expected 8 index bytes, got {}", bytes.len())))
}

/// Validator registry laid out over a [`KeyValueStore`]. Records are append-only: an index
/// below [`ValidatorTable::len`] may be overwritten, but never with a different pubkey, and a
/// pubkey is stored at one index only.
pub struct ValidatorTable<S> {
    store: S,
}

impl<S: KeyValueStore> ValidatorTable<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn len(&self) -> Result<u64, StoreError> {
        match self.store.get(VALIDATOR_COUNT_KEY)? {
            Some(bytes) => decode_index(&bytes),
            None => Ok(0),
        }
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Append ``validator`` and return its index.
    pub fn push(&mut self, validator: Validator) -> Result<ValidatorIndex, StoreError> {
        let index = self.len()?;
        self.insert(index, validator)?;
        Ok(index)
    }

    pub fn index_of(&self, pubkey: &BLSPubkey) -> Result<Option<ValidatorIndex>, StoreError> {
        self.store
            .get(&table_key(PUBKEY_INDEX_TABLE, pubkey.as_slice()))?
            .map(|bytes| decode_index(&bytes))
            .transpose()
    }
}

impl<S: KeyValueStore> Table for ValidatorTable<S> {
    type Key = ValidatorIndex;

    type Value = Validator;

    fn get(&self, key: Self::Key) -> Result<Option<Self::Value>, StoreError> {
        self.store
            .get(&table_key(VALIDATOR_TABLE, &key.to_be_bytes()))?
            .map(|bytes| SSZEncoding::<Validator>::from_bytes(&bytes).map(|value| value.0))
            .transpose()
    }

    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Result<(), StoreError> {
        let count = self.len()?;
        if key > count {
            return Err(StoreError::IndexOutOfBounds { index: key, count });
        }
        if let Some(existing) = self.get(key)?
            && existing.pubkey != value.pubkey
        {
            return Err(StoreError::PubkeyMismatch { index: key });
        }
        if let Some(index) = self.index_of(&value.pubkey)?
            && index != key
        {
            return Err(StoreError::DuplicatePubkey(value.pubkey));
        }

        // The pubkey index goes last so it never points at a missing record.
        let pubkey_key = table_key(PUBKEY_INDEX_TABLE, value.pubkey.as_slice());
        self.store.put(
            &table_key(VALIDATOR_TABLE, &key.to_be_bytes()),
            SSZEncoding(value).as_bytes(),
        )?;
        if key == count {
            self.store
                .put(VALIDATOR_COUNT_KEY, (count + 1).to_be_bytes().to_vec())?;
        }
        self.store.put(&pubkey_key, key.to_be_bytes().to_vec())?;
        Ok(())
    }
}
