use alloy_primitives::{Address, B256, FixedBytes, U256};
use ssz_types::{FixedVector, VariableList, typenum::Unsigned};

use crate::{
    errors::MerkleError,
    merkleize::{BYTES_PER_CHUNK, merkleize, merkleize_bytes, mix_in_length, pack_bytes},
};

/// The canonical 32-byte commitment to a value's structured content.
pub trait HashTreeRoot {
    /// Serialized width of a basic type. Composite types return `None`, which makes sequences of
    /// them merkleize per-element roots instead of packing serialized values.
    fn basic_size() -> Option<usize> {
        None
    }

    /// Append the little-endian serialization of a basic value. Only called when
    /// [`HashTreeRoot::basic_size`] is `Some`.
    fn append_packed(&self, _buf: &mut Vec<u8>) {}

    fn hash_tree_root(&self) -> Result<B256, MerkleError>;
}

/// Root of a field that must be present at hashing time.
pub fn required_root<T: HashTreeRoot>(
    value: Option<&T>,
    field: &'static str,
) -> Result<B256, MerkleError> {
    value
        .ok_or(MerkleError::NilComposite { field })?
        .hash_tree_root()
}

/// Root of a homogeneous sequence of exactly ``items.len()`` elements.
pub fn vector_root<T: HashTreeRoot>(items: &[T]) -> Result<B256, MerkleError> {
    sequence_root(items, items.len())
}

/// Root of a list holding at most ``capacity`` elements, with its length mixed in.
pub fn list_root<T: HashTreeRoot>(items: &[T], capacity: usize) -> Result<B256, MerkleError> {
    Ok(mix_in_length(sequence_root(items, capacity)?, items.len()))
}

fn sequence_root<T: HashTreeRoot>(items: &[T], capacity: usize) -> Result<B256, MerkleError> {
    match T::basic_size() {
        Some(size) => {
            let mut packed = Vec::with_capacity(items.len() * size);
            for item in items {
                item.append_packed(&mut packed);
            }
            let chunk_limit = (capacity * size).div_ceil(BYTES_PER_CHUNK);
            merkleize(&pack_bytes(&packed), Some(chunk_limit))
        }
        None => {
            let roots = items
                .iter()
                .map(HashTreeRoot::hash_tree_root)
                .collect::<Result<Vec<_>, _>>()?;
            merkleize(&roots, Some(capacity))
        }
    }
}

macro_rules! impl_basic {
    ($type:ty, $size:expr, |$value:ident| $bytes:expr) => {
        impl HashTreeRoot for $type {
            fn basic_size() -> Option<usize> {
                Some($size)
            }

            fn append_packed(&self, buf: &mut Vec<u8>) {
                let $value = self;
                buf.extend_from_slice(&$bytes);
            }

            fn hash_tree_root(&self) -> Result<B256, MerkleError> {
                let mut packed = Vec::with_capacity($size);
                self.append_packed(&mut packed);
                Ok(merkleize_bytes(&packed))
            }
        }
    };
}

impl_basic!(u8, 1, |value| [*value]);
impl_basic!(bool, 1, |value| [*value as u8]);
impl_basic!(u64, 8, |value| value.to_le_bytes());
impl_basic!(U256, 32, |value| value.to_le_bytes::<32>());

impl<const N: usize> HashTreeRoot for FixedBytes<N> {
    fn hash_tree_root(&self) -> Result<B256, MerkleError> {
        Ok(merkleize_bytes(self.as_slice()))
    }
}

impl HashTreeRoot for Address {
    fn hash_tree_root(&self) -> Result<B256, MerkleError> {
        Ok(merkleize_bytes(self.as_slice()))
    }
}

impl<T: HashTreeRoot, N: Unsigned> HashTreeRoot for FixedVector<T, N> {
    fn hash_tree_root(&self) -> Result<B256, MerkleError> {
        vector_root(self)
    }
}

impl<T: HashTreeRoot, N: Unsigned> HashTreeRoot for VariableList<T, N> {
    fn hash_tree_root(&self) -> Result<B256, MerkleError> {
        list_root(self, N::to_usize())
    }
}

#[cfg(test)]
mod tests {
    use ssz_types::typenum::{U4, U16, U32};

    use super::*;
    use crate::{hash::zero_hash, merkleize::merkleize_container};

    struct Pair {
        left: Option<B256>,
        right: u64,
    }

    impl HashTreeRoot for Pair {
        fn hash_tree_root(&self) -> Result<B256, MerkleError> {
            Ok(merkleize_container(&[
                required_root(self.left.as_ref(), "left")?,
                self.right.hash_tree_root()?,
            ]))
        }
    }

    #[test]
    fn test_basic_roots_are_little_endian_padded() {
        let mut expected = B256::ZERO;
        expected[..8].copy_from_slice(&0x0102_0304_0506_0708u64.to_le_bytes());
        assert_eq!(0x0102_0304_0506_0708u64.hash_tree_root().unwrap(), expected);

        let mut expected = B256::ZERO;
        expected[0] = 1;
        assert_eq!(true.hash_tree_root().unwrap(), expected);
        assert_eq!(U256::from(1).hash_tree_root().unwrap(), expected);
    }

    #[test]
    fn test_fixed_bytes_roots() {
        let root = B256::repeat_byte(0x42);
        assert_eq!(root.hash_tree_root().unwrap(), root);

        let version = FixedBytes::<4>::from([1, 2, 3, 4]);
        let mut expected = B256::ZERO;
        expected[..4].copy_from_slice(&[1, 2, 3, 4]);
        assert_eq!(version.hash_tree_root().unwrap(), expected);
    }

    #[test]
    fn test_address_root_is_right_padded() {
        let address = Address::repeat_byte(0x33);
        let root = address.hash_tree_root().unwrap();
        assert_eq!(&root[..20], address.as_slice());
        assert_eq!(&root[20..], &[0u8; 12]);
    }

    #[test]
    fn test_empty_list_root() {
        let list = VariableList::<B256, U16>::default();
        assert_eq!(
            list.hash_tree_root().unwrap(),
            mix_in_length(zero_hash(4), 0)
        );
    }

    #[test]
    fn test_basic_list_packs_elements() {
        // Four u64 values share one chunk; a limit of 32 values spans 8 chunks.
        let list = VariableList::<u64, U32>::new(vec![1, 2, 3]).unwrap();
        let mut chunk = B256::ZERO;
        chunk[..8].copy_from_slice(&1u64.to_le_bytes());
        chunk[8..16].copy_from_slice(&2u64.to_le_bytes());
        chunk[16..24].copy_from_slice(&3u64.to_le_bytes());
        let expected = mix_in_length(merkleize(&[chunk], Some(8)).unwrap(), 3);
        assert_eq!(list.hash_tree_root().unwrap(), expected);
    }

    #[test]
    fn test_list_root_depends_on_order() {
        let a = B256::repeat_byte(0x01);
        let b = B256::repeat_byte(0x02);
        let forward = VariableList::<B256, U4>::new(vec![a, b]).unwrap();
        let reversed = VariableList::<B256, U4>::new(vec![b, a]).unwrap();
        assert_ne!(
            forward.hash_tree_root().unwrap(),
            reversed.hash_tree_root().unwrap()
        );
    }

    #[test]
    fn test_list_of_missing_composite_fails() {
        let pairs = vec![
            Pair {
                left: Some(B256::ZERO),
                right: 1,
            },
            Pair {
                left: None,
                right: 2,
            },
        ];
        assert_eq!(
            list_root(&pairs, 16),
            Err(MerkleError::NilComposite { field: "left" })
        );
    }
}
