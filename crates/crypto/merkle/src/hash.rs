use std::sync::LazyLock;

use alloy_primitives::B256;

/// Deepest tree a `usize` chunk count can address.
pub const MAX_TREE_DEPTH: usize = usize::BITS as usize;

static ZERO_HASHES: LazyLock<Vec<B256>> = LazyLock::new(|| {
    let mut hashes = vec![B256::ZERO; MAX_TREE_DEPTH + 1];
    for depth in 0..MAX_TREE_DEPTH {
        hashes[depth + 1] = hash_concat(hashes[depth].as_slice(), hashes[depth].as_slice());
    }
    hashes
});

/// Common hashing function for Merkle trees.
pub(crate) fn hash_concat(h1: &[u8], h2: &[u8]) -> B256 {
    ethereum_hashing::hash32_concat(h1, h2).into()
}

/// Root of a subtree of ``depth`` whose leaves are all zero chunks.
pub fn zero_hash(depth: usize) -> B256 {
    ZERO_HASHES[depth.min(MAX_TREE_DEPTH)]
}
