//! https://ethereum.github.io/consensus-specs/ssz/simple-serialize/#merkleization

use alloy_primitives::B256;

use crate::{
    errors::MerkleError,
    hash::{MAX_TREE_DEPTH, hash_concat, zero_hash},
};

pub const BYTES_PER_CHUNK: usize = 32;

/// Depth of the smallest perfect binary tree holding ``limit`` leaves.
pub fn tree_depth(limit: usize) -> usize {
    match limit.checked_next_power_of_two() {
        Some(width) => width.trailing_zeros() as usize,
        None => MAX_TREE_DEPTH,
    }
}

/// Right-pad ``bytes`` with zeros to a multiple of ``BYTES_PER_CHUNK`` and split into chunks.
pub fn pack_bytes(bytes: &[u8]) -> Vec<B256> {
    bytes
        .chunks(BYTES_PER_CHUNK)
        .map(|chunk| {
            let mut leaf = B256::ZERO;
            leaf[..chunk.len()].copy_from_slice(chunk);
            leaf
        })
        .collect()
}

/// Merkleize ``chunks`` into a single root.
///
/// Without a ``limit`` the leaves are padded up to the next power of two of their own count.
/// With a ``limit`` they are padded up to the next power of two of the limit, so the shape of
/// the tree is fixed by the schema rather than by the number of elements present.
pub fn merkleize(chunks: &[B256], limit: Option<usize>) -> Result<B256, MerkleError> {
    let limit = match limit {
        Some(limit) if chunks.len() > limit => {
            return Err(MerkleError::ChunkLimitExceeded {
                count: chunks.len(),
                limit,
            });
        }
        Some(limit) => limit,
        None => chunks.len(),
    };
    Ok(merkleize_to_depth(chunks, tree_depth(limit)))
}

fn merkleize_to_depth(chunks: &[B256], depth: usize) -> B256 {
    if chunks.is_empty() {
        return zero_hash(depth);
    }

    let mut layer = chunks.to_vec();
    for level in 0..depth {
        if layer.len() % 2 == 1 {
            layer.push(zero_hash(level));
        }
        layer = layer
            .chunks_exact(2)
            .map(|pair| hash_concat(pair[0].as_slice(), pair[1].as_slice()))
            .collect();
    }
    layer[0]
}

/// Root of a fixed-size byte sequence.
pub fn merkleize_bytes(bytes: &[u8]) -> B256 {
    let chunks = pack_bytes(bytes);
    merkleize_to_depth(&chunks, tree_depth(chunks.len()))
}

/// Root of a container from its ordered field roots. The field count is part of the schema,
/// so no length is mixed in.
pub fn merkleize_container(field_roots: &[B256]) -> B256 {
    merkleize_to_depth(field_roots, tree_depth(field_roots.len()))
}

/// The chunk holding ``length`` as a little-endian uint64, as mixed into list roots.
pub fn length_chunk(length: usize) -> B256 {
    let mut chunk = B256::ZERO;
    chunk[..8].copy_from_slice(&(length as u64).to_le_bytes());
    chunk
}

pub fn mix_in_length(root: B256, length: usize) -> B256 {
    hash_concat(root.as_slice(), length_chunk(length).as_slice())
}
