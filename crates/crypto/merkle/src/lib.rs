//! https://ethereum.github.io/consensus-specs/ssz/merkle-proofs

use alloy_primitives::B256;
use anyhow::ensure;

pub mod errors;
mod hash;
pub mod hash_tree_root;
mod index;
pub mod merkleize;

pub use errors::MerkleError;
pub use hash::zero_hash;
pub use hash_tree_root::{HashTreeRoot, list_root, required_root, vector_root};
pub use merkleize::{
    BYTES_PER_CHUNK, length_chunk, merkleize, merkleize_bytes, merkleize_container, mix_in_length,
};

use hash::hash_concat;
use index::{generalized_index_child, get_generalized_index_bit};

pub fn merkle_tree(leaves: &[B256], depth: u64) -> anyhow::Result<Vec<B256>> {
    let num_of_leaves = leaves.len();
    let bottom_length = 1 << depth;
    ensure!(
        num_of_leaves <= bottom_length,
        "Number of leaves is greater than the bottom length (depth too small)"
    );

    let mut tree = vec![B256::ZERO; bottom_length];
    tree.extend(leaves);
    tree.extend(vec![B256::ZERO; bottom_length - num_of_leaves]);

    for i in (1..bottom_length).rev() {
        let left = tree[i * 2].as_slice();
        let right = tree[i * 2 + 1].as_slice();
        tree[i] = hash_concat(left, right);
    }

    Ok(tree)
}

pub fn generate_proof(tree: &[B256], index: u64, depth: u64) -> anyhow::Result<Vec<B256>> {
    let bottom_length = 1 << depth;
    ensure!(index < bottom_length, "Index out of bounds");
    ensure!(
        tree.len() as u64 == bottom_length * 2,
        "Tree does not have depth {depth}"
    );

    let mut proof = vec![];
    let mut current_index = 1;
    let mut current_depth = depth;

    while current_depth > 0 {
        let (left_child_index, right_child_index) = (
            generalized_index_child(current_index, false),
            generalized_index_child(current_index, true),
        );

        if get_generalized_index_bit(index, current_depth - 1) {
            proof.push(tree[left_child_index as usize]);
            current_index = right_child_index;
        } else {
            proof.push(tree[right_child_index as usize]);
            current_index = left_child_index;
        }

        current_depth -= 1;
    }

    proof.reverse();

    Ok(proof)
}

/// Fold ``leaf`` up through ``branch`` (ordered bottom-up) to the root it commits to.
pub fn get_root_from_merkle_branch(leaf: B256, branch: &[B256], depth: u64, index: u64) -> B256 {
    let mut value = leaf;
    for (i, node) in branch.iter().take(depth as usize).enumerate() {
        if get_generalized_index_bit(index, i as u64) {
            value = hash_concat(node.as_slice(), value.as_slice());
        } else {
            value = hash_concat(value.as_slice(), node.as_slice());
        }
    }
    value
}

pub fn is_valid_merkle_branch(
    leaf: B256,
    branch: &[B256],
    depth: u64,
    index: u64,
    root: B256,
) -> bool {
    branch.len() as u64 >= depth && get_root_from_merkle_branch(leaf, branch, depth, index) == root
}
