//! Reference containers built from `ssz_types` and `tree_hash_derive`, used to check that the
//! hand-written merkleization in `tessera-merkle` agrees with an independent implementation.

pub mod macros;
pub mod mirror;
