pub mod bytes;
pub mod constants;
pub mod crypto;
pub mod errors;

pub use bytes::{ByteVector, Bytes32, Bytes48, Bytes96};

/// A span of ``SLOTS_PER_EPOCH`` slots; the unit of validator-status bookkeeping.
pub type Epoch = u64;

pub type Slot = u64;

/// Balance amount denominated in Gwei.
pub type Gwei = u64;

pub type ValidatorIndex = u64;
