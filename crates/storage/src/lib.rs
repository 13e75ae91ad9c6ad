pub mod errors;
pub mod kv;
pub mod registry;
pub mod tables;

pub use errors::StoreError;
pub use kv::{KeyValueStore, MemoryStore};
pub use registry::register_deposit;
pub use tables::{table::Table, validator::ValidatorTable};
