pub mod b32_hex;
pub mod cli;
pub mod errors;
pub mod fork;
pub mod spec;

pub use fork::ForkName;
pub use spec::{ChainSpec, DEV, MAINNET, Network};
