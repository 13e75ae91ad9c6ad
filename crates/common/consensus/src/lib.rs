pub mod beacon_block_body;
pub mod constants;
pub mod deposit;
pub mod errors;
pub mod eth_1_data;
pub mod execution_payload;
pub mod fork_data;
pub mod misc;
pub mod signing_data;
pub mod validator;
pub mod withdrawal;
pub mod withdrawal_credentials;

pub use beacon_block_body::{
    BeaconBlockBody, BeaconBlockBodyBase, BeaconBlockBodyCapella, BeaconBlockBodyDeneb,
};
pub use deposit::{Deposit, DepositMessage};
pub use errors::ConsensusError;
pub use execution_payload::ExecutionPayload;
pub use validator::Validator;
pub use withdrawal_credentials::WithdrawalCredentials;
