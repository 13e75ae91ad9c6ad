use alloy_primitives::{Address, B256, U256};
use ssz_types::{
    FixedVector, VariableList,
    typenum::{U4, U16, U32, U48, U96, U256 as U256Bytes, U1048576, U1073741824},
};
use tessera_consensus as consensus;
use tessera_primitives::ByteVector;
use tree_hash_derive::TreeHash;

pub type Pubkey = FixedVector<u8, U48>;
pub type Signature = FixedVector<u8, U96>;
pub type Transactions = VariableList<VariableList<u8, U1073741824>, U1048576>;

fn bytes<const N: usize, L>(value: &ByteVector<N>) -> FixedVector<u8, L>
where
    L: ssz_types::typenum::Unsigned,
{
    FixedVector::from(value.0.to_vec())
}

#[derive(TreeHash)]
pub struct Eth1Data {
    pub deposit_root: B256,
    pub deposit_count: u64,
    pub block_hash: B256,
}

impl From<&consensus::eth_1_data::Eth1Data> for Eth1Data {
    fn from(value: &consensus::eth_1_data::Eth1Data) -> Self {
        Self {
            deposit_root: value.deposit_root,
            deposit_count: value.deposit_count,
            block_hash: value.block_hash,
        }
    }
}

#[derive(TreeHash)]
pub struct Deposit {
    pub pubkey: Pubkey,
    pub withdrawal_credentials: B256,
    pub amount: u64,
    pub signature: Signature,
}

impl From<&consensus::Deposit> for Deposit {
    fn from(value: &consensus::Deposit) -> Self {
        Self {
            pubkey: bytes(&value.pubkey),
            withdrawal_credentials: value.withdrawal_credentials.0.into(),
            amount: value.amount,
            signature: bytes(&value.signature),
        }
    }
}

#[derive(TreeHash)]
pub struct DepositMessage {
    pub pubkey: Pubkey,
    pub withdrawal_credentials: B256,
    pub amount: u64,
}

impl From<&consensus::DepositMessage> for DepositMessage {
    fn from(value: &consensus::DepositMessage) -> Self {
        Self {
            pubkey: bytes(&value.pubkey),
            withdrawal_credentials: value.withdrawal_credentials.0.into(),
            amount: value.amount,
        }
    }
}

#[derive(TreeHash)]
pub struct Validator {
    pub pubkey: Pubkey,
    pub withdrawal_credentials: B256,
    pub effective_balance: u64,
    pub slashed: bool,
    pub activation_eligibility_epoch: u64,
    pub activation_epoch: u64,
    pub exit_epoch: u64,
    pub withdrawable_epoch: u64,
}

impl From<&consensus::Validator> for Validator {
    fn from(value: &consensus::Validator) -> Self {
        Self {
            pubkey: bytes(&value.pubkey),
            withdrawal_credentials: value.withdrawal_credentials.0.into(),
            effective_balance: value.effective_balance,
            slashed: value.slashed,
            activation_eligibility_epoch: value.activation_eligibility_epoch,
            activation_epoch: value.activation_epoch,
            exit_epoch: value.exit_epoch,
            withdrawable_epoch: value.withdrawable_epoch,
        }
    }
}

#[derive(TreeHash)]
pub struct ForkData {
    pub current_version: FixedVector<u8, U4>,
    pub genesis_validators_root: B256,
}

impl From<&consensus::fork_data::ForkData> for ForkData {
    fn from(value: &consensus::fork_data::ForkData) -> Self {
        Self {
            current_version: FixedVector::from(value.current_version.to_vec()),
            genesis_validators_root: value.genesis_validators_root,
        }
    }
}

#[derive(TreeHash)]
pub struct Withdrawal {
    pub index: u64,
    pub validator_index: u64,
    pub address: Address,
    pub amount: u64,
}

impl From<&consensus::withdrawal::Withdrawal> for Withdrawal {
    fn from(value: &consensus::withdrawal::Withdrawal) -> Self {
        Self {
            index: value.index,
            validator_index: value.validator_index,
            address: value.address,
            amount: value.amount,
        }
    }
}

fn transactions(value: &consensus::execution_payload::Transactions) -> Transactions {
    VariableList::from(
        value
            .iter()
            .map(|transaction| VariableList::from(transaction.to_vec()))
            .collect::<Vec<_>>(),
    )
}

fn withdrawals(
    value: &consensus::execution_payload::Withdrawals,
) -> VariableList<Withdrawal, U16> {
    VariableList::from(value.iter().map(Withdrawal::from).collect::<Vec<_>>())
}

#[derive(TreeHash)]
pub struct ExecutionPayloadCapella {
    pub parent_hash: B256,
    pub fee_recipient: Address,
    pub state_root: B256,
    pub receipts_root: B256,
    pub logs_bloom: FixedVector<u8, U256Bytes>,
    pub prev_randao: B256,
    pub block_number: u64,
    pub gas_limit: u64,
    pub gas_used: u64,
    pub timestamp: u64,
    pub extra_data: VariableList<u8, U32>,
    pub base_fee_per_gas: U256,
    pub block_hash: B256,
    pub transactions: Transactions,
    pub withdrawals: VariableList<Withdrawal, U16>,
}

impl From<&consensus::execution_payload::ExecutionPayloadCapella> for ExecutionPayloadCapella {
    fn from(value: &consensus::execution_payload::ExecutionPayloadCapella) -> Self {
        Self {
            parent_hash: value.parent_hash,
            fee_recipient: value.fee_recipient,
            state_root: value.state_root,
            receipts_root: value.receipts_root,
            logs_bloom: FixedVector::from(value.logs_bloom.to_vec()),
            prev_randao: value.prev_randao,
            block_number: value.block_number,
            gas_limit: value.gas_limit,
            gas_used: value.gas_used,
            timestamp: value.timestamp,
            extra_data: VariableList::from(value.extra_data.to_vec()),
            base_fee_per_gas: value.base_fee_per_gas,
            block_hash: value.block_hash,
            transactions: transactions(&value.transactions),
            withdrawals: withdrawals(&value.withdrawals),
        }
    }
}

#[derive(TreeHash)]
pub struct ExecutionPayloadDeneb {
    pub parent_hash: B256,
    pub fee_recipient: Address,
    pub state_root: B256,
    pub receipts_root: B256,
    pub logs_bloom: FixedVector<u8, U256Bytes>,
    pub prev_randao: B256,
    pub block_number: u64,
    pub gas_limit: u64,
    pub gas_used: u64,
    pub timestamp: u64,
    pub extra_data: VariableList<u8, U32>,
    pub base_fee_per_gas: U256,
    pub block_hash: B256,
    pub transactions: Transactions,
    pub withdrawals: VariableList<Withdrawal, U16>,
    pub blob_gas_used: u64,
    pub excess_blob_gas: u64,
}

impl From<&consensus::execution_payload::ExecutionPayloadDeneb> for ExecutionPayloadDeneb {
    fn from(value: &consensus::execution_payload::ExecutionPayloadDeneb) -> Self {
        Self {
            parent_hash: value.parent_hash,
            fee_recipient: value.fee_recipient,
            state_root: value.state_root,
            receipts_root: value.receipts_root,
            logs_bloom: FixedVector::from(value.logs_bloom.to_vec()),
            prev_randao: value.prev_randao,
            block_number: value.block_number,
            gas_limit: value.gas_limit,
            gas_used: value.gas_used,
            timestamp: value.timestamp,
            extra_data: VariableList::from(value.extra_data.to_vec()),
            base_fee_per_gas: value.base_fee_per_gas,
            block_hash: value.block_hash,
            transactions: transactions(&value.transactions),
            withdrawals: withdrawals(&value.withdrawals),
            blob_gas_used: value.blob_gas_used,
            excess_blob_gas: value.excess_blob_gas,
        }
    }
}

fn deposits(body: &consensus::BeaconBlockBodyBase) -> VariableList<Deposit, U16> {
    VariableList::from(body.deposits.iter().map(Deposit::from).collect::<Vec<_>>())
}

#[derive(TreeHash)]
pub struct BeaconBlockBodyCapella {
    pub randao_reveal: Signature,
    pub eth1_data: Eth1Data,
    pub graffiti: B256,
    pub deposits: VariableList<Deposit, U16>,
    pub execution_payload: ExecutionPayloadCapella,
}

impl BeaconBlockBodyCapella {
    /// Mirror ``body``, or `None` if a required field is unset.
    pub fn from_body(body: &consensus::BeaconBlockBodyCapella) -> Option<Self> {
        Some(Self {
            randao_reveal: bytes(&body.base.randao_reveal),
            eth1_data: body.base.eth1_data.as_ref()?.into(),
            graffiti: body.base.graffiti.into(),
            deposits: deposits(&body.base),
            execution_payload: body.execution_payload.as_ref()?.into(),
        })
    }
}

#[derive(TreeHash)]
pub struct BeaconBlockBodyDeneb {
    pub randao_reveal: Signature,
    pub eth1_data: Eth1Data,
    pub graffiti: B256,
    pub deposits: VariableList<Deposit, U16>,
    pub execution_payload: ExecutionPayloadDeneb,
    pub blob_kzg_commitments: VariableList<Pubkey, U16>,
}

impl BeaconBlockBodyDeneb {
    /// Mirror ``body``, or `None` if a required field is unset.
    pub fn from_body(body: &consensus::BeaconBlockBodyDeneb) -> Option<Self> {
        Some(Self {
            randao_reveal: bytes(&body.base.randao_reveal),
            eth1_data: body.base.eth1_data.as_ref()?.into(),
            graffiti: body.base.graffiti.into(),
            deposits: deposits(&body.base),
            execution_payload: body.execution_payload.as_ref()?.into(),
            blob_kzg_commitments: VariableList::from(
                body.blob_kzg_commitments
                    .iter()
                    .map(bytes)
                    .collect::<Vec<_>>(),
            ),
        })
    }
}
