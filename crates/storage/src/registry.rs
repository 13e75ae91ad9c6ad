use tessera_chain_spec::ChainSpec;
use tessera_consensus::{Deposit, Validator, misc::verify_deposit_signature};
use tessera_primitives::{ValidatorIndex, crypto::SignatureVerifier};
use tracing::debug;

use crate::{errors::StoreError, kv::KeyValueStore, tables::validator::ValidatorTable};

/// Turn a deposit for a new pubkey into a validator record and append it to ``table``.
///
/// The deposit signature must verify under ``spec``. Top-ups are not handled here, so a deposit
/// for a pubkey that is already registered fails with [`StoreError::DuplicatePubkey`].
pub fn register_deposit<S: KeyValueStore, V: SignatureVerifier>(
    table: &mut ValidatorTable<S>,
    deposit: &Deposit,
    spec: &ChainSpec,
    verifier: &V,
) -> Result<ValidatorIndex, StoreError> {
    verify_deposit_signature(deposit, spec, verifier)?;

    if table.index_of(&deposit.pubkey)?.is_some() {
        return Err(StoreError::DuplicatePubkey(deposit.pubkey));
    }

    let validator = Validator::from_deposit(deposit, spec);
    let effective_balance = validator.effective_balance;
    let index = table.push(validator)?;
    debug!(
        index,
        pubkey = %deposit.pubkey,
        effective_balance,
        "Registered validator"
    );
    Ok(index)
}
