use soroban_sdk::{token, Address, Env};

use crate::storage;
use crate::storage_types::Error;

/// Pull `amount` from `from` into the pool.
pub fn pull_in(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    transfer(env, from, &env.current_contract_address(), amount)
}

/// Pay `amount` out of the pool to `to`.
///
/// Callers must have written their bookkeeping before calling this. A failed
/// delivery surfaces as `TransferFailed`, which fails the whole invocation
/// and discards those writes.
pub fn pay_out(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    transfer(env, &env.current_contract_address(), to, amount)
}

pub fn pool_balance(env: &Env) -> i128 {
    let token_client = token::Client::new(env, &storage::token(env));
    token_client.balance(&env.current_contract_address())
}

fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let token_client = token::Client::new(env, &storage::token(env));
    match token_client.try_transfer(from, to, &amount) {
        Ok(Ok(_)) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}
