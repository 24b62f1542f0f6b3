use soroban_sdk::{Address, Env};

use crate::storage;
use crate::storage_types::{Campaign, Error};

/// Deadline for a campaign opened now that runs for `duration` seconds.
pub fn deadline_from_now(env: &Env, duration: u64) -> Result<u64, Error> {
    env.ledger()
        .timestamp()
        .checked_add(duration)
        .ok_or(Error::Overflow)
}

/// Donations are accepted strictly before the deadline.
pub fn is_open(env: &Env, campaign: &Campaign) -> bool {
    env.ledger().timestamp() < campaign.deadline
}

pub fn validate_goal(goal: i128) -> Result<(), Error> {
    if goal <= 0 {
        return Err(Error::InvalidGoal);
    }
    Ok(())
}

pub fn validate_duration(duration: u64) -> Result<(), Error> {
    if duration == 0 {
        return Err(Error::InvalidDuration);
    }
    Ok(())
}

pub fn validate_amount(amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    if *caller != storage::admin(env) {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}
