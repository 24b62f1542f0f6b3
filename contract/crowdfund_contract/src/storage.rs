use soroban_sdk::{Address, Env};

use crate::storage_types::{
    Campaign, CampaignId, DataKey, Error, PersistentKey, TTL_INSTANCE, TTL_PERSISTENT,
};

pub fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn set_config(e: &Env, admin: &Address, token: &Address) {
    e.storage().instance().set(&DataKey::Admin, admin);
    e.storage().instance().set(&DataKey::Token, token);
    e.storage().instance().set(&DataKey::CampaignCount, &0u64);
    extend_instance(e);
}

// Admin and Token are written by the constructor, so they are always present
// once the contract is reachable.
pub fn admin(e: &Env) -> Address {
    e.storage().instance().get(&DataKey::Admin).unwrap()
}

pub fn token(e: &Env) -> Address {
    e.storage().instance().get(&DataKey::Token).unwrap()
}

pub fn campaign_count(e: &Env) -> CampaignId {
    e.storage().instance().get(&DataKey::CampaignCount).unwrap_or(0)
}

/// Reserves the next sequential id and bumps the counter.
pub fn next_campaign_id(e: &Env) -> Result<CampaignId, Error> {
    let id = campaign_count(e).checked_add(1).ok_or(Error::Overflow)?;
    e.storage().instance().set(&DataKey::CampaignCount, &id);
    extend_instance(e);
    Ok(id)
}

pub fn load_campaign(e: &Env, campaign_id: CampaignId) -> Result<Campaign, Error> {
    if campaign_id == 0 || campaign_id > campaign_count(e) {
        return Err(Error::CampaignNotFound);
    }
    e.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(Error::CampaignNotFound)
}

pub fn save_campaign(e: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    e.storage().persistent().set(&key, campaign);
    extend_persistent(e, &key);
}

pub fn contribution(e: &Env, campaign_id: CampaignId, contributor: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&PersistentKey::Contribution(campaign_id, contributor.clone()))
        .unwrap_or(0)
}

pub fn set_contribution(e: &Env, campaign_id: CampaignId, contributor: &Address, amount: i128) {
    let key = PersistentKey::Contribution(campaign_id, contributor.clone());
    e.storage().persistent().set(&key, &amount);
    extend_persistent(e, &key);
}
