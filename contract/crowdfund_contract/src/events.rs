use soroban_sdk::{contracttype, Address, Env, String, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignCreatedEvent {
    pub id: CampaignId,
    pub creator: Address,
    pub title: String,
    pub description: String,
    pub beneficiary: Address,
    pub goal: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct DonationReceivedEvent {
    pub id: CampaignId,
    pub donor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignEndedEvent {
    pub id: CampaignId,
    pub beneficiary: Address,
    pub amount_raised: i128,
    pub successful: bool,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RefundIssuedEvent {
    pub id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct FundsWithdrawnEvent {
    pub admin: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_created"),), event);
}

pub fn emit_donation_received(env: &Env, event: DonationReceivedEvent) {
    env.events()
        .publish((Symbol::new(env, "donation_received"),), event);
}

pub fn emit_campaign_ended(env: &Env, event: CampaignEndedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_ended"),), event);
}

pub fn emit_refund_issued(env: &Env, event: RefundIssuedEvent) {
    env.events()
        .publish((Symbol::new(env, "refund_issued"),), event);
}

pub fn emit_funds_withdrawn(env: &Env, event: FundsWithdrawnEvent) {
    env.events()
        .publish((Symbol::new(env, "funds_withdrawn"),), event);
}
