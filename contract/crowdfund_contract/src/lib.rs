#![no_std]

#[cfg(test)]
extern crate std;

mod events;
mod funds;
mod storage;
mod storage_types;
mod utils;

#[cfg(test)]
mod invariants;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

pub use events::*;
pub use storage_types::{Campaign, CampaignId, Error};

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Fix the administrator and the pooled token. Runs once, at deployment.
    pub fn __constructor(env: Env, admin: Address, token: Address) {
        storage::set_config(&env, &admin, &token);
    }

    /// Register a campaign that accepts donations for `duration` seconds.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        title: String,
        description: String,
        beneficiary: Address,
        goal: i128,
        duration: u64,
    ) -> Result<CampaignId, Error> {
        creator.require_auth();

        utils::validate_goal(goal)?;
        utils::validate_duration(duration)?;
        let deadline = utils::deadline_from_now(&env, duration)?;

        let id = storage::next_campaign_id(&env)?;
        let campaign = Campaign {
            id,
            creator: creator.clone(),
            title: title.clone(),
            description: description.clone(),
            beneficiary: beneficiary.clone(),
            goal,
            deadline,
            amount_raised: 0,
            ended: false,
            successful: false,
        };
        storage::save_campaign(&env, &campaign);

        log!(&env, "campaign created", id, goal, deadline);
        events::emit_campaign_created(
            &env,
            CampaignCreatedEvent {
                id,
                creator,
                title,
                description,
                beneficiary,
                goal,
                deadline,
            },
        );

        Ok(id)
    }

    /// Contribute `amount` of the pooled token to an open campaign.
    pub fn donate(
        env: Env,
        donor: Address,
        campaign_id: CampaignId,
        amount: i128,
    ) -> Result<(), Error> {
        donor.require_auth();

        let mut campaign = storage::load_campaign(&env, campaign_id)?;
        if !utils::is_open(&env, &campaign) {
            return Err(Error::DeadlinePassed);
        }
        utils::validate_amount(amount)?;

        let stake = storage::contribution(&env, campaign_id, &donor)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        campaign.amount_raised = campaign
            .amount_raised
            .checked_add(amount)
            .ok_or(Error::Overflow)?;

        storage::save_campaign(&env, &campaign);
        storage::set_contribution(&env, campaign_id, &donor, stake);

        funds::pull_in(&env, &donor, amount)?;

        events::emit_donation_received(
            &env,
            DonationReceivedEvent {
                id: campaign_id,
                donor,
                amount,
            },
        );

        Ok(())
    }

    /// Close a campaign whose deadline has passed. On success the whole
    /// raised amount goes to the beneficiary; otherwise contributors may
    /// reclaim their stakes with `request_refund`.
    pub fn end_campaign(env: Env, campaign_id: CampaignId) -> Result<(), Error> {
        let mut campaign = storage::load_campaign(&env, campaign_id)?;
        if utils::is_open(&env, &campaign) {
            return Err(Error::DeadlineNotReached);
        }
        if campaign.ended {
            return Err(Error::AlreadyEnded);
        }

        campaign.ended = true;
        campaign.successful = campaign.goal_reached();
        storage::save_campaign(&env, &campaign);

        if campaign.successful {
            funds::pay_out(&env, &campaign.beneficiary, campaign.amount_raised)?;
        }

        log!(&env, "campaign ended", campaign_id, campaign.successful);
        events::emit_campaign_ended(
            &env,
            CampaignEndedEvent {
                id: campaign_id,
                beneficiary: campaign.beneficiary,
                amount_raised: campaign.amount_raised,
                successful: campaign.successful,
            },
        );

        Ok(())
    }

    /// Return the caller's whole stake in a failed campaign.
    pub fn request_refund(
        env: Env,
        contributor: Address,
        campaign_id: CampaignId,
    ) -> Result<i128, Error> {
        contributor.require_auth();

        let campaign = storage::load_campaign(&env, campaign_id)?;
        if !campaign.ended {
            return Err(Error::CampaignNotEnded);
        }
        if campaign.successful {
            return Err(Error::CampaignSucceeded);
        }

        let amount = storage::contribution(&env, campaign_id, &contributor);
        if amount <= 0 {
            return Err(Error::NothingToRefund);
        }

        // Zeroed before delivery so a re-entrant claim finds nothing left.
        storage::set_contribution(&env, campaign_id, &contributor, 0);
        funds::pay_out(&env, &contributor, amount)?;

        log!(&env, "refund issued", campaign_id, amount);
        events::emit_refund_issued(
            &env,
            RefundIssuedEvent {
                id: campaign_id,
                contributor,
                amount,
            },
        );

        Ok(amount)
    }

    /// Administrator withdrawal from the pool.
    ///
    /// Bounded only by the pool balance: funds still earmarked for open
    /// campaigns or unclaimed refunds are not protected.
    pub fn withdraw_funds(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        caller.require_auth();
        utils::require_admin(&env, &caller)?;
        utils::validate_amount(amount)?;

        if amount > funds::pool_balance(&env) {
            return Err(Error::InsufficientFunds);
        }

        funds::pay_out(&env, &caller, amount)?;

        log!(&env, "funds withdrawn", amount);
        events::emit_funds_withdrawn(&env, FundsWithdrawnEvent { admin: caller, amount });

        Ok(())
    }

    /// View functions
    pub fn balance(env: Env) -> i128 {
        funds::pool_balance(&env)
    }

    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Result<Campaign, Error> {
        storage::load_campaign(&env, campaign_id)
    }

    pub fn get_contribution(env: Env, campaign_id: CampaignId, contributor: Address) -> i128 {
        storage::contribution(&env, campaign_id, &contributor)
    }

    pub fn campaign_count(env: Env) -> CampaignId {
        storage::campaign_count(&env)
    }

    pub fn admin(env: Env) -> Address {
        storage::admin(&env)
    }

    pub fn token(env: Env) -> Address {
        storage::token(&env)
    }
}
