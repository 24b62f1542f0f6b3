//! Randomized operation sequences checked against a plain bookkeeping model.
//!
//! After every step the contract must agree with the model on each
//! campaign's raised amount and outcome, on every recorded stake, and on
//! the pool balance, which must equal the funds still owed to open
//! campaigns plus unclaimed refunds of failed ones.

#![cfg(test)]

use proptest::prelude::*;
use std::format;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

use super::*;

const CAMPAIGNS: usize = 3;
const DONORS: usize = 3;
const GOALS: [i128; CAMPAIGNS] = [50, 150, 400];
const DURATIONS: [u64; CAMPAIGNS] = [10, 20, 30];
const DONOR_FUNDS: i128 = 10_000;

#[derive(Clone, Debug)]
enum Op {
    Donate { campaign: usize, donor: usize, amount: i128 },
    Advance(u64),
    End(usize),
    Refund { campaign: usize, donor: usize },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..CAMPAIGNS, 0..DONORS, 0i128..60)
            .prop_map(|(campaign, donor, amount)| Op::Donate { campaign, donor, amount }),
        2 => (0u64..15).prop_map(Op::Advance),
        2 => (0..CAMPAIGNS).prop_map(Op::End),
        2 => (0..CAMPAIGNS, 0..DONORS)
            .prop_map(|(campaign, donor)| Op::Refund { campaign, donor }),
    ]
}

#[derive(Default)]
struct Model {
    now: u64,
    deadline: [u64; CAMPAIGNS],
    raised: [i128; CAMPAIGNS],
    ended: [bool; CAMPAIGNS],
    successful: [bool; CAMPAIGNS],
    stake: [[i128; DONORS]; CAMPAIGNS],
    donated: i128,
    paid_out: i128,
}

impl Model {
    fn donate(&mut self, c: usize, d: usize, amount: i128) -> Result<(), Error> {
        if self.now >= self.deadline[c] {
            return Err(Error::DeadlinePassed);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        self.raised[c] += amount;
        self.stake[c][d] += amount;
        self.donated += amount;
        Ok(())
    }

    fn end(&mut self, c: usize) -> Result<(), Error> {
        if self.now < self.deadline[c] {
            return Err(Error::DeadlineNotReached);
        }
        if self.ended[c] {
            return Err(Error::AlreadyEnded);
        }
        self.ended[c] = true;
        self.successful[c] = self.raised[c] >= GOALS[c];
        if self.successful[c] {
            self.paid_out += self.raised[c];
        }
        Ok(())
    }

    fn refund(&mut self, c: usize, d: usize) -> Result<i128, Error> {
        if !self.ended[c] {
            return Err(Error::CampaignNotEnded);
        }
        if self.successful[c] {
            return Err(Error::CampaignSucceeded);
        }
        let amount = self.stake[c][d];
        if amount == 0 {
            return Err(Error::NothingToRefund);
        }
        self.stake[c][d] = 0;
        self.paid_out += amount;
        Ok(amount)
    }

    fn owed(&self) -> i128 {
        (0..CAMPAIGNS)
            .map(|c| {
                if !self.ended[c] {
                    self.raised[c]
                } else if !self.successful[c] {
                    self.stake[c].iter().sum()
                } else {
                    0
                }
            })
            .sum()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn ledger_matches_model_and_conserves_funds(
        ops in prop::collection::vec(op_strategy(), 1..40)
    ) {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(0);

        let admin = Address::generate(&env);
        let issuer = Address::generate(&env);
        let sac = env.register_stellar_asset_contract_v2(issuer);
        let token = token::Client::new(&env, &sac.address());
        let token_admin = token::StellarAssetClient::new(&env, &sac.address());
        let client = CrowdfundContractClient::new(
            &env,
            &env.register(CrowdfundContract, (admin, sac.address())),
        );

        let beneficiary = Address::generate(&env);
        let donors: std::vec::Vec<Address> = (0..DONORS)
            .map(|_| {
                let donor = Address::generate(&env);
                token_admin.mint(&donor, &DONOR_FUNDS);
                donor
            })
            .collect();

        let mut model = Model::default();
        let mut ids = [0 as CampaignId; CAMPAIGNS];
        for c in 0..CAMPAIGNS {
            ids[c] = client.create_campaign(
                &Address::generate(&env),
                &String::from_str(&env, "campaign"),
                &String::from_str(&env, "randomized"),
                &beneficiary,
                &GOALS[c],
                &DURATIONS[c],
            );
            model.deadline[c] = DURATIONS[c];
        }

        for op in ops {
            match op {
                Op::Donate { campaign, donor, amount } => {
                    let result = client.try_donate(&donors[donor], &ids[campaign], &amount);
                    match model.donate(campaign, donor, amount) {
                        Ok(()) => prop_assert_eq!(result, Ok(Ok(()))),
                        Err(e) => prop_assert_eq!(result, Err(Ok(e))),
                    }
                }
                Op::Advance(seconds) => {
                    model.now += seconds;
                    env.ledger().set_timestamp(model.now);
                }
                Op::End(campaign) => {
                    let result = client.try_end_campaign(&ids[campaign]);
                    match model.end(campaign) {
                        Ok(()) => prop_assert_eq!(result, Ok(Ok(()))),
                        Err(e) => prop_assert_eq!(result, Err(Ok(e))),
                    }
                }
                Op::Refund { campaign, donor } => {
                    let result = client.try_request_refund(&donors[donor], &ids[campaign]);
                    match model.refund(campaign, donor) {
                        Ok(amount) => prop_assert_eq!(result, Ok(Ok(amount))),
                        Err(e) => prop_assert_eq!(result, Err(Ok(e))),
                    }
                }
            }

            for c in 0..CAMPAIGNS {
                let campaign = client.get_campaign(&ids[c]);
                prop_assert_eq!(campaign.amount_raised, model.raised[c]);
                prop_assert_eq!(campaign.ended, model.ended[c]);
                prop_assert_eq!(campaign.successful, model.successful[c]);
                prop_assert!(!campaign.successful || campaign.ended);
                for d in 0..DONORS {
                    prop_assert_eq!(
                        client.get_contribution(&ids[c], &donors[d]),
                        model.stake[c][d]
                    );
                }
            }

            let pool = client.balance();
            prop_assert_eq!(pool, model.owed());
            prop_assert_eq!(pool, model.donated - model.paid_out);
            prop_assert!(model.paid_out <= model.donated);

            let released: i128 = donors.iter().map(|d| token.balance(d)).sum::<i128>()
                + token.balance(&beneficiary);
            prop_assert_eq!(released + pool, DONOR_FUNDS * DONORS as i128);
        }
    }
}
