use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    CampaignCount,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Contribution(CampaignId, Address), // (CampaignID, Contributor) -> amount
}

pub type CampaignId = u64;

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub creator: Address,
    pub title: String,
    pub description: String,
    pub beneficiary: Address,
    pub goal: i128,
    pub deadline: u64,          // Ledger timestamp; donations close here
    pub amount_raised: i128,
    pub ended: bool,
    pub successful: bool,
}

impl Campaign {
    pub fn goal_reached(&self) -> bool {
        self.amount_raised >= self.goal
    }
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotAuthorized = 1,
    CampaignNotFound = 2,
    InvalidGoal = 3,
    InvalidDuration = 4,
    InvalidAmount = 5,
    DeadlinePassed = 6,
    DeadlineNotReached = 7,
    CampaignNotEnded = 8,
    AlreadyEnded = 9,
    CampaignSucceeded = 10,
    NothingToRefund = 11,
    InsufficientFunds = 12,
    TransferFailed = 13,
    Overflow = 14,
}

// Constants
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
