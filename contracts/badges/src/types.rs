use soroban_sdk::{contracterror, contracttype, Address, String, Symbol, Vec};

use points_ledger::types::BadgeId;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BadgeCategory {
    Achievement,
    Process,
    Participation,
}

/// Counters badge requirements are phrased over. Counts of actions only;
/// points never appear here, so badge-award points cannot satisfy a badge
/// and evaluation stays a single pass.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Counter {
    ChatMessages,
    PracticeTests,
    DocumentDownloads,
    SocialShares,
    TriviaAnswers,
    ApplicationsSubmitted,
    ConvertedReferrals,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Requirement {
    pub counter: Counter,
    pub at_least: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BadgeDef {
    pub id: BadgeId,
    pub name: String,
    pub icon: Symbol,
    pub category: BadgeCategory,
    pub requirements: Vec<Requirement>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BadgeAward {
    pub badge: BadgeId,
    pub earned_at: u64,
}

/// Result of one evaluation pass: badges newly awarded in catalog order,
/// and badges that could not be decided because a counter source was
/// unavailable (those are never awarded on a partial read).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EvaluationReport {
    pub newly_awarded: Vec<BadgeDef>,
    pub incomplete: Vec<BadgeId>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub ledger: Address,
    pub referral: Option<Address>,
}

#[contracttype]
pub enum DataKey {
    Config,                   // Instance
    Award(Address, BadgeId),  // Persistent: BadgeAward
    AwardList(Address),       // Persistent: Vec<BadgeAward>
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BadgeError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    EvaluationIncomplete = 4,
}
