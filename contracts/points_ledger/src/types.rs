use soroban_sdk::{contracterror, contracttype, Address, BytesN, String};

/// Stages of the recruiting pipeline a candidate can complete for points.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage {
    Screening,
    Assessment,
    Interview,
    Offer,
}

/// Every badge the platform can award. Shared with the badges contract so
/// the catalog, the evaluator and the display layer agree on one closed set.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BadgeId {
    ChatStarter,
    ChatRegular,
    TestTaker,
    TestAce,
    Bookworm,
    Applicant,
    Advocate,
    TriviaBuff,
    Recruiter,
    TalentScout,
    CommunityPillar,
}

/// Every point-earning user activity. A closed enum instead of string keys:
/// a call site naming an activity the catalog does not price is a compile
/// error, not a runtime lookup failure.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Activity {
    ChatMessage,
    PracticeTest,
    DocumentDownload,
    ApplicationSubmitted,
    StageCompleted(Stage),
    ReferralSignup,
    ReferralHired,
    Donation,
    SocialShare,
    TriviaCorrect,
    TriviaSpeedBonus,
    TriviaPerfectGame,
    Engagement,
    BadgeEarned(BadgeId),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserProfile {
    pub joined_at: u64,
}

/// One append-only ledger line. The owning user is the storage key; entries
/// are never rewritten or removed once appended.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PointLedgerEntry {
    pub id: u64,
    pub activity: Activity,
    pub units: i128,
    pub points: i128,
    pub note: String,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccrualReceipt {
    pub entry_id: u64,
    pub points: i128,
    pub new_total: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub share_daily_cap: i128, // points per UTC day, social shares only
}

#[contracttype]
pub enum DataKey {
    Config,                     // Instance
    NextEntryId,                // Instance
    User(Address),              // Persistent: UserProfile
    Entries(Address),           // Persistent: Vec<PointLedgerEntry>
    Total(Address),             // Persistent: i128
    Count(Address, Activity),   // Persistent: u64
    Dedup(Address, BytesN<32>), // Persistent: AccrualReceipt
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    UserNotFound = 4,
    InvalidContext = 5,
    InvalidParams = 6,
}
