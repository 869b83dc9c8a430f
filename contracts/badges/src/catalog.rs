use soroban_sdk::{Env, String, Symbol, Vec};

use points_ledger::types::BadgeId;

use crate::types::{BadgeCategory, BadgeDef, Counter, Requirement};

// Award order when several badges become satisfiable in one pass.
const ORDER: [BadgeId; 11] = [
    BadgeId::ChatStarter,
    BadgeId::ChatRegular,
    BadgeId::TestTaker,
    BadgeId::TestAce,
    BadgeId::Bookworm,
    BadgeId::Applicant,
    BadgeId::Advocate,
    BadgeId::TriviaBuff,
    BadgeId::Recruiter,
    BadgeId::TalentScout,
    BadgeId::CommunityPillar,
];

fn req(counter: Counter, at_least: u64) -> Requirement {
    Requirement { counter, at_least }
}

/// Requirements and display metadata for one badge. Exhaustive over
/// `BadgeId`: a new badge variant without a catalog row fails to compile,
/// and so does a display layer driven off this definition.
fn definition(env: &Env, badge: BadgeId) -> BadgeDef {
    let (name, icon, category, requirements) = match badge {
        BadgeId::ChatStarter => (
            "Conversation Starter",
            "chat_bubble",
            BadgeCategory::Participation,
            Vec::from_array(env, [req(Counter::ChatMessages, 5)]),
        ),
        BadgeId::ChatRegular => (
            "Regular Voice",
            "megaphone",
            BadgeCategory::Participation,
            Vec::from_array(env, [req(Counter::ChatMessages, 25)]),
        ),
        BadgeId::TestTaker => (
            "Test Taker",
            "pencil",
            BadgeCategory::Process,
            Vec::from_array(env, [req(Counter::PracticeTests, 1)]),
        ),
        BadgeId::TestAce => (
            "Test Ace",
            "graduation_cap",
            BadgeCategory::Process,
            Vec::from_array(env, [req(Counter::PracticeTests, 10)]),
        ),
        BadgeId::Bookworm => (
            "Bookworm",
            "open_book",
            BadgeCategory::Participation,
            Vec::from_array(env, [req(Counter::DocumentDownloads, 5)]),
        ),
        BadgeId::Applicant => (
            "Applicant",
            "clipboard",
            BadgeCategory::Process,
            Vec::from_array(env, [req(Counter::ApplicationsSubmitted, 1)]),
        ),
        BadgeId::Advocate => (
            "Advocate",
            "share_arrow",
            BadgeCategory::Participation,
            Vec::from_array(env, [req(Counter::SocialShares, 5)]),
        ),
        BadgeId::TriviaBuff => (
            "Trivia Buff",
            "lightbulb",
            BadgeCategory::Participation,
            Vec::from_array(env, [req(Counter::TriviaAnswers, 20)]),
        ),
        BadgeId::Recruiter => (
            "Recruiter",
            "handshake",
            BadgeCategory::Achievement,
            Vec::from_array(env, [req(Counter::ConvertedReferrals, 1)]),
        ),
        BadgeId::TalentScout => (
            "Talent Scout",
            "binoculars",
            BadgeCategory::Achievement,
            Vec::from_array(env, [req(Counter::ConvertedReferrals, 5)]),
        ),
        BadgeId::CommunityPillar => (
            "Community Pillar",
            "trophy",
            BadgeCategory::Achievement,
            Vec::from_array(
                env,
                [req(Counter::ChatMessages, 25), req(Counter::SocialShares, 10)],
            ),
        ),
    };
    BadgeDef {
        id: badge,
        name: String::from_str(env, name),
        icon: Symbol::new(env, icon),
        category,
        requirements,
    }
}

/// The badge catalog in award order.
pub fn badges(env: &Env) -> Vec<BadgeDef> {
    let mut all = Vec::new(env);
    for id in ORDER.iter() {
        all.push_back(definition(env, *id));
    }
    all
}
