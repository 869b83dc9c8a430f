use crate::types::{Activity, BadgeId, Stage};

/// Point rule for one activity. Fixed activities award `base_points` per
/// call; per-unit activities multiply by the units in the caller's context,
/// optionally clipped to a per-UTC-day point cap.
#[derive(Clone, Copy)]
pub struct ActivityDef {
    pub base_points: i128,
    pub per_unit: Option<PerUnit>,
}

#[derive(Clone, Copy)]
pub struct PerUnit {
    pub points_per_unit: i128,
    pub daily_cap: Option<i128>,
}

pub const CHAT_DAILY_CAP: i128 = 50;
pub const ENGAGEMENT_DAILY_CAP: i128 = 30;
pub const DEFAULT_SHARE_DAILY_CAP: i128 = 75;

const fn fixed(base_points: i128) -> ActivityDef {
    ActivityDef {
        base_points,
        per_unit: None,
    }
}

const fn per_unit(points_per_unit: i128, daily_cap: Option<i128>) -> ActivityDef {
    ActivityDef {
        base_points: 0,
        per_unit: Some(PerUnit {
            points_per_unit,
            daily_cap,
        }),
    }
}

/// The full activity catalog. Exhaustive over `Activity`, so adding a
/// variant without pricing it fails to compile.
pub fn definition(activity: &Activity) -> ActivityDef {
    match activity {
        Activity::ChatMessage => per_unit(5, Some(CHAT_DAILY_CAP)),
        Activity::PracticeTest => fixed(20),
        Activity::DocumentDownload => fixed(10),
        Activity::ApplicationSubmitted => fixed(100),
        Activity::StageCompleted(stage) => fixed(stage_points(stage)),
        Activity::ReferralSignup => fixed(100),
        Activity::ReferralHired => fixed(500),
        Activity::Donation => per_unit(10, None),
        // The daily cap for shares comes from config; the accruer swaps
        // the default in. See `PointsLedger::accrue`.
        Activity::SocialShare => per_unit(25, Some(DEFAULT_SHARE_DAILY_CAP)),
        Activity::TriviaCorrect => per_unit(10, None),
        Activity::TriviaSpeedBonus => fixed(5),
        Activity::TriviaPerfectGame => fixed(25),
        Activity::Engagement => per_unit(1, Some(ENGAGEMENT_DAILY_CAP)),
        Activity::BadgeEarned(badge) => fixed(badge_points(badge)),
    }
}

const fn stage_points(stage: &Stage) -> i128 {
    match stage {
        Stage::Screening => 50,
        Stage::Assessment => 100,
        Stage::Interview => 150,
        Stage::Offer => 200,
    }
}

pub const fn badge_points(badge: &BadgeId) -> i128 {
    match badge {
        BadgeId::ChatStarter => 25,
        BadgeId::ChatRegular => 50,
        BadgeId::TestTaker => 25,
        BadgeId::TestAce => 75,
        BadgeId::Bookworm => 25,
        BadgeId::Applicant => 50,
        BadgeId::Advocate => 50,
        BadgeId::TriviaBuff => 50,
        BadgeId::Recruiter => 50,
        BadgeId::TalentScout => 100,
        BadgeId::CommunityPillar => 100,
    }
}
