//! # 展示摘要
//!
//! 把判定结果换算成 0~100 的匹配百分比、排名键与展示文案。
//! 纯映射，不影响等级判定。

use crate::classifier::Classification;
use crate::element::{element_relation, ElementRelation};
use crate::types::{Profile, Tier};
use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

/// 异性相吸的最低百分比
pub const OPPOSITES_ATTRACT_MIN_PERCENT: i32 = 61;

/// 排名键
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum RankKey {
    Perfect,
    Excellent,
    Good,
    Challenging,
}

impl RankKey {
    pub fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::Soulmate => Self::Perfect,
            Tier::TwinFlame | Tier::Excellent => Self::Excellent,
            Tier::VeryGood | Tier::GoodFriends | Tier::OppositesAttract | Tier::Neutral => Self::Good,
            Tier::Difficult => Self::Challenging,
        }
    }
}

/// 等级展示文案
pub fn tier_label(tier: Tier) -> &'static str {
    match tier {
        Tier::Soulmate => "Soulmate Match",
        Tier::TwinFlame => "Twin Flame Match",
        Tier::Excellent | Tier::VeryGood => "Excellent Match",
        Tier::GoodFriends | Tier::Neutral => "Neutral Match",
        Tier::OppositesAttract => "Opposites Attract",
        Tier::Difficult => "Difficult Match",
    }
}

/// 各等级的基础百分比
fn base_percent(tier: Tier) -> i32 {
    match tier {
        Tier::Soulmate => 92,
        Tier::TwinFlame => 85,
        Tier::Excellent => 75,
        Tier::VeryGood => 68,
        Tier::GoodFriends => 58,
        Tier::OppositesAttract => 62,
        Tier::Difficult => 35,
        Tier::Neutral => 48,
    }
}

/// 同生肖时按元素关系取固定值
fn same_animal_percent(relation: ElementRelation) -> i32 {
    match relation {
        ElementRelation::Same => 68,
        ElementRelation::Compatible => 65,
        ElementRelation::Semi => 62,
        ElementRelation::Opposing => 58,
    }
}

/// 展示摘要
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchDisplay {
    pub percentage: u8,
    pub rank: RankKey,
    pub label: &'static str,
}

impl MatchDisplay {
    pub fn from_classification(classification: &Classification, a: &Profile, b: &Profile) -> Self {
        let tier = classification.tier;
        Self {
            percentage: match_percentage(classification, a, b),
            rank: RankKey::for_tier(tier),
            label: tier_label(tier),
        }
    }
}

/// 匹配百分比
///
/// 以百分之一为单位计算，避免浮点：`base × 100 + score × 1.2`，
/// 再四舍五入到整数并截断到 0..=100。
pub fn match_percentage(classification: &Classification, a: &Profile, b: &Profile) -> u8 {
    let mut centi = if a.animal == b.animal {
        same_animal_percent(element_relation(a.west.element(), b.west.element())) * 100
    } else {
        let raw = base_percent(classification.tier) * 100
            + classification.score.centi().saturating_mul(6) / 5;
        if classification.tier == Tier::OppositesAttract {
            raw.max(OPPOSITES_ATTRACT_MIN_PERCENT * 100)
        } else {
            raw
        }
    };
    centi = centi.saturating_add(50).div_euclid(100);
    centi.clamp(0, 100) as u8
}
