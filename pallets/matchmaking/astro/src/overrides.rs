//! # 强制等级规则
//!
//! 少量显式规则，先于一般判定链生效。列表有序，首个命中者生效。

use crate::types::{ChineseAnimal, Profile, Tier, WesternSign};
use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_std::borrow::Cow;
use sp_std::vec::Vec;

/// 单条强制规则
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct OverrideRule {
    pub west: WesternSign,
    pub animal: ChineseAnimal,
    pub tier: Tier,
}

impl OverrideRule {
    pub const fn new(west: WesternSign, animal: ChineseAnimal, tier: Tier) -> Self {
        Self { west, animal, tier }
    }
}

/// 规则匹配方式
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum OverrideMatching {
    /// 四向匹配：A、B 两方整体，以及 (星座A, 生肖B)、(星座B, 生肖A) 交叉组合
    #[default]
    Permissive,
    /// 仅匹配任一方的完整星盘
    EitherProfile,
    /// 仅匹配第一方
    FirstProfile,
}

/// 经典强制规则（顺序有意义）
pub const CLASSIC_OVERRIDES: [OverrideRule; 8] = [
    // 灵魂伴侣
    OverrideRule::new(WesternSign::Gemini, ChineseAnimal::Rat, Tier::Soulmate),
    OverrideRule::new(WesternSign::Libra, ChineseAnimal::Rat, Tier::Soulmate),
    OverrideRule::new(WesternSign::Gemini, ChineseAnimal::Dragon, Tier::Soulmate),
    OverrideRule::new(WesternSign::Libra, ChineseAnimal::Dragon, Tier::Soulmate),
    // 双生火焰
    OverrideRule::new(WesternSign::Aries, ChineseAnimal::Rat, Tier::TwinFlame),
    OverrideRule::new(WesternSign::Sagittarius, ChineseAnimal::Rat, Tier::TwinFlame),
    OverrideRule::new(WesternSign::Aries, ChineseAnimal::Dragon, Tier::TwinFlame),
    OverrideRule::new(WesternSign::Sagittarius, ChineseAnimal::Dragon, Tier::TwinFlame),
];

/// 强制规则注册表
///
/// 经典规则直接借用静态表，构造不分配内存。
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct OverrideRegistry {
    rules: Cow<'static, [OverrideRule]>,
}

impl OverrideRegistry {
    pub fn new(rules: Vec<OverrideRule>) -> Self {
        Self { rules: Cow::Owned(rules) }
    }

    pub const fn from_static(rules: &'static [OverrideRule]) -> Self {
        Self { rules: Cow::Borrowed(rules) }
    }

    pub const fn classic() -> Self {
        Self::from_static(&CLASSIC_OVERRIDES)
    }

    pub fn rules(&self) -> &[OverrideRule] {
        &self.rules
    }

    /// 按注册顺序查找首个命中的规则
    pub fn check(&self, a: &Profile, b: &Profile, matching: OverrideMatching) -> Option<Tier> {
        let hit = self.rules.iter().find(|rule| rule_matches(rule, a, b, matching))?;
        log::trace!(
            target: crate::LOG_TARGET,
            "override {}/{} -> {}",
            hit.west,
            hit.animal,
            hit.tier.as_key()
        );
        Some(hit.tier)
    }
}

fn rule_matches(rule: &OverrideRule, a: &Profile, b: &Profile, matching: OverrideMatching) -> bool {
    let is = |west: WesternSign, animal: ChineseAnimal| rule.west == west && rule.animal == animal;
    match matching {
        OverrideMatching::Permissive => {
            is(a.west, a.animal) || is(b.west, b.animal) || is(b.west, a.animal) || is(a.west, b.animal)
        }
        OverrideMatching::EitherProfile => is(a.west, a.animal) || is(b.west, b.animal),
        OverrideMatching::FirstProfile => is(a.west, a.animal),
    }
}
