//! # 合盘等级判定
//!
//! 严格有序、首个命中即返回的判定链：
//!
//! | 步骤 | 条件 | 等级 |
//! |------|------|------|
//! | 1 | 同生肖 | GoodFriends |
//! | 2 | 强制规则 | 规则指定 |
//! | 3 | 害 / 刑 / 破 / 六害 | Difficult |
//! | 4 | 六冲 | OppositesAttract |
//! | 5 | 三合 + 同元素 | Soulmate（同星座封顶） |
//! | 6 | 三合 + 相容且非对宫 | TwinFlame |
//! | 7 | (三合或六合) + 相容且非对宫 | Excellent |
//! | 8 | 三合 + 对宫或不相容 | VeryGood |
//! | 9 | 对宫 + 非三合 + 非最不合 | GoodFriends |
//! | 10 | 活跃配对 + 非三合 + 非对宫 + 同/相容元素 | GoodFriends |
//! | 11 | 活跃配对 | Difficult |
//! | 12 | 其他 | Neutral |
//!
//! 分数与等级相互独立：分数只用于排序和展示，从不决定走哪一步。

use crate::config::EngineConfig;
use crate::element::{self, WestRelation};
use crate::relations::{self, OverlayKind};
use crate::types::{Profile, Score, Tier};
use crate::LOG_TARGET;
use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_std::vec::Vec;

// ============================================================================
// 计分权重（百分之一）
// ============================================================================

const SAME_ANIMAL_SCORE: Score = Score::from_centi(50);
const FORCED_OVERRIDE_SCORE: Score = Score::from_centi(600);
const OPPOSITES_ATTRACT_FLOOR: Score = Score::from_centi(300);

const W_SAME_TRINE: i32 = 300;
const W_SECRET_FRIEND: i32 = 200;
const W_LIVELY: i32 = 50;
const W_CONFLICT: i32 = -400;
const W_DAMAGE: i32 = -300;
const W_OVERLAY: i32 = -350;
const W_WEST_OPPOSITE: i32 = 100;
const W_SAME_ELEMENT: i32 = 200;
const W_COMPATIBLE_ELEMENT: i32 = 100;
const W_OPPOSITE_ELEMENT: i32 = -100;
const W_SAME_WEST: i32 = 25;

// ============================================================================
// 结果类型
// ============================================================================

/// 解释性徽章
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Badge {
    SameChineseSign,
    ForcedOverride,
    SameTrine,
    SecretFriend,
    LivelyPair,
    Conflict,
    Damage,
    Clash,
    Harm,
    Punishment,
    Break,
    MagneticOppositesWest,
    SameElementWest,
    CompatibleWestElements,
    OppositeWestElements,
    SameWestCapApplied,
}

impl Badge {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SameChineseSign => "Same Chinese Sign",
            Self::ForcedOverride => "Forced Override",
            Self::SameTrine => "Same Trine",
            Self::SecretFriend => "Secret Friend",
            Self::LivelyPair => "Lively Pair",
            Self::Conflict => "Conflict",
            Self::Damage => "Damage",
            Self::Clash => "Clash",
            Self::Harm => "Harm",
            Self::Punishment => "Punishment",
            Self::Break => "Break",
            Self::MagneticOppositesWest => "Magnetic Opposites (West)",
            Self::SameElementWest => "Same Element (West)",
            Self::CompatibleWestElements => "Compatible West Elements",
            Self::OppositeWestElements => "Opposite West Elements",
            Self::SameWestCapApplied => "Same West (cap applied)",
        }
    }
}

/// 判定原因
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Reason {
    SameChineseSign,
    ForcedOverride,
    /// 困难叠加（取优先级最高者）
    Overlay(OverlayKind),
    MagneticOpposites,
    SameWestCap,
    Soulmate,
    TwinFlame,
    Excellent,
    VeryGood,
    WestOpposite,
    LivelySupported,
    LivelyUnsupported,
    Default,
}

impl Reason {
    pub fn text(self) -> &'static str {
        match self {
            Self::SameChineseSign => "Same Chinese animal - shown as Good Friends",
            Self::ForcedOverride => "Manual override / apex match",
            Self::Overlay(OverlayKind::Clash) => "Clash (冲) - High divorce risk, Major relocation/fight possibility",
            Self::Overlay(OverlayKind::Harm) => "Harm (害) - Emotional betrayal, Family gossip",
            Self::Overlay(OverlayKind::Punishment) => "Punishment (刑) - Self-sabotage in love, Karmic lesson year",
            Self::Overlay(OverlayKind::Break) => "Break (破) - Trust erosion, Project failure",
            Self::Overlay(OverlayKind::Damage) => "Six Damages (六害) - Worst compatibility",
            Self::MagneticOpposites => "Six Conflicts (Magnetic Opposites) applied",
            Self::SameWestCap => "Same West + Same Trine capped per config",
            Self::Soulmate => "Same Chinese trine + same Western element",
            Self::TwinFlame => "Same Chinese trine + compatible Western elements",
            Self::Excellent => "Excellent: strong Chinese + Western alignment",
            Self::VeryGood => "Same trine + opposing/non-compatible West",
            Self::WestOpposite => "Opposite West signs => Good Friends",
            Self::LivelySupported => "Lively pair + same/compatible West => Good Friends",
            Self::LivelyUnsupported => "Lively pair without Western support",
            Self::Default => "Default: no strong pattern matched",
        }
    }
}

/// 附加标志
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassificationFlags {
    /// 存在的困难叠加（按优先级），无则为 None
    pub chinese_difficult: Option<Vec<OverlayKind>>,
}

/// 判定结果
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Classification {
    pub tier: Tier,
    pub badges: Vec<Badge>,
    /// 仅用于排序与展示
    pub score: Score,
    pub reason: Option<Reason>,
    pub flags: ClassificationFlags,
}

impl Classification {
    pub fn badge_labels(&self) -> Vec<&'static str> {
        self.badges.iter().map(|badge| badge.as_str()).collect()
    }

    pub fn has_badge(&self, badge: Badge) -> bool {
        self.badges.contains(&badge)
    }

    pub fn reason_text(&self) -> Option<&'static str> {
        self.reason.map(Reason::text)
    }
}

// ============================================================================
// 判定器
// ============================================================================

/// 徽章与分数累加器
struct Tally {
    badges: Vec<Badge>,
    score: Score,
    chinese_difficult: Option<Vec<OverlayKind>>,
}

impl Tally {
    fn new() -> Self {
        Self { badges: Vec::new(), score: Score::ZERO, chinese_difficult: None }
    }

    fn add(&mut self, present: bool, badge: Badge, weight: i32) {
        if present {
            self.badges.push(badge);
            self.score = self.score.saturating_add(Score::from_centi(weight));
        }
    }

    fn finish(self, tier: Tier, reason: Reason) -> Classification {
        Classification {
            tier,
            badges: self.badges,
            score: self.score,
            reason: Some(reason),
            flags: ClassificationFlags { chinese_difficult: self.chinese_difficult },
        }
    }
}

/// 合盘等级判定器
///
/// 只借用不可变配置，可在任意多个调用方间复制共享。
#[derive(Clone, Copy, Debug)]
pub struct TierClassifier<'a> {
    config: &'a EngineConfig,
}

impl<'a> TierClassifier<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a EngineConfig {
        self.config
    }

    /// 判定两方星盘的合盘等级
    pub fn classify(&self, a: &Profile, b: &Profile) -> Classification {
        let classification = self.evaluate(a, b);
        log::debug!(
            target: LOG_TARGET,
            "{}-{} x {}-{} => {} (score {})",
            a.west,
            a.animal,
            b.west,
            b.animal,
            classification.tier.as_key(),
            classification.score.centi()
        );
        classification
    }

    fn evaluate(&self, a: &Profile, b: &Profile) -> Classification {
        // 1) 同生肖：不看星座，也不看强制规则
        if a.animal == b.animal {
            let mut tally = Tally::new();
            tally.badges.push(Badge::SameChineseSign);
            tally.score = SAME_ANIMAL_SCORE;
            return tally.finish(Tier::GoodFriends, Reason::SameChineseSign);
        }

        // 2) 强制规则
        if let Some(tier) = self.config.overrides().check(a, b, self.config.override_matching()) {
            let mut tally = Tally::new();
            tally.badges.push(Badge::ForcedOverride);
            tally.score = FORCED_OVERRIDE_SCORE;
            return tally.finish(tier, Reason::ForcedOverride);
        }

        let tables = self.config.tables();
        let flags = relations::resolve(tables, a.animal, b.animal);
        let west = element::west_relation(a.west, b.west);
        let west_opposite = west == WestRelation::Opposite;
        let west_compatible = element::is_west_compatible(a.west, b.west);
        let same_element = element::same_element(a.west, b.west);
        let compatible_element = element::compatible_element(a.west, b.west);
        let same_west = a.west == b.west;

        let mut tally = Tally::new();
        tally.add(flags.same_trine, Badge::SameTrine, W_SAME_TRINE);
        tally.add(flags.secret_friend, Badge::SecretFriend, W_SECRET_FRIEND);
        tally.add(flags.lively, Badge::LivelyPair, W_LIVELY);
        tally.add(flags.conflict, Badge::Conflict, W_CONFLICT);
        tally.add(flags.damage, Badge::Damage, W_DAMAGE);
        tally.add(flags.clash, Badge::Clash, W_OVERLAY);
        tally.add(flags.harm, Badge::Harm, W_OVERLAY);
        tally.add(flags.punishment, Badge::Punishment, W_OVERLAY);
        tally.add(flags.break_, Badge::Break, W_OVERLAY);

        match west {
            WestRelation::Opposite => tally.add(true, Badge::MagneticOppositesWest, W_WEST_OPPOSITE),
            WestRelation::SameElement => tally.add(true, Badge::SameElementWest, W_SAME_ELEMENT),
            WestRelation::CompatibleElement => {
                tally.add(true, Badge::CompatibleWestElements, W_COMPATIBLE_ELEMENT)
            }
            WestRelation::OppositeElement => {
                tally.add(true, Badge::OppositeWestElements, W_OPPOSITE_ELEMENT)
            }
            WestRelation::Mixed => {}
        }
        if same_west {
            tally.score = tally.score.saturating_add(Score::from_centi(W_SAME_WEST));
        }

        let overlays = flags.overlays();
        if !overlays.is_empty() {
            tally.chinese_difficult = Some(overlays);
        }

        // 3) 害、刑、破、六害 → 困难（六冲除外）
        if let Some(kind) = flags.primary_difficult() {
            return tally.finish(Tier::Difficult, Reason::Overlay(kind));
        }

        // 4) 六冲 → 异性相吸，分数托底
        if flags.conflict {
            tally.score = tally.score.max(OPPOSITES_ATTRACT_FLOOR);
            return tally.finish(Tier::OppositesAttract, Reason::MagneticOpposites);
        }

        // 5) 三合 + 同元素
        if flags.same_trine && same_element {
            if same_west {
                tally.badges.push(Badge::SameWestCapApplied);
                return tally.finish(self.config.same_west_cap_tier(), Reason::SameWestCap);
            }
            return tally.finish(Tier::Soulmate, Reason::Soulmate);
        }

        // 6) 三合 + 相容元素（非对宫）
        // 同星座必同元素，封顶已在第 5 步完成
        if flags.same_trine && west_compatible && !west_opposite {
            return tally.finish(Tier::TwinFlame, Reason::TwinFlame);
        }

        // 7) 三合或六合 + 西洋相容
        if (flags.same_trine || flags.secret_friend) && west_compatible && !west_opposite {
            return tally.finish(Tier::Excellent, Reason::Excellent);
        }

        // 8) 三合 + 对宫或不相容
        if flags.same_trine && (west_opposite || !west_compatible) {
            return tally.finish(Tier::VeryGood, Reason::VeryGood);
        }

        // 9) 对宫，生肖不属最不合
        if west_opposite && !flags.same_trine && !tables.is_least_compatible(a.animal, b.animal) {
            return tally.finish(Tier::GoodFriends, Reason::WestOpposite);
        }

        // 10) 活跃配对 + 同/相容元素
        if flags.lively
            && !flags.same_trine
            && !west_opposite
            && (same_element || compatible_element)
        {
            return tally.finish(Tier::GoodFriends, Reason::LivelySupported);
        }

        // 11) 活跃配对但无西洋支撑
        if flags.lively {
            return tally.finish(Tier::Difficult, Reason::LivelyUnsupported);
        }

        // 12) 默认
        tally.finish(Tier::Neutral, Reason::Default)
    }
}
