//! # 生肖关系解析
//!
//! 把关系表查询合成为一组命名标志，并按固定优先级列出"困难叠加"：
//! 冲 > 害 > 刑 > 破 > 六害。

use crate::tables::{RelationTable, RelationTables};
use crate::types::ChineseAnimal;
use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_std::vec::Vec;

// ============================================================================
// 困难叠加
// ============================================================================

/// 困难叠加种类（按优先级排列）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum OverlayKind {
    /// 冲
    Clash,
    /// 害
    Harm,
    /// 刑
    Punishment,
    /// 破
    Break,
    /// 六害（害的旧称）
    Damage,
}

/// 叠加的展示文案
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct OverlayLabel {
    pub hanzi: &'static str,
    pub pinyin: &'static str,
    pub english: &'static str,
    pub short_description: &'static str,
}

impl OverlayKind {
    /// 优先级顺序
    pub const PRIORITY: [OverlayKind; 5] = [
        Self::Clash,
        Self::Harm,
        Self::Punishment,
        Self::Break,
        Self::Damage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clash => "clash",
            Self::Harm => "harm",
            Self::Punishment => "punishment",
            Self::Break => "break",
            Self::Damage => "damage",
        }
    }

    pub fn label(self) -> OverlayLabel {
        match self {
            Self::Clash => OverlayLabel {
                hanzi: "六冲",
                pinyin: "liù chōng",
                english: "Clash",
                short_description: "Clash pairs have strong tension and unstable rhythms, often pulling in opposite directions.",
            },
            Self::Harm => OverlayLabel {
                hanzi: "相害",
                pinyin: "xiāng hài",
                english: "Harm",
                short_description: "Harm relationships can feel undermining over time, with emotional or practical wear and tear.",
            },
            Self::Punishment => OverlayLabel {
                hanzi: "相刑",
                pinyin: "xiāng xíng",
                english: "Punishment",
                short_description: "Punishment patterns push growth through friction, but can feel self-sabotaging if unmanaged.",
            },
            Self::Break => OverlayLabel {
                hanzi: "相破",
                pinyin: "xiāng pò",
                english: "Break",
                short_description: "Break combinations erode stability gently, leading to gradual cracks or loss of trust.",
            },
            Self::Damage => OverlayLabel {
                hanzi: "六害",
                pinyin: "liù hài",
                english: "Six Damages",
                short_description: "Six Damages pairs are the classic worst matches, with deep incompatibilities if heavily relied on.",
            },
        }
    }
}

// ============================================================================
// 标志集合
// ============================================================================

/// 一对生肖的关系标志
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ChineseFlags {
    pub same_trine: bool,
    /// 六合
    pub secret_friend: bool,
    /// 六冲（分类上走"异性相吸"）
    pub conflict: bool,
    /// 六冲作为叠加的视图，与 conflict 同表
    pub clash: bool,
    pub harm: bool,
    /// 六害旧称，与 harm 同表
    pub damage: bool,
    pub punishment: bool,
    pub break_: bool,
    pub lively: bool,
}

impl ChineseFlags {
    fn has(&self, kind: OverlayKind) -> bool {
        match kind {
            OverlayKind::Clash => self.clash,
            OverlayKind::Harm => self.harm,
            OverlayKind::Punishment => self.punishment,
            OverlayKind::Break => self.break_,
            OverlayKind::Damage => self.damage,
        }
    }

    /// 全部存在的叠加，按优先级排序
    pub fn overlays(&self) -> Vec<OverlayKind> {
        OverlayKind::PRIORITY.iter().copied().filter(|kind| self.has(*kind)).collect()
    }

    /// 决定"困难"等级的首个叠加；六冲不在此列
    pub fn primary_difficult(&self) -> Option<OverlayKind> {
        OverlayKind::PRIORITY
            .iter()
            .copied()
            .filter(|kind| *kind != OverlayKind::Clash)
            .find(|kind| self.has(*kind))
    }
}

/// 解析一对生肖的全部关系
pub fn resolve(tables: &RelationTables, a: ChineseAnimal, b: ChineseAnimal) -> ChineseFlags {
    let conflict = tables.in_table(RelationTable::Conflict, a, b);
    let harm = tables.in_table(RelationTable::Harm, a, b);
    ChineseFlags {
        same_trine: tables.is_same_trine(a, b),
        secret_friend: tables.in_table(RelationTable::SecretFriend, a, b),
        conflict,
        clash: conflict,
        harm,
        damage: harm,
        punishment: tables.in_table(RelationTable::Punishment, a, b),
        break_: tables.in_table(RelationTable::Break, a, b),
        lively: tables.is_lively(a, b),
    }
}
