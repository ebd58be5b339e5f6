//! # 生肖关系表
//!
//! 三合、六合、六冲、六害、相刑、相破、最不合与"活跃配对"的静态表。
//!
//! 所有成对表均为无序对：按地支索引排序后存入 12×12 位图，
//! 查询时同样先规范化，因此 `contains(a, b) == contains(b, a)` 由构造保证。

use crate::types::{ChineseAnimal, Trine};
use ChineseAnimal::*;

/// 规范化无序对：索引小者在前
pub const fn canonical_pair(a: ChineseAnimal, b: ChineseAnimal) -> (ChineseAnimal, ChineseAnimal) {
    if (a as u8) <= (b as u8) {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// 无序对表
// ============================================================================

/// 无序生肖对成员表
///
/// `rows[lo]` 的第 `hi` 位表示 (lo, hi) 在表中。同一生肖的自对不入表。
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PairTable {
    rows: [u16; 12],
}

impl PairTable {
    pub const EMPTY: PairTable = PairTable { rows: [0; 12] };

    /// 从对列表构建，顺序与重复无关，自对被忽略
    pub const fn from_pairs(pairs: &[(ChineseAnimal, ChineseAnimal)]) -> Self {
        let mut rows = [0u16; 12];
        let mut i = 0;
        while i < pairs.len() {
            let (lo, hi) = canonical_pair(pairs[i].0, pairs[i].1);
            if (lo as u8) != (hi as u8) {
                rows[lo as usize] |= 1 << (hi as u8);
            }
            i += 1;
        }
        PairTable { rows }
    }

    pub const fn contains(&self, a: ChineseAnimal, b: ChineseAnimal) -> bool {
        let (lo, hi) = canonical_pair(a, b);
        self.rows[lo as usize] & (1 << (hi as u8)) != 0
    }

    /// 表中无序对数量
    pub fn len(&self) -> usize {
        self.rows.iter().map(|row| row.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// 活跃配对（有向邻接，双向取并集）
// ============================================================================

/// 活跃配对邻接表
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct LivelyTable {
    rows: [u16; 12],
}

impl LivelyTable {
    pub const EMPTY: LivelyTable = LivelyTable { rows: [0; 12] };

    /// 从每个生肖的邻接列表构建，自邻接被忽略
    pub const fn from_adjacency(adjacency: &[(ChineseAnimal, &[ChineseAnimal])]) -> Self {
        let mut rows = [0u16; 12];
        let mut i = 0;
        while i < adjacency.len() {
            let from = adjacency[i].0;
            let targets = adjacency[i].1;
            let mut j = 0;
            while j < targets.len() {
                if (targets[j] as u8) != (from as u8) {
                    rows[from as usize] |= 1 << (targets[j] as u8);
                }
                j += 1;
            }
            i += 1;
        }
        LivelyTable { rows }
    }

    /// 任一方向存在即视为活跃配对
    pub const fn contains(&self, a: ChineseAnimal, b: ChineseAnimal) -> bool {
        self.rows[a as usize] & (1 << (b as u8)) != 0 || self.rows[b as usize] & (1 << (a as u8)) != 0
    }
}

// ============================================================================
// 经典表
// ============================================================================

/// 六合（Liu He）- 暗合贵人
/// 子丑合、寅亥合、卯戌合、辰酉合、巳申合、午未合
pub const SECRET_FRIEND_PAIRS: [(ChineseAnimal, ChineseAnimal); 6] = [
    (Rat, Ox),
    (Tiger, Pig),
    (Rabbit, Dog),
    (Dragon, Rooster),
    (Snake, Monkey),
    (Horse, Goat),
];

/// 六冲（Liu Chong）
/// 子午冲、丑未冲、寅申冲、卯酉冲、辰戌冲、巳亥冲
pub const CONFLICT_PAIRS: [(ChineseAnimal, ChineseAnimal); 6] = [
    (Rat, Horse),
    (Ox, Goat),
    (Tiger, Monkey),
    (Rabbit, Rooster),
    (Dragon, Dog),
    (Snake, Pig),
];

/// 六害（Liu Hai），亦即旧称"六害/Six Damages"
/// 子未害、丑午害、寅巳害、卯辰害、申亥害、酉戌害
pub const HARM_PAIRS: [(ChineseAnimal, ChineseAnimal); 6] = [
    (Rat, Goat),
    (Ox, Horse),
    (Tiger, Snake),
    (Rabbit, Dragon),
    (Monkey, Pig),
    (Rooster, Dog),
];

/// 相刑（Xing）
/// 子卯刑、寅巳申三刑、丑未戌三刑
pub const PUNISHMENT_PAIRS: [(ChineseAnimal, ChineseAnimal); 7] = [
    (Rat, Rabbit),
    (Snake, Tiger),
    (Snake, Monkey),
    (Tiger, Monkey),
    (Ox, Goat),
    (Ox, Dog),
    (Goat, Dog),
];

/// 相破（Po）
/// 子酉破、午卯破、申巳破、寅亥破、丑辰破、戌未破
pub const BREAK_PAIRS: [(ChineseAnimal, ChineseAnimal); 6] = [
    (Rat, Rooster),
    (Horse, Rabbit),
    (Monkey, Snake),
    (Tiger, Pig),
    (Ox, Dragon),
    (Dog, Goat),
];

/// 最不合：即使西洋星座对宫也不提升为好朋友
pub const LEAST_COMPATIBLE_PAIRS: [(ChineseAnimal, ChineseAnimal); 18] = [
    (Rat, Horse),
    (Rat, Goat),
    (Rat, Rooster),
    (Rat, Rabbit),
    (Ox, Goat),
    (Ox, Horse),
    (Ox, Dragon),
    (Ox, Dog),
    (Tiger, Snake),
    (Tiger, Monkey),
    (Rabbit, Rooster),
    (Rabbit, Dragon),
    (Rabbit, Horse),
    (Dragon, Dog),
    (Dragon, Goat),
    (Snake, Pig),
    (Monkey, Pig),
    (Rooster, Dog),
];

/// 活跃配对图表
pub const LIVELY_ADJACENCY: [(ChineseAnimal, &[ChineseAnimal]); 12] = [
    (Rat, &[Tiger, Snake, Dog, Pig]),
    (Ox, &[Tiger, Monkey, Pig]),
    (Tiger, &[Horse, Dog, Pig, Rat, Ox, Rabbit, Dragon, Goat, Rooster]),
    (Rabbit, &[Goat, Dog, Pig, Tiger, Snake, Monkey]),
    (Dragon, &[Rat, Monkey, Rooster, Tiger, Snake, Horse, Pig]),
    (Snake, &[Rat, Rabbit, Dragon, Horse, Goat, Dog]),
    (Horse, &[Tiger, Goat, Dog, Dragon, Snake, Monkey, Rooster, Pig]),
    (Goat, &[Rabbit, Horse, Pig, Snake, Monkey, Rooster]),
    (Monkey, &[Rat, Dragon, Ox, Rabbit, Horse, Goat, Rooster, Dog]),
    (Rooster, &[Ox, Dragon, Snake, Tiger, Horse, Goat, Monkey, Pig]),
    (Dog, &[Tiger, Rabbit, Horse, Snake, Monkey, Pig, Rat]),
    (Pig, &[Goat, Rabbit, Tiger, Rat, Ox, Dragon, Horse, Rooster, Dog]),
];

// ============================================================================
// 关系表集合
// ============================================================================

/// 成对关系表种类
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RelationTable {
    SecretFriend,
    Conflict,
    /// 六害（合并了旧的 Damage 表）
    Harm,
    Punishment,
    Break,
    LeastCompatible,
}

/// 全部关系表（不可变）
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RelationTables {
    secret_friend: PairTable,
    conflict: PairTable,
    harm: PairTable,
    punishment: PairTable,
    break_: PairTable,
    least_compatible: PairTable,
    lively: LivelyTable,
    /// 按地支索引的三合组
    trines: [Trine; 12],
}

/// 经典三合分组：申子辰、巳酉丑、寅午戌、亥卯未
pub const fn classic_trines() -> [Trine; 12] {
    let mut trines = [Trine::Visionaries; 12];
    let mut i = 0;
    while i < ChineseAnimal::ALL.len() {
        trines[i] = ChineseAnimal::ALL[i].trine();
        i += 1;
    }
    trines
}

/// 经典关系表
pub const CLASSIC_TABLES: RelationTables = RelationTables::classic();

impl Default for RelationTables {
    fn default() -> Self {
        CLASSIC_TABLES
    }
}

impl RelationTables {
    pub const fn classic() -> Self {
        Self {
            secret_friend: PairTable::from_pairs(&SECRET_FRIEND_PAIRS),
            conflict: PairTable::from_pairs(&CONFLICT_PAIRS),
            harm: PairTable::from_pairs(&HARM_PAIRS),
            punishment: PairTable::from_pairs(&PUNISHMENT_PAIRS),
            break_: PairTable::from_pairs(&BREAK_PAIRS),
            least_compatible: PairTable::from_pairs(&LEAST_COMPATIBLE_PAIRS),
            lively: LivelyTable::from_adjacency(&LIVELY_ADJACENCY),
            trines: classic_trines(),
        }
    }

    /// 全空表，用于构造替代规则集（三合仍为经典分组）
    pub const fn empty() -> Self {
        Self {
            secret_friend: PairTable::EMPTY,
            conflict: PairTable::EMPTY,
            harm: PairTable::EMPTY,
            punishment: PairTable::EMPTY,
            break_: PairTable::EMPTY,
            least_compatible: PairTable::EMPTY,
            lively: LivelyTable::EMPTY,
            trines: classic_trines(),
        }
    }

    pub const fn with_secret_friend(mut self, table: PairTable) -> Self {
        self.secret_friend = table;
        self
    }

    pub const fn with_conflict(mut self, table: PairTable) -> Self {
        self.conflict = table;
        self
    }

    pub const fn with_harm(mut self, table: PairTable) -> Self {
        self.harm = table;
        self
    }

    pub const fn with_punishment(mut self, table: PairTable) -> Self {
        self.punishment = table;
        self
    }

    pub const fn with_break(mut self, table: PairTable) -> Self {
        self.break_ = table;
        self
    }

    pub const fn with_least_compatible(mut self, table: PairTable) -> Self {
        self.least_compatible = table;
        self
    }

    pub const fn with_lively(mut self, table: LivelyTable) -> Self {
        self.lively = table;
        self
    }

    /// 替换三合分组，`trines[i]` 为索引 i 的生肖所属组
    pub const fn with_trines(mut self, trines: [Trine; 12]) -> Self {
        self.trines = trines;
        self
    }

    pub const fn table(&self, table: RelationTable) -> &PairTable {
        match table {
            RelationTable::SecretFriend => &self.secret_friend,
            RelationTable::Conflict => &self.conflict,
            RelationTable::Harm => &self.harm,
            RelationTable::Punishment => &self.punishment,
            RelationTable::Break => &self.break_,
            RelationTable::LeastCompatible => &self.least_compatible,
        }
    }

    /// 检查无序对是否在指定表中
    pub const fn in_table(&self, table: RelationTable, a: ChineseAnimal, b: ChineseAnimal) -> bool {
        self.table(table).contains(a, b)
    }

    pub const fn trine_of(&self, animal: ChineseAnimal) -> Trine {
        self.trines[animal as usize]
    }

    pub fn is_same_trine(&self, a: ChineseAnimal, b: ChineseAnimal) -> bool {
        self.trine_of(a) == self.trine_of(b)
    }

    pub const fn is_least_compatible(&self, a: ChineseAnimal, b: ChineseAnimal) -> bool {
        self.least_compatible.contains(a, b)
    }

    pub const fn is_lively(&self, a: ChineseAnimal, b: ChineseAnimal) -> bool {
        self.lively.contains(a, b)
    }
}
