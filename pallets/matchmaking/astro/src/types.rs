//! # 星座生肖合盘 - 基础类型
//!
//! 西洋星座、生肖、元素、三合组、合盘等级与分数的定义，
//! 以及边界层使用的字符串解析。
//!
//! ## 索引
//!
//! - 星座: Aries(0) Taurus(1) Gemini(2) Cancer(3) Leo(4) Virgo(5)
//!   Libra(6) Scorpio(7) Sagittarius(8) Capricorn(9) Aquarius(10) Pisces(11)
//! - 生肖: 鼠(0) 牛(1) 虎(2) 兔(3) 龙(4) 蛇(5) 马(6) 羊(7) 猴(8) 鸡(9) 狗(10) 猪(11)

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use core::fmt;
use core::str::FromStr;
use scale_info::TypeInfo;

// ============================================================================
// 西洋星座
// ============================================================================

/// 西洋星座（黄道顺序）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum WesternSign {
    Aries = 0,
    Taurus = 1,
    Gemini = 2,
    Cancer = 3,
    Leo = 4,
    Virgo = 5,
    Libra = 6,
    Scorpio = 7,
    Sagittarius = 8,
    Capricorn = 9,
    Aquarius = 10,
    Pisces = 11,
}

impl WesternSign {
    /// 全部星座（黄道顺序）
    pub const ALL: [WesternSign; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    /// 从索引转换，超出 0..12 返回 None
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// 所属元素：火 Aries/Leo/Sagittarius，土 Taurus/Virgo/Capricorn，
    /// 风 Gemini/Libra/Aquarius，水 Cancer/Scorpio/Pisces
    pub fn element(self) -> Element {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => Element::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => Element::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => Element::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => Element::Water,
        }
    }

    /// 对宫星座（黄道上相隔六宫）
    pub fn opposite(self) -> Self {
        Self::ALL[(self as usize + 6) % 12]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for WesternSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WesternSign {
    type Err = ParseError;

    /// 大小写不敏感；未知名称直接拒绝，不做默认映射
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(s))
            .ok_or(ParseError::UnknownWesternSign)
    }
}

// ============================================================================
// 元素
// ============================================================================

/// 西洋四元素
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Element {
    Fire = 0,
    Earth = 1,
    Air = 2,
    Water = 3,
}

impl Element {
    pub const ALL: [Element; 4] = [Self::Fire, Self::Earth, Self::Air, Self::Water];
}

// ============================================================================
// 生肖
// ============================================================================

/// 十二生肖（地支顺序）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum ChineseAnimal {
    /// 鼠（子）
    Rat = 0,
    /// 牛（丑）
    Ox = 1,
    /// 虎（寅）
    Tiger = 2,
    /// 兔（卯）
    Rabbit = 3,
    /// 龙（辰）
    Dragon = 4,
    /// 蛇（巳）
    Snake = 5,
    /// 马（午）
    Horse = 6,
    /// 羊（未）
    Goat = 7,
    /// 猴（申）
    Monkey = 8,
    /// 鸡（酉）
    Rooster = 9,
    /// 狗（戌）
    Dog = 10,
    /// 猪（亥）
    Pig = 11,
}

impl ChineseAnimal {
    /// 全部生肖（地支顺序）
    pub const ALL: [ChineseAnimal; 12] = [
        Self::Rat,
        Self::Ox,
        Self::Tiger,
        Self::Rabbit,
        Self::Dragon,
        Self::Snake,
        Self::Horse,
        Self::Goat,
        Self::Monkey,
        Self::Rooster,
        Self::Dog,
        Self::Pig,
    ];

    /// 从索引转换，超出 0..12 返回 None
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// 三合组
    ///
    /// 申子辰、巳酉丑、寅午戌、亥卯未
    pub const fn trine(self) -> Trine {
        match self {
            Self::Rat | Self::Dragon | Self::Monkey => Trine::Visionaries,
            Self::Ox | Self::Snake | Self::Rooster => Trine::Strategists,
            Self::Tiger | Self::Horse | Self::Dog => Trine::Adventurers,
            Self::Rabbit | Self::Goat | Self::Pig => Trine::Artists,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }
}

impl fmt::Display for ChineseAnimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChineseAnimal {
    type Err = ParseError;

    /// 大小写不敏感；"Sheep" 视为羊的同义词
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("sheep") {
            return Ok(Self::Goat);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|animal| animal.name().eq_ignore_ascii_case(s))
            .ok_or(ParseError::UnknownChineseAnimal)
    }
}

// ============================================================================
// 三合组
// ============================================================================

/// 三合组（San He）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Trine {
    /// 申子辰 - 鼠、龙、猴
    Visionaries = 0,
    /// 巳酉丑 - 牛、蛇、鸡
    Strategists = 1,
    /// 寅午戌 - 虎、马、狗
    Adventurers = 2,
    /// 亥卯未 - 兔、羊、猪
    Artists = 3,
}

impl Trine {
    pub const ALL: [Trine; 4] = [
        Self::Visionaries,
        Self::Strategists,
        Self::Adventurers,
        Self::Artists,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Visionaries => "Visionaries",
            Self::Strategists => "Strategists",
            Self::Adventurers => "Adventurers",
            Self::Artists => "Artists",
        }
    }
}

// ============================================================================
// 用户星盘
// ============================================================================

/// 单方星盘：西洋星座 + 生肖
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    pub west: WesternSign,
    pub animal: ChineseAnimal,
}

impl Profile {
    pub const fn new(west: WesternSign, animal: ChineseAnimal) -> Self {
        Self { west, animal }
    }

    /// 边界层入口：解析原始字符串，任一无效即失败
    pub fn parse(west: &str, animal: &str) -> Result<Self, ParseError> {
        Ok(Self {
            west: west.parse()?,
            animal: animal.parse()?,
        })
    }
}

// ============================================================================
// 合盘等级
// ============================================================================

/// 合盘等级
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Tier {
    /// 灵魂伴侣
    Soulmate = 0,
    /// 双生火焰
    TwinFlame = 1,
    /// 极佳
    Excellent = 2,
    /// 很好
    VeryGood = 3,
    /// 好朋友
    GoodFriends = 4,
    /// 异性相吸
    OppositesAttract = 5,
    /// 困难
    Difficult = 6,
    /// 中性
    #[default]
    Neutral = 7,
}

impl Tier {
    pub const ALL: [Tier; 8] = [
        Self::Soulmate,
        Self::TwinFlame,
        Self::Excellent,
        Self::VeryGood,
        Self::GoodFriends,
        Self::OppositesAttract,
        Self::Difficult,
        Self::Neutral,
    ];

    /// 稳定的机器可读键，供展示层查表
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Soulmate => "soulmate",
            Self::TwinFlame => "twin_flame",
            Self::Excellent => "excellent",
            Self::VeryGood => "very_good",
            Self::GoodFriends => "good_friends",
            Self::OppositesAttract => "opposites_attract",
            Self::Difficult => "difficult",
            Self::Neutral => "neutral",
        }
    }
}

// ============================================================================
// 分数
// ============================================================================

/// 排序用参考分数，以百分之一为单位的定点数（300 = 3.0）
///
/// 所有权重都是 0.25 的整数倍，定点表示无精度损失且可 SCALE 编码。
#[derive(
    Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, PartialOrd, Ord, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Score(i32);

impl Score {
    pub const ZERO: Score = Score(0);

    pub const fn from_centi(centi: i32) -> Self {
        Score(centi)
    }

    pub const fn centi(self) -> i32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn saturating_add(self, other: Score) -> Score {
        Score(self.0.saturating_add(other.0))
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }
}

// ============================================================================
// 解析错误
// ============================================================================

/// 边界层解析错误
#[derive(Clone, Copy, Encode, Decode, TypeInfo, PartialEq, Eq, Debug)]
pub enum ParseError {
    /// 无法识别的西洋星座名称
    UnknownWesternSign,
    /// 无法识别的生肖名称
    UnknownChineseAnimal,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownWesternSign => f.write_str("unknown western zodiac sign"),
            Self::UnknownChineseAnimal => f.write_str("unknown chinese zodiac animal"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_partition() {
        for element in Element::ALL {
            let count = WesternSign::ALL.iter().filter(|s| s.element() == element).count();
            assert_eq!(count, 3);
        }
    }

    #[test]
    fn test_trine_partition() {
        for trine in Trine::ALL {
            let count = ChineseAnimal::ALL.iter().filter(|a| a.trine() == trine).count();
            assert_eq!(count, 3);
        }
    }

    #[test]
    fn test_opposite_involution() {
        for sign in WesternSign::ALL {
            assert_ne!(sign.opposite(), sign);
            assert_eq!(sign.opposite().opposite(), sign);
        }
        assert_eq!(WesternSign::Aries.opposite(), WesternSign::Libra);
        assert_eq!(WesternSign::Virgo.opposite(), WesternSign::Pisces);
        assert_eq!(WesternSign::Leo.opposite(), WesternSign::Aquarius);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(WesternSign::from_index(11), Some(WesternSign::Pisces));
        assert_eq!(WesternSign::from_index(12), None);
        assert_eq!(ChineseAnimal::from_index(0), Some(ChineseAnimal::Rat));
        assert_eq!(ChineseAnimal::from_index(200), None);
        for animal in ChineseAnimal::ALL {
            assert_eq!(ChineseAnimal::from_index(animal.index()), Some(animal));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("aries".parse::<WesternSign>(), Ok(WesternSign::Aries));
        assert_eq!(" SAGITTARIUS ".parse::<WesternSign>(), Ok(WesternSign::Sagittarius));
        assert_eq!("Rooster".parse::<ChineseAnimal>(), Ok(ChineseAnimal::Rooster));
        assert_eq!("sheep".parse::<ChineseAnimal>(), Ok(ChineseAnimal::Goat));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!("ophiuchus".parse::<WesternSign>(), Err(ParseError::UnknownWesternSign));
        assert_eq!("".parse::<WesternSign>(), Err(ParseError::UnknownWesternSign));
        assert_eq!("cat".parse::<ChineseAnimal>(), Err(ParseError::UnknownChineseAnimal));
        assert_eq!(
            Profile::parse("Leo", "unicorn"),
            Err(ParseError::UnknownChineseAnimal)
        );
        assert_eq!(
            Profile::parse("leo", "pig"),
            Ok(Profile::new(WesternSign::Leo, ChineseAnimal::Pig))
        );
    }

    #[test]
    fn test_score_fixed_point() {
        let score = Score::from_centi(300).saturating_add(Score::from_centi(-350));
        assert_eq!(score.centi(), -50);
        assert_eq!(score.as_f64(), -0.5);
        assert!(!score.is_positive());
    }
}
