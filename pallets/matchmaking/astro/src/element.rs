//! # 西洋星座元素关系
//!
//! 同元素、相容元素（火风、土水）、相对元素（火水、风土）以及黄道对宫判定。
//! 对宫是独立的表，不由元素推导：对宫星座的元素总是相容的。

use crate::types::{Element, WesternSign};
use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

/// 两个元素之间的关系
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum ElementRelation {
    /// 同元素
    Same,
    /// 相容：火风、土水
    Compatible,
    /// 半相容：火土、风水
    Semi,
    /// 相对：火水、风土
    Opposing,
}

/// 两个星座在计分链中的关系（互斥，对宫优先）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum WestRelation {
    /// 黄道对宫
    Opposite,
    SameElement,
    CompatibleElement,
    OppositeElement,
    /// 半相容元素，不加分也不扣分
    Mixed,
}

/// 元素关系
pub fn element_relation(a: Element, b: Element) -> ElementRelation {
    use Element::*;
    if a == b {
        return ElementRelation::Same;
    }
    match (a, b) {
        (Fire, Air) | (Air, Fire) | (Earth, Water) | (Water, Earth) => ElementRelation::Compatible,
        (Fire, Earth) | (Earth, Fire) | (Air, Water) | (Water, Air) => ElementRelation::Semi,
        _ => ElementRelation::Opposing,
    }
}

pub fn same_element(a: WesternSign, b: WesternSign) -> bool {
    a.element() == b.element()
}

/// 火风、土水
pub fn compatible_element(a: WesternSign, b: WesternSign) -> bool {
    element_relation(a.element(), b.element()) == ElementRelation::Compatible
}

/// 火水、风土
pub fn opposite_element(a: WesternSign, b: WesternSign) -> bool {
    element_relation(a.element(), b.element()) == ElementRelation::Opposing
}

/// 黄道对宫
pub fn is_west_opposite(a: WesternSign, b: WesternSign) -> bool {
    a.opposite() == b
}

/// 星座计分关系：对宫 → 同元素 → 相容 → 相对 → 其他
pub fn west_relation(a: WesternSign, b: WesternSign) -> WestRelation {
    if is_west_opposite(a, b) {
        return WestRelation::Opposite;
    }
    match element_relation(a.element(), b.element()) {
        ElementRelation::Same => WestRelation::SameElement,
        ElementRelation::Compatible => WestRelation::CompatibleElement,
        ElementRelation::Opposing => WestRelation::OppositeElement,
        ElementRelation::Semi => WestRelation::Mixed,
    }
}

/// 西洋方面是否"相容"：同元素或相容元素，且不是对宫
pub fn is_west_compatible(a: WesternSign, b: WesternSign) -> bool {
    !is_west_opposite(a, b) && (same_element(a, b) || compatible_element(a, b))
}
