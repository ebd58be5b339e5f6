//! # 星座生肖合盘 - Trait 定义
//!
//! 供运行时 pallet 通过 `Config` 关联类型接入合盘引擎。

use crate::classifier::{Classification, TierClassifier};
use crate::config::EngineConfig;
use crate::display::MatchDisplay;
use crate::grid::{generate_full_grid_for, GridEntry};
use crate::types::{Profile, Tier};
use frame_support::traits::Get;
use core::marker::PhantomData;
use sp_std::vec::Vec;

/// 合盘判定提供者 Trait
pub trait AstroClassifier {
    /// 判定两方星盘
    fn classify(a: &Profile, b: &Profile) -> Classification;

    /// 判定并生成展示摘要
    fn display(a: &Profile, b: &Profile) -> MatchDisplay {
        MatchDisplay::from_classification(&Self::classify(a, b), a, b)
    }

    /// 全量网格
    fn full_grid(base: &Profile) -> Vec<GridEntry>;
}

/// 经典规则集实现，同星座封顶等级由 `Cap` 提供
///
/// ```ignore
/// parameter_types! {
///     pub const SameWestCap: Tier = Tier::Excellent;
/// }
/// type Astro = ClassicAstroClassifier<SameWestCap>;
/// ```
pub struct ClassicAstroClassifier<Cap>(PhantomData<Cap>);

impl<Cap: Get<Tier>> ClassicAstroClassifier<Cap> {
    pub fn config() -> EngineConfig {
        EngineConfig::classic().with_cap_from::<Cap>()
    }
}

impl<Cap: Get<Tier>> AstroClassifier for ClassicAstroClassifier<Cap> {
    fn classify(a: &Profile, b: &Profile) -> Classification {
        let config = Self::config();
        TierClassifier::new(&config).classify(a, b)
    }

    fn full_grid(base: &Profile) -> Vec<GridEntry> {
        let config = Self::config();
        generate_full_grid_for(&TierClassifier::new(&config), base)
    }
}
