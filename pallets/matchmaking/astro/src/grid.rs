//! # 全量合盘网格
//!
//! 以一方星盘为基准，对 12 星座 × 12 生肖的全部 144 个组合逐一判定。
//! 顺序为星座优先（黄道顺序），再按地支顺序遍历生肖。

use crate::classifier::{Classification, TierClassifier};
use crate::types::{ChineseAnimal, Profile, WesternSign};
use codec::{Decode, Encode};
use scale_info::TypeInfo;
use sp_std::vec::Vec;

/// 网格大小
pub const GRID_SIZE: usize = WesternSign::ALL.len() * ChineseAnimal::ALL.len();

/// 网格中的一格
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GridEntry {
    pub west: WesternSign,
    pub animal: ChineseAnimal,
    pub classification: Classification,
}

impl GridEntry {
    pub fn profile(&self) -> Profile {
        Profile::new(self.west, self.animal)
    }
}

/// 生成 `base` 对全部 144 种星盘的判定结果
pub fn generate_full_grid_for(classifier: &TierClassifier<'_>, base: &Profile) -> Vec<GridEntry> {
    let mut grid = Vec::with_capacity(GRID_SIZE);
    for west in WesternSign::ALL {
        for animal in ChineseAnimal::ALL {
            let other = Profile::new(west, animal);
            grid.push(GridEntry { west, animal, classification: classifier.classify(base, &other) });
        }
    }
    log::debug!(
        target: crate::LOG_TARGET,
        "generated {} grid entries for {}-{}",
        grid.len(),
        base.west,
        base.animal
    );
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::types::Tier;

    #[test]
    fn test_grid_order_and_size() {
        let config = EngineConfig::classic();
        let classifier = TierClassifier::new(&config);
        let grid = generate_full_grid_for(&classifier, &Profile::new(WesternSign::Leo, ChineseAnimal::Ox));

        assert_eq!(grid.len(), GRID_SIZE);
        assert_eq!(grid[0].profile(), Profile::new(WesternSign::Aries, ChineseAnimal::Rat));
        assert_eq!(grid[11].profile(), Profile::new(WesternSign::Aries, ChineseAnimal::Pig));
        assert_eq!(grid[12].profile(), Profile::new(WesternSign::Taurus, ChineseAnimal::Rat));
        assert_eq!(grid[143].profile(), Profile::new(WesternSign::Pisces, ChineseAnimal::Pig));
    }

    #[test]
    fn test_grid_matches_direct_classification() {
        let config = EngineConfig::classic();
        let classifier = TierClassifier::new(&config);
        let base = Profile::new(WesternSign::Virgo, ChineseAnimal::Snake);
        for entry in generate_full_grid_for(&classifier, &base) {
            assert_eq!(entry.classification, classifier.classify(&base, &entry.profile()));
            if entry.animal == base.animal {
                assert_eq!(entry.classification.tier, Tier::GoodFriends);
            }
        }
    }
}
