//! # 引擎配置
//!
//! 关系表、强制规则、同星座封顶等级与规则匹配方式。
//! 构造一次后只读，通过引用注入 [`TierClassifier`](crate::classifier::TierClassifier)。

use crate::overrides::{OverrideMatching, OverrideRegistry};
use crate::tables::{RelationTables, CLASSIC_TABLES};
use crate::types::Tier;
use frame_support::traits::Get;

/// 默认同星座封顶等级
pub const DEFAULT_SAME_WEST_CAP: Tier = Tier::Excellent;

/// 引擎配置
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EngineConfig {
    tables: RelationTables,
    overrides: OverrideRegistry,
    same_west_cap_tier: Tier,
    override_matching: OverrideMatching,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl EngineConfig {
    /// 经典表 + 经典强制规则 + 封顶 Excellent + 四向匹配
    ///
    /// 常量构造，不分配内存。
    pub const fn classic() -> Self {
        Self {
            tables: CLASSIC_TABLES,
            overrides: OverrideRegistry::classic(),
            same_west_cap_tier: DEFAULT_SAME_WEST_CAP,
            override_matching: OverrideMatching::Permissive,
        }
    }

    /// 封顶等级由运行时常量提供
    pub fn with_cap_from<Cap: Get<Tier>>(self) -> Self {
        self.with_same_west_cap(Cap::get())
    }

    pub fn with_tables(mut self, tables: RelationTables) -> Self {
        self.tables = tables;
        self
    }

    pub fn with_overrides(mut self, overrides: OverrideRegistry) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_same_west_cap(mut self, tier: Tier) -> Self {
        self.same_west_cap_tier = tier;
        self
    }

    pub fn with_override_matching(mut self, matching: OverrideMatching) -> Self {
        self.override_matching = matching;
        self
    }

    pub fn tables(&self) -> &RelationTables {
        &self.tables
    }

    pub fn overrides(&self) -> &OverrideRegistry {
        &self.overrides
    }

    pub fn same_west_cap_tier(&self) -> Tier {
        self.same_west_cap_tier
    }

    pub fn override_matching(&self) -> OverrideMatching {
        self.override_matching
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frame_support::parameter_types;

    parameter_types! {
        pub const StrictCap: Tier = Tier::Neutral;
    }

    #[test]
    fn test_classic_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.same_west_cap_tier(), Tier::Excellent);
        assert_eq!(config.override_matching(), OverrideMatching::Permissive);
        assert_eq!(config.overrides().rules().len(), 8);
        assert_eq!(config.tables(), &CLASSIC_TABLES);
    }

    #[test]
    fn test_cap_from_get() {
        let config = EngineConfig::classic().with_cap_from::<StrictCap>();
        assert_eq!(config.same_west_cap_tier(), Tier::Neutral);
    }
}
