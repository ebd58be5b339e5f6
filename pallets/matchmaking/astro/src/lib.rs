//! # 婚恋模块 - 星座生肖合盘等级引擎
//!
//! 结合西洋星座与中国生肖，对两方星盘给出确定性的合盘等级、
//! 解释性徽章与排序用参考分数。
//!
//! ## 功能概述
//!
//! - **关系表**：三合、六合、六冲、六害、相刑、相破、最不合、活跃配对
//! - **元素关系**：同元素、相容元素、相对元素与黄道对宫
//! - **强制规则**：少量显式规则先于一般判定链生效
//! - **等级判定**：严格有序、首个命中即返回的判定链
//! - **全量网格**：以一方为基准的 144 格判定
//! - **展示摘要**：匹配百分比、排名键与文案
//!
//! ## 模块结构
//!
//! ```text
//! pallet-matchmaking-astro
//! ├── types.rs       # 星座、生肖、等级、分数与解析
//! ├── tables.rs      # 生肖关系表
//! ├── element.rs     # 西洋元素关系
//! ├── relations.rs   # 生肖关系标志与困难叠加
//! ├── overrides.rs   # 强制等级规则
//! ├── config.rs      # 引擎配置
//! ├── classifier.rs  # 等级判定链
//! ├── grid.rs        # 全量网格
//! ├── display.rs     # 展示摘要
//! └── traits.rs      # 运行时接入 Trait
//! ```
//!
//! ## 使用
//!
//! ```ignore
//! let config = EngineConfig::classic();
//! let classifier = TierClassifier::new(&config);
//! let result = classifier.classify(
//!     &Profile::new(WesternSign::Aries, ChineseAnimal::Tiger),
//!     &Profile::new(WesternSign::Leo, ChineseAnimal::Horse),
//! );
//! assert_eq!(result.tier, Tier::Soulmate);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

/// 日志目标
pub const LOG_TARGET: &str = "astro";

pub mod classifier;
pub mod config;
pub mod display;
pub mod element;
pub mod grid;
pub mod overrides;
pub mod relations;
pub mod tables;
pub mod traits;
pub mod types;

pub use classifier::{Badge, Classification, ClassificationFlags, Reason, TierClassifier};
pub use config::EngineConfig;
pub use display::{MatchDisplay, RankKey};
pub use grid::{generate_full_grid_for, GridEntry};
pub use overrides::{OverrideMatching, OverrideRegistry, OverrideRule};
pub use relations::{ChineseFlags, OverlayKind};
pub use tables::{RelationTable, RelationTables, CLASSIC_TABLES};
pub use traits::*;
pub use types::*;

#[cfg(test)]
mod tests;
