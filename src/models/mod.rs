//! # 数据模型模块
//!
//! 定义弛豫结构、输入模板与合并后的 SCF 输入。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `commands/` 使用
//! - 子模块: geometry, deck, layout

pub mod deck;
pub mod geometry;
pub mod layout;

pub use deck::{InputTemplate, ScfDeck};
pub use geometry::RelaxedGeometry;
pub use layout::FileLayout;
