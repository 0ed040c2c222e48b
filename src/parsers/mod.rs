//! # 解析器模块
//!
//! 提供 QE 弛豫输出与 pw.x 输入文件的按块解析。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: blocks, relax_out, pw_input

pub mod blocks;
pub mod pw_input;
pub mod relax_out;
