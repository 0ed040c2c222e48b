//! # 命令执行模块
//!
//! 实现命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli.rs`, `parsers/`, `models/`, `utils/`
//! - 子模块: extract

pub mod extract;

use crate::cli::Cli;
use crate::error::Result;

/// 执行命令
///
/// `Ok(false)` 表示已报告的失败。
pub fn run(cli: Cli) -> Result<bool> {
    extract::execute(cli)
}
