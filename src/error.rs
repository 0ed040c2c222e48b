//! # 统一错误处理模块
//!
//! 定义 relax2scf 的错误类型，使用 `thiserror` 派生。
//!
//! 这里的错误都属于"故障"：它们经 `?` 一路传播到 `main`，以退出码 2 结束。
//! 日志文件缺失、找不到 ATOMIC_POSITIONS 这类预期内的失败不走这里，
//! 而是由 `commands::extract` 直接报告并返回 `Ok(false)`。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// relax2scf 统一错误类型
#[derive(Error, Debug)]
pub enum Relax2ScfError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Missing {section} section in {path}")]
    MissingSection { section: String, path: String },

    #[error("Invalid block pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, Relax2ScfError>;
