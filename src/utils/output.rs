//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! 预期内的失败（日志缺失、无 ATOMIC_POSITIONS）用 `print_failure` 写到 stdout，
//! 未处理的故障用 `print_error` 写到 stderr。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `commands/extract.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印故障消息 (stderr)
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印预期内的失败消息 (stdout)
pub fn print_failure(msg: &str) {
    println!("{} {}", "Error:".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印用法说明
pub fn print_usage(usage: &str, example: &str) {
    println!("{} {}", "Usage:".bold(), usage);
    println!("{} {}", "Example:".dimmed(), example);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}
