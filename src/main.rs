//! # relax2scf - 由弛豫结果生成 SCF 输入
//!
//! 从 Quantum ESPRESSO relax / vc-relax 输出中取出最终结构，
//! 合并进原始输入，生成在弛豫结构上做单点 SCF 的 pw.x 输入文件。
//!
//! ## 用法
//! ```text
//! relax2scf <relax_output.out> <system_name> [--input-dir DIR] [--output-dir DIR]
//! ```
//!
//! ## 退出码
//! - `0`: 成功
//! - `1`: 参数错误，或日志缺失 / 无 ATOMIC_POSITIONS
//! - `2`: 其他故障（原始输入缺失、缺少必需段、读写失败）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli.rs      (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (按块解析)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::error::ErrorKind;
use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            utils::output::print_usage(cli::USAGE, cli::EXAMPLE);
            if let Some(reason) = e.kind().as_str() {
                utils::output::print_info(reason);
            }
            std::process::exit(1);
        }
    };

    match commands::run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            utils::output::print_error(&format!("{}", e));
            if let Some(source) = std::error::Error::source(&e) {
                utils::output::print_error(&format!("Caused by: {}", source));
            }
            std::process::exit(2);
        }
    }
}
