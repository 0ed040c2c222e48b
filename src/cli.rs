//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/extract.rs`

use crate::models::layout::DEFAULT_INPUT_DIR;
use crate::models::FileLayout;
use clap::Parser;
use std::path::PathBuf;

pub const USAGE: &str = "relax2scf <relax_output.out> <system_name>";
pub const EXAMPLE: &str = "relax2scf system1_relax.out system1";

/// relax2scf - 由弛豫结果生成 SCF 输入
#[derive(Parser, Debug)]
#[command(name = "relax2scf")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Build a pw.x SCF input from the final geometry of a relaxation run",
    long_about = None
)]
pub struct Cli {
    /// Output log of the pw.x relax / vc-relax run
    pub relax_output: PathBuf,

    /// System name; reads <input-dir>/<name>_relax.in and writes <name>_scf_on_relaxed.in
    pub system_name: String,

    /// Directory holding the original <name>_relax.in
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Directory for the generated SCF input (default: current directory)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    /// 目录布局
    pub fn layout(&self) -> FileLayout {
        FileLayout {
            input_dir: self.input_dir.clone(),
            output_dir: self.output_dir.clone(),
        }
    }
}
