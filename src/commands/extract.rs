//! # extract 命令实现
//!
//! 从弛豫输出提取最终结构，合并进原始输入，生成 SCF 输入文件。
//!
//! ## 流程
//! 1. 检查弛豫输出是否存在（缺失则报告并返回 `Ok(false)`）
//! 2. 取最后一个 ATOMIC_POSITIONS（没有则报告并返回 `Ok(false)`）与 CELL_PARAMETERS
//! 3. 读取 `<input_dir>/<system>_relax.in`，截取 CONTROL/SYSTEM/ELECTRONS/
//!    ATOMIC_SPECIES/K_POINTS
//! 4. 改写 CONTROL，组装并写出 `<system>_scf_on_relaxed.in`
//!
//! 第 3、4 步的任何失败都以 `Err` 传播给 `main`。
//!
//! ## 依赖关系
//! - 使用 `cli.rs` 定义的参数
//! - 使用 `parsers/`, `models/`
//! - 使用 `utils/output.rs`

use crate::cli::Cli;
use crate::error::{Relax2ScfError, Result};
use crate::models::{FileLayout, ScfDeck};
use crate::parsers::{pw_input, relax_out};
use crate::utils::output;

use std::fs;
use std::path::Path;
use tabled::{Table, Tabled};

/// 输出文件各段摘要
#[derive(Debug, Clone, Tabled)]
struct SectionRow {
    #[tabled(rename = "Section")]
    section: String,
    #[tabled(rename = "Lines")]
    lines: usize,
}

/// 执行 extract 命令
pub fn execute(args: Cli) -> Result<bool> {
    output::print_header("Building SCF input from relaxed geometry");
    extract_relaxed_geometry(&args.relax_output, &args.system_name, &args.layout())
}

/// 提取弛豫结构并写出 SCF 输入
///
/// 预期内的失败返回 `Ok(false)`，成功返回 `Ok(true)`，其余失败返回 `Err`。
pub fn extract_relaxed_geometry(
    relax_output: &Path,
    system_name: &str,
    layout: &FileLayout,
) -> Result<bool> {
    if !relax_output.exists() {
        output::print_failure(&format!("{} not found", relax_output.display()));
        return Ok(false);
    }

    let content = fs::read_to_string(relax_output).map_err(|e| Relax2ScfError::FileReadError {
        path: relax_output.display().to_string(),
        source: e,
    })?;

    let Some(geometry) = relax_out::parse_relax_output(&content)? else {
        output::print_failure(&format!(
            "No {} found in output",
            relax_out::POSITIONS_MARKER
        ));
        return Ok(false);
    };

    output::print_info(&format!(
        "Found {} ionic step(s) in '{}'",
        geometry.ionic_steps,
        relax_output.display()
    ));
    if geometry.has_cell() {
        output::print_info(&format!(
            "Found {} cell step(s); using the last {}",
            geometry.cell_steps,
            relax_out::CELL_MARKER
        ));
    }

    let template = pw_input::parse_pw_input_file(&layout.relax_input(system_name))?;

    let stripped = pw_input::count_stripped_lines(&template.control);
    if stripped > 0 {
        output::print_warning(&format!(
            "Stripping {} from {} &CONTROL line(s)",
            pw_input::DROPPED_CONTROL_KEYS.join("/"),
            stripped
        ));
    }
    if !template.control.contains("'relax'") {
        output::print_warning("&CONTROL has no 'relax' token; calculation left unchanged");
    }

    let control = pw_input::to_scf_control(&template.control);
    let deck = ScfDeck::assemble(control, &template, &geometry);

    let scf_path = layout.scf_output(system_name);
    fs::write(&scf_path, deck.render()).map_err(|e| Relax2ScfError::FileWriteError {
        path: scf_path.display().to_string(),
        source: e,
    })?;

    let rows: Vec<SectionRow> = deck
        .sections()
        .map(|(name, body)| SectionRow {
            section: name.to_string(),
            lines: body.lines().count(),
        })
        .collect();
    println!("{}", Table::new(&rows));

    output::print_success(&format!("Created: {}", scf_path.display()));
    output::print_info(&format!(
        "Use relaxed geometry from: {}",
        relax_output.display()
    ));

    Ok(true)
}
