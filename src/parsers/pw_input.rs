//! # pw.x 输入文件解析器
//!
//! 从原始 relax 输入中取出 SCF 计算需要沿用的部分。
//!
//! ## pw.x 输入格式说明
//! ```text
//! &CONTROL
//!   calculation = 'relax'
//! /
//! &SYSTEM
//!   ibrav = 2, nat = 2, ntyp = 1
//! /
//! &ELECTRONS
//! /
//! ATOMIC_SPECIES
//! Si 28.086 Si.pbe-n-rrkjus_psl.1.0.0.UPF
//!
//! K_POINTS automatic
//! 6 6 6 0 0 0
//! ```
//!
//! 这里不做名单语法解析，只按标记截取文本。
//!
//! ## 依赖关系
//! - 被 `commands/extract.rs` 使用
//! - 使用 `parsers/blocks.rs`, `models/deck.rs`

use super::blocks::BlockScanner;
use crate::error::{Relax2ScfError, Result};
use crate::models::InputTemplate;
use std::fs;
use std::path::Path;

/// SCF 输入中不允许保留的 CONTROL 键
pub const DROPPED_CONTROL_KEYS: [&str; 2] = ["smearing", "degauss"];

/// 读取并解析原始 relax 输入文件
pub fn parse_pw_input_file(path: &Path) -> Result<InputTemplate> {
    if !path.exists() {
        return Err(Relax2ScfError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| Relax2ScfError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_pw_input_content(&content, &path.display().to_string())
}

/// 从字符串内容解析，`origin` 仅用于错误信息
pub fn parse_pw_input_content(content: &str, origin: &str) -> Result<InputTemplate> {
    let require = |scanner: BlockScanner, section: &str| -> Result<String> {
        scanner
            .first(content)
            .map(str::to_string)
            .ok_or_else(|| Relax2ScfError::MissingSection {
                section: section.to_string(),
                path: origin.to_string(),
            })
    };

    Ok(InputTemplate {
        control: require(BlockScanner::namelist("&CONTROL")?, "&CONTROL")?,
        system: require(BlockScanner::namelist("&SYSTEM")?, "&SYSTEM")?,
        electrons: require(BlockScanner::namelist("&ELECTRONS")?, "&ELECTRONS")?,
        species: require(
            BlockScanner::card_until_blank("ATOMIC_SPECIES")?,
            "ATOMIC_SPECIES",
        )?,
        kpoints: require(BlockScanner::card("K_POINTS")?, "K_POINTS")?,
    })
}

/// 将 relax 的 CONTROL 名单改写为 SCF
///
/// 把 `'relax'` 换成 `'scf'`。行内出现 `smearing` / `degauss` 时，
/// 从键前的空白起截到行尾；截后只剩空白的行整行删除。
/// 被截掉的部分若带有结尾的 `/`，保留一个单独的 `/`。
pub fn to_scf_control(control: &str) -> String {
    let switched = control.replace("'relax'", "'scf'");

    let mut result = String::with_capacity(switched.len());
    for line in switched.split_inclusive('\n') {
        let Some(cut) = first_dropped_key(line) else {
            result.push_str(line);
            continue;
        };

        let kept = line[..cut].trim_end();
        let terminated = line.ends_with('\n');
        let closes = !terminated && line.trim_end().ends_with('/');

        if !kept.trim_start().is_empty() {
            result.push_str(kept);
            if terminated || closes {
                result.push('\n');
            }
        }
        if closes {
            result.push('/');
        }
    }
    result
}

/// 统计 CONTROL 中含 `smearing` / `degauss` 的行数
pub fn count_stripped_lines(control: &str) -> usize {
    control
        .lines()
        .filter(|l| first_dropped_key(l).is_some())
        .count()
}

/// 行内第一个待删键的位置
fn first_dropped_key(line: &str) -> Option<usize> {
    DROPPED_CONTROL_KEYS
        .iter()
        .filter_map(|key| line.find(key))
        .min()
}
