//! # 标记块扫描
//!
//! 在 QE 输入/输出文本中按标记定位文本块。
//!
//! ## 块边界规则
//! ```text
//! 卡片 (card):      MARKER ...  直到第一个空行（或文本末尾）
//! 名单 (namelist):  &MARKER ... 直到第一个 '/'（含）
//! ```
//!
//! 空行指 `\n` + 任意非换行空白 + `\n`。文本末尾也匹配最后一个换行符之前的位置。
//! 块本身不包含终止符。
//!
//! `regex` 不支持前瞻，因此终止符会被匹配并消耗，块内容取自捕获组。
//! 终止符只含空白，消耗它不会吞掉下一个标记。
//!
//! ## 依赖关系
//! - 被 `parsers/relax_out.rs`, `parsers/pw_input.rs` 使用
//! - 使用 `regex` crate

use crate::error::Result;
use regex::Regex;

const BLANK_LINE: &str = r"\n[^\S\n]*\n";
const BLANK_LINE_OR_END: &str = r"(?:\n[^\S\n]*\n|\n?\z)";

/// 按标记定位文本块的扫描器
#[derive(Debug, Clone)]
pub struct BlockScanner {
    regex: Regex,
}

impl BlockScanner {
    /// 卡片块：到第一个空行或文本末尾
    pub fn card(marker: &str) -> Result<Self> {
        Self::build(marker, BLANK_LINE_OR_END)
    }

    /// 卡片块：只以空行结束，文本末尾不算
    pub fn card_until_blank(marker: &str) -> Result<Self> {
        Self::build(marker, BLANK_LINE)
    }

    /// 名单块：到第一个 '/'（含）
    pub fn namelist(marker: &str) -> Result<Self> {
        let regex = Regex::new(&format!(r"(?s)({}.*?/)", regex::escape(marker)))?;
        Ok(Self { regex })
    }

    fn build(marker: &str, terminator: &str) -> Result<Self> {
        let regex = Regex::new(&format!(
            r"(?s)({}.*?){}",
            regex::escape(marker),
            terminator
        ))?;
        Ok(Self { regex })
    }

    /// 所有不重叠的块，按出现顺序
    pub fn all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    /// 第一个块
    pub fn first<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}
