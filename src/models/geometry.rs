//! # 弛豫结构数据模型
//!
//! 保存从弛豫输出中取出的最终结构文本。
//!
//! ## 依赖关系
//! - 被 `parsers/relax_out.rs` 构造
//! - 被 `models/deck.rs`, `commands/extract.rs` 使用

/// 弛豫后的结构（原样文本）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelaxedGeometry {
    /// 最后一个 ATOMIC_POSITIONS 块
    pub positions: String,

    /// 最后一个 CELL_PARAMETERS 块（vc-relax 才有）
    pub cell: Option<String>,

    /// 日志中 ATOMIC_POSITIONS 块的个数
    pub ionic_steps: usize,

    /// 日志中 CELL_PARAMETERS 块的个数
    pub cell_steps: usize,
}

impl RelaxedGeometry {
    /// 是否包含晶胞参数
    pub fn has_cell(&self) -> bool {
        self.cell.is_some()
    }
}
