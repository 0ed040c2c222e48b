//! # 文件命名约定
//!
//! 由体系名推导原始输入与输出文件的路径：
//! - 原始输入: `<input_dir>/<system>_relax.in`（默认 `../input_files`）
//! - 输出文件: `<output_dir>/<system>_scf_on_relaxed.in`（默认当前目录）
//!
//! ## 依赖关系
//! - 被 `main.rs`, `commands/extract.rs` 使用
//! - 无外部模块依赖

use std::path::PathBuf;

pub const DEFAULT_INPUT_DIR: &str = "../input_files";

/// 输入/输出目录布局
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLayout {
    /// 原始 relax 输入所在目录
    pub input_dir: PathBuf,

    /// 输出目录；`None` 表示当前工作目录
    pub output_dir: Option<PathBuf>,
}

impl Default for FileLayout {
    fn default() -> Self {
        FileLayout {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: None,
        }
    }
}

impl FileLayout {
    /// 原始 relax 输入路径
    pub fn relax_input(&self, system_name: &str) -> PathBuf {
        self.input_dir.join(format!("{}_relax.in", system_name))
    }

    /// SCF 输出路径
    pub fn scf_output(&self, system_name: &str) -> PathBuf {
        let filename = format!("{}_scf_on_relaxed.in", system_name);
        match &self.output_dir {
            Some(dir) => dir.join(filename),
            None => PathBuf::from(filename),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_layout() {
        let layout = FileLayout::default();
        assert_eq!(
            layout.relax_input("system1"),
            Path::new("../input_files/system1_relax.in")
        );
        assert_eq!(
            layout.scf_output("system1"),
            Path::new("system1_scf_on_relaxed.in")
        );
    }

    #[test]
    fn test_custom_dirs() {
        let layout = FileLayout {
            input_dir: PathBuf::from("/data/inputs"),
            output_dir: Some(PathBuf::from("scf")),
        };
        assert_eq!(layout.relax_input("MoS2"), Path::new("/data/inputs/MoS2_relax.in"));
        assert_eq!(layout.scf_output("MoS2"), Path::new("scf/MoS2_scf_on_relaxed.in"));
    }
}
