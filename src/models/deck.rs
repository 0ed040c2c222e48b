//! # pw.x 输入数据模型
//!
//! - `InputTemplate`: 从原始 relax 输入中取出的各段文本
//! - `ScfDeck`: 合并后的 SCF 输入，构造后不再修改
//!
//! ## 输出顺序
//! ```text
//! &CONTROL (已改写)
//! &SYSTEM
//! &ELECTRONS
//! ATOMIC_SPECIES
//! ATOMIC_POSITIONS (弛豫后)
//! CELL_PARAMETERS  (弛豫后，可选)
//! K_POINTS
//! ```
//! 段与段之间以一个空行分隔。
//!
//! ## 依赖关系
//! - 被 `parsers/pw_input.rs`, `commands/extract.rs` 使用
//! - 使用 `models/geometry.rs`

use super::RelaxedGeometry;

/// 原始 relax 输入中沿用的各段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputTemplate {
    pub control: String,
    pub system: String,
    pub electrons: String,
    pub species: String,
    pub kpoints: String,
}

/// 合并后的 SCF 输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScfDeck {
    sections: Vec<(&'static str, String)>,
}

impl ScfDeck {
    /// 由模板与弛豫结构组装
    ///
    /// `control` 应是已经改写过的 CONTROL 名单。
    pub fn assemble(control: String, template: &InputTemplate, geometry: &RelaxedGeometry) -> Self {
        let mut sections = vec![
            ("&CONTROL", control),
            ("&SYSTEM", template.system.clone()),
            ("&ELECTRONS", template.electrons.clone()),
            ("ATOMIC_SPECIES", template.species.clone()),
            ("ATOMIC_POSITIONS", geometry.positions.clone()),
        ];
        if let Some(cell) = &geometry.cell {
            sections.push(("CELL_PARAMETERS", cell.clone()));
        }
        sections.push(("K_POINTS", template.kpoints.clone()));

        ScfDeck { sections }
    }

    /// 按输出顺序的 (段名, 文本)
    pub fn sections(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.sections.iter().map(|(name, body)| (*name, body.as_str()))
    }

    /// 生成输入文件文本
    pub fn render(&self) -> String {
        let mut text = self
            .sections
            .iter()
            .map(|(_, body)| body.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");
        text.push('\n');
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> InputTemplate {
        InputTemplate {
            control: "&CONTROL\n  calculation='relax'\n/".to_string(),
            system: "&SYSTEM\n  nat=2\n/".to_string(),
            electrons: "&ELECTRONS\n/".to_string(),
            species: "ATOMIC_SPECIES\nSi 28.086 Si.upf".to_string(),
            kpoints: "K_POINTS gamma".to_string(),
        }
    }

    fn geometry(cell: Option<&str>) -> RelaxedGeometry {
        RelaxedGeometry {
            positions: "ATOMIC_POSITIONS crystal\nSi 0 0 0".to_string(),
            cell: cell.map(str::to_string),
            ionic_steps: 3,
            cell_steps: cell.map_or(0, |_| 3),
        }
    }

    #[test]
    fn test_render_with_cell() {
        let control = "&CONTROL\n  calculation='scf'\n/".to_string();
        let deck = ScfDeck::assemble(control, &template(), &geometry(Some("CELL_PARAMETERS alat\n1 0 0")));

        assert_eq!(
            deck.render(),
            "&CONTROL\n  calculation='scf'\n/\n\n\
             &SYSTEM\n  nat=2\n/\n\n\
             &ELECTRONS\n/\n\n\
             ATOMIC_SPECIES\nSi 28.086 Si.upf\n\n\
             ATOMIC_POSITIONS crystal\nSi 0 0 0\n\n\
             CELL_PARAMETERS alat\n1 0 0\n\n\
             K_POINTS gamma\n"
        );
    }

    #[test]
    fn test_render_without_cell() {
        let deck = ScfDeck::assemble("&CONTROL\n/".to_string(), &template(), &geometry(None));
        let names: Vec<_> = deck.sections().map(|(name, _)| name).collect();

        assert_eq!(
            names,
            vec![
                "&CONTROL",
                "&SYSTEM",
                "&ELECTRONS",
                "ATOMIC_SPECIES",
                "ATOMIC_POSITIONS",
                "K_POINTS"
            ]
        );
        assert!(!deck.render().contains("CELL_PARAMETERS"));
    }
}
