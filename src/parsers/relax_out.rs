//! # QE 弛豫输出解析器
//!
//! 从 pw.x relax / vc-relax 的输出日志中提取最后一组原子坐标与晶胞参数。
//!
//! 每个离子步都会打印一个 `ATOMIC_POSITIONS` 块（vc-relax 还有 `CELL_PARAMETERS`），
//! 最后一个即为弛豫后的结构。
//!
//! ## 依赖关系
//! - 被 `commands/extract.rs` 使用
//! - 使用 `parsers/blocks.rs`, `models/geometry.rs`

use super::blocks::BlockScanner;
use crate::error::Result;
use crate::models::RelaxedGeometry;

pub const POSITIONS_MARKER: &str = "ATOMIC_POSITIONS";
pub const CELL_MARKER: &str = "CELL_PARAMETERS";

/// 从日志文本中提取弛豫后的结构
///
/// 没有任何 `ATOMIC_POSITIONS` 块时返回 `Ok(None)`；`CELL_PARAMETERS` 可以缺失。
pub fn parse_relax_output(content: &str) -> Result<Option<RelaxedGeometry>> {
    let positions = BlockScanner::card(POSITIONS_MARKER)?.all(content);
    let cells = BlockScanner::card(CELL_MARKER)?.all(content);

    let Some(last_positions) = positions.last() else {
        return Ok(None);
    };

    Ok(Some(RelaxedGeometry {
        positions: last_positions.to_string(),
        cell: cells.last().map(|c| c.to_string()),
        ionic_steps: positions.len(),
        cell_steps: cells.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VC_RELAX_LOG: &str = r#"
     Program PWSCF v.7.2 starts on 19Oct2026

CELL_PARAMETERS (alat= 10.20000000)
   1.000000000   0.000000000   0.000000000
   0.000000000   1.000000000   0.000000000
   0.000000000   0.000000000   1.000000000

ATOMIC_POSITIONS (crystal)
Si            0.0000000000        0.0000000000        0.0000000000
Si            0.2510000000        0.2510000000        0.2510000000

     Writing output data file ./pwscf.save/

Begin final coordinates
     new unit-cell volume =    265.19563 a.u.^3 (    39.29736 Ang^3 )

CELL_PARAMETERS (alat= 10.20000000)
   0.998765000   0.000000000   0.000000000
   0.000000000   0.998765000   0.000000000
   0.000000000   0.000000000   0.998765000

ATOMIC_POSITIONS (crystal)
Si            0.0000000000        0.0000000000        0.0000000000
Si            0.2500000000        0.2500000000        0.2500000000
End final coordinates
"#;

    #[test]
    fn test_last_blocks_are_selected() {
        let geometry = parse_relax_output(VC_RELAX_LOG).unwrap().unwrap();

        assert_eq!(
            geometry.positions,
            "ATOMIC_POSITIONS (crystal)\n\
             Si            0.0000000000        0.0000000000        0.0000000000\n\
             Si            0.2500000000        0.2500000000        0.2500000000\n\
             End final coordinates"
        );
        assert!(geometry
            .cell
            .as_deref()
            .unwrap()
            .contains("0.998765000   0.000000000   0.000000000"));
        assert_eq!(geometry.ionic_steps, 2);
        assert_eq!(geometry.cell_steps, 2);
    }

    #[test]
    fn test_fixed_cell_relax_has_no_cell() {
        let log = "ATOMIC_POSITIONS (bohr)\nH 0.0 0.0 0.0\nH 1.4 0.0 0.0\n\n";
        let geometry = parse_relax_output(log).unwrap().unwrap();
        assert_eq!(geometry.positions, "ATOMIC_POSITIONS (bohr)\nH 0.0 0.0 0.0\nH 1.4 0.0 0.0");
        assert!(geometry.cell.is_none());
        assert_eq!(geometry.cell_steps, 0);
    }

    #[test]
    fn test_positions_kept_verbatim() {
        let block = "ATOMIC_POSITIONS {angstrom}\n  O \t 0.000  0.000 0.119   0 0 1\n  H   0.000  0.763 -0.477";
        let log = format!("ATOMIC_POSITIONS {{angstrom}}\nO 0 0 0\n\n{}\n\n!    total energy", block);
        let geometry = parse_relax_output(&log).unwrap().unwrap();
        assert_eq!(geometry.positions, block);
    }

    #[test]
    fn test_no_positions() {
        let log = "     Program PWSCF\n     convergence NOT achieved\n";
        assert!(parse_relax_output(log).unwrap().is_none());
    }
}
