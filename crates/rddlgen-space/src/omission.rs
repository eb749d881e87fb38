//! Removal of specific directed relations by exact match.

use crate::grid::Grid;
use crate::topology::Neighbor;
use rddlgen_core::{GenError, Result};
use std::collections::HashSet;
use tracing::warn;

/// A parsed omission request, `x1,y3->x1,y2`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Omission {
    /// Relation to remove.
    pub relation: Neighbor,
    /// Normalized `x1,y3->x1,y2` form built from the grid's own names,
    /// used for annotations and logs.
    pub literal: String,
}

/// Parse an omission literal against `grid`.
///
/// The literal must contain exactly one `->`; each side is a position
/// literal accepted by [`Grid::parse_position`].
///
/// # Errors
///
/// - [`GenError::UnknownRelationOmission`] if the `from->to` shape is missing.
/// - [`GenError::Format`] if either side is not a valid position.
pub fn parse_omission(grid: &Grid, literal: &str) -> Result<Omission> {
    let (from, to) = match literal.split_once("->") {
        Some((from, to)) if !to.contains("->") => (from, to),
        _ => {
            return Err(GenError::UnknownRelationOmission {
                input: literal.to_string(),
            })
        }
    };
    let relation = Neighbor {
        from: grid.parse_position(from)?,
        to: grid.parse_position(to)?,
    };
    let (x1, y1) = grid.names(relation.from);
    let (x2, y2) = grid.names(relation.to);
    Ok(Omission {
        relation,
        literal: format!("{x1},{y1}->{x2},{y2}"),
    })
}

/// Result of [`apply_omissions`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OmissionOutcome {
    /// Relations that survived, in their original order.
    pub kept: Vec<Neighbor>,
    /// Number of relations actually removed.
    pub removed: usize,
    /// Literals of omissions that matched no relation.
    pub unmatched: Vec<String>,
}

/// Remove every relation named by `omissions`.
///
/// Omissions that match nothing are ignored, so applying the same list
/// twice yields the same relation set as applying it once. Each ignored
/// omission is reported in [`OmissionOutcome::unmatched`] and logged at
/// `warn` level.
pub fn apply_omissions(relations: Vec<Neighbor>, omissions: &[Omission]) -> OmissionOutcome {
    let omitted: HashSet<Neighbor> = omissions.iter().map(|o| o.relation).collect();
    let present: HashSet<Neighbor> = relations.iter().copied().collect();

    let unmatched: Vec<String> = omissions
        .iter()
        .filter(|o| !present.contains(&o.relation))
        .map(|o| o.literal.clone())
        .collect();
    for literal in &unmatched {
        warn!(omission = %literal, "omitted neighbour is not in the generated relation set");
    }

    let before = relations.len();
    let kept: Vec<Neighbor> = relations
        .into_iter()
        .filter(|r| !omitted.contains(r))
        .collect();
    OmissionOutcome {
        removed: before - kept.len(),
        kept,
        unmatched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{neighbours, Connectivity};
    use rddlgen_core::Cell;

    #[test]
    fn parse_directed_pair() {
        let g = Grid::plain(3, 3).unwrap();
        let o = parse_omission(&g, "x1,y3->x1,y2").unwrap();
        assert_eq!(o.relation.from, Cell::new(0, 2));
        assert_eq!(o.relation.to, Cell::new(0, 1));
        assert_eq!(o.literal, "x1,y3->x1,y2");

        let o = parse_omission(&g, "(x2,y2)->(x3,y3)").unwrap();
        assert_eq!(o.relation.to, Cell::new(2, 2));
        assert_eq!(o.literal, "x2,y2->x3,y3");
    }

    #[test]
    fn literal_is_rebuilt_from_grid_names() {
        let g = Grid::plain(3, 3).unwrap();
        let o = parse_omission(&g, " x1,\ny1 ->x2, y1").unwrap();
        assert_eq!(o.relation.from, Cell::new(0, 0));
        assert_eq!(o.literal, "x1,y1->x2,y1");
        assert!(!o.literal.contains('\n'));
    }

    #[test]
    fn parse_rejects_missing_arrow() {
        let g = Grid::plain(3, 3).unwrap();
        assert!(matches!(
            parse_omission(&g, "x1,y3 x1,y2"),
            Err(GenError::UnknownRelationOmission { .. })
        ));
        assert!(matches!(
            parse_omission(&g, "x1,y1->x1,y2->x1,y3"),
            Err(GenError::UnknownRelationOmission { .. })
        ));
        assert!(matches!(
            parse_omission(&g, "x1,y9->x1,y2"),
            Err(GenError::Format { .. })
        ));
    }

    #[test]
    fn removes_exact_directed_match_only() {
        let g = Grid::plain(3, 3).unwrap();
        let all = neighbours(3, 3, Connectivity::Four);
        let o = parse_omission(&g, "x1,y3->x1,y2").unwrap();
        let out = apply_omissions(all.clone(), &[o]);
        assert_eq!(out.removed, 1);
        assert_eq!(out.kept.len(), all.len() - 1);
        // Reverse direction survives.
        assert!(out.kept.contains(&Neighbor {
            from: Cell::new(0, 1),
            to: Cell::new(0, 2)
        }));
        assert!(out.unmatched.is_empty());
    }

    #[test]
    fn absent_relation_is_ignored_and_reported() {
        let g = Grid::plain(3, 3).unwrap();
        let all = neighbours(3, 3, Connectivity::Four);
        // Diagonal: not present under 4-connectivity.
        let o = parse_omission(&g, "x1,y1->x2,y2").unwrap();
        let out = apply_omissions(all.clone(), &[o]);
        assert_eq!(out.kept, all);
        assert_eq!(out.removed, 0);
        assert_eq!(out.unmatched, vec!["x1,y1->x2,y2".to_string()]);
    }

    #[test]
    fn idempotent() {
        let g = Grid::plain(4, 4).unwrap();
        let oms: Vec<Omission> = ["x1,y1->x2,y1", "x2,y2->x3,y3", "x4,y4->x4,y3"]
            .iter()
            .map(|l| parse_omission(&g, l).unwrap())
            .collect();
        let once = apply_omissions(neighbours(4, 4, Connectivity::Eight), &oms);
        let twice = apply_omissions(once.kept.clone(), &oms);
        assert_eq!(once.kept, twice.kept);
        assert_eq!(twice.removed, 0);
    }
}
