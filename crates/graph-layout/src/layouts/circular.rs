use crate::engine::{LayoutEngine, PositionMap};
use crate::geometry::{circos_radius, theta_at};
use crate::group::group_and_sort;
use crate::table::NodeTable;
use crate::{LayoutError, Point};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for the circular ("circos") layout
///
/// Nodes sit evenly on a ring in group-then-sort order, the first one at
/// angle 0, counter-clockwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircularLayout {
    pub group_by: Option<String>,
    pub sort_by: Option<String>,

    /// Ring radius; computed from `node_radius` when unset
    pub radius: Option<f64>,

    /// Radius of each node glyph, used to size the ring
    pub node_radius: f64,
}

impl Default for CircularLayout {
    fn default() -> Self {
        Self {
            group_by: None,
            sort_by: None,
            radius: None,
            node_radius: 1.0,
        }
    }
}

impl CircularLayout {
    pub fn new(group_by: Option<&str>, sort_by: Option<&str>) -> Self {
        Self {
            group_by: group_by.map(str::to_string),
            sort_by: sort_by.map(str::to_string),
            ..Default::default()
        }
    }

    /// The ring radius used for `n` nodes
    pub fn ring_radius(&self, n: usize) -> Result<f64, LayoutError> {
        let auto = circos_radius(n, self.node_radius)?;
        Ok(self.radius.unwrap_or(auto))
    }
}

impl LayoutEngine for CircularLayout {
    fn layout(&self, table: &NodeTable) -> Result<PositionMap, LayoutError> {
        let ordered = group_and_sort(table, self.group_by.as_deref(), self.sort_by.as_deref())?;
        let n = ordered.len();
        let radius = self.ring_radius(n)?;
        debug!("Circular layout of {n} nodes on radius {radius}");

        Ok(ordered
            .iter()
            .enumerate()
            .map(|(i, row)| (row.id.clone(), Point::from_polar(radius, theta_at(i, n))))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::fixtures::{assert_complete, grouped};
    use crate::table::{NodeId, NodeRecord};
    use std::f64::consts::PI;
    use test_log::test;

    #[test]
    fn four_nodes_sit_on_the_quarter_turns() {
        let table = NodeTable::new(["A", "B", "C", "D"].map(NodeRecord::new).to_vec()).unwrap();
        let pos = CircularLayout::default().layout(&table).unwrap();
        let radius = circos_radius(4, 1.0).unwrap();

        for (id, theta) in [("A", 0.0), ("B", PI / 2.0), ("C", PI), ("D", 1.5 * PI)] {
            let (r, t) = pos[&NodeId::from(id)].to_polar();
            assert!((r - radius).abs() < 1e-9, "{id}");
            assert!((t - theta).abs() < 1e-9, "{id}: {t} != {theta}");
        }

        let (sx, sy) = pos.values().fold((0.0, 0.0), |(x, y), p| (x + p.x, y + p.y));
        assert!(sx.abs() < 1e-9 && sy.abs() < 1e-9);
    }

    #[test]
    fn ring_is_centered_for_every_grouping() {
        let table = grouped(71);
        for group_by in [None, Some("group")] {
            for sort_by in [None, Some("value")] {
                let pos = CircularLayout::new(group_by, sort_by).layout(&table).unwrap();
                assert_complete(&table, &pos);
                let (sx, sy) = pos.values().fold((0.0, 0.0), |(x, y), p| (x + p.x, y + p.y));
                assert!((sx / 71.0).abs() < 1e-9 && (sy / 71.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn grouping_decides_the_angle() {
        let table = grouped(6);
        let pos = CircularLayout::new(Some("group"), None).layout(&table).unwrap();
        // "moon" sorts first: n1 then n4 take the first two slots
        assert!(pos[&NodeId::from("n1")].to_polar().1.abs() < 1e-9);
        assert!((pos[&NodeId::from("n4")].to_polar().1 - PI / 3.0).abs() < 1e-9);
    }

    #[test]
    fn explicit_radius_wins() {
        let table = grouped(5);
        let layout = CircularLayout {
            radius: Some(3.0),
            ..Default::default()
        };
        let pos = layout.layout(&table).unwrap();
        assert!(pos.values().all(|p| (p.to_polar().0 - 3.0).abs() < 1e-9));
    }

    #[test]
    fn fewer_than_three_nodes_are_rejected() {
        let table = grouped(2);
        assert!(matches!(
            CircularLayout::default().layout(&table),
            Err(LayoutError::DomainTooSmall { count: 2, .. })
        ));
        let explicit = CircularLayout {
            radius: Some(3.0),
            ..Default::default()
        };
        assert!(explicit.layout(&table).is_err());
    }

    #[test]
    fn layout_is_deterministic() {
        let table = grouped(30);
        let layout = CircularLayout::new(Some("group"), Some("value"));
        assert_eq!(layout.layout(&table).unwrap(), layout.layout(&table).unwrap());
    }
}
