use crate::engine::{LayoutEngine, PositionMap};
use crate::group::group_and_sort;
use crate::table::NodeTable;
use crate::{LayoutError, Point};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Nodes in a row along the x axis, for arc diagrams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearLayout {
    pub group_by: Option<String>,
    pub sort_by: Option<String>,
    pub spacing: f64,
}

impl Default for LinearLayout {
    fn default() -> Self {
        Self {
            group_by: None,
            sort_by: None,
            spacing: 2.0,
        }
    }
}

impl LinearLayout {
    pub fn new(group_by: Option<&str>, sort_by: Option<&str>) -> Self {
        Self {
            group_by: group_by.map(str::to_string),
            sort_by: sort_by.map(str::to_string),
            ..Default::default()
        }
    }
}

impl LayoutEngine for LinearLayout {
    fn layout(&self, table: &NodeTable) -> Result<PositionMap, LayoutError> {
        let ordered = group_and_sort(table, self.group_by.as_deref(), self.sort_by.as_deref())?;
        debug!("Linear layout of {} nodes", ordered.len());

        Ok(ordered
            .iter()
            .enumerate()
            .map(|(i, row)| (row.id.clone(), Point::new(i as f64 * self.spacing, 0.0)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::fixtures::{assert_complete, grouped};
    use crate::table::NodeId;
    use test_log::test;

    #[test]
    fn nodes_are_spaced_along_x() {
        let table = grouped(4);
        let pos = LinearLayout::default().layout(&table).unwrap();
        assert_complete(&table, &pos);
        for i in 0..4 {
            assert_eq!(pos[&NodeId::from(format!("n{i}"))], Point::new(2.0 * i as f64, 0.0));
        }
    }

    #[test]
    fn sorted_nodes_follow_the_value() {
        let table = grouped(5);
        let pos = LinearLayout::new(None, Some("value")).layout(&table).unwrap();
        let mut order: Vec<_> = pos.iter().collect();
        order.sort_by(|a, b| a.1.x.total_cmp(&b.1.x));
        let values: Vec<_> = order
            .iter()
            .map(|(id, _)| table.iter().find(|row| &row.id == *id).unwrap().attrs["value"].clone())
            .collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn empty_table_gives_empty_layout() {
        let pos = LinearLayout::default().layout(&NodeTable::default()).unwrap();
        assert!(pos.is_empty());
    }

    #[test]
    fn spacing_loads_from_ron() {
        let layout: LinearLayout =
            ron::from_str("(spacing: 3.5, group_by: Some(\"group\"))").unwrap();
        assert_eq!(layout.spacing, 3.5);
        assert_eq!(layout.group_by.as_deref(), Some("group"));
        assert_eq!(layout.sort_by, None);
    }
}
