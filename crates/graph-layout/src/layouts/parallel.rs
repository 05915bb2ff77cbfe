use crate::engine::{LayoutEngine, PositionMap};
use crate::group::{group_and_sort, partition};
use crate::table::NodeTable;
use crate::{LayoutError, Point};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parallel-coordinates layout: one vertical column per group
///
/// The column of the `g`-th group (in sorted order) sits at
/// `x = g · column_spacing`; inside it nodes stack upwards by rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelLayout {
    pub group_by: String,
    pub sort_by: Option<String>,
    pub column_spacing: f64,
}

impl Default for ParallelLayout {
    fn default() -> Self {
        Self {
            group_by: "group".to_string(),
            sort_by: None,
            column_spacing: 4.0,
        }
    }
}

impl ParallelLayout {
    pub fn new(group_by: &str, sort_by: Option<&str>) -> Self {
        Self {
            group_by: group_by.to_string(),
            sort_by: sort_by.map(str::to_string),
            ..Default::default()
        }
    }
}

impl LayoutEngine for ParallelLayout {
    fn layout(&self, table: &NodeTable) -> Result<PositionMap, LayoutError> {
        let ordered = group_and_sort(table, Some(&self.group_by), self.sort_by.as_deref())?;
        let parts = partition(&ordered, &self.group_by)?;
        debug!("Parallel layout of {} nodes in {} columns", ordered.len(), parts.len());

        let mut positions = PositionMap::with_capacity(ordered.len());
        for (column, (_, rows)) in parts.iter().enumerate() {
            let x = column as f64 * self.column_spacing;
            for (rank, row) in rows.iter().enumerate() {
                positions.insert(row.id.clone(), Point::new(x, rank as f64));
            }
        }
        Ok(positions)
    }
}
