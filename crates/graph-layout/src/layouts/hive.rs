use crate::engine::{LayoutEngine, PositionMap};
use crate::geometry::item_theta;
use crate::group::{group_and_sort, partition};
use crate::table::NodeTable;
use crate::{LayoutError, Point};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A hive plot has one radial axis per group, and only this many fit
pub const MAX_HIVE_AXES: usize = 3;

/// Radial-axis ("hive") layout
///
/// Each group gets an axis leaving the origin at `item_theta(groups, group)
/// + rotation`. The `i`-th node of a group sits at `inner_radius + i` on its
/// axis, so axes start away from the center and grow outwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HiveLayout {
    pub group_by: String,
    pub sort_by: Option<String>,
    pub inner_radius: f64,

    /// Extra angle in radians added to every axis
    pub rotation: f64,
}

impl Default for HiveLayout {
    fn default() -> Self {
        Self {
            group_by: "group".to_string(),
            sort_by: None,
            inner_radius: 10.0,
            rotation: 0.0,
        }
    }
}

impl HiveLayout {
    pub fn new(group_by: &str, sort_by: Option<&str>) -> Self {
        Self {
            group_by: group_by.to_string(),
            sort_by: sort_by.map(str::to_string),
            ..Default::default()
        }
    }

    /// Same layout, turned by `angle` more radians
    pub fn rotated(&self, angle: f64) -> Self {
        Self {
            rotation: self.rotation + angle,
            ..self.clone()
        }
    }
}

impl LayoutEngine for HiveLayout {
    fn layout(&self, table: &NodeTable) -> Result<PositionMap, LayoutError> {
        let ordered = group_and_sort(table, Some(&self.group_by), self.sort_by.as_deref())?;
        let parts = partition(&ordered, &self.group_by)?;
        if parts.len() > MAX_HIVE_AXES {
            return Err(LayoutError::TooManyGroups {
                key: self.group_by.clone(),
                count: parts.len(),
                max: MAX_HIVE_AXES,
            });
        }
        debug!(
            "Hive layout of {} nodes on {} axes, rotation {}",
            ordered.len(),
            parts.len(),
            self.rotation
        );

        let groups: Vec<_> = parts.iter().map(|(group, _)| group.clone()).collect();
        let mut positions = PositionMap::with_capacity(ordered.len());
        for (group, rows) in &parts {
            let theta = item_theta(&groups, group)? + self.rotation;
            for (i, row) in rows.iter().enumerate() {
                let radius = self.inner_radius + i as f64;
                positions.insert(row.id.clone(), Point::from_polar(radius, theta));
            }
        }
        Ok(positions)
    }
}
