use crate::engine::{LayoutEngine, PositionMap};
use crate::group::group_and_sort;
use crate::table::NodeTable;
use crate::{LayoutError, Point};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Axis a matrix layout lines the nodes up on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    #[display("x")]
    X,
    #[display("y")]
    Y,
}

/// Grid ("matrix") layout
///
/// Node `i` sits at `(i + 1) · spacing` along `axis` and 0 on the other one.
/// A matrix plot uses the same nodes twice, once per axis, and edges become
/// cells where the two meet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixLayout {
    pub group_by: Option<String>,
    pub sort_by: Option<String>,
    pub axis: Axis,
    pub spacing: f64,
}

impl Default for MatrixLayout {
    fn default() -> Self {
        Self {
            group_by: None,
            sort_by: None,
            axis: Axis::X,
            spacing: 2.0,
        }
    }
}

impl MatrixLayout {
    pub fn new(group_by: Option<&str>, sort_by: Option<&str>) -> Self {
        Self {
            group_by: group_by.map(str::to_string),
            sort_by: sort_by.map(str::to_string),
            ..Default::default()
        }
    }

    /// Same ordering, along the other axis
    pub fn on_axis(&self, axis: Axis) -> Self {
        Self {
            axis,
            ..self.clone()
        }
    }
}

impl LayoutEngine for MatrixLayout {
    fn layout(&self, table: &NodeTable) -> Result<PositionMap, LayoutError> {
        let ordered = group_and_sort(table, self.group_by.as_deref(), self.sort_by.as_deref())?;
        debug!("Matrix layout of {} nodes along {}", ordered.len(), self.axis);

        Ok(ordered
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let offset = (i + 1) as f64 * self.spacing;
                let point = match self.axis {
                    Axis::X => Point::new(offset, 0.0),
                    Axis::Y => Point::new(0.0, offset),
                };
                (row.id.clone(), point)
            })
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
    fn first_node_is_one_step_in() {
        let table = grouped(3);
        let pos = MatrixLayout::default().layout(&table).unwrap();
        assert_complete(&table, &pos);
        assert_eq!(pos[&NodeId::from("n0")], Point::new(2.0, 0.0));
        assert_eq!(pos[&NodeId::from("n2")], Point::new(6.0, 0.0));
    }

    #[test]
    fn y_axis_transposes_the_x_axis() {
        let table = grouped(7);
        let x = MatrixLayout::new(Some("group"), Some("value"));
        let y = x.on_axis(Axis::Y);
        let along_x = x.layout(&table).unwrap();
        let along_y = y.layout(&table).unwrap();
        for id in table.ids() {
            assert_eq!(along_x[&id].x, along_y[&id].y);
            assert_eq!(along_x[&id].y, 0.0);
            assert_eq!(along_y[&id].x, 0.0);
        }
    }

    #[test]
    fn axis_loads_from_ron() {
        let layout: MatrixLayout = ron::from_str("(axis: y)").unwrap();
        assert_eq!(layout.axis, Axis::Y);
        assert_eq!(layout.spacing, 2.0);
    }
}
