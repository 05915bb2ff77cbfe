//! Anchor points for group labels.
//!
//! Only the coordinate math lives here; drawing the text is up to the
//! renderer. Anchors use the units of the matching layout family with its
//! default spacing.

use crate::geometry::{circos_radius, item_theta};
use crate::group::partition;
use crate::table::NodeTable;
use crate::{LayoutError, Point};
use graph_encoding::AttrValue;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// Angular offset of hive labels from their axis
pub const HIVE_LABEL_OFFSET: f64 = PI / 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

/// Alignment that keeps a label at `(x, y)` clear of the plot center
///
/// Text right of the center is left-aligned, text above it bottom-aligned.
pub fn text_alignment(x: f64, y: f64) -> (HorizontalAlign, VerticalAlign) {
    let horizontal = if x == 0.0 {
        HorizontalAlign::Center
    } else if x > 0.0 {
        HorizontalAlign::Left
    } else {
        HorizontalAlign::Right
    };
    let vertical = if y == 0.0 {
        VerticalAlign::Center
    } else if y > 0.0 {
        VerticalAlign::Bottom
    } else {
        VerticalAlign::Top
    };
    (horizontal, vertical)
}

/// Where and how to write one group's name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupLabel {
    pub group: AttrValue,
    pub anchor: Point,
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,

    /// Text rotation in degrees
    pub rotation: f64,
}

impl GroupLabel {
    /// A label aligned away from the center
    fn radial(group: AttrValue, anchor: Point) -> Self {
        let (horizontal, vertical) = text_alignment(anchor.x, anchor.y);
        Self {
            group,
            anchor,
            horizontal,
            vertical,
            rotation: 0.0,
        }
    }

    /// A label hanging below an axis, rotated
    fn hanging(group: AttrValue, anchor: Point, rotation: f64) -> Self {
        Self {
            group,
            anchor,
            horizontal: HorizontalAlign::Right,
            vertical: VerticalAlign::Top,
            rotation,
        }
    }

    fn centered(group: AttrValue, anchor: Point, rotation: f64) -> Self {
        Self {
            group,
            anchor,
            horizontal: HorizontalAlign::Center,
            vertical: VerticalAlign::Center,
            rotation,
        }
    }
}

/// A square highlighting one group's block on the matrix diagonal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupBlock {
    pub group: AttrValue,
    /// Lower-left corner
    pub corner: Point,
    pub side: f64,
}

/// Groups in sorted order with their node counts
fn group_sizes(table: &NodeTable, key: &str) -> Result<Vec<(AttrValue, usize)>, LayoutError> {
    Ok(partition(table, key)?
        .into_iter()
        .map(|(group, rows)| (group, rows.len()))
        .collect())
}

/// Where each group starts, as a fraction of all nodes; with `midpoint`, where
/// it is centered
fn proportional_starts(sizes: &[(AttrValue, usize)], midpoint: bool) -> Vec<f64> {
    let total: usize = sizes.iter().map(|(_, n)| n).sum();
    let mut before = 0.0;
    sizes
        .iter()
        .map(|(_, n)| {
            let share = *n as f64 / total as f64;
            let start = before + if midpoint { share / 2.0 } else { 0.0 };
            before += share;
            start
        })
        .collect()
}

/// Labels around a circos ring, each at its group's share of the turn
///
/// `radius` defaults to the ring radius of the table plus `radius_offset`.
pub fn circos_group(
    table: &NodeTable,
    key: &str,
    radius: Option<f64>,
    radius_offset: f64,
    midpoint: bool,
) -> Result<Vec<GroupLabel>, LayoutError> {
    let radius = match radius {
        Some(radius) => radius,
        None => circos_radius(table.len(), 1.0)? + radius_offset,
    };
    let sizes = group_sizes(table, key)?;
    let starts = proportional_starts(&sizes, midpoint);
    Ok(sizes
        .into_iter()
        .zip(starts)
        .map(|((group, _), start)| {
            GroupLabel::radial(group, Point::from_polar(radius, start * TAU))
        })
        .collect())
}

/// Labels just past the outer end of each hive axis
pub fn hive_group(table: &NodeTable, key: &str) -> Result<Vec<GroupLabel>, LayoutError> {
    let sizes = group_sizes(table, key)?;
    let groups: Vec<_> = sizes.iter().map(|(group, _)| group.clone()).collect();
    sizes
        .into_iter()
        .map(|(group, n)| {
            let theta = item_theta(&groups, &group)? + HIVE_LABEL_OFFSET;
            let radius = 2.0 * (8.0 + n as f64 + 1.0);
            Ok(GroupLabel::radial(group, Point::from_polar(radius, theta)))
        })
        .collect()
}

/// Labels under an arc diagram, at each group's share of the node row
pub fn arc_group(
    table: &NodeTable,
    key: &str,
    midpoint: bool,
    y_offset: f64,
) -> Result<Vec<GroupLabel>, LayoutError> {
    let sizes = group_sizes(table, key)?;
    let width = 2.0 * table.len() as f64;
    let starts = proportional_starts(&sizes, midpoint);
    Ok(sizes
        .into_iter()
        .zip(starts)
        .map(|((group, _), start)| {
            GroupLabel::hanging(group, Point::new(start * width, y_offset), 45.0)
        })
        .collect())
}

/// Labels under each column of a parallel plot
pub fn parallel_group(
    table: &NodeTable,
    key: &str,
    y_offset: f64,
) -> Result<Vec<GroupLabel>, LayoutError> {
    Ok(group_sizes(table, key)?
        .into_iter()
        .enumerate()
        .map(|(i, (group, _))| {
            GroupLabel::hanging(group, Point::new(4.0 * i as f64, y_offset), 45.0)
        })
        .collect())
}

/// Labels along both matrix axes, centered on each group's run of rows
///
/// Returns the column labels (below the x axis) followed by the row labels
/// (left of the y axis, rotated upright).
pub fn matrix_group(
    table: &NodeTable,
    key: &str,
    offset: f64,
) -> Result<Vec<GroupLabel>, LayoutError> {
    let sizes = group_sizes(table, key)?;
    let span = 2.0 * table.len() as f64;
    let positions: Vec<f64> = proportional_starts(&sizes, true)
        .into_iter()
        .map(|start| start * span + 1.0)
        .collect();

    let columns = sizes
        .iter()
        .zip(&positions)
        .map(|((group, _), &p)| GroupLabel::centered(group.clone(), Point::new(p, offset), 0.0));
    let rows = sizes
        .iter()
        .zip(&positions)
        .map(|((group, _), &p)| GroupLabel::centered(group.clone(), Point::new(offset, p), 90.0));
    Ok(columns.chain(rows).collect())
}

/// Diagonal blocks of a matrix plot, one per group
pub fn matrix_blocks(table: &NodeTable, key: &str) -> Result<Vec<GroupBlock>, LayoutError> {
    let mut end = 0.0;
    Ok(group_sizes(table, key)?
        .into_iter()
        .map(|(group, n)| {
            let side = 2.0 * n as f64;
            end += side;
            let start = end + 1.0 - side;
            GroupBlock {
                group,
                corner: Point::new(start, start),
                side,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::fixtures::grouped;
    use test_log::test;

    fn anchors(labels: &[GroupLabel]) -> Vec<(String, Point)> {
        labels
            .iter()
            .map(|label| (label.group.to_string(), label.anchor))
            .collect()
    }

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn alignment_points_away_from_the_center() {
        use HorizontalAlign as H;
        use VerticalAlign as V;
        assert_eq!(text_alignment(0.0, 0.0), (H::Center, V::Center));
        assert_eq!(text_alignment(1.0, 1.0), (H::Left, V::Bottom));
        assert_eq!(text_alignment(-1.0, -2.0), (H::Right, V::Top));
        assert_eq!(text_alignment(0.0, -2.0), (H::Center, V::Top));
    }

    #[test]
    fn circos_labels_sit_at_group_midpoints() {
        let table = grouped(6);
        let labels = circos_group(&table, "group", None, 1.0, true).unwrap();
        let radius = circos_radius(6, 1.0).unwrap() + 1.0;

        let expected = [("moon", PI / 3.0), ("stars", PI), ("sun", 5.0 * PI / 3.0)];
        for ((group, anchor), (name, theta)) in anchors(&labels).into_iter().zip(expected) {
            assert_eq!(group, name);
            assert!(close(anchor, Point::from_polar(radius, theta)), "{group}");
        }
        assert_eq!(labels[0].horizontal, HorizontalAlign::Left);
        assert_eq!(labels[0].vertical, VerticalAlign::Bottom);
    }

    #[test]
    fn circos_labels_without_midpoint_start_each_group() {
        let table = grouped(6);
        let labels = circos_group(&table, "group", Some(5.0), 0.0, false).unwrap();
        assert!(close(labels[0].anchor, Point::new(5.0, 0.0)));
        assert!(close(labels[1].anchor, Point::from_polar(5.0, TAU / 3.0)));
    }

    #[test]
    fn hive_labels_grow_with_the_axis() {
        let table = grouped(7);
        let labels = hive_group(&table, "group").unwrap();
        // moon has 2 nodes, sun has 3
        assert!(close(labels[0].anchor, Point::from_polar(22.0, HIVE_LABEL_OFFSET)));
        assert!(close(
            labels[2].anchor,
            Point::from_polar(24.0, 4.0 * PI / 3.0 + HIVE_LABEL_OFFSET)
        ));
    }

    #[test]
    fn arc_and_parallel_labels_hang_below_the_axis() {
        let table = grouped(6);
        let arc = arc_group(&table, "group", true, -1.0).unwrap();
        let xs: Vec<f64> = arc.iter().map(|label| label.anchor.x).collect();
        assert_eq!(xs.len(), 3);
        for (x, expected) in xs.iter().zip([2.0, 6.0, 10.0]) {
            assert!((x - expected).abs() < 1e-9);
        }
        assert!(arc.iter().all(|label| label.anchor.y == -1.0 && label.rotation == 45.0));

        let parallel = parallel_group(&table, "group", -0.3).unwrap();
        let xs: Vec<f64> = parallel.iter().map(|label| label.anchor.x).collect();
        assert_eq!(xs, vec![0.0, 4.0, 8.0]);
        assert_eq!(parallel[0].horizontal, HorizontalAlign::Right);
    }

    #[test]
    fn matrix_labels_cover_both_axes() {
        let table = grouped(6);
        let labels = matrix_group(&table, "group", -3.0).unwrap();
        assert_eq!(labels.len(), 6);
        for (i, expected) in [3.0, 7.0, 11.0].into_iter().enumerate() {
            assert!(close(labels[i].anchor, Point::new(expected, -3.0)));
            assert!(close(labels[i + 3].anchor, Point::new(-3.0, expected)));
            assert_eq!(labels[i + 3].rotation, 90.0);
        }
    }

    #[test]
    fn matrix_blocks_tile_the_diagonal() {
        let table = grouped(6);
        let blocks = matrix_blocks(&table, "group").unwrap();
        let corners: Vec<f64> = blocks.iter().map(|block| block.corner.x).collect();
        assert_eq!(corners, vec![1.0, 5.0, 9.0]);
        assert!(blocks.iter().all(|block| block.side == 4.0));
    }

    #[test]
    fn labels_need_the_group_key() {
        let table = grouped(3);
        assert!(matches!(
            parallel_group(&table, "colour", 0.0),
            Err(LayoutError::MissingAttribute { .. })
        ));
    }
}
