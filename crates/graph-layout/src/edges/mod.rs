//! Edge geometry: turning positioned endpoints into drawable curves.
//!
//! Every engine resolves both endpoints of every edge before producing
//! anything, so an edge pointing at an unplaced node fails the whole call.

mod arc;
mod circos;
mod hive;
mod line;
mod matrix;

pub use arc::ArcEdges;
pub use circos::CircosEdges;
pub use hive::HiveEdges;
pub use line::LineEdges;
pub use matrix::MatrixEdges;

use crate::engine::PositionMap;
use crate::style::EdgeStyle;
use crate::table::{EdgeRecord, EdgeTable, NodeId};
use crate::{LayoutError, Point};
use serde::{Deserialize, Serialize};

/// An elliptical arc, in the renderer's convention
///
/// Angles are in degrees, counter-clockwise from the positive x axis, with
/// `theta1 <= theta2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSweep {
    pub center: Point,
    pub width: f64,
    pub height: f64,
    pub theta1: f64,
    pub theta2: f64,
}

/// How the control points of a [`Curve`] are meant to be read
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CurveKind {
    /// `[start, end]`
    Straight,
    /// `[start, control, end]`
    Quadratic,
    /// `[start, control, control, end]`
    Cubic,
    /// `[start, end]`, drawn along the sweep
    Arc(ArcSweep),
    /// `[center]`, a filled disc
    Marker { radius: f64 },
}

/// A drawable edge
///
/// `points` always run from the `source` end to the `target` end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub source: NodeId,
    pub target: NodeId,
    pub kind: CurveKind,
    pub points: Vec<Point>,
    pub style: EdgeStyle,
}

impl Curve {
    fn new(edge: &EdgeRecord, kind: CurveKind, points: Vec<Point>, style: EdgeStyle) -> Self {
        Self {
            source: edge.source.clone(),
            target: edge.target.clone(),
            kind,
            points,
            style,
        }
    }
}

/// Generates one curve per edge (or none, for degenerate edges of some
/// families) from node positions
pub trait EdgeGeometry {
    /// Compute the curves of `edges`
    ///
    /// `styles` runs parallel to the edge table. `cloned` is the second
    /// placement of the nodes used by families that draw each node twice;
    /// engines that do not need it ignore it.
    ///
    /// # Errors
    /// [`LayoutError::UnknownNode`] if an endpoint has no position,
    /// [`LayoutError::StyleLengthMismatch`] if `styles` does not line up.
    fn curves(
        &self,
        edges: &EdgeTable,
        pos: &PositionMap,
        cloned: Option<&PositionMap>,
        styles: &[EdgeStyle],
    ) -> Result<Vec<Curve>, LayoutError>;
}

/// Position of `node`, or [`LayoutError::UnknownNode`]
pub(crate) fn locate(pos: &PositionMap, node: &NodeId) -> Result<Point, LayoutError> {
    pos.get(node)
        .copied()
        .ok_or_else(|| LayoutError::UnknownNode { node: node.clone() })
}

/// Pair each edge with its style and resolved endpoints, failing on the first
/// problem
pub(crate) fn resolve<'a>(
    edges: &'a EdgeTable,
    start_pos: &PositionMap,
    end_pos: &PositionMap,
    styles: &[EdgeStyle],
) -> Result<Vec<(&'a EdgeRecord, Point, Point, EdgeStyle)>, LayoutError> {
    if styles.len() != edges.len() {
        return Err(LayoutError::StyleLengthMismatch {
            expected: edges.len(),
            actual: styles.len(),
        });
    }
    edges
        .iter()
        .zip(styles)
        .map(|(edge, style)| {
            let start = locate(start_pos, &edge.source)?;
            let end = locate(end_pos, &edge.target)?;
            Ok((edge, start, end, *style))
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::table::NodeRecord;

    /// Unit styles, one per edge
    pub fn styles(edges: &EdgeTable) -> Vec<EdgeStyle> {
        vec![EdgeStyle::default(); edges.len()]
    }

    pub fn edges(pairs: &[(&str, &str)]) -> EdgeTable {
        EdgeTable::new(pairs.iter().map(|&(s, t)| EdgeRecord::new(s, t)).collect()).unwrap()
    }

    pub fn positions(points: &[(&str, f64, f64)]) -> PositionMap {
        points
            .iter()
            .map(|&(id, x, y)| (NodeId::from(id), Point::new(x, y)))
            .collect()
    }

    /// Nodes without attributes, for the layout engines
    pub fn nodes(ids: &[&str]) -> crate::table::NodeTable {
        crate::table::NodeTable::new(ids.iter().map(|&id| NodeRecord::new(id)).collect()).unwrap()
    }
}
