use super::{resolve, Curve, CurveKind, EdgeGeometry};
use crate::engine::PositionMap;
use crate::style::EdgeStyle;
use crate::table::EdgeTable;
use crate::{LayoutError, Point};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Cell markers of an adjacency matrix
///
/// The source is looked up in the cloned placement (the row axis) and the
/// target in the primary one (the column axis); each lies on a single axis, so
/// the larger coordinate is its offset. The marker radius is the edge width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixEdges {
    /// Also draw the transposed cell, for undirected edge tables that list
    /// each edge once
    pub mirror: bool,
}

impl EdgeGeometry for MatrixEdges {
    fn curves(
        &self,
        edges: &EdgeTable,
        pos: &PositionMap,
        cloned: Option<&PositionMap>,
        styles: &[EdgeStyle],
    ) -> Result<Vec<Curve>, LayoutError> {
        let rows = cloned.unwrap_or(pos);
        let resolved = resolve(edges, rows, pos, styles)?;
        debug!("Generating {} matrix cells (mirror: {})", resolved.len(), self.mirror);

        let mut curves = Vec::with_capacity(resolved.len() * if self.mirror { 2 } else { 1 });
        for (edge, start, end, style) in resolved {
            let cell = Point::new(start.x.max(start.y), end.x.max(end.y));
            let kind = CurveKind::Marker {
                radius: style.width,
            };
            curves.push(Curve::new(edge, kind, vec![cell], style));
            if self.mirror {
                let mirrored = Point::new(cell.y, cell.x);
                curves.push(Curve::new(edge, kind, vec![mirrored], style));
            }
        }
        Ok(curves)
    }
}
