use super::{resolve, Curve, CurveKind, EdgeGeometry};
use crate::engine::PositionMap;
use crate::style::EdgeStyle;
use crate::table::EdgeTable;
use crate::{LayoutError, Point};
use tracing::debug;

/// Quadratic curves bending through the center of the ring
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CircosEdges;

impl EdgeGeometry for CircosEdges {
    fn curves(
        &self,
        edges: &EdgeTable,
        pos: &PositionMap,
        _cloned: Option<&PositionMap>,
        styles: &[EdgeStyle],
    ) -> Result<Vec<Curve>, LayoutError> {
        let resolved = resolve(edges, pos, pos, styles)?;
        debug!("Generating {} circos curves", resolved.len());

        Ok(resolved
            .into_iter()
            .map(|(edge, start, end, style)| {
                Curve::new(edge, CurveKind::Quadratic, vec![start, Point::origin(), end], style)
            })
            .collect())
    }
}
