use super::{resolve, ArcSweep, Curve, CurveKind, EdgeGeometry};
use crate::engine::PositionMap;
use crate::polcart::to_polar;
use crate::style::EdgeStyle;
use crate::table::EdgeTable;
use crate::LayoutError;
use tracing::debug;

/// Half-circle arcs over a linear layout
///
/// The arc is centered halfway between the endpoints and its diameter is
/// their horizontal distance; the sweep runs between the endpoint angles seen
/// from the center.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArcEdges;

impl EdgeGeometry for ArcEdges {
    fn curves(
        &self,
        edges: &EdgeTable,
        pos: &PositionMap,
        _cloned: Option<&PositionMap>,
        styles: &[EdgeStyle],
    ) -> Result<Vec<Curve>, LayoutError> {
        let resolved = resolve(edges, pos, pos, styles)?;
        debug!("Generating {} arcs", resolved.len());

        Ok(resolved
            .into_iter()
            .map(|(edge, start, end, style)| {
                let center = start.midpoint(end);
                let width = (end.x - start.x).abs();
                let (_, t1) = to_polar(start.x - center.x, start.y - center.y);
                let (_, t2) = to_polar(end.x - center.x, end.y - center.y);
                let (t1, t2) = (t1.to_degrees(), t2.to_degrees());

                let sweep = ArcSweep {
                    center,
                    width,
                    height: width,
                    theta1: t1.min(t2),
                    theta2: t1.max(t2),
                };
                Curve::new(edge, CurveKind::Arc(sweep), vec![start, end], style)
            })
            .collect())
    }
}
