use super::{resolve, Curve, CurveKind, EdgeGeometry};
use crate::engine::PositionMap;
use crate::style::EdgeStyle;
use crate::table::EdgeTable;
use crate::LayoutError;
use tracing::debug;

/// Straight segments between endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LineEdges;

impl EdgeGeometry for LineEdges {
    fn curves(
        &self,
        edges: &EdgeTable,
        pos: &PositionMap,
        _cloned: Option<&PositionMap>,
        styles: &[EdgeStyle],
    ) -> Result<Vec<Curve>, LayoutError> {
        let resolved = resolve(edges, pos, pos, styles)?;
        debug!("Generating {} straight edges", resolved.len());

        Ok(resolved
            .into_iter()
            .map(|(edge, start, end, style)| {
                Curve::new(edge, CurveKind::Straight, vec![start, end], style)
            })
            .collect())
    }
}
