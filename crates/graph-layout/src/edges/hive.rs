use super::{locate, Curve, CurveKind, EdgeGeometry};
use crate::engine::PositionMap;
use crate::geometry::correct_hive_angles;
use crate::style::EdgeStyle;
use crate::table::EdgeTable;
use crate::{LayoutError, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use tracing::{debug, trace, warn};

/// Angles closer than this are the same angle
const ANGLE_TOLERANCE: f64 = 1e-8;

/// Edges between the axes of a hive plot
///
/// Each node has two candidate angles, one from the primary placement and one
/// from the cloned (rotated) placement. Of the four endpoint combinations the
/// one spanning the smallest non-zero angle is drawn, so edges between nodes
/// on the same axis run to the clone of that axis. An edge with no non-zero
/// combination is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HiveEdges {
    /// Bend edges around the center instead of drawing chords
    pub curves: bool,
}

impl Default for HiveEdges {
    fn default() -> Self {
        Self { curves: true }
    }
}

/// A polar endpoint
#[derive(Debug, Clone, Copy, PartialEq)]
struct Polar {
    r: f64,
    theta: f64,
}

impl HiveEdges {
    /// Pick the endpoint pair spanning the smallest non-zero angle
    ///
    /// The first combination wins ties. When the angle correction swaps the
    /// two angles, the radii are swapped with them so both ends stay on a
    /// node, and the returned flag is set: the first end then lies on the
    /// target.
    fn closest_pair(
        start_r: f64,
        end_r: f64,
        starts: [f64; 2],
        ends: [f64; 2],
    ) -> Option<(Polar, Polar, bool)> {
        let mut best = None;
        let mut smallest = f64::INFINITY;
        for start in starts {
            for end in ends {
                let (s, e) = correct_hive_angles(start, end);
                let span = (e - s).abs();
                if span <= ANGLE_TOLERANCE || span >= smallest {
                    continue;
                }
                let swapped = start < PI && end == 0.0;
                let (rs, re) = if swapped { (end_r, start_r) } else { (start_r, end_r) };
                smallest = span;
                best = Some((Polar { r: rs, theta: s }, Polar { r: re, theta: e }, swapped));
            }
        }
        best
    }
}

impl EdgeGeometry for HiveEdges {
    fn curves(
        &self,
        edges: &EdgeTable,
        pos: &PositionMap,
        cloned: Option<&PositionMap>,
        styles: &[EdgeStyle],
    ) -> Result<Vec<Curve>, LayoutError> {
        if styles.len() != edges.len() {
            return Err(LayoutError::StyleLengthMismatch {
                expected: edges.len(),
                actual: styles.len(),
            });
        }
        let cloned = cloned.unwrap_or(pos);

        let mut curves = Vec::with_capacity(edges.len());
        for (edge, style) in edges.iter().zip(styles) {
            let (start_r, start_theta) = locate(pos, &edge.source)?.to_polar();
            let (end_r, end_theta) = locate(pos, &edge.target)?.to_polar();
            let (_, start_cloned) = locate(cloned, &edge.source)?.to_polar();
            let (_, end_cloned) = locate(cloned, &edge.target)?.to_polar();

            let Some((start, mut end, swapped)) = Self::closest_pair(
                start_r,
                end_r,
                [start_theta, start_cloned],
                [end_theta, end_cloned],
            ) else {
                warn!(
                    "Skipping hive edge {} -> {}: endpoints share an angle",
                    edge.source, edge.target
                );
                continue;
            };
            if end.theta.abs() <= ANGLE_TOLERANCE {
                end.theta = TAU;
            }
            trace!(
                "Hive edge {} -> {}: {:.4} rad to {:.4} rad",
                edge.source,
                edge.target,
                start.theta,
                end.theta
            );

            let a = Point::from_polar(start.r, start.theta);
            let b = Point::from_polar(end.r, end.theta);
            let (kind, mut points) = if self.curves {
                let middle = (start.theta + end.theta) / 2.0;
                let c1 = Point::from_polar(start.r, middle);
                let c2 = Point::from_polar(end.r, middle);
                (CurveKind::Cubic, vec![a, c1, c2, b])
            } else {
                (CurveKind::Straight, vec![a, b])
            };
            if swapped {
                points.reverse();
            }
            curves.push(Curve::new(edge, kind, points, *style));
        }

        debug!("Generated {} of {} hive edges", curves.len(), edges.len());
        Ok(curves)
    }
}
