use crate::polcart::{to_cartesian, to_polar};
use crate::LayoutError;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// 2D point with f64 coordinates, in layout units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin of the layout plane
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Point at radius `r` and angle `theta` (radians)
    pub fn from_polar(r: f64, theta: f64) -> Self {
        let (x, y) = to_cartesian(r, theta);
        Self { x, y }
    }

    /// Radius and angle in `[0, 2π)`
    pub fn to_polar(self) -> (f64, f64) {
        to_polar(self.x, self.y)
    }

    /// Halfway between two points
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Angle of the `i`-th of `n` evenly spaced items
pub(crate) fn theta_at(i: usize, n: usize) -> f64 {
    i as f64 * TAU / n as f64
}

/// Maps an item to its angle in an ordered list: `i · 2π / n`
///
/// # Errors
/// Returns [`LayoutError::InvalidArgument`] if `items` is empty or does not
/// contain `item`.
pub fn item_theta<T: PartialEq + std::fmt::Debug>(
    items: &[T],
    item: &T,
) -> Result<f64, LayoutError> {
    if items.is_empty() {
        return Err(LayoutError::InvalidArgument(
            "item list must not be empty".to_string(),
        ));
    }
    let i = items.iter().position(|x| x == item).ok_or_else(|| {
        LayoutError::InvalidArgument(format!("{item:?} is not in the item list"))
    })?;
    Ok(theta_at(i, items.len()))
}

/// Origin-to-center radius at which `n_nodes` circles of `node_radius`,
/// evenly spaced on a ring, touch without overlapping
///
/// Uses the sine rule on the isoceles triangle formed by the origin and two
/// adjacent node centers.
///
/// # Errors
/// Returns [`LayoutError::DomainTooSmall`] for fewer than 3 nodes.
pub fn circos_radius(n_nodes: usize, node_radius: f64) -> Result<f64, LayoutError> {
    if n_nodes < 3 {
        return Err(LayoutError::DomainTooSmall {
            what: "circos radius",
            count: n_nodes,
            min: 3,
        });
    }
    let a = TAU / n_nodes as f64;
    let b = (PI - a) / 2.0;
    Ok(2.0 * node_radius * b.sin() / a.sin())
}

/// Reconcile two hive-plot angles around the 0/2π branch cut
///
/// The rules run in this exact order, and later rules see the values
/// produced by earlier ones.
pub fn correct_hive_angles(start: f64, end: f64) -> (f64, f64) {
    let (mut start, mut end) = (start, end);
    if start > PI && end == 0.0 {
        end = TAU;
    }
    if start < PI && end == 0.0 {
        (start, end) = (end, start);
    }
    if end < PI && start == TAU {
        start = 0.0;
    }
    if end > PI && start == 0.0 {
        start = TAU;
    }
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn item_theta_spreads_items_evenly() {
        let items = ["a", "b", "c", "d"];
        assert_eq!(item_theta(&items, &"a").unwrap(), 0.0);
        assert!((item_theta(&items, &"b").unwrap() - PI / 2.0).abs() < 1e-12);
        assert!((item_theta(&items, &"d").unwrap() - 1.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn item_theta_rejects_missing_items() {
        let empty: [i32; 0] = [];
        assert!(matches!(
            item_theta(&empty, &1),
            Err(LayoutError::InvalidArgument(_))
        ));
        assert!(matches!(
            item_theta(&[1, 2], &3),
            Err(LayoutError::InvalidArgument(msg)) if msg.contains('3')
        ));
    }

    #[test]
    fn circos_radius_matches_chord_formula() {
        let n_nodes = 10;
        let a = TAU / n_nodes as f64;
        let expected = 2.0 / (2.0 * (1.0 - a.cos())).sqrt();
        assert!((circos_radius(n_nodes, 1.0).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn adjacent_circos_nodes_are_tangent() {
        for n in 3..50 {
            for node_r in [0.5, 1.0, 2.5] {
                let r = circos_radius(n, node_r).unwrap();
                let p0 = Point::from_polar(r, theta_at(0, n));
                let p1 = Point::from_polar(r, theta_at(1, n));
                assert!((p0.distance(p1) - 2.0 * node_r).abs() < 1e-9, "n={n}");
            }
        }
    }

    #[test]
    fn circos_radius_rejects_degenerate_rings() {
        for n in 0..3 {
            assert_eq!(
                circos_radius(n, 1.0),
                Err(LayoutError::DomainTooSmall {
                    what: "circos radius",
                    count: n,
                    min: 3,
                })
            );
        }
    }

    #[test]
    fn hive_angle_rules_fire_in_order() {
        // first rule: start past π, end on the cut
        assert_eq!(correct_hive_angles(3.5, 0.0), (3.5, TAU));
        // second rule: swap
        assert_eq!(correct_hive_angles(1.0, 0.0), (0.0, 1.0));
        // third rule: start at 2π, end before π
        assert_eq!(correct_hive_angles(TAU, 1.0), (0.0, 1.0));
        // fourth rule: start at 0, end past π
        assert_eq!(correct_hive_angles(0.0, 4.0), (TAU, 4.0));
    }

    #[test]
    fn hive_angle_rules_chain() {
        // the swapped pair ends below π, so the fourth rule stays quiet
        assert_eq!(correct_hive_angles(PI - 0.5, 0.0), (0.0, PI - 0.5));
        // start at 2π with end 0: first rule lifts end, nothing else applies
        assert_eq!(correct_hive_angles(TAU, 0.0), (TAU, TAU));
        // exactly π on the start with end 0: neither of the first two rules fires
        assert_eq!(correct_hive_angles(PI, 0.0), (PI, 0.0));
        // untouched when no rule applies
        assert_eq!(correct_hive_angles(1.0, 2.0), (1.0, 2.0));
    }
}
