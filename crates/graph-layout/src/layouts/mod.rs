//! Closed-form node layouts, one per layout family.

mod circular;
mod geo;
mod hive;
mod linear;
mod matrix;
mod parallel;

pub use circular::CircularLayout;
pub use geo::GeoLayout;
pub use hive::{HiveLayout, MAX_HIVE_AXES};
pub use linear::LinearLayout;
pub use matrix::{Axis, MatrixLayout};
pub use parallel::ParallelLayout;
