use crate::table::{NodeId, NodeTable};
use crate::{LayoutError, Point};
use std::collections::HashMap;

/// Node id to coordinate, in the layout's own units
pub type PositionMap = HashMap<NodeId, Point>;

/// A layout engine that can compute positions for the nodes of a table
///
/// Every engine is a closed-form placement:
/// - each row of the table gets exactly one finite position
/// - no id outside the table appears in the result
/// - identical input and configuration give identical output
pub trait LayoutEngine {
    /// Compute node positions for the given node table
    ///
    /// # Errors
    /// Returns an error if the table violates a layout-specific constraint
    /// (too few nodes for a ring, too many groups for the axes, missing
    /// grouping or positional attributes).
    fn layout(&self, table: &NodeTable) -> Result<PositionMap, LayoutError>;
}
