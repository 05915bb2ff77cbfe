use crate::table::NodeId;
use graph_encoding::EncodingError;
use thiserror::Error;

/// Errors that can occur while laying out a graph or generating edge curves
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A precondition on an argument was violated
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Too few elements for a geometric construction
    #[error("{what} needs at least {min} nodes, got {count}")]
    DomainTooSmall {
        what: &'static str,
        count: usize,
        min: usize,
    },

    /// More groups than the layout has axes for
    #[error("group_by {key:?} yields {count} groups but at most {max} are supported")]
    TooManyGroups {
        key: String,
        count: usize,
        max: usize,
    },

    /// A node lacks an attribute the layout or an encoding needs
    #[error("node {node} has no attribute {key:?}")]
    MissingAttribute { node: NodeId, key: String },

    /// No edge row joins the two nodes
    #[error("no edge {from} -> {to}")]
    UnknownEdge { from: NodeId, to: NodeId },

    /// An edge refers to a node without a position
    #[error("edge endpoint {node} has no position")]
    UnknownNode { node: NodeId },

    /// The same node id appears twice in a node table
    #[error("node {node} appears more than once")]
    DuplicateNode { node: NodeId },

    /// An attribute holds values of different kinds across rows
    #[error("attribute {key:?} mixes {first} and {second} values")]
    HeterogeneousAttribute {
        key: String,
        first: String,
        second: String,
    },

    /// A positional attribute is not a number
    #[error("attribute {key:?} of node {node} must be numeric")]
    NotNumeric { node: NodeId, key: String },

    /// A positional attribute is NaN or infinite
    #[error("attribute {key:?} of node {node} is not finite")]
    NonFinite { node: NodeId, key: String },

    /// An edge lacks an attribute an encoding needs
    #[error("edge {from} -> {to} has no attribute {key:?}")]
    MissingEdgeAttribute { from: NodeId, to: NodeId, key: String },

    /// A style series does not line up with its table
    #[error("expected {expected} edge styles, got {actual}")]
    StyleLengthMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}
