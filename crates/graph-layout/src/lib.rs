//! Closed-form graph layouts
//!
//! This crate places the nodes of a graph with one of a handful of
//! deterministic, non-iterative layouts and turns its edges into drawable
//! curves. Nothing here renders: the output is coordinates, curve control
//! points and per-element styles for a renderer to consume.
//!
//! # Layout families
//!
//! - [`LayoutFamily::Circular`]: nodes on a ring, edges bent through the center
//! - [`LayoutFamily::Linear`]: nodes in a row, edges as half-circle arcs
//! - [`LayoutFamily::RadialAxis`]: a hive plot, nodes on up to three axes
//! - [`LayoutFamily::Grid`]: an adjacency matrix
//! - [`LayoutFamily::Parallel`]: one column per group
//! - [`LayoutFamily::Geographic`]: nodes at their longitude and latitude
//!
//! [`highlight`] picks out one node or edge of a plot, [`facet`] splits a
//! graph into small multiples and [`annotate`] places group labels.
//!
//! # Example
//!
//! ```
//! use graph_layout::{draw, Attributes, LayoutFamily, NodeRecord, PlotConfig};
//! use petgraph::graph::UnGraph;
//!
//! // Any petgraph graph of node records works
//! let mut graph = UnGraph::<NodeRecord, Attributes>::new_undirected();
//! let a = graph.add_node(NodeRecord::new("a").with("team", "red"));
//! let b = graph.add_node(NodeRecord::new("b").with("team", "blue"));
//! let c = graph.add_node(NodeRecord::new("c").with("team", "red"));
//! graph.add_edge(a, b, Attributes::new());
//! graph.add_edge(b, c, Attributes::new());
//!
//! // Pick a family, group the nodes and color them by team
//! let mut config = PlotConfig::new(LayoutFamily::Circular).group_by("team");
//! config.nodes.color_by = Some("team".to_string());
//!
//! let scene = draw(&graph, &config).unwrap();
//! assert_eq!(scene.positions.len(), 3);
//! // undirected edges are routed in both directions
//! assert_eq!(scene.curves.len(), 4);
//! ```
//!
//! The engines can also be used one by one:
//!
//! ```
//! use graph_layout::{LayoutEngine, LinearLayout, NodeId, NodeRecord, NodeTable};
//!
//! let table = NodeTable::new(vec![NodeRecord::new("a"), NodeRecord::new("b")]).unwrap();
//! let positions = LinearLayout::default().layout(&table).unwrap();
//! assert_eq!(positions[&NodeId::from("b")].x, 2.0);
//! ```

mod engine;
mod error;
mod geometry;
mod group;
mod table;

pub mod annotate;
pub mod edges;
pub mod facet;
pub mod highlight;
pub mod layouts;
pub mod plot;
pub mod polcart;
pub mod style;

// Re-export core types and traits
pub use engine::{LayoutEngine, PositionMap};
pub use error::LayoutError;
pub use geometry::{circos_radius, correct_hive_angles, item_theta, Point};
pub use group::{group_and_sort, groups, partition};
pub use table::{EdgeRecord, EdgeTable, GraphSource, NodeId, NodeRecord, NodeTable};

// Re-export the engines and the scene pipeline
pub use edges::{ArcSweep, Curve, CurveKind, EdgeGeometry};
pub use layouts::{
    Axis, CircularLayout, GeoLayout, HiveLayout, LinearLayout, MatrixLayout, ParallelLayout,
};
pub use facet::Facet;
pub use highlight::{highlight_edge, highlight_node, NodeHighlight};
pub use plot::{draw, LayoutFamily, PlotConfig, Scene};
pub use style::{EdgeColorBy, EdgeEncoding, EdgeStyle, NodeEncoding, NodeStyle};

// Attribute values come from the encoding crate
pub use graph_encoding::{AttrValue, Attributes, Color, EncodingConfig, Legend, Palette};
