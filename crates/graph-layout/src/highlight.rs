//! Emphasis of a single node or edge, drawn over a finished plot.
//!
//! A highlight repeats the geometry of its plot with an override style: the
//! node at every place the family draws it, or the curves of one edge.

use crate::edges::Curve;
use crate::plot::{LayoutFamily, PlotConfig};
use crate::style::{EdgeStyle, NodeStyle};
use crate::table::{EdgeTable, GraphSource, NodeId, NodeTable};
use crate::{LayoutError, Point};
use graph_encoding::Color;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Style of a highlighted node
pub const NODE_HIGHLIGHT: NodeStyle = NodeStyle {
    color: Color::RED,
    radius: 1.0,
    alpha: 1.0,
};

/// Style of a highlighted edge
pub const EDGE_HIGHLIGHT: EdgeStyle = EdgeStyle {
    color: Color::RED,
    width: 1.0,
    alpha: 1.0,
};

/// One node, at each of its drawn positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeHighlight {
    pub node: NodeId,
    /// The primary position, then the cloned one for families that have it
    pub positions: Vec<Point>,
    pub style: NodeStyle,
}

/// Highlight `node` of the plot `config` draws of `graph`
///
/// # Errors
/// [`LayoutError::UnknownNode`] if the graph has no such node, or any error
/// laying out the plot would raise.
pub fn highlight_node<G: GraphSource>(
    graph: &G,
    config: &PlotConfig,
    node: &NodeId,
    style: NodeStyle,
) -> Result<NodeHighlight, LayoutError> {
    let nodes = NodeTable::from_graph(graph)?;
    let strategy = config.family.strategy(config)?;

    let mut positions = Vec::with_capacity(2);
    for layout in std::iter::once(&strategy.layout).chain(strategy.cloned.as_ref()) {
        let placed = layout.layout(&nodes)?;
        let point = placed
            .get(node)
            .copied()
            .ok_or_else(|| LayoutError::UnknownNode { node: node.clone() })?;
        positions.push(point);
    }
    debug!("Highlighting node {node} at {} positions", positions.len());

    Ok(NodeHighlight {
        node: node.clone(),
        positions,
        style,
    })
}

/// Highlight the edge rows from `source` to `target`
///
/// Matrix plots mark both cells of the edge. A hive edge whose ends share
/// every angle yields no curve, as in the plot itself.
///
/// # Errors
/// [`LayoutError::UnknownEdge`] if no edge row joins the two nodes, or any
/// error drawing the plot would raise.
pub fn highlight_edge<G: GraphSource>(
    graph: &G,
    config: &PlotConfig,
    source: &NodeId,
    target: &NodeId,
    style: EdgeStyle,
) -> Result<Vec<Curve>, LayoutError> {
    let nodes = NodeTable::from_graph(graph)?;
    let edges = EdgeTable::from_graph(graph)?
        .filtered(|edge| &edge.source == source && &edge.target == target);
    if edges.is_empty() {
        return Err(LayoutError::UnknownEdge {
            from: source.clone(),
            to: target.clone(),
        });
    }

    let config = PlotConfig {
        mirror: config.mirror || config.family == LayoutFamily::Grid,
        ..config.clone()
    };
    let strategy = config.family.strategy(&config)?;
    let positions = strategy.layout.layout(&nodes)?;
    let cloned = strategy
        .cloned
        .as_ref()
        .map(|layout| layout.layout(&nodes))
        .transpose()?;

    let styles = vec![style; edges.len()];
    let curves = strategy
        .edges
        .curves(&edges, &positions, cloned.as_ref(), &styles)?;
    debug!("Highlighting edge {source} -> {target} with {} curves", curves.len());
    Ok(curves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::CurveKind;
    use crate::plot::{draw, HIVE_CLONE_ROTATION};
    use crate::table::NodeRecord;
    use graph_encoding::Attributes;
    use petgraph::graph::{DiGraph, UnGraph};
    use std::f64::consts::TAU;
    use test_log::test;

    /// Two teams of two, one link inside each team and one across
    fn graph() -> UnGraph<NodeRecord, Attributes> {
        let mut graph = UnGraph::new_undirected();
        let ann = graph.add_node(NodeRecord::new("ann").with("team", "red"));
        let bob = graph.add_node(NodeRecord::new("bob").with("team", "red"));
        let cyd = graph.add_node(NodeRecord::new("cyd").with("team", "blue"));
        let dan = graph.add_node(NodeRecord::new("dan").with("team", "blue"));
        graph.add_edge(ann, bob, Attributes::new());
        graph.add_edge(cyd, dan, Attributes::new());
        graph.add_edge(bob, cyd, Attributes::new());
        graph
    }

    #[test]
    fn circos_node_sits_where_the_plot_puts_it() {
        let graph = graph();
        let config = PlotConfig::default();
        let scene = draw(&graph, &config).unwrap();
        let bob = NodeId::from("bob");

        let highlight = highlight_node(&graph, &config, &bob, NODE_HIGHLIGHT).unwrap();
        assert_eq!(highlight.positions, vec![scene.positions[&bob]]);
        assert_eq!(highlight.style.color, Color::RED);
    }

    #[test]
    fn hive_node_is_marked_on_both_axes() {
        let graph = graph();
        let config = PlotConfig::new(LayoutFamily::RadialAxis).group_by("team");
        let highlight =
            highlight_node(&graph, &config, &NodeId::from("cyd"), NODE_HIGHLIGHT).unwrap();

        assert_eq!(highlight.positions.len(), 2);
        let (r0, a) = highlight.positions[0].to_polar();
        let (r1, b) = highlight.positions[1].to_polar();
        assert!((r0 - r1).abs() < 1e-9);
        assert!(((b - a).rem_euclid(TAU) - HIVE_CLONE_ROTATION).abs() < 1e-9);
    }

    #[test]
    fn matrix_node_is_marked_on_both_axes() {
        let graph = graph();
        let config = PlotConfig::new(LayoutFamily::Grid);
        let highlight =
            highlight_node(&graph, &config, &NodeId::from("bob"), NODE_HIGHLIGHT).unwrap();
        assert_eq!(highlight.positions, vec![Point::new(4.0, 0.0), Point::new(0.0, 4.0)]);
    }

    #[test]
    fn unknown_node_is_an_error() {
        let graph = graph();
        let result = highlight_node(
            &graph,
            &PlotConfig::default(),
            &NodeId::from("eve"),
            NODE_HIGHLIGHT,
        );
        assert_eq!(result, Err(LayoutError::UnknownNode { node: "eve".into() }));
    }

    #[test]
    fn edge_highlight_uses_the_override_style() {
        let graph = graph();
        let config = PlotConfig::new(LayoutFamily::Linear);
        let curves = highlight_edge(
            &graph,
            &config,
            &NodeId::from("bob"),
            &NodeId::from("cyd"),
            EDGE_HIGHLIGHT,
        )
        .unwrap();

        assert_eq!(curves.len(), 1);
        assert_eq!(curves[0].source.0, "bob");
        assert_eq!(curves[0].target.0, "cyd");
        assert_eq!(curves[0].style, EDGE_HIGHLIGHT);
        assert!(matches!(curves[0].kind, CurveKind::Arc(_)));

        // same geometry as the plot draws
        let scene = draw(&graph, &config).unwrap();
        let drawn = scene
            .curves
            .iter()
            .find(|c| c.source.0 == "bob" && c.target.0 == "cyd")
            .unwrap();
        assert_eq!(drawn.points, curves[0].points);
    }

    #[test]
    fn matrix_edge_marks_both_cells() {
        let graph = graph();
        let curves = highlight_edge(
            &graph,
            &PlotConfig::new(LayoutFamily::Grid),
            &NodeId::from("ann"),
            &NodeId::from("bob"),
            EDGE_HIGHLIGHT,
        )
        .unwrap();
        let cells: Vec<_> = curves.iter().map(|c| c.points[0]).collect();
        assert_eq!(cells, vec![Point::new(2.0, 4.0), Point::new(4.0, 2.0)]);
    }

    #[test]
    fn directed_edges_are_looked_up_one_way() {
        let mut graph = DiGraph::<NodeRecord, Attributes>::new();
        let a = graph.add_node(NodeRecord::new("a"));
        let b = graph.add_node(NodeRecord::new("b"));
        let c = graph.add_node(NodeRecord::new("c"));
        graph.add_edge(a, b, Attributes::new());
        graph.add_edge(b, c, Attributes::new());

        let config = PlotConfig::default();
        let (a, b) = (NodeId::from("a"), NodeId::from("b"));
        assert_eq!(
            highlight_edge(&graph, &config, &a, &b, EDGE_HIGHLIGHT)
                .unwrap()
                .len(),
            1
        );
        assert_eq!(
            highlight_edge(&graph, &config, &b, &a, EDGE_HIGHLIGHT),
            Err(LayoutError::UnknownEdge { from: b, to: a })
        );
    }
}
