//! Layout families and scene composition.
//!
//! A [`LayoutFamily`] names a kind of plot; [`LayoutFamily::strategy`] turns
//! it into the node layout, the optional second ("cloned") layout and the
//! edge geometry that together draw it. [`draw`] runs the whole pipeline on a
//! graph.

use crate::edges::{ArcEdges, CircosEdges, Curve, EdgeGeometry, HiveEdges, LineEdges, MatrixEdges};
use crate::engine::{LayoutEngine, PositionMap};
use crate::layouts::{
    Axis, CircularLayout, GeoLayout, HiveLayout, LinearLayout, MatrixLayout, ParallelLayout,
};
use crate::style::{EdgeEncoding, NodeEncoding, NodeStyle};
use crate::table::{EdgeTable, GraphSource, NodeId, NodeTable};
use crate::LayoutError;
use graph_encoding::EncodingConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::f64::consts::PI;
use tracing::debug;

/// Extra rotation of the cloned hive axes
pub const HIVE_CLONE_ROTATION: f64 = PI / 6.0;

/// Inner radius of hive axes in a plot
pub const HIVE_INNER_RADIUS: f64 = 8.0;

/// The kinds of plot, each a fixed pairing of node layout and edge geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutFamily {
    /// Circos plot: ring of nodes, edges bent through the center
    #[default]
    Circular,
    /// Arc diagram: row of nodes, half-circle edges
    Linear,
    /// Hive plot: nodes on up to three radial axes
    RadialAxis,
    /// Matrix plot: adjacency cells
    Grid,
    /// Parallel plot: one column per group, straight edges
    Parallel,
    /// Nodes at their own coordinates, straight edges
    Geographic,
}

/// The engines that draw one family
pub struct Strategy {
    pub layout: Box<dyn LayoutEngine + Send + Sync>,
    pub cloned: Option<Box<dyn LayoutEngine + Send + Sync>>,
    pub edges: Box<dyn EdgeGeometry + Send + Sync>,
}

impl LayoutFamily {
    pub const ALL: [LayoutFamily; 6] = [
        LayoutFamily::Circular,
        LayoutFamily::Linear,
        LayoutFamily::RadialAxis,
        LayoutFamily::Grid,
        LayoutFamily::Parallel,
        LayoutFamily::Geographic,
    ];

    /// Node radius multiplier used when the configuration does not set one
    pub fn default_size_scale(self) -> f64 {
        match self {
            LayoutFamily::RadialAxis | LayoutFamily::Parallel => 0.5,
            LayoutFamily::Geographic => 0.0015,
            LayoutFamily::Circular | LayoutFamily::Linear | LayoutFamily::Grid => 1.0,
        }
    }

    /// Whether the family needs `group_by`
    pub fn requires_groups(self) -> bool {
        matches!(self, LayoutFamily::RadialAxis | LayoutFamily::Parallel)
    }

    /// Build the engines for this family from `config`
    ///
    /// # Errors
    /// [`LayoutError::InvalidArgument`] when the family needs a `group_by` key
    /// and none is configured.
    pub fn strategy(self, config: &PlotConfig) -> Result<Strategy, LayoutError> {
        let group_by = config.group_by.as_deref();
        let sort_by = config.sort_by.as_deref();
        let required_group = || {
            group_by.ok_or_else(|| {
                LayoutError::InvalidArgument(format!("{self:?} plots need a group_by key"))
            })
        };

        let strategy = match self {
            LayoutFamily::Circular => Strategy {
                layout: Box::new(CircularLayout {
                    radius: config.radius,
                    ..CircularLayout::new(group_by, sort_by)
                }),
                cloned: None,
                edges: Box::new(CircosEdges),
            },
            LayoutFamily::Linear => Strategy {
                layout: Box::new(LinearLayout::new(group_by, sort_by)),
                cloned: None,
                edges: Box::new(ArcEdges),
            },
            LayoutFamily::RadialAxis => {
                let layout = HiveLayout {
                    inner_radius: config.inner_radius.unwrap_or(HIVE_INNER_RADIUS),
                    rotation: config.rotation,
                    ..HiveLayout::new(required_group()?, sort_by)
                };
                Strategy {
                    cloned: Some(Box::new(layout.rotated(HIVE_CLONE_ROTATION))),
                    layout: Box::new(layout),
                    edges: Box::new(HiveEdges {
                        curves: config.curves,
                    }),
                }
            }
            LayoutFamily::Grid => {
                let layout = MatrixLayout::new(group_by, sort_by);
                Strategy {
                    cloned: Some(Box::new(layout.on_axis(Axis::Y))),
                    layout: Box::new(layout),
                    edges: Box::new(MatrixEdges {
                        mirror: config.mirror,
                    }),
                }
            }
            LayoutFamily::Parallel => Strategy {
                layout: Box::new(ParallelLayout::new(required_group()?, sort_by)),
                cloned: None,
                edges: Box::new(LineEdges),
            },
            LayoutFamily::Geographic => Strategy {
                layout: Box::new(GeoLayout::default()),
                cloned: None,
                edges: Box::new(LineEdges),
            },
        };
        Ok(strategy)
    }
}

/// Everything that configures a plot
///
/// Every field has a default, so a configuration file only names what it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub family: LayoutFamily,
    pub group_by: Option<String>,
    pub sort_by: Option<String>,
    pub nodes: NodeEncoding,
    pub edges: EdgeEncoding,

    /// Circos ring radius, computed from the node count when unset
    pub radius: Option<f64>,

    /// Hive inner radius, [`HIVE_INNER_RADIUS`] when unset
    pub inner_radius: Option<f64>,

    /// Hive rotation in radians
    pub rotation: f64,

    /// Bend hive edges
    pub curves: bool,

    /// Draw transposed matrix cells too
    pub mirror: bool,

    pub encoding: EncodingConfig,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            family: LayoutFamily::default(),
            group_by: None,
            sort_by: None,
            nodes: NodeEncoding::default(),
            edges: EdgeEncoding::default(),
            radius: None,
            inner_radius: None,
            rotation: 0.0,
            curves: true,
            mirror: false,
            encoding: EncodingConfig::default(),
        }
    }
}

impl PlotConfig {
    pub fn new(family: LayoutFamily) -> Self {
        Self {
            family,
            ..Default::default()
        }
    }

    pub fn group_by(mut self, key: &str) -> Self {
        self.group_by = Some(key.to_string());
        self
    }

    pub fn sort_by(mut self, key: &str) -> Self {
        self.sort_by = Some(key.to_string());
        self
    }

    /// Node encodings with the family's size scale filled in
    pub fn node_encoding(&self) -> NodeEncoding {
        NodeEncoding {
            size_scale: Some(
                self.nodes
                    .size_scale
                    .unwrap_or_else(|| self.family.default_size_scale()),
            ),
            ..self.nodes.clone()
        }
    }
}

/// Everything a renderer needs to draw a plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub family: LayoutFamily,
    pub positions: PositionMap,
    /// Second placement of the nodes, for families that draw them twice
    pub cloned_positions: Option<PositionMap>,
    pub node_styles: HashMap<NodeId, NodeStyle>,
    pub curves: Vec<Curve>,
}

/// Lay out, encode and route the edges of `graph`
///
/// Tables are built fresh from the graph on every call; the graph itself is
/// never modified.
pub fn draw<G: GraphSource>(graph: &G, config: &PlotConfig) -> Result<Scene, LayoutError> {
    let nodes = NodeTable::from_graph(graph)?;
    let edges = EdgeTable::from_graph(graph)?;
    debug!(
        "Drawing {:?} plot of {} nodes and {} edge rows",
        config.family,
        nodes.len(),
        edges.len()
    );

    let strategy = config.family.strategy(config)?;
    let positions = strategy.layout.layout(&nodes)?;
    let cloned_positions = strategy
        .cloned
        .as_ref()
        .map(|layout| layout.layout(&nodes))
        .transpose()?;

    let node_styles = config.node_encoding().styles(&nodes, &config.encoding)?;
    let edge_styles = config.edges.styles(&edges, &node_styles, &config.encoding)?;
    let curves = strategy.edges.curves(
        &edges,
        &positions,
        cloned_positions.as_ref(),
        &edge_styles,
    )?;

    Ok(Scene {
        family: config.family,
        positions,
        cloned_positions,
        node_styles,
        curves,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::CurveKind;
    use crate::style::EdgeColorBy;
    use crate::table::NodeRecord;
    use graph_encoding::{Attributes, Color};
    use petgraph::graph::{DiGraph, UnGraph};
    use test_log::test;

    fn weight(w: f64) -> Attributes {
        [("weight".to_string(), w.into())].into_iter().collect()
    }

    /// Six cities in three regions, linked in a ring
    fn graph() -> UnGraph<NodeRecord, Attributes> {
        let mut graph = UnGraph::new_undirected();
        let cities = [
            ("oslo", "north", 10.7, 59.9),
            ("rome", "south", 12.5, 41.9),
            ("kyiv", "east", 30.5, 50.4),
            ("bergen", "north", 5.3, 60.4),
            ("naples", "south", 14.3, 40.9),
            ("kharkiv", "east", 36.2, 50.0),
        ];
        let ids: Vec<_> = cities
            .iter()
            .enumerate()
            .map(|(i, &(name, region, lon, lat))| {
                graph.add_node(
                    NodeRecord::new(name)
                        .with("region", region)
                        .with("rank", i as i64)
                        .with("longitude", lon)
                        .with("latitude", lat),
                )
            })
            .collect();
        for i in 0..ids.len() {
            graph.add_edge(ids[i], ids[(i + 1) % ids.len()], weight(i as f64 + 1.0));
        }
        graph
    }

    #[test]
    fn every_family_draws_every_node() {
        let graph = graph();
        for family in LayoutFamily::ALL {
            let config = PlotConfig::new(family).group_by("region").sort_by("rank");
            let scene = draw(&graph, &config).unwrap();

            assert_eq!(scene.family, family);
            assert_eq!(scene.positions.len(), 6, "{family:?}");
            assert_eq!(scene.node_styles.len(), 6, "{family:?}");
            assert!(scene.positions.values().all(|p| p.is_finite()));
            // undirected: one row per direction
            assert!(!scene.curves.is_empty() && scene.curves.len() <= 12, "{family:?}");
            assert_eq!(
                scene.cloned_positions.is_some(),
                matches!(family, LayoutFamily::RadialAxis | LayoutFamily::Grid)
            );
        }
    }

    #[test]
    fn family_defaults_apply() {
        let graph = graph();

        let config = PlotConfig::new(LayoutFamily::RadialAxis).group_by("region");
        let hive = draw(&graph, &config).unwrap();
        assert!(hive.node_styles.values().all(|s| s.radius == 0.5));
        let inner = hive
            .positions
            .values()
            .map(|p| p.to_polar().0)
            .fold(f64::INFINITY, f64::min);
        assert!((inner - HIVE_INNER_RADIUS).abs() < 1e-9);
        assert!(hive.curves.iter().all(|c| c.kind == CurveKind::Cubic));

        let geo = draw(&graph, &PlotConfig::new(LayoutFamily::Geographic)).unwrap();
        assert!(geo.node_styles.values().all(|s| s.radius == 0.0015));

        let mut explicit = PlotConfig::new(LayoutFamily::Geographic);
        explicit.nodes.size_scale = Some(2.0);
        let geo = draw(&graph, &explicit).unwrap();
        assert!(geo.node_styles.values().all(|s| s.radius == 2.0));

        let circos = draw(&graph, &PlotConfig::default()).unwrap();
        assert!(circos.node_styles.values().all(|s| *s == NodeStyle::default()));
    }

    #[test]
    fn hive_clone_is_rotated() {
        let graph = graph();
        let config = PlotConfig::new(LayoutFamily::RadialAxis).group_by("region");
        let scene = draw(&graph, &config).unwrap();
        let cloned = scene.cloned_positions.unwrap();
        for (id, p) in &scene.positions {
            let (_, a) = p.to_polar();
            let (_, b) = cloned[id].to_polar();
            let turn = (b - a).rem_euclid(2.0 * PI);
            assert!((turn - HIVE_CLONE_ROTATION).abs() < 1e-9, "{id}");
        }
    }

    #[test]
    fn grouped_families_need_a_group_key() {
        let graph = graph();
        for family in [LayoutFamily::RadialAxis, LayoutFamily::Parallel] {
            assert!(family.requires_groups());
            assert!(matches!(
                draw(&graph, &PlotConfig::new(family)),
                Err(LayoutError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn matrix_cells_are_symmetric_for_undirected_graphs() {
        let graph = graph();
        let scene = draw(&graph, &PlotConfig::new(LayoutFamily::Grid)).unwrap();
        let cells: Vec<_> = scene.curves.iter().map(|c| c.points[0]).collect();
        for cell in &cells {
            assert!(cells.iter().any(|other| other.x == cell.y && other.y == cell.x));
        }
    }

    #[test]
    fn edges_can_follow_node_colors() {
        let mut graph = DiGraph::<NodeRecord, Attributes>::new();
        let a = graph.add_node(NodeRecord::new("a").with("kind", "x"));
        let b = graph.add_node(NodeRecord::new("b").with("kind", "y"));
        let c = graph.add_node(NodeRecord::new("c").with("kind", "y"));
        graph.add_edge(a, b, weight(1.0));
        graph.add_edge(c, a, weight(1.0));

        let mut config = PlotConfig::default();
        config.nodes.color_by = Some("kind".to_string());
        config.edges.color_by = Some(EdgeColorBy::SourceNodeColor);
        let scene = draw(&graph, &config).unwrap();

        assert_eq!(scene.curves.len(), 2);
        for curve in &scene.curves {
            assert_eq!(curve.style.color, scene.node_styles[&curve.source].color);
        }
        assert_ne!(scene.curves[0].style.color, Color::BLACK);
    }

    #[test]
    fn config_loads_from_ron() {
        let config: PlotConfig = ron::from_str(
            r#"(
                family: radial_axis,
                group_by: Some("region"),
                curves: false,
                nodes: (color_by: Some("region"), alpha_scale: 0.5),
                edges: (lw_by: Some("weight"), alpha_scale: 5.0),
                encoding: (max_categories: 3),
            )"#,
        )
        .unwrap();
        assert_eq!(config.family, LayoutFamily::RadialAxis);
        assert_eq!(config.encoding.max_categories, 3);
        assert_eq!(config.encoding.ordinal_max_distinct, 9);

        let scene = draw(&graph(), &config).unwrap();
        assert!(scene.node_styles.values().all(|s| s.alpha == 0.5));
        assert!(scene.curves.iter().all(|c| c.kind == CurveKind::Straight));
        assert!(scene.curves.iter().all(|c| c.style.alpha == 0.5));
    }

    #[test]
    fn too_many_categories_surface_as_encoding_errors() {
        let mut config = PlotConfig::default();
        config.nodes.color_by = Some("region".to_string());
        config.encoding.max_categories = 2;
        assert!(matches!(draw(&graph(), &config), Err(LayoutError::Encoding(_))));
    }

    #[test]
    fn public_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PlotConfig>();
        assert_send_sync::<Scene>();
        assert_send_sync::<Strategy>();
        assert_send_sync::<LayoutError>();
        assert_send_sync::<NodeTable>();
        assert_send_sync::<EdgeTable>();
    }
}
