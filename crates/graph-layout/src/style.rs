//! Per-node and per-edge visual styles.
//!
//! Styles turn the `*_by` attribute keys of a plot into concrete colors,
//! radii, widths and transparencies using the encoders of `graph_encoding`.

use crate::table::{EdgeTable, NodeId, NodeTable};
use crate::LayoutError;
use graph_encoding::{
    alpha_for, color_for, linewidth_for, size_for, Color, EncodingConfig, Palette, DEFAULT_ALPHA,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// How a node glyph is drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeStyle {
    pub color: Color,
    pub radius: f64,
    pub alpha: f64,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLUE,
            radius: 1.0,
            alpha: 1.0,
        }
    }
}

/// How an edge curve is stroked
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
    pub color: Color,
    pub width: f64,
    pub alpha: f64,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            alpha: DEFAULT_ALPHA,
        }
    }
}

/// Node encodings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeEncoding {
    pub color_by: Option<String>,
    pub size_by: Option<String>,
    pub alpha_by: Option<String>,

    /// Values mapped to fully transparent and fully opaque, instead of the
    /// column's own range
    pub alpha_bounds: Option<(f64, f64)>,

    /// Radius multiplier; 1 when unset, or the family default in a plot
    pub size_scale: Option<f64>,
    pub alpha_scale: f64,

    /// Explicit colors for `color_by`
    pub palette: Option<Palette>,
}

impl Default for NodeEncoding {
    fn default() -> Self {
        Self {
            color_by: None,
            size_by: None,
            alpha_by: None,
            alpha_bounds: None,
            size_scale: None,
            alpha_scale: 1.0,
            palette: None,
        }
    }
}

impl NodeEncoding {
    /// The style of every node of `table`
    ///
    /// Without a key, nodes are blue, of radius `size_scale` and opaque. The
    /// final alpha is clamped to `[0, 1]` after scaling.
    pub fn styles(
        &self,
        table: &NodeTable,
        config: &EncodingConfig,
    ) -> Result<HashMap<NodeId, NodeStyle>, LayoutError> {
        let n = table.len();
        let size_scale = self.size_scale.unwrap_or(1.0);

        let colors = match &self.color_by {
            Some(key) => {
                let column = table.column(key)?;
                color_for(&column, self.palette.as_ref(), config)?.colors(&column)?
            }
            None => vec![Color::BLUE; n],
        };
        let radii = match &self.size_by {
            Some(key) => size_for(&table.column(key)?, size_scale)?,
            None => vec![size_scale; n],
        };
        let alphas = match &self.alpha_by {
            Some(key) => alpha_for(Some(&table.column(key)?), self.alpha_bounds, n)?,
            None => vec![1.0; n],
        };
        debug!(
            "Encoded {n} nodes (color: {:?}, size: {:?}, alpha: {:?})",
            self.color_by, self.size_by, self.alpha_by
        );

        Ok(table
            .iter()
            .zip(colors)
            .zip(radii)
            .zip(alphas)
            .map(|(((row, color), radius), alpha)| {
                let style = NodeStyle {
                    color,
                    radius,
                    alpha: (alpha * self.alpha_scale).clamp(0.0, 1.0),
                };
                (row.id.clone(), style)
            })
            .collect())
    }
}

/// What decides the color of an edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeColorBy {
    /// An edge attribute, encoded like a node attribute
    Attribute(String),
    /// The color of the source node
    SourceNodeColor,
    /// The color of the target node
    TargetNodeColor,
}

/// Edge encodings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeEncoding {
    pub color_by: Option<EdgeColorBy>,
    pub lw_by: Option<String>,
    pub alpha_by: Option<String>,
    pub lw_scale: f64,
    pub alpha_scale: f64,
    pub palette: Option<Palette>,
}

impl Default for EdgeEncoding {
    fn default() -> Self {
        Self {
            color_by: None,
            lw_by: None,
            alpha_by: None,
            lw_scale: 1.0,
            alpha_scale: 1.0,
            palette: None,
        }
    }
}

impl EdgeEncoding {
    /// The style of every edge, parallel to `edges`
    ///
    /// `nodes` supplies the colors for [`EdgeColorBy::SourceNodeColor`] and
    /// [`EdgeColorBy::TargetNodeColor`]. Without a key, edges are black, of
    /// width `lw_scale` and alpha `0.1 · alpha_scale`.
    pub fn styles(
        &self,
        edges: &EdgeTable,
        nodes: &HashMap<NodeId, NodeStyle>,
        config: &EncodingConfig,
    ) -> Result<Vec<EdgeStyle>, LayoutError> {
        let n = edges.len();

        let node_color = |node: &NodeId| {
            nodes
                .get(node)
                .map(|style| style.color)
                .ok_or_else(|| LayoutError::UnknownNode { node: node.clone() })
        };
        let colors = match &self.color_by {
            Some(EdgeColorBy::Attribute(key)) => {
                let column = edges.column(key)?;
                color_for(&column, self.palette.as_ref(), config)?.colors(&column)?
            }
            Some(EdgeColorBy::SourceNodeColor) => edges
                .iter()
                .map(|edge| node_color(&edge.source))
                .collect::<Result<Vec<_>, LayoutError>>()?,
            Some(EdgeColorBy::TargetNodeColor) => edges
                .iter()
                .map(|edge| node_color(&edge.target))
                .collect::<Result<Vec<_>, LayoutError>>()?,
            None => vec![Color::BLACK; n],
        };
        let widths = match &self.lw_by {
            Some(key) => linewidth_for(&edges.column(key)?, self.lw_scale)?,
            None => vec![self.lw_scale; n],
        };
        let alpha_column = self.alpha_by.as_deref().map(|key| edges.column(key)).transpose()?;
        let alphas = alpha_for(alpha_column.as_ref(), None, n)?;
        debug!(
            "Encoded {n} edges (color: {:?}, width: {:?}, alpha: {:?})",
            self.color_by, self.lw_by, self.alpha_by
        );

        Ok(colors
            .into_iter()
            .zip(widths)
            .zip(alphas)
            .map(|((color, width), alpha)| EdgeStyle {
                color,
                width,
                alpha: (alpha * self.alpha_scale).clamp(0.0, 1.0),
            })
            .collect())
    }
}
