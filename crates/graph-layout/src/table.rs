//! Node and edge tables, and the boundary to the graph that supplies them.

use crate::LayoutError;
use derive_more::{Display, From};
use graph_encoding::{AttrKind, AttrValue, Attributes, Column};
use petgraph::graph::{Graph, IndexType};
use petgraph::visit::EdgeRef;
use petgraph::EdgeType;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Identifier of a node
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

/// One row of a [`NodeTable`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    #[serde(default)]
    pub attrs: Attributes,
}

impl NodeRecord {
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            attrs: Attributes::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Value of `key`, or [`LayoutError::MissingAttribute`]
    pub fn attr(&self, key: &str) -> Result<&AttrValue, LayoutError> {
        self.attrs
            .get(key)
            .ok_or_else(|| LayoutError::MissingAttribute {
                node: self.id.clone(),
                key: key.to_string(),
            })
    }
}

/// One row of an [`EdgeTable`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub target: NodeId,
    #[serde(default)]
    pub attrs: Attributes,
}

impl EdgeRecord {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            attrs: Attributes::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }
}

/// A graph that can hand out its nodes and edges as records
///
/// The tables never mutate the graph; they copy what they need.
pub trait GraphSource {
    fn is_directed(&self) -> bool;

    /// Nodes in storage order
    fn node_records(&self) -> Vec<NodeRecord>;

    /// Edges in storage order, one record per stored edge
    fn edge_records(&self) -> Vec<EdgeRecord>;
}

impl<Ty, Ix> GraphSource for Graph<NodeRecord, Attributes, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    fn is_directed(&self) -> bool {
        Graph::is_directed(self)
    }

    fn node_records(&self) -> Vec<NodeRecord> {
        self.node_weights().cloned().collect()
    }

    fn edge_records(&self) -> Vec<EdgeRecord> {
        self.edge_references()
            .map(|edge| EdgeRecord {
                source: self[edge.source()].id.clone(),
                target: self[edge.target()].id.clone(),
                attrs: edge.weight().clone(),
            })
            .collect()
    }
}

/// Rows of nodes; row order is drawing order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeTable {
    rows: Vec<NodeRecord>,
}

impl NodeTable {
    /// Build a table, checking ids are unique and attributes are homogeneous
    pub fn new(rows: Vec<NodeRecord>) -> Result<Self, LayoutError> {
        let mut seen = HashSet::new();
        for row in &rows {
            if !seen.insert(&row.id) {
                return Err(LayoutError::DuplicateNode {
                    node: row.id.clone(),
                });
            }
        }
        check_homogeneous(rows.iter().map(|row| &row.attrs))?;
        Ok(Self { rows })
    }

    pub fn from_graph<G: GraphSource>(graph: &G) -> Result<Self, LayoutError> {
        Self::new(graph.node_records())
    }

    pub fn rows(&self) -> &[NodeRecord] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeRecord> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ids(&self) -> Vec<NodeId> {
        self.rows.iter().map(|row| row.id.clone()).collect()
    }

    /// The values of `key` for every row, in row order
    pub fn column(&self, key: &str) -> Result<Column, LayoutError> {
        let values = self
            .rows
            .iter()
            .map(|row| row.attr(key).cloned())
            .collect::<Result<_, _>>()?;
        Ok(Column::new(key, values))
    }

    /// A new table holding the rows at `order`; the rows stay validated
    pub(crate) fn reordered(&self, order: impl IntoIterator<Item = usize>) -> Self {
        Self {
            rows: order.into_iter().map(|i| self.rows[i].clone()).collect(),
        }
    }
}

/// Rows of edges with `source` and `target` node ids
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EdgeTable {
    rows: Vec<EdgeRecord>,
}

impl EdgeTable {
    pub fn new(rows: Vec<EdgeRecord>) -> Result<Self, LayoutError> {
        check_homogeneous(rows.iter().map(|row| &row.attrs))?;
        Ok(Self { rows })
    }

    /// Build the edge table of a graph
    ///
    /// Undirected edges produce one row per direction so that every edge can
    /// be resolved from either endpoint.
    pub fn from_graph<G: GraphSource>(graph: &G) -> Result<Self, LayoutError> {
        let directed = graph.is_directed();
        let mut rows = Vec::new();
        for edge in graph.edge_records() {
            let reversed = (!directed).then(|| EdgeRecord {
                source: edge.target.clone(),
                target: edge.source.clone(),
                attrs: edge.attrs.clone(),
            });
            rows.push(edge);
            rows.extend(reversed);
        }
        Self::new(rows)
    }

    pub fn rows(&self) -> &[EdgeRecord] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &EdgeRecord> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// A new table holding the rows that pass `keep`, in row order
    pub(crate) fn filtered(&self, keep: impl Fn(&EdgeRecord) -> bool) -> Self {
        Self {
            rows: self.rows.iter().filter(|row| keep(row)).cloned().collect(),
        }
    }

    /// The values of `key` for every edge, in row order
    pub fn column(&self, key: &str) -> Result<Column, LayoutError> {
        let values = self
            .rows
            .iter()
            .map(|row| {
                row.attrs
                    .get(key)
                    .cloned()
                    .ok_or_else(|| LayoutError::MissingEdgeAttribute {
                        from: row.source.clone(),
                        to: row.target.clone(),
                        key: key.to_string(),
                    })
            })
            .collect::<Result<_, _>>()?;
        Ok(Column::new(key, values))
    }
}

fn check_homogeneous<'a>(
    attrs: impl Iterator<Item = &'a Attributes>,
) -> Result<(), LayoutError> {
    let mut kinds: BTreeMap<&str, AttrKind> = BTreeMap::new();
    for map in attrs {
        for (key, value) in map {
            let kind = value.kind();
            let first = *kinds.entry(key.as_str()).or_insert(kind);
            if first != kind {
                return Err(LayoutError::HeterogeneousAttribute {
                    key: key.clone(),
                    first: first.to_string(),
                    second: kind.to_string(),
                });
            }
        }
    }
    Ok(())
}
