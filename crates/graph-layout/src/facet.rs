//! Facets: subsets of a graph's tables, one small plot each.
//!
//! Every facet keeps the tables' row order, so laying out a facet gives the
//! same relative placement as laying out the whole graph.

use crate::group::groups;
use crate::table::{EdgeTable, NodeTable};
use crate::LayoutError;
use graph_encoding::AttrValue;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Past this many groups, hive triplets multiply quickly
pub const MAX_COMFORTABLE_HIVE_GROUPS: usize = 6;

/// The rows of one facet and the group values that select them
#[derive(Debug, Clone, PartialEq)]
pub struct Facet {
    pub groups: Vec<AttrValue>,
    pub nodes: NodeTable,
    pub edges: EdgeTable,
}

/// Every combination of three node groups, for hive plots
///
/// Each facet holds the nodes of its three groups and the edges between
/// them. Combinations follow the sorted group order; fewer than three
/// groups give no facet.
pub fn hive_triplets(
    nodes: &NodeTable,
    edges: &EdgeTable,
    group_by: &str,
) -> Result<Vec<Facet>, LayoutError> {
    let values = groups(nodes, group_by)?;
    if values.len() > MAX_COMFORTABLE_HIVE_GROUPS {
        warn!(
            "{} groups of {group_by:?} make {} hive facets",
            values.len(),
            triplet_count(values.len())
        );
    }

    let mut facets = Vec::with_capacity(triplet_count(values.len()));
    for i in 0..values.len() {
        for j in i + 1..values.len() {
            for k in j + 1..values.len() {
                let wanted = [&values[i], &values[j], &values[k]];
                let mut kept = Vec::new();
                for (row, node) in nodes.iter().enumerate() {
                    if wanted.contains(&node.attr(group_by)?) {
                        kept.push(row);
                    }
                }
                let subset = nodes.reordered(kept);
                let ids: HashSet<_> = subset.iter().map(|node| &node.id).collect();
                let edges =
                    edges.filtered(|edge| ids.contains(&edge.source) && ids.contains(&edge.target));
                facets.push(Facet {
                    groups: wanted.into_iter().cloned().collect(),
                    nodes: subset,
                    edges,
                });
            }
        }
    }
    debug!("Made {} hive facets from {} groups", facets.len(), values.len());
    Ok(facets)
}

/// One facet per value of the edge attribute `group_by`
///
/// Each facet keeps every node and only the edges of its group.
pub fn edge_group(
    nodes: &NodeTable,
    edges: &EdgeTable,
    group_by: &str,
) -> Result<Vec<Facet>, LayoutError> {
    let values = edges.column(group_by)?.distinct();
    debug!("Faceting {} edges into {} groups", edges.len(), values.len());
    Ok(values
        .into_iter()
        .map(|value| Facet {
            edges: edges.filtered(|edge| edge.attrs.get(group_by) == Some(&value)),
            nodes: nodes.clone(),
            groups: vec![value],
        })
        .collect())
}

/// One facet per value of the node attribute `group_by`
///
/// Each facet keeps every node and the edges touching a node of its group.
pub fn node_group_edges(
    nodes: &NodeTable,
    edges: &EdgeTable,
    group_by: &str,
) -> Result<Vec<Facet>, LayoutError> {
    let values = groups(nodes, group_by)?;
    let mut facets = Vec::with_capacity(values.len());
    for value in values {
        let mut members = HashSet::new();
        for node in nodes.iter() {
            if node.attr(group_by)? == &value {
                members.insert(&node.id);
            }
        }
        let edges = edges
            .filtered(|edge| members.contains(&edge.source) || members.contains(&edge.target));
        facets.push(Facet {
            groups: vec![value],
            nodes: nodes.clone(),
            edges,
        });
    }
    Ok(facets)
}

/// The squarest grid with room for `count` facets, as `(rows, columns)`
pub fn n_rows_cols(count: usize) -> (usize, usize) {
    let side = (count as f64).sqrt().ceil() as usize;
    (side, side)
}

fn triplet_count(n: usize) -> usize {
    if n < 3 {
        0
    } else {
        n * (n - 1) * (n - 2) / 6
    }
}
