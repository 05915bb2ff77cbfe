use crate::table::{NodeRecord, NodeTable};
use crate::LayoutError;
use graph_encoding::AttrValue;
use std::collections::BTreeMap;

/// Order a node table by group, then by sort key
///
/// The sort is stable: rows with equal keys keep their relative order. A key
/// missing from any row is an error. The input table is left untouched.
pub fn group_and_sort(
    table: &NodeTable,
    group_by: Option<&str>,
    sort_by: Option<&str>,
) -> Result<NodeTable, LayoutError> {
    let keys: Vec<&str> = group_by.into_iter().chain(sort_by).collect();
    if keys.is_empty() {
        return Ok(table.clone());
    }

    let mut decorated = table
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let values = keys
                .iter()
                .map(|key| row.attr(key).cloned())
                .collect::<Result<Vec<_>, _>>()?;
            Ok((values, i))
        })
        .collect::<Result<Vec<_>, LayoutError>>()?;
    decorated.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(table.reordered(decorated.into_iter().map(|(_, i)| i)))
}

/// Sorted distinct values of `key`
pub fn groups(table: &NodeTable, key: &str) -> Result<Vec<AttrValue>, LayoutError> {
    Ok(table.column(key)?.distinct())
}

/// Rows of each group, groups in sorted order, rows in table order
pub fn partition<'a>(
    table: &'a NodeTable,
    key: &str,
) -> Result<Vec<(AttrValue, Vec<&'a NodeRecord>)>, LayoutError> {
    let mut parts: BTreeMap<AttrValue, Vec<&NodeRecord>> = BTreeMap::new();
    for row in table.iter() {
        parts.entry(row.attr(key)?.clone()).or_default().push(row);
    }
    Ok(parts.into_iter().collect())
}
