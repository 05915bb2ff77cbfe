use crate::engine::{LayoutEngine, PositionMap};
use crate::table::NodeTable;
use crate::{LayoutError, Point};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Geographic layout: nodes carry their own coordinates
///
/// `x` is the longitude attribute and `y` the latitude attribute, unprojected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoLayout {
    pub longitude: String,
    pub latitude: String,
}

impl Default for GeoLayout {
    fn default() -> Self {
        Self {
            longitude: "longitude".to_string(),
            latitude: "latitude".to_string(),
        }
    }
}

impl LayoutEngine for GeoLayout {
    fn layout(&self, table: &NodeTable) -> Result<PositionMap, LayoutError> {
        debug!(
            "Geographic layout of {} nodes from ({}, {})",
            table.len(),
            self.longitude,
            self.latitude
        );

        table
            .iter()
            .map(|row| {
                let coord = |key: &str| -> Result<f64, LayoutError> {
                    let value = row.attr(key)?.as_f64().ok_or_else(|| LayoutError::NotNumeric {
                        node: row.id.clone(),
                        key: key.to_string(),
                    })?;
                    if !value.is_finite() {
                        return Err(LayoutError::NonFinite {
                            node: row.id.clone(),
                            key: key.to_string(),
                        });
                    }
                    Ok(value)
                };
                let point = Point::new(coord(&self.longitude)?, coord(&self.latitude)?);
                Ok::<_, LayoutError>((row.id.clone(), point))
            })
            .collect()
    }
}
