use crate::color::{set3, Color, Colormap};
use crate::family::{infer_data_family_with, DataFamily, ORDINAL_MAX_DISTINCT};
use crate::value::{AttrValue, Column};
use crate::EncodingError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Alpha used when no column drives transparency
pub const DEFAULT_ALPHA: f64 = 0.1;

/// Default number of categories a qualitative palette can tell apart
pub const MAX_CATEGORIES: usize = 12;

/// Palettes and thresholds used by [`color_for`]
///
/// The thresholds are policy rather than derived invariants and can be tuned
/// per call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodingConfig {
    /// Qualitative palette for categorical data
    pub qualitative: Vec<Color>,

    /// Colormap for ordinal and continuous data
    pub sequential: Colormap,

    /// Colormap for divergent data, centered on zero
    pub divergent: Colormap,

    /// Maximum number of categories colored without an explicit palette
    pub max_categories: usize,

    /// Integer columns with at most this many distinct values are ordinal
    pub ordinal_max_distinct: usize,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            qualitative: set3(),
            sequential: Colormap::viridis(),
            divergent: Colormap::bwr(),
            max_categories: MAX_CATEGORIES,
            ordinal_max_distinct: ORDINAL_MAX_DISTINCT,
        }
    }
}

impl EncodingConfig {
    pub fn infer_family(&self, column: &Column) -> DataFamily {
        infer_data_family_with(column, self.ordinal_max_distinct)
    }
}

/// A caller-supplied palette that bypasses the category cap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// Colors assigned to the sorted distinct values, in order
    List(Vec<Color>),
    /// Explicit value to color assignment
    Map(BTreeMap<AttrValue, Color>),
}

/// Key to a color encoding, for a renderer to draw next to the plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Legend {
    /// One swatch per distinct value, in sorted order
    Swatches(Vec<(AttrValue, Color)>),
    /// A color bar running from `min` to `max`
    Colorbar { cmap: Colormap, min: f64, max: f64 },
}

#[derive(Debug, Clone, PartialEq)]
enum Scheme {
    Discrete(BTreeMap<AttrValue, Color>),
    Sequential { cmap: Colormap, min: f64, max: f64 },
    Diverging { cmap: Colormap, bound: f64 },
}

/// Maps values of one column to colors
///
/// Built from reference data by [`color_for`]; the reference fixes the
/// normalization bounds and category order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMapper {
    column: String,
    family: DataFamily,
    scheme: Scheme,
}

impl ColorMapper {
    pub fn family(&self) -> DataFamily {
        self.family
    }

    /// Color of a single value
    pub fn color(&self, value: &AttrValue) -> Result<Color, EncodingError> {
        match &self.scheme {
            Scheme::Discrete(colors) => {
                colors
                    .get(value)
                    .copied()
                    .ok_or_else(|| EncodingError::MissingPaletteEntry {
                        column: self.column.clone(),
                        value: value.to_string(),
                    })
            }
            Scheme::Sequential { cmap, min, max } => {
                let v = self.numeric(value)?;
                let t = if max > min { (v - min) / (max - min) } else { 0.0 };
                Ok(cmap.sample(t))
            }
            Scheme::Diverging { cmap, bound } => {
                let v = self.numeric(value)?;
                let t = if *bound > 0.0 { (v + bound) / (2.0 * bound) } else { 0.5 };
                Ok(cmap.sample(t))
            }
        }
    }

    /// Colors of every value of `data`, in order
    pub fn colors(&self, data: &Column) -> Result<Vec<Color>, EncodingError> {
        data.values.iter().map(|v| self.color(v)).collect()
    }

    /// The legend for `data`
    ///
    /// Continuous and divergent data get a color bar over the mapper's
    /// normalization range; categorical and ordinal data get a swatch for
    /// each distinct value of `data`.
    pub fn legend(&self, data: &Column) -> Result<Legend, EncodingError> {
        let (cmap, min, max) = match &self.scheme {
            Scheme::Sequential { cmap, min, max } if self.family == DataFamily::Continuous => {
                (cmap, *min, *max)
            }
            Scheme::Diverging { cmap, bound } => (cmap, -bound, *bound),
            _ => {
                let swatches = data
                    .distinct()
                    .into_iter()
                    .map(|value| {
                        let color = self.color(&value)?;
                        Ok((value, color))
                    })
                    .collect::<Result<Vec<_>, EncodingError>>()?;
                return Ok(Legend::Swatches(swatches));
            }
        };
        Ok(Legend::Colorbar {
            cmap: cmap.clone(),
            min,
            max,
        })
    }

    fn numeric(&self, value: &AttrValue) -> Result<f64, EncodingError> {
        value.as_f64().ok_or_else(|| EncodingError::NotNumeric {
            column: self.column.clone(),
            kind: value.kind().to_string(),
        })
    }
}

/// Build the color mapping for a reference column
///
/// An explicit `palette` always produces a discrete mapping, reclassifying the
/// column as categorical.
pub fn color_for(
    column: &Column,
    palette: Option<&Palette>,
    config: &EncodingConfig,
) -> Result<ColorMapper, EncodingError> {
    if let Some(palette) = palette {
        return Ok(ColorMapper {
            column: column.name.clone(),
            family: DataFamily::Categorical,
            scheme: Scheme::Discrete(explicit_colors(column, palette)?),
        });
    }

    let family = config.infer_family(column);
    debug!("Column {:?} inferred as {family}", column.name);

    let scheme = match family {
        DataFamily::Categorical => {
            let categories = column.distinct();
            let max = config.max_categories.min(config.qualitative.len());
            if categories.len() > max {
                return Err(EncodingError::TooManyCategories {
                    column: column.name.clone(),
                    count: categories.len(),
                    max,
                });
            }
            let colors = config.qualitative.iter().copied();
            Scheme::Discrete(categories.into_iter().zip(colors).collect())
        }
        DataFamily::Ordinal | DataFamily::Continuous => {
            let (min, max) = numeric_range(column)?;
            Scheme::Sequential {
                cmap: config.sequential.clone(),
                min,
                max,
            }
        }
        DataFamily::Divergent => {
            let (min, max) = numeric_range(column)?;
            Scheme::Diverging {
                cmap: config.divergent.clone(),
                bound: min.abs().max(max.abs()),
            }
        }
    };

    Ok(ColorMapper {
        column: column.name.clone(),
        family,
        scheme,
    })
}

fn explicit_colors(
    column: &Column,
    palette: &Palette,
) -> Result<BTreeMap<AttrValue, Color>, EncodingError> {
    match palette {
        Palette::List(colors) => {
            let categories = column.distinct();
            if colors.len() < categories.len() {
                return Err(EncodingError::PaletteTooShort {
                    column: column.name.clone(),
                    needed: categories.len(),
                    available: colors.len(),
                });
            }
            Ok(categories.into_iter().zip(colors.iter().copied()).collect())
        }
        Palette::Map(colors) => {
            if let Some(missing) = column.values.iter().find(|v| !colors.contains_key(*v)) {
                return Err(EncodingError::MissingPaletteEntry {
                    column: column.name.clone(),
                    value: missing.to_string(),
                });
            }
            Ok(colors.clone())
        }
    }
}

/// Node sizes: square root of the value, then multiplied by `scale`
pub fn size_for(column: &Column, scale: f64) -> Result<Vec<f64>, EncodingError> {
    Ok(non_negative(column)?
        .into_iter()
        .map(|v| v.sqrt() * scale)
        .collect())
}

/// Line widths: linear in the value, multiplied by `scale`
pub fn linewidth_for(column: &Column, scale: f64) -> Result<Vec<f64>, EncodingError> {
    Ok(non_negative(column)?.into_iter().map(|v| v * scale).collect())
}

/// Transparency in `[0, 1]`
///
/// The column is normalized linearly by its own range, or by `bounds` when
/// given. Without a column every one of the `len` elements gets
/// [`DEFAULT_ALPHA`].
pub fn alpha_for(
    column: Option<&Column>,
    bounds: Option<(f64, f64)>,
    len: usize,
) -> Result<Vec<f64>, EncodingError> {
    let Some(column) = column else {
        return Ok(vec![DEFAULT_ALPHA; len]);
    };
    let values = numeric_values(column)?;
    let Some((lo, hi)) = bounds.or_else(|| column.numeric_range()) else {
        return Ok(Vec::new());
    };
    Ok(values
        .into_iter()
        .map(|v| {
            if hi > lo {
                ((v - lo) / (hi - lo)).clamp(0.0, 1.0)
            } else {
                0.0
            }
        })
        .collect())
}

fn numeric_values(column: &Column) -> Result<Vec<f64>, EncodingError> {
    column
        .values
        .iter()
        .map(|v| {
            v.as_f64().ok_or_else(|| EncodingError::NotNumeric {
                column: column.name.clone(),
                kind: v.kind().to_string(),
            })
        })
        .collect()
}

fn numeric_range(column: &Column) -> Result<(f64, f64), EncodingError> {
    let values = numeric_values(column)?;
    Ok(values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        }))
}

fn non_negative(column: &Column) -> Result<Vec<f64>, EncodingError> {
    let values = numeric_values(column)?;
    if let Some(&value) = values.iter().find(|v| **v < 0.0) {
        return Err(EncodingError::NegativeValue {
            column: column.name.clone(),
            value,
        });
    }
    Ok(values)
}
