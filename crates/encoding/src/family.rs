use crate::value::{AttrKind, Column};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer columns with at most this many distinct values are ordinal
pub const ORDINAL_MAX_DISTINCT: usize = 9;

/// Classification of a data column, driving colormap and normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFamily {
    Categorical,
    Ordinal,
    Continuous,
    Divergent,
}

impl fmt::Display for DataFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataFamily::Categorical => "categorical",
            DataFamily::Ordinal => "ordinal",
            DataFamily::Continuous => "continuous",
            DataFamily::Divergent => "divergent",
        };
        f.write_str(name)
    }
}

/// Infer the data family of a column using the default ordinal threshold
pub fn infer_data_family(column: &Column) -> DataFamily {
    infer_data_family_with(column, ORDINAL_MAX_DISTINCT)
}

/// Infer the data family of a column
///
/// - floats spanning both signs: divergent, other floats: continuous
/// - integers with at most `ordinal_max_distinct` distinct values: ordinal,
///   other integers: continuous
/// - everything else (strings, booleans, mixed or empty columns): categorical
pub fn infer_data_family_with(column: &Column, ordinal_max_distinct: usize) -> DataFamily {
    match column.kind() {
        Some(AttrKind::Float) => match column.numeric_range() {
            Some((min, max)) if min < 0.0 && max > 0.0 => DataFamily::Divergent,
            _ => DataFamily::Continuous,
        },
        Some(AttrKind::Int) => {
            if column.distinct().len() <= ordinal_max_distinct {
                DataFamily::Ordinal
            } else {
                DataFamily::Continuous
            }
        }
        _ => DataFamily::Categorical,
    }
}
