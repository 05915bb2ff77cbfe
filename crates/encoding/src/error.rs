use thiserror::Error;

/// Errors that can occur while mapping data onto visual properties
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodingError {
    /// Too many distinct values for an automatic qualitative palette
    #[error(
        "column {column:?} has {count} categories but at most {max} can be colored \
         automatically; supply an explicit palette"
    )]
    TooManyCategories {
        column: String,
        count: usize,
        max: usize,
    },

    /// An explicit palette list has fewer colors than distinct values
    #[error("palette for column {column:?} has {available} colors but {needed} are needed")]
    PaletteTooShort {
        column: String,
        needed: usize,
        available: usize,
    },

    /// An explicit palette map has no entry for a value of the column
    #[error("palette for column {column:?} has no color for value {value}")]
    MissingPaletteEntry { column: String, value: String },

    /// A numeric encoding was requested on a non-numeric column
    #[error("column {column:?} must be numeric, found a {kind} value")]
    NotNumeric { column: String, kind: String },

    /// Size or line width requested for a negative value
    #[error("column {column:?} contains the negative value {value}")]
    NegativeValue { column: String, value: f64 },
}
