//! Visual encodings for graph attributes
//!
//! This crate classifies attribute columns into a [`DataFamily`] and maps
//! their values onto colors, sizes, transparencies and line widths. Every
//! function is pure: palettes and thresholds come from an explicit
//! [`EncodingConfig`] rather than global tables.
//!
//! # Example
//!
//! ```
//! use graph_encoding::{color_for, size_for, Column, DataFamily, EncodingConfig};
//!
//! let degree = Column::new("degree", vec![1.into(), 4.into(), 9.into()]);
//! let mapper = color_for(&degree, None, &EncodingConfig::default()).unwrap();
//! assert_eq!(mapper.family(), DataFamily::Ordinal);
//!
//! let sizes = size_for(&degree, 1.0).unwrap();
//! assert_eq!(sizes, vec![1.0, 2.0, 3.0]);
//! ```

mod color;
mod encode;
mod error;
mod family;
mod value;

pub use color::{set3, Color, Colormap};
pub use encode::{
    alpha_for, color_for, linewidth_for, size_for, ColorMapper, EncodingConfig, Legend, Palette,
    DEFAULT_ALPHA, MAX_CATEGORIES,
};
pub use error::EncodingError;
pub use family::{infer_data_family, infer_data_family_with, DataFamily, ORDINAL_MAX_DISTINCT};
pub use value::{AttrKind, AttrValue, Attributes, Column};
