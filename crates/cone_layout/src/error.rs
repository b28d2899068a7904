//! Layout error types

use std::fmt;

use cone_core::EdgeInsets;
use thiserror::Error;

/// Which spacing value failed validation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpacingKind {
    /// Horizontal gap between columns
    Column,
    /// Vertical gap between items in the same column
    Item,
}

impl fmt::Display for SpacingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpacingKind::Column => f.write_str("column"),
            SpacingKind::Item => f.write_str("item"),
        }
    }
}

/// Configuration errors raised while computing a layout
///
/// Every variant is fatal to a single computation. No partial layout is
/// produced; fix the configuration and compute again.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// A section asked for zero columns
    #[error("Section {section}: column count must be at least 1")]
    ZeroColumnCount { section: usize },

    /// Insets and spacing leave no room for a column, or the pixel scale
    /// pushed it past `f32` range
    #[error("Section {section}: computed column width {width} is not a positive finite value")]
    NonPositiveColumnWidth { section: usize, width: f32 },

    #[error("Section {section}: {kind} spacing must not be negative (got {value})")]
    NegativeSpacing {
        section: usize,
        kind: SpacingKind,
        value: f32,
    },

    #[error("Section {section}: insets must not be negative ({insets:?})")]
    NegativeInset { section: usize, insets: EdgeInsets },

    /// NaN or infinite value in a section's configuration
    #[error("Section {section}: {field} must be finite")]
    NonFiniteValue { section: usize, field: &'static str },

    #[error("Container width must be finite and non-negative (got {0})")]
    InvalidContainerWidth(f32),

    #[error("Chunk size must be at least 1 (got {0})")]
    InvalidChunkSize(usize),

    #[error("Pixel scale must be finite and positive (got {0})")]
    InvalidScale(f32),

    /// Configuration file could not be parsed
    #[error("Invalid layout configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be written out
    #[error("Failed to serialize layout configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl LayoutError {
    /// Section the error belongs to, if it is section-specific
    pub fn section(&self) -> Option<usize> {
        match self {
            LayoutError::ZeroColumnCount { section }
            | LayoutError::NonPositiveColumnWidth { section, .. }
            | LayoutError::NegativeSpacing { section, .. }
            | LayoutError::NegativeInset { section, .. }
            | LayoutError::NonFiniteValue { section, .. } => Some(*section),
            _ => None,
        }
    }
}

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;
