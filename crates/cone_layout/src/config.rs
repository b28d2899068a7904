//! Layout configuration
//!
//! `LayoutConfig` holds the engine-wide settings and the default
//! `SectionConfig` applied to any section a provider does not override.
//! Both deserialize from TOML with every field optional:
//!
//! ```toml
//! chunk_size = 32
//! scale = 2.0
//! inset_reference = "safe_area"
//!
//! [defaults]
//! column_count = 3
//! item_spacing = 8.0
//! placement = "left_to_right"
//!
//! [defaults.inset]
//! left = 12.0
//! right = 12.0
//! ```

use cone_core::EdgeInsets;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result, SpacingKind};

/// Number of placed elements summarized by each chunk of the query index
pub const DEFAULT_CHUNK_SIZE: usize = 20;

/// Rule choosing which column receives the next item
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementPolicy {
    /// Column with the smallest running height; ties go to the lowest index
    #[default]
    ShortestFirst,
    /// `index mod columns`
    LeftToRight,
    /// `(columns - 1) - (index mod columns)`
    RightToLeft,
}

/// Which container insets are subtracted from the container width
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionInsetReference {
    #[default]
    ContentInset,
    LayoutMargins,
    SafeArea,
}

/// Per-section metrics
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    pub column_count: usize,
    /// Horizontal gap between adjacent columns
    pub column_spacing: f32,
    /// Vertical gap between consecutive items in one column
    pub item_spacing: f32,
    /// Header height; zero or less means no header
    pub header_height: f32,
    /// Footer height; zero or less means no footer
    pub footer_height: f32,
    pub placement: PlacementPolicy,
    pub inset: EdgeInsets,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            column_count: 2,
            column_spacing: 10.0,
            item_spacing: 10.0,
            header_height: 0.0,
            footer_height: 0.0,
            placement: PlacementPolicy::ShortestFirst,
            inset: EdgeInsets::ZERO,
        }
    }
}

impl SectionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column_count(mut self, column_count: usize) -> Self {
        self.column_count = column_count;
        self
    }

    pub fn with_column_spacing(mut self, spacing: f32) -> Self {
        self.column_spacing = spacing;
        self
    }

    pub fn with_item_spacing(mut self, spacing: f32) -> Self {
        self.item_spacing = spacing;
        self
    }

    pub fn with_header_height(mut self, height: f32) -> Self {
        self.header_height = height;
        self
    }

    pub fn with_footer_height(mut self, height: f32) -> Self {
        self.footer_height = height;
        self
    }

    pub fn with_placement(mut self, placement: PlacementPolicy) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_inset(mut self, inset: EdgeInsets) -> Self {
        self.inset = inset;
        self
    }

    pub fn has_header(&self) -> bool {
        self.header_height > 0.0
    }

    pub fn has_footer(&self) -> bool {
        self.footer_height > 0.0
    }

    /// Check everything that does not depend on the container width
    pub fn validate(&self, section: usize) -> Result<()> {
        if self.column_count == 0 {
            return Err(LayoutError::ZeroColumnCount { section });
        }

        for (field, value) in [
            ("column spacing", self.column_spacing),
            ("item spacing", self.item_spacing),
            ("header height", self.header_height),
            ("footer height", self.footer_height),
        ] {
            if !value.is_finite() {
                return Err(LayoutError::NonFiniteValue { section, field });
            }
        }
        if !self.inset.is_finite() {
            return Err(LayoutError::NonFiniteValue {
                section,
                field: "inset",
            });
        }

        if self.column_spacing < 0.0 {
            return Err(LayoutError::NegativeSpacing {
                section,
                kind: SpacingKind::Column,
                value: self.column_spacing,
            });
        }
        if self.item_spacing < 0.0 {
            return Err(LayoutError::NegativeSpacing {
                section,
                kind: SpacingKind::Item,
                value: self.item_spacing,
            });
        }
        if !self.inset.is_non_negative() {
            return Err(LayoutError::NegativeInset {
                section,
                insets: self.inset,
            });
        }

        Ok(())
    }

    /// Width of one column inside a container of `content_width`
    ///
    /// The result is floored to whole device pixels at `scale` so that
    /// adjacent columns never leave fractional seams.
    pub fn column_width(&self, section: usize, content_width: f32, scale: f32) -> Result<f32> {
        let columns = self.column_count as f32;
        let available = content_width - self.inset.horizontal();
        let raw = (available - self.column_spacing * (columns - 1.0)) / columns;
        let width = (raw * scale).floor() / scale;

        // A huge scale can overflow the pixel snap to infinity
        if width.is_finite() && width > 0.0 {
            Ok(width)
        } else {
            Err(LayoutError::NonPositiveColumnWidth { section, width })
        }
    }
}

/// Engine-wide settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub inset_reference: SectionInsetReference,
    /// Elements per query-index chunk
    pub chunk_size: usize,
    /// Device pixels per layout unit, used to floor column widths
    pub scale: f32,
    /// Metrics for sections the provider does not override
    pub defaults: SectionConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            inset_reference: SectionInsetReference::ContentInset,
            chunk_size: DEFAULT_CHUNK_SIZE,
            scale: 1.0,
            defaults: SectionConfig::default(),
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML; missing fields take their defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: LayoutConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn with_defaults(mut self, defaults: SectionConfig) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_inset_reference(mut self, reference: SectionInsetReference) -> Self {
        self.inset_reference = reference;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Validate engine settings
    ///
    /// The default section metrics are not checked here: a provider may
    /// override every field, so they are validated per section during layout.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(LayoutError::InvalidChunkSize(self.chunk_size));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(LayoutError::InvalidScale(self.scale));
        }
        Ok(())
    }
}

/// Container geometry supplied by the host once per computation
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerBounds {
    /// Outer width of the scrolling container
    pub width: f32,
    pub content_inset: EdgeInsets,
    pub layout_margins: EdgeInsets,
    pub safe_area: EdgeInsets,
}

impl ContainerBounds {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn with_content_inset(mut self, insets: EdgeInsets) -> Self {
        self.content_inset = insets;
        self
    }

    pub fn with_layout_margins(mut self, insets: EdgeInsets) -> Self {
        self.layout_margins = insets;
        self
    }

    pub fn with_safe_area(mut self, insets: EdgeInsets) -> Self {
        self.safe_area = insets;
        self
    }

    pub fn insets_for(&self, reference: SectionInsetReference) -> EdgeInsets {
        match reference {
            SectionInsetReference::ContentInset => self.content_inset,
            SectionInsetReference::LayoutMargins => self.layout_margins,
            SectionInsetReference::SafeArea => self.safe_area,
        }
    }

    /// Width available to sections once the referenced insets are removed
    pub fn content_width(&self, reference: SectionInsetReference) -> f32 {
        self.width - self.insets_for(reference).horizontal()
    }

    pub fn validate(&self) -> Result<()> {
        if self.width.is_finite() && self.width >= 0.0 {
            Ok(())
        } else {
            Err(LayoutError::InvalidContainerWidth(self.width))
        }
    }
}
