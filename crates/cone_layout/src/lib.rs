//! Cone Masonry Layout
//!
//! Waterfall ("Pinterest-style") layout for sectioned, variable-height
//! content. Each section is split into equal-width columns, and every item
//! drops into the column picked by its section's placement policy.
//!
//! - **Sections** stack vertically, each with its own column count, spacing,
//!   insets, optional header and optional footer
//! - **Items** keep their aspect ratio when fitted to the column width
//! - **Queries** return the elements intersecting a viewport without scanning
//!   the whole layout, using a chunked bounding-rect index
//!
//! # Example
//!
//! ```rust
//! use cone_core::{Rect, Size};
//! use cone_layout::{ContainerBounds, IndexPath, MasonryLayout, SectionConfig};
//!
//! let heights = [120.0, 80.0, 200.0, 60.0, 90.0];
//! let section = SectionConfig::new()
//!     .with_column_count(2)
//!     .with_header_height(44.0);
//!
//! let layout = MasonryLayout::default()
//!     .compute(
//!         &ContainerBounds::new(330.0),
//!         &[heights.len()],
//!         &section,
//!         &mut |path: IndexPath| Size::new(0.0, heights[path.item]),
//!     )
//!     .unwrap();
//!
//! // Header plus five items
//! assert_eq!(layout.len(), 6);
//!
//! let visible = layout.query(&Rect::new(0.0, 0.0, 330.0, 100.0));
//! assert!(visible.iter().all(|p| p.frame.y() < 100.0));
//! ```

pub mod chunk;
mod column;
pub mod config;
pub mod error;
pub mod masonry;
pub mod provider;
pub mod result;
mod section;

pub use chunk::ChunkIndex;
pub use config::{
    ContainerBounds, LayoutConfig, PlacementPolicy, SectionConfig, SectionInsetReference,
    DEFAULT_CHUNK_SIZE,
};
pub use error::{LayoutError, Result, SpacingKind};
pub use masonry::{compute_layout, query, MasonryLayout};
pub use provider::{
    IndexPath, SectionCallback, SectionConfigProvider, SectionOverrides, SizeProvider,
};
pub use result::{ElementKind, LayoutResult, PlacedItem, SectionMetrics};
