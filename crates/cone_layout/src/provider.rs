//! Host-side inputs to a layout computation
//!
//! The engine asks the host two things: how big each item wants to be
//! ([`SizeProvider`]) and which metrics each section uses
//! ([`SectionConfigProvider`]). Both are plain traits with blanket impls for
//! closures, so most hosts never name them.

use std::rc::Rc;

use cone_core::{EdgeInsets, Size};
use serde::{Deserialize, Serialize};

use crate::config::{PlacementPolicy, SectionConfig};

/// Address of an item: `(section, item)`
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct IndexPath {
    pub section: usize,
    pub item: usize,
}

impl IndexPath {
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

/// Supplies the intrinsic size of each item
///
/// Called exactly once per item per computation, in placement order. The
/// engine keeps nothing between computations, so memoize here if sizing is
/// expensive. Returning `Size::ZERO` yields a zero-height item.
pub trait SizeProvider {
    fn size_for_item(&mut self, path: IndexPath) -> Size;
}

impl<F> SizeProvider for F
where
    F: FnMut(IndexPath) -> Size,
{
    fn size_for_item(&mut self, path: IndexPath) -> Size {
        self(path)
    }
}

/// Supplies the metrics of each section
pub trait SectionConfigProvider {
    /// Metrics for `section`, given the layout-wide `defaults`
    fn section_config(&self, section: usize, defaults: &SectionConfig) -> SectionConfig;
}

/// A single config used for every section, ignoring the layout defaults
impl SectionConfigProvider for SectionConfig {
    fn section_config(&self, _section: usize, _defaults: &SectionConfig) -> SectionConfig {
        *self
    }
}

impl<F> SectionConfigProvider for F
where
    F: Fn(usize) -> SectionConfig,
{
    fn section_config(&self, section: usize, _defaults: &SectionConfig) -> SectionConfig {
        self(section)
    }
}

/// Optional per-section callback
///
/// Uses Rc since layout runs on the UI thread.
pub type SectionCallback<T> = Rc<dyn Fn(usize) -> T>;

/// Capability record of optional per-section overrides
///
/// Each field is consulted only when present; an absent callback falls back
/// to the layout defaults for that metric.
///
/// ```rust
/// use cone_core::EdgeInsets;
/// use cone_layout::{SectionConfig, SectionConfigProvider, SectionOverrides};
///
/// let overrides = SectionOverrides::new()
///     .with_column_count(|section| if section == 0 { 1 } else { 3 })
///     .with_inset(|_| EdgeInsets::uniform(8.0));
///
/// let defaults = SectionConfig::default();
/// assert_eq!(overrides.section_config(0, &defaults).column_count, 1);
/// assert_eq!(overrides.section_config(2, &defaults).column_count, 3);
/// assert_eq!(overrides.section_config(2, &defaults).item_spacing, 10.0);
/// ```
#[derive(Clone, Default)]
pub struct SectionOverrides {
    pub column_count: Option<SectionCallback<usize>>,
    pub column_spacing: Option<SectionCallback<f32>>,
    pub item_spacing: Option<SectionCallback<f32>>,
    pub header_height: Option<SectionCallback<f32>>,
    pub footer_height: Option<SectionCallback<f32>>,
    pub placement: Option<SectionCallback<PlacementPolicy>>,
    pub inset: Option<SectionCallback<EdgeInsets>>,
}

impl SectionOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column_count(mut self, f: impl Fn(usize) -> usize + 'static) -> Self {
        self.column_count = Some(Rc::new(f));
        self
    }

    pub fn with_column_spacing(mut self, f: impl Fn(usize) -> f32 + 'static) -> Self {
        self.column_spacing = Some(Rc::new(f));
        self
    }

    pub fn with_item_spacing(mut self, f: impl Fn(usize) -> f32 + 'static) -> Self {
        self.item_spacing = Some(Rc::new(f));
        self
    }

    pub fn with_header_height(mut self, f: impl Fn(usize) -> f32 + 'static) -> Self {
        self.header_height = Some(Rc::new(f));
        self
    }

    pub fn with_footer_height(mut self, f: impl Fn(usize) -> f32 + 'static) -> Self {
        self.footer_height = Some(Rc::new(f));
        self
    }

    pub fn with_placement(mut self, f: impl Fn(usize) -> PlacementPolicy + 'static) -> Self {
        self.placement = Some(Rc::new(f));
        self
    }

    pub fn with_inset(mut self, f: impl Fn(usize) -> EdgeInsets + 'static) -> Self {
        self.inset = Some(Rc::new(f));
        self
    }
}

impl SectionConfigProvider for SectionOverrides {
    fn section_config(&self, section: usize, defaults: &SectionConfig) -> SectionConfig {
        fn pick<T>(callback: &Option<SectionCallback<T>>, section: usize, fallback: T) -> T {
            match callback {
                Some(f) => f(section),
                None => fallback,
            }
        }

        SectionConfig {
            column_count: pick(&self.column_count, section, defaults.column_count),
            column_spacing: pick(&self.column_spacing, section, defaults.column_spacing),
            item_spacing: pick(&self.item_spacing, section, defaults.item_spacing),
            header_height: pick(&self.header_height, section, defaults.header_height),
            footer_height: pick(&self.footer_height, section, defaults.footer_height),
            placement: pick(&self.placement, section, defaults.placement),
            inset: pick(&self.inset, section, defaults.inset),
        }
    }
}

impl std::fmt::Debug for SectionOverrides {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionOverrides")
            .field("column_count", &self.column_count.is_some())
            .field("column_spacing", &self.column_spacing.is_some())
            .field("item_spacing", &self.item_spacing.is_some())
            .field("header_height", &self.header_height.is_some())
            .field("footer_height", &self.footer_height.is_some())
            .field("placement", &self.placement.is_some())
            .field("inset", &self.inset.is_some())
            .finish()
    }
}
