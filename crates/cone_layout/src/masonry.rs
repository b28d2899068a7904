//! Masonry layout engine
//!
//! Stacks sections vertically and balances each section's items across its
//! columns. Every call to [`MasonryLayout::compute`] is a full recompute that
//! produces a fresh, immutable [`LayoutResult`]; nothing is cached between
//! calls.

use cone_core::{Rect, Size};

use crate::config::{ContainerBounds, LayoutConfig};
use crate::error::Result;
use crate::provider::{SectionConfigProvider, SizeProvider};
use crate::result::{LayoutResult, PlacedItem};
use crate::section::SectionPass;

/// Waterfall layout over a configured set of defaults
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MasonryLayout {
    config: LayoutConfig,
}

impl MasonryLayout {
    pub fn new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Compute frames for every header, item and footer
    ///
    /// `item_counts[s]` is the number of items in section `s`. `sections`
    /// supplies each section's metrics and `sizes` each item's size, called
    /// once per item in placement order.
    pub fn compute<C, S>(
        &self,
        bounds: &ContainerBounds,
        item_counts: &[usize],
        sections: &C,
        sizes: &mut S,
    ) -> Result<LayoutResult>
    where
        C: SectionConfigProvider + ?Sized,
        S: SizeProvider + ?Sized,
    {
        bounds.validate()?;
        if item_counts.is_empty() {
            return Ok(LayoutResult::empty());
        }

        let content_width = bounds.content_width(self.config.inset_reference);
        let span = tracing::debug_span!(
            "masonry_layout",
            sections = item_counts.len(),
            width = content_width
        );
        let _enter = span.enter();

        let capacity = item_counts.iter().sum::<usize>() + 2 * item_counts.len();
        let mut placed: Vec<PlacedItem> = Vec::with_capacity(capacity);
        let mut metrics = Vec::with_capacity(item_counts.len());
        let mut top = 0.0;

        for (section, &item_count) in item_counts.iter().enumerate() {
            let config = sections.section_config(section, &self.config.defaults);
            let pass = SectionPass {
                section,
                config: &config,
                item_count,
                content_width,
                scale: self.config.scale,
            };
            let section_metrics = pass.run(top, &mut *sizes, &mut placed)?;
            top = section_metrics.bottom;
            metrics.push(section_metrics);
        }

        let result = LayoutResult::new(
            placed,
            metrics,
            self.config.chunk_size,
            Size::new(content_width, top),
        );

        tracing::debug!(
            elements = result.len(),
            chunks = result.chunk_index().len(),
            content_height = top,
            "computed masonry layout"
        );

        Ok(result)
    }

    /// Whether moving from `old` to `new` bounds requires a recompute
    ///
    /// Only the usable width matters; height changes (scrolling, keyboard)
    /// never move anything.
    pub fn should_invalidate_for_bounds_change(
        &self,
        old: &ContainerBounds,
        new: &ContainerBounds,
    ) -> bool {
        let reference = self.config.inset_reference;
        old.content_width(reference) != new.content_width(reference)
    }
}

/// Compute a layout in one call; see [`MasonryLayout::compute`]
pub fn compute_layout<C, S>(
    item_counts: &[usize],
    sections: &C,
    sizes: &mut S,
    config: &LayoutConfig,
    bounds: &ContainerBounds,
) -> Result<LayoutResult>
where
    C: SectionConfigProvider + ?Sized,
    S: SizeProvider + ?Sized,
{
    MasonryLayout::new(config.clone())?.compute(bounds, item_counts, sections, sizes)
}

/// Elements of `layout` intersecting `viewport`, in placement order
pub fn query<'a>(layout: &'a LayoutResult, viewport: &Rect) -> Vec<&'a PlacedItem> {
    layout.query(viewport)
}
