//! Per-section placement pass
//!
//! One section is laid out top to bottom:
//!
//! 1. Header at the section top, spanning the content width
//! 2. Top inset, then every column starts at the same running height
//! 3. Items in index order, each into the column chosen by the placement policy
//! 4. Trailing item gap removed, bottom inset added, then the footer
//!
//! The returned `SectionMetrics::bottom` is where the next section starts.

use cone_core::{Rect, Size};

use crate::column::{fitted_height, ColumnTracker};
use crate::config::SectionConfig;
use crate::error::Result;
use crate::provider::{IndexPath, SizeProvider};
use crate::result::{ElementKind, PlacedItem, SectionMetrics};

pub(crate) struct SectionPass<'a> {
    pub section: usize,
    pub config: &'a SectionConfig,
    pub item_count: usize,
    /// Width available to the layout, before section insets
    pub content_width: f32,
    pub scale: f32,
}

impl SectionPass<'_> {
    /// Lay the section out starting at `top`, appending to `out`
    pub fn run<S>(
        &self,
        top: f32,
        sizes: &mut S,
        out: &mut Vec<PlacedItem>,
    ) -> Result<SectionMetrics>
    where
        S: SizeProvider + ?Sized,
    {
        let config = self.config;
        config.validate(self.section)?;
        let column_width = config.column_width(self.section, self.content_width, self.scale)?;

        let mut cursor = top;
        let header = config.has_header().then(|| {
            let frame = Rect::new(0.0, cursor, self.content_width, config.header_height);
            cursor = frame.max_y();
            self.push(out, ElementKind::Header, frame)
        });

        cursor += config.inset.top;
        let mut columns = ColumnTracker::new(config.column_count, cursor);

        let first_item = out.len();
        for item in 0..self.item_count {
            let column = columns.next_column(config.placement, item);
            let x = config.inset.left + column as f32 * (column_width + config.column_spacing);
            let y = columns.height(column);

            let size = self.item_size(sizes, IndexPath::new(self.section, item));
            let frame = Rect::new(x, y, column_width, fitted_height(size, column_width));

            self.push(out, ElementKind::Item(item), frame);
            columns.advance(column, frame.max_y() + config.item_spacing);
        }
        let items = first_item..out.len();

        // An empty section has no trailing gap to remove. The clamp absorbs
        // rounding so a section never ends above where its columns started.
        let mut bottom = columns.max_height();
        if self.item_count > 0 {
            bottom = (bottom - config.item_spacing).max(cursor);
        }
        bottom += config.inset.bottom;

        let footer = config.has_footer().then(|| {
            let frame = Rect::new(0.0, bottom, self.content_width, config.footer_height);
            bottom = frame.max_y();
            self.push(out, ElementKind::Footer, frame)
        });

        tracing::trace!(
            section = self.section,
            items = self.item_count,
            column_width,
            top,
            bottom,
            "laid out masonry section"
        );

        Ok(SectionMetrics {
            top,
            bottom,
            column_count: columns.len(),
            column_width,
            header,
            items,
            footer,
        })
    }

    fn push(&self, out: &mut Vec<PlacedItem>, kind: ElementKind, frame: Rect) -> usize {
        out.push(PlacedItem {
            section: self.section,
            kind,
            frame,
        });
        out.len() - 1
    }

    fn item_size<S>(&self, sizes: &mut S, path: IndexPath) -> Size
    where
        S: SizeProvider + ?Sized,
    {
        let size = sizes.size_for_item(path);
        if size.is_finite() {
            size
        } else {
            tracing::warn!(
                section = path.section,
                item = path.item,
                width = size.width,
                height = size.height,
                "size provider returned a non-finite size, using zero"
            );
            Size::ZERO
        }
    }
}
