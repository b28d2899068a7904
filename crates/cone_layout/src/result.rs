//! Layout output

use std::ops::Range;

use cone_core::{Rect, Size};
use serde::{Deserialize, Serialize};

use crate::chunk::ChunkIndex;
use crate::provider::IndexPath;

/// What a placed element is within its section
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Header,
    /// An item, carrying its index within the section
    Item(usize),
    Footer,
}

/// One positioned element of a computed layout
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub section: usize,
    pub kind: ElementKind,
    pub frame: Rect,
}

impl PlacedItem {
    /// Index path of an item; `None` for headers and footers
    pub fn index_path(&self) -> Option<IndexPath> {
        match self.kind {
            ElementKind::Item(item) => Some(IndexPath::new(self.section, item)),
            ElementKind::Header | ElementKind::Footer => None,
        }
    }

    pub fn is_supplementary(&self) -> bool {
        !matches!(self.kind, ElementKind::Item(_))
    }
}

/// Where one section landed and how it was divided
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionMetrics {
    /// Y where the section starts (top of its header, if any)
    pub top: f32,
    /// Y where the next section starts
    pub bottom: f32,
    pub column_count: usize,
    pub column_width: f32,
    pub(crate) header: Option<usize>,
    pub(crate) items: Range<usize>,
    pub(crate) footer: Option<usize>,
}

impl SectionMetrics {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Immutable result of one full layout computation
///
/// Elements are stored in placement order: each section's header, then its
/// items by index, then its footer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutResult {
    items: Vec<PlacedItem>,
    sections: Vec<SectionMetrics>,
    chunks: ChunkIndex,
    content_size: Size,
}

impl LayoutResult {
    /// The canonical empty layout: no elements, zero content size
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(
        items: Vec<PlacedItem>,
        sections: Vec<SectionMetrics>,
        chunk_size: usize,
        content_size: Size,
    ) -> Self {
        let chunks = ChunkIndex::build(&items, chunk_size);
        Self {
            items,
            sections,
            chunks,
            content_size,
        }
    }

    /// Every element in placement order
    pub fn placed_items(&self) -> &[PlacedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Size of the scrollable content
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn section(&self, section: usize) -> Option<&SectionMetrics> {
        self.sections.get(section)
    }

    pub fn chunk_index(&self) -> &ChunkIndex {
        &self.chunks
    }

    /// Placed record for one item
    pub fn item(&self, path: IndexPath) -> Option<&PlacedItem> {
        let metrics = self.sections.get(path.section)?;
        if path.item >= metrics.items.len() {
            return None;
        }
        self.items.get(metrics.items.start + path.item)
    }

    pub fn item_frame(&self, path: IndexPath) -> Option<Rect> {
        self.item(path).map(|placed| placed.frame)
    }

    pub fn header(&self, section: usize) -> Option<&PlacedItem> {
        let index = self.sections.get(section)?.header?;
        self.items.get(index)
    }

    pub fn footer(&self, section: usize) -> Option<&PlacedItem> {
        let index = self.sections.get(section)?.footer?;
        self.items.get(index)
    }

    /// Items of one section, in index order, without header or footer
    pub fn section_items(&self, section: usize) -> &[PlacedItem] {
        match self.sections.get(section) {
            Some(metrics) => &self.items[metrics.items.clone()],
            None => &[],
        }
    }

    /// Elements whose frame intersects `viewport`, in placement order
    ///
    /// An empty or non-finite viewport matches nothing.
    pub fn query(&self, viewport: &Rect) -> Vec<&PlacedItem> {
        self.visible(*viewport).collect()
    }

    /// Number of elements [`query`](Self::query) would return
    pub fn query_count(&self, viewport: &Rect) -> usize {
        self.visible(*viewport).count()
    }

    fn visible(&self, viewport: Rect) -> impl Iterator<Item = &PlacedItem> + '_ {
        let range = if viewport.is_finite() && !viewport.is_empty() {
            self.chunks.candidate_range(&viewport, self.items.len())
        } else {
            None
        };

        self.items[range.unwrap_or(0..0)]
            .iter()
            .filter(move |placed| placed.frame.intersects(&viewport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LayoutResult {
        let items = vec![
            PlacedItem {
                section: 0,
                kind: ElementKind::Header,
                frame: Rect::new(0.0, 0.0, 200.0, 40.0),
            },
            PlacedItem {
                section: 0,
                kind: ElementKind::Item(0),
                frame: Rect::new(0.0, 40.0, 100.0, 60.0),
            },
            PlacedItem {
                section: 0,
                kind: ElementKind::Item(1),
                frame: Rect::new(100.0, 40.0, 100.0, 30.0),
            },
            PlacedItem {
                section: 1,
                kind: ElementKind::Item(0),
                frame: Rect::new(0.0, 100.0, 200.0, 50.0),
            },
            PlacedItem {
                section: 1,
                kind: ElementKind::Footer,
                frame: Rect::new(0.0, 150.0, 200.0, 20.0),
            },
        ];
        let sections = vec![
            SectionMetrics {
                top: 0.0,
                bottom: 100.0,
                column_count: 2,
                column_width: 100.0,
                header: Some(0),
                items: 1..3,
                footer: None,
            },
            SectionMetrics {
                top: 100.0,
                bottom: 170.0,
                column_count: 1,
                column_width: 200.0,
                header: None,
                items: 3..4,
                footer: Some(4),
            },
        ];
        LayoutResult::new(items, sections, 2, Size::new(200.0, 170.0))
    }

    #[test]
    fn test_lookups() {
        let layout = sample();
        assert_eq!(
            layout.item_frame(IndexPath::new(0, 1)),
            Some(Rect::new(100.0, 40.0, 100.0, 30.0))
        );
        assert_eq!(
            layout.item_frame(IndexPath::new(1, 0)),
            Some(Rect::new(0.0, 100.0, 200.0, 50.0))
        );
        assert_eq!(layout.item_frame(IndexPath::new(0, 2)), None);
        assert_eq!(layout.item_frame(IndexPath::new(5, 0)), None);

        assert_eq!(layout.header(0).map(|h| h.kind), Some(ElementKind::Header));
        assert!(layout.header(1).is_none());
        assert!(layout.footer(0).is_none());
        assert_eq!(layout.footer(1).map(|f| f.frame.y()), Some(150.0));

        assert_eq!(layout.section_items(0).len(), 2);
        assert!(layout.section_items(9).is_empty());
        assert_eq!(layout.section(1).map(|s| s.height()), Some(70.0));
    }

    #[test]
    fn test_query_in_placement_order() {
        let layout = sample();
        let hits = layout.query(&Rect::new(0.0, 50.0, 200.0, 60.0));
        let kinds: Vec<_> = hits.iter().map(|p| (p.section, p.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                (0, ElementKind::Item(0)),
                (0, ElementKind::Item(1)),
                (1, ElementKind::Item(0)),
            ]
        );
        assert_eq!(layout.query_count(&Rect::new(0.0, 50.0, 200.0, 60.0)), 3);
    }

    #[test]
    fn test_degenerate_viewports_match_nothing() {
        let layout = sample();
        assert!(layout.query(&Rect::new(0.0, 50.0, 0.0, 60.0)).is_empty());
        assert!(layout.query(&Rect::new(0.0, 50.0, 100.0, 0.0)).is_empty());
        assert!(layout.query(&Rect::new(0.0, 50.0, -10.0, 60.0)).is_empty());
        assert!(layout.query(&Rect::new(0.0, f32::NAN, 100.0, 60.0)).is_empty());
        assert!(layout.query(&Rect::new(0.0, 500.0, 200.0, 60.0)).is_empty());
    }

    #[test]
    fn test_empty_layout() {
        let layout = LayoutResult::empty();
        assert!(layout.is_empty());
        assert_eq!(layout.content_size(), Size::ZERO);
        assert_eq!(layout.section_count(), 0);
        assert!(layout
            .query(&Rect::new(-1e6, -1e6, 2e6, 2e6))
            .is_empty());
    }

    #[test]
    fn test_index_path_and_supplementary() {
        let layout = sample();
        let items = layout.placed_items();
        assert_eq!(items[0].index_path(), None);
        assert!(items[0].is_supplementary());
        assert_eq!(items[2].index_path(), Some(IndexPath::new(0, 1)));
        assert!(!items[2].is_supplementary());
    }
}
