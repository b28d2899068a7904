//! Chunked bounding-rect index for viewport queries
//!
//! Placed elements are grouped into consecutive runs of `chunk_size` in
//! placement order, and each run keeps the union of all of its frames. A
//! query only filters elements between the first and last chunk whose
//! bounds meet the viewport.
//!
//! Bounds are the union of every frame in the chunk, not just the first and
//! last one. With shortest-first placement a later item can sit above an
//! earlier one, so a first/last union could miss it.

use std::ops::Range;

use cone_core::Rect;

use crate::config::DEFAULT_CHUNK_SIZE;
use crate::result::PlacedItem;

#[derive(Clone, Debug, PartialEq)]
pub struct ChunkIndex {
    chunk_size: usize,
    bounds: Vec<Rect>,
}

impl Default for ChunkIndex {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            bounds: Vec::new(),
        }
    }
}

impl ChunkIndex {
    /// Build the index over `items`; `chunk_size` must be at least 1
    pub(crate) fn build(items: &[PlacedItem], chunk_size: usize) -> Self {
        let bounds = items
            .chunks(chunk_size)
            .map(|chunk| {
                chunk
                    .iter()
                    .skip(1)
                    .fold(chunk[0].frame, |acc, placed| acc.union(&placed.frame))
            })
            .collect();

        Self { chunk_size, bounds }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of chunks
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Bounding rect of every chunk, in placement order
    pub fn bounds(&self) -> &[Rect] {
        &self.bounds
    }

    /// Element range spanning the first through last chunk that meets `viewport`
    ///
    /// Every chunk is tested, so the range is exact at chunk granularity even
    /// when chunk bounds are not monotonic along the scroll axis.
    pub fn candidate_range(&self, viewport: &Rect, element_count: usize) -> Option<Range<usize>> {
        let first = self.bounds.iter().position(|b| b.intersects(viewport))?;
        let last = self.bounds.iter().rposition(|b| b.intersects(viewport))?;

        let start = first * self.chunk_size;
        let end = ((last + 1) * self.chunk_size).min(element_count);
        Some(start..end)
    }
}
