//! Column fill tracking for a single section

use cone_core::Size;
use smallvec::SmallVec;

use crate::config::PlacementPolicy;

/// Running fill height of every column in the section being laid out
///
/// Heights only grow while items are placed. The tracker lives for one
/// section of one computation.
#[derive(Clone, Debug)]
pub(crate) struct ColumnTracker {
    heights: SmallVec<[f32; 4]>,
}

impl ColumnTracker {
    /// Start every column at `top`
    pub fn new(column_count: usize, top: f32) -> Self {
        Self {
            heights: SmallVec::from_elem(top, column_count),
        }
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn height(&self, column: usize) -> f32 {
        self.heights[column]
    }

    /// Index of the shortest column; ties go to the lowest index
    pub fn shortest(&self) -> usize {
        let mut best = 0;
        for (index, &height) in self.heights.iter().enumerate().skip(1) {
            if height < self.heights[best] {
                best = index;
            }
        }
        best
    }

    pub fn max_height(&self) -> f32 {
        self.heights
            .iter()
            .copied()
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// Column that receives item `item` under `policy`
    pub fn next_column(&self, policy: PlacementPolicy, item: usize) -> usize {
        let columns = self.len();
        match policy {
            PlacementPolicy::ShortestFirst => self.shortest(),
            PlacementPolicy::LeftToRight => item % columns,
            PlacementPolicy::RightToLeft => (columns - 1) - (item % columns),
        }
    }

    /// Move `column`'s running height down to `bottom`
    pub fn advance(&mut self, column: usize, bottom: f32) {
        debug_assert!(
            bottom >= self.heights[column],
            "column {} would shrink from {} to {}",
            column,
            self.heights[column],
            bottom
        );
        self.heights[column] = bottom;
    }
}

/// Height of an item placed in a column of `column_width`
///
/// A positive reported width rescales the height to keep the aspect ratio.
/// A zero or negative reported height gives a zero-height item.
pub(crate) fn fitted_height(size: Size, column_width: f32) -> f32 {
    if size.height.is_nan() || size.height <= 0.0 {
        return 0.0;
    }
    if size.width > 0.0 && size.width != column_width {
        size.height * column_width / size.width
    } else {
        size.height
    }
}
