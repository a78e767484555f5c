use alloc::vec::Vec;

use virtualgrid::RowHeights;

/// A platform-agnostic viewport size.
///
/// - `main` is the row axis (viewport height)
/// - `cross` is the column axis (viewport width)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub main: u32,
    pub cross: u32,
}

/// Configuration for [`crate::GridController`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridOptions {
    pub heights: RowHeights,
    pub column_widths: Vec<u32>,

    /// Extra rows kept in a frame on each side of the visible ones.
    pub overscan: usize,
    /// Extra columns kept in a frame on each side of the visible ones.
    pub column_overscan: usize,

    /// Viewport size applied by `GridController::new`.
    pub initial_rect: Option<Rect>,

    /// Offset of the first row, e.g. when a sticky column header sits above the rows inside the
    /// same scroll container.
    pub start_y: u64,
}

impl GridOptions {
    pub fn new(heights: RowHeights, column_widths: Vec<u32>) -> Self {
        Self {
            heights,
            column_widths,
            overscan: 1,
            column_overscan: 1,
            initial_rect: None,
            start_y: 0,
        }
    }

    pub fn with_heights(mut self, heights: RowHeights) -> Self {
        self.heights = heights;
        self
    }

    pub fn with_column_widths(mut self, column_widths: Vec<u32>) -> Self {
        self.column_widths = column_widths;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_column_overscan(mut self, column_overscan: usize) -> Self {
        self.column_overscan = column_overscan;
        self
    }

    pub fn with_initial_rect(mut self, initial_rect: Option<Rect>) -> Self {
        self.initial_rect = initial_rect;
        self
    }

    pub fn with_start_y(mut self, start_y: u64) -> Self {
        self.start_y = start_y;
        self
    }
}
