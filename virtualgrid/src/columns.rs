use alloc::vec::Vec;

use crate::Extent;

/// One column of a horizontal strip layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// 1-based column number.
    pub column: usize,
    pub width: u32,
    /// Left edge: the sum of all preceding widths.
    pub x: u64,
}

impl Extent for Column {
    fn offset(&self) -> u64 {
        self.x
    }

    fn size(&self) -> u32 {
        self.width
    }
}

/// Lays out `widths` left to right starting at `x = 0`.
///
/// `columns[i].column == i + 1`, `columns[i].width == widths[i]` and `columns[i].x` is the
/// exclusive prefix sum of `widths[..i]`.
pub fn columns(widths: &[u32]) -> Vec<Column> {
    let mut out = Vec::with_capacity(widths.len());
    let mut x = 0u64;
    for (i, &width) in widths.iter().enumerate() {
        out.push(Column {
            column: i + 1,
            width,
            x,
        });
        x = x.saturating_add(width as u64);
    }
    out
}

/// Right edge of the last column, or 0 for an empty layout.
pub fn total_width(columns: &[Column]) -> u64 {
    columns.last().map_or(0, |c| c.end())
}

/// Returns the 0-based index of the column whose `[x, x + width)` contains `x`.
///
/// Zero-width columns never contain anything. Runs in `O(log n)`.
pub fn column_at_x(columns: &[Column], x: u64) -> Option<usize> {
    let index = columns.partition_point(|c| c.end() <= x);
    columns.get(index).filter(|c| c.x <= x).map(|_| index)
}
