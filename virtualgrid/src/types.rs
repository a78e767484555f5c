use core::ops::{Range, RangeInclusive};

/// A stable identity token attached to a rendered element.
pub type ItemKey = u64;

/// Anything laid out along a single scroll axis.
///
/// Implemented for [`Entry`], [`crate::Column`] and [`crate::Row`] so each of them can be passed
/// straight to [`crate::visible_extent_range`].
pub trait Extent {
    fn offset(&self) -> u64;
    fn size(&self) -> u32;

    fn end(&self) -> u64 {
        self.offset().saturating_add(self.size() as u64)
    }
}

/// Position and extent of one item along the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub offset: u64,
    pub size: u32,
}

impl Entry {
    pub fn new(offset: u64, size: u32) -> Self {
        Self { offset, size }
    }
}

impl Extent for Entry {
    fn offset(&self) -> u64 {
        self.offset
    }

    fn size(&self) -> u32 {
        self.size
    }
}

/// Inclusive range of entries intersecting a viewport window.
///
/// "Nothing visible" is never encoded in this type: range queries return `Option<VisibleRange>`
/// and use `None` for that case, so `start_index <= end_index` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // inclusive
}

impl VisibleRange {
    pub fn new(start_index: usize, end_index: usize) -> Self {
        debug_assert!(
            start_index <= end_index,
            "VisibleRange: start must not exceed end (start={start_index}, end={end_index})"
        );
        Self {
            start_index,
            end_index,
        }
    }

    /// Number of indices in the range; never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start_index <= index && index <= self.end_index
    }

    pub fn indices(&self) -> RangeInclusive<usize> {
        self.start_index..=self.end_index
    }

    /// Exclusive-end form, for slicing: `&items[range.as_slice_range()]`.
    pub fn as_slice_range(&self) -> Range<usize> {
        self.start_index..self.end_index.saturating_add(1)
    }

    /// Expands the range by `overscan` entries on both sides, clamped to `[0, count)`.
    pub fn with_overscan(self, overscan: usize, count: usize) -> Self {
        if count == 0 {
            return self;
        }
        let last = count - 1;
        Self {
            start_index: self.start_index.saturating_sub(overscan).min(last),
            end_index: self.end_index.saturating_add(overscan).min(last),
        }
    }
}

/// A value paired with the key it was assigned by [`crate::recycle_items`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyed<T> {
    pub key: ItemKey,
    pub value: T,
}

impl<T> Keyed<T> {
    pub fn new(key: ItemKey, value: T) -> Self {
        Self { key, value }
    }
}
