use crate::{Error, Extent, VisibleRange};

/// Finds the inclusive index range of entries intersecting the viewport window
/// `[scroll_offset, scroll_offset + scroll_view_size)`.
///
/// An entry is visible iff `offset < scroll_offset + scroll_view_size` and
/// `offset + size > scroll_offset`; merely touching either edge of the window does not count.
///
/// `items` must be sorted by offset and non-overlapping (see [`validate_entries`]). Both
/// boundaries are located by binary search, so a query costs `O(log n)` accessor calls. The full
/// ordering check only runs in debug builds; release builds spot-check the entries around both
/// boundaries, which catches any disorder that would change the result at those boundaries.
///
/// Returns `Ok(None)` when no entry intersects the window, e.g. for an empty sequence, a window
/// past the last entry, or a window that falls entirely inside a gap between two entries.
///
/// # Errors
///
/// - [`Error::EmptyViewport`] when `scroll_view_size` is zero.
/// - [`Error::UnsortedEntries`] when the entries around a boundary contradict sorted input.
pub fn visible_index_range<T>(
    items: &[T],
    scroll_offset: u64,
    scroll_view_size: u32,
    get_item_offset: impl Fn(&T) -> u64,
    get_item_size: impl Fn(&T) -> u32,
) -> Result<Option<VisibleRange>, Error> {
    if scroll_view_size == 0 {
        vwarn!(scroll_offset, "visible_index_range: zero-sized viewport");
        return Err(Error::EmptyViewport);
    }
    debug_assert_eq!(
        validate_entries(items, &get_item_offset, &get_item_size),
        Ok(()),
        "visible_index_range: entries must be sorted and non-overlapping"
    );

    let window_end = scroll_offset.saturating_add(scroll_view_size as u64);

    // Entry ends are non-decreasing for sorted, non-overlapping input, and so are offsets.
    let start = items.partition_point(|item| {
        get_item_offset(item).saturating_add(get_item_size(item) as u64) <= scroll_offset
    });
    let end_exclusive = items.partition_point(|item| get_item_offset(item) < window_end);

    check_boundaries(
        items,
        start,
        end_exclusive,
        scroll_offset,
        window_end,
        &get_item_offset,
        &get_item_size,
    )?;

    let range = (start < end_exclusive).then(|| VisibleRange::new(start, end_exclusive - 1));
    vtrace!(
        scroll_offset,
        scroll_view_size,
        count = items.len(),
        ?range,
        "visible_index_range"
    );
    Ok(range)
}

/// Spot-checks the entries around the two search results in `O(1)`.
///
/// For sorted, non-overlapping input, every entry before `start` ends at or before the window,
/// every entry from `end_exclusive` on starts at or after its end, and the entries at both ends of
/// a non-empty result intersect it. A failure means the input is unsorted; the full scan then
/// names the first offending entry.
pub(crate) fn check_boundaries<T>(
    items: &[T],
    start: usize,
    end_exclusive: usize,
    scroll_offset: u64,
    window_end: u64,
    get_item_offset: impl Fn(&T) -> u64,
    get_item_size: impl Fn(&T) -> u32,
) -> Result<(), Error> {
    let ends_before = |i: usize| {
        get_item_offset(&items[i]).saturating_add(get_item_size(&items[i]) as u64) <= scroll_offset
    };
    let starts_after = |i: usize| get_item_offset(&items[i]) >= window_end;
    let visible = |i: usize| !ends_before(i) && !starts_after(i);

    let suspect = if start > end_exclusive {
        Some(end_exclusive)
    } else if start > 0 && !ends_before(start - 1) {
        Some(start - 1)
    } else if end_exclusive < items.len() && !starts_after(end_exclusive) {
        Some(end_exclusive)
    } else if start < end_exclusive && !visible(start) {
        Some(start)
    } else if start < end_exclusive && !visible(end_exclusive - 1) {
        Some(end_exclusive - 1)
    } else {
        None
    };

    let Some(suspect) = suspect else {
        return Ok(());
    };
    let err = match validate_entries(items, &get_item_offset, &get_item_size) {
        Err(err) => err,
        Ok(()) => Error::UnsortedEntries { index: suspect },
    };
    vwarn!(suspect, scroll_offset, window_end, "visible_index_range: inconsistent boundaries");
    Err(err)
}

/// [`visible_index_range`] for sequences of [`Extent`] values.
pub fn visible_extent_range<T: Extent>(
    items: &[T],
    scroll_offset: u64,
    scroll_view_size: u32,
) -> Result<Option<VisibleRange>, Error> {
    visible_index_range(
        items,
        scroll_offset,
        scroll_view_size,
        |item| item.offset(),
        |item| item.size(),
    )
}

/// Checks that `items` are ordered by offset and that no entry overlaps its successor.
///
/// This is `O(n)`; call it when the data changes rather than on every scroll tick.
///
/// # Errors
///
/// [`Error::UnsortedEntries`] naming the first entry that starts before its predecessor ends.
pub fn validate_entries<T>(
    items: &[T],
    get_item_offset: impl Fn(&T) -> u64,
    get_item_size: impl Fn(&T) -> u32,
) -> Result<(), Error> {
    let mut prev_end = 0u64;
    for (index, item) in items.iter().enumerate() {
        let offset = get_item_offset(item);
        if offset < prev_end {
            vwarn!(index, offset, prev_end, "validate_entries: unsorted entry");
            return Err(Error::UnsortedEntries { index });
        }
        prev_end = offset.saturating_add(get_item_size(item) as u64);
    }
    Ok(())
}
