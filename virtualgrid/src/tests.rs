use crate::*;

use alloc::vec;
use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 11
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start))
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

fn entries_from(pairs: &[(u64, u32)]) -> Vec<Entry> {
    pairs
        .iter()
        .map(|&(offset, size)| Entry::new(offset, size))
        .collect()
}

fn intersects(entry: &Entry, scroll_offset: u64, scroll_view_size: u32) -> bool {
    entry.offset < scroll_offset + scroll_view_size as u64 && entry.end() > scroll_offset
}

/// Linear-scan reference for `visible_index_range`.
fn expected_visible_range(
    entries: &[Entry],
    scroll_offset: u64,
    scroll_view_size: u32,
) -> Option<VisibleRange> {
    let mut first = None;
    let mut last = None;
    for (i, entry) in entries.iter().enumerate() {
        if intersects(entry, scroll_offset, scroll_view_size) {
            first.get_or_insert(i);
            last = Some(i);
        }
    }
    Some(VisibleRange::new(first?, last?))
}

fn random_entries(rng: &mut Lcg) -> Vec<Entry> {
    let count = rng.gen_range_usize(0, 40);
    let mut offset = rng.gen_range_u64(0, 5);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let size = if rng.gen_range_u32(0, 6) == 0 {
            0
        } else {
            rng.gen_range_u32(1, 12)
        };
        out.push(Entry::new(offset, size));
        offset += size as u64;
        if rng.gen_bool() {
            offset += rng.gen_range_u64(0, 4);
        }
    }
    out
}

fn random_forest(rng: &mut Lcg, depth: usize) -> Vec<Group> {
    let count = rng.gen_range_usize(0, 4);
    (0..count)
        .map(|_| {
            let group = if depth > 0 && rng.gen_bool() {
                Group::ancestor(random_forest(rng, depth - 1))
            } else {
                Group::leaf(rng.gen_range_u32(0, 5))
            };
            group.with_collapsed(rng.gen_range_u32(0, 4) == 0)
        })
        .collect()
}

/// Collects the paths of every group hidden under a collapsed ancestor.
fn hidden_paths(groups: &[Group], prefix: &[usize], hidden: bool, out: &mut Vec<Vec<usize>>) {
    for (i, group) in groups.iter().enumerate() {
        let mut path = prefix.to_vec();
        path.push(i);
        if hidden {
            out.push(path.clone());
        }
        hidden_paths(
            group.children(),
            &path,
            hidden || group.collapsed(),
            out,
        );
    }
}

/// Quadratic reference for `recycle_items`; returns the expected keys.
fn expected_recycled_keys(items: &[u32], prev: &[Keyed<u32>], mut next_key: u64) -> Vec<u64> {
    let mut claimed = vec![false; prev.len()];
    let mut keys: Vec<Option<u64>> = vec![None; items.len()];
    for (i, value) in items.iter().enumerate() {
        for (j, p) in prev.iter().enumerate() {
            if !claimed[j] && p.value == *value {
                claimed[j] = true;
                keys[i] = Some(p.key);
                break;
            }
        }
    }

    if let Some(max) = prev.iter().map(|p| p.key).max() {
        next_key = next_key.max(max + 1);
    }
    let mut freed = prev
        .iter()
        .zip(&claimed)
        .filter(|(_, c)| !**c)
        .map(|(p, _)| p.key);
    keys.into_iter()
        .map(|key| {
            key.or_else(|| freed.next()).unwrap_or_else(|| {
                next_key += 1;
                next_key - 1
            })
        })
        .collect()
}

fn assert_distinct_keys<T>(items: &[Keyed<T>]) {
    let mut keys: Vec<u64> = items.iter().map(|it| it.key).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), items.len(), "keys must be distinct");
}

#[test]
fn columns_are_laid_out_by_prefix_sum() {
    assert_eq!(
        columns(&[100, 200, 100]),
        vec![
            Column {
                column: 1,
                width: 100,
                x: 0
            },
            Column {
                column: 2,
                width: 200,
                x: 100
            },
            Column {
                column: 3,
                width: 100,
                x: 300
            },
        ]
    );
}

#[test]
fn columns_of_nothing_is_empty() {
    assert!(columns(&[]).is_empty());
    assert_eq!(total_width(&columns(&[])), 0);
}

#[test]
fn column_at_x_finds_containing_column_and_skips_zero_widths() {
    let cols = columns(&[10, 0, 20, 5]);
    assert_eq!(total_width(&cols), 35);
    assert_eq!(column_at_x(&cols, 0), Some(0));
    assert_eq!(column_at_x(&cols, 9), Some(0));
    // x = 10 starts both the zero-width column 2 and column 3.
    assert_eq!(column_at_x(&cols, 10), Some(2));
    assert_eq!(column_at_x(&cols, 30), Some(3));
    assert_eq!(column_at_x(&cols, 35), None);
}

#[test]
fn property_columns_prefix_sum_law() {
    let mut rng = Lcg::new(0xC0FFEE);
    for _ in 0..200 {
        let widths: Vec<u32> = (0..rng.gen_range_usize(0, 30))
            .map(|_| rng.gen_range_u32(0, 500))
            .collect();
        let cols = columns(&widths);
        assert_eq!(cols.len(), widths.len());
        for (i, col) in cols.iter().enumerate() {
            let expected_x: u64 = widths[..i].iter().map(|&w| w as u64).sum();
            assert_eq!(col.column, i + 1);
            assert_eq!(col.width, widths[i]);
            assert_eq!(col.x, expected_x);
        }
        let total: u64 = widths.iter().map(|&w| w as u64).sum();
        assert_eq!(total_width(&cols), total);
    }
}

#[test]
fn visible_range_spans_partially_visible_entries() {
    let entries = entries_from(&[
        (0, 100),
        (100, 200),
        (300, 100),
        (400, 200),
        (600, 100),
        (700, 200),
    ]);
    let range = visible_index_range(&entries, 350, 400, |e| e.offset, |e| e.size).unwrap();
    assert_eq!(range, Some(VisibleRange::new(2, 5)));
    assert_eq!(visible_extent_range(&entries, 350, 400).unwrap(), range);
}

#[test]
fn visible_range_ignores_entries_that_only_touch_the_window() {
    let entries = entries_from(&[(0, 100), (100, 200), (300, 100)]);
    // Window [100, 300): entry 0 ends at 100, entry 2 starts at 300.
    let range = visible_extent_range(&entries, 100, 200).unwrap();
    assert_eq!(range, Some(VisibleRange::new(1, 1)));
}

#[test]
fn visible_range_is_none_when_nothing_intersects() {
    let empty: [Entry; 0] = [];
    assert_eq!(visible_extent_range(&empty, 0, 10).unwrap(), None);

    let entries = entries_from(&[(0, 10), (50, 10)]);
    // Past the last entry.
    assert_eq!(visible_extent_range(&entries, 60, 100).unwrap(), None);
    // Inside the gap between the two entries.
    assert_eq!(visible_extent_range(&entries, 10, 40).unwrap(), None);
}

#[test]
fn visible_range_rejects_zero_sized_viewport() {
    let entries = entries_from(&[(0, 10)]);
    assert_eq!(
        visible_extent_range(&entries, 0, 0),
        Err(Error::EmptyViewport)
    );
}

#[test]
fn validate_entries_reports_first_overlap() {
    let ok = entries_from(&[(0, 10), (10, 0), (10, 5), (20, 1)]);
    assert_eq!(validate_entries(&ok, |e| e.offset, |e| e.size), Ok(()));

    let overlapping = entries_from(&[(0, 10), (10, 10), (15, 10)]);
    assert_eq!(
        validate_entries(&overlapping, |e| e.offset, |e| e.size),
        Err(Error::UnsortedEntries { index: 2 })
    );
}

#[test]
#[should_panic]
#[cfg(debug_assertions)]
fn visible_range_panics_on_unsorted_entries_in_debug_builds() {
    let entries = entries_from(&[(100, 10), (0, 10)]);
    let _ = visible_extent_range(&entries, 0, 50);
}

#[test]
fn boundary_check_rejects_entries_that_contradict_the_search() {
    let entries = entries_from(&[(100, 10), (0, 10), (200, 10)]);
    let check = |start, end_exclusive| {
        crate::range::check_boundaries(
            &entries,
            start,
            end_exclusive,
            0,
            50,
            |e: &Entry| e.offset,
            |e: &Entry| e.size,
        )
    };
    // Entry 0 lies outside [0, 50) yet would open the range; the full scan names entry 1.
    assert_eq!(check(0, 2), Err(Error::UnsortedEntries { index: 1 }));
    assert_eq!(check(2, 1), Err(Error::UnsortedEntries { index: 1 }));

    let sorted = entries_from(&[(0, 10), (10, 0), (10, 30), (60, 10)]);
    for (offset, size) in [(0, 50), (5, 5), (40, 20), (45, 5), (70, 10)] {
        assert!(visible_extent_range(&sorted, offset, size).is_ok());
    }
}

#[test]
#[cfg(not(debug_assertions))]
fn visible_range_rejects_unsorted_entries_in_release_builds() {
    let entries = entries_from(&[(100, 10), (0, 10), (200, 10)]);
    assert_eq!(
        visible_extent_range(&entries, 0, 50),
        Err(Error::UnsortedEntries { index: 1 })
    );
}

#[test]
fn overscan_expands_and_clamps() {
    let range = VisibleRange::new(2, 4);
    assert_eq!(range.len(), 3);
    assert!(range.contains(2) && range.contains(4) && !range.contains(5));
    assert_eq!(range.indices().collect::<Vec<_>>(), vec![2, 3, 4]);
    assert_eq!(range.as_slice_range(), 2..5);

    assert_eq!(range.with_overscan(1, 10), VisibleRange::new(1, 5));
    assert_eq!(range.with_overscan(5, 6), VisibleRange::new(0, 5));
    assert_eq!(range.with_overscan(0, 10), range);
}

#[test]
fn property_visible_range_partitions_entries_and_matches_linear_scan() {
    let mut rng = Lcg::new(42);
    for _ in 0..2_000 {
        let entries = random_entries(&mut rng);
        let total = entries.last().map_or(0, |e| e.end());
        let scroll_offset = rng.gen_range_u64(0, total + 20);
        let scroll_view_size = rng.gen_range_u32(1, 40);

        let range = visible_extent_range(&entries, scroll_offset, scroll_view_size).unwrap();
        assert_eq!(
            range,
            expected_visible_range(&entries, scroll_offset, scroll_view_size),
            "entries={entries:?} scroll_offset={scroll_offset} size={scroll_view_size}"
        );

        for (i, entry) in entries.iter().enumerate() {
            let inside = range.is_some_and(|r| r.contains(i));
            assert_eq!(
                inside,
                intersects(entry, scroll_offset, scroll_view_size),
                "index {i} misclassified"
            );
        }
    }
}

#[test]
fn rows_for_expanded_leaf_without_rows() {
    let groups = vec![Group::ancestor(vec![Group::leaf(0)])];
    let out = rows(&groups, RowHeights::new(56, 40, 72), &[], 0);
    assert_eq!(
        out,
        vec![
            Row::Group {
                height: 56,
                y: 0,
                path: GroupPath::from([0]),
                collapsed: false
            },
            Row::Group {
                height: 56,
                y: 56,
                path: GroupPath::from([0, 0]),
                collapsed: false
            },
            Row::Spacer { height: 72, y: 112 },
        ]
    );
}

#[test]
fn rows_skip_content_of_collapsed_leaf() {
    let groups = vec![Group::ancestor(vec![Group::leaf(5).with_collapsed(true)])];
    let out = rows(&groups, RowHeights::new(56, 40, 72), &[], 0);
    assert_eq!(
        out,
        vec![
            Row::Group {
                height: 56,
                y: 0,
                path: GroupPath::from([0]),
                collapsed: false
            },
            Row::Group {
                height: 56,
                y: 56,
                path: GroupPath::from([0, 0]),
                collapsed: true
            },
            Row::Spacer { height: 72, y: 112 },
        ]
    );
}

#[test]
fn rows_of_empty_forest_is_a_single_spacer() {
    let out = rows(&[], RowHeights::new(10, 5, 3), &[], 42);
    assert_eq!(out, vec![Row::Spacer { height: 3, y: 42 }]);
    assert_eq!(total_height(&out), 45);
}

#[test]
fn rows_number_leaf_content_and_nest_paths() {
    let groups = vec![
        Group::ancestor(vec![Group::leaf(2), Group::leaf(1).with_collapsed(true)]),
        Group::leaf(1),
    ];
    let out = rows(&groups, RowHeights::new(10, 5, 3), &[], 0);
    let summary: Vec<(RowId, u64)> = out.iter().map(|r| (r.id(), r.y())).collect();
    assert_eq!(
        summary,
        vec![
            (RowId::Group(GroupPath::from([0])), 0),
            (RowId::Group(GroupPath::from([0, 0])), 10),
            (RowId::Leaf(GroupPath::from([0, 0]), 1), 20),
            (RowId::Leaf(GroupPath::from([0, 0]), 2), 25),
            (RowId::Group(GroupPath::from([0, 1])), 30),
            (RowId::Group(GroupPath::from([1])), 40),
            (RowId::Leaf(GroupPath::from([1]), 1), 50),
            (RowId::Spacer, 55),
        ]
    );
    assert_eq!(out.iter().filter(|r| r.is_spacer()).count(), 1);
    assert_eq!(out.iter().filter(|r| r.is_leaf()).count(), 3);
    assert_eq!(out.iter().filter(|r| r.is_group()).count(), 4);
    assert_eq!(out[4].path(), Some(&GroupPath::from([0, 1])));
    assert_eq!(out[7].path(), None);
}

#[test]
fn rows_of_sub_forest_continue_path_and_offset() {
    let out = rows(&[Group::leaf(1)], RowHeights::new(10, 5, 3), &[3, 2], 100);
    assert_eq!(
        out,
        vec![
            Row::Group {
                height: 10,
                y: 100,
                path: GroupPath::from([3, 2, 0]),
                collapsed: false
            },
            Row::Leaf {
                height: 5,
                y: 110,
                path: GroupPath::from([3, 2, 0]),
                row: 1
            },
            Row::Spacer { height: 3, y: 115 },
        ]
    );
}

#[test]
fn collapsed_ancestor_hides_every_descendant() {
    let groups = vec![
        Group::ancestor(vec![Group::ancestor(vec![Group::leaf(3)]), Group::leaf(2)])
            .with_collapsed(true),
    ];
    let out = rows(&groups, RowHeights::new(10, 5, 0), &[], 0);
    assert_eq!(out.len(), 2);
    assert!(out[0].is_group());
    assert_eq!(out[1], Row::Spacer { height: 0, y: 10 });
}

#[test]
fn property_rows_conserve_height_and_respect_collapse() {
    let mut rng = Lcg::new(7);
    for _ in 0..500 {
        let groups = random_forest(&mut rng, 3);
        let heights = RowHeights::new(
            rng.gen_range_u32(0, 60),
            rng.gen_range_u32(0, 40),
            rng.gen_range_u32(0, 80),
        );
        let start_y = rng.gen_range_u64(0, 1_000);
        let out = rows(&groups, heights, &[], start_y);

        let (spacer, body) = out.split_last().unwrap();
        assert!(spacer.is_spacer());
        assert!(body.iter().all(|r| !r.is_spacer()));
        let consumed: u64 = body.iter().map(|r| r.height() as u64).sum();
        assert_eq!(spacer.y(), start_y + consumed);
        assert_eq!(spacer.height(), heights.spacer);

        // Rows tile the axis without gaps.
        let mut y = start_y;
        for row in &out {
            assert_eq!(row.y(), y);
            y = row.end();
        }
        assert_eq!(
            validate_entries(&out, |r| r.offset(), |r| r.size()),
            Ok(())
        );

        let mut hidden = Vec::new();
        hidden_paths(&groups, &[], false, &mut hidden);
        for row in body {
            let path = row.path().unwrap();
            assert!(
                !hidden.iter().any(|h| h.as_slice() == path.as_slice()),
                "row {row:?} belongs to a collapsed subtree"
            );
            let group = group_at(&groups, path).unwrap();
            if row.is_leaf() {
                assert!(!group.collapsed(), "collapsed leaf {path:?} emitted content");
            }
        }
    }
}

#[test]
fn group_paths_navigate_and_toggle_the_forest() {
    let mut groups = vec![
        Group::ancestor(vec![Group::leaf(1), Group::ancestor(vec![Group::leaf(4)])]),
        Group::leaf(2),
    ];

    assert_eq!(group_at(&groups, &[0, 1, 0]), Some(&Group::leaf(4)));
    assert_eq!(group_at(&groups, &[]), None);
    assert_eq!(group_at(&groups, &[1, 0]), None);
    assert_eq!(group_at(&groups, &[2]), None);

    assert!(set_collapsed(&mut groups, &[0, 1], true));
    assert!(!set_collapsed(&mut groups, &[0, 1], true));
    assert!(group_at(&groups, &[0, 1]).unwrap().collapsed());
    assert!(!set_collapsed(&mut groups, &[9], true));

    let path = GroupPath::from([0, 1, 0]);
    assert_eq!(path.depth(), 3);
    assert_eq!(path.parent(), Some(GroupPath::from([0, 1])));
    assert_eq!(GroupPath::from([0]).parent(), None);
    assert_eq!(GroupPath::from([0]).child(1), GroupPath::from([0, 1]));
    assert!(path.is_within(&GroupPath::from([0, 1])));
    assert!(!GroupPath::from([0, 1]).is_within(&path));
}

#[test]
fn recycle_hands_freed_keys_to_new_values_in_order() {
    let prev = vec![Keyed::new(1, 1u32), Keyed::new(2, 2), Keyed::new(3, 3)];
    let mut keys = KeyAllocator::new();
    let out = recycle_keyed(&[4u32, 5], &prev, &mut keys).unwrap();
    assert_eq!(out, vec![Keyed::new(1, 4), Keyed::new(2, 5)]);
}

#[test]
fn recycle_keeps_keys_of_surviving_values() {
    let mut keys = KeyAllocator::new();
    let first = recycle_keyed(&['a', 'b', 'c'], &[], &mut keys).unwrap();
    assert_eq!(
        first,
        vec![Keyed::new(0, 'a'), Keyed::new(1, 'b'), Keyed::new(2, 'c')]
    );

    // Reorder, drop 'b', insert 'd' and 'e'.
    let second = recycle_keyed(&['d', 'c', 'a', 'e'], &first, &mut keys).unwrap();
    assert_eq!(
        second,
        vec![
            Keyed::new(1, 'd'), // recycled from 'b'
            Keyed::new(2, 'c'),
            Keyed::new(0, 'a'),
            Keyed::new(3, 'e'), // minted
        ]
    );
    assert_eq!(keys.peek(), Some(4));
}

#[test]
fn recycle_pairs_duplicate_values_leftmost_first() {
    let prev = vec![Keyed::new(10, 'x'), Keyed::new(11, 'y'), Keyed::new(12, 'x')];
    let mut keys = KeyAllocator::new();
    let out = recycle_keyed(&['x', 'x', 'x'], &prev, &mut keys).unwrap();
    assert_eq!(
        out,
        vec![Keyed::new(10, 'x'), Keyed::new(12, 'x'), Keyed::new(11, 'x')]
    );
}

#[test]
fn recycle_mints_above_every_previous_key() {
    let prev = vec![Keyed::new(40, 1u32)];
    let mut keys = KeyAllocator::starting_at(5);
    let out = recycle_keyed(&[1u32, 2, 3], &prev, &mut keys).unwrap();
    assert_eq!(
        out,
        vec![Keyed::new(40, 1), Keyed::new(41, 2), Keyed::new(42, 3)]
    );
    assert_distinct_keys(&out);
}

#[test]
fn recycle_rejects_duplicate_previous_keys() {
    let prev = vec![Keyed::new(1, 'a'), Keyed::new(1, 'b')];
    let mut keys = KeyAllocator::new();
    assert_eq!(
        recycle_keyed(&['a'], &prev, &mut keys),
        Err(Error::DuplicateKey { key: 1 })
    );
}

#[test]
fn key_allocator_reports_exhaustion() {
    let mut keys = KeyAllocator::starting_at(u64::MAX);
    assert_eq!(keys.mint(), Ok(u64::MAX));
    assert_eq!(keys.peek(), None);
    assert_eq!(keys.mint(), Err(Error::KeysExhausted));

    let prev = vec![Keyed::new(u64::MAX, 0u32)];
    let mut keys = KeyAllocator::new();
    assert_eq!(
        recycle_keyed(&[0u32, 1], &prev, &mut keys),
        Err(Error::KeysExhausted)
    );
}

#[test]
fn recycle_items_builds_caller_records() {
    #[derive(Debug, PartialEq)]
    struct Cell {
        label: &'static str,
        width: u32,
        key: u64,
    }

    let prev = vec![
        Cell {
            label: "name",
            width: 80,
            key: 7,
        },
        Cell {
            label: "size",
            width: 40,
            key: 3,
        },
    ];
    let next = [("size", 60u32), ("date", 90)];
    let mut keys = KeyAllocator::new();
    let out = recycle_items(
        &next,
        &prev,
        &mut keys,
        |&(label, _)| label,
        |cell| cell.label,
        |cell| cell.key,
        |&(label, width), key| Cell { label, width, key },
    )
    .unwrap();
    assert_eq!(
        out,
        vec![
            Cell {
                label: "size",
                width: 60,
                key: 3
            },
            Cell {
                label: "date",
                width: 90,
                key: 7
            },
        ]
    );
}

#[test]
fn property_recycle_matches_reference_and_is_stable_when_fed_back() {
    let mut rng = Lcg::new(0xDEADBEEF);
    let mut keys = KeyAllocator::new();
    let mut prev: Vec<Keyed<u32>> = Vec::new();
    for _ in 0..500 {
        let items: Vec<u32> = (0..rng.gen_range_usize(0, 20))
            .map(|_| rng.gen_range_u32(0, 8))
            .collect();
        let next_key = keys.peek().unwrap();
        let out = recycle_keyed(&items, &prev, &mut keys).unwrap();

        assert_eq!(out.len(), items.len());
        assert_distinct_keys(&out);
        let got: Vec<u64> = out.iter().map(|k| k.key).collect();
        assert_eq!(got, expected_recycled_keys(&items, &prev, next_key));
        assert!(out.iter().zip(&items).all(|(k, v)| k.value == *v));

        // Feeding the output straight back is a fixed point.
        let again = recycle_keyed(&items, &out, &mut keys).unwrap();
        assert_eq!(again, out);

        prev = out;
    }
}

#[test]
fn recycled_rows_keep_keys_when_scrolling() {
    let groups = vec![Group::leaf(100)];
    let all = rows(&groups, RowHeights::new(10, 10, 0), &[], 0);
    let mut keys = KeyAllocator::new();

    let window = |offset: u64| {
        let range = visible_extent_range(&all, offset, 50).unwrap().unwrap();
        all[range.as_slice_range()]
            .iter()
            .map(Row::id)
            .collect::<Vec<_>>()
    };

    let first = recycle_keyed(&window(0), &[], &mut keys).unwrap();
    let second = recycle_keyed(&window(20), &first, &mut keys).unwrap();

    // Rows 2..=4 stay on screen and keep their keys; rows scrolled off hand theirs over.
    for kept in &second[..3] {
        let before = first.iter().find(|k| k.value == kept.value).unwrap();
        assert_eq!(before.key, kept.key);
    }
    assert_eq!(keys.peek(), Some(5));
    assert_distinct_keys(&second);
}

#[test]
fn example_basic_smoke() {
    let cols = columns(&[120, 80, 200, 80]);
    let visible = visible_extent_range(&cols, 150, 150).unwrap().unwrap();
    assert_eq!(visible, VisibleRange::new(1, 2));
    assert_eq!(visible.with_overscan(1, cols.len()), VisibleRange::new(0, 3));
}
