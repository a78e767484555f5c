use alloc::vec::Vec;

use virtualgrid::{
    Column, Error, Group, KeyAllocator, Keyed, Row, RowHeights, VisibleRange, group_at,
    recycle_items, visible_extent_range,
};

use crate::{GridOptions, Rect, ScrollAnchor, apply_anchor, capture_first_visible_anchor};

/// The rows and columns to render for one tick, each carrying a recycled rendering key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub rows: Vec<Keyed<Row>>,
    pub columns: Vec<Keyed<Column>>,
    /// Overscanned row range, as indexes into `GridController::rows`.
    pub row_range: Option<VisibleRange>,
    /// Overscanned column range, as indexes into `GridController::columns`.
    pub column_range: Option<VisibleRange>,
}

impl Frame {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.columns.is_empty()
    }
}

/// A framework-neutral controller for one grouped, virtualized grid.
///
/// It owns everything the `virtualgrid` functions leave to the call site: the group forest and
/// its flattened rows, the column layout, viewport and scroll offsets, and the previous frame plus
/// key allocators that make rendering keys survive from one frame to the next.
///
/// Adapters drive it by calling:
/// - `set_rect` / `on_scroll` when UI events occur
/// - `set_groups` / `toggle_collapsed` when data or collapse state changes
/// - `frame()` once per render tick
#[derive(Clone, Debug)]
pub struct GridController {
    options: GridOptions,
    groups: Vec<Group>,
    rows: Vec<Row>,
    columns: Vec<Column>,

    rect: Rect,
    scroll_top: u64,
    scroll_left: u64,

    row_keys: KeyAllocator,
    column_keys: KeyAllocator,
    prev_rows: Vec<Keyed<Row>>,
    prev_columns: Vec<Keyed<Column>>,
}

impl GridController {
    pub fn new(options: GridOptions) -> Self {
        vdebug!(
            columns = options.column_widths.len(),
            overscan = options.overscan,
            "GridController::new"
        );
        let mut c = Self {
            rect: options.initial_rect.unwrap_or_default(),
            columns: virtualgrid::columns(&options.column_widths),
            options,
            groups: Vec::new(),
            rows: Vec::new(),
            scroll_top: 0,
            scroll_left: 0,
            row_keys: KeyAllocator::new(),
            column_keys: KeyAllocator::new(),
            prev_rows: Vec::new(),
            prev_columns: Vec::new(),
        };
        c.reflatten();
        c
    }

    pub fn with_groups(mut self, groups: Vec<Group>) -> Self {
        self.set_groups(groups);
        self
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    /// Replaces the options and rebuilds the row and column layouts.
    ///
    /// `initial_rect` is only consulted by [`Self::new`]; the current viewport is kept.
    pub fn set_options(&mut self, options: GridOptions) {
        self.options = options;
        self.columns = virtualgrid::columns(&self.options.column_widths);
        self.reflatten();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut GridOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_heights(&mut self, heights: RowHeights) {
        if self.options.heights == heights {
            return;
        }
        self.options.heights = heights;
        self.reflatten();
    }

    pub fn set_column_widths(&mut self, column_widths: Vec<u32>) {
        self.columns = virtualgrid::columns(&column_widths);
        self.options.column_widths = column_widths;
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn set_groups(&mut self, groups: Vec<Group>) {
        self.groups = groups;
        self.reflatten();
    }

    /// The full flattened row sequence (headers, content rows and the trailing spacer).
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn scroll_top(&self) -> u64 {
        self.scroll_top
    }

    pub fn scroll_left(&self) -> u64 {
        self.scroll_left
    }

    /// Applies scroll offsets reported by the UI as-is.
    pub fn on_scroll(&mut self, scroll_top: u64, scroll_left: u64) {
        vtrace!(scroll_top, scroll_left, "GridController::on_scroll");
        self.scroll_top = scroll_top;
        self.scroll_left = scroll_left;
    }

    /// Same as `on_scroll`, but clamps both offsets to the scrollable extent.
    pub fn set_scroll_clamped(&mut self, scroll_top: u64, scroll_left: u64) {
        self.scroll_top = scroll_top.min(self.max_scroll_top());
        self.scroll_left = scroll_left.min(self.max_scroll_left());
    }

    pub fn total_height(&self) -> u64 {
        virtualgrid::total_height(&self.rows)
    }

    pub fn total_width(&self) -> u64 {
        virtualgrid::total_width(&self.columns)
    }

    pub fn max_scroll_top(&self) -> u64 {
        self.total_height().saturating_sub(self.rect.main as u64)
    }

    pub fn max_scroll_left(&self) -> u64 {
        self.total_width().saturating_sub(self.rect.cross as u64)
    }

    /// Collapses or expands the group at `path`, keeping the first visible row in place.
    ///
    /// Returns `false` (and changes nothing) if `path` names no group or the flag already has
    /// the requested value.
    pub fn set_collapsed(&mut self, path: &[usize], collapsed: bool) -> bool {
        let anchor = capture_first_visible_anchor(self);
        if !virtualgrid::set_collapsed(&mut self.groups, path, collapsed) {
            return false;
        }
        self.reflatten();
        if let Some(anchor) = anchor {
            apply_anchor(self, &anchor);
        }
        true
    }

    pub fn toggle_collapsed(&mut self, path: &[usize]) -> bool {
        let Some(group) = group_at(&self.groups, path) else {
            return false;
        };
        let collapsed = !group.collapsed();
        self.set_collapsed(path, collapsed)
    }

    /// Rows intersecting the viewport (no overscan); `None` when the viewport is empty.
    pub fn visible_row_range(&self) -> Result<Option<VisibleRange>, Error> {
        if self.rect.main == 0 {
            return Ok(None);
        }
        visible_extent_range(&self.rows, self.scroll_top, self.rect.main)
    }

    /// Columns intersecting the viewport (no overscan); `None` when the viewport is empty.
    pub fn visible_column_range(&self) -> Result<Option<VisibleRange>, Error> {
        if self.rect.cross == 0 {
            return Ok(None);
        }
        visible_extent_range(&self.columns, self.scroll_left, self.rect.cross)
    }

    /// Computes the rows and columns to render and assigns them rendering keys.
    ///
    /// Rows are recycled by [`virtualgrid::RowId`] and columns by column number against the
    /// previous frame, which this call then replaces. A row that stays on screen therefore keeps
    /// its key, and rows scrolling in take over the keys of rows scrolling out.
    pub fn frame(&mut self) -> Result<Frame, Error> {
        let row_range = self
            .visible_row_range()?
            .map(|r| r.with_overscan(self.options.overscan, self.rows.len()));
        let column_range = self
            .visible_column_range()?
            .map(|r| r.with_overscan(self.options.column_overscan, self.columns.len()));

        let rows = recycle_items(
            window(&self.rows, row_range),
            &self.prev_rows,
            &mut self.row_keys,
            Row::id,
            |prev| prev.value.id(),
            |prev| prev.key,
            |row, key| Keyed::new(key, row.clone()),
        )?;
        let columns = recycle_items(
            window(&self.columns, column_range),
            &self.prev_columns,
            &mut self.column_keys,
            |col| col.column,
            |prev| prev.value.column,
            |prev| prev.key,
            |col, key| Keyed::new(key, *col),
        )?;

        vtrace!(
            scroll_top = self.scroll_top,
            scroll_left = self.scroll_left,
            rows = rows.len(),
            columns = columns.len(),
            "GridController::frame"
        );

        self.prev_rows.clone_from(&rows);
        self.prev_columns.clone_from(&columns);
        Ok(Frame {
            rows,
            columns,
            row_range,
            column_range,
        })
    }

    /// Forgets the previous frame; the next frame gets only keys never handed out before.
    pub fn reset_keys(&mut self) {
        self.prev_rows.clear();
        self.prev_columns.clear();
    }

    pub fn capture_first_visible_anchor(&self) -> Option<ScrollAnchor> {
        capture_first_visible_anchor(self)
    }

    pub fn apply_anchor(&mut self, anchor: &ScrollAnchor) -> bool {
        apply_anchor(self, anchor)
    }

    fn reflatten(&mut self) {
        self.rows = virtualgrid::rows(
            &self.groups,
            self.options.heights,
            &[],
            self.options.start_y,
        );
        vdebug!(
            roots = self.groups.len(),
            rows = self.rows.len(),
            total_height = self.total_height(),
            "GridController::reflatten"
        );
    }
}

fn window<T>(items: &[T], range: Option<VisibleRange>) -> &[T] {
    range.map_or(&[], |r| &items[r.as_slice_range()])
}
