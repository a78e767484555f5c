use virtualgrid::{Row, RowId};

use crate::GridController;

/// A scroll anchor that can be used to preserve visual position across forest changes.
///
/// Typical use cases:
/// - collapsing or expanding a group above the viewport without content jumping
/// - replacing the forest while the rows on screen keep their identity
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnchor {
    pub id: RowId,
    /// The viewport's scroll offset minus the anchor row's start.
    ///
    /// Negative when the row starts below the top edge, e.g. at the top of a grid whose rows begin
    /// at `GridOptions::start_y`.
    pub offset_in_viewport: i64,
}

/// Captures an anchor for the first visible row (by identity).
///
/// Returns `None` if the viewport is empty or no row intersects it.
pub fn capture_first_visible_anchor(c: &GridController) -> Option<ScrollAnchor> {
    let visible = c.visible_row_range().ok().flatten()?;
    let row = c.rows().get(visible.start_index)?;
    Some(ScrollAnchor {
        id: row.id(),
        offset_in_viewport: signed_distance(row.y(), c.scroll_top()),
    })
}

/// Applies a previously captured anchor by adjusting the vertical scroll offset.
///
/// If the anchored row is gone because a group containing it collapsed, the viewport snaps to the
/// header of the closest enclosing group that is still present.
///
/// Returns `true` when the anchor (or its fallback) was applied.
pub fn apply_anchor(c: &mut GridController, anchor: &ScrollAnchor) -> bool {
    let target = match find_row(c.rows(), &anchor.id) {
        Some(row) => row.y().saturating_add_signed(anchor.offset_in_viewport),
        None => match fallback_header(c.rows(), &anchor.id) {
            Some(row) => {
                vdebug!(y = row.y(), "apply_anchor: anchored row hidden, using enclosing header");
                row.y()
            }
            None => {
                vwarn!(id = ?anchor.id, "apply_anchor: no surviving row for anchor");
                return false;
            }
        },
    };
    let left = c.scroll_left();
    c.set_scroll_clamped(target, left);
    true
}

/// `to - from`, saturated to the `i64` range.
fn signed_distance(from: u64, to: u64) -> i64 {
    if to >= from {
        i64::try_from(to - from).unwrap_or(i64::MAX)
    } else {
        i64::try_from(from - to).map_or(i64::MIN, |d| -d)
    }
}

fn find_row<'a>(rows: &'a [Row], id: &RowId) -> Option<&'a Row> {
    rows.iter().find(|row| row.id() == *id)
}

fn fallback_header<'a>(rows: &'a [Row], id: &RowId) -> Option<&'a Row> {
    let mut path = match id {
        RowId::Leaf(path, _) => Some(path.clone()),
        RowId::Group(path) => path.parent(),
        RowId::Spacer => None,
    };
    while let Some(p) = path {
        if let Some(row) = find_row(rows, &RowId::Group(p.clone())) {
            return Some(row);
        }
        path = p.parent();
    }
    None
}
