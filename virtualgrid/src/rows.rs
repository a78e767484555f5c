use alloc::vec::Vec;

use crate::{Extent, Group, GroupPath};

/// Heights charged by [`rows`] for each kind of row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowHeights {
    /// Header row of every group, ancestor or leaf.
    pub group: u32,
    /// Each content row under an expanded leaf.
    pub leaf: u32,
    /// The single trailing spacer.
    pub spacer: u32,
}

impl RowHeights {
    pub fn new(group: u32, leaf: u32, spacer: u32) -> Self {
        Self {
            group,
            leaf,
            spacer,
        }
    }

    pub fn with_group(mut self, group: u32) -> Self {
        self.group = group;
        self
    }

    pub fn with_leaf(mut self, leaf: u32) -> Self {
        self.leaf = leaf;
        self
    }

    pub fn with_spacer(mut self, spacer: u32) -> Self {
        self.spacer = spacer;
        self
    }
}

/// One positioned row of a flattened group forest.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Row {
    /// Header of the group at `path`.
    Group {
        height: u32,
        y: u64,
        path: GroupPath,
        collapsed: bool,
    },
    /// Content row `row` (1-based) of the leaf group at `path`.
    Leaf {
        height: u32,
        y: u64,
        path: GroupPath,
        row: u32,
    },
    /// Trailing filler after the last group.
    Spacer { height: u32, y: u64 },
}

/// Logical identity of a [`Row`], independent of its position.
///
/// Stable across re-flattening as long as the forest shape is stable, which makes it the natural
/// value to recycle rendering keys by.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowId {
    Group(GroupPath),
    Leaf(GroupPath, u32),
    Spacer,
}

impl Row {
    pub fn y(&self) -> u64 {
        match self {
            Self::Group { y, .. } | Self::Leaf { y, .. } | Self::Spacer { y, .. } => *y,
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            Self::Group { height, .. }
            | Self::Leaf { height, .. }
            | Self::Spacer { height, .. } => *height,
        }
    }

    /// Path of the group this row belongs to; `None` for the spacer.
    pub fn path(&self) -> Option<&GroupPath> {
        match self {
            Self::Group { path, .. } | Self::Leaf { path, .. } => Some(path),
            Self::Spacer { .. } => None,
        }
    }

    pub fn id(&self) -> RowId {
        match self {
            Self::Group { path, .. } => RowId::Group(path.clone()),
            Self::Leaf { path, row, .. } => RowId::Leaf(path.clone(), *row),
            Self::Spacer { .. } => RowId::Spacer,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    pub fn is_spacer(&self) -> bool {
        matches!(self, Self::Spacer { .. })
    }
}

impl Extent for Row {
    fn offset(&self) -> u64 {
        self.y()
    }

    fn size(&self) -> u32 {
        self.height()
    }
}

/// Flattens a group forest into positioned rows, depth-first and in sibling order.
///
/// Every group contributes a header row of `heights.group`. An expanded ancestor is followed by
/// its flattened children; an expanded leaf by `row_count` content rows numbered from 1. A
/// collapsed group contributes only its header, whatever its descendants look like.
///
/// `start_path` and `start_y` place `groups` inside a larger forest: the first group gets path
/// `start_path + [0]` and starts at `start_y`. Exactly one spacer row of `heights.spacer` closes
/// the output, so an empty `groups` yields just the spacer at `start_y`.
pub fn rows(groups: &[Group], heights: RowHeights, start_path: &[usize], start_y: u64) -> Vec<Row> {
    let mut out = Vec::with_capacity(groups.len() + 1);
    let mut path = start_path.to_vec();
    let y = flatten_into(groups, heights, &mut path, start_y, &mut out);
    out.push(Row::Spacer {
        height: heights.spacer,
        y,
    });
    vtrace!(
        roots = groups.len(),
        rows = out.len(),
        start_y,
        end_y = y,
        "rows"
    );
    out
}

/// Appends the rows for `groups` to `out` and returns the offset just past them.
///
/// `path` holds the prefix of the current sibling list and is restored before returning.
fn flatten_into(
    groups: &[Group],
    heights: RowHeights,
    path: &mut Vec<usize>,
    mut y: u64,
    out: &mut Vec<Row>,
) -> u64 {
    for (i, group) in groups.iter().enumerate() {
        path.push(i);
        let current = GroupPath::from(path.as_slice());
        out.push(Row::Group {
            height: heights.group,
            y,
            path: current.clone(),
            collapsed: group.collapsed(),
        });
        y = y.saturating_add(heights.group as u64);

        match group {
            Group::Ancestor {
                collapsed: false,
                children,
            } => {
                y = flatten_into(children, heights, path, y, out);
            }
            Group::Leaf {
                collapsed: false,
                row_count,
            } => {
                out.reserve(*row_count as usize);
                for row in 1..=*row_count {
                    out.push(Row::Leaf {
                        height: heights.leaf,
                        y,
                        path: current.clone(),
                        row,
                    });
                    y = y.saturating_add(heights.leaf as u64);
                }
            }
            Group::Ancestor {
                collapsed: true, ..
            }
            | Group::Leaf {
                collapsed: true, ..
            } => {}
        }

        path.pop();
    }
    y
}

/// Bottom edge of the last row, or 0 when there are none.
pub fn total_height(rows: &[Row]) -> u64 {
    rows.last().map_or(0, |row| row.end())
}
