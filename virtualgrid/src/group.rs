use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Deref;

/// Position of a group within a forest: the sibling index at every level, outermost first.
///
/// Paths are cheap to clone (shared storage) and compare by value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupPath(Arc<[usize]>);

impl GroupPath {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The enclosing group's path, or `None` for a root group (and for the empty path).
    pub fn parent(&self) -> Option<GroupPath> {
        let (_, parent) = self.0.split_last()?;
        (!parent.is_empty()).then(|| GroupPath::from(parent))
    }

    pub fn child(&self, index: usize) -> GroupPath {
        let mut path = Vec::with_capacity(self.0.len() + 1);
        path.extend_from_slice(&self.0);
        path.push(index);
        GroupPath::from(path)
    }

    /// Whether `self` equals `other` or names a group nested inside it.
    pub fn is_within(&self, other: &GroupPath) -> bool {
        self.0.starts_with(&other.0)
    }
}

impl Deref for GroupPath {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl From<&[usize]> for GroupPath {
    fn from(path: &[usize]) -> Self {
        Self(Arc::from(path))
    }
}

impl From<Vec<usize>> for GroupPath {
    fn from(path: Vec<usize>) -> Self {
        Self(Arc::from(path))
    }
}

impl<const N: usize> From<[usize; N]> for GroupPath {
    fn from(path: [usize; N]) -> Self {
        Self::from(&path[..])
    }
}

/// A node of a collapsible group forest.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Group {
    /// A group of further groups.
    Ancestor {
        collapsed: bool,
        children: Vec<Group>,
    },
    /// A group ending in `row_count` homogeneous content rows.
    Leaf { collapsed: bool, row_count: u32 },
}

impl Group {
    pub fn ancestor(children: Vec<Group>) -> Self {
        Self::Ancestor {
            collapsed: false,
            children,
        }
    }

    pub fn leaf(row_count: u32) -> Self {
        Self::Leaf {
            collapsed: false,
            row_count,
        }
    }

    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.set_collapsed(collapsed);
        self
    }

    pub fn collapsed(&self) -> bool {
        match self {
            Self::Ancestor { collapsed, .. } | Self::Leaf { collapsed, .. } => *collapsed,
        }
    }

    pub fn set_collapsed(&mut self, value: bool) {
        match self {
            Self::Ancestor { collapsed, .. } | Self::Leaf { collapsed, .. } => *collapsed = value,
        }
    }

    /// Child groups; always empty for a leaf.
    pub fn children(&self) -> &[Group] {
        match self {
            Self::Ancestor { children, .. } => children,
            Self::Leaf { .. } => &[],
        }
    }
}

/// Looks up the group at `path`. The empty path names no group.
pub fn group_at<'a>(groups: &'a [Group], path: &[usize]) -> Option<&'a Group> {
    let (&first, rest) = path.split_first()?;
    let mut group = groups.get(first)?;
    for &index in rest {
        group = group.children().get(index)?;
    }
    Some(group)
}

pub fn group_at_mut<'a>(groups: &'a mut [Group], path: &[usize]) -> Option<&'a mut Group> {
    let (&first, rest) = path.split_first()?;
    let group = groups.get_mut(first)?;
    if rest.is_empty() {
        return Some(group);
    }
    match group {
        Group::Ancestor { children, .. } => group_at_mut(children, rest),
        Group::Leaf { .. } => None,
    }
}

/// Sets the collapsed flag of the group at `path`.
///
/// Returns `true` only when the flag actually changed.
pub fn set_collapsed(groups: &mut [Group], path: &[usize], collapsed: bool) -> bool {
    match group_at_mut(groups, path) {
        Some(group) if group.collapsed() != collapsed => {
            group.set_collapsed(collapsed);
            true
        }
        _ => false,
    }
}
