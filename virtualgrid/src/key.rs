#[cfg(not(feature = "std"))]
use alloc::collections::{BTreeMap, BTreeSet};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

use crate::ItemKey;

#[cfg(feature = "std")]
pub(crate) type ValueMap<V, T> = HashMap<V, T>;
#[cfg(not(feature = "std"))]
pub(crate) type ValueMap<V, T> = BTreeMap<V, T>;

#[cfg(feature = "std")]
pub(crate) type KeySet = HashSet<ItemKey>;
#[cfg(not(feature = "std"))]
pub(crate) type KeySet = BTreeSet<ItemKey>;

// Bound on values compared by `recycle_items`: `Hash + Eq` with `std`, `Ord` without it.
#[cfg(feature = "std")]
#[doc(hidden)]
pub trait RecycleValue: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<V: core::hash::Hash + Eq> RecycleValue for V {}

#[cfg(not(feature = "std"))]
#[doc(hidden)]
pub trait RecycleValue: Ord {}
#[cfg(not(feature = "std"))]
impl<V: Ord> RecycleValue for V {}
