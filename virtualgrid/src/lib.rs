//! Headless building blocks for virtualized, hierarchically grouped grids.
//!
//! For a stateful grid controller (frames, anchoring across collapse toggles), see the
//! `virtualgrid-adapter` crate.
//!
//! This crate holds four independent, pure algorithms that a rendering layer composes on every
//! scroll or render tick:
//! - [`columns`]: lay out a strip of sized columns (prefix sums over widths)
//! - [`visible_index_range`]: binary-search the entries intersecting a viewport window
//! - [`rows`]: flatten a forest of collapsible groups into positioned header/content/spacer rows
//! - [`recycle_items`]: carry stable rendering keys from one snapshot of a slice to the next
//!
//! It is UI-agnostic and keeps no state between calls. The host layer provides:
//! - viewport size and scroll offset
//! - column widths, row heights and the group forest
//! - the previous recycled slice and a [`KeyAllocator`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod columns;
mod error;
mod group;
mod key;
mod range;
mod recycle;
mod rows;
mod types;

#[cfg(test)]
mod tests;

pub use columns::{Column, column_at_x, columns, total_width};
pub use error::Error;
pub use group::{Group, GroupPath, group_at, group_at_mut, set_collapsed};
pub use key::RecycleValue;
pub use range::{validate_entries, visible_extent_range, visible_index_range};
pub use recycle::{KeyAllocator, recycle_items, recycle_keyed};
pub use rows::{Row, RowHeights, RowId, rows, total_height};
pub use types::{Entry, Extent, ItemKey, Keyed, VisibleRange};
