//! Adapter utilities for the `virtualgrid` crate.
//!
//! The `virtualgrid` crate is stateless and only holds the layout and keying algorithms. This
//! crate provides a small, framework-neutral controller that composes them for one grid:
//!
//! - [`GridController`]: owns the group forest, viewport, scroll offsets and the previous frame,
//!   and produces keyed [`Frame`]s to render
//! - Scroll anchoring, so collapsing a group above the viewport does not make content jump
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;
mod options;


pub use anchor::{ScrollAnchor, apply_anchor, capture_first_visible_anchor};
pub use controller::{Frame, GridController};
pub use options::{GridOptions, Rect};
pub use virtualgrid::Error;
