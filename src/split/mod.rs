//! Binary split tree hosting the session groups of a window.
//!
//! Nodes live in a slot-map arena and refer to each other by [`SplitId`].
//! Every internal node has exactly two children; every leaf holds a
//! non-empty [`SessionGroup`](crate::group::SessionGroup). Removing the last
//! session of a leaf contracts the tree by promoting the leaf's sibling into
//! the shared parent's slot.

mod tree;
mod types;

#[cfg(test)]
mod tests;

pub use tree::{RemoveOutcome, SplitTree};
pub use types::{DividerRect, Leaf, Orientation, PaneBounds, SplitId, SplitKind, SplitNode};
