//! Typed errors for the layout engine.
//!
//! Every variant describes a caller or invariant error. Operations that
//! return one of these leave the tree, the groups and the focus state exactly
//! as they were before the call.

use crate::session::SessionId;
use crate::split::SplitId;
use thiserror::Error;

/// Errors returned by split tree, window and manager operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// The node exists but is an internal split, not a leaf.
    #[error("split node {0:?} is not a leaf")]
    NotALeaf(SplitId),

    /// The node id no longer resolves (removed by a contraction).
    #[error("split node {0:?} not found")]
    NodeNotFound(SplitId),

    /// No leaf in the tree owns this session.
    #[error("session {0} not found")]
    SessionNotFound(SessionId),

    /// No window with this id is registered.
    #[error("window {0} not found")]
    WindowNotFound(u64),

    /// A selector operation was issued for a leaf without an active selector.
    #[error("no selector active for session {0}")]
    SelectorInactive(SessionId),

    /// No split with the requested orientation encloses the session.
    #[error("no enclosing split for session {0}")]
    NoEnclosingSplit(SessionId),

    /// The selector needs at least two sessions in the leaf.
    #[error("leaf of session {0} holds a single session")]
    SingleSession(SessionId),

    /// The session factory could not create a new session.
    #[error("failed to spawn session: {0}")]
    Spawn(String),

    /// The tree violates its structural invariants; nothing was modified.
    #[error("inconsistent split tree: {0}")]
    InconsistentTree(String),
}
