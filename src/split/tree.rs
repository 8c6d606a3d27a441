//! Arena-backed split tree: mutation, lookup, traversal and geometry.

use std::collections::HashSet;

use slotmap::SlotMap;

use super::types::{DividerRect, Leaf, Orientation, PaneBounds, SplitId, SplitKind, SplitNode};
use crate::error::LayoutError;
use crate::group::SessionGroup;
use crate::session::SessionId;

/// Bounds applied to every split ratio
const MIN_RATIO: f32 = 0.1;
const MAX_RATIO: f32 = 0.9;

/// Result of removing a session from the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The leaf survived; `current` is its group's new current session
    LeafKept {
        leaf: SplitId,
        current: Option<SessionId>,
    },
    /// The leaf was deleted and its sibling now occupies `promoted`
    Contracted { promoted: SplitId },
    /// The session is the only one in the tree; nothing was changed
    LastSession,
}

/// Full binary tree of leaves (session groups) and internal splits
#[derive(Debug, Clone)]
pub struct SplitTree {
    nodes: SlotMap<SplitId, SplitNode>,
    root: SplitId,
}

impl SplitTree {
    /// Create a tree made of one leaf holding `session`
    pub fn new(session: SessionId) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(SplitNode::leaf(None, SessionGroup::new(session)));
        Self { nodes, root }
    }

    pub fn root(&self) -> SplitId {
        self.root
    }

    pub fn node(&self, id: SplitId) -> Option<&SplitNode> {
        self.nodes.get(id)
    }

    /// Number of nodes, leaves and internal
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_leaf(&self, id: SplitId) -> bool {
        self.nodes.get(id).is_some_and(SplitNode::is_leaf)
    }

    pub fn leaf(&self, id: SplitId) -> Option<&Leaf> {
        self.nodes.get(id).and_then(SplitNode::as_leaf)
    }

    pub fn leaf_mut(&mut self, id: SplitId) -> Option<&mut Leaf> {
        self.nodes.get_mut(id).and_then(SplitNode::as_leaf_mut)
    }

    pub fn group(&self, id: SplitId) -> Option<&SessionGroup> {
        self.leaf(id).map(|leaf| &leaf.group)
    }

    pub fn group_mut(&mut self, id: SplitId) -> Option<&mut SessionGroup> {
        self.leaf_mut(id).map(|leaf| &mut leaf.group)
    }

    /// Leaf owning `session`, searched depth-first, first child before second
    pub fn find(&self, session: SessionId) -> Option<SplitId> {
        self.flatten()
            .into_iter()
            .find(|&id| self.group(id).is_some_and(|g| g.contains(session)))
    }

    /// Leaves in left-to-right depth-first order
    pub fn flatten(&self) -> Vec<SplitId> {
        let mut leaves = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            match node.kind {
                SplitKind::Leaf(_) => leaves.push(id),
                SplitKind::Split { first, second, .. } => {
                    stack.push(second);
                    stack.push(first);
                }
            }
        }
        leaves
    }

    /// All sessions, leaf by leaf in flattened order
    pub fn sessions(&self) -> Vec<SessionId> {
        self.flatten()
            .into_iter()
            .filter_map(|id| self.group(id))
            .flat_map(|g| g.iter())
            .collect()
    }

    /// Leaf reached by always descending into the first child
    pub fn first_leaf(&self, from: SplitId) -> Option<SplitId> {
        let mut id = from;
        loop {
            match self.nodes.get(id)?.kind {
                SplitKind::Leaf(_) => return Some(id),
                SplitKind::Split { first, .. } => id = first,
            }
        }
    }

    /// Next session in tab order, crossing leaf boundaries and wrapping
    pub fn next_session(&self, session: SessionId) -> Option<SessionId> {
        let leaf = self.find(session)?;
        let group = self.group(leaf)?;
        if let Some(next) = group.after(session) {
            return Some(next);
        }
        if leaf == self.root {
            return group.first();
        }
        let flat = self.flatten();
        let idx = flat.iter().position(|&id| id == leaf)?;
        let target = flat.get(idx + 1).or_else(|| flat.first())?;
        self.group(*target)?.first()
    }

    /// Previous session in tab order; the exact inverse of [`Self::next_session`]
    pub fn prev_session(&self, session: SessionId) -> Option<SessionId> {
        let leaf = self.find(session)?;
        let group = self.group(leaf)?;
        if let Some(prev) = group.before(session) {
            return Some(prev);
        }
        if leaf == self.root {
            return group.last();
        }
        let flat = self.flatten();
        let idx = flat.iter().position(|&id| id == leaf)?;
        let target = match idx.checked_sub(1) {
            Some(i) => flat.get(i),
            None => flat.last(),
        }?;
        self.group(*target)?.last()
    }

    /// Turn `leaf` into an internal node.
    ///
    /// The existing group moves unchanged into the new first child; a new
    /// group holding only `new_session` becomes the second child.
    pub fn split_leaf(
        &mut self,
        leaf: SplitId,
        orientation: Orientation,
        new_session: SessionId,
    ) -> Result<(SplitId, SplitId), LayoutError> {
        let node = self.nodes.get(leaf).ok_or(LayoutError::NodeNotFound(leaf))?;
        if !node.is_leaf() {
            log::warn!("split requested on internal node {:?}", leaf);
            return Err(LayoutError::NotALeaf(leaf));
        }
        if self.find(new_session).is_some() {
            return Err(LayoutError::InconsistentTree(format!(
                "session {} is already placed",
                new_session
            )));
        }

        let bounds = node.bounds;
        let first = self.nodes.insert(SplitNode::leaf(Some(leaf), SessionGroup::new(new_session)));
        let second = self.nodes.insert(SplitNode::leaf(Some(leaf), SessionGroup::new(new_session)));

        let old_kind = std::mem::replace(
            &mut self.nodes[leaf].kind,
            SplitKind::Split {
                orientation,
                ratio: 0.5,
                first,
                second,
            },
        );
        // The first child keeps the leaf payload untouched
        self.nodes[first].kind = old_kind;
        self.nodes[first].bounds = bounds;

        crate::debug_info!(
            "SPLIT",
            "split {:?} {:?} -> first={:?} second={:?} (session {})",
            leaf,
            orientation,
            first,
            second,
            new_session
        );
        Ok((first, second))
    }

    /// Remove `session` from its group, contracting the tree when the
    /// group empties.
    ///
    /// On error the tree is left untouched.
    pub fn remove_session(&mut self, session: SessionId) -> Result<RemoveOutcome, LayoutError> {
        let leaf = self.find(session).ok_or_else(|| {
            log::warn!("close requested for unknown session {}", session);
            LayoutError::SessionNotFound(session)
        })?;
        let group = self.group(leaf).ok_or(LayoutError::NotALeaf(leaf))?;

        if group.len() > 1 {
            let group = self.group_mut(leaf).ok_or(LayoutError::NotALeaf(leaf))?;
            group.remove(session);
            return Ok(RemoveOutcome::LeafKept {
                leaf,
                current: group.current(),
            });
        }

        let Some(parent) = self.nodes[leaf].parent else {
            return Ok(RemoveOutcome::LastSession);
        };

        // Validate every link the contraction rewrites before touching anything
        let sibling = match self.nodes.get(parent).map(|p| &p.kind) {
            Some(SplitKind::Split { first, second, .. }) if *first == leaf => *second,
            Some(SplitKind::Split { first, second, .. }) if *second == leaf => *first,
            _ => {
                return Err(LayoutError::InconsistentTree(format!(
                    "{:?} is not a child of its parent {:?}",
                    leaf, parent
                )));
            }
        };
        if !self.nodes.contains_key(sibling) {
            return Err(LayoutError::InconsistentTree(format!(
                "sibling {:?} of {:?} is missing",
                sibling, leaf
            )));
        }
        if let Some((a, b)) = self.nodes[sibling].children()
            && !(self.nodes.contains_key(a) && self.nodes.contains_key(b))
        {
            return Err(LayoutError::InconsistentTree(format!(
                "children of {:?} are missing",
                sibling
            )));
        }

        self.nodes.remove(leaf);
        let Some(promoted) = self.nodes.remove(sibling) else {
            return Err(LayoutError::InconsistentTree(format!(
                "sibling {:?} vanished",
                sibling
            )));
        };
        if let Some((a, b)) = promoted.children() {
            self.nodes[a].parent = Some(parent);
            self.nodes[b].parent = Some(parent);
        }
        self.nodes[parent].kind = promoted.kind;

        crate::debug_info!(
            "SPLIT",
            "contracted {:?}: sibling {:?} promoted into {:?}",
            leaf,
            sibling,
            parent
        );
        Ok(RemoveOutcome::Contracted { promoted: parent })
    }

    /// Distribute `bounds` over the tree according to split ratios
    pub fn calculate_bounds(&mut self, bounds: PaneBounds, divider_width: f32) {
        let mut stack = vec![(self.root, bounds)];
        while let Some((id, bounds)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(id) else {
                continue;
            };
            node.bounds = bounds;
            if let SplitKind::Split {
                orientation,
                ratio,
                first,
                second,
            } = node.kind
            {
                let (first_bounds, _, second_bounds) =
                    bounds.split(orientation, ratio, divider_width);
                stack.push((first, first_bounds));
                stack.push((second, second_bounds));
            }
        }
    }

    /// Divider rectangles for the last computed bounds
    pub fn collect_dividers(&self, divider_width: f32) -> Vec<DividerRect> {
        self.nodes
            .values()
            .filter_map(|node| match node.kind {
                SplitKind::Split {
                    orientation, ratio, ..
                } => Some(node.bounds.split(orientation, ratio, divider_width).1),
                SplitKind::Leaf(_) => None,
            })
            .collect()
    }

    /// Leaf under a point.
    ///
    /// At each internal node only the first child's bounds are tested; any
    /// point outside them descends into the second child.
    pub fn leaf_at(&self, x: f32, y: f32) -> Option<SplitId> {
        let mut id = self.root;
        loop {
            match self.nodes.get(id)?.kind {
                SplitKind::Leaf(_) => return Some(id),
                SplitKind::Split { first, second, .. } => {
                    let first_bounds = self.nodes.get(first)?.bounds;
                    id = if first_bounds.contains(x, y) { first } else { second };
                }
            }
        }
    }

    /// Nudge the ratio of the nearest ancestor split of `session` that has
    /// the given orientation. Returns the new ratio.
    pub fn adjust_ratio(
        &mut self,
        session: SessionId,
        orientation: Orientation,
        delta: f32,
    ) -> Result<f32, LayoutError> {
        let leaf = self.find(session).ok_or(LayoutError::SessionNotFound(session))?;
        let mut cursor = self.nodes[leaf].parent;
        while let Some(id) = cursor {
            let node = self.nodes.get_mut(id).ok_or(LayoutError::NodeNotFound(id))?;
            if let SplitKind::Split {
                orientation: o,
                ratio,
                ..
            } = &mut node.kind
                && *o == orientation
            {
                *ratio = (*ratio + delta).clamp(MIN_RATIO, MAX_RATIO);
                return Ok(*ratio);
            }
            cursor = node.parent;
        }
        Err(LayoutError::NoEnclosingSplit(session))
    }

    /// Verify the structural invariants of the whole tree
    pub fn check_invariants(&self) -> Result<(), LayoutError> {
        let fail = |msg: String| Err(LayoutError::InconsistentTree(msg));
        let root = self.nodes.get(self.root).ok_or(LayoutError::NodeNotFound(self.root))?;
        if root.parent.is_some() {
            return fail("root has a parent".to_string());
        }

        let mut seen_nodes = 0usize;
        let mut seen_sessions = HashSet::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            seen_nodes += 1;
            let node = self.nodes.get(id).ok_or(LayoutError::NodeNotFound(id))?;
            match &node.kind {
                SplitKind::Leaf(leaf) => {
                    if leaf.group.is_empty() {
                        return fail(format!("leaf {:?} has an empty group", id));
                    }
                    match leaf.group.current() {
                        Some(current) if leaf.group.contains(current) => {}
                        _ => return fail(format!("leaf {:?} has no valid current", id)),
                    }
                    for session in leaf.group.iter() {
                        if !seen_sessions.insert(session) {
                            return fail(format!("session {} placed twice", session));
                        }
                    }
                }
                SplitKind::Split {
                    first,
                    second,
                    ratio,
                    ..
                } => {
                    if !(MIN_RATIO..=MAX_RATIO).contains(ratio) {
                        return fail(format!("ratio {} of {:?} out of range", ratio, id));
                    }
                    for child in [*first, *second] {
                        let child_node =
                            self.nodes.get(child).ok_or(LayoutError::NodeNotFound(child))?;
                        if child_node.parent != Some(id) {
                            return fail(format!("{:?} has a stale parent link", child));
                        }
                        stack.push(child);
                    }
                }
            }
        }
        if seen_nodes != self.nodes.len() {
            return fail(format!(
                "{} nodes reachable but {} allocated",
                seen_nodes,
                self.nodes.len()
            ));
        }
        Ok(())
    }
}
