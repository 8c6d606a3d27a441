//! Bottom-up size negotiation over the split tree.

use crate::session::{SessionId, SizeHints};
use crate::split::{Orientation, SplitId, SplitKind, SplitTree};

/// Aggregated size requirements of a subtree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeInfo {
    pub min_w: i32,
    pub min_h: i32,
    pub step_x: i32,
    pub step_y: i32,
    pub req_w: i32,
    pub req_h: i32,
    /// A freshly created session in this subtree still wants its
    /// requested size applied
    pub pending: bool,
}

impl SizeInfo {
    /// Leaf aggregate from a session's hints
    pub fn from_hints(hints: SizeHints, pending: bool) -> Self {
        let hints = hints.clamped();
        Self {
            min_w: hints.min_w,
            min_h: hints.min_h,
            step_x: hints.step_x,
            step_y: hints.step_y,
            req_w: hints.req_w,
            req_h: hints.req_h,
            pending,
        }
    }

    /// Combine the aggregates of two siblings split along `orientation`.
    ///
    /// Along the split axis minimums and requests add and the larger step
    /// wins. Across it the larger minimum and request win and the step of
    /// `second` passes through.
    pub fn combine(first: SizeInfo, second: SizeInfo, orientation: Orientation) -> SizeInfo {
        let pending = first.pending || second.pending;
        let mut info = SizeInfo {
            pending,
            ..SizeInfo::default()
        };
        match orientation {
            Orientation::Horizontal => {
                info.min_w = first.min_w + second.min_w;
                info.min_h = first.min_h.max(second.min_h);
                info.step_x = first.step_x.max(second.step_x);
                info.step_y = second.step_y;
                if pending {
                    info.req_w = first.req_w + second.req_w;
                    info.req_h = first.req_h.max(second.req_h);
                }
            }
            Orientation::Vertical => {
                info.min_w = first.min_w.max(second.min_w);
                info.min_h = first.min_h + second.min_h;
                info.step_x = second.step_x;
                info.step_y = first.step_y.max(second.step_y);
                if pending {
                    info.req_w = first.req_w.max(second.req_w);
                    info.req_h = first.req_h + second.req_h;
                }
            }
        }
        info
    }
}

/// Aggregate the subtree under `node`.
///
/// `leaf_info` is called once per leaf with the leaf's current session and
/// is expected to consume that session's one-shot pending request.
pub fn walk<F>(tree: &SplitTree, node: SplitId, leaf_info: &mut F) -> SizeInfo
where
    F: FnMut(SessionId) -> SizeInfo,
{
    let Some(split) = tree.node(node) else {
        return SizeInfo::default();
    };
    match &split.kind {
        SplitKind::Leaf(leaf) => match leaf.group.current() {
            Some(session) => leaf_info(session),
            None => SizeInfo::default(),
        },
        SplitKind::Split {
            orientation,
            first,
            second,
            ..
        } => {
            let a = walk(tree, *first, leaf_info);
            let b = walk(tree, *second, leaf_info);
            SizeInfo::combine(a, b, *orientation)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(min_w: i32, min_h: i32, step_x: i32, step_y: i32) -> SizeInfo {
        SizeInfo::from_hints(SizeHints::new(min_w, min_h, step_x, step_y, 1, 1), false)
    }

    #[test]
    fn test_combine_horizontal_adds_widths() {
        let combined = SizeInfo::combine(
            info(100, 50, 10, 20),
            info(80, 60, 10, 20),
            Orientation::Horizontal,
        );
        assert_eq!((combined.min_w, combined.min_h), (180, 60));
        assert_eq!((combined.step_x, combined.step_y), (10, 20));
        assert!(!combined.pending);
        assert_eq!((combined.req_w, combined.req_h), (0, 0));
    }

    #[test]
    fn test_combine_vertical_adds_heights() {
        let combined =
            SizeInfo::combine(info(100, 50, 8, 16), info(80, 60, 10, 20), Orientation::Vertical);
        assert_eq!((combined.min_w, combined.min_h), (100, 110));
        assert_eq!((combined.step_x, combined.step_y), (10, 20));
    }

    #[test]
    fn test_combine_absorbs_pending_request() {
        let a = SizeInfo::from_hints(SizeHints::new(10, 10, 5, 5, 400, 300), true);
        let b = SizeInfo::from_hints(SizeHints::new(10, 10, 5, 5, 200, 350), false);
        let combined = SizeInfo::combine(a, b, Orientation::Horizontal);
        assert!(combined.pending);
        assert_eq!((combined.req_w, combined.req_h), (600, 350));
    }

    #[test]
    fn test_walk_consumes_pending_once() {
        let mut tree = SplitTree::new(1);
        let root = tree.root();
        tree.split_leaf(root, Orientation::Horizontal, 2).unwrap();

        let mut pending = vec![1u64, 2];
        let mut leaf_info = |session: SessionId| {
            let was_pending = pending.contains(&session);
            pending.retain(|&s| s != session);
            SizeInfo::from_hints(SizeHints::new(100, 50, 10, 20, 800, 480), was_pending)
        };

        let first = walk(&tree, root, &mut leaf_info);
        assert!(first.pending);
        assert_eq!((first.req_w, first.req_h), (1600, 480));

        let second = walk(&tree, root, &mut leaf_info);
        assert!(!second.pending);
        assert_eq!((second.min_w, second.min_h), (200, 50));
    }
}
