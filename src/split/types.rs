//! Node types of the split tree.

use slotmap::new_key_type;

use crate::group::SessionGroup;
use crate::selector::Selector;

new_key_type! {
    /// Arena key of a split tree node.
    ///
    /// Only valid until the next contraction; address sessions through
    /// [`SplitTree::find`](super::SplitTree::find) instead of holding on to it.
    pub struct SplitId;
}

/// Layout axis of an internal node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Children side by side, first child on the left
    Horizontal,
    /// Children stacked, first child on top
    Vertical,
}

/// Pixel-space bounding box of a node
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaneBounds {
    /// X position in pixels from the left edge of the window content
    pub x: f32,
    /// Y position in pixels from the top edge of the window content
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PaneBounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside these bounds
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Grid size in character cells for a given cell size, at least 1x1
    pub fn grid_size(&self, cell_width: f32, cell_height: f32) -> (usize, usize) {
        let cols = (self.width / cell_width.max(1.0)).floor() as usize;
        let rows = (self.height / cell_height.max(1.0)).floor() as usize;
        (cols.max(1), rows.max(1))
    }

    /// Split into the bounds of two children separated by a divider
    pub(crate) fn split(
        &self,
        orientation: Orientation,
        ratio: f32,
        divider_width: f32,
    ) -> (PaneBounds, DividerRect, PaneBounds) {
        match orientation {
            Orientation::Horizontal => {
                let first_width = ((self.width - divider_width) * ratio).max(0.0);
                let second_width = (self.width - first_width - divider_width).max(0.0);
                (
                    PaneBounds::new(self.x, self.y, first_width, self.height),
                    DividerRect::new(
                        self.x + first_width,
                        self.y,
                        divider_width,
                        self.height,
                        orientation,
                    ),
                    PaneBounds::new(
                        self.x + first_width + divider_width,
                        self.y,
                        second_width,
                        self.height,
                    ),
                )
            }
            Orientation::Vertical => {
                let first_height = ((self.height - divider_width) * ratio).max(0.0);
                let second_height = (self.height - first_height - divider_width).max(0.0);
                (
                    PaneBounds::new(self.x, self.y, self.width, first_height),
                    DividerRect::new(
                        self.x,
                        self.y + first_height,
                        self.width,
                        divider_width,
                        orientation,
                    ),
                    PaneBounds::new(
                        self.x,
                        self.y + first_height + divider_width,
                        self.width,
                        second_height,
                    ),
                )
            }
        }
    }
}

/// Divider between the two children of an internal node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Orientation of the split this divider belongs to
    pub orientation: Orientation,
}

impl DividerRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32, orientation: Orientation) -> Self {
        Self {
            x,
            y,
            width,
            height,
            orientation,
        }
    }
}

/// Leaf payload: the tab stack and an optional active selector overlay
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub group: SessionGroup,
    pub selector: Option<Selector>,
}

impl Leaf {
    pub fn new(group: SessionGroup) -> Self {
        Self {
            group,
            selector: None,
        }
    }
}

/// Leaf or internal node payload
#[derive(Debug, Clone, PartialEq)]
pub enum SplitKind {
    /// Holds a non-empty session group
    Leaf(Leaf),
    /// Holds exactly two children
    Split {
        orientation: Orientation,
        /// Share of the space given to the first child (0.1 to 0.9)
        ratio: f32,
        first: SplitId,
        second: SplitId,
    },
}

/// One node of the split tree
#[derive(Debug, Clone, PartialEq)]
pub struct SplitNode {
    /// Non-owning back-reference; `None` for the root
    pub parent: Option<SplitId>,
    pub kind: SplitKind,
    /// Last computed geometry
    pub bounds: PaneBounds,
}

impl SplitNode {
    pub(crate) fn leaf(parent: Option<SplitId>, group: SessionGroup) -> Self {
        Self {
            parent,
            kind: SplitKind::Leaf(Leaf::new(group)),
            bounds: PaneBounds::default(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, SplitKind::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match &self.kind {
            SplitKind::Leaf(leaf) => Some(leaf),
            SplitKind::Split { .. } => None,
        }
    }

    pub fn as_leaf_mut(&mut self) -> Option<&mut Leaf> {
        match &mut self.kind {
            SplitKind::Leaf(leaf) => Some(leaf),
            SplitKind::Split { .. } => None,
        }
    }

    /// Children of an internal node
    pub fn children(&self) -> Option<(SplitId, SplitId)> {
        match self.kind {
            SplitKind::Split { first, second, .. } => Some((first, second)),
            SplitKind::Leaf(_) => None,
        }
    }
}
