//! Layout and focus engine for multi-pane, multi-tab terminal hosts.
//!
//! The engine arranges terminal sessions into a binary split tree, stacks
//! sessions as tabs inside each leaf, routes keyboard and mouse focus,
//! negotiates size constraints bottom-up and pushes geometry top-down.
//!
//! Modules:
//! - [`split`]: arena-backed split tree, traversal and geometry
//! - [`group`]: per-leaf tab stack (`SessionGroup`)
//! - [`session`]: session state and the content/factory contracts
//! - [`sizing`]: size-hint aggregation
//! - [`selector`]: tab selector overlay state
//! - [`window`]: one native window and its focus router
//! - [`manager`]: registry of all windows and event dispatch
//! - [`driver`]: single-threaded tokio event loop
//!
//! The engine never renders anything. It talks to its collaborators through
//! [`signals::SignalSink`], [`signals::WindowBinding`] and
//! [`session::SessionContent`].

pub mod debug;
pub mod driver;
pub mod error;
pub mod event;
pub mod group;
pub mod manager;
pub mod selector;
pub mod session;
pub mod signals;
pub mod sizing;
pub mod split;
pub mod window;

pub use splitterm_config as config;

pub use error::LayoutError;
pub use event::{Event, SessionAction, WindowAction};
pub use group::SessionGroup;
pub use manager::{WindowId, WindowManager};
pub use selector::{Selector, SelectorEntry, SelectorMove, SelectorPhase};
pub use session::{Session, SessionContent, SessionFactory, SessionId, SessionSpec, SizeHints};
pub use signals::{Signal, SignalSink, SizeConstraints, TabEntry, WindowBinding};
pub use sizing::SizeInfo;
pub use split::{Orientation, PaneBounds, SplitId, SplitTree};
pub use window::{CloseOutcome, Window};
