//! Surface hierarchy
//!
//! Applications usually nest their screens in navigation stacks and tab
//! sets. An alert belongs on the visible screen: the top of a navigation
//! stack, the selected tab of a tab set.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{PresentationSurface, SurfaceLocator};

/// A node in the application's screen hierarchy
#[derive(Clone)]
pub enum SurfaceNode {
    /// A screen that can present alerts
    Surface(Arc<dyn PresentationSurface>),
    /// A stack of screens; the last one is on top
    Navigation(Vec<SurfaceNode>),
    /// A set of tabs with one selected
    Tabs {
        tabs: Vec<SurfaceNode>,
        selected: usize,
    },
}

impl std::fmt::Debug for SurfaceNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurfaceNode::Surface(_) => f.write_str("Surface"),
            SurfaceNode::Navigation(stack) => f.debug_tuple("Navigation").field(stack).finish(),
            SurfaceNode::Tabs { tabs, selected } => f
                .debug_struct("Tabs")
                .field("tabs", tabs)
                .field("selected", selected)
                .finish(),
        }
    }
}

impl SurfaceNode {
    /// The visible surface under this node
    pub fn top_surface(&self) -> Option<Arc<dyn PresentationSurface>> {
        match self {
            SurfaceNode::Surface(surface) => Some(surface.clone()),
            SurfaceNode::Navigation(stack) => stack.last()?.top_surface(),
            SurfaceNode::Tabs { tabs, selected } => tabs.get(*selected)?.top_surface(),
        }
    }
}

/// Settable root of the screen hierarchy
#[derive(Debug, Default)]
pub struct SurfaceRoot {
    root: RwLock<Option<SurfaceNode>>,
}

impl SurfaceRoot {
    /// Root with nothing to present on yet
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: SurfaceNode) -> Self {
        Self {
            root: RwLock::new(Some(root)),
        }
    }

    pub fn set_root(&self, root: SurfaceNode) {
        *self.root.write() = Some(root);
    }

    pub fn clear(&self) {
        *self.root.write() = None;
    }
}

impl SurfaceLocator for SurfaceRoot {
    fn locate(&self) -> Option<Arc<dyn PresentationSurface>> {
        self.root.read().as_ref()?.top_surface()
    }
}
