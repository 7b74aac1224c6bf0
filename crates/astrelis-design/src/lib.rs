//! Astrelis Design - the design surface of a visual UI designer
//!
//! This crate provides what sits between the host toolkit and the designer's
//! tools:
//! - Adorners, design-time decorations positioned by a [`Placement`](adorner::Placement)
//!   strategy in a chosen [`PlacementSpace`](adorner::PlacementSpace)
//! - Input-layer arbitration between the current [`Tool`], designed components
//!   and interactive adorners
//! - Input actions that temporarily suspend arbitration during a gesture
//!
//! ## Quick Start
//!
//! ```rust
//! use astrelis_core::geometry::Pos;
//! use astrelis_design::{
//!     DesignContext, DesignItemId, DesignPanel, ElementId, ElementTree, MouseButton,
//!     MouseButtonEvent, MouseRoute, DispatchTarget,
//! };
//!
//! let mut tree = ElementTree::new();
//! tree.register_designed(ElementId(10), DesignItemId(1));
//! tree.set_parent(ElementId(11), ElementId(10));
//!
//! let mut panel = DesignPanel::with_lookup(DesignContext::default(), Box::new(tree));
//!
//! // Clicking a template part selects the designed button it belongs to.
//! let mut event = MouseButtonEvent::down(MouseButton::Left, Pos::new(4.0, 4.0))
//!     .with_source(ElementId(11));
//! assert_eq!(panel.handle_mouse_down(&mut event), MouseRoute::Dispatched(DispatchTarget::Tool));
//! assert_eq!(panel.context().selection().primary(), Some(DesignItemId(1)));
//! ```

pub mod adorner;
pub mod arbitration;
pub mod config;
pub mod context;
pub mod error;
pub mod host;
pub mod input;
pub mod item;
pub mod panel;
pub mod tool;

pub use arbitration::{Candidate, DispatchTarget, arbitrate};
pub use config::DesignConfig;
pub use context::DesignContext;
pub use error::{DesignError, DesignResult};
pub use host::{ProjectService, Solution, SolutionInfo};
pub use input::{
    Cursor, InputHandlingLayer, Modifiers, MouseButton, MouseButtonEvent, MouseEventKind,
};
pub use item::{DesignItemId, DesignedElementLookup, ElementId, ElementTree, Selection};
pub use panel::{DesignPanel, InputAction, InputState, MouseHandler, MouseRoute, SubscriptionId};
pub use tool::{PointerTool, Tool, ToolService};
