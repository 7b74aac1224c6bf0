//! Input primitives for the design surface.
//!
//! Raw mouse events arrive from the host toolkit already converted to
//! designer-space coordinates. The [`InputHandlingLayer`] of each candidate
//! handler decides who gets to react to them, see [`crate::arbitration`].

use astrelis_core::geometry::Pos;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::item::ElementId;

/// Layer of input handling.
///
/// When several handlers could react to the same event, the one on the
/// highest layer receives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum InputHandlingLayer {
    /// No layer specified. Lower than every other layer.
    #[default]
    None,
    /// Input passed through to the designed component itself.
    ///
    /// Normally loses against the current tool.
    Component,
    /// Layer used by tools.
    Tool,
    /// Components that must receive input even while a tool is active,
    /// e.g. scroll thumbs or tab headers inside designed content.
    ComponentHigh,
    /// Above every other layer.
    Highest,
}

impl InputHandlingLayer {
    /// All layers in ascending order.
    pub const ALL: [InputHandlingLayer; 5] = [
        InputHandlingLayer::None,
        InputHandlingLayer::Component,
        InputHandlingLayer::Tool,
        InputHandlingLayer::ComponentHigh,
        InputHandlingLayer::Highest,
    ];
}

/// Mouse button that changed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

bitflags! {
    /// Keyboard modifiers held while a mouse event occurred.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const NONE = 0;
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        const SUPER = 1 << 3;
    }
}

/// Direction of a mouse button change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    Down,
    Up,
}

/// A mouse button event on the design surface.
#[derive(Debug, Clone, PartialEq)]
pub struct MouseButtonEvent {
    pub kind: MouseEventKind,
    pub button: MouseButton,
    /// Pointer position in designer space.
    pub position: Pos<f64>,
    /// Raw host element the toolkit reported as the hit source.
    pub source: Option<ElementId>,
    pub modifiers: Modifiers,
    /// Set by whichever handler consumed the event.
    pub handled: bool,
}

impl MouseButtonEvent {
    pub fn down(button: MouseButton, position: Pos<f64>) -> Self {
        Self {
            kind: MouseEventKind::Down,
            button,
            position,
            source: None,
            modifiers: Modifiers::NONE,
            handled: false,
        }
    }

    pub fn up(button: MouseButton, position: Pos<f64>) -> Self {
        Self {
            kind: MouseEventKind::Up,
            ..Self::down(button, position)
        }
    }

    pub fn with_source(mut self, source: ElementId) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Cursor shape requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cursor {
    #[default]
    Arrow,
    Crosshair,
    Move,
    ResizeNs,
    ResizeEw,
    ResizeNwSe,
    ResizeNeSw,
    Hand,
    NotAllowed,
}
