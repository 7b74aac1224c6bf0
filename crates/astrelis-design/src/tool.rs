//! Tools and tool selection.
//!
//! A tool is a pluggable strategy for handling pointer input on the design
//! surface. Exactly one tool is active at a time; the [`PointerTool`] is the
//! default and is always available through [`ToolService::pointer_tool`].

use std::fmt;
use std::rc::Rc;

use crate::input::{Cursor, InputHandlingLayer, Modifiers, MouseButton, MouseButtonEvent};
use crate::panel::DesignPanel;

/// A tool that can handle input on the design surface.
pub trait Tool {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Input handling layer of the tool.
    fn input_layer(&self) -> InputHandlingLayer {
        InputHandlingLayer::Tool
    }

    /// Cursor the tool wants. `None` uses the configured default.
    fn cursor(&self) -> Option<Cursor> {
        None
    }

    /// Called when arbitration routes a mouse down to the tool.
    fn on_mouse_down(&self, panel: &mut DesignPanel, event: &mut MouseButtonEvent);
}

/// The default tool for selecting elements.
///
/// Left click selects the designed element under the pointer (Ctrl toggles
/// it instead); clicking empty surface clears the selection.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointerTool;

impl Tool for PointerTool {
    fn name(&self) -> &'static str {
        "pointer"
    }

    fn cursor(&self) -> Option<Cursor> {
        Some(Cursor::Arrow)
    }

    fn on_mouse_down(&self, panel: &mut DesignPanel, event: &mut MouseButtonEvent) {
        if event.button != MouseButton::Left {
            return;
        }
        let item = event
            .source
            .and_then(|source| panel.find_designed_element_for_original_source(source));
        let selection = panel.context_mut().selection_mut();
        match item {
            Some(item) if event.modifiers.contains(Modifiers::CTRL) => selection.toggle(item),
            Some(item) => selection.select_only(item),
            None => selection.clear(),
        }
        tracing::debug!(?item, selected = selection.len(), "Pointer tool click");
        event.handled = true;
    }
}

/// Manages tool selection.
pub struct ToolService {
    pointer: Rc<dyn Tool>,
    current: Rc<dyn Tool>,
}

impl Default for ToolService {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToolService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolService")
            .field("pointer", &self.pointer.name())
            .field("current", &self.current.name())
            .finish()
    }
}

impl ToolService {
    pub fn new() -> Self {
        Self::with_pointer_tool(Rc::new(PointerTool))
    }

    /// Use a custom tool as the pointer tool.
    pub fn with_pointer_tool(pointer: Rc<dyn Tool>) -> Self {
        Self {
            current: Rc::clone(&pointer),
            pointer,
        }
    }

    /// The pointer tool, regardless of which tool is current.
    pub fn pointer_tool(&self) -> Rc<dyn Tool> {
        Rc::clone(&self.pointer)
    }

    pub fn current_tool(&self) -> Rc<dyn Tool> {
        Rc::clone(&self.current)
    }

    /// Replace the current tool. The previous tool is not notified.
    pub fn set_current_tool(&mut self, tool: Rc<dyn Tool>) {
        tracing::debug!(from = self.current.name(), to = tool.name(), "Switching tool");
        self.current = tool;
    }

    /// Make the pointer tool current again.
    pub fn reset(&mut self) {
        let pointer = self.pointer_tool();
        self.set_current_tool(pointer);
    }

    pub fn is_pointer_active(&self) -> bool {
        Rc::ptr_eq(&self.current, &self.pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CreateTool;

    impl Tool for CreateTool {
        fn name(&self) -> &'static str {
            "create"
        }

        fn cursor(&self) -> Option<Cursor> {
            Some(Cursor::Crosshair)
        }

        fn on_mouse_down(&self, _panel: &mut DesignPanel, event: &mut MouseButtonEvent) {
            event.handled = true;
        }
    }

    #[test]
    fn test_pointer_is_default() {
        let tools = ToolService::new();
        assert!(tools.is_pointer_active());
        assert_eq!(tools.current_tool().name(), "pointer");
        assert_eq!(tools.current_tool().input_layer(), InputHandlingLayer::Tool);
    }

    #[test]
    fn test_set_current_tool_replaces() {
        let mut tools = ToolService::new();
        tools.set_current_tool(Rc::new(CreateTool));

        assert!(!tools.is_pointer_active());
        assert_eq!(tools.current_tool().name(), "create");
        assert_eq!(tools.current_tool().cursor(), Some(Cursor::Crosshair));
        assert_eq!(tools.pointer_tool().name(), "pointer");

        tools.reset();
        assert!(tools.is_pointer_active());
    }

    #[test]
    fn test_custom_pointer_tool() {
        let tools = ToolService::with_pointer_tool(Rc::new(CreateTool));
        assert!(tools.is_pointer_active());
        assert_eq!(tools.pointer_tool().name(), "create");
    }
}
