use std::rc::Rc;

use astrelis_core::alloc::HashMap;

use crate::config::DesignConfig;
use crate::host::{ProjectService, Solution};
use crate::input::InputHandlingLayer;
use crate::item::{DesignItemId, Selection};
use crate::tool::ToolService;

/// Services shared by everything on one design surface.
///
/// Passed explicitly to tools and adorner handlers through the
/// [`DesignPanel`](crate::DesignPanel).
pub struct DesignContext {
    config: DesignConfig,
    tools: ToolService,
    selection: Selection,
    component_layers: HashMap<DesignItemId, InputHandlingLayer>,
    project: Option<Rc<dyn ProjectService>>,
}

impl Default for DesignContext {
    fn default() -> Self {
        Self::new(DesignConfig::default())
    }
}

impl std::fmt::Debug for DesignContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesignContext")
            .field("config", &self.config)
            .field("tools", &self.tools)
            .field("selection", &self.selection)
            .field("component_layers", &self.component_layers)
            .field("project", &self.project.is_some())
            .finish()
    }
}

impl DesignContext {
    pub fn new(config: DesignConfig) -> Self {
        Self {
            config,
            tools: ToolService::new(),
            selection: Selection::new(),
            component_layers: HashMap::new(),
            project: None,
        }
    }

    pub fn with_project_service(mut self, project: Rc<dyn ProjectService>) -> Self {
        self.project = Some(project);
        self
    }

    pub fn config(&self) -> &DesignConfig {
        &self.config
    }

    pub fn tool_service(&self) -> &ToolService {
        &self.tools
    }

    pub fn tool_service_mut(&mut self) -> &mut ToolService {
        &mut self.tools
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// Declare the input layer a designed component handles its own input on.
    pub fn set_component_input_layer(&mut self, item: DesignItemId, layer: InputHandlingLayer) {
        tracing::debug!(?item, ?layer, "Component input layer registered");
        self.component_layers.insert(item, layer);
    }

    pub fn clear_component_input_layer(&mut self, item: DesignItemId) {
        self.component_layers.remove(&item);
    }

    /// Input layer of a designed component. Unregistered components use
    /// [`InputHandlingLayer::Component`].
    pub fn component_input_layer(&self, item: DesignItemId) -> InputHandlingLayer {
        self.component_layers
            .get(&item)
            .copied()
            .unwrap_or(InputHandlingLayer::Component)
    }

    /// The solution currently open in the host, if a project service is set.
    pub fn solution(&self) -> Option<Solution> {
        let project = self.project.clone()?;
        Solution::open(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_layer_defaults_to_component() {
        let mut context = DesignContext::default();
        let item = DesignItemId(3);
        assert_eq!(context.component_input_layer(item), InputHandlingLayer::Component);

        context.set_component_input_layer(item, InputHandlingLayer::ComponentHigh);
        assert_eq!(context.component_input_layer(item), InputHandlingLayer::ComponentHigh);

        context.clear_component_input_layer(item);
        assert_eq!(context.component_input_layer(item), InputHandlingLayer::Component);
    }

    #[test]
    fn test_no_project_service_no_solution() {
        assert!(DesignContext::default().solution().is_none());
    }
}
