use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use astrelis_core::geometry::{Rect, Size};

use super::panel::AdornerPanelId;
use super::placement::Placement;
use crate::error::{DesignError, DesignResult};
use crate::input::{InputHandlingLayer, MouseButtonEvent};
use crate::panel::DesignPanel;

/// Global counter for generating unique adorner IDs.
static ADORNER_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for an adorner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AdornerId(pub u64);

impl AdornerId {
    /// Generate a new unique adorner ID.
    pub fn new() -> Self {
        Self(ADORNER_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for AdornerId {
    fn default() -> Self {
        Self::new()
    }
}

/// Reacts to mouse input that arbitration routed to an adorner.
///
/// Typical implementations are resize grips and move handles, which start an
/// input action on the panel and finish it on mouse up.
pub trait AdornerHandler {
    fn on_mouse_down(
        &self,
        panel: &mut DesignPanel,
        target: (AdornerPanelId, AdornerId),
        event: &mut MouseButtonEvent,
    );
}

/// Input capability of an interactive adorner.
#[derive(Clone)]
pub struct AdornerInput {
    pub layer: InputHandlingLayer,
    pub handler: Rc<dyn AdornerHandler>,
}

impl fmt::Debug for AdornerInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdornerInput")
            .field("layer", &self.layer)
            .finish_non_exhaustive()
    }
}

/// A single decoration element hosted by an [`AdornerPanel`](super::AdornerPanel).
///
/// The host toolkit measures the adorner (reporting its desired size) and the
/// adorner's [`Placement`] then arranges it.
#[derive(Debug)]
pub struct Adorner {
    id: AdornerId,
    name: String,
    placement: Arc<dyn Placement>,
    desired_size: Option<Size<f64>>,
    arranged: Option<Rect<f64>>,
    visible: bool,
    input: Option<AdornerInput>,
}

impl Adorner {
    pub fn new(name: impl Into<String>, placement: Arc<dyn Placement>) -> Self {
        Self {
            id: AdornerId::new(),
            name: name.into(),
            placement,
            desired_size: None,
            arranged: None,
            visible: true,
            input: None,
        }
    }

    /// Make the adorner a candidate for mouse input on `layer`.
    pub fn with_input(mut self, layer: InputHandlingLayer, handler: Rc<dyn AdornerHandler>) -> Self {
        self.input = Some(AdornerInput { layer, handler });
        self
    }

    /// Start out with a measured desired size.
    pub fn with_desired_size(mut self, desired: Size<f64>) -> Self {
        self.measure(desired);
        self
    }

    pub fn id(&self) -> AdornerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn placement(&self) -> &Arc<dyn Placement> {
        &self.placement
    }

    /// Swap the placement. The owning panel must be invalidated afterwards.
    pub fn set_placement(&mut self, placement: Arc<dyn Placement>) {
        self.placement = placement;
    }

    pub fn input(&self) -> Option<&AdornerInput> {
        self.input.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Record the result of the host's measure pass.
    pub fn measure(&mut self, desired: Size<f64>) {
        self.desired_size = Some(desired.clamp_non_negative());
    }

    pub fn is_measured(&self) -> bool {
        self.desired_size.is_some()
    }

    /// Desired size from the last measure pass.
    pub fn desired_size(&self) -> DesignResult<Size<f64>> {
        self.desired_size
            .ok_or(DesignError::NotMeasured { adorner: self.id })
    }

    /// Arrange primitive. Negative sizes are clamped to zero here.
    pub fn arrange(&mut self, rect: Rect<f64>) {
        let size = rect.size();
        if !size.is_non_negative() {
            tracing::trace!(adorner = ?self.id, ?size, "Clamping negative adorner size");
        }
        self.arranged = Some(Rect::from_pos_size(rect.position(), size.clamp_non_negative()));
    }

    /// Rectangle from the last arrange pass, in the panel's space.
    pub fn arranged_rect(&self) -> Option<Rect<f64>> {
        self.arranged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adorner::placement::fill_content;

    #[test]
    fn test_ids_are_unique() {
        let a = Adorner::new("a", fill_content());
        let b = Adorner::new("b", fill_content());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_arrange_clamps_negative_size() {
        let mut adorner = Adorner::new("grip", fill_content());
        adorner.arrange(Rect::new(4.0, -2.0, -5.0, 3.0));
        assert_eq!(adorner.arranged_rect(), Some(Rect::new(4.0, -2.0, 0.0, 3.0)));
    }

    #[test]
    fn test_desired_size_requires_measure() {
        let mut adorner = Adorner::new("grip", fill_content());
        assert!(adorner.desired_size().is_err());
        adorner.measure(Size::new(7.0, 7.0));
        assert_eq!(adorner.desired_size(), Ok(Size::new(7.0, 7.0)));
    }
}
