//! Choosing which handler receives a mouse event.
//!
//! Candidates are gathered by the [`DesignPanel`](crate::DesignPanel): the
//! current tool, the designed component under the pointer, and interactive
//! adorners under the pointer. The candidate on the highest
//! [`InputHandlingLayer`] wins.
//!
//! Equal layers are resolved by category, tool before component before
//! adorner. Within one category the earlier candidate wins; the panel lists
//! adorners topmost first.

use crate::adorner::{AdornerId, AdornerPanelId};
use crate::input::InputHandlingLayer;
use crate::item::DesignItemId;

/// Who an event was dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchTarget {
    /// The current tool.
    Tool,
    /// Left to the designed component itself.
    Component(DesignItemId),
    /// An interactive adorner.
    Adorner {
        panel: AdornerPanelId,
        adorner: AdornerId,
    },
}

impl DispatchTarget {
    /// Tie-break rank among candidates on the same layer.
    fn precedence(&self) -> u8 {
        match self {
            DispatchTarget::Tool => 2,
            DispatchTarget::Component(_) => 1,
            DispatchTarget::Adorner { .. } => 0,
        }
    }
}

/// A handler competing for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub layer: InputHandlingLayer,
    pub target: DispatchTarget,
}

impl Candidate {
    pub fn tool(layer: InputHandlingLayer) -> Self {
        Self {
            layer,
            target: DispatchTarget::Tool,
        }
    }

    pub fn component(item: DesignItemId, layer: InputHandlingLayer) -> Self {
        Self {
            layer,
            target: DispatchTarget::Component(item),
        }
    }

    pub fn adorner(panel: AdornerPanelId, adorner: AdornerId, layer: InputHandlingLayer) -> Self {
        Self {
            layer,
            target: DispatchTarget::Adorner { panel, adorner },
        }
    }

    fn rank(&self) -> (InputHandlingLayer, u8) {
        (self.layer, self.target.precedence())
    }
}

/// Pick the winning candidate, or `None` if there are no candidates.
pub fn arbitrate(candidates: &[Candidate]) -> Option<&Candidate> {
    let mut best: Option<&Candidate> = None;
    for candidate in candidates {
        match best {
            Some(current) if candidate.rank() <= current.rank() => {}
            _ => best = Some(candidate),
        }
    }
    best
}
