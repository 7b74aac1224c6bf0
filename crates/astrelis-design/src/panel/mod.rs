//! The design surface: hosts adorners and routes mouse input.
//!
//! A mouse down is routed in two steps. First the panel arbitrates between
//! the current tool, the designed component under the pointer and any
//! interactive adorners under the pointer (see [`crate::arbitration`]); the
//! winner gets the event. Then raw subscribers are notified if the event is
//! still unhandled.
//!
//! While an input action is running, arbitration is skipped entirely and only
//! raw subscribers see the event. Gestures such as a resize drag use this to
//! keep tools and other adorners from interfering until they are done.

mod input_action;

pub use input_action::{InputAction, InputState};

use std::fmt;

use crate::adorner::{AdornedGeometry, AdornerCollection};
use crate::arbitration::{Candidate, DispatchTarget, arbitrate};
use crate::context::DesignContext;
use crate::error::DesignResult;
use crate::input::{Cursor, MouseButtonEvent, MouseEventKind};
use crate::item::{DesignItemId, DesignedElementLookup, ElementId, ElementTree};
use input_action::InputActionDepth;

/// Raw mouse handler registered on a [`DesignPanel`].
pub type MouseHandler = Box<dyn FnMut(&mut DesignPanel, &mut MouseButtonEvent)>;

/// Handle returned by the `subscribe_*` methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Where a mouse down ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseRoute {
    /// Arbitration picked this target.
    Dispatched(DispatchTarget),
    /// An input action was running; only raw subscribers were notified.
    Captured,
    /// Nothing competed for the event.
    Unrouted,
}

#[derive(Default)]
struct Subscribers {
    down: Vec<(SubscriptionId, MouseHandler)>,
    up: Vec<(SubscriptionId, MouseHandler)>,
    /// Handlers currently taken out for notification.
    in_flight: Vec<SubscriptionId>,
    /// Unsubscribed while in flight.
    removed: Vec<SubscriptionId>,
    next_id: u64,
}

impl Subscribers {
    fn list_mut(&mut self, kind: MouseEventKind) -> &mut Vec<(SubscriptionId, MouseHandler)> {
        match kind {
            MouseEventKind::Down => &mut self.down,
            MouseEventKind::Up => &mut self.up,
        }
    }
}

/// Surface hosting designed content, its adorners and input arbitration.
pub struct DesignPanel {
    context: DesignContext,
    adorners: AdornerCollection,
    lookup: Box<dyn DesignedElementLookup>,
    input_action: InputActionDepth,
    subscribers: Subscribers,
}

impl fmt::Debug for DesignPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DesignPanel")
            .field("context", &self.context)
            .field("adorners", &self.adorners)
            .field("input_state", &self.input_state())
            .field("mouse_down_subscribers", &self.subscribers.down.len())
            .field("mouse_up_subscribers", &self.subscribers.up.len())
            .finish_non_exhaustive()
    }
}

impl Default for DesignPanel {
    fn default() -> Self {
        Self::new(DesignContext::default())
    }
}

impl DesignPanel {
    /// Create a panel with an empty [`ElementTree`] as designed-element lookup.
    pub fn new(context: DesignContext) -> Self {
        let lookup = ElementTree::with_max_depth(context.config().max_source_depth);
        Self::with_lookup(context, Box::new(lookup))
    }

    pub fn with_lookup(context: DesignContext, lookup: Box<dyn DesignedElementLookup>) -> Self {
        Self {
            context,
            adorners: AdornerCollection::new(),
            lookup,
            input_action: InputActionDepth::default(),
            subscribers: Subscribers::default(),
        }
    }

    pub fn context(&self) -> &DesignContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut DesignContext {
        &mut self.context
    }

    pub fn adorners(&self) -> &AdornerCollection {
        &self.adorners
    }

    pub fn adorners_mut(&mut self) -> &mut AdornerCollection {
        &mut self.adorners
    }

    /// Forward new geometry of a designed item to its adorner panels.
    pub fn update_adorned_geometry(
        &mut self,
        item: DesignItemId,
        geometry: AdornedGeometry,
    ) -> DesignResult<usize> {
        self.adorners.update_item_geometry(item, geometry)
    }

    /// Map a low-level hit source to the designed element it belongs to.
    pub fn find_designed_element_for_original_source(
        &self,
        source: ElementId,
    ) -> Option<DesignItemId> {
        self.lookup.find_designed_element(source)
    }

    /// Suspend arbitration until the matching [`stop_input_action`](Self::stop_input_action).
    ///
    /// Calls nest. Prefer [`begin_input_action`](Self::begin_input_action),
    /// which cannot be left unbalanced.
    pub fn start_input_action(&mut self) {
        self.input_action.start();
    }

    /// End the innermost input action.
    ///
    /// Returns [`DesignError::UnbalancedInputAction`](crate::DesignError::UnbalancedInputAction)
    /// and changes nothing if no input action is running.
    pub fn stop_input_action(&mut self) -> DesignResult<()> {
        self.input_action.stop()
    }

    /// Start an input action that stops when the returned guard is finished
    /// or dropped.
    pub fn begin_input_action(&mut self) -> InputAction {
        InputAction::begin(&self.input_action)
    }

    pub fn is_in_input_action(&self) -> bool {
        self.input_state() == InputState::InputActionInProgress
    }

    pub fn input_state(&self) -> InputState {
        self.input_action.state()
    }

    /// Cursor to display: the current tool's, else the configured default.
    pub fn cursor(&self) -> Cursor {
        self.context
            .tool_service()
            .current_tool()
            .cursor()
            .unwrap_or(self.context.config().default_cursor)
    }

    pub fn subscribe_mouse_down(
        &mut self,
        handler: impl FnMut(&mut DesignPanel, &mut MouseButtonEvent) + 'static,
    ) -> SubscriptionId {
        self.subscribe(MouseEventKind::Down, Box::new(handler))
    }

    pub fn subscribe_mouse_up(
        &mut self,
        handler: impl FnMut(&mut DesignPanel, &mut MouseButtonEvent) + 'static,
    ) -> SubscriptionId {
        self.subscribe(MouseEventKind::Up, Box::new(handler))
    }

    fn subscribe(&mut self, kind: MouseEventKind, handler: MouseHandler) -> SubscriptionId {
        let id = SubscriptionId(self.subscribers.next_id);
        self.subscribers.next_id += 1;
        self.subscribers.list_mut(kind).push((id, handler));
        id
    }

    /// Remove a raw subscriber. Safe to call from inside a handler, including
    /// for the handler itself. Returns `false` for unknown ids.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let subscribers = &mut self.subscribers;
        for list in [&mut subscribers.down, &mut subscribers.up] {
            if let Some(index) = list.iter().position(|(sub, _)| *sub == id) {
                list.remove(index);
                return true;
            }
        }
        if subscribers.in_flight.contains(&id) && !subscribers.removed.contains(&id) {
            subscribers.removed.push(id);
            return true;
        }
        false
    }

    /// Route a mouse down.
    pub fn handle_mouse_down(&mut self, event: &mut MouseButtonEvent) -> MouseRoute {
        if self.is_in_input_action() {
            tracing::trace!(position = ?event.position, "Mouse down captured by input action");
            self.notify(MouseEventKind::Down, event);
            return MouseRoute::Captured;
        }

        let route = self.arbitrate_mouse_down(event);
        if !event.handled {
            self.notify(MouseEventKind::Down, event);
        }
        route
    }

    /// Route a mouse up. Only raw subscribers receive mouse ups.
    pub fn handle_mouse_up(&mut self, event: &mut MouseButtonEvent) {
        self.notify(MouseEventKind::Up, event);
    }

    fn arbitrate_mouse_down(&mut self, event: &mut MouseButtonEvent) -> MouseRoute {
        let item = event
            .source
            .and_then(|source| self.find_designed_element_for_original_source(source));
        let tool = self.context.tool_service().current_tool();

        let mut candidates = vec![Candidate::tool(tool.input_layer())];
        if let Some(item) = item {
            candidates.push(Candidate::component(item, self.context.component_input_layer(item)));
        }
        let hits = self
            .adorners
            .hit_test(event.position, self.context.config().hit_tolerance);
        candidates.extend(hits.iter().filter_map(|hit| {
            hit.input
                .as_ref()
                .map(|input| Candidate::adorner(hit.panel, hit.adorner, input.layer))
        }));

        let Some(winner) = arbitrate(&candidates).copied() else {
            return MouseRoute::Unrouted;
        };
        tracing::debug!(
            dispatch_target = ?winner.target,
            layer = ?winner.layer,
            candidates = candidates.len(),
            "Mouse down arbitrated"
        );

        match winner.target {
            DispatchTarget::Tool => tool.on_mouse_down(self, event),
            // The component handles its own input in the host.
            DispatchTarget::Component(_) => {}
            DispatchTarget::Adorner { panel, adorner } => {
                let handler = hits
                    .iter()
                    .find(|hit| hit.panel == panel && hit.adorner == adorner)
                    .and_then(|hit| hit.input.as_ref())
                    .map(|input| input.handler.clone());
                if let Some(handler) = handler {
                    handler.on_mouse_down(self, (panel, adorner), event);
                }
            }
        }
        MouseRoute::Dispatched(winner.target)
    }

    fn notify(&mut self, kind: MouseEventKind, event: &mut MouseButtonEvent) {
        let mut handlers = std::mem::take(self.subscribers.list_mut(kind));
        let batch: Vec<SubscriptionId> = handlers.iter().map(|(id, _)| *id).collect();
        self.subscribers.in_flight.extend(&batch);

        for (id, handler) in handlers.iter_mut() {
            if self.subscribers.removed.contains(id) {
                continue;
            }
            handler(self, event);
        }

        let subscribers = &mut self.subscribers;
        handlers.retain(|(id, _)| !subscribers.removed.contains(id));
        subscribers.in_flight.retain(|id| !batch.contains(id));
        subscribers.removed.retain(|id| !batch.contains(id));

        // Handlers subscribed during notification go after the existing ones.
        let added = std::mem::take(subscribers.list_mut(kind));
        handlers.extend(added);
        *subscribers.list_mut(kind) = handlers;
    }
}
