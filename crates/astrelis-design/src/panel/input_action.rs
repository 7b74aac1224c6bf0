use std::cell::Cell;
use std::rc::Rc;

use crate::error::{DesignError, DesignResult};

/// Dispatch state of a design panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// Mouse events are arbitrated between tool, component and adorners.
    #[default]
    NormalDispatch,
    /// A gesture owns the input; only raw subscribers see mouse events.
    InputActionInProgress,
}

#[derive(Debug, Default)]
struct Counters {
    depth: Cell<u32>,
    /// Bumped every time the depth returns to zero.
    epoch: Cell<u64>,
}

/// Nesting depth of running input actions. Shared with [`InputAction`] guards.
#[derive(Debug, Clone, Default)]
pub(crate) struct InputActionDepth(Rc<Counters>);

impl InputActionDepth {
    pub(crate) fn get(&self) -> u32 {
        self.0.depth.get()
    }

    pub(crate) fn epoch(&self) -> u64 {
        self.0.epoch.get()
    }

    pub(crate) fn start(&self) {
        let depth = self.get().saturating_add(1);
        self.0.depth.set(depth);
        tracing::debug!(depth, epoch = self.epoch(), "Input action started");
    }

    /// Fails without touching the depth if no action is running.
    pub(crate) fn stop(&self) -> DesignResult<()> {
        let Some(depth) = self.get().checked_sub(1) else {
            tracing::error!("stop_input_action without a running input action");
            return Err(DesignError::UnbalancedInputAction);
        };
        self.0.depth.set(depth);
        if depth == 0 {
            self.0.epoch.set(self.epoch().wrapping_add(1));
        }
        tracing::debug!(depth, "Input action stopped");
        Ok(())
    }

    pub(crate) fn state(&self) -> InputState {
        if self.get() > 0 {
            InputState::InputActionInProgress
        } else {
            InputState::NormalDispatch
        }
    }
}

/// Scoped input action.
///
/// Holds the panel in [`InputState::InputActionInProgress`] until it is
/// finished or dropped. The guard does not borrow the panel, so a handler can
/// keep it across events (e.g. from mouse down until mouse up).
///
/// A guard only releases the action run it was started in. Once every input
/// action has been stopped, an older guard is stale and releasing it does
/// nothing to actions started afterwards.
#[derive(Debug)]
#[must_use = "the input action stops as soon as the guard is dropped"]
pub struct InputAction {
    depth: InputActionDepth,
    epoch: u64,
    finished: bool,
}

impl InputAction {
    pub(crate) fn begin(depth: &InputActionDepth) -> Self {
        depth.start();
        Self {
            depth: depth.clone(),
            epoch: depth.epoch(),
            finished: false,
        }
    }

    /// Whether the run this guard belongs to was already stopped elsewhere.
    pub fn is_stale(&self) -> bool {
        self.depth.epoch() != self.epoch
    }

    /// Stop the input action now.
    ///
    /// Returns [`DesignError::UnbalancedInputAction`] without changing any
    /// state if the action was already stopped through
    /// `stop_input_action`.
    pub fn finish(mut self) -> DesignResult<()> {
        self.finished = true;
        if self.is_stale() {
            tracing::warn!(epoch = self.epoch, "Finishing a stale input action guard");
            return Err(DesignError::UnbalancedInputAction);
        }
        self.depth.stop()
    }
}

impl Drop for InputAction {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        // Someone called stop_input_action behind the guard's back.
        if self.is_stale() {
            tracing::warn!(epoch = self.epoch, "Input action guard dropped after the action was stopped");
            return;
        }
        if let Err(err) = self.depth.stop() {
            tracing::warn!(%err, "Input action guard dropped after the action was stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_counts_nested_actions() {
        let depth = InputActionDepth::default();
        depth.start();
        depth.start();
        assert_eq!(depth.state(), InputState::InputActionInProgress);

        depth.stop().unwrap();
        assert_eq!(depth.state(), InputState::InputActionInProgress);
        depth.stop().unwrap();
        assert_eq!(depth.state(), InputState::NormalDispatch);
    }

    #[test]
    fn test_unbalanced_stop_leaves_state() {
        let depth = InputActionDepth::default();
        assert_eq!(depth.stop(), Err(DesignError::UnbalancedInputAction));
        assert_eq!(depth.get(), 0);
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let depth = InputActionDepth::default();
        {
            let _action = InputAction::begin(&depth);
            assert_eq!(depth.get(), 1);
        }
        assert_eq!(depth.get(), 0);
    }

    #[test]
    fn test_finish_releases_once() {
        let depth = InputActionDepth::default();
        let action = InputAction::begin(&depth);
        assert!(action.finish().is_ok());
        assert_eq!(depth.get(), 0);
    }

    #[test]
    fn test_stale_guard_leaves_later_action_running() {
        let depth = InputActionDepth::default();
        let first = InputAction::begin(&depth);
        depth.stop().unwrap();
        assert!(first.is_stale());

        depth.start();
        drop(first);
        assert_eq!(depth.state(), InputState::InputActionInProgress);
        assert!(depth.stop().is_ok());
        assert_eq!(depth.state(), InputState::NormalDispatch);
    }

    #[test]
    fn test_finishing_stale_guard_is_unbalanced() {
        let depth = InputActionDepth::default();
        let first = InputAction::begin(&depth);
        depth.stop().unwrap();
        depth.start();

        assert_eq!(first.finish(), Err(DesignError::UnbalancedInputAction));
        assert_eq!(depth.get(), 1);
    }
}
