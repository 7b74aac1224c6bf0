use crate::adorner::{AdornerId, AdornerPanelId};

/// Errors raised by the design surface.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignError {
    /// `stop_input_action` was called while no input action was running.
    UnbalancedInputAction,

    /// An adorner's desired size was needed before it was measured.
    NotMeasured { adorner: AdornerId },

    /// No adorner panel with this id is attached to the design panel.
    UnknownAdornerPanel(AdornerPanelId),

    /// No adorner with this id exists on the panel.
    UnknownAdorner(AdornerId),

    /// Configuration could not be parsed.
    Config(String),

    /// Generic IO error.
    Io(String),
}

impl std::fmt::Display for DesignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DesignError::UnbalancedInputAction => {
                write!(f, "stop_input_action called without a matching start_input_action")
            }
            DesignError::NotMeasured { adorner } => write!(
                f,
                "Adorner {:?} was arranged relative to its desired size before being measured",
                adorner
            ),
            DesignError::UnknownAdornerPanel(id) => write!(f, "Unknown adorner panel: {:?}", id),
            DesignError::UnknownAdorner(id) => write!(f, "Unknown adorner: {:?}", id),
            DesignError::Config(msg) => write!(f, "Invalid designer configuration: {}", msg),
            DesignError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for DesignError {}

impl From<std::io::Error> for DesignError {
    fn from(err: std::io::Error) -> Self {
        DesignError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for DesignError {
    fn from(err: toml::de::Error) -> Self {
        DesignError::Config(err.to_string())
    }
}

/// Result type for design surface operations.
pub type DesignResult<T> = Result<T, DesignError>;
