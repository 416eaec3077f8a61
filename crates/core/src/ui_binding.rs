//! Element identifiers the page must provide.
//!
//! Kept outside the wasm-only crate so the inventory is unit-tested on the host.

use crate::wire::Action;

pub const CANVAS_ID: &str = "vectorCanvas";
pub const VECTOR_X_ID: &str = "vectorX";
pub const VECTOR_Y_ID: &str = "vectorY";
pub const THRESHOLD_ID: &str = "thresholdValue";

/// Class toggled on the filter control to mirror `show_filtered`.
pub const ACTIVE_CLASS: &str = "active";

/// A clickable control that sends one fixed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Calibrate,
    Filter,
    ThresholdUp,
    ThresholdDown,
}

impl Control {
    pub fn all() -> &'static [Control] {
        &[
            Control::Calibrate,
            Control::Filter,
            Control::ThresholdUp,
            Control::ThresholdDown,
        ]
    }

    pub fn element_id(self) -> &'static str {
        match self {
            Control::Calibrate => "calibrateBtn",
            Control::Filter => "filterBtn",
            Control::ThresholdUp => "thresholdUpBtn",
            Control::ThresholdDown => "thresholdDownBtn",
        }
    }

    pub fn action(self) -> Action {
        match self {
            Control::Calibrate => Action::Calibrate,
            Control::Filter => Action::ToggleFilter,
            Control::ThresholdUp => Action::ThresholdUp,
            Control::ThresholdDown => Action::ThresholdDown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Control::Calibrate => "Calibrate",
            Control::Filter => "Filter",
            Control::ThresholdUp => "Threshold +",
            Control::ThresholdDown => "Threshold −",
        }
    }

    /// Whether the control carries the `active` class.
    pub fn has_active_state(self) -> bool {
        matches!(self, Control::Filter)
    }
}
