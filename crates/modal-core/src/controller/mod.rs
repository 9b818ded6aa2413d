//! Dialog controllers.
//!
//! Every controller follows the same two-state machine: `Closed` is initial,
//! `open` moves to `Open` (or re-arms an already open dialog), and each
//! dismissal action moves back to `Closed`. A dismissal on an already closed
//! controller is still allowed and still fires whatever callback is stored,
//! unless the controller runs with [`CallbackPolicy::ClearOnFire`].
//!
//! Controllers never fail: absent callbacks are a no-op, and no operation
//! validates its input.

mod alert;
mod callback;
mod confirm;
mod dialog;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use alert::{AlertController, AlertProps, AlertView};
pub use callback::Callback;
pub use confirm::{ConfirmController, ConfirmLabels, ConfirmProps, ConfirmView};
pub use dialog::{DialogController, DialogView, OnCancel, OnClose};

/// Presentation state of a dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogPhase {
    #[default]
    Closed,
    Open,
}

impl DialogPhase {
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            DialogPhase::Open
        } else {
            DialogPhase::Closed
        }
    }
}

impl fmt::Display for DialogPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DialogPhase::Closed => "closed",
            DialogPhase::Open => "open",
        };
        f.pad(name)
    }
}

/// What happens to a stored callback once it has fired.
///
/// Callbacks are always replaced wholesale by the next `open`. The policy
/// only decides whether a dismissal repeated without an intervening `open`
/// fires the same callback again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallbackPolicy {
    /// Keep the callback stored after it fires. A second `close` without a
    /// new `open` invokes it again.
    #[default]
    Retain,
    /// Take the callback out of its slot when it fires. Repeated dismissals
    /// only change visibility.
    ClearOnFire,
}

impl CallbackPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallbackPolicy::Retain => "retain",
            CallbackPolicy::ClearOnFire => "clear_on_fire",
        }
    }
}

impl fmt::Display for CallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CallbackPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "retain" => Ok(CallbackPolicy::Retain),
            "clear_on_fire" => Ok(CallbackPolicy::ClearOnFire),
            other => Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "unknown callback policy '{}' (expected 'retain' or 'clear_on_fire')",
                    other
                ),
            }),
        }
    }
}

/// Read side shared by all controllers.
///
/// The presentation layer uses this to decide whether to render a dialog at
/// all, without caring which variant it is.
pub trait ModalController {
    /// Whether the dialog is currently presented.
    fn is_visible(&self) -> bool;

    /// Callback policy this controller was built with.
    fn policy(&self) -> CallbackPolicy;

    fn phase(&self) -> DialogPhase {
        DialogPhase::from_visible(self.is_visible())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn closed<C: ModalController>(controller: &C) -> bool {
        controller.phase() == DialogPhase::Closed && !controller.is_visible()
    }

    #[test]
    fn test_every_controller_starts_closed() {
        assert!(closed(&AlertController::new()));
        assert!(closed(&ConfirmController::new()));
        assert!(closed(&DialogController::<String, String>::new()));
    }

    #[test]
    fn test_phase_from_visible() {
        assert_eq!(DialogPhase::from_visible(true), DialogPhase::Open);
        assert_eq!(DialogPhase::from_visible(false), DialogPhase::Closed);
        assert_eq!(DialogPhase::default(), DialogPhase::Closed);
    }

    #[test]
    fn test_callback_policy_default_is_retain() {
        assert_eq!(CallbackPolicy::default(), CallbackPolicy::Retain);
    }

    #[test]
    fn test_callback_policy_parse() {
        assert_eq!(
            "retain".parse::<CallbackPolicy>().unwrap(),
            CallbackPolicy::Retain
        );
        assert_eq!(
            " clear_on_fire ".parse::<CallbackPolicy>().unwrap(),
            CallbackPolicy::ClearOnFire
        );

        let err = "sometimes".parse::<CallbackPolicy>().unwrap_err();
        assert!(err.to_string().contains("unknown callback policy 'sometimes'"));
    }

    #[test]
    fn test_callback_policy_serde_uses_snake_case() {
        let json = serde_json::to_string(&CallbackPolicy::ClearOnFire).unwrap();
        assert_eq!(json, r#""clear_on_fire""#);

        let phase = serde_json::to_string(&DialogPhase::Open).unwrap();
        assert_eq!(phase, r#""open""#);
    }

    #[test]
    fn test_alert_instances_are_isolated() {
        let mut first = AlertController::new();
        let second = AlertController::new();

        first.open(AlertProps::new("First", "only mine"), None);

        assert!(first.is_visible());
        assert!(!second.is_visible());
        assert!(second.properties().is_none());
    }

    #[test]
    fn test_confirm_instances_are_isolated() {
        let granted = Rc::new(Cell::new(0));
        let mut first = ConfirmController::new();
        let mut second = ConfirmController::new();

        let count = Rc::clone(&granted);
        first.open(
            ConfirmProps::new("First", "only mine"),
            Some(Box::new(move || count.set(count.get() + 1))),
            None,
        );
        second.grant();

        assert!(first.is_visible());
        assert!(!second.is_visible());
        assert!(second.properties().is_none());
        assert_eq!(granted.get(), 0);

        first.grant();
        assert_eq!(granted.get(), 1);
    }

    #[test]
    fn test_dialog_instances_are_isolated() {
        let closed_with = Rc::new(RefCell::new(Vec::new()));
        let mut first = DialogController::<String, String>::new();
        let mut second = DialogController::<String, String>::new();

        let record = Rc::clone(&closed_with);
        first.open(
            "first".to_string(),
            Some(Box::new(move |response: Option<&String>| {
                record.borrow_mut().push(response.cloned())
            })),
            None,
        );
        second.close_with("elsewhere".to_string());

        assert!(first.is_visible());
        assert!(first.pending_response().is_none());
        assert_eq!(second.pending_response(), Some(&"elsewhere".to_string()));
        assert!(second.properties().is_none());
        assert!(closed_with.borrow().is_empty());

        first.close_with("mine".to_string());
        assert_eq!(*closed_with.borrow(), vec![Some("mine".to_string())]);
    }
}
