use serde::{Deserialize, Serialize};
use tracing::debug;

use super::callback::{Callback, CallbackSlot};
use super::{CallbackPolicy, DialogPhase, ModalController};

/// Content of an alert: a single message with one dismissal action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertProps {
    pub title: String,
    pub description: String,
}

impl AlertProps {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Controller for an alert with a single `close` action.
#[derive(Debug, Default)]
pub struct AlertController {
    visible: bool,
    properties: Option<AlertProps>,
    on_close: CallbackSlot<dyn FnMut()>,
    policy: CallbackPolicy,
}

/// Borrowed snapshot of an [`AlertController`] for one render pass.
#[derive(Debug, Serialize)]
pub struct AlertView<'a> {
    pub phase: DialogPhase,
    pub visible: bool,
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
}

impl AlertController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: CallbackPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Show the alert. The close callback of any earlier episode is dropped.
    pub fn open(&mut self, properties: AlertProps, on_close: Option<Callback>) {
        self.visible = true;
        self.properties = Some(properties);
        self.on_close.replace(on_close);

        debug!(
            event = "core.alert.open_completed",
            on_close = self.on_close.is_armed()
        );
    }

    /// Hide the alert, then fire the stored close callback if there is one.
    pub fn close(&mut self) {
        self.visible = false;
        let fired = self.on_close.fire_with(self.policy, |callback| callback());

        debug!(event = "core.alert.close_completed", callback_fired = fired);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn properties(&self) -> Option<&AlertProps> {
        self.properties.as_ref()
    }

    pub fn view(&self) -> AlertView<'_> {
        AlertView {
            phase: DialogPhase::from_visible(self.visible),
            visible: self.visible,
            title: self.properties.as_ref().map(|p| p.title.as_str()),
            description: self.properties.as_ref().map(|p| p.description.as_str()),
        }
    }
}

impl ModalController for AlertController {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn policy(&self) -> CallbackPolicy {
        self.policy
    }
}
