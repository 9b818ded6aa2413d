use serde::{Deserialize, Serialize};
use tracing::debug;

use super::callback::{Callback, CallbackSlot};
use super::{CallbackPolicy, DialogPhase, ModalController};

/// Content of a two-outcome confirmation.
///
/// `grant_text` and `deny_text` are display labels only; the controller
/// never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfirmProps {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deny_text: Option<String>,
}

impl ConfirmProps {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            grant_text: None,
            deny_text: None,
        }
    }

    pub fn with_grant_text(mut self, text: impl Into<String>) -> Self {
        self.grant_text = Some(text.into());
        self
    }

    pub fn with_deny_text(mut self, text: impl Into<String>) -> Self {
        self.deny_text = Some(text.into());
        self
    }
}

/// Fallback button labels used when the props leave them unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmLabels {
    pub grant: String,
    pub deny: String,
}

impl Default for ConfirmLabels {
    fn default() -> Self {
        Self {
            grant: "Yes".to_string(),
            deny: "No".to_string(),
        }
    }
}

/// Controller for a confirmation with independent `grant` and `deny` outcomes.
#[derive(Debug, Default)]
pub struct ConfirmController {
    visible: bool,
    properties: Option<ConfirmProps>,
    on_grant: CallbackSlot<dyn FnMut()>,
    on_deny: CallbackSlot<dyn FnMut()>,
    labels: ConfirmLabels,
    policy: CallbackPolicy,
}

/// Borrowed snapshot of a [`ConfirmController`] with labels already resolved.
#[derive(Debug, Serialize)]
pub struct ConfirmView<'a> {
    pub phase: DialogPhase,
    pub visible: bool,
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub grant_label: &'a str,
    pub deny_label: &'a str,
}

impl ConfirmController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: CallbackPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn with_labels(mut self, labels: ConfirmLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Show the confirmation and arm both outcome callbacks.
    ///
    /// Both slots are replaced, so an outcome left `None` here will not fire
    /// a callback from an earlier episode.
    pub fn open(
        &mut self,
        properties: ConfirmProps,
        on_grant: Option<Callback>,
        on_deny: Option<Callback>,
    ) {
        self.visible = true;
        self.properties = Some(properties);
        self.on_grant.replace(on_grant);
        self.on_deny.replace(on_deny);

        debug!(
            event = "core.confirm.open_completed",
            on_grant = self.on_grant.is_armed(),
            on_deny = self.on_deny.is_armed()
        );
    }

    /// Hide the confirmation and fire `on_grant`. `on_deny` stays stored.
    pub fn grant(&mut self) {
        self.visible = false;
        let fired = self.on_grant.fire_with(self.policy, |callback| callback());

        debug!(event = "core.confirm.grant_completed", callback_fired = fired);
    }

    /// Hide the confirmation and fire `on_deny`. `on_grant` stays stored.
    pub fn deny(&mut self) {
        self.visible = false;
        let fired = self.on_deny.fire_with(self.policy, |callback| callback());

        debug!(event = "core.confirm.deny_completed", callback_fired = fired);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn properties(&self) -> Option<&ConfirmProps> {
        self.properties.as_ref()
    }

    pub fn labels(&self) -> &ConfirmLabels {
        &self.labels
    }

    /// Label for the grant button: the props' text, else the configured default.
    pub fn grant_label(&self) -> &str {
        self.properties
            .as_ref()
            .and_then(|p| p.grant_text.as_deref())
            .unwrap_or(&self.labels.grant)
    }

    /// Label for the deny button: the props' text, else the configured default.
    pub fn deny_label(&self) -> &str {
        self.properties
            .as_ref()
            .and_then(|p| p.deny_text.as_deref())
            .unwrap_or(&self.labels.deny)
    }

    pub fn view(&self) -> ConfirmView<'_> {
        ConfirmView {
            phase: DialogPhase::from_visible(self.visible),
            visible: self.visible,
            title: self.properties.as_ref().map(|p| p.title.as_str()),
            description: self.properties.as_ref().map(|p| p.description.as_str()),
            grant_label: self.grant_label(),
            deny_label: self.deny_label(),
        }
    }
}

impl ModalController for ConfirmController {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn policy(&self) -> CallbackPolicy {
        self.policy
    }
}
