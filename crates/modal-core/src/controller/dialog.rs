use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::callback::CallbackSlot;
use super::{CallbackPolicy, DialogPhase, ModalController};

/// Invoked by [`DialogController::close`] with the recorded response.
pub type OnClose<R> = Box<dyn FnMut(Option<&R>)>;

/// Invoked by [`DialogController::cancel`].
pub type OnCancel = Box<dyn FnMut()>;

/// Generic open/close/cancel controller for one dialog usage site.
///
/// `P` is the caller-defined payload handed to the modal (title, fields,
/// anything). `R` is the response the modal reports back on `close`. Neither
/// is constrained beyond what the caller needs.
pub struct DialogController<P, R> {
    visible: bool,
    properties: Option<P>,
    pending_response: Option<R>,
    on_close: CallbackSlot<dyn FnMut(Option<&R>)>,
    on_cancel: CallbackSlot<dyn FnMut()>,
    policy: CallbackPolicy,
}

/// Borrowed snapshot of a [`DialogController`] for one render pass.
#[derive(Debug, Serialize)]
pub struct DialogView<'a, P, R> {
    pub phase: DialogPhase,
    pub visible: bool,
    pub properties: Option<&'a P>,
    pub pending_response: Option<&'a R>,
}

impl<P, R> DialogController<P, R> {
    pub fn new() -> Self {
        Self::with_policy(CallbackPolicy::default())
    }

    pub fn with_policy(policy: CallbackPolicy) -> Self {
        Self {
            visible: false,
            properties: None,
            pending_response: None,
            on_close: CallbackSlot::empty(),
            on_cancel: CallbackSlot::empty(),
            policy,
        }
    }

    /// Present the dialog with `properties`.
    ///
    /// Both callback slots are overwritten, including ones that never fired
    /// in a previous, unterminated episode. Passing `None` leaves that slot
    /// empty.
    pub fn open(
        &mut self,
        properties: P,
        on_close: Option<OnClose<R>>,
        on_cancel: Option<OnCancel>,
    ) {
        let was_visible = self.visible;
        self.visible = true;
        self.properties = Some(properties);
        self.on_close.replace(on_close);
        self.on_cancel.replace(on_cancel);

        debug!(
            event = "core.dialog.open_completed",
            reopened = was_visible,
            on_close = self.on_close.is_armed(),
            on_cancel = self.on_cancel.is_armed()
        );
    }

    /// Hide the dialog, record `response`, then fire the stored close callback.
    pub fn close(&mut self, response: Option<R>) {
        self.visible = false;
        self.pending_response = response;

        let fired = self
            .on_close
            .fire_with(self.policy, |callback| callback(self.pending_response.as_ref()));

        debug!(
            event = "core.dialog.close_completed",
            has_response = self.pending_response.is_some(),
            callback_fired = fired
        );
    }

    pub fn close_with(&mut self, response: R) {
        self.close(Some(response));
    }

    /// Hide the dialog and fire the stored cancel callback.
    ///
    /// The pending response is left as it was.
    pub fn cancel(&mut self) {
        self.visible = false;

        let fired = self.on_cancel.fire_with(self.policy, |callback| callback());

        debug!(event = "core.dialog.cancel_completed", callback_fired = fired);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Properties from the most recent `open`, or `None` before the first one.
    pub fn properties(&self) -> Option<&P> {
        self.properties.as_ref()
    }

    /// Response recorded by the most recent `close`.
    pub fn pending_response(&self) -> Option<&R> {
        self.pending_response.as_ref()
    }

    pub fn view(&self) -> DialogView<'_, P, R> {
        DialogView {
            phase: DialogPhase::from_visible(self.visible),
            visible: self.visible,
            properties: self.properties.as_ref(),
            pending_response: self.pending_response.as_ref(),
        }
    }
}

impl<P, R> ModalController for DialogController<P, R> {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn policy(&self) -> CallbackPolicy {
        self.policy
    }
}

impl<P, R> Default for DialogController<P, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: fmt::Debug, R: fmt::Debug> fmt::Debug for DialogController<P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogController")
            .field("visible", &self.visible)
            .field("properties", &self.properties)
            .field("pending_response", &self.pending_response)
            .field("on_close", &self.on_close)
            .field("on_cancel", &self.on_cancel)
            .field("policy", &self.policy)
            .finish()
    }
}
