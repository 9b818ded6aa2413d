use std::fmt;

use super::CallbackPolicy;

/// Zero-argument dismissal callback (alert close, confirm grant/deny).
pub type Callback = Box<dyn FnMut()>;

/// Storage for one optional callback owned by a controller.
///
/// Replaced wholesale on every `open`. Whether it survives firing depends on
/// the controller's [`CallbackPolicy`].
pub(crate) struct CallbackSlot<F: ?Sized> {
    callback: Option<Box<F>>,
}

impl<F: ?Sized> CallbackSlot<F> {
    pub(crate) fn empty() -> Self {
        Self { callback: None }
    }

    /// Store `callback`, dropping whatever was there. `None` empties the slot.
    pub(crate) fn replace(&mut self, callback: Option<Box<F>>) {
        self.callback = callback;
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.callback.is_some()
    }

    /// Run `invoke` against the stored callback, if any.
    ///
    /// Returns whether a callback fired.
    pub(crate) fn fire_with(&mut self, policy: CallbackPolicy, invoke: impl FnOnce(&mut F)) -> bool {
        match policy {
            CallbackPolicy::Retain => match self.callback.as_deref_mut() {
                Some(callback) => {
                    invoke(callback);
                    true
                }
                None => false,
            },
            CallbackPolicy::ClearOnFire => match self.callback.take() {
                Some(mut callback) => {
                    invoke(&mut *callback);
                    true
                }
                None => false,
            },
        }
    }
}

impl<F: ?Sized> Default for CallbackSlot<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: ?Sized> fmt::Debug for CallbackSlot<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSlot")
            .field("armed", &self.is_armed())
            .finish()
    }
}
