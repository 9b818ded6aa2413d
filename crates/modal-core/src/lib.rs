//! modal-core: owned-state controllers for modal feedback
//!
//! Each controller holds the visibility flag, the properties handed to the
//! modal, and the callbacks fired when the modal is dismissed. The
//! presentation layer rereads controller state on every render pass.
//!
//! # Main Entry Points
//!
//! - [`controller`] - Alert, confirm and generic dialog controllers
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging initialization

pub mod config;
pub mod controller;
pub mod errors;
pub mod events;
pub mod logging;

// Re-export commonly used types at crate root for convenience
pub use config::ModalConfig;
pub use controller::{
    AlertController, AlertProps, AlertView, Callback, CallbackPolicy, ConfirmController,
    ConfirmLabels, ConfirmProps, ConfirmView, DialogController, DialogPhase, DialogView,
    ModalController, OnCancel, OnClose,
};
pub use errors::{ConfigError, ModalError, ModalResult};

// Re-export logging initialization
pub use logging::init_logging;
