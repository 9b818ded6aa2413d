//! Application lifecycle events.
//!
//! A `modal` run logs startup, then one play session per script, then
//! shutdown. Errors that end the run are logged once, with their code when
//! they carry one.

use tracing::{error, info};

use crate::controller::CallbackPolicy;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}

/// A script was parsed and is about to drive the controllers.
pub fn log_play_started(script: &str, steps: usize, policy: CallbackPolicy) {
    info!(
        event = "core.play.session_started",
        script = script,
        steps = steps,
        policy = %policy
    );
}

/// Every step ran. `fired` counts callbacks invoked across the session.
pub fn log_play_completed(script: &str, steps: usize, fired: usize) {
    info!(
        event = "core.play.session_completed",
        script = script,
        steps = steps,
        fired = fired
    );
}
