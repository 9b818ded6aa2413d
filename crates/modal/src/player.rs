//! Replays script steps against one controller of each kind.

use std::cell::RefCell;
use std::rc::Rc;

use modal_core::{
    AlertController, Callback, CallbackPolicy, ConfirmController, ConfirmLabels,
    DialogController, ModalController, OnClose,
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::script::{ScriptLine, Step, Target};

/// Names of callbacks that fired, in firing order.
type FiredLog = Rc<RefCell<Vec<String>>>;

/// What a single step did, as the presentation layer would see it.
#[derive(Debug, Serialize)]
pub struct StepReport {
    pub line: usize,
    pub step: Step,
    pub target: Target,
    pub fired: Vec<String>,
    pub state: Value,
}

pub struct Player {
    alert: AlertController,
    confirm: ConfirmController,
    dialog: DialogController<Value, Value>,
    fired: FiredLog,
}

impl Player {
    pub fn new(policy: CallbackPolicy, labels: ConfirmLabels) -> Self {
        Self {
            alert: AlertController::with_policy(policy),
            confirm: ConfirmController::with_policy(policy).with_labels(labels),
            dialog: DialogController::with_policy(policy),
            fired: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn policy(&self) -> CallbackPolicy {
        self.alert.policy()
    }

    /// Apply one step and report the resulting state of the controller it targeted.
    pub fn apply(&mut self, script_line: &ScriptLine) -> Result<StepReport, serde_json::Error> {
        match &script_line.step {
            Step::AlertOpen { props } => {
                let on_close = self.recorder("alert.on_close");
                self.alert.open(props.clone(), Some(on_close));
            }
            Step::AlertClose => self.alert.close(),
            Step::ConfirmOpen { props } => {
                let on_grant = self.recorder("confirm.on_grant");
                let on_deny = self.recorder("confirm.on_deny");
                self.confirm.open(props.clone(), Some(on_grant), Some(on_deny));
            }
            Step::ConfirmGrant => self.confirm.grant(),
            Step::ConfirmDeny => self.confirm.deny(),
            Step::DialogOpen { props } => {
                let on_close = self.close_recorder();
                let on_cancel = self.recorder("dialog.on_cancel");
                self.dialog.open(props.clone(), Some(on_close), Some(on_cancel));
            }
            Step::DialogClose { response } => self.dialog.close(response.clone()),
            Step::DialogCancel => self.dialog.cancel(),
        }

        let target = script_line.step.target();
        let fired = std::mem::take(&mut *self.fired.borrow_mut());

        debug!(
            event = "cli.play.step_applied",
            line = script_line.line,
            action = script_line.step.name(),
            fired = fired.len()
        );

        Ok(StepReport {
            line: script_line.line,
            step: script_line.step.clone(),
            target,
            fired,
            state: self.state_of(target)?,
        })
    }

    pub fn state_of(&self, target: Target) -> Result<Value, serde_json::Error> {
        match target {
            Target::Alert => serde_json::to_value(self.alert.view()),
            Target::Confirm => serde_json::to_value(self.confirm.view()),
            Target::Dialog => serde_json::to_value(self.dialog.view()),
        }
    }

    pub fn is_visible(&self, target: Target) -> bool {
        match target {
            Target::Alert => self.alert.is_visible(),
            Target::Confirm => self.confirm.is_visible(),
            Target::Dialog => self.dialog.is_visible(),
        }
    }

    fn recorder(&self, name: &'static str) -> Callback {
        let fired = Rc::clone(&self.fired);
        Box::new(move || fired.borrow_mut().push(name.to_string()))
    }

    fn close_recorder(&self) -> OnClose<Value> {
        let fired = Rc::clone(&self.fired);
        Box::new(move |response: Option<&Value>| {
            let entry = match response {
                Some(value) => format!("dialog.on_close({})", value),
                None => "dialog.on_close()".to_string(),
            };
            fired.borrow_mut().push(entry);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::parse_script;

    fn play(player: &mut Player, text: &str) -> Vec<StepReport> {
        parse_script(text)
            .unwrap()
            .iter()
            .map(|line| player.apply(line).unwrap())
            .collect()
    }

    fn player(policy: CallbackPolicy) -> Player {
        Player::new(policy, ConfirmLabels::default())
    }

    #[test]
    fn test_alert_episode() {
        let mut player = player(CallbackPolicy::Retain);
        let reports = play(&mut player, "alert.open T | D\nalert.close");

        assert_eq!(reports[0].state["visible"], true);
        assert_eq!(reports[0].state["title"], "T");
        assert!(reports[0].fired.is_empty());

        assert_eq!(reports[1].state["phase"], "closed");
        assert_eq!(reports[1].fired, vec!["alert.on_close"]);
        assert!(!player.is_visible(Target::Alert));
    }

    #[test]
    fn test_confirm_grant_only_fires_grant() {
        let mut player = player(CallbackPolicy::Retain);
        let reports = play(&mut player, "confirm.open Go? | Really | Do it\nconfirm.grant");

        assert_eq!(reports[0].state["grant_label"], "Do it");
        assert_eq!(reports[0].state["deny_label"], "No");
        assert_eq!(reports[1].fired, vec!["confirm.on_grant"]);
    }

    #[test]
    fn test_dialog_double_close_fires_twice_under_retain() {
        let mut player = player(CallbackPolicy::Retain);
        let reports = play(
            &mut player,
            "dialog.open {\"title\": \"A\"}\ndialog.close \"yes\"\ndialog.close \"no\"",
        );

        assert_eq!(reports[1].fired, vec![r#"dialog.on_close("yes")"#]);
        assert_eq!(reports[2].fired, vec![r#"dialog.on_close("no")"#]);
        assert_eq!(reports[2].state["pending_response"], "no");
    }

    #[test]
    fn test_dialog_double_close_fires_once_under_clear_on_fire() {
        let mut player = player(CallbackPolicy::ClearOnFire);
        let reports = play(
            &mut player,
            "dialog.open {\"title\": \"A\"}\ndialog.close \"yes\"\ndialog.close \"no\"",
        );

        assert_eq!(reports[1].fired.len(), 1);
        assert!(reports[2].fired.is_empty());
        assert_eq!(player.policy(), CallbackPolicy::ClearOnFire);
    }

    #[test]
    fn test_dialog_cancel_keeps_pending_response() {
        let mut player = player(CallbackPolicy::Retain);
        let reports = play(
            &mut player,
            "dialog.open {}\ndialog.close 1\ndialog.open {}\ndialog.cancel",
        );

        assert_eq!(reports[3].fired, vec!["dialog.on_cancel"]);
        assert_eq!(reports[3].state["pending_response"], 1);
        assert_eq!(reports[3].state["visible"], false);
    }

    #[test]
    fn test_controllers_do_not_share_state() {
        let mut player = player(CallbackPolicy::Retain);
        play(&mut player, "alert.open T | D");

        assert!(player.is_visible(Target::Alert));
        assert!(!player.is_visible(Target::Confirm));
        assert!(!player.is_visible(Target::Dialog));
    }
}
