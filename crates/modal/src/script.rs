//! Line-based dialog scripts.
//!
//! One action per line. Blank lines and lines starting with `#` are skipped.
//! Arguments follow the action name and are separated by `|`:
//!
//! ```text
//! alert.open Saved | Your changes were saved.
//! alert.close
//! confirm.open Delete? | This cannot be undone. | Delete | Keep
//! confirm.grant
//! dialog.open {"title": "Rename"}
//! dialog.close "new-name"
//! dialog.cancel
//! ```

use std::fmt;

use modal_core::{AlertProps, ConfirmProps, ModalError};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown action '{action}'")]
    UnknownAction { line: usize, action: String },

    #[error("line {line}: '{action}' requires {field}")]
    MissingField {
        line: usize,
        action: &'static str,
        field: &'static str,
    },

    #[error("line {line}: '{action}' takes no arguments")]
    UnexpectedArgument { line: usize, action: &'static str },

    #[error("line {line}: '{action}' takes at most {max} fields, got {found}")]
    TooManyFields {
        line: usize,
        action: &'static str,
        max: usize,
        found: usize,
    },

    #[error("line {line}: invalid JSON: {message}")]
    InvalidJson { line: usize, message: String },
}

impl ModalError for ScriptError {
    fn error_code(&self) -> &'static str {
        match self {
            ScriptError::UnknownAction { .. } => "SCRIPT_UNKNOWN_ACTION",
            ScriptError::MissingField { .. } => "SCRIPT_MISSING_FIELD",
            ScriptError::UnexpectedArgument { .. } => "SCRIPT_UNEXPECTED_ARGUMENT",
            ScriptError::TooManyFields { .. } => "SCRIPT_TOO_MANY_FIELDS",
            ScriptError::InvalidJson { .. } => "SCRIPT_INVALID_JSON",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

/// One controller operation from a script.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    AlertOpen { props: AlertProps },
    AlertClose,
    ConfirmOpen { props: ConfirmProps },
    ConfirmGrant,
    ConfirmDeny,
    DialogOpen { props: Value },
    DialogClose { response: Option<Value> },
    DialogCancel,
}

impl Step {
    /// Script spelling of the action, e.g. `confirm.grant`.
    pub fn name(&self) -> &'static str {
        match self {
            Step::AlertOpen { .. } => "alert.open",
            Step::AlertClose => "alert.close",
            Step::ConfirmOpen { .. } => "confirm.open",
            Step::ConfirmGrant => "confirm.grant",
            Step::ConfirmDeny => "confirm.deny",
            Step::DialogOpen { .. } => "dialog.open",
            Step::DialogClose { .. } => "dialog.close",
            Step::DialogCancel => "dialog.cancel",
        }
    }

    /// Which controller the step drives.
    pub fn target(&self) -> Target {
        match self {
            Step::AlertOpen { .. } | Step::AlertClose => Target::Alert,
            Step::ConfirmOpen { .. } | Step::ConfirmGrant | Step::ConfirmDeny => Target::Confirm,
            Step::DialogOpen { .. } | Step::DialogClose { .. } | Step::DialogCancel => {
                Target::Dialog
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Alert,
    Confirm,
    Dialog,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Target::Alert => "alert",
            Target::Confirm => "confirm",
            Target::Dialog => "dialog",
        };
        f.pad(name)
    }
}

/// A parsed step with its 1-based source line.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub step: Step,
}

/// Parse a whole script. Stops at the first malformed line.
pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut steps = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (action, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((action, rest)) => (action, rest.trim()),
            None => (trimmed, ""),
        };

        steps.push(ScriptLine {
            line,
            step: parse_step(line, action, rest)?,
        });
    }

    Ok(steps)
}

fn parse_step(line: usize, action: &str, rest: &str) -> Result<Step, ScriptError> {
    let step = match action {
        "alert.open" => {
            let fields = split_fields(line, "alert.open", rest, 2)?;
            Step::AlertOpen {
                props: AlertProps::new(
                    required(line, "alert.open", "a title", fields.first())?,
                    required(line, "alert.open", "a description", fields.get(1))?,
                ),
            }
        }
        "alert.close" => no_args(line, "alert.close", rest, Step::AlertClose)?,
        "confirm.open" => {
            let fields = split_fields(line, "confirm.open", rest, 4)?;
            let mut props = ConfirmProps::new(
                required(line, "confirm.open", "a title", fields.first())?,
                required(line, "confirm.open", "a description", fields.get(1))?,
            );
            props.grant_text = optional(fields.get(2));
            props.deny_text = optional(fields.get(3));
            Step::ConfirmOpen { props }
        }
        "confirm.grant" => no_args(line, "confirm.grant", rest, Step::ConfirmGrant)?,
        "confirm.deny" => no_args(line, "confirm.deny", rest, Step::ConfirmDeny)?,
        "dialog.open" => {
            if rest.is_empty() {
                return Err(ScriptError::MissingField {
                    line,
                    action: "dialog.open",
                    field: "JSON properties",
                });
            }
            Step::DialogOpen {
                props: parse_json(line, rest)?,
            }
        }
        "dialog.close" => Step::DialogClose {
            response: if rest.is_empty() {
                None
            } else {
                Some(parse_json(line, rest)?)
            },
        },
        "dialog.cancel" => no_args(line, "dialog.cancel", rest, Step::DialogCancel)?,
        other => {
            return Err(ScriptError::UnknownAction {
                line,
                action: other.to_string(),
            });
        }
    };

    Ok(step)
}

fn split_fields<'a>(
    line: usize,
    action: &'static str,
    rest: &'a str,
    max: usize,
) -> Result<Vec<&'a str>, ScriptError> {
    if rest.is_empty() {
        return Ok(Vec::new());
    }

    let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
    if fields.len() > max {
        return Err(ScriptError::TooManyFields {
            line,
            action,
            max,
            found: fields.len(),
        });
    }
    Ok(fields)
}

fn required(
    line: usize,
    action: &'static str,
    field: &'static str,
    value: Option<&&str>,
) -> Result<String, ScriptError> {
    match value {
        Some(v) if !v.is_empty() => Ok((*v).to_string()),
        _ => Err(ScriptError::MissingField {
            line,
            action,
            field,
        }),
    }
}

fn optional(value: Option<&&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(|v| (*v).to_string())
}

fn no_args(line: usize, action: &'static str, rest: &str, step: Step) -> Result<Step, ScriptError> {
    if rest.is_empty() {
        Ok(step)
    } else {
        Err(ScriptError::UnexpectedArgument { line, action })
    }
}

fn parse_json(line: usize, text: &str) -> Result<Value, ScriptError> {
    serde_json::from_str(text).map_err(|e| ScriptError::InvalidJson {
        line,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn steps(text: &str) -> Vec<Step> {
        parse_script(text)
            .unwrap()
            .into_iter()
            .map(|l| l.step)
            .collect()
    }

    #[test]
    fn test_parse_every_action() {
        let parsed = steps(
            r#"
alert.open Saved | Your changes were saved.
alert.close
confirm.open Delete? | This cannot be undone. | Delete | Keep
confirm.grant
confirm.deny
dialog.open {"title": "Rename"}
dialog.close "new-name"
dialog.close
dialog.cancel
"#,
        );

        assert_eq!(
            parsed,
            vec![
                Step::AlertOpen {
                    props: AlertProps::new("Saved", "Your changes were saved."),
                },
                Step::AlertClose,
                Step::ConfirmOpen {
                    props: ConfirmProps::new("Delete?", "This cannot be undone.")
                        .with_grant_text("Delete")
                        .with_deny_text("Keep"),
                },
                Step::ConfirmGrant,
                Step::ConfirmDeny,
                Step::DialogOpen {
                    props: json!({ "title": "Rename" }),
                },
                Step::DialogClose {
                    response: Some(json!("new-name")),
                },
                Step::DialogClose { response: None },
                Step::DialogCancel,
            ]
        );
    }

    #[test]
    fn test_comments_and_blank_lines_keep_line_numbers() {
        let parsed = parse_script("# header\n\nalert.close\n").unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].line, 3);
    }

    #[test]
    fn test_confirm_labels_are_optional() {
        let parsed = steps("confirm.open Leave? | Unsaved work will be lost.");
        assert_eq!(
            parsed,
            vec![Step::ConfirmOpen {
                props: ConfirmProps::new("Leave?", "Unsaved work will be lost."),
            }]
        );
    }

    #[test]
    fn test_unknown_action() {
        let err = parse_script("alert.close\nalert.explode").unwrap_err();
        assert_eq!(err.to_string(), "line 2: unknown action 'alert.explode'");
        assert_eq!(err.error_code(), "SCRIPT_UNKNOWN_ACTION");
    }

    #[test]
    fn test_alert_open_requires_description() {
        let err = parse_script("alert.open Only a title").unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 1: 'alert.open' requires a description"
        );
    }

    #[test]
    fn test_dismissals_take_no_arguments() {
        let err = parse_script("confirm.grant now").unwrap_err();
        assert!(matches!(
            err,
            ScriptError::UnexpectedArgument {
                line: 1,
                action: "confirm.grant"
            }
        ));
    }

    #[test]
    fn test_open_rejects_extra_fields() {
        let err = parse_script("alert.open T | D | stray").unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 1: 'alert.open' takes at most 2 fields, got 3"
        );
        assert_eq!(err.error_code(), "SCRIPT_TOO_MANY_FIELDS");

        let err = parse_script("alert.close\nconfirm.open A | B | Y | N | stray").unwrap_err();
        assert!(matches!(
            err,
            ScriptError::TooManyFields {
                line: 2,
                action: "confirm.open",
                max: 4,
                found: 5
            }
        ));
    }

    #[test]
    fn test_dialog_open_requires_valid_json() {
        let err = parse_script("dialog.open").unwrap_err();
        assert_eq!(err.error_code(), "SCRIPT_MISSING_FIELD");

        let err = parse_script("dialog.open {not json").unwrap_err();
        assert_eq!(err.error_code(), "SCRIPT_INVALID_JSON");
        assert!(err.to_string().starts_with("line 1: invalid JSON"));
    }

    #[test]
    fn test_step_names_and_targets() {
        assert_eq!(Step::ConfirmDeny.name(), "confirm.deny");
        assert_eq!(Step::ConfirmDeny.target(), Target::Confirm);
        assert_eq!(Step::DialogCancel.target(), Target::Dialog);
        assert_eq!(Step::AlertClose.target().to_string(), "alert");
    }

    #[test]
    fn test_step_serializes_with_action_tag() {
        let json = serde_json::to_value(Step::DialogClose {
            response: Some(json!(1)),
        })
        .unwrap();
        assert_eq!(json, json!({ "action": "dialog_close", "response": 1 }));
    }
}
