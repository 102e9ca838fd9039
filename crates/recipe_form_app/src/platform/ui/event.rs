use thiserror::Error;

use super::constants::*;

pub const HELP_TEXT: &str = "\
Commands:
  select <n>         pick company n from the dropdown (0 = placeholder)
  text <ingredients> replace the ingredients text (empty clears it)
  submit             click the submit button
  show               redraw the form
  help               show this help
  quit               exit";

/// Input event raised by a form control or by the console itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    OptionSelected { control_id: ControlId, index: usize },
    InputTextChanged { control_id: ControlId, text: String },
    ButtonClicked { control_id: ControlId },
    RedrawRequested,
    HelpRequested,
    CloseRequested,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}` (type `help`)")]
    Unknown(String),
    #[error("`select` expects an option number, got `{0}`")]
    BadIndex(String),
}

/// Parses one console line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<UiEvent>, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return Ok(None);
    }
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    let event = match word.to_ascii_lowercase().as_str() {
        "select" => {
            let arg = rest.trim();
            let index = arg
                .parse::<usize>()
                .map_err(|_| CommandError::BadIndex(arg.to_string()))?;
            UiEvent::OptionSelected {
                control_id: DROPDOWN_COMPANY,
                index,
            }
        }
        "text" => UiEvent::InputTextChanged {
            control_id: INPUT_INGREDIENTS,
            text: rest.to_string(),
        },
        "submit" => UiEvent::ButtonClicked {
            control_id: BUTTON_SUBMIT,
        },
        "show" => UiEvent::RedrawRequested,
        "help" | "?" => UiEvent::HelpRequested,
        "quit" | "exit" => UiEvent::CloseRequested,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(event))
}
