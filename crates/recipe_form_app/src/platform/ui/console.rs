use std::io::{self, Write};

use recipe_logging::recipe_debug;

use super::command::UiCommand;
use super::constants::*;

/// Line-oriented stand-in for the form's controls.
///
/// Commands update an in-memory copy of each control; `present` draws the
/// form when something changed since the previous draw.
pub struct ConsoleSurface<W: Write> {
    out: W,
    options: Vec<String>,
    selected_index: usize,
    selected_label: String,
    ingredients: String,
    submit_enabled: bool,
    loading_visible: bool,
    message_html: String,
    message_visible: bool,
    pending_alert: Option<String>,
    changed: bool,
}

impl<W: Write> ConsoleSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            options: Vec::new(),
            selected_index: 0,
            selected_label: String::new(),
            ingredients: String::new(),
            submit_enabled: false,
            loading_visible: false,
            message_html: String::new(),
            message_visible: false,
            pending_alert: None,
            changed: true,
        }
    }

    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = UiCommand>) {
        for command in commands {
            self.apply(command);
        }
    }

    pub fn apply(&mut self, command: UiCommand) {
        match command {
            UiCommand::PopulateDropdown { control_id, options } if control_id == DROPDOWN_COMPANY => {
                set(&mut self.options, options, &mut self.changed);
            }
            UiCommand::SetSelectedIndex { control_id, index } if control_id == DROPDOWN_COMPANY => {
                set(&mut self.selected_index, index, &mut self.changed);
            }
            UiCommand::SetLabelText { control_id, text } if control_id == LABEL_SELECTED_OPTION => {
                set(&mut self.selected_label, text, &mut self.changed);
            }
            UiCommand::SetInputText { control_id, text } if control_id == INPUT_INGREDIENTS => {
                set(&mut self.ingredients, text, &mut self.changed);
            }
            UiCommand::SetControlEnabled { control_id, enabled } if control_id == BUTTON_SUBMIT => {
                set(&mut self.submit_enabled, enabled, &mut self.changed);
            }
            UiCommand::SetVisible { control_id, visible } if control_id == INDICATOR_LOADING => {
                set(&mut self.loading_visible, visible, &mut self.changed);
            }
            UiCommand::SetVisible { control_id, visible } if control_id == MESSAGE_BOX => {
                set(&mut self.message_visible, visible, &mut self.changed);
            }
            UiCommand::SetInnerHtml { control_id, html } if control_id == MESSAGE_BOX => {
                set(&mut self.message_html, html, &mut self.changed);
            }
            UiCommand::ShowAlert { message } => {
                self.pending_alert = Some(message);
            }
            other => {
                recipe_debug!("Ignoring command for unknown control: {:?}", other);
            }
        }
    }

    /// Forces the next `present` to redraw the whole form.
    pub fn invalidate(&mut self) {
        self.changed = true;
    }

    /// Whether an alert is shown and waiting for acknowledgement.
    pub fn alert_pending(&self) -> bool {
        self.pending_alert.is_some()
    }

    pub fn acknowledge_alert(&mut self) {
        self.pending_alert = None;
    }

    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    pub fn present(&mut self) -> io::Result<()> {
        if let Some(alert) = &self.pending_alert {
            writeln!(self.out, "\n!! {alert}")?;
            writeln!(self.out, "(press Enter to continue)")?;
            return self.out.flush();
        }
        if !std::mem::take(&mut self.changed) {
            return Ok(());
        }

        writeln!(self.out, "\n== Recipe generator ==")?;
        writeln!(self.out, "Company: {}", self.selected_label)?;
        for (index, option) in self.options.iter().enumerate() {
            let marker = if index == self.selected_index { '*' } else { ' ' };
            writeln!(self.out, "  {marker} {index}) {option}")?;
        }
        let ingredients = if self.ingredients.is_empty() {
            "(empty)"
        } else {
            self.ingredients.as_str()
        };
        writeln!(self.out, "Ingredients: {ingredients}")?;
        let submit = if self.submit_enabled { "enabled" } else { "disabled" };
        writeln!(self.out, "[Submit: {submit}]")?;
        if self.loading_visible {
            writeln!(self.out, "Loading...")?;
        }
        if self.message_visible {
            writeln!(self.out, "----")?;
            writeln!(self.out, "{}", html2md::parse_html(&self.message_html).trim_end())?;
            writeln!(self.out, "----")?;
        }
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn set<T: PartialEq>(slot: &mut T, value: T, changed: &mut bool) {
    if *slot != value {
        *slot = value;
        *changed = true;
    }
}
