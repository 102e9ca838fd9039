use recipe_form_core::{FormViewModel, PLACEHOLDER_LABEL};

use super::command::UiCommand;
use super::constants::*;

/// Commands that build the form once at startup. Option 0 is the placeholder.
pub fn initial_commands(view: &FormViewModel) -> Vec<UiCommand> {
    let options = std::iter::once(PLACEHOLDER_LABEL.to_string())
        .chain(view.companies.iter().cloned())
        .collect();

    vec![UiCommand::PopulateDropdown {
        control_id: DROPDOWN_COMPANY,
        options,
    }]
}
