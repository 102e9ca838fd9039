use recipe_form_core::{render_message_html, FormViewModel};

use super::command::UiCommand;
use super::constants::*;

pub fn render(view: &FormViewModel) -> Vec<UiCommand> {
    vec![
        UiCommand::SetSelectedIndex {
            control_id: DROPDOWN_COMPANY,
            index: view.selected_index,
        },
        UiCommand::SetLabelText {
            control_id: LABEL_SELECTED_OPTION,
            text: view.selected_label.clone(),
        },
        UiCommand::SetInputText {
            control_id: INPUT_INGREDIENTS,
            text: view.ingredients.clone(),
        },
        UiCommand::SetControlEnabled {
            control_id: BUTTON_SUBMIT,
            enabled: view.submit_enabled,
        },
        UiCommand::SetVisible {
            control_id: INDICATOR_LOADING,
            visible: view.loading_visible,
        },
        UiCommand::SetInnerHtml {
            control_id: MESSAGE_BOX,
            html: render_message_html(&view.message),
        },
        UiCommand::SetVisible {
            control_id: MESSAGE_BOX,
            visible: view.message.is_visible(),
        },
    ]
}
