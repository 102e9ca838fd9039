use super::constants::ControlId;

/// Mutation the form view applies to its controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    PopulateDropdown {
        control_id: ControlId,
        options: Vec<String>,
    },
    SetSelectedIndex {
        control_id: ControlId,
        index: usize,
    },
    SetLabelText {
        control_id: ControlId,
        text: String,
    },
    SetInputText {
        control_id: ControlId,
        text: String,
    },
    SetControlEnabled {
        control_id: ControlId,
        enabled: bool,
    },
    SetVisible {
        control_id: ControlId,
        visible: bool,
    },
    SetInnerHtml {
        control_id: ControlId,
        html: String,
    },
    ShowAlert {
        message: String,
    },
}
