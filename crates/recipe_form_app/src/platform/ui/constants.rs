/// Fixed identifier of a form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(&'static str);

impl ControlId {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

pub const DROPDOWN_COMPANY: ControlId = ControlId::new("dropdown");
pub const INPUT_INGREDIENTS: ControlId = ControlId::new("text-input");
pub const BUTTON_SUBMIT: ControlId = ControlId::new("submit-btn");
pub const LABEL_SELECTED_OPTION: ControlId = ControlId::new("selected-option");
pub const MESSAGE_BOX: ControlId = ControlId::new("message-box");
pub const INDICATOR_LOADING: ControlId = ControlId::new("loading");
