use crate::Recipe;

/// Content of the message area.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MessageView {
    #[default]
    Hidden,
    Recipe(Recipe),
    BackendError(String),
    TransportFailure,
}

impl MessageView {
    pub fn is_visible(&self) -> bool {
        !matches!(self, MessageView::Hidden)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormViewModel {
    pub companies: Vec<String>,
    /// Dropdown index; 0 is the placeholder entry.
    pub selected_index: usize,
    pub selected_label: String,
    pub ingredients: String,
    pub submit_enabled: bool,
    pub loading_visible: bool,
    pub message: MessageView,
    pub dirty: bool,
}
