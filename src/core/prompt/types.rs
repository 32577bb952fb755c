/// Free text input, re-asked until `validate` accepts it.
pub struct TextPrompt {
    pub question: String,
    pub placeholder: Option<String>,
    /// Returns the message to show for rejected input, `None` when valid.
    pub validate: fn(&str) -> Option<String>,
}

/// Select one option from a list.
pub struct SelectPrompt {
    pub question: String,
    pub options: Vec<SelectOption>,
}

pub struct SelectOption {
    pub label: String,
    pub description: Option<String>,
}

/// Review a list of items and confirm.
pub struct ConfirmListPrompt {
    pub header: String,
    pub items: Vec<String>,
    pub confirm_question: String,
    /// true = default yes [Y/n], false = default no [y/N]
    pub default: bool,
}
