use reedline::{Prompt, PromptEditMode, PromptHistorySearch};
use std::borrow::Cow;

/// Prompt that renders a fixed text on the left and nothing else.
///
/// The loop uses one instance per question ("Enter your choice: ",
/// "Enter contact name: ", ...).
pub(crate) struct ReplPrompt(String);

impl ReplPrompt {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl Prompt for ReplPrompt {
    fn render_prompt_left(&self) -> Cow<str> {
        self.0.as_str().into()
    }

    fn render_prompt_right(&self) -> Cow<str> {
        "".into()
    }

    fn render_prompt_indicator(&self, _: PromptEditMode) -> Cow<str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        "... ".into()
    }

    fn render_prompt_history_search_indicator(&self, _: PromptHistorySearch) -> Cow<str> {
        "".into()
    }
}
