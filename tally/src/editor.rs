use std::borrow::Cow;

use reedline::{
    Prompt, PromptEditMode, PromptHistorySearch, Reedline, Signal, ValidationResult, Validator,
};
use tallyc::tokenize;

/// Line editor for the interactive mode. Input ending in an arithmetic
/// operator is continued on the next line instead of being submitted.
pub struct Editor {
    editor: Reedline,
    prompt: TallyPrompt,
}

impl Default for Editor {
    fn default() -> Self {
        let editor = Reedline::create().with_validator(Box::new(OperandPending));
        Self {
            editor,
            prompt: TallyPrompt,
        }
    }
}

pub enum EditorRead {
    Read(String),
    Break,
    Continue,
}

impl Editor {
    pub fn read(&mut self) -> std::io::Result<EditorRead> {
        match self.editor.read_line(&self.prompt)? {
            Signal::Success(input) if input.trim().is_empty() => Ok(EditorRead::Continue),
            Signal::Success(input) => Ok(EditorRead::Read(input)),
            Signal::CtrlC | Signal::CtrlD => Ok(EditorRead::Break),
        }
    }
}

/// Keeps the buffer open while the last token is `+`, `-`, `*` or `/`.
/// Input that fails to tokenize is submitted so the error gets reported.
struct OperandPending;

impl Validator for OperandPending {
    fn validate(&self, line: &str) -> ValidationResult {
        match tokenize(line) {
            Ok(tokens) if tokens.last().is_some_and(|tk| tk.kind.is_arithmetic()) => {
                ValidationResult::Incomplete
            }
            _ => ValidationResult::Complete,
        }
    }
}

struct TallyPrompt;

impl Prompt for TallyPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed("tally")
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("> ")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("    | ")
    }

    fn render_prompt_history_search_indicator(&self, search: PromptHistorySearch) -> Cow<'_, str> {
        Cow::Owned(format!("(history: {}) ", search.term))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn incomplete(line: &str) -> bool {
        matches!(OperandPending.validate(line), ValidationResult::Incomplete)
    }

    #[test]
    fn trailing_operator_continues_the_line() {
        assert!(incomplete("1 +"));
        assert!(incomplete("4 * 2 /\n3 -"));
        assert!(incomplete("2 +="));
    }

    #[test]
    fn finished_or_broken_input_is_submitted() {
        assert!(!incomplete("1 + 2"));
        assert!(!incomplete("1 +;"));
        assert!(!incomplete("1 %"));
        assert!(!incomplete(""));
        assert!(!incomplete("1 + `"));
    }
}
