use serde::Deserialize;

/// A multiple-choice question. The correct answer is stored as the text of
/// the matching option, so reordering `options` never changes which one is
/// right.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub difficulty: String,
}

impl Question {
    /// Whether picking `option` answers this question correctly.
    ///
    /// Compares option text, not position. Two options with identical text
    /// are both treated as correct if they match `correct_answer`.
    pub fn is_correct_option(&self, option: usize) -> bool {
        self.options
            .get(option)
            .is_some_and(|text| *text == self.correct_answer)
    }

    pub fn option_text(&self, option: usize) -> Option<&str> {
        self.options.get(option).map(String::as_str)
    }

    pub(crate) fn has_duplicate_options(&self) -> bool {
        self.options
            .iter()
            .enumerate()
            .any(|(i, option)| self.options[i + 1..].contains(option))
    }
}
