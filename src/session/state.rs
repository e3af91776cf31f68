use std::fmt;

use crate::models::Question;

use super::builder::reshuffle;
use super::shuffle::Shuffler;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No questions to show.
    Loading,
    /// Waiting for, or holding, an answer to the current question.
    Answering,
    /// Every question has been answered.
    Completed,
}

/// User actions a session reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Choose an option of the current question, by index.
    SelectAnswer(usize),
    /// Record the selection and move on, or finish on the last question.
    Advance,
    /// Switch between the summary and the last question once finished.
    ToggleResults,
    /// Reshuffle the same questions and start over.
    Restart,
}

/// Why a command left the session unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NoQuestions,
    NoSelection,
    AlreadyCompleted,
    NotCompleted,
    OptionOutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(IgnoreReason),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied => write!(f, "applied"),
            Self::Ignored(IgnoreReason::NoQuestions) => write!(f, "ignored: no questions"),
            Self::Ignored(IgnoreReason::NoSelection) => write!(f, "ignored: no selection"),
            Self::Ignored(IgnoreReason::AlreadyCompleted) => write!(f, "ignored: already completed"),
            Self::Ignored(IgnoreReason::NotCompleted) => write!(f, "ignored: not completed"),
            Self::Ignored(IgnoreReason::OptionOutOfRange) => write!(f, "ignored: option out of range"),
        }
    }
}

/// One summary row for an answered (or skipped) question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry<'a> {
    pub number: usize,
    pub question: &'a Question,
    pub chosen: Option<&'a str>,
    pub is_correct: bool,
}

/// Snapshot of one quiz attempt.
///
/// Sessions are never mutated in place: [`transition`] returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    questions: Vec<Question>,
    current_index: usize,
    selected_answer: Option<usize>,
    answers: Vec<Option<usize>>,
    score: usize,
    results_visible: bool,
    completed: bool,
}

impl Session {
    pub fn new(questions: Vec<Question>) -> Self {
        let num_questions = questions.len();

        Self {
            questions,
            current_index: 0,
            selected_answer: None,
            answers: vec![None; num_questions],
            score: 0,
            results_visible: false,
            completed: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.questions.is_empty() {
            Phase::Loading
        } else if self.completed {
            Phase::Completed
        } else {
            Phase::Answering
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn selected_answer(&self) -> Option<usize> {
        self.selected_answer
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    /// True when the current question is the last one.
    pub fn on_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    /// Fraction of the session done, counting the last question once finished.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        let done = self.current_index + usize::from(self.completed);
        done as f64 / self.questions.len() as f64
    }

    /// Score as a rounded percentage of the question count.
    pub fn percentage(&self) -> u32 {
        if self.questions.is_empty() {
            return 0;
        }
        (self.score as f64 / self.questions.len() as f64 * 100.0).round() as u32
    }

    /// [`Session::progress`] as a rounded whole percentage.
    pub fn progress_percentage(&self) -> u32 {
        (self.progress() * 100.0).round() as u32
    }

    pub fn is_answer_correct(&self, index: usize) -> bool {
        match (self.questions.get(index), self.answers.get(index)) {
            (Some(question), Some(Some(answer))) => question.is_correct_option(*answer),
            _ => false,
        }
    }

    pub fn review(&self) -> Vec<ReviewEntry<'_>> {
        self.questions
            .iter()
            .zip(self.answers.iter())
            .enumerate()
            .map(|(index, (question, answer))| ReviewEntry {
                number: index + 1,
                question,
                chosen: answer.and_then(|option| question.option_text(option)),
                is_correct: self.is_answer_correct(index),
            })
            .collect()
    }

    fn select_answer(&self, option: usize) -> Result<Self, IgnoreReason> {
        let question = self.current_question().ok_or(IgnoreReason::NoQuestions)?;
        if self.completed {
            return Err(IgnoreReason::AlreadyCompleted);
        }
        if option >= question.options.len() {
            log::warn!(
                "option {} out of range for question {} ({} options)",
                option,
                self.current_question_number(),
                question.options.len()
            );
            return Err(IgnoreReason::OptionOutOfRange);
        }

        Ok(Self {
            selected_answer: Some(option),
            ..self.clone()
        })
    }

    fn advance(&self) -> Result<Self, IgnoreReason> {
        let question = self.current_question().ok_or(IgnoreReason::NoQuestions)?;
        if self.completed {
            return Err(IgnoreReason::AlreadyCompleted);
        }
        let selected = self.selected_answer.ok_or(IgnoreReason::NoSelection)?;

        let mut next = self.clone();
        next.answers[self.current_index] = Some(selected);
        if question.is_correct_option(selected) {
            next.score += 1;
        }

        if self.on_last_question() {
            next.completed = true;
            next.results_visible = true;
        } else {
            next.current_index += 1;
            next.selected_answer = None;
        }
        Ok(next)
    }

    fn toggle_results(&self) -> Result<Self, IgnoreReason> {
        if !self.completed {
            return Err(IgnoreReason::NotCompleted);
        }
        Ok(Self {
            results_visible: !self.results_visible,
            ..self.clone()
        })
    }

    fn restart(&self, shuffler: &mut dyn Shuffler) -> Self {
        Self::new(reshuffle(&self.questions, shuffler))
    }
}

/// Apply `command` to `session`, returning the next snapshot and whether the
/// command took effect. An ignored command returns a copy of `session`.
pub fn transition(
    session: &Session,
    command: Command,
    shuffler: &mut dyn Shuffler,
) -> (Session, Outcome) {
    let result = match command {
        Command::SelectAnswer(option) => session.select_answer(option),
        Command::Advance => session.advance(),
        Command::ToggleResults => session.toggle_results(),
        Command::Restart => Ok(session.restart(shuffler)),
    };

    let (next, outcome) = match result {
        Ok(next) => (next, Outcome::Applied),
        Err(reason) => (session.clone(), Outcome::Ignored(reason)),
    };
    log::debug!("{:?}: {}", command, outcome);
    (next, outcome)
}
