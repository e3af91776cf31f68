//! # lesson-quiz
//!
//! A terminal quiz over a set of lessons. Pick a lesson (or the combined
//! quiz across all of them), answer shuffled multiple-choice questions and
//! review the results.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lesson_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load lessons from a JSON file
//!     let quiz = Quiz::from_json("lessons.json")?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The session logic is usable without a terminal:
//!
//! ```rust
//! use lesson_quiz::session::{Command, Outcome, RngShuffler, Session, transition};
//! use lesson_quiz::Question;
//!
//! let question = Question {
//!     text: "1 + 1?".to_string(),
//!     options: vec!["2".to_string(), "3".to_string()],
//!     correct_answer: "2".to_string(),
//!     explanation: None,
//!     difficulty: "Easy".to_string(),
//! };
//! let mut shuffler = RngShuffler::thread();
//! let session = Session::new(vec![question]);
//!
//! let (session, _) = transition(&session, Command::SelectAnswer(0), &mut shuffler);
//! let (session, outcome) = transition(&session, Command::Advance, &mut shuffler);
//! assert_eq!(outcome, Outcome::Applied);
//! assert!(session.is_completed());
//! assert_eq!(session.score(), 1);
//! ```

mod app;
pub mod config;
mod data;
mod models;
pub mod session;
pub mod terminal;
#[cfg(test)]
mod testing;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::App;
pub use config::{ConfigError, QuizConfig};
pub use data::{LessonCatalog, LoadError, load_lessons_from_json};
pub use models::{AppState, COMBINED_LESSON_ID, Lesson, LessonSelection, Question};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading lessons from file.
    #[error("Failed to load lessons: {0}")]
    Load(#[from] LoadError),
    /// Error reading the config file.
    #[error("Failed to load config: {0}")]
    Config(#[from] ConfigError),
    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz over a lesson catalog.
    pub fn new(catalog: LessonCatalog, config: &QuizConfig) -> Self {
        Self {
            app: App::new(catalog, config),
        }
    }

    /// Load a quiz from a JSON lesson file with the default config.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use lesson_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("lessons.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        Self::from_json_with_config(path, &QuizConfig::default())
    }

    pub fn from_json_with_config<P: AsRef<Path>>(
        path: P,
        config: &QuizConfig,
    ) -> Result<Self, QuizError> {
        let catalog = load_lessons_from_json(path)?;
        Ok(Self::new(catalog, config))
    }

    /// Skip the home screen and open `selection` straight away.
    pub fn start(mut self, selection: LessonSelection) -> Self {
        self.app.start_quiz(selection);
        self
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return true;
    }

    match app.state {
        AppState::Home => handle_home_input(app, key),
        AppState::Quiz if app.session().results_visible() => handle_result_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
    }
    false
}

fn handle_home_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.home_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.home_next(),
        KeyCode::Enter => app.start_selected(),
        _ => {}
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.cursor_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_next(),
        KeyCode::Char(' ') => {
            app.choose_highlighted();
        }
        KeyCode::Enter => {
            app.advance();
        }
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.toggle_results();
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
        }
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => app.back_to_home(),
        _ => {}
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.toggle_results();
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
        }
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => app.back_to_home(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Phase;
    use crate::testing::{ScriptedShuffler, lesson};

    fn app() -> App {
        let catalog = LessonCatalog::new(vec![lesson(0, 2)]).unwrap();
        App::with_shuffler(
            catalog,
            &QuizConfig::default(),
            Box::new(ScriptedShuffler::identity()),
        )
    }

    #[test]
    fn test_quit_from_any_screen() {
        let mut app = app();
        assert!(handle_input(&mut app, KeyCode::Char('q')));
        app.start_quiz(LessonSelection::Lesson(0));
        assert!(handle_input(&mut app, KeyCode::Char('Q')));
    }

    #[test]
    fn test_keyboard_walkthrough() {
        let mut app = app();
        assert!(!handle_input(&mut app, KeyCode::Enter));
        assert_eq!(app.state, AppState::Quiz);

        // enter without a choice does nothing
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.session().current_index(), 0);

        for _ in 0..2 {
            handle_input(&mut app, KeyCode::Char(' '));
            handle_input(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.session().phase(), Phase::Completed);
        assert_eq!(app.session().score(), 2);

        handle_input(&mut app, KeyCode::Char('t'));
        assert!(!app.session().results_visible());
        handle_input(&mut app, KeyCode::Char('t'));
        assert!(app.session().results_visible());

        handle_input(&mut app, KeyCode::Char('r'));
        assert_eq!(app.session().phase(), Phase::Answering);
        assert_eq!(app.session().score(), 0);

        handle_input(&mut app, KeyCode::Esc);
        assert_eq!(app.state, AppState::Home);
    }
}
