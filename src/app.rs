use crate::config::QuizConfig;
use crate::data::LessonCatalog;
use crate::models::{AppState, LessonSelection, Question};
use crate::session::{
    Command, Outcome, RngShuffler, Session, SessionBuilder, Shuffler, transition,
};

pub struct App {
    pub state: AppState,
    catalog: LessonCatalog,
    builder: SessionBuilder,
    shuffler: Box<dyn Shuffler>,
    home_cursor: usize,
    selection: Option<LessonSelection>,
    session: Session,
    option_cursor: usize,
    result_scroll: usize,
}

impl App {
    pub fn new(catalog: LessonCatalog, config: &QuizConfig) -> Self {
        Self::with_shuffler(catalog, config, Box::new(RngShuffler::thread()))
    }

    pub fn with_shuffler(
        catalog: LessonCatalog,
        config: &QuizConfig,
        shuffler: Box<dyn Shuffler>,
    ) -> Self {
        Self {
            state: AppState::Home,
            catalog,
            builder: SessionBuilder::new(config),
            shuffler,
            home_cursor: 0,
            selection: None,
            session: Session::default(),
            option_cursor: 0,
            result_scroll: 0,
        }
    }

    pub fn catalog(&self) -> &LessonCatalog {
        &self.catalog
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn selection(&self) -> Option<LessonSelection> {
        self.selection
    }

    /// Title of the running quiz, or an empty string on the home screen.
    pub fn quiz_title(&self) -> &str {
        self.selection
            .map(|selection| self.catalog.title(selection))
            .unwrap_or_default()
    }

    /// Home screen entries: each lesson in catalog order, then combined.
    pub fn home_entries(&self) -> Vec<LessonSelection> {
        self.catalog
            .lessons()
            .iter()
            .map(|lesson| LessonSelection::Lesson(lesson.id))
            .chain(std::iter::once(LessonSelection::Combined))
            .collect()
    }

    pub fn home_cursor(&self) -> usize {
        self.home_cursor
    }

    pub fn home_next(&mut self) {
        let count = self.catalog.lessons().len() + 1;
        self.home_cursor = (self.home_cursor + 1) % count;
    }

    pub fn home_previous(&mut self) {
        let count = self.catalog.lessons().len() + 1;
        self.home_cursor = (self.home_cursor + count - 1) % count;
    }

    pub fn start_selected(&mut self) {
        if let Some(selection) = self.home_entries().get(self.home_cursor).copied() {
            self.start_quiz(selection);
        }
    }

    /// Build a fresh session for `selection` and switch to the quiz screen.
    pub fn start_quiz(&mut self, selection: LessonSelection) {
        let questions = self
            .builder
            .build(&self.catalog, selection, self.shuffler.as_mut());
        log::info!("Starting {} quiz with {} questions", selection, questions.len());

        self.session = Session::new(questions);
        self.selection = Some(selection);
        self.option_cursor = 0;
        self.result_scroll = 0;
        self.state = AppState::Quiz;
    }

    /// Drop the session and return to lesson selection.
    pub fn back_to_home(&mut self) {
        self.session = Session::default();
        self.selection = None;
        self.option_cursor = 0;
        self.result_scroll = 0;
        self.state = AppState::Home;
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session.current_question()
    }

    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    fn option_count(&self) -> usize {
        self.current_question()
            .map(|question| question.options.len())
            .unwrap_or(0)
    }

    pub fn cursor_next(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.option_cursor = (self.option_cursor + 1) % count;
        }
    }

    pub fn cursor_previous(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.option_cursor = (self.option_cursor + count - 1) % count;
        }
    }

    pub fn choose_highlighted(&mut self) -> Outcome {
        self.choose_option(self.option_cursor)
    }

    pub fn choose_option(&mut self, option: usize) -> Outcome {
        let outcome = self.apply(Command::SelectAnswer(option));
        if outcome.is_applied() {
            self.option_cursor = option;
        }
        outcome
    }

    pub fn advance(&mut self) -> Outcome {
        let previous_index = self.session.current_index();
        let outcome = self.apply(Command::Advance);
        if self.session.current_index() != previous_index {
            self.option_cursor = 0;
        }
        if self.session.is_completed() && outcome.is_applied() {
            log::info!(
                "Quiz finished: {}/{} ({}%)",
                self.session.score(),
                self.session.total_questions(),
                self.session.percentage()
            );
        }
        outcome
    }

    pub fn toggle_results(&mut self) -> Outcome {
        self.apply(Command::ToggleResults)
    }

    pub fn restart(&mut self) -> Outcome {
        let outcome = self.apply(Command::Restart);
        self.option_cursor = 0;
        self.result_scroll = 0;
        log::info!("Restarted quiz with {} questions", self.session.total_questions());
        outcome
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.session.total_questions().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    fn apply(&mut self, command: Command) -> Outcome {
        let (next, outcome) = transition(&self.session, command, self.shuffler.as_mut());
        self.session = next;
        outcome
    }
}
