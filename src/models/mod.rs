mod lesson;
mod question;

pub use lesson::{COMBINED_LESSON_ID, Lesson, LessonSelection};
pub use question::Question;

/// Which screen the app is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Lesson selection.
    Home,
    /// A quiz session, in progress or finished.
    Quiz,
}
