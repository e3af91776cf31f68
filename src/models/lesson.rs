use std::fmt;

use serde::Deserialize;

use super::Question;

/// Reserved lesson id meaning "questions from every lesson".
pub const COMBINED_LESSON_ID: i64 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Lesson {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub topics: Vec<String>,
    pub questions: Vec<Question>,
}

/// Which questions a session is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonSelection {
    /// A single lesson, by id.
    Lesson(i64),
    /// Every lesson's questions pooled together.
    Combined,
}

impl LessonSelection {
    pub fn is_combined(&self) -> bool {
        matches!(self, Self::Combined)
    }
}

impl From<i64> for LessonSelection {
    fn from(id: i64) -> Self {
        if id == COMBINED_LESSON_ID {
            Self::Combined
        } else {
            Self::Lesson(id)
        }
    }
}

impl fmt::Display for LessonSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lesson(id) => write!(f, "lesson {}", id),
            Self::Combined => write!(f, "combined"),
        }
    }
}
