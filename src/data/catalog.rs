use std::collections::HashSet;

use crate::models::{Lesson, LessonSelection, Question};

use super::LoadError;

/// The read-only set of lessons a quiz draws from.
#[derive(Debug, Clone)]
pub struct LessonCatalog {
    lessons: Vec<Lesson>,
}

impl LessonCatalog {
    /// Validate `lessons` and wrap them.
    ///
    /// Rejects an empty list, negative or repeated ids, questions with fewer
    /// than two options, and questions whose correct answer is not one of
    /// their options.
    pub fn new(lessons: Vec<Lesson>) -> Result<Self, LoadError> {
        if lessons.is_empty() {
            return Err(LoadError::NoLessons);
        }

        let mut seen = HashSet::new();
        for lesson in &lessons {
            if lesson.id < 0 {
                return Err(LoadError::InvalidLessonId(lesson.id));
            }
            if !seen.insert(lesson.id) {
                return Err(LoadError::DuplicateLessonId(lesson.id));
            }
            for (index, question) in lesson.questions.iter().enumerate() {
                validate_question(lesson.id, index, question)?;
            }
        }

        Ok(Self { lessons })
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn lesson(&self, id: i64) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id == id)
    }

    /// Every question of every lesson, in catalog order.
    pub fn all_questions(&self) -> impl Iterator<Item = &Question> {
        self.lessons.iter().flat_map(|lesson| lesson.questions.iter())
    }

    pub fn total_questions(&self) -> usize {
        self.lessons.iter().map(|lesson| lesson.questions.len()).sum()
    }

    /// The candidate questions for `selection`. An unknown lesson id gives
    /// an empty pool.
    pub fn question_pool(&self, selection: LessonSelection) -> Vec<&Question> {
        match selection {
            LessonSelection::Combined => self.all_questions().collect(),
            LessonSelection::Lesson(id) => self
                .lesson(id)
                .map(|lesson| lesson.questions.iter().collect())
                .unwrap_or_default(),
        }
    }

    /// Display title for a selection.
    pub fn title(&self, selection: LessonSelection) -> &str {
        match selection {
            LessonSelection::Combined => "Combined Quiz",
            LessonSelection::Lesson(id) => self
                .lesson(id)
                .map(|lesson| lesson.title.as_str())
                .unwrap_or("Unknown lesson"),
        }
    }
}

fn validate_question(lesson: i64, index: usize, question: &Question) -> Result<(), LoadError> {
    if question.options.len() < 2 {
        return Err(LoadError::TooFewOptions {
            lesson,
            question: index,
        });
    }

    if !question.options.contains(&question.correct_answer) {
        return Err(LoadError::MissingCorrectAnswer {
            lesson,
            question: index,
            answer: question.correct_answer.clone(),
        });
    }

    // Correctness is matched by text, so repeated options make grading ambiguous.
    if question.has_duplicate_options() {
        log::warn!(
            "lesson {}, question {}: duplicate option texts, grading may be ambiguous",
            lesson,
            index
        );
    }

    Ok(())
}
