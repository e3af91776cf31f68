use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Lesson;

use super::LessonCatalog;

/// Error type for loading the lesson file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("lesson file contains no lessons")]
    NoLessons,
    #[error("lesson id {0} is reserved or negative")]
    InvalidLessonId(i64),
    #[error("lesson id {0} appears more than once")]
    DuplicateLessonId(i64),
    #[error("lesson {lesson}, question {question}: needs at least two options")]
    TooFewOptions { lesson: i64, question: usize },
    #[error("lesson {lesson}, question {question}: correct answer {answer:?} is not one of the options")]
    MissingCorrectAnswer {
        lesson: i64,
        question: usize,
        answer: String,
    },
}

/// Load and validate a lesson catalog from a JSON array of lessons.
pub fn load_lessons_from_json<P: AsRef<Path>>(path: P) -> Result<LessonCatalog, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let lessons: Vec<Lesson> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let catalog = LessonCatalog::new(lessons)?;
    log::info!(
        "Loaded {} lessons ({} questions) from {}",
        catalog.lessons().len(),
        catalog.total_questions(),
        path.display()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "lesson-quiz-{}-{}.json",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_valid_file() {
        let path = write_temp(
            "valid",
            r#"[
                {
                    "id": 0,
                    "title": "Basics",
                    "description": "Warm up",
                    "topics": ["numbers"],
                    "questions": [
                        {
                            "question": "1 + 1?",
                            "options": ["1", "2"],
                            "correctAnswer": "2",
                            "explanation": "Addition.",
                            "difficulty": "Easy"
                        }
                    ]
                }
            ]"#,
        );

        let catalog = load_lessons_from_json(&path).unwrap();
        assert_eq!(catalog.lessons().len(), 1);
        assert_eq!(catalog.total_questions(), 1);
        assert_eq!(
            catalog.lessons()[0].questions[0].explanation.as_deref(),
            Some("Addition.")
        );

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_bundled_lessons_load() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("lessons.json");
        let catalog = load_lessons_from_json(path).unwrap();
        assert_eq!(catalog.lessons().len(), 3);
        assert_eq!(catalog.total_questions(), 8);
    }

    #[test]
    fn test_missing_file() {
        let err = load_lessons_from_json("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let path = write_temp("malformed", "[{\"id\": 0,");
        let err = load_lessons_from_json(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains("failed to parse"));
        fs::remove_file(path).unwrap();
    }
}
