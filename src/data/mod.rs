mod catalog;
mod loader;

pub use catalog::LessonCatalog;
pub use loader::{LoadError, load_lessons_from_json};
