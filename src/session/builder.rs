use crate::config::QuizConfig;
use crate::data::LessonCatalog;
use crate::models::{LessonSelection, Question};

use super::shuffle::{Shuffler, shuffle};

/// Picks and shuffles the questions of one quiz session.
#[derive(Debug, Clone, Copy)]
pub struct SessionBuilder {
    combined_limit: usize,
    lesson_limit: usize,
}

impl SessionBuilder {
    pub fn new(config: &QuizConfig) -> Self {
        Self {
            combined_limit: config.combined_limit,
            lesson_limit: config.lesson_limit,
        }
    }

    pub fn limit_for(&self, selection: LessonSelection) -> usize {
        if selection.is_combined() {
            self.combined_limit
        } else {
            self.lesson_limit
        }
    }

    /// Shuffle the pool for `selection`, keep up to the configured limit,
    /// then shuffle each kept question's options. The catalog is untouched.
    pub fn build(
        &self,
        catalog: &LessonCatalog,
        selection: LessonSelection,
        shuffler: &mut dyn Shuffler,
    ) -> Vec<Question> {
        let mut pool = catalog.question_pool(selection);
        shuffle(&mut pool, shuffler);
        pool.truncate(self.limit_for(selection));

        let questions: Vec<Question> = pool
            .into_iter()
            .map(|question| with_shuffled_options(question.clone(), shuffler))
            .collect();

        log::debug!(
            "Built {} session with {} questions",
            selection,
            questions.len()
        );
        questions
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new(&QuizConfig::default())
    }
}

/// Reorder an existing session's questions and each question's options.
/// The set of questions stays the same.
pub fn reshuffle(questions: &[Question], shuffler: &mut dyn Shuffler) -> Vec<Question> {
    let mut questions: Vec<Question> = questions
        .iter()
        .cloned()
        .map(|question| with_shuffled_options(question, shuffler))
        .collect();
    shuffle(&mut questions, shuffler);
    questions
}

fn with_shuffled_options(mut question: Question, shuffler: &mut dyn Shuffler) -> Question {
    shuffle(&mut question.options, shuffler);
    question
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::models::Lesson;
    use crate::session::RngShuffler;
    use crate::testing::{ScriptedShuffler, lesson, question};

    fn catalog(lessons: Vec<Lesson>) -> LessonCatalog {
        LessonCatalog::new(lessons).unwrap()
    }

    fn assert_valid_session(built: &[Question], source: &[&Question]) {
        let texts: HashSet<&str> = built.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts.len(), built.len(), "duplicate questions");

        for question in built {
            let original = source
                .iter()
                .find(|q| q.text == question.text)
                .expect("question not drawn from the pool");

            let mut built_options = question.options.clone();
            let mut original_options = original.options.clone();
            built_options.sort();
            original_options.sort();
            assert_eq!(built_options, original_options);

            let correct = question
                .options
                .iter()
                .filter(|o| **o == question.correct_answer)
                .count();
            assert_eq!(correct, 1);
        }
    }

    #[test]
    fn test_single_lesson_is_capped_at_ten() {
        let catalog = catalog(vec![lesson(0, 14), lesson(1, 4)]);
        let builder = SessionBuilder::default();
        let mut shuffler = RngShuffler::new(StdRng::seed_from_u64(1));

        let built = builder.build(&catalog, LessonSelection::Lesson(0), &mut shuffler);
        assert_eq!(built.len(), 10);
        assert_valid_session(&built, &catalog.question_pool(LessonSelection::Lesson(0)));

        let built = builder.build(&catalog, LessonSelection::Lesson(1), &mut shuffler);
        assert_eq!(built.len(), 4);
        assert_valid_session(&built, &catalog.question_pool(LessonSelection::Lesson(1)));
    }

    #[test]
    fn test_combined_is_capped_at_fifteen() {
        let catalog = catalog(vec![lesson(0, 8), lesson(1, 8), lesson(2, 8)]);
        let builder = SessionBuilder::default();
        let mut shuffler = RngShuffler::new(StdRng::seed_from_u64(2));

        let built = builder.build(&catalog, LessonSelection::Combined, &mut shuffler);
        assert_eq!(built.len(), 15);
        assert_valid_session(&built, &catalog.question_pool(LessonSelection::Combined));

        let small = self::catalog(vec![lesson(0, 3), lesson(1, 2)]);
        let built = builder.build(&small, LessonSelection::Combined, &mut shuffler);
        assert_eq!(built.len(), 5);
        assert_valid_session(&built, &small.question_pool(LessonSelection::Combined));
    }

    #[test]
    fn test_configured_limits() {
        let catalog = catalog(vec![lesson(0, 6), lesson(1, 6)]);
        let builder = SessionBuilder::new(&QuizConfig {
            combined_limit: 4,
            lesson_limit: 2,
        });
        let mut shuffler = ScriptedShuffler::identity();

        assert_eq!(
            builder.build(&catalog, LessonSelection::Combined, &mut shuffler).len(),
            4
        );
        assert_eq!(
            builder.build(&catalog, LessonSelection::Lesson(1), &mut shuffler).len(),
            2
        );
    }

    #[test]
    fn test_unknown_or_empty_lesson_gives_empty_session() {
        let catalog = catalog(vec![lesson(0, 0)]);
        let builder = SessionBuilder::default();
        let mut shuffler = ScriptedShuffler::identity();

        assert!(builder
            .build(&catalog, LessonSelection::Lesson(0), &mut shuffler)
            .is_empty());
        assert!(builder
            .build(&catalog, LessonSelection::Lesson(3), &mut shuffler)
            .is_empty());
        assert!(builder
            .build(&catalog, LessonSelection::Combined, &mut shuffler)
            .is_empty());
    }

    #[test]
    fn test_exact_permutation_with_scripted_picks() {
        let catalog = catalog(vec![Lesson {
            id: 0,
            title: "Fixed".to_string(),
            description: String::new(),
            topics: Vec::new(),
            questions: vec![
                question("q0", &["a", "b"], "a"),
                question("q1", &["c", "d"], "c"),
                question("q2", &["e", "f"], "e"),
            ],
        }]);
        let builder = SessionBuilder::default();
        // question order: i=2 -> 0, i=1 -> 1; then options of each question: swap, keep, swap
        let mut shuffler = ScriptedShuffler::new(&[0, 1, 0, 1, 0]);

        let built = builder.build(&catalog, LessonSelection::Lesson(0), &mut shuffler);
        let order: Vec<&str> = built.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(order, vec!["q2", "q1", "q0"]);
        assert_eq!(built[0].options, vec!["f", "e"]);
        assert_eq!(built[1].options, vec!["c", "d"]);
        assert_eq!(built[2].options, vec!["b", "a"]);
        assert_eq!(shuffler.calls, vec![2, 1, 1, 1, 1]);

        // source data untouched
        assert_eq!(catalog.lessons()[0].questions[0].options, vec!["a", "b"]);
    }

    #[test]
    fn test_reshuffle_keeps_the_same_questions() {
        let catalog = catalog(vec![lesson(0, 6)]);
        let builder = SessionBuilder::default();
        let mut shuffler = RngShuffler::new(StdRng::seed_from_u64(3));
        let built = builder.build(&catalog, LessonSelection::Lesson(0), &mut shuffler);

        let again = reshuffle(&built, &mut shuffler);
        assert_eq!(again.len(), built.len());
        let refs: Vec<&Question> = built.iter().collect();
        assert_valid_session(&again, &refs);
    }

    #[test]
    fn test_reshuffle_shuffles_options_before_order() {
        let questions = vec![
            question("q0", &["a", "b"], "a"),
            question("q1", &["c", "d"], "c"),
        ];
        // options: q0 swap, q1 keep; order: i=1 -> 0
        let mut shuffler = ScriptedShuffler::new(&[0, 1, 0]);
        let again = reshuffle(&questions, &mut shuffler);

        assert_eq!(again[0].text, "q1");
        assert_eq!(again[0].options, vec!["c", "d"]);
        assert_eq!(again[1].text, "q0");
        assert_eq!(again[1].options, vec!["b", "a"]);
    }
}
