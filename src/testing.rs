//! Shared fixtures for unit tests.

use std::collections::VecDeque;

use crate::models::{Lesson, Question};
use crate::session::Shuffler;

pub(crate) fn question(text: &str, options: &[&str], correct: &str) -> Question {
    Question {
        text: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer: correct.to_string(),
        explanation: None,
        difficulty: "Easy".to_string(),
    }
}

/// A lesson with `count` two-option questions named `L{id}Q{i}`.
pub(crate) fn lesson(id: i64, count: usize) -> Lesson {
    Lesson {
        id,
        title: format!("Lesson {}", id),
        description: String::new(),
        topics: Vec::new(),
        questions: (0..count)
            .map(|i| {
                let right = format!("L{}Q{} right", id, i);
                let wrong = format!("L{}Q{} wrong", id, i);
                question(&format!("L{}Q{}", id, i), &[&right, &wrong], &right)
            })
            .collect(),
    }
}

/// Replays fixed picks, then always picks the index itself (no swap).
#[derive(Debug, Default)]
pub(crate) struct ScriptedShuffler {
    picks: VecDeque<usize>,
    pub(crate) calls: Vec<usize>,
}

impl ScriptedShuffler {
    pub(crate) fn new(picks: &[usize]) -> Self {
        Self {
            picks: picks.iter().copied().collect(),
            calls: Vec::new(),
        }
    }

    pub(crate) fn identity() -> Self {
        Self::default()
    }
}

impl Shuffler for ScriptedShuffler {
    fn pick(&mut self, upper: usize) -> usize {
        self.calls.push(upper);
        let pick = self.picks.pop_front().unwrap_or(upper);
        assert!(pick <= upper, "scripted pick {} exceeds {}", pick, upper);
        pick
    }
}
