//! Quiz sessions: picking the questions of an attempt and stepping through it.

mod builder;
mod shuffle;
mod state;

pub use builder::{SessionBuilder, reshuffle};
pub use shuffle::{RngShuffler, Shuffler, shuffle, shuffled};
pub use state::{Command, IgnoreReason, Outcome, Phase, ReviewEntry, Session, transition};
