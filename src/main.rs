use std::path::PathBuf;

use clap::Parser;
use lesson_quiz::{LessonSelection, Quiz, QuizConfig, QuizError};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the lessons from
    #[arg(short, long)]
    lessons: PathBuf,

    /// TOML file with session size limits
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start this lesson right away (-1 for the combined quiz)
    #[arg(long, allow_negative_numbers = true)]
    lesson: Option<i64>,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        log::error!("{}", e);
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), QuizError> {
    let config = match &args.config {
        Some(path) => QuizConfig::from_file(path)?,
        None => QuizConfig::default(),
    };

    let mut quiz = Quiz::from_json_with_config(&args.lessons, &config)?;
    if let Some(id) = args.lesson {
        quiz = quiz.start(LessonSelection::from(id));
    }

    quiz.run()
}
