/**
 * Definitions shared by several modules: the `QuizError` type and the structs
 * that hold command-line arguments.
 */
use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use structopt::StructOpt;

pub type Result<T> = ::std::result::Result<T, QuizError>;

#[derive(Debug)]
pub enum QuizError {
    /// For when the user requests a topic with no questions in it.
    TopicNotFound(String),
    /// For JSON errors while reading a question bank.
    Json(serde_json::Error),
    /// For a question bank that fails load-time validation.
    BadQuestion { index: usize, reason: String },
    Io(io::Error),
    ReadlineInterrupted,
    EmptyBank,
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            QuizError::TopicNotFound(ref name) => {
                write!(f, "no questions found for topic '{}'", name)
            }
            QuizError::Json(ref err) => write!(f, "could not parse JSON ({})", err),
            QuizError::BadQuestion { index, ref reason } => {
                write!(f, "invalid question #{} ({})", index + 1, reason)
            }
            QuizError::Io(ref err) => write!(f, "IO error ({})", err),
            QuizError::ReadlineInterrupted => Ok(()),
            QuizError::EmptyBank => write!(f, "no questions found"),
        }
    }
}

impl error::Error for QuizError {
    fn cause(&self) -> Option<&dyn error::Error> {
        match *self {
            QuizError::Json(ref err) => Some(err),
            QuizError::Io(ref err) => Some(err),
            _ => None,
        }
    }
}

pub fn is_broken_pipe(e: &QuizError) -> bool {
    if let QuizError::Io(e) = e {
        if let io::ErrorKind::BrokenPipe = e.kind() {
            return true;
        }
    }
    false
}

/// Holds the command-line configuration for the application.
#[derive(StructOpt)]
#[structopt(name = "mcdrill", about = "Drill multiple-choice questions from the command line.")]
pub struct Options {
    /// Load question banks from a particular directory.
    #[structopt(short = "d", long = "directory")]
    pub directory: Option<PathBuf>,
    /// Do not emit colorized output.
    #[structopt(long = "no-color")]
    pub no_color: bool,
    #[structopt(subcommand)]
    pub cmd: Command,
}

#[derive(StructOpt)]
pub enum Command {
    /// Take a quiz.
    #[structopt(name = "take")]
    Take(TakeOptions),
    /// Count questions or list topics.
    #[structopt(name = "count")]
    Count(CountOptions),
}

#[derive(StructOpt)]
pub struct TakeOptions {
    /// Topic to drill; matches any topic label containing this string.
    #[structopt(default_value = "all")]
    pub topic: String,
    /// Limit the total number of questions.
    #[structopt(short = "n")]
    pub num_to_ask: Option<usize>,
    /// Ask the questions in the order they appear in the bank.
    #[structopt(long = "in-order")]
    pub in_order: bool,
    /// Keep asking indefinitely, allowing questions to repeat (practice mode).
    #[structopt(long = "repeat")]
    pub repeat: bool,
    /// How many other questions must intervene before one may repeat.
    #[structopt(long = "cooldown", default_value = "3")]
    pub cooldown: usize,
    /// Present the answer options with their original labels, unshuffled.
    #[structopt(long = "keep-options")]
    pub keep_options: bool,
    /// Seed the random number generator for a reproducible run.
    #[structopt(long = "seed")]
    pub seed: Option<u64>,
}

#[derive(StructOpt)]
pub struct CountOptions {
    /// Topic to count; matches any topic label containing this string.
    #[structopt(default_value = "all")]
    pub topic: String,
    /// List topics with their question counts instead of counting questions.
    #[structopt(long = "list-topics")]
    pub list_topics: bool,
}

impl TakeOptions {
    #[allow(dead_code)]
    pub fn new() -> Self {
        TakeOptions {
            topic: String::from("all"),
            num_to_ask: None,
            in_order: false,
            repeat: false,
            cooldown: 3,
            keep_options: false,
            seed: None,
        }
    }
}
