/**
 * Loads question banks and validates them before the engine ever sees them.
 *
 * Banks come from three places, in order of preference: a directory given on
 * the command line, the per-user data directory, and the built-in topics.
 * A bank directory holds `*.json` files, each containing an array of
 * questions.
 */
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::common::{QuizError, Result};
use super::quiz::Question;
use super::topics;

/// Load the question pool for `topic`, which matches any topic label that
/// contains it (case-insensitively); "all" selects every question.
pub fn load(directory: &Option<PathBuf>, topic: &str) -> Result<Vec<Question>> {
    let questions = match directory {
        Some(dir) => load_directory(dir)?,
        None => match default_directory() {
            Some(ref dir) if dir.is_dir() => load_directory(dir)?,
            _ => topics::built_in(),
        },
    };

    validate(&questions)?;

    let filtered = filter_by_topic(questions, topic);
    if filtered.is_empty() {
        if topic.eq_ignore_ascii_case("all") {
            return Err(QuizError::EmptyBank);
        }
        return Err(QuizError::TopicNotFound(String::from(topic)));
    }
    Ok(filtered)
}

/// Count the questions per topic label.
pub fn topic_counts(questions: &[Question]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for question in questions.iter() {
        let label = if question.topic.is_empty() {
            String::from("(no topic)")
        } else {
            question.topic.clone()
        };
        *counts.entry(label).or_insert(0) += 1;
    }
    counts
}

/// Reject malformed questions up front so the engine can assume the data
/// invariants hold: at least one option, a non-empty correct set drawn from
/// the options, and wrong-answer explanations only for incorrect options.
pub fn validate(questions: &[Question]) -> Result<()> {
    for (index, question) in questions.iter().enumerate() {
        let bad = |reason: &str| QuizError::BadQuestion {
            index,
            reason: String::from(reason),
        };

        if question.options.is_empty() {
            return Err(bad("no answer options"));
        }
        if question.correct.is_empty() {
            return Err(bad("no correct answer"));
        }
        for key in question.correct.iter() {
            if !question.options.contains_key(key) {
                return Err(bad(&format!("correct key '{}' is not an option", key)));
            }
        }
        for key in question.explain_wrong.keys() {
            if !question.options.contains_key(key) {
                return Err(bad(&format!("explained key '{}' is not an option", key)));
            }
            if question.correct.contains(key) {
                return Err(bad(&format!("explained key '{}' is a correct answer", key)));
            }
        }
    }
    Ok(())
}

fn filter_by_topic(questions: Vec<Question>, topic: &str) -> Vec<Question> {
    if topic.eq_ignore_ascii_case("all") {
        return questions;
    }
    let needle = topic.to_lowercase();
    questions
        .into_iter()
        .filter(|q| q.topic.to_lowercase().contains(&needle))
        .collect()
}

fn load_directory(directory: &Path) -> Result<Vec<Question>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(directory).map_err(QuizError::Io)? {
        let path = entry.map_err(QuizError::Io)?.path();
        if path.extension().map_or(false, |ext| ext == "json") {
            paths.push(path);
        }
    }
    // Directory order is arbitrary; keep bank order stable across runs.
    paths.sort();

    let mut questions = Vec::new();
    for path in paths.iter() {
        let data = fs::read_to_string(path).map_err(QuizError::Io)?;
        let bank: Vec<Question> = serde_json::from_str(&data).map_err(QuizError::Json)?;
        questions.extend(bank);
    }
    Ok(questions)
}

fn default_directory() -> Option<PathBuf> {
    dirs::data_dir().map(|mut dir| {
        dir.push("mcdrill");
        dir.push("banks");
        dir
    })
}
