/**
 * Builds the per-presentation variant of a question: option order shuffled,
 * options relabeled A, B, C, ... and the correct set and wrong-answer
 * explanations re-keyed to match.
 */
use std::collections::{BTreeMap, BTreeSet};

use rand::seq::SliceRandom;
use rand::Rng;

use super::quiz::Question;

/// Produce the display variant of `question`.
///
/// With `shuffle_answers` the option entries are taken in original-key order
/// (so equal seeds give equal permutations), permuted with `rng` and assigned
/// fresh labels from `letter_label`. The `correct` set and the `explain_wrong`
/// map are translated through the same permutation; keys that cannot be
/// translated are dropped rather than raising. Without `shuffle_answers` the
/// question is returned structurally unchanged.
///
/// In both cases a trailing "(multiple choice)"-style hint is stripped from
/// the prompt, since the presentation layer announces multi-answer questions
/// itself.
pub fn prepare_question<R: Rng>(question: &Question, rng: &mut R, shuffle_answers: bool) -> Question {
    let mut prepared = question.clone();
    prepared.prompt = strip_choice_hint(&question.prompt);

    if !shuffle_answers {
        return prepared;
    }

    // BTreeMap iteration is ordered by the original keys.
    let mut entries: Vec<(&String, &String)> = question.options.iter().collect();
    entries.shuffle(rng);

    let mut options = BTreeMap::new();
    let mut translation = BTreeMap::new();
    for (index, (old_key, text)) in entries.iter().enumerate() {
        let new_key = letter_label(index);
        options.insert(new_key.clone(), (*text).clone());
        translation.insert((*old_key).clone(), new_key);
    }

    prepared.options = options;
    prepared.correct = question
        .correct
        .iter()
        .filter_map(|key| translation.get(key).cloned())
        .collect::<BTreeSet<String>>();
    prepared.explain_wrong = question
        .explain_wrong
        .iter()
        .filter_map(|(key, text)| {
            translation.get(key).map(|new_key| (new_key.clone(), text.clone()))
        })
        .collect::<BTreeMap<String, String>>();

    prepared
}

/// Return the label for option `index`: A, B, ..., Z, AA, AB, ...
///
/// This is bijective base-26 numbering, so any number of options gets a
/// unique, predictable label.
pub fn letter_label(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push((b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Strip a trailing parenthesized multi-select hint from a prompt, e.g.
/// "Which apply? (Mehrfachauswahl moeglich)" or "... (multiple choice)".
fn strip_choice_hint(prompt: &str) -> String {
    let trimmed = prompt.trim_end();
    if trimmed.ends_with(')') {
        if let Some(open) = trimmed.rfind('(') {
            let inner = trimmed[open + 1..trimmed.len() - 1].trim().to_lowercase();
            if inner.starts_with("mehrfachauswahl") || inner.starts_with("multiple") {
                return trimmed[..open].trim_end().to_string();
            }
        }
    }
    prompt.to_string()
}
