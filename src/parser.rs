/**
 * Turns free-form user input into either a quiz command or a set of selected
 * answer keys.
 *
 * Users type answers in many shapes ("b d", "BD", "b,d", "b/d"); all of them
 * normalize to the same canonical set of uppercase letters. The literal
 * commands "quit" and "skip" (or "weiter") are recognized on the whole
 * trimmed input before any letter extraction happens.
 */
use std::collections::BTreeSet;

#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    Skip,
    Answer(BTreeSet<String>),
}

/// Interpret one line of raw user input.
pub fn interpret(raw: &str) -> Input {
    let trimmed = raw.trim().to_lowercase();
    match trimmed.as_str() {
        "quit" => Input::Quit,
        "skip" | "weiter" => Input::Skip,
        _ => Input::Answer(normalize_answer(raw)),
    }
}

/// Normalize a free-form answer into a set of uppercase single-letter keys.
///
/// The delimiters `,`, `;`, `|` and `/` are treated like spaces. Every
/// alphabetic character of every remaining token counts as one selected key,
/// so "bd" and "b d" are equivalent. Non-alphabetic characters are discarded
/// silently; input without any letters yields an empty set, which the driver
/// treats as "no answer given".
pub fn normalize_answer(raw: &str) -> BTreeSet<String> {
    let mut cleaned = raw.trim().to_lowercase();
    for sep in &[',', ';', '|', '/'] {
        cleaned = cleaned.replace(*sep, " ");
    }

    let mut letters = BTreeSet::new();
    for token in cleaned.split_whitespace() {
        for ch in token.chars() {
            if ch.is_alphabetic() {
                letters.insert(ch.to_uppercase().collect::<String>());
            }
        }
    }
    letters
}
