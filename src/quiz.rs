/**
 * The question model, the answer evaluator and the quiz engine that drives a
 * full run.
 */
use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::common::{QuizError, Result, TakeOptions};
use super::display;
use super::parser::{self, Input};
use super::repetition::Scheduler;
use super::ui::Ui;

/// A single multiple-choice question.
///
/// `options` maps short keys ("A", "B", ...) to the option texts. `correct`
/// holds the keys of the correct options; answers are graded by exact set
/// equality, so multi-answer questions require every correct key and nothing
/// else. `explain_wrong` may be sparse; options without an entry fall back to
/// a placeholder in the evaluation report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: BTreeMap<String, String>,
    pub correct: BTreeSet<String>,
    pub explain_correct: String,
    #[serde(default)]
    pub explain_wrong: BTreeMap<String, String>,
    #[serde(default)]
    pub topic: String,
}

impl Question {
    /// Return a new question with no options. Mostly useful in tests and as
    /// a starting point for builders.
    #[allow(dead_code)]
    pub fn new(prompt: &str) -> Self {
        Question {
            prompt: String::from(prompt),
            options: BTreeMap::new(),
            correct: BTreeSet::new(),
            explain_correct: String::new(),
            explain_wrong: BTreeMap::new(),
            topic: String::new(),
        }
    }
}

/// The outcome of grading one submitted answer.
///
/// A non-empty `invalid` set means the user named options the question does
/// not have; the answer was not graded and must not be counted.
#[derive(Debug)]
pub struct Evaluation {
    pub is_correct: bool,
    pub invalid: BTreeSet<String>,
    pub report: String,
}

const RULE_WIDTH: usize = 70;
const NO_EXPLANATION: &str = "No explanation available.";

/// Render a set of answer keys for display, e.g. "B D".
pub fn format_set(set: &BTreeSet<String>) -> String {
    if set.is_empty() {
        String::from("(none)")
    } else {
        set.iter().cloned().collect::<Vec<String>>().join(" ")
    }
}

/// Grade `user_set` against `question` and build the explanation report.
///
/// Pure function: the counters live in the engine, and the caller decides
/// what to do with an invalid selection.
pub fn evaluate(question: &Question, user_set: &BTreeSet<String>) -> Evaluation {
    let valid: BTreeSet<String> = question.options.keys().cloned().collect();

    let invalid: BTreeSet<String> = user_set.difference(&valid).cloned().collect();
    if !invalid.is_empty() {
        return Evaluation {
            is_correct: false,
            report: format!("Invalid selection: {}", format_set(&invalid)),
            invalid,
        };
    }

    let is_correct = *user_set == question.correct;

    let mut lines: Vec<String> = Vec::new();
    lines.push(String::new());
    lines.push("=".repeat(RULE_WIDTH));
    lines.push(String::new());
    lines.push(format!("  Your answer:    {}", format_set(user_set)));
    lines.push(format!("  Correct answer: {}", format_set(&question.correct)));
    lines.push(String::new());
    if is_correct {
        lines.push(String::from("  *** CORRECT! ***"));
    } else {
        lines.push(String::from("  *** WRONG! ***"));
    }
    lines.push(String::new());
    lines.push("-".repeat(RULE_WIDTH));
    lines.push(String::new());
    lines.push(String::from("  EXPLANATION:"));
    lines.push(String::new());
    lines.push(format!("  {}", question.explain_correct));
    lines.push(String::new());

    let wrong_options: BTreeSet<String> = valid.difference(&question.correct).cloned().collect();
    if !wrong_options.is_empty() {
        lines.push("-".repeat(RULE_WIDTH));
        lines.push(String::new());
        lines.push(String::from("  WHY THE OTHER OPTIONS ARE WRONG:"));
        lines.push(String::new());
        for key in wrong_options.iter() {
            let explanation = question
                .explain_wrong
                .get(key)
                .map(String::as_str)
                .unwrap_or(NO_EXPLANATION);
            lines.push(format!("    {})  {}", key, explanation));
            lines.push(String::new());
        }
    }

    lines.push("=".repeat(RULE_WIDTH));

    Evaluation {
        is_correct,
        invalid: BTreeSet::new(),
        report: lines.join("\n"),
    }
}

/// Holds a fixed question pool and drives quiz runs over it.
///
/// The pool is read-only after construction; `run` may be called repeatedly
/// ("play again") and resets the score counters and the recency window each
/// time.
pub struct QuizEngine {
    questions: Vec<Question>,
    cooldown: usize,
    correct_count: usize,
    total_answered: usize,
}

impl QuizEngine {
    pub fn new(questions: Vec<Question>, cooldown: usize) -> Self {
        QuizEngine {
            questions,
            cooldown,
            correct_count: 0,
            total_answered: 0,
        }
    }

    /// Run one full quiz and return `(correct, total answered)`.
    ///
    /// Skipped questions and invalid or empty answers are not counted. A
    /// "quit" command, end of input, or Ctrl+C ends the run early with the
    /// counts accumulated so far.
    pub fn run<U: Ui, R: Rng>(
        &mut self,
        ui: &mut U,
        rng: &mut R,
        options: &TakeOptions,
    ) -> Result<(usize, usize)> {
        self.correct_count = 0;
        self.total_answered = 0;

        let options = options.clone_for_run(self.cooldown);
        let mut scheduler = Scheduler::new(self.questions.len(), &options, rng);
        let total = scheduler.total();
        let mut current = 0;

        while let Some(index) = scheduler.next(rng) {
            current += 1;
            let question =
                display::prepare_question(&self.questions[index], rng, !options.keep_options);
            ui.question(&question, current, total)?;

            loop {
                let line = match ui.prompt() {
                    Ok(Some(line)) => line,
                    Ok(None) => return Ok(self.counts()),
                    Err(QuizError::ReadlineInterrupted) => return Ok(self.counts()),
                    Err(e) => return Err(e),
                };

                match parser::interpret(&line) {
                    Input::Quit => {
                        ui.status("Ending the quiz...")?;
                        return Ok(self.counts());
                    }
                    Input::Skip => {
                        ui.status("Question skipped.")?;
                        break;
                    }
                    Input::Answer(ref user_set) if user_set.is_empty() => {
                        ui.status("No valid answer entered.")?;
                    }
                    Input::Answer(user_set) => {
                        let evaluation = evaluate(&question, &user_set);
                        if !evaluation.invalid.is_empty() {
                            ui.status(&evaluation.report)?;
                            continue;
                        }

                        ui.report(&evaluation)?;
                        self.total_answered += 1;
                        if evaluation.is_correct {
                            self.correct_count += 1;
                        }
                        match ui.acknowledge() {
                            Err(QuizError::ReadlineInterrupted) => return Ok(self.counts()),
                            other => other?,
                        }
                        break;
                    }
                }
            }
        }

        Ok(self.counts())
    }

    pub fn pool_size(&self) -> usize {
        self.questions.len()
    }

    fn counts(&self) -> (usize, usize) {
        (self.correct_count, self.total_answered)
    }
}

impl TakeOptions {
    /// The engine owns the cooldown; make sure the scheduler sees it even
    /// when the caller-supplied options disagree.
    fn clone_for_run(&self, cooldown: usize) -> TakeOptions {
        TakeOptions {
            topic: self.topic.clone(),
            num_to_ask: self.num_to_ask,
            in_order: self.in_order,
            repeat: self.repeat,
            cooldown,
            keep_options: self.keep_options,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::VecDeque;

    /// A scripted front end: feeds canned input lines and records everything
    /// the engine asked it to render.
    struct ScriptedUi {
        inputs: VecDeque<String>,
        prompts_shown: Vec<String>,
        statuses: Vec<String>,
        reports: Vec<String>,
    }

    impl ScriptedUi {
        fn new(inputs: &[&str]) -> Self {
            ScriptedUi {
                inputs: inputs.iter().map(|s| s.to_string()).collect(),
                prompts_shown: Vec::new(),
                statuses: Vec::new(),
                reports: Vec::new(),
            }
        }
    }

    impl Ui for ScriptedUi {
        fn question(&mut self, question: &Question, _current: usize, _total: usize) -> Result<()> {
            self.prompts_shown.push(question.prompt.clone());
            Ok(())
        }

        fn prompt(&mut self) -> Result<Option<String>> {
            Ok(self.inputs.pop_front())
        }

        fn report(&mut self, evaluation: &Evaluation) -> Result<()> {
            self.reports.push(evaluation.report.clone());
            Ok(())
        }

        fn status(&mut self, text: &str) -> Result<()> {
            self.statuses.push(String::from(text));
            Ok(())
        }

        fn acknowledge(&mut self) -> Result<()> {
            Ok(())
        }
    }

    fn question(prompt: &str, options: &[(&str, &str)], correct: &[&str]) -> Question {
        let mut q = Question::new(prompt);
        for (key, text) in options {
            q.options.insert(s(key), s(text));
        }
        for key in correct {
            q.correct.insert(s(key));
        }
        q.explain_correct = s("Because so.");
        q
    }

    fn four_option_question(prompt: &str) -> Question {
        question(
            prompt,
            &[("A", "one"), ("B", "two"), ("C", "three"), ("D", "four")],
            &["B"],
        )
    }

    fn answers(letters: &[&str]) -> BTreeSet<String> {
        letters.iter().map(|l| l.to_string()).collect()
    }

    fn test_options() -> TakeOptions {
        let mut options = TakeOptions::new();
        options.in_order = true;
        options.keep_options = true;
        options
    }

    #[test]
    fn exact_match_is_required() {
        let q = question(
            "Pick A and C",
            &[("A", "one"), ("B", "two"), ("C", "three"), ("D", "four")],
            &["A", "C"],
        );

        assert!(evaluate(&q, &q.correct).is_correct);
        assert!(!evaluate(&q, &answers(&["A"])).is_correct);
        assert!(!evaluate(&q, &answers(&["A", "C", "D"])).is_correct);
        assert!(!evaluate(&q, &answers(&["B", "D"])).is_correct);
    }

    #[test]
    fn invalid_letters_are_flagged_not_graded() {
        let q = four_option_question("Pick B");
        let evaluation = evaluate(&q, &answers(&["Z"]));
        assert!(!evaluation.is_correct);
        assert_eq!(evaluation.invalid, answers(&["Z"]));
        assert!(evaluation.report.contains("Invalid selection: Z"));
    }

    #[test]
    fn report_names_the_correct_answer() {
        let q = four_option_question("Pick B");
        let evaluation = evaluate(&q, &answers(&["A"]));
        assert!(!evaluation.is_correct);
        assert!(evaluation.report.contains("Your answer:    A"));
        assert!(evaluation.report.contains("Correct answer: B"));
        assert!(evaluation.report.contains("*** WRONG! ***"));
        assert!(evaluation.report.contains("Because so."));
    }

    #[test]
    fn report_explains_wrong_options_with_placeholder_fallback() {
        let mut q = four_option_question("Pick B");
        q.explain_wrong.insert(s("A"), s("One is not it."));

        let evaluation = evaluate(&q, &answers(&["B"]));
        assert!(evaluation.is_correct);
        assert!(evaluation.report.contains("*** CORRECT! ***"));
        assert!(evaluation.report.contains("A)  One is not it."));
        assert!(evaluation.report.contains(&format!("C)  {}", NO_EXPLANATION)));
        assert!(evaluation.report.contains(&format!("D)  {}", NO_EXPLANATION)));
    }

    #[test]
    fn formatting_an_empty_set_gives_a_placeholder() {
        assert_eq!(format_set(&answers(&[])), "(none)");
        assert_eq!(format_set(&answers(&["B", "A"])), "A B");
    }

    #[test]
    fn quitting_on_the_first_question_returns_zero_counts() {
        let pool = vec![
            four_option_question("q1"),
            four_option_question("q2"),
            four_option_question("q3"),
            four_option_question("q4"),
        ];
        let mut engine = QuizEngine::new(pool, 3);
        let mut ui = ScriptedUi::new(&["quit"]);
        let mut rng = StdRng::seed_from_u64(1);

        let counts = engine.run(&mut ui, &mut rng, &test_options()).unwrap();
        assert_eq!(counts, (0, 0));
        assert_eq!(ui.prompts_shown.len(), 1);
    }

    #[test]
    fn skipped_questions_are_not_counted() {
        let pool = vec![four_option_question("q1"), four_option_question("q2")];
        let mut engine = QuizEngine::new(pool, 3);
        let mut ui = ScriptedUi::new(&["skip", "b"]);
        let mut rng = StdRng::seed_from_u64(1);

        let counts = engine.run(&mut ui, &mut rng, &test_options()).unwrap();
        assert_eq!(counts, (1, 1));
        assert_eq!(ui.prompts_shown, vec![s("q1"), s("q2")]);
    }

    #[test]
    fn empty_input_reprompts_the_same_question() {
        let pool = vec![four_option_question("q1")];
        let mut engine = QuizEngine::new(pool, 3);
        let mut ui = ScriptedUi::new(&["123", "b"]);
        let mut rng = StdRng::seed_from_u64(1);

        let counts = engine.run(&mut ui, &mut rng, &test_options()).unwrap();
        assert_eq!(counts, (1, 1));
        assert_eq!(ui.prompts_shown.len(), 1);
        assert!(ui.statuses.iter().any(|st| st == "No valid answer entered."));
    }

    #[test]
    fn invalid_selections_reprompt_without_counting() {
        let pool = vec![four_option_question("q1")];
        let mut engine = QuizEngine::new(pool, 3);
        let mut ui = ScriptedUi::new(&["z", "b"]);
        let mut rng = StdRng::seed_from_u64(1);

        let counts = engine.run(&mut ui, &mut rng, &test_options()).unwrap();
        assert_eq!(counts, (1, 1));
        assert!(ui
            .statuses
            .iter()
            .any(|st| st.contains("Invalid selection: Z")));
    }

    #[test]
    fn multi_answer_questions_accept_any_letter_order() {
        let pool = vec![question(
            "Pick A and C",
            &[("A", "one"), ("B", "two"), ("C", "three")],
            &["A", "C"],
        )];
        let mut engine = QuizEngine::new(pool, 3);
        let mut ui = ScriptedUi::new(&["c a"]);
        let mut rng = StdRng::seed_from_u64(1);

        let counts = engine.run(&mut ui, &mut rng, &test_options()).unwrap();
        assert_eq!(counts, (1, 1));
    }

    #[test]
    fn wrong_answers_count_toward_the_total() {
        let pool = vec![four_option_question("q1")];
        let mut engine = QuizEngine::new(pool, 3);
        let mut ui = ScriptedUi::new(&["a"]);
        let mut rng = StdRng::seed_from_u64(1);

        let counts = engine.run(&mut ui, &mut rng, &test_options()).unwrap();
        assert_eq!(counts, (0, 1));
    }

    #[test]
    fn limit_restricts_a_run_to_distinct_questions() {
        let pool = vec![
            four_option_question("q1"),
            four_option_question("q2"),
            four_option_question("q3"),
            four_option_question("q4"),
        ];
        let mut engine = QuizEngine::new(pool, 3);
        let mut ui = ScriptedUi::new(&["b", "b"]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut options = test_options();
        options.num_to_ask = Some(2);

        let counts = engine.run(&mut ui, &mut rng, &options).unwrap();
        assert_eq!(counts, (2, 2));
        assert_eq!(ui.prompts_shown, vec![s("q1"), s("q2")]);
    }

    #[test]
    fn end_of_input_ends_the_run_with_partial_counts() {
        let pool = vec![four_option_question("q1"), four_option_question("q2")];
        let mut engine = QuizEngine::new(pool, 3);
        let mut ui = ScriptedUi::new(&["b"]);
        let mut rng = StdRng::seed_from_u64(1);

        let counts = engine.run(&mut ui, &mut rng, &test_options()).unwrap();
        assert_eq!(counts, (1, 1));
    }

    #[test]
    fn each_run_starts_from_zero() {
        let pool = vec![four_option_question("q1")];
        let mut engine = QuizEngine::new(pool, 3);
        let mut rng = StdRng::seed_from_u64(1);

        let mut ui = ScriptedUi::new(&["b"]);
        assert_eq!(engine.run(&mut ui, &mut rng, &test_options()).unwrap(), (1, 1));

        let mut ui = ScriptedUi::new(&["quit"]);
        assert_eq!(engine.run(&mut ui, &mut rng, &test_options()).unwrap(), (0, 0));
    }

    fn s(mystr: &str) -> String {
        String::from(mystr)
    }
}
