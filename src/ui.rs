/**
 * The command-line user interface for taking quizzes.
 *
 * The engine drives any type implementing `Ui`, so the console front end
 * here, a windowed front end, and the scripted fake used by the engine's
 * tests are interchangeable.
 */
use std::io::Write;

use colored::*;

use super::common::Result;
use super::iohelper::{prettyprint, prompt, wait_for_enter};
use super::quiz::{Evaluation, Question};

/// The presentation seam between the quiz engine and a front end.
pub trait Ui {
    /// Render one question.
    fn question(&mut self, question: &Question, current: usize, total: usize) -> Result<()>;
    /// Block for one line of raw user input. `Ok(None)` means end of input.
    fn prompt(&mut self) -> Result<Option<String>>;
    /// Render the evaluation of an answered question.
    fn report(&mut self, evaluation: &Evaluation) -> Result<()>;
    /// Render a one-line status message.
    fn status(&mut self, text: &str) -> Result<()>;
    /// Block until the user is ready for the next question.
    fn acknowledge(&mut self) -> Result<()>;
}

const RULE_WIDTH: usize = 70;

pub struct CmdUI;

impl CmdUI {
    pub fn new() -> Self {
        CmdUI
    }

    fn heavy_rule(&self) -> String {
        "=".repeat(RULE_WIDTH)
    }

    fn light_rule(&self) -> String {
        "-".repeat(RULE_WIDTH)
    }

    /// Print the end-of-run summary.
    pub fn results(&mut self, correct: usize, total: usize) -> Result<()> {
        let percentage = if total > 0 {
            (correct as f64) / (total as f64) * 100.0
        } else {
            0.0
        };

        my_print!("\n")?;
        my_println!("{}", self.heavy_rule())?;
        my_println!("{}", "                    QUIZ FINISHED!".cyan())?;
        my_println!("{}", self.heavy_rule())?;
        my_print!("\n")?;
        my_println!("  Correct answers: {} of {}", correct, total)?;
        my_println!("  Percent: {:.1}%", percentage)?;
        my_print!("\n")?;

        let verdict = if percentage >= 100.0 {
            "PERFECT! You are an expert!".green()
        } else if percentage >= 80.0 {
            "VERY GOOD! Only small gaps!".green()
        } else if percentage >= 60.0 {
            "GOOD! You are on the right track!".cyan()
        } else if percentage >= 40.0 {
            "OKAY! There is room for more!".yellow()
        } else {
            "KEEP PRACTICING! You can do it!".red()
        };
        my_println!("  {}", verdict)?;
        my_print!("\n")?;
        my_println!("{}", self.heavy_rule())
    }
}

impl Ui for CmdUI {
    fn question(&mut self, question: &Question, current: usize, total: usize) -> Result<()> {
        my_print!("\n")?;
        my_println!("{}", self.heavy_rule())?;
        my_println!("{}", format!("  Question {}/{}", current, total).cyan())?;
        if !question.topic.is_empty() {
            my_println!("  Topic: {}", question.topic)?;
        }
        my_println!("{}", self.heavy_rule())?;
        my_print!("\n")?;
        prettyprint(&question.prompt, "  ")?;
        my_print!("\n")?;
        my_println!("{}", self.light_rule())?;
        my_print!("\n")?;
        for (key, text) in question.options.iter() {
            prettyprint(text, &format!("    {})  ", key))?;
            my_print!("\n")?;
        }
        my_println!("{}", self.light_rule())?;
        my_print!("\n")?;
        my_println!("  Enter your answer, e.g. 'A', 'a', 'B D' or 'bd'.")?;
        if question.correct.len() > 1 {
            my_println!("{}", "  This question has more than one correct answer.".yellow())?;
        }
        my_print!("\n")?;
        my_println!("  Commands: 'skip' = skip this question, 'quit' = end the quiz")
    }

    fn prompt(&mut self) -> Result<Option<String>> {
        prompt("  Your answer: ")
    }

    fn report(&mut self, evaluation: &Evaluation) -> Result<()> {
        for line in evaluation.report.lines() {
            if line.trim_start().starts_with("***") {
                if evaluation.is_correct {
                    my_println!("{}", line.green())?;
                } else {
                    my_println!("{}", line.red())?;
                }
            } else {
                my_println!("{}", line)?;
            }
        }
        Ok(())
    }

    fn status(&mut self, text: &str) -> Result<()> {
        my_println!("\n  {}", text)
    }

    fn acknowledge(&mut self) -> Result<()> {
        wait_for_enter("\n  Press ENTER to continue...")
    }
}
