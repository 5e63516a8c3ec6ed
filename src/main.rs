/**
 * Drill multiple-choice questions from the command line.
 */
#[macro_use]
mod iohelper;
mod bank;
mod common;
mod display;
mod parser;
mod quiz;
mod repetition;
mod topics;
mod ui;

use std::io::Write;

use colored::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;

use common::{Command, CountOptions, Options, Result, TakeOptions};
use quiz::QuizEngine;
use ui::CmdUI;

fn main() {
    let options = Options::from_args();

    if options.no_color {
        colored::control::set_override(false);
    }

    let result = match options.cmd {
        Command::Take(ref take_options) => main_take(&options, take_options),
        Command::Count(ref count_options) => main_count(&options, count_options),
    };

    if let Err(e) = result {
        if !common::is_broken_pipe(&e) {
            eprintln!("{}: {}", "Error".red(), e);
            ::std::process::exit(2);
        }
    }
}

/// The main function for the `take` subcommand.
fn main_take(options: &Options, take_options: &TakeOptions) -> Result<()> {
    let questions = bank::load(&options.directory, &take_options.topic)?;
    let mut engine = QuizEngine::new(questions, take_options.cooldown);
    let mut ui = CmdUI::new();

    my_println!("\n  Starting quiz with {} questions.", engine.pool_size())?;

    loop {
        let (correct, total) = match take_options.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                engine.run(&mut ui, &mut rng, take_options)?
            }
            None => engine.run(&mut ui, &mut rand::thread_rng(), take_options)?,
        };

        ui.results(correct, total)?;

        if !confirm("\n  Another round? (y/n) ") {
            break;
        }
    }
    Ok(())
}

/// The main function for the `count` subcommand.
fn main_count(options: &Options, count_options: &CountOptions) -> Result<()> {
    let questions = bank::load(&options.directory, &count_options.topic)?;

    if count_options.list_topics {
        my_println!("Available topics:")?;
        for (topic, count) in bank::topic_counts(&questions).iter() {
            my_println!("  {} ({})", topic, count)?;
        }
    } else {
        my_println!("{}", questions.len())?;
    }
    Ok(())
}

/// Prompt the user with a yes-no question and return `true` if they enter yes.
fn confirm(message: &str) -> bool {
    match iohelper::prompt(message) {
        Ok(Some(response)) => response.trim_start().to_lowercase().starts_with('y'),
        _ => false,
    }
}
