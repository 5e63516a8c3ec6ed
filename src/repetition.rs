/**
 * Chooses which question to ask next.
 *
 * A quiz runs in one of two modes. In the single-pass mode every question is
 * asked at most once: the pool is optionally shuffled as a whole and then
 * truncated to the question limit. In the repeating ("practice") mode the
 * quiz runs to an explicit limit and questions may recur, but a bounded
 * recency window keeps a question from reappearing until `cooldown` other
 * questions have been asked in between.
 *
 * Questions are tracked by their index in the pool, which is stable for the
 * lifetime of the engine, so duplicated or re-built `Question` values cannot
 * confuse the recency window.
 */
use std::cmp;
use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;

use super::common::TakeOptions;

/// The default number of questions for a practice-mode run whose caller did
/// not supply a limit, bounded below by the pool size.
const DEFAULT_PRACTICE_LENGTH: usize = 20;

pub struct Scheduler {
    pool_size: usize,
    total: usize,
    step: usize,
    mode: Mode,
    cooldown: usize,
    recently_asked: VecDeque<usize>,
}

enum Mode {
    /// A fixed sequence of distinct question indexes, consumed front to back.
    SinglePass(Vec<usize>),
    /// Questions may repeat; `shuffle` selects between random draws and
    /// deterministic index cycling.
    Repeating { shuffle: bool },
}

impl Scheduler {
    /// Plan a run over a pool of `pool_size` questions.
    ///
    /// The cooldown is clamped to `pool_size - 1` (0 for pools of one) so the
    /// exclusion window can never cover the entire pool.
    pub fn new<R: Rng>(pool_size: usize, options: &TakeOptions, rng: &mut R) -> Scheduler {
        let cooldown = if pool_size > 1 {
            cmp::min(options.cooldown, pool_size - 1)
        } else {
            0
        };

        let limit = options.num_to_ask.filter(|&n| n > 0);
        let (mode, total) = if options.repeat {
            let total = limit.unwrap_or(cmp::max(DEFAULT_PRACTICE_LENGTH, pool_size));
            (Mode::Repeating { shuffle: !options.in_order }, total)
        } else {
            let mut order: Vec<usize> = (0..pool_size).collect();
            if !options.in_order {
                order.shuffle(rng);
            }
            order.truncate(cmp::min(limit.unwrap_or(pool_size), pool_size));
            let total = order.len();
            (Mode::SinglePass(order), total)
        };

        Scheduler {
            pool_size,
            total,
            step: 0,
            mode,
            cooldown,
            recently_asked: VecDeque::new(),
        }
    }

    /// The number of question steps this run will have.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Pick the index of the next question to ask, or `None` once the run is
    /// over.
    pub fn next<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        if self.step >= self.total || self.pool_size == 0 {
            return None;
        }
        self.step += 1;

        match self.mode {
            Mode::SinglePass(ref order) => Some(order[self.step - 1]),
            Mode::Repeating { shuffle } => {
                let index = if shuffle {
                    self.pick_outside_window(rng)
                } else {
                    // Index cycling covers the pool evenly on its own, so the
                    // recency window is not consulted here.
                    (self.step - 1) % self.pool_size
                };
                self.remember(index);
                Some(index)
            }
        }
    }

    /// Draw uniformly from the questions outside the recency window. If the
    /// window somehow covers the whole pool, fall back to the full pool
    /// rather than deadlocking.
    fn pick_outside_window<R: Rng>(&self, rng: &mut R) -> usize {
        let available: Vec<usize> = (0..self.pool_size)
            .filter(|index| !self.recently_asked.contains(index))
            .collect();

        if available.is_empty() {
            rng.gen_range(0, self.pool_size)
        } else {
            *available.choose(rng).unwrap_or(&0)
        }
    }

    fn remember(&mut self, index: usize) {
        if self.cooldown == 0 {
            return;
        }
        if self.recently_asked.len() == self.cooldown {
            self.recently_asked.pop_front();
        }
        self.recently_asked.push_back(index);
    }
}
