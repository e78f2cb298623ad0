use crate::logger;
use crate::models::{Difficulty, GameSession, Phase, MAX_ANSWER_DIGITS, MAX_TIME_SECS};
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

#[derive(Debug, PartialEq)]
pub enum InputOutcome {
    Continue,
    Exit,
}

pub fn handle_game_input(session: &mut GameSession, key: KeyEvent) -> InputOutcome {
    match session.phase {
        Phase::Idle | Phase::Ended => match key.code {
            KeyCode::Char('n') | KeyCode::Enter => {
                session.request_new_game();
                InputOutcome::Continue
            }
            KeyCode::Char('q') | KeyCode::Esc => InputOutcome::Exit,
            _ => InputOutcome::Continue,
        },
        Phase::SelectingDifficulty => match key.code {
            KeyCode::Up | KeyCode::Char('1') => {
                session.select_difficulty(Difficulty::Easy);
                InputOutcome::Continue
            }
            KeyCode::Down | KeyCode::Char('2') => {
                session.select_difficulty(Difficulty::Hard);
                InputOutcome::Continue
            }
            KeyCode::Enter => {
                session.start_game();
                InputOutcome::Continue
            }
            KeyCode::Char('q') | KeyCode::Esc => InputOutcome::Exit,
            _ => InputOutcome::Continue,
        },
        Phase::Playing => match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10) {
                    session.press_digit(digit);
                }
                InputOutcome::Continue
            }
            KeyCode::Backspace => {
                session.press_delete();
                InputOutcome::Continue
            }
            KeyCode::Esc => {
                session.abandon();
                InputOutcome::Continue
            }
            _ => InputOutcome::Continue,
        },
    }
}

impl GameSession {
    pub fn new() -> Self {
        GameSession {
            phase: Phase::Idle,
            difficulty: None,
            operands: Vec::new(),
            solution: 0,
            user_input: String::new(),
            time_left: MAX_TIME_SECS,
            score: 0,
            message: String::new(),
            problem_id: 0,
            pending_advance: None,
        }
    }

    /// Enter difficulty selection for a fresh play-through. Ignored while a
    /// game is running; idempotent if selection is already open. The last
    /// chosen difficulty is kept as the preselection.
    pub fn request_new_game(&mut self) {
        if self.phase == Phase::Playing {
            return;
        }
        self.phase = Phase::SelectingDifficulty;
        self.message.clear();
        self.score = 0;
        self.pending_advance = None;
        logger::log("session: entering difficulty selection");
    }

    /// Pick (or re-pick) a difficulty. Only legal while the selection screen
    /// is open; changing difficulty mid-game is not a thing.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        if self.phase != Phase::SelectingDifficulty {
            return;
        }
        self.difficulty = Some(difficulty);
    }

    /// Start playing. Requires an open selection screen and a chosen
    /// difficulty, otherwise it does nothing.
    pub fn start_game(&mut self) {
        if self.phase != Phase::SelectingDifficulty || self.difficulty.is_none() {
            return;
        }
        self.phase = Phase::Playing;
        self.score = 0;
        self.message.clear();
        self.generate_problem();
        logger::log("session: game started");
    }

    /// Draw a fresh set of random operands for the current difficulty.
    pub fn generate_problem(&mut self) {
        let Some(difficulty) = self.difficulty else {
            return;
        };
        let mut rng = rand::thread_rng();
        let operands: Vec<u32> = (0..difficulty.operand_count())
            .map(|_| rng.gen_range(0..difficulty.max_operand()))
            .collect();
        self.set_operands(&operands);
    }

    /// The single mutation point for operands: the solution is recomputed
    /// here and nowhere else, so the two can never drift apart. Also resets
    /// the answer buffer and the per-problem clock, and bumps `problem_id`
    /// so the main loop rearms the countdown.
    pub fn set_operands(&mut self, operands: &[u32]) {
        self.operands = operands.to_vec();
        self.solution = self.operands.iter().sum();
        self.user_input.clear();
        self.time_left = MAX_TIME_SECS;
        self.problem_id += 1;
        self.pending_advance = None;
    }

    /// One second elapsed. Ticks arriving in any other phase are stale
    /// countdown events and are dropped.
    pub fn tick(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.pending_advance = None;
            self.message = format!("Time's up! Final score: {}", self.score);
            self.phase = Phase::Ended;
            logger::log(&format!("session: timed out with score {}", self.score));
        }
    }

    /// Append a digit to the answer, capped at three digits. Ignored while
    /// the success message is showing.
    pub fn press_digit(&mut self, digit: u32) {
        if self.phase != Phase::Playing || self.pending_advance.is_some() {
            return;
        }
        if self.user_input.len() >= MAX_ANSWER_DIGITS {
            return;
        }
        if let Some(c) = char::from_digit(digit, 10) {
            self.user_input.push(c);
            self.check_answer();
        }
    }

    /// Remove the last digit of the answer; no-op on an empty buffer.
    pub fn press_delete(&mut self) {
        if self.phase != Phase::Playing || self.pending_advance.is_some() {
            return;
        }
        self.user_input.pop();
        self.check_answer();
    }

    /// Runs after every answer mutation: the buffer is compared as a parsed
    /// integer, so leading zeros are fine ("007" solves 7). An empty buffer
    /// is never compared.
    fn check_answer(&mut self) {
        if self.user_input.is_empty() {
            return;
        }
        if let Ok(answer) = self.user_input.parse::<u32>()
            && answer == self.solution {
                self.on_correct_answer();
            }
    }

    fn on_correct_answer(&mut self) {
        self.score += 1;
        self.message = String::from("Correct!");
        self.pending_advance = Some(self.problem_id);
        logger::log(&format!("session: correct answer, score {}", self.score));
    }

    /// Called when the feedback delay fires. `problem_id` is the generation
    /// the delay was armed for; if the game has since timed out, been reset,
    /// or moved on, the callback is stale and nothing happens.
    pub fn resume_after_feedback(&mut self, problem_id: u64) {
        if self.phase != Phase::Playing || self.pending_advance != Some(problem_id) {
            return;
        }
        self.message.clear();
        self.generate_problem();
    }

    /// Bail out of a running game back to the home screen.
    pub fn abandon(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.phase = Phase::Idle;
        self.user_input.clear();
        self.message.clear();
        self.pending_advance = None;
        logger::log("session: run abandoned");
    }

    /// The problem as shown to the player, e.g. "12 + 7 =".
    pub fn equation(&self) -> String {
        let terms: Vec<String> = self.operands.iter().map(|n| n.to_string()).collect();
        format!("{} =", terms.join(" + "))
    }
}
