use std::time::Duration;

pub const MAX_OPERAND_EASY: u32 = 50;
pub const MAX_OPERAND_HARD: u32 = 100;
pub const MAX_TIME_SECS: u32 = 15;
pub const MAX_ANSWER_DIGITS: usize = 3;
pub const COUNTDOWN_INTERVAL: Duration = Duration::from_secs(1);
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Hard,
}

impl Difficulty {
    pub fn all() -> Vec<Difficulty> {
        vec![Difficulty::Easy, Difficulty::Hard]
    }

    pub fn index(&self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Hard => 1,
        }
    }

    pub fn from_index(index: usize) -> Difficulty {
        match index {
            0 => Difficulty::Easy,
            _ => Difficulty::Hard,
        }
    }

    /// Operands are drawn uniformly from `[0, max_operand)`.
    pub fn max_operand(&self) -> u32 {
        match self {
            Difficulty::Easy => MAX_OPERAND_EASY,
            Difficulty::Hard => MAX_OPERAND_HARD,
        }
    }

    pub fn operand_count(&self) -> usize {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    SelectingDifficulty,
    Playing,
    Ended,
}

#[derive(Debug)]
pub struct GameSession {
    pub phase: Phase,
    pub difficulty: Option<Difficulty>,
    pub operands: Vec<u32>,
    pub solution: u32,
    pub user_input: String,
    pub time_left: u32,
    pub score: u32,
    pub message: String,
    /// Generation counter for the current problem. Bumped on every new
    /// problem; timer callbacks carry the id they were armed for and are
    /// ignored once it no longer matches.
    pub problem_id: u64,
    /// While the success message is showing, holds the id of the problem
    /// that was just solved. Digit and delete input is ignored until the
    /// feedback delay advances to the next problem.
    pub pending_advance: Option<u64>,
}
