use crossbeam_channel::{after, never, tick, Receiver};
use std::time::{Duration, Instant};

/// The repeating per-problem countdown. There is at most one live ticker:
/// `start` replaces the stored receiver, which drops the previous channel
/// and with it any tick that was already queued.
#[derive(Debug)]
pub struct Countdown {
    rx: Receiver<Instant>,
}

impl Countdown {
    pub fn idle() -> Self {
        Countdown { rx: never() }
    }

    pub fn start(&mut self, interval: Duration) {
        self.rx = tick(interval);
    }

    pub fn cancel(&mut self) {
        self.rx = never();
    }

    pub fn receiver(&self) -> &Receiver<Instant> {
        &self.rx
    }
}

/// One-shot delay between a correct answer and the next problem, tagged with
/// the problem generation it was armed for so a stale firing can be told
/// apart from a live one.
#[derive(Debug)]
pub struct FeedbackDelay {
    rx: Receiver<Instant>,
    problem_id: Option<u64>,
}

impl FeedbackDelay {
    pub fn idle() -> Self {
        FeedbackDelay {
            rx: never(),
            problem_id: None,
        }
    }

    pub fn arm(&mut self, delay: Duration, problem_id: u64) {
        self.rx = after(delay);
        self.problem_id = Some(problem_id);
    }

    pub fn disarm(&mut self) {
        self.rx = never();
        self.problem_id = None;
    }

    pub fn armed_for(&self) -> Option<u64> {
        self.problem_id
    }

    /// Consume the tag once the delay has fired. The receiver is spent
    /// afterwards; a second `take` yields nothing.
    pub fn take(&mut self) -> Option<u64> {
        self.rx = never();
        self.problem_id.take()
    }

    pub fn receiver(&self) -> &Receiver<Instant> {
        &self.rx
    }
}
