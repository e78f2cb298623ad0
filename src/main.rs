use crossbeam_channel::{select, unbounded, Sender};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use math_sprint::logger;
use math_sprint::models::{GameSession, Phase, COUNTDOWN_INTERVAL, FEEDBACK_DELAY};
use math_sprint::session::{handle_game_input, InputOutcome};
use math_sprint::timers::{Countdown, FeedbackDelay};
use math_sprint::ui::{draw_difficulty, draw_game, draw_home};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::thread;

fn main() -> io::Result<()> {
    logger::init();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (input_tx, input_rx) = unbounded();
    spawn_input_worker(input_tx);

    let mut session = GameSession::new();
    let mut countdown = Countdown::idle();
    let mut feedback = FeedbackDelay::idle();
    let mut armed_problem: u64 = 0;

    loop {
        terminal.draw(|f| match session.phase {
            Phase::Idle | Phase::Ended => draw_home(f, &session),
            Phase::SelectingDifficulty => draw_difficulty(f, &session),
            Phase::Playing => draw_game(f, &session),
        })?;

        select! {
            recv(input_rx) -> input => match input {
                Ok(Event::Key(key)) => {
                    if handle_game_input(&mut session, key) == InputOutcome::Exit {
                        break;
                    }
                }
                Ok(_) => {} // resize and the rest just trigger a redraw
                Err(_) => break, // input worker is gone
            },
            recv(countdown.receiver()) -> _ => session.tick(),
            recv(feedback.receiver()) -> _ => {
                if let Some(problem_id) = feedback.take() {
                    session.resume_after_feedback(problem_id);
                }
            }
        }

        sync_timers(&session, &mut countdown, &mut feedback, &mut armed_problem);
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Reconcile the two timers with the session after every event. Restarting
/// the countdown replaces the previous ticker, so there is never more than
/// one live countdown; everything outside Playing runs with both timers
/// disarmed.
fn sync_timers(
    session: &GameSession,
    countdown: &mut Countdown,
    feedback: &mut FeedbackDelay,
    armed_problem: &mut u64,
) {
    if session.phase == Phase::Playing {
        if *armed_problem != session.problem_id {
            countdown.start(COUNTDOWN_INTERVAL);
            *armed_problem = session.problem_id;
        }
    } else {
        countdown.cancel();
        *armed_problem = 0;
    }

    match session.pending_advance {
        Some(problem_id) => {
            if feedback.armed_for() != Some(problem_id) {
                feedback.arm(FEEDBACK_DELAY, problem_id);
            }
        }
        None => {
            if feedback.armed_for().is_some() {
                feedback.disarm();
            }
        }
    }
}

fn spawn_input_worker(input_tx: Sender<Event>) -> thread::JoinHandle<()> {
    thread::Builder::new()
        .name("math-sprint::input".to_string())
        .spawn(move || loop {
            match event::read() {
                Ok(input) => {
                    if input_tx.send(input).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        })
        .expect("Failed to spawn input worker thread")
}
