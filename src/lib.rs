pub mod logger;
pub mod models;
pub mod session;
pub mod timers;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use models::{Difficulty, GameSession, Phase};
pub use session::{handle_game_input, InputOutcome};
pub use timers::{Countdown, FeedbackDelay};
pub use ui::{draw_difficulty, draw_game, draw_home};
pub use utils::format_time;
