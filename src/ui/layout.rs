use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct MenuLayout {
    pub title_area: Rect,
    pub body_area: Rect,
    pub help_area: Rect,
}

pub struct GameLayout {
    pub header_area: Rect,
    pub equation_area: Rect,
    pub answer_area: Rect,
    pub message_area: Rect,
    pub keypad_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_menu_chunks(area: Rect) -> MenuLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);

    MenuLayout {
        title_area: chunks[0],
        body_area: chunks[1],
        help_area: chunks[2],
    }
}

pub fn calculate_game_chunks(area: Rect) -> GameLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(area);

    GameLayout {
        header_area: chunks[0],
        equation_area: chunks[1],
        answer_area: chunks[2],
        message_area: chunks[3],
        keypad_area: chunks[4],
        help_area: chunks[5],
    }
}
