use crate::models::GameSession;
use crate::ui::layout::calculate_game_chunks;
use crate::utils::format_time;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_game(f: &mut Frame, session: &GameSession) {
    let layout = calculate_game_chunks(f.area());

    let header_text = vec![Line::from(vec![
        Span::styled(
            format_time(session.time_left),
            Style::default()
                .fg(if session.time_left <= 5 {
                    Color::Red
                } else {
                    Color::White
                })
                .add_modifier(Modifier::BOLD),
        ),
        Span::from("    "),
        Span::styled(
            format!("Score: {}", session.score),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    let header = Paragraph::new(header_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let equation = Paragraph::new(session.equation())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(equation, layout.equation_area);

    let answer_content = if session.user_input.is_empty() {
        Span::styled("_", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            session.user_input.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    };
    let answer = Paragraph::new(Line::from(answer_content))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Your Answer"));
    f.render_widget(answer, layout.answer_area);

    // Success feedback shows between the answer line and the keypad, where
    // the original app put it.
    if session.pending_advance.is_some() {
        let message = Paragraph::new(Span::styled(
            session.message.clone(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        f.render_widget(message, layout.message_area);
    }

    let keypad_text = vec![
        Line::from(""),
        Line::from("[1] [2] [3]"),
        Line::from("[4] [5] [6]"),
        Line::from("[7] [8] [9]"),
        Line::from("    [0] [⌫]"),
    ];
    let keypad = Paragraph::new(keypad_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Keypad"));
    f.render_widget(keypad, layout.keypad_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "0-9",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Type  "),
        Span::styled(
            "Backspace",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Delete  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Back to menu"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
