use crate::models::{GameSession, Phase};
use crate::ui::layout::calculate_menu_chunks;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_home(f: &mut Frame, session: &GameSession) {
    let layout = calculate_menu_chunks(f.area());

    let title = Paragraph::new("Math Sprint")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title_area);

    let mut body = vec![Line::from("")];
    if session.phase == Phase::Ended && !session.message.is_empty() {
        body.push(Line::from(Span::styled(
            session.message.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    } else if session.score > 0 {
        body.push(Line::from(Span::styled(
            format!("Final score: {}", session.score),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        body.push(Line::from("Add fast, beat the clock."));
    }

    let body = Paragraph::new(body)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, layout.body_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "n",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" New Game  "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
