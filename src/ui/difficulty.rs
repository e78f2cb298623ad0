use crate::models::{Difficulty, GameSession};
use crate::ui::layout::calculate_menu_chunks;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn difficulty_item(difficulty: Difficulty) -> String {
    format!(
        "{}  -  {} numbers up to {}",
        difficulty.label(),
        if difficulty.operand_count() == 2 {
            "two"
        } else {
            "three"
        },
        difficulty.max_operand() - 1
    )
}

pub fn draw_difficulty(f: &mut Frame, session: &GameSession) {
    let layout = calculate_menu_chunks(f.area());

    let title = Paragraph::new("Choose difficulty")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title_area);

    let items: Vec<ListItem> = Difficulty::all()
        .into_iter()
        .map(|difficulty| {
            let selected = session.difficulty == Some(difficulty);
            let marker = if selected { "▸ " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{}{}", marker, difficulty_item(difficulty))).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL));
    f.render_widget(list, layout.body_area);

    // Start stays dim until a difficulty is picked, mirroring a disabled
    // start button.
    let start_style = if session.difficulty.is_some() {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let help_text = vec![Line::from(vec![
        Span::styled(
            "↑/↓ or 1/2",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Select  "),
        Span::styled("Enter", start_style),
        Span::from(" Start  "),
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
