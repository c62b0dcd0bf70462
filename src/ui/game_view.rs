use crate::game::Outcome;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{board_lines, seat_style};
use super::surface::BoardView;

pub fn render(frame: &mut Frame, view: &BoardView, selected_column: usize, message: &Option<String>) {
    let board_rows = u16::try_from(view.height())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),          // Header
            Constraint::Min(board_rows),    // Board
            Constraint::Length(3),          // Message
            Constraint::Length(3),          // Controls
        ])
        .split(frame.area());

    render_header(frame, view, chunks[0]);
    let selector = (!view.is_over()).then_some(selected_column);
    let board = Paragraph::new(board_lines(view, selector)).alignment(Alignment::Center);
    frame.render_widget(board, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, view.is_over(), chunks[3]);
}

fn render_header(frame: &mut Frame, view: &BoardView, area: Rect) {
    let (status, style) = match (view.result(), view.turn()) {
        (Some(Outcome::Win { winner }), _) => {
            let name = view.player(winner).map(|p| p.name()).unwrap_or("?");
            (format!("Game Over  |  {name} won!"), seat_style(view, winner))
        }
        (Some(_), _) => ("Game Over  |  Tie!".to_string(), Style::default()),
        (None, Some(seat)) => {
            let name = view.player(seat).map(|p| p.name()).unwrap_or("?");
            (format!("Current Player: {name}"), seat_style(view, seat))
        }
        (None, None) => (String::new(), Style::default()),
    };

    let header = Paragraph::new(status)
        .style(style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, game_over: bool, area: Rect) {
    let line = if game_over {
        Line::from("R: Restart Game  |  Q: Quit")
    } else {
        Line::from("←/→ or 1-9: Column  |  Enter: Drop  |  Q: Quit")
    };

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
