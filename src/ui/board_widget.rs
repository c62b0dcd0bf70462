use crate::game::{Color, Seat};
use ratatui::{
    style::{Color as TermColor, Modifier, Style},
    text::{Line, Span},
};

use super::surface::BoardView;

/// Map a player's color token to a terminal color. Names ratatui does not
/// know fall back to white.
pub fn term_color(color: &Color) -> TermColor {
    color.as_str().parse().unwrap_or(TermColor::White)
}

/// Style for pieces belonging to `seat`.
pub fn seat_style(view: &BoardView, seat: Seat) -> Style {
    let color = view
        .player(seat)
        .map(|p| term_color(p.color()))
        .unwrap_or(TermColor::White);
    Style::default().fg(color)
}

/// Build the board lines: column numbers, framed grid, and a selection marker
/// under `selected_column` (pass `None` to hide the selector).
pub fn board_lines(view: &BoardView, selected_column: Option<usize>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let width = view.width();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding to match "  ║"
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if Some(col) == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(TermColor::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(width * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..view.height() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..width {
            let span = match view.cell(row, col) {
                None => Span::styled(" . ", Style::default().fg(TermColor::DarkGray)),
                Some(seat) => {
                    let mut style = seat_style(view, seat);
                    if view.last_move() == Some((row, col)) {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    Span::styled(" \u{25cf} ", style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    if let Some(selected) = selected_column {
        let mut indicator_line = vec![Span::raw("   ")];
        for col in 0..width {
            if col == selected {
                indicator_line.push(Span::styled(" ▲ ", Style::default().fg(TermColor::Cyan)));
            } else {
                indicator_line.push(Span::raw("   "));
            }
        }
        indicator_line.push(Span::raw("  "));
        lines.push(Line::from(indicator_line));
    }

    lines
}
