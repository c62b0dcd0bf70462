use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color as TermColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::term_color;
use crate::game::{Color, Seat};

/// What the setup screen asks the app to do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupAction {
    None,
    Start,
    Quit,
}

/// Color picker shown before the first game: one palette selector per player.
#[derive(Debug, Clone)]
pub struct Setup {
    names: [String; 2],
    palette: Vec<Color>,
    picks: [usize; 2],
    focus: Seat,
}

impl Setup {
    /// `initial` colors are preselected when present in the palette.
    /// An empty palette is replaced by the initial colors.
    pub fn new(names: [String; 2], mut palette: Vec<Color>, initial: [&Color; 2]) -> Self {
        if palette.is_empty() {
            for color in initial {
                if !palette.contains(color) {
                    palette.push(color.clone());
                }
            }
        }
        let position = |color: &Color, fallback: usize| {
            palette
                .iter()
                .position(|c| c == color)
                .unwrap_or(fallback.min(palette.len().saturating_sub(1)))
        };
        let picks = [position(initial[0], 0), position(initial[1], 1)];
        Setup {
            names,
            palette,
            picks,
            focus: Seat::First,
        }
    }

    pub fn focus(&self) -> Seat {
        self.focus
    }

    pub fn color(&self, seat: Seat) -> &Color {
        &self.palette[self.picks[seat.index()]]
    }

    pub fn has_conflict(&self) -> bool {
        self.color(Seat::First) == self.color(Seat::Second)
    }

    pub fn handle_key(&mut self, code: KeyCode) -> SetupAction {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return SetupAction::Quit,
            KeyCode::Enter | KeyCode::Char(' ') => return SetupAction::Start,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.other();
            }
            KeyCode::Left => self.cycle(self.palette.len().saturating_sub(1)),
            KeyCode::Right => self.cycle(1),
            _ => {}
        }
        SetupAction::None
    }

    fn cycle(&mut self, step: usize) {
        if self.palette.is_empty() {
            return;
        }
        let pick = &mut self.picks[self.focus.index()];
        *pick = (*pick + step) % self.palette.len();
    }

    pub fn render(&self, frame: &mut Frame, message: &Option<String>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(6), // Pickers
                Constraint::Length(3), // Message
                Constraint::Length(3), // Controls
                Constraint::Min(0),
            ])
            .split(frame.area());

        let header = Paragraph::new("Pick a color for each player")
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Connect Four"));
        frame.render_widget(header, chunks[0]);

        let lines: Vec<Line> = [Seat::First, Seat::Second]
            .into_iter()
            .map(|seat| self.picker_line(seat))
            .collect();
        let pickers = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Players"));
        frame.render_widget(pickers, chunks[1]);

        render_text(frame, message.as_deref().unwrap_or(""), chunks[2]);

        let controls = Paragraph::new("Tab: Switch player  |  ←/→: Color  |  Enter: Start  |  Q: Quit")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Controls"));
        frame.render_widget(controls, chunks[3]);
    }

    fn picker_line(&self, seat: Seat) -> Line<'static> {
        let color = self.color(seat);
        let marker = if seat == self.focus { "▶ " } else { "  " };
        let name_style = if seat == self.focus {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{:<12}", self.names[seat.index()]), name_style),
            Span::raw("◀ "),
            Span::styled(
                format!("\u{25cf} {color:<8}"),
                Style::default().fg(term_color(color)),
            ),
            Span::raw(" ▶"),
        ])
    }
}

fn render_text(frame: &mut Frame, text: &str, area: Rect) {
    let widget = Paragraph::new(text.to_string())
        .style(Style::default().fg(TermColor::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> Setup {
        let palette: Vec<Color> = ["red", "blue", "green"].into_iter().map(Color::new).collect();
        Setup::new(
            ["Player 1".into(), "Player 2".into()],
            palette,
            [&Color::new("red"), &Color::new("blue")],
        )
    }

    #[test]
    fn test_initial_picks() {
        let setup = setup();
        assert_eq!(setup.color(Seat::First).as_str(), "red");
        assert_eq!(setup.color(Seat::Second).as_str(), "blue");
        assert!(!setup.has_conflict());
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        let mut setup = setup();
        setup.handle_key(KeyCode::Left);
        assert_eq!(setup.color(Seat::First).as_str(), "green");
        setup.handle_key(KeyCode::Right);
        setup.handle_key(KeyCode::Right);
        assert_eq!(setup.color(Seat::First).as_str(), "blue");
        assert!(setup.has_conflict());
    }

    #[test]
    fn test_tab_moves_focus() {
        let mut setup = setup();
        assert_eq!(setup.handle_key(KeyCode::Tab), SetupAction::None);
        assert_eq!(setup.focus(), Seat::Second);
        setup.handle_key(KeyCode::Right);
        assert_eq!(setup.color(Seat::Second).as_str(), "green");
        assert_eq!(setup.color(Seat::First).as_str(), "red");
    }

    #[test]
    fn test_empty_palette_falls_back_to_initial_colors() {
        let mut setup = Setup::new(
            ["Player 1".into(), "Player 2".into()],
            Vec::new(),
            [&Color::new("red"), &Color::new("blue")],
        );
        assert_eq!(setup.color(Seat::First).as_str(), "red");
        assert_eq!(setup.color(Seat::Second).as_str(), "blue");

        setup.handle_key(KeyCode::Left);
        setup.handle_key(KeyCode::Right);
        setup.handle_key(KeyCode::Right);
        assert_eq!(setup.color(Seat::First).as_str(), "blue");
    }

    #[test]
    fn test_actions() {
        let mut setup = setup();
        assert_eq!(setup.handle_key(KeyCode::Enter), SetupAction::Start);
        assert_eq!(setup.handle_key(KeyCode::Char('q')), SetupAction::Quit);
    }
}
