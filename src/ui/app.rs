use crate::config::AppConfig;
use crate::error::GameError;
use crate::game::{DropResult, GameEngine, GameState, Outcome, Player, Seat};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::{debug, warn};

use super::setup::{Setup, SetupAction};
use super::surface::{BoardView, DisplaySurface};

enum Screen {
    Setup(Setup),
    Playing,
}

pub struct App {
    config: AppConfig,
    engine: GameEngine,
    game: Option<GameState>,
    view: BoardView,
    screen: Screen,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// Build the app from a validated configuration; the first screen is the
    /// color picker.
    pub fn new(config: AppConfig) -> Self {
        let players = &config.players;
        let setup = Setup::new(
            [players.player1.name.clone(), players.player2.name.clone()],
            config.palette(),
            [
                players.player1.to_player().color(),
                players.player2.to_player().color(),
            ],
        );
        App {
            engine: GameEngine::new(),
            game: None,
            view: BoardView::new(),
            screen: Screen::Setup(setup),
            selected_column: config.board.width / 2,
            should_quit: false,
            message: None,
            config,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn view(&self) -> &BoardView {
        &self.view
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.screen, Screen::Playing)
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        // Clear message on any key press
        self.message = None;

        if let Screen::Setup(setup) = &mut self.screen {
            match setup.handle_key(key.code) {
                SetupAction::Quit => self.should_quit = true,
                SetupAction::Start => self.start_first_game(),
                SetupAction::None => {}
            }
            return;
        }

        let width = self.view.width();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < width {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < width {
                    self.selected_column = column;
                    self.drop_piece();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                if self.view.is_over() {
                    self.restart();
                }
            }
            _ => {}
        }
    }

    /// Leave the setup screen once both players hold distinct colors.
    fn start_first_game(&mut self) {
        let Screen::Setup(setup) = &self.screen else {
            return;
        };
        let players = &self.config.players;
        let first = Player::new(players.player1.name.clone(), setup.color(Seat::First).clone());
        let second = Player::new(players.player2.name.clone(), setup.color(Seat::Second).clone());

        match self.engine.configure_players(
            self.config.board.width,
            self.config.board.height,
            first,
            second,
        ) {
            Ok(state) => {
                self.screen = Screen::Playing;
                self.begin(state);
            }
            Err(GameError::InvalidConfiguration(reason)) => {
                debug!(%reason, "start refused");
                self.message = Some("Players must pick different colors!".to_string());
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Later games keep the colors chosen for the first one.
    fn restart(&mut self) {
        match self.engine.reset() {
            Ok(state) => {
                self.begin(state);
                self.message = Some("New game started!".to_string());
            }
            Err(e) => {
                warn!(error = %e, "restart failed");
                self.message = Some(e.to_string());
            }
        }
    }

    fn begin(&mut self, state: GameState) {
        let board = state.board();
        self.view.begin(board.width(), board.height(), state.players());
        self.selected_column = board.width() / 2;
        self.game = Some(state);
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        let Some(state) = self.game.as_mut() else {
            return;
        };
        if state.is_finished() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.engine.drop_piece(state, self.selected_column) {
            Ok(result) => {
                self.view.show(&result);
                if let DropResult::Placed { outcome, .. } = result {
                    self.message = match outcome {
                        Outcome::Win { winner } => {
                            Some(format!("{} won!", state.player(winner).name()))
                        }
                        Outcome::Draw => Some("Tie!".to_string()),
                        Outcome::Continue { .. } => None,
                    };
                }
            }
            Err(e) => {
                warn!(error = %e, "move rejected");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match &self.screen {
            Screen::Setup(setup) => setup.render(frame, &self.message),
            Screen::Playing => {
                super::game_view::render(frame, &self.view, self.selected_column, &self.message)
            }
        }
    }
}
