use crate::ai::RandomMover;
use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{column_label, GameEngine, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;
use tracing::info;

pub struct App {
    engine: GameEngine,
    opponent_seed: Option<u64>,
    start_column: usize,
    poll_interval: Duration,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            engine: new_engine(config.opponent.seed),
            opponent_seed: config.opponent.seed,
            start_column: config.ui.start_column,
            poll_interval: Duration::from_millis(config.ui.poll_interval_ms),
            selected_column: config.ui.start_column,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_disk();
            }
            KeyCode::Char('r') => {
                // No reset in the engine; start over with a new one
                self.engine = new_engine(self.opponent_seed);
                self.selected_column = self.start_column;
                self.message = Some("New game started!".to_string());
                info!("new game");
            }
            KeyCode::Char(c @ 'a'..='g') => {
                self.selected_column = (c as u8 - b'a') as usize;
                self.drop_disk();
            }
            _ => {}
        }
    }

    /// Drop a disk in the selected column
    fn drop_disk(&mut self) {
        match self.engine.try_human_move(self.selected_column) {
            Ok(state) if state.is_terminal() => {
                self.message = Some(format!("{} Press 'r' to restart.", state));
            }
            Ok(_) => {}
            Err(MoveError::ColumnFull { column }) => {
                self.message = Some(format!("Column {} is full!", column_label(column)));
            }
            Err(MoveError::MoveAfterGameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(err) => {
                self.message = Some(format!("Move rejected: {}", err));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.engine, self.selected_column, &self.message);
    }
}

fn new_engine(seed: Option<u64>) -> GameEngine {
    let mover = match seed {
        Some(seed) => RandomMover::seeded(seed),
        None => RandomMover::new(),
    };
    GameEngine::with_mover(Box::new(mover))
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
