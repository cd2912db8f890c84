use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

use crate::board::CardId;
use crate::core::{Player, Timestamp};
use crate::game::{GameEvent, GameSession, InputEvent};

/// Time between frames; also the input poll timeout.
const FRAME: Duration = Duration::from_millis(16);

pub struct App {
    session: GameSession,
    cursor: usize,
    should_quit: bool,
    message: Option<String>,
    started: Instant,
}

impl App {
    pub fn new(session: GameSession) -> Self {
        App {
            session,
            cursor: 0,
            should_quit: false,
            message: Some("Your turn: pick two cards".to_string()),
            started: Instant::now(),
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
            let now = Timestamp::from_millis(self.started.elapsed().as_millis() as u64);
            for event in self.session.tick(now) {
                self.on_game_event(&event);
            }
        }
        Ok(())
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(FRAME)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let (rows, cols) = (self.session.board().rows(), self.session.board().cols());
        let (row, col) = (self.cursor / cols, self.cursor % cols);

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left if col > 0 => self.cursor -= 1,
            KeyCode::Right if col + 1 < cols => self.cursor += 1,
            KeyCode::Up if row > 0 => self.cursor -= cols,
            KeyCode::Down if row + 1 < rows => self.cursor += cols,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.session
                    .push_input(InputEvent::SelectCard(CardId::new(self.cursor as u16)));
            }
            KeyCode::Char('r') => {
                self.session.push_input(InputEvent::Restart);
            }
            _ => {}
        }
    }

    fn on_game_event(&mut self, event: &GameEvent) {
        let message = match event {
            GameEvent::PairMatched { player, .. } => format!("{player} found a pair!"),
            GameEvent::PairMismatched { player: Player::Human, .. } => "No match.".to_string(),
            GameEvent::PairMismatched { .. } => "The computer missed.".to_string(),
            GameEvent::TurnChanged { player: Player::Human } => "Your turn: pick two cards".to_string(),
            GameEvent::TurnChanged { player: Player::Opponent } => "The computer is thinking...".to_string(),
            GameEvent::GameOver { outcome, .. } => format!("{outcome}! Press Enter or R to play again."),
            GameEvent::Restarted { .. } => {
                self.cursor = 0;
                "New game started!".to_string()
            }
            GameEvent::CardSelected { .. } | GameEvent::CardFaceUp { .. } | GameEvent::CardFaceDown { .. } => {
                return;
            }
        };
        self.message = Some(message);
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.cursor, &self.message);
    }
}
