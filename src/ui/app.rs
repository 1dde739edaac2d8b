//! Main TUI application state and logic

use crate::playback::{Playback, PlaybackState};
use crate::structure::Structure;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state
pub struct App {
    /// Playback driver over the attached trace
    pub playback: Playback,

    /// The static input structure being visualized
    pub structure: Structure,

    /// Window title, derived from the selected algorithm
    pub title: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    pub fn new(playback: Playback, structure: Structure, title: String) -> Self {
        App {
            playback,
            structure,
            title,
            should_quit: false,
            status_message: String::from("Ready"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.playback.tick(Instant::now()) {
                self.status_message = if self.playback.state() == PlaybackState::Finished {
                    "Playback complete".to_string()
                } else {
                    "Playing...".to_string()
                };
            }

            // Use poll with timeout so auto-play keeps advancing between keys
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(main_chunks[0]);

        super::panes::render_structure_pane(frame, columns[0], &self.structure);
        super::panes::render_step_pane(
            frame,
            columns[1],
            &self.title,
            self.playback.current_step(),
            &self.structure,
        );
        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.playback.position(),
            self.playback.len(),
            self.playback.state(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Right | KeyCode::Char('n') => {
                self.playback.pause();
                self.playback.step();
                self.status_message = if self.playback.state() == PlaybackState::Finished {
                    "End of trace".to_string()
                } else {
                    "Stepped forward".to_string()
                };
            }
            KeyCode::Char(' ') => {
                // 200ms debounce against key repeat
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    if self.playback.is_playing() {
                        self.playback.pause();
                        self.status_message = "Paused".to_string();
                    } else {
                        self.playback.play(Instant::now());
                        self.status_message = "Playing...".to_string();
                    }
                }
            }
            KeyCode::Char('r') | KeyCode::Backspace => {
                self.playback.reset();
                self.status_message = "Reset to start".to_string();
            }
            _ => {}
        }
    }
}
