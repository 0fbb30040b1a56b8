//! Main TUI application state and logic

use crate::controls::constants::DEFAULT_PLAY_INTERVAL_MS;
use crate::controls::ArrayControls;
use crate::generator::generate;
use crate::playback::{Playback, PlaybackError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default delay between auto-play steps
pub const DEFAULT_PLAY_INTERVAL: Duration = Duration::from_millis(DEFAULT_PLAY_INTERVAL_MS);

/// The main application state
pub struct App {
    /// Cursor over the current trace
    pub playback: Playback,

    /// Array currently being traced
    pub input: Vec<i64>,

    /// Size setting and random source for new arrays
    pub controls: ArrayControls,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Delay between auto-play steps
    pub play_interval: Duration,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app tracing `input`
    pub fn new(input: Vec<i64>, controls: ArrayControls, play_interval: Duration) -> Self {
        let playback = Playback::new(generate(&input));
        App {
            playback,
            input,
            controls,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            play_interval,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= self.play_interval {
                if self.playback.step_forward().is_ok() {
                    self.status_message = "Playing...".to_string();
                } else {
                    // No more steps available
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
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
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Grid on top, step info below it, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(5),
                Constraint::Length(1),
            ])
            .split(size);

        let snapshot = self.playback.current();

        super::panes::render_grid_pane(frame, chunks[0], snapshot);

        super::panes::render_info_pane(
            frame,
            chunks[1],
            super::panes::InfoRenderData {
                snapshot,
                input: &self.input,
            },
        );

        super::panes::render_status_bar(
            frame,
            chunks[2],
            super::panes::StatusRenderData {
                message: &self.status_message,
                current_step: self.playback.position(),
                total_steps: self.playback.total(),
                array_size: self.controls.size(),
                is_playing: self.is_playing,
            },
        );
    }

    /// Trace a new array, discarding the current history
    pub fn load(&mut self, input: Vec<i64>) {
        self.is_playing = false;
        self.playback.replace(generate(&input));
        debug!(values = ?input, snapshots = self.playback.total(), "loaded new array");
        self.input = input;
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = self.playback.step_forward_by(n);
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.status_message = match self.playback.jump_to_end() {
                    Ok(()) => "Jumped to end".to_string(),
                    Err(e) => e.to_string(),
                };
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.status_message = match self.playback.rewind_to_start() {
                    Ok(()) => "Jumped to start".to_string(),
                    Err(e) => e.to_string(),
                };
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                let values = self.controls.generate_random();
                self.load(values);
                self.status_message = "Generated random array".to_string();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.controls.resize(1);
                self.regenerate_with_size();
            }
            KeyCode::Char('-') => {
                self.controls.resize(-1);
                self.regenerate_with_size();
            }
            _ => {}
        }
    }

    fn regenerate_with_size(&mut self) {
        let values = self.controls.generate_random();
        self.load(values);
        self.status_message = format!("Array size {}", self.controls.size());
    }

    fn toggle_play(&mut self) {
        if !self.is_playing && self.playback.is_at_end() {
            self.status_message = "Already at the last step".to_string();
            return;
        }
        self.is_playing = !self.is_playing;
        if self.is_playing {
            // Take the first step on the next tick
            self.last_play_time = Instant::now()
                .checked_sub(self.play_interval)
                .unwrap_or(Instant::now());
            self.status_message = "Playing...".to_string();
        } else {
            self.status_message = "Paused".to_string();
        }
    }

    /// Step forward in the trace
    fn step_forward(&mut self) {
        self.status_message = match self.playback.step_forward() {
            Ok(()) => "Stepped forward".to_string(),
            Err(e @ PlaybackError::AtEnd { .. }) => format!("Cannot step forward: {}", e),
            Err(e) => format!("Error: {}", e),
        };
    }

    /// Step backward in the trace
    fn step_backward(&mut self) {
        self.status_message = match self.playback.step_backward() {
            Ok(()) => "Stepped backward".to_string(),
            Err(e @ PlaybackError::AtStart) => format!("Cannot step backward: {}", e),
            Err(e) => format!("Error: {}", e),
        };
    }
}
