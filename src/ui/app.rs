//! Main TUI application state and logic

use crate::playback::{Phase, Playback, TICK_DELAY};
use crate::steps::Step;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state
pub struct App {
    /// Playback controller driving the visualization
    pub playback: Playback,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-advance is suspended while a sort is running
    pub is_paused: bool,

    /// Last time the cursor advanced on the timer
    last_tick: Instant,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    /// Create a new app around the given playback controller
    pub fn new(playback: Playback) -> Self {
        App {
            playback,
            should_quit: false,
            status_message: String::from("Press s to sort"),
            is_paused: false,
            last_tick: Instant::now(),
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

            // Advance playback on the timer. step_forward is phase-guarded,
            // so a tick that outlives a regeneration does nothing.
            if self.playback.is_running()
                && !self.is_paused
                && self.last_tick.elapsed() >= TICK_DELAY
            {
                if self.playback.step_forward() {
                    self.sync_status();
                }
                self.last_tick = Instant::now();
            }

            // Use poll with timeout so the timer keeps firing between keys
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
        // Bar chart fills the screen, status bar pinned to the bottom row
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        super::panes::render_bars_pane(frame, chunks[0], self.playback.elements());

        super::panes::render_status_bar(
            frame,
            chunks[1],
            &self.status_message,
            self.playback.cursor(),
            self.playback.total_steps(),
            self.playback.phase(),
            self.is_paused,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Enter => {
                self.start_sort();
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                // Works in every phase; mid-sort this cancels playback
                self.playback.regenerate();
                self.is_paused = false;
                self.status_message = String::from("Generated a new array");
            }
            KeyCode::Char(' ') => {
                // Toggle pause (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    if self.playback.is_running() {
                        self.is_paused = !self.is_paused;
                        if self.is_paused {
                            self.status_message = String::from("Paused");
                        } else {
                            self.last_tick = Instant::now();
                            self.status_message = String::from("Resumed");
                        }
                    }
                }
            }
            KeyCode::Right => {
                // Manual stepping suspends the timer
                if self.playback.step_forward() {
                    self.is_paused = true;
                    self.sync_status();
                }
            }
            KeyCode::Left => {
                if self.playback.step_backward() {
                    self.is_paused = true;
                    self.sync_status();
                }
            }
            KeyCode::Backspace | KeyCode::Home => {
                if self.playback.rewind_to_start() {
                    self.is_paused = true;
                    self.sync_status();
                }
            }
            KeyCode::End => {
                if self.playback.jump_to_end() {
                    self.sync_status();
                }
            }
            _ => {}
        }
    }

    /// Start playback of the displayed array
    fn start_sort(&mut self) {
        // Mirror the controller guard so a repeat press cannot unpause or
        // reschedule the timer
        if self.playback.is_running() {
            return;
        }

        self.playback.start();
        if self.playback.phase() != Phase::Idle {
            self.is_paused = false;
            self.last_tick = Instant::now();
            self.sync_status();
        }
    }

    /// Refresh the status message from the frame under the cursor
    ///
    /// Hold and reset frames carry no highlights and leave the previous
    /// message standing.
    fn sync_status(&mut self) {
        if let Some(text) = self.playback.current_step().and_then(describe_step) {
            self.status_message = text;
        }
    }
}

/// Human-readable description of a frame for the status bar
fn describe_step(step: &Step) -> Option<String> {
    if let Some((a, b)) = step.comparing {
        Some(format!("Comparing positions {} and {}", a, b))
    } else if let Some((a, b)) = step.swapping {
        Some(format!("Swapping positions {} and {}", a, b))
    } else if step.sorted_index < 0 {
        Some(String::from("Array sorted"))
    } else {
        None
    }
}
