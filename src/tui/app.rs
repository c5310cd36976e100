//! Application state for the dashboard.

use std::time::{Duration, Instant};

use crate::poller::{PollState, PollerConfig};

/// Frames of the loading spinner, advanced on every UI tick.
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Central application state container.
pub struct App {
    /// Latest state published by the poller.
    pub state: PollState,
    /// Tracked asset ids, sorted for display.
    pub tracked_ids: Vec<String>,
    /// Configured refresh interval.
    pub refresh_interval: Duration,
    /// When the last snapshot arrived.
    pub last_update: Option<Instant>,
    /// Number of cycles that ended in a snapshot or failure.
    pub completed_cycles: u64,
    /// Current spinner frame index.
    pub spinner_frame: usize,
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates the initial state for a poller built from `config`.
    pub fn new(config: &PollerConfig) -> Self {
        let mut tracked_ids: Vec<String> = config.tracked_ids.iter().cloned().collect();
        tracked_ids.sort();

        Self {
            state: PollState::Loading,
            tracked_ids,
            refresh_interval: config.interval,
            last_update: None,
            completed_cycles: 0,
            spinner_frame: 0,
            should_quit: false,
        }
    }

    /// Replaces the displayed state with a freshly published one.
    pub fn apply(&mut self, state: PollState) {
        match &state {
            PollState::Loading => {}
            PollState::Ready(_) => {
                self.completed_cycles += 1;
                self.last_update = Some(Instant::now());
            }
            PollState::Failed(_) => {
                self.completed_cycles += 1;
            }
        }
        self.state = state;
    }

    /// Advances the spinner by one frame.
    pub fn tick(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    /// Returns the current spinner glyph.
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame]
    }
}
