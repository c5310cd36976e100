//! Terminal dashboard for the tracked assets.
//!
//! A thin Ratatui consumer of the poller: it only ever sees the
//! [`PollState`](crate::poller::PollState) values the poller publishes.

pub mod app;
pub mod components;
pub mod event;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Event, Message};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
