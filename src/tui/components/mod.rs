//! Reusable dashboard widgets.

pub mod asset_card;
pub mod status_bar;
