//! A terminal rain animation: colored drops fall down a grid and fade out,
//! the hue shifts every few seconds, and a single button starts and stops it.

pub mod app;

pub use app::{config::RainConfig, entry::run_app};
