pub mod config;
pub mod entry;
pub mod logger;
pub mod math;
pub mod rain;
pub mod screens;
pub mod structs;
pub mod time;
pub mod utils;
pub mod widgets;
