use std::{io::Result, time::Duration};

use crossterm::event::{self, Event};
use ratatui::{Frame, Terminal, prelude::Backend};

use super::config::RainConfig;

pub mod rain;

pub trait Activity {
    fn draw(&mut self, frame: &mut Frame<'_>);

    fn update(&mut self, event: Option<Event>);
}

#[derive(Default)]
pub enum AppState {
    #[default]
    Rain,
    Quit,
}

pub struct App {
    state: AppState,
    rain_activity: Option<rain::RainActivity>,
}

impl App {
    pub fn new(config: &RainConfig) -> Self {
        Self {
            state: AppState::Rain,
            rain_activity: Some(rain::RainActivity::new(config)),
        }
    }

    pub fn change_state(&mut self, state: AppState) {
        if matches!(state, AppState::Quit) {
            // dropping the activity stops its timers
            self.rain_activity = None;
        }
        self.state = state;
    }

    pub fn update<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<bool> {
        crate::app::time::update_time();

        let event = if event::poll(Duration::from_millis(20))? {
            Some(event::read()?)
        } else {
            None
        };

        let mut exit = false;
        terminal.draw(|frame| {
            if let (AppState::Rain, Some(rain)) = (&self.state, self.rain_activity.as_mut()) {
                rain.draw(frame);
                rain.update(event);
                exit = rain.exit;
            }
        })?;

        if exit {
            self.change_state(AppState::Quit);
        }
        Ok(matches!(self.state, AppState::Quit))
    }
}
