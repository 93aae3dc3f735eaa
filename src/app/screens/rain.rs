use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect, Size},
    style::{Style, Stylize, palette::tailwind},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{
    config::RainConfig,
    rain::{
        RainGrid,
        colors::hex,
        cycler::ColorCycler,
        widget::RainView,
    },
    time::{Interval, frame_delta},
    utils::{centered, fade_in},
    widgets::button::{ButtonState, ToggleButton},
};

use super::Activity;

const BUTTON_SIZE: Size = Size::new(12, 3);
const FADE_IN_SECS: f32 = 0.8;

pub struct RainActivity {
    grid: RainGrid,
    cycler: ColorCycler,
    tick_timer: Interval,
    color_timer: Interval,
    rng: ChaCha8Rng,
    running: bool,
    ticks: u64,
    app_time: Duration,
    itoa_buffer: itoa::Buffer,

    button_area: Rect,
    button_state: ButtonState,

    pub exit: bool,
}

impl RainActivity {
    pub fn new(config: &RainConfig) -> Self {
        let cycler = ColorCycler::new(config.palette());
        let grid = RainGrid::new(
            config.grid.rows,
            config.grid.columns,
            config.grid.snake_length,
            cycler.current(),
        )
        .with_spawn_chance(config.grid.spawn_chance);
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Self {
            grid,
            cycler,
            tick_timer: Interval::new(config.tick_period()),
            color_timer: Interval::new(config.color_cycle_period()),
            rng,
            running: true,
            ticks: 0,
            app_time: Duration::default(),
            itoa_buffer: itoa::Buffer::new(),
            button_area: Rect::default(),
            button_state: ButtonState::Normal,
            exit: false,
        }
    }

    pub fn grid(&self) -> &RainGrid {
        &self.grid
    }

    pub fn color_index(&self) -> usize {
        self.cycler.index()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn button_area(&self) -> Rect {
        self.button_area
    }

    pub fn label(&self) -> &'static str {
        if self.running { "Stop" } else { "Start" }
    }

    /// Flips the run flag. The grid timer restarts from a fresh phase either way.
    pub fn toggle(&mut self) {
        self.running = !self.running;
        self.tick_timer.reset();
        info!(
            "rain {} after {} ticks",
            if self.running { "started" } else { "stopped" },
            self.ticks
        );
    }

    /// Runs both timers forward by `delta`, in time order. A color change
    /// restarts the grid timer, so only the time after it counts towards the
    /// next tick.
    pub fn advance(&mut self, delta: Duration) {
        self.app_time += delta;

        let mut left = delta;
        loop {
            let step = match self.color_timer.remaining() {
                next if next.is_zero() => left,
                next => left.min(next),
            };
            if self.running {
                for _ in 0..self.tick_timer.advance(step) {
                    self.tick();
                }
            }
            for _ in 0..self.color_timer.advance(step) {
                self.change_color();
            }
            left -= step;
            if left.is_zero() {
                break;
            }
        }
    }

    fn tick(&mut self) {
        self.grid.tick(&mut self.rng);
        self.ticks += 1;
        if self.ticks % 100 == 0 {
            debug!("tick {}: {} lit cells", self.ticks, self.grid.lit_count());
        }
    }

    fn change_color(&mut self) {
        let color = self.cycler.advance();
        self.grid.recolor(color);
        // the grid timer is tied to the current color
        self.tick_timer.reset();
        info!("palette moved to color {} ({color})", self.cycler.index());
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => (),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.exit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.exit = true,
            KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Enter => self.toggle(),
            _ => (),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let hovered = self
            .button_area
            .contains(Position::new(mouse.column, mouse.row));
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if hovered => {
                self.button_state = ButtonState::Active;
                self.toggle();
            }
            MouseEventKind::Up(MouseButton::Left) | MouseEventKind::Moved => {
                self.button_state = if hovered {
                    ButtonState::Selected
                } else {
                    ButtonState::Normal
                };
            }
            _ => (),
        }
    }

    fn status_line(&mut self) -> String {
        let ticks = self.itoa_buffer.format(self.ticks).to_owned();
        let color = self.itoa_buffer.format(self.cycler.index() + 1).to_owned();
        format!(
            "{}  ·  ticks {ticks}  ·  color {color}/{}  ·  {} lit",
            if self.running { "● running" } else { "○ stopped" },
            self.cycler.palette_len(),
            self.grid.lit_count()
        )
    }
}

impl Activity for RainActivity {
    fn draw(&mut self, frame: &mut Frame<'_>) {
        let area = frame.area();
        let [title, body, controls, status, help] = Layout::vertical([
            Constraint::Max(3),
            Constraint::Min(0),
            Constraint::Length(BUTTON_SIZE.height + 1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let header = Paragraph::new("Falling Rain Pattern")
            .style(Style::default().fg(hex(0xFF9800)).bold())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
            .alignment(Alignment::Center);
        frame.render_widget(header, title);

        let preferred = RainView::preferred_size(&self.grid);
        let frame_rect = centered(
            body,
            Size::new(preferred.width + 4, preferred.height + 2),
        );
        let grid_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .fg(tailwind::ZINC.c700);
        let inner = grid_block.inner(frame_rect);
        frame.render_widget(grid_block, frame_rect);
        frame.render_widget(RainView::new(&self.grid), inner);

        let [_, button_row] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(BUTTON_SIZE.height)])
                .areas(controls);
        self.button_area = centered(button_row, BUTTON_SIZE);
        frame.render_widget(
            ToggleButton::new(self.label(), self.button_state),
            self.button_area,
        );

        let status_text = self.status_line();
        frame.render_widget(
            Paragraph::new(status_text)
                .alignment(Alignment::Center)
                .fg(tailwind::ZINC.c400),
            status,
        );
        frame.render_widget(
            Paragraph::new("space / enter / click: start · stop    q: quit")
                .alignment(Alignment::Center)
                .fg(tailwind::ZINC.c500),
            help,
        );

        fade_in(frame, FADE_IN_SECS, self.app_time.as_secs_f32());
    }

    fn update(&mut self, event: Option<Event>) {
        self.advance(frame_delta());

        if let Some(event) = event {
            self.handle_event(event);
        }
    }
}

impl Drop for RainActivity {
    fn drop(&mut self) {
        info!("rain torn down after {} ticks", self.ticks);
    }
}
