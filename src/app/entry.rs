use std::io::{Result, stdout};
use std::time::{Duration, Instant};

use crossterm::{
    ExecutableCommand,
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{info, warn};
use ratatui::{Terminal, prelude::CrosstermBackend};

use super::{config::RainConfig, screens::App};

pub const FPS: i32 = 30;

pub fn run_app(config: RainConfig) -> Result<()> {
    info!(
        "starting rain: {}x{} grid, drop length {}, tick {}ms, color cycle {}ms, {} colors",
        config.grid.rows,
        config.grid.columns,
        config.grid.snake_length,
        config.timing.tick_ms,
        config.timing.color_cycle_ms,
        config.palette.colors.len()
    );
    let mut app = App::new(&config);

    init()?;
    let result = restoring(|| frame_loop(&mut app), leave);
    info!("terminal restored");
    result
}

fn frame_loop(app: &mut App) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let frame_duration = Duration::from_millis(1000 / FPS as u64);
    loop {
        let frame_start = Instant::now();

        let exit = app.update(&mut terminal)?;
        if exit {
            return Ok(());
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    }
}

/// Runs `body`, then `restore` no matter how `body` ended. An error from
/// `body` wins over one from `restore`.
pub fn restoring<T>(
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    let result = body();
    let restored = restore();
    match (result, restored) {
        (Ok(value), Ok(())) => Ok(value),
        (Err(e), restored) => {
            if let Err(restore_err) = restored {
                warn!("terminal restore failed after an error: {restore_err}");
            }
            Err(e)
        }
        (Ok(_), Err(e)) => Err(e),
    }
}

/// Switches the terminal into UI mode, undoing any half-applied step on failure.
pub fn init() -> Result<()> {
    let entered = (|| -> Result<()> {
        stdout().execute(EnterAlternateScreen)?;
        stdout().execute(EnableMouseCapture)?;
        enable_raw_mode()
    })();
    if entered.is_err() {
        let _ = leave();
    }
    entered
}

pub fn leave() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(DisableMouseCapture)?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::{Error, ErrorKind};

    use super::*;

    #[test]
    fn test_restore_runs_after_error() {
        let mut restored = false;
        let result: Result<()> = restoring(
            || Err(Error::new(ErrorKind::BrokenPipe, "poll failed")),
            || {
                restored = true;
                Ok(())
            },
        );
        assert!(restored);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_body_error_wins_over_restore_error() {
        let result: Result<()> = restoring(
            || Err(Error::new(ErrorKind::BrokenPipe, "draw failed")),
            || Err(Error::new(ErrorKind::Other, "leave failed")),
        );
        assert_eq!(result.unwrap_err().kind(), ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_restore_error_surfaces_on_clean_exit() {
        let result = restoring(
            || Ok(7),
            || Err(Error::new(ErrorKind::Other, "leave failed")),
        );
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Other);

        let mut restored = false;
        let value = restoring(
            || Ok(7),
            || {
                restored = true;
                Ok(())
            },
        )
        .unwrap();
        assert_eq!(value, 7);
        assert!(restored);
    }
}
