use std::io::Result;

use log::warn;
use tui_rainfall::{
    RainConfig,
    app::{entry::leave, logger},
    run_app,
};

fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        let _ = leave();
        log::error!("panic: {panic_info}");
        println!("===== RAIN PANIC =====");
        println!("{panic_info}");
    }));

    let (config, config_error) = RainConfig::load_or_default();
    if config.log.enabled {
        if let Ok(level) = config.level_filter() {
            // no log file just means no logs
            let _ = logger::init(&config.log.file, level);
        }
    }
    if let Some(e) = config_error {
        warn!("{e}; falling back to defaults");
    }

    run_app(config)?;
    Ok(())
}
