// src/main.rs
use console_output::core::config::Config;
use console_output::setup::setup_toml;
use console_output::{output::logging, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Panic handler
    std::panic::set_hook(Box::new(|panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );
        log::error!("Panic: {}", panic_info);
        eprintln!("{}", panic_info);
    }));

    let log_path = setup_toml::log_file_path()?;
    if let Err(e) = logging::init(&log_path) {
        eprintln!("Logging disabled: {}", e);
    }

    let config = Config::load().await?;
    logging::apply_level(&config.log_level);
    log::info!(
        "console-output v{} starting, config {:?}",
        console_output::core::constants::VERSION,
        config.config_path()
    );

    console_output::run_with_config(config).await
}
