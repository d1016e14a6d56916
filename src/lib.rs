#[macro_export]
macro_rules! impl_default {
    ($type:ty, $body:expr) => {
        impl Default for $type {
            fn default() -> Self {
                $body
            }
        }
    };
}

// Module definitions
pub mod core;
pub mod input;
pub mod output;
pub mod setup;
pub mod ui;

// Essential re-exports
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};
pub use output::{render_tree, ConsoleLog, ConsoleOutput, EntryId, LogEntry, PanelTree};
pub use ui::screen::ScreenManager;
pub use ui::style::{PanelStyle, TitleWeight};

// Main entry point
pub async fn run() -> Result<()> {
    let config = Config::load().await?;
    run_with_config(config).await
}

pub async fn run_with_config(config: Config) -> Result<()> {
    use std::io::IsTerminal;

    let mut screen = ScreenManager::new(&config)?;
    if !std::io::stdin().is_terminal() {
        log::info!("Reading entries from stdin");
        screen.attach_lines(tokio::io::stdin());
    }
    screen.run().await
}
