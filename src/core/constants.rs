pub const APP_TITLE: &str = "CONSOLE OUTPUT";
pub const PANEL_TITLE: &str = "Console Output:";
pub const CONFIG_DIR: &str = ".console";
pub const CONFIG_FILE: &str = "console.toml";
pub const LOG_FILE: &str = "console.log";
pub const DEFAULT_MAX_ENTRIES: usize = 1000;
pub const DEFAULT_POLL_RATE: u64 = 16;
pub const MIN_POLL_RATE: u64 = 16;
pub const MAX_POLL_RATE: u64 = 1000;
pub const MAX_PANEL_SPACING: u16 = 10;
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
