use crate::core::constants::APP_TITLE;
use crate::core::prelude::*;
use crossterm::{
    cursor, execute,
    style::ResetColor,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::Stdout;

pub struct TerminalManager {
    stdout: Stdout,
    raw_mode_enabled: bool,
}

impl TerminalManager {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            raw_mode_enabled: false,
        }
    }

    pub fn setup(&mut self) -> Result<()> {
        enable_raw_mode().map_err(|e| AppError::Terminal(e.to_string()))?;
        self.raw_mode_enabled = true;
        execute!(
            self.stdout,
            EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            terminal::SetTitle(APP_TITLE),
            cursor::Hide
        )?;
        log::debug!("Terminal set up");
        Ok(())
    }

    pub fn cleanup(&mut self) -> Result<()> {
        if !self.raw_mode_enabled {
            return Ok(());
        }

        disable_raw_mode().map_err(|e| AppError::Terminal(e.to_string()))?;
        self.raw_mode_enabled = false;
        execute!(
            self.stdout,
            LeaveAlternateScreen,
            ResetColor,
            cursor::Show,
            cursor::MoveTo(0, 0)
        )?;
        self.stdout.flush()?;
        log::debug!("Terminal restored");
        Ok(())
    }

}

crate::impl_default!(TerminalManager, Self::new());

impl Drop for TerminalManager {
    fn drop(&mut self) {
        if self.raw_mode_enabled {
            let _ = disable_raw_mode();
            let _ = execute!(
                std::io::stdout(),
                terminal::LeaveAlternateScreen,
                cursor::Show,
                ResetColor
            );
            log::warn!("Emergency terminal cleanup in destructor");
        }
    }
}
