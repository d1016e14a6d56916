// src/core/prelude.rs

// Core essentials
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};

// Standard library essentials
pub use std::io::{self, Write};
pub use std::time::{Duration, Instant};

// Crossterm basics
pub use crossterm::event::{KeyCode, KeyEvent};

// Ratatui basics
pub use ratatui::style::Color;
