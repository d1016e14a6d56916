// src/output/mod.rs
pub mod entry;
pub mod logging;
pub mod panel;
pub mod scroll;

pub use entry::{ConsoleLog, EntryId, LogEntry};
pub use panel::{render_tree, ConsoleOutput, PanelRow, PanelTree};
pub use scroll::ScrollState;
