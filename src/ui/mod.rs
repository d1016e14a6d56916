// src/ui/mod.rs
pub mod color;
pub mod screen;
pub mod style;
pub mod terminal;
