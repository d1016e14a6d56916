// src/input/mod.rs
pub mod event;
pub mod keyboard;
