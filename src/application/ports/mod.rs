// src/application/ports/mod.rs
pub mod time;

// Alias keeps injection sites readable.
pub type ClockPort = dyn time::Clock;
