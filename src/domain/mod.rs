// src/domain/mod.rs
pub mod time;
