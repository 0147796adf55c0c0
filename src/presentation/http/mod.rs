// src/presentation/http/mod.rs
pub mod codec;
pub mod controllers;
pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;
