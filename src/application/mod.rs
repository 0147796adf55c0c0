pub mod dto;
pub mod error;
pub mod functions;
pub mod ports;
pub mod queries;
pub mod services;

pub use error::ApplicationResult;
