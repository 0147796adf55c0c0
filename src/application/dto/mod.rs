pub mod context;
pub mod time;

pub use context::CallContext;
pub use time::TimeResponse;
