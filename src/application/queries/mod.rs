pub mod server_time;

pub use server_time::ServerTimeQueryService;
