pub mod config;
pub mod constants;
pub mod environment;
pub mod scheduler;
pub mod testing;
