pub mod config;
pub mod dataset;
pub mod export;
pub mod judge;
pub mod output;
pub mod scoring;
pub mod session;
pub mod stderr_buffer;
pub mod tui;
