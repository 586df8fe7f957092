pub mod block;
pub mod config;
