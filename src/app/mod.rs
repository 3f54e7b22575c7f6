pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
mod context;
pub mod generation;
pub mod history;
pub mod session;

pub use context::AppContext;
