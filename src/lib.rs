pub mod command;
pub mod config;
pub mod error;
pub mod history;
pub mod host;
pub mod position;
pub mod session;
pub mod store;
