pub mod chat;
pub mod config;
pub mod content;
pub mod exploration;
pub mod risk;
pub mod search;
pub mod symptoms;

pub use config::Config;
pub use risk::*;
