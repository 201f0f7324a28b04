pub mod chat;
pub mod content;
pub mod error;
pub mod exploration;
pub mod health;
pub mod openapi;
pub mod risk;
pub mod search;
pub mod symptoms;
