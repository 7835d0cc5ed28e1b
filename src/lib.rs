pub mod config;
pub mod error;
pub mod handlers;
pub mod languages;
pub mod llm;
pub mod prompt;
pub mod routes;
pub mod state;
