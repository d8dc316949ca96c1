#![warn(clippy::unwrap_used)]

pub mod analytics_rest;
pub mod rest;
pub mod server;
pub mod studio_rest;

pub use server::ApiServer;
