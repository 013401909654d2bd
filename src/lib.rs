pub mod api;
pub mod booking;
pub mod config;
pub mod engine;
pub mod entities;
pub mod error;
pub mod pricing;
pub mod server;
