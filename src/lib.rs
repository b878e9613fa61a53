pub mod api;
pub mod business;
pub mod clock;
pub mod collections;
pub mod config;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod format;
pub mod geo;
pub mod models;
pub mod observability;
pub mod state;
pub mod status;
pub mod validate;
