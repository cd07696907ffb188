// server/src/lib.rs

//! HTTP front end for the storefront's order desk.

pub mod config;
pub mod errors;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
