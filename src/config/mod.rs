//! Configuration management for focuspulse.
//!
//! This module handles loading configuration from `~/.focuspulse/`.

mod paths;
mod settings;

pub use paths::{Paths, HOME_ENV};
pub use settings::{AlertConfig, Config, DurationsConfig, GeneralConfig};
