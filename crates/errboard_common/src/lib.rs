//! errboard common - shared types for the error frequency panel
//!
//! Data model, ranking and truncation rules, configuration, and the HTTP
//! client for the error aggregation service.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod text;

pub use client::{ErrorGroupSource, HttpErrorGroupSource};
pub use config::PanelConfig;
pub use error::{ConfigError, FailureKind, FetchError};
pub use model::{decode_groups, rank_by_count, ErrorGroup, Occurrence};
