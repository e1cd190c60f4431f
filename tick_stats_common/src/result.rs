//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `StatsError`, so functions can simply return `Result<T>`.
use crate::error::StatsError;

/// Workspace-wide `Result` alias with `StatsError` as the default error.
pub type Result<T, E = StatsError> = std::result::Result<T, E>;
