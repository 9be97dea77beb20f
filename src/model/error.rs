//! Error types for lanegrid.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level binary error wrapping every failure the CLI can hit
//!   - [`LayoutError`] - Engine misuse (bad configuration, negative measurements,
//!     coordinates leaving the `i32` range)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file / env failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Subscriber setup failures
//!   - `std::io::Error` - Item file reads and stdout writes
//!
//! # Recovery Strategy
//!
//! Layout errors are **fatal to the call** but leave the engine untouched: every
//! operation validates before mutating, so there is no partial-failure state.
//! Detaching a position that was never laid out is not an error at all; it is
//! a silent no-op.

use super::identifiers::{InvalidLaneCount, ItemPosition};
use thiserror::Error;

/// Errors returned by the layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The configured lane count was zero.
    ///
    /// Rejected when the engine is constructed, never at attach time.
    #[error("Invalid lane count: {0}")]
    InvalidLaneCount(#[from] InvalidLaneCount),

    /// An item was attached or detached before `reset_layout` established lane bounds.
    ///
    /// Also returned after an orientation change until the next reset.
    #[error("Layout has not been reset; call reset_layout before attaching or detaching items")]
    NotLaidOut,

    /// The host supplied a negative measured size.
    ///
    /// Placing such an item would produce a negative-area rectangle and move
    /// lane edges backwards, so it is rejected before any state changes.
    #[error("Negative measured size {width}x{height} for item {position}")]
    NegativeMeasurement {
        /// Position of the offending item.
        position: ItemPosition,
        /// Measured width.
        width: i32,
        /// Measured height.
        height: i32,
    },

    /// Placing or releasing an item would move a lane edge outside the `i32`
    /// coordinate range.
    ///
    /// Rejected before any state changes, like a negative measurement.
    #[error("Lane extent overflow placing item {position} (main size {main_size})")]
    ExtentOverflow {
        /// Position of the offending item.
        position: ItemPosition,
        /// Main-axis size that did not fit.
        main_size: i32,
    },
}

/// Top-level error for the `lanegrid` binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Engine rejected a call.
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Configuration could not be loaded or resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Items file could not be parsed.
    #[error("Invalid items file: {0}")]
    Items(#[from] serde_json::Error),

    /// Reading input or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
