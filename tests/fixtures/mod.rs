//! Test fixtures and helpers for cursor_view tests.
//!
//! - [`RecordingSink`] - Captures emitted view events
//! - [`TableConverter`] - Converter driven by an explicit lookup table
//! - [`WrappedLineMapping`] - Soft-wrapping converter over a rope
//! - [`init_logging`] - Routes the crate log callback into `tracing`

#![allow(clippy::nursery)] // Test fixtures prioritize clarity over pedantry
#![allow(clippy::pedantic)] // Test fixtures prioritize clarity over pedantry

pub mod recording_sink;
pub mod wrapped_mapping;

pub use recording_sink::*;
pub use table_converter::*;
pub use wrapped_mapping::*;

use cursor_view::{LogLevel, set_log_callback};
use tracing::Level;

/// Install a test subscriber and forward crate log messages to it.
#[allow(dead_code)] // Not every integration test enables logging
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_test_writer()
        .try_init();

    set_log_callback(|level, message| match level {
        LogLevel::Debug => tracing::debug!(target: "cursor_view", "{message}"),
        LogLevel::Info => tracing::info!(target: "cursor_view", "{message}"),
        LogLevel::Warn => tracing::warn!(target: "cursor_view", "{message}"),
        LogLevel::Error => tracing::error!(target: "cursor_view", "{message}"),
    });
}
