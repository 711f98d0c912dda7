//! # NodeBench Core
//!
//! Core types, traits, and utilities for NodeBench.
//! Provides the fundamental abstractions for the shell event bus,
//! the command boundary toward the model layer, and the error taxonomy.

pub mod command;
pub mod constants;
pub mod error;
pub mod events;

pub use command::{Command, NoopCommand, RecordingCommand};

pub use error::{CatalogError, ConfigError, Error, ExportError, Result};

// Re-export the event bus for convenience
pub use events::{EventCategory, EventFilter, ShellEvent, ShellEventBus, SubscriptionId};
