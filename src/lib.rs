//! # NodeBench
//!
//! A visual-programming canvas workbench shell. NodeBench coordinates
//! several concurrently open workspaces (canvas/graph documents), routes
//! keyboard and pointer input to the active one, exports rasterized PNG
//! snapshots of the visible graph, and validates identifiers when a new
//! reusable custom node definition is created.
//!
//! ## Architecture
//!
//! NodeBench is organized as a workspace with multiple crates:
//!
//! 1. **nodebench-core** - Core types, errors, commands, shell event bus
//! 2. **nodebench-canvas** - Scene model, workspaces, bounds, snapshot export
//! 3. **nodebench-shell** - Input routing, naming prompts, samples, lifecycle
//! 4. **nodebench** - Facade crate re-exporting the public API
//!
//! The graph execution engine, the on-disk graph format, and the package
//! distribution client are external collaborators reached through command
//! and event boundaries; this library never links a windowing toolkit.

pub use nodebench_canvas as canvas;
pub use nodebench_shell as shell;

pub use nodebench_core::{
    CatalogError, Command, ConfigError, Error, EventCategory, EventFilter, ExportError,
    NoopCommand, RecordingCommand, Result, ShellEvent, ShellEventBus, SubscriptionId,
};

pub use nodebench_canvas::{
    compute_bounds, export_snapshot, BoundingRegion, NodeElement, NoteElement, RenderSurface,
    SceneElement, SceneRenderer, Workspace, WorkspaceSession, WorkspaceSessionState,
};

pub use nodebench_shell::{
    propose_identifier, CrashPrompt, IdentifierProposal, KeyCode, LoginStatus, PromptPhase,
    PromptResponse, SamplesMenu, SavePrompt, ShellConfig, ShellLifecycleController, ShellPhase,
    WorkspaceInputRouter,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
