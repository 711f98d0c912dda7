//! # NodeBench Shell
//!
//! The application shell of the NodeBench workbench: routes keyboard and
//! pointer input to the active workspace, validates identifiers for new
//! custom node definitions, populates the samples menu, and drives the
//! window lifecycle (activation, close confirmation, cleanup).

pub mod config;
pub mod input;
pub mod lifecycle;
pub mod naming;
pub mod samples;

pub use config::ShellConfig;
pub use input::{KeyCode, WorkspaceInputRouter};
pub use lifecycle::{
    AlwaysProceed, CrashPrompt, LoggingCrashPrompt, LoginStatus, SavePrompt,
    ShellLifecycleController, ShellPhase,
};
pub use naming::{
    check_identifier, propose_identifier, IdentifierProposal, NamePromptSession, PromptPhase,
    PromptResponse, ERR_DUPLICATE_BUILTIN, ERR_DUPLICATE_CUSTOM, ERR_EMPTY_CATEGORY,
};
pub use samples::{SampleMenuItem, SamplesMenu};
