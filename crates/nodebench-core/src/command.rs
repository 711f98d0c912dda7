//! Command boundary toward the model/evaluation layer.
//!
//! The shell never manipulates the graph model directly. Everything it
//! triggers in the model layer (post-activation work, cleanup, queued file
//! loads, find-by-id) goes through command objects with
//! `can_execute`/`execute` semantics.

/// A command exposed by the model layer.
///
/// Commands take an optional string argument (a node id, a file path) and
/// may refuse execution via `can_execute`.
pub trait Command {
    /// Whether the command may run with the given argument
    fn can_execute(&self, _arg: Option<&str>) -> bool {
        true
    }

    /// Run the command
    fn execute(&mut self, arg: Option<&str>);
}

/// Command that accepts everything and does nothing.
///
/// Default wiring for collaborators the host application does not provide.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCommand;

impl Command for NoopCommand {
    fn execute(&mut self, _arg: Option<&str>) {}
}

/// Command that records every invocation.
///
/// Useful for wiring verification in host applications and tests: each
/// `execute` call appends the argument it was given.
#[derive(Debug, Default, Clone)]
pub struct RecordingCommand {
    /// Arguments of every `execute` call, in order.
    pub invocations: Vec<Option<String>>,
    /// When false, `can_execute` refuses every argument.
    pub enabled: bool,
}

impl RecordingCommand {
    /// Create a recording command that accepts every argument
    pub fn new() -> Self {
        Self {
            invocations: Vec::new(),
            enabled: true,
        }
    }

    /// Create a recording command that refuses every argument
    pub fn disabled() -> Self {
        Self {
            invocations: Vec::new(),
            enabled: false,
        }
    }

    /// Number of times the command ran
    pub fn call_count(&self) -> usize {
        self.invocations.len()
    }
}

impl Command for RecordingCommand {
    fn can_execute(&self, _arg: Option<&str>) -> bool {
        self.enabled
    }

    fn execute(&mut self, arg: Option<&str>) {
        self.invocations.push(arg.map(str::to_string));
    }
}
