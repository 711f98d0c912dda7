//! Window lifecycle orchestration.
//!
//! The controller owns the window lifecycle state machine
//! (Loading → Active → ClosePending → Closed), wires the input router,
//! snapshot exporter, samples menu, and naming prompt to their command
//! and event sources, and enforces the close-confirmation and cleanup
//! sequence. All collaborators arrive at construction time; there is no
//! ambient global lookup.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use nodebench_canvas::snapshot::{export_snapshot, RenderSurface};
use nodebench_core::constants::SAMPLES_DIR_NAME;
use nodebench_core::{Command, EventCategory, EventFilter, NoopCommand, ShellEvent, ShellEventBus};

use crate::config::ShellConfig;
use crate::input::WorkspaceInputRouter;
use crate::naming::{propose_identifier, IdentifierProposal, PromptResponse};
use crate::samples::SamplesMenu;

/// Window lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellPhase {
    /// Window created, first layout not yet completed.
    Loading,
    /// Fully wired and interactive.
    Active,
    /// Close accepted; cleanup pending.
    ClosePending,
    /// Cleanup done, window gone.
    Closed,
}

impl std::fmt::Display for ShellPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ShellPhase::Loading => "Loading",
            ShellPhase::Active => "Active",
            ShellPhase::ClosePending => "ClosePending",
            ShellPhase::Closed => "Closed",
        };
        write!(f, "{}", name)
    }
}

/// Ask-to-save-or-cancel decision boundary.
///
/// Returning false vetoes the close.
pub trait SavePrompt {
    /// Ask the user whether to proceed with closing.
    fn ask_save_or_cancel(&self) -> bool;
}

/// Save prompt that always proceeds. Default wiring.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysProceed;

impl SavePrompt for AlwaysProceed {
    fn ask_save_or_cancel(&self) -> bool {
        true
    }
}

/// Blocking crash modal boundary.
///
/// Presents the fault's message and detail; purely diagnostic, the shell
/// state is unaffected by presentation or dismissal.
pub trait CrashPrompt: Send + Sync {
    /// Present the crash dialog.
    fn show(&self, message: &str, details: &str);
}

/// Crash prompt that only logs. Default wiring for headless hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingCrashPrompt;

impl CrashPrompt for LoggingCrashPrompt {
    fn show(&self, message: &str, details: &str) {
        tracing::error!(message, details, "unhandled fault reported");
    }
}

/// Package-manager login display state, applied verbatim from
/// notifications.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginStatus {
    /// Status text.
    pub text: String,
    /// Whether the login button is enabled.
    pub enabled: bool,
}

/// Top-level orchestrator of the workbench window.
pub struct ShellLifecycleController {
    phase: ShellPhase,
    router: WorkspaceInputRouter,
    bus: ShellEventBus,
    samples_dir: PathBuf,
    samples_menu: SamplesMenu,
    login: Arc<RwLock<LoginStatus>>,
    exit_confirmed: bool,
    save_prompt: Box<dyn SavePrompt>,
    crash_prompt: Arc<dyn CrashPrompt>,
    post_activation: Box<dyn Command>,
    cleanup: Box<dyn Command>,
    queue_load: Box<dyn Command>,
    open_graph: Box<dyn Command>,
    find_by_id: Box<dyn Command>,
}

impl ShellLifecycleController {
    /// Create a controller in the Loading phase.
    ///
    /// Collaborator commands and prompts default to no-ops; wire real ones
    /// with the `with_*` methods before activation.
    pub fn new(router: WorkspaceInputRouter, bus: ShellEventBus, config: &ShellConfig) -> Self {
        let samples_dir = config
            .samples_dir
            .clone()
            .unwrap_or_else(Self::default_samples_dir);
        Self {
            phase: ShellPhase::Loading,
            router,
            bus,
            samples_dir,
            samples_menu: SamplesMenu::default(),
            login: Arc::new(RwLock::new(LoginStatus::default())),
            exit_confirmed: !config.confirm_exit,
            save_prompt: Box::new(AlwaysProceed),
            crash_prompt: Arc::new(LoggingCrashPrompt),
            post_activation: Box::new(NoopCommand),
            cleanup: Box::new(NoopCommand),
            queue_load: Box::new(NoopCommand),
            open_graph: Box::new(NoopCommand),
            find_by_id: Box::new(NoopCommand),
        }
    }

    fn default_samples_dir() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(SAMPLES_DIR_NAME)
    }

    /// Set the ask-to-save decision boundary
    pub fn with_save_prompt(mut self, prompt: impl SavePrompt + 'static) -> Self {
        self.save_prompt = Box::new(prompt);
        self
    }

    /// Set the crash modal boundary
    pub fn with_crash_prompt(mut self, prompt: impl CrashPrompt + 'static) -> Self {
        self.crash_prompt = Arc::new(prompt);
        self
    }

    /// Set the deferred post-activation command
    pub fn with_post_activation_command(mut self, command: impl Command + 'static) -> Self {
        self.post_activation = Box::new(command);
        self
    }

    /// Set the cleanup command run when the window closes
    pub fn with_cleanup_command(mut self, command: impl Command + 'static) -> Self {
        self.cleanup = Box::new(command);
        self
    }

    /// Set the command that queues a file load while the UI is locked
    pub fn with_queue_load_command(mut self, command: impl Command + 'static) -> Self {
        self.queue_load = Box::new(command);
        self
    }

    /// Set the command that opens a graph file
    pub fn with_open_command(mut self, command: impl Command + 'static) -> Self {
        self.open_graph = Box::new(command);
        self
    }

    /// Set the active workspace's find-by-id command
    pub fn with_find_by_id_command(mut self, command: impl Command + 'static) -> Self {
        self.find_by_id = Box::new(command);
        self
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> ShellPhase {
        self.phase
    }

    /// The input router
    pub fn router(&self) -> &WorkspaceInputRouter {
        &self.router
    }

    /// The input router, mutably
    pub fn router_mut(&mut self) -> &mut WorkspaceInputRouter {
        &mut self.router
    }

    /// The populated samples menu (empty before activation)
    pub fn samples_menu(&self) -> &SamplesMenu {
        &self.samples_menu
    }

    /// The shell event bus
    pub fn bus(&self) -> &ShellEventBus {
        &self.bus
    }

    /// Current login display state
    pub fn login_status(&self) -> LoginStatus {
        self.login.read().clone()
    }

    /// First-layout-completed transition: Loading → Active.
    ///
    /// Selects workspace 0, runs the deferred post-activation command,
    /// populates the samples menu, and subscribes the login-state and
    /// crash-prompt handlers. This is the only point menus are populated;
    /// a second call is ignored.
    pub fn activate(&mut self) -> bool {
        if self.phase != ShellPhase::Loading {
            tracing::warn!(phase = %self.phase, "activation ignored outside Loading");
            return false;
        }

        self.router.select_workspace(0);
        self.post_activation.execute(None);

        self.samples_menu = match SamplesMenu::scan(&self.samples_dir) {
            Ok(menu) => menu,
            Err(e) => {
                tracing::error!(error = %e, "samples menu not populated");
                SamplesMenu::default()
            }
        };

        let login = Arc::clone(&self.login);
        self.bus.subscribe(
            EventFilter::Categories(vec![EventCategory::Account]),
            move |event| {
                if let ShellEvent::LoginStateChanged { text, enabled } = event {
                    let mut status = login.write();
                    status.text = text.clone();
                    status.enabled = *enabled;
                }
            },
        );

        let crash_prompt = Arc::clone(&self.crash_prompt);
        self.bus.subscribe(
            EventFilter::Categories(vec![EventCategory::Diagnostics]),
            move |event| {
                if let ShellEvent::CrashReported {
                    message, details, ..
                } = event
                {
                    crash_prompt.show(message, details);
                }
            },
        );

        self.phase = ShellPhase::Active;
        tracing::info!(
            samples = self.samples_menu.items.len(),
            "shell activated"
        );
        true
    }

    /// Mark the exit as already confirmed; later close requests skip the
    /// save prompt.
    pub fn confirm_exit(&mut self) {
        self.exit_confirmed = true;
    }

    /// Close request: Active → ClosePending.
    ///
    /// Proceeds unconditionally when the exit was already confirmed;
    /// otherwise a negative save decision vetoes the close and the shell
    /// stays Active. Returns whether the close proceeds.
    pub fn request_close(&mut self) -> bool {
        if self.phase != ShellPhase::Active {
            tracing::warn!(phase = %self.phase, "close request ignored");
            return false;
        }
        if !self.exit_confirmed && !self.save_prompt.ask_save_or_cancel() {
            tracing::debug!("close vetoed by save prompt");
            return false;
        }
        self.phase = ShellPhase::ClosePending;
        true
    }

    /// Window closed: ClosePending → Closed.
    ///
    /// Runs the cleanup command unconditionally; no veto is possible at
    /// this stage.
    pub fn finish_close(&mut self) {
        if self.phase != ShellPhase::ClosePending {
            tracing::warn!(phase = %self.phase, "finish_close outside ClosePending");
            return;
        }
        self.cleanup.execute(None);
        self.phase = ShellPhase::Closed;
        tracing::info!("shell closed");
    }

    /// Surface an unhandled fault from a lower layer.
    ///
    /// Presents the crash modal via the bus subscription; the lifecycle
    /// state is unchanged, the prompt is diagnostic only.
    pub fn report_crash(&self, message: impl Into<String>, details: impl Into<String>) {
        self.bus.publish(&ShellEvent::CrashReported {
            message: message.into(),
            details: details.into(),
            timestamp: chrono::Utc::now(),
        });
    }

    /// Apply a package-manager login-state notification.
    pub fn set_login_state(&self, text: impl Into<String>, enabled: bool) {
        self.bus.publish(&ShellEvent::LoginStateChanged {
            text: text.into(),
            enabled,
        });
    }

    /// Export the active workspace as a PNG snapshot.
    ///
    /// An empty path is a no-op. Export failures are logged and absorbed;
    /// the shell keeps running. Returns whether a file was written.
    pub fn save_image(&self, path: &str, surface: &dyn RenderSurface) -> bool {
        if path.is_empty() {
            return false;
        }
        let workspace = &self.router.active_session().workspace;
        match export_snapshot(workspace, surface, Path::new(path)) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "failed to save the workspace as an image");
                false
            }
        }
    }

    /// Open a sample file from the samples menu.
    ///
    /// While the UI is locked the load is queued; otherwise the shell
    /// switches to the home workspace and opens the file.
    pub fn open_sample(&mut self, path: &Path) {
        let arg = path.to_string_lossy();
        if self.router.ui_locked() {
            self.queue_load.execute(Some(&arg));
            return;
        }
        if self.router.active_index() != 0 {
            self.router.select_workspace(0);
        }
        self.open_graph.execute(Some(&arg));
    }

    /// Forward a find-by-id request to the active workspace's command.
    pub fn find_by_id(&mut self, id: &str) {
        if self.find_by_id.can_execute(Some(id)) {
            self.find_by_id.execute(Some(id));
        }
    }

    /// Run the naming prompt loop for a new custom node definition.
    ///
    /// The accepted proposal is handed to the model layer by the caller;
    /// a cancelled one is discarded.
    pub fn define_custom_node<F>(
        &self,
        initial: IdentifierProposal,
        existing_custom: &HashSet<String>,
        builtin: &HashSet<String>,
        prompt: F,
    ) -> IdentifierProposal
    where
        F: FnMut(&IdentifierProposal, &str) -> PromptResponse,
    {
        propose_identifier(initial, existing_custom, builtin, prompt)
    }
}
