use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;

use nodebench_core::{Command, ShellEventBus};
use nodebench_shell::{
    CrashPrompt, SavePrompt, ShellConfig, ShellLifecycleController, ShellPhase,
    WorkspaceInputRouter,
};

/// Command that records its invocations through shared state.
#[derive(Clone, Default)]
struct Probe {
    calls: Arc<Mutex<Vec<Option<String>>>>,
}

impl Probe {
    fn new() -> Self {
        Self::default()
    }

    fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    fn last_arg(&self) -> Option<String> {
        self.calls.lock().last().cloned().flatten()
    }
}

impl Command for Probe {
    fn execute(&mut self, arg: Option<&str>) {
        self.calls.lock().push(arg.map(str::to_string));
    }
}

struct Decide(bool);

impl SavePrompt for Decide {
    fn ask_save_or_cancel(&self) -> bool {
        self.0
    }
}

#[derive(Clone, Default)]
struct CrashRecorder {
    shown: Arc<Mutex<Vec<(String, String)>>>,
}

impl CrashPrompt for CrashRecorder {
    fn show(&self, message: &str, details: &str) {
        self.shown
            .lock()
            .push((message.to_string(), details.to_string()));
    }
}

fn controller(config: &ShellConfig) -> ShellLifecycleController {
    let bus = ShellEventBus::new();
    let router = WorkspaceInputRouter::new(bus.clone());
    ShellLifecycleController::new(router, bus, config)
}

#[test]
fn test_activation_selects_home_and_runs_deferred_command() {
    let post = Probe::new();
    let mut shell =
        controller(&ShellConfig::default()).with_post_activation_command(post.clone());

    assert_eq!(shell.phase(), ShellPhase::Loading);
    assert!(shell.activate());
    assert_eq!(shell.phase(), ShellPhase::Active);
    assert_eq!(shell.router().active_index(), 0);
    assert_eq!(post.call_count(), 1);
}

#[test]
fn test_activation_is_one_shot() {
    let post = Probe::new();
    let mut shell =
        controller(&ShellConfig::default()).with_post_activation_command(post.clone());

    assert!(shell.activate());
    assert!(!shell.activate());
    assert_eq!(post.call_count(), 1);
}

#[test]
fn test_negative_save_decision_vetoes_close() {
    let mut shell = controller(&ShellConfig::default()).with_save_prompt(Decide(false));
    shell.activate();

    assert!(!shell.request_close());
    assert_eq!(shell.phase(), ShellPhase::Active);
}

#[test]
fn test_positive_save_decision_allows_close() {
    let cleanup = Probe::new();
    let mut shell = controller(&ShellConfig::default())
        .with_save_prompt(Decide(true))
        .with_cleanup_command(cleanup.clone());
    shell.activate();

    assert!(shell.request_close());
    assert_eq!(shell.phase(), ShellPhase::ClosePending);

    shell.finish_close();
    assert_eq!(shell.phase(), ShellPhase::Closed);
    assert_eq!(cleanup.call_count(), 1);
}

#[test]
fn test_confirmed_exit_skips_save_prompt() {
    // A vetoing prompt that would block the close; the confirmed flag
    // bypasses it entirely.
    let mut shell = controller(&ShellConfig::default()).with_save_prompt(Decide(false));
    shell.activate();
    shell.confirm_exit();

    assert!(shell.request_close());
    assert_eq!(shell.phase(), ShellPhase::ClosePending);
}

#[test]
fn test_confirm_exit_config_default() {
    let config = ShellConfig {
        confirm_exit: false,
        ..Default::default()
    };
    let mut shell = controller(&config).with_save_prompt(Decide(false));
    shell.activate();

    // confirm_exit=false means the exit counts as already confirmed.
    assert!(shell.request_close());
}

#[test]
fn test_close_request_outside_active_is_ignored() {
    let mut shell = controller(&ShellConfig::default());
    assert!(!shell.request_close());
    assert_eq!(shell.phase(), ShellPhase::Loading);
}

#[test]
fn test_crash_report_leaves_phase_unchanged() {
    let recorder = CrashRecorder::default();
    let mut shell =
        controller(&ShellConfig::default()).with_crash_prompt(recorder.clone());
    shell.activate();

    shell.report_crash("index out of range", "at eval_graph()\nat run()");

    let shown = recorder.shown.lock();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].0, "index out of range");
    drop(shown);
    assert_eq!(shell.phase(), ShellPhase::Active);
}

#[test]
fn test_login_state_applied_verbatim() {
    let mut shell = controller(&ShellConfig::default());
    shell.activate();

    shell.set_login_state("Logged in as alex", true);
    let status = shell.login_status();
    assert_eq!(status.text, "Logged in as alex");
    assert!(status.enabled);

    shell.set_login_state("Log in", false);
    let status = shell.login_status();
    assert_eq!(status.text, "Log in");
    assert!(!status.enabled);
}

#[test]
fn test_open_sample_queues_while_locked() {
    let queue = Probe::new();
    let open = Probe::new();
    let mut shell = controller(&ShellConfig::default())
        .with_queue_load_command(queue.clone())
        .with_open_command(open.clone());
    shell.activate();

    shell.router_mut().set_ui_locked(true);
    shell.open_sample(&PathBuf::from("/samples/intro.dyn"));
    assert_eq!(queue.call_count(), 1);
    assert_eq!(open.call_count(), 0);

    shell.router_mut().set_ui_locked(false);
    shell.open_sample(&PathBuf::from("/samples/intro.dyn"));
    assert_eq!(open.call_count(), 1);
    assert_eq!(open.last_arg().as_deref(), Some("/samples/intro.dyn"));
}

#[test]
fn test_open_sample_switches_home_first() {
    let open = Probe::new();
    let mut shell = controller(&ShellConfig::default()).with_open_command(open.clone());
    shell.activate();

    let idx = shell
        .router_mut()
        .open_workspace(nodebench_canvas::Workspace::new("Custom"));
    shell.router_mut().select_workspace(idx);
    assert_ne!(shell.router().active_index(), 0);

    shell.open_sample(&PathBuf::from("/samples/intro.dyn"));
    assert_eq!(shell.router().active_index(), 0);
    assert_eq!(open.call_count(), 1);
}

#[test]
fn test_find_by_id_respects_can_execute() {
    #[derive(Clone, Default)]
    struct Refusing(Probe);
    impl Command for Refusing {
        fn can_execute(&self, _arg: Option<&str>) -> bool {
            false
        }
        fn execute(&mut self, arg: Option<&str>) {
            self.0.calls.lock().push(arg.map(str::to_string));
        }
    }

    let refusing = Refusing::default();
    let probe = refusing.0.clone();
    let mut shell = controller(&ShellConfig::default()).with_find_by_id_command(refusing);
    shell.activate();

    shell.find_by_id("node-42");
    assert_eq!(probe.call_count(), 0);

    let accepting = Probe::new();
    let mut shell =
        controller(&ShellConfig::default()).with_find_by_id_command(accepting.clone());
    shell.activate();
    shell.find_by_id("node-42");
    assert_eq!(accepting.last_arg().as_deref(), Some("node-42"));
}
