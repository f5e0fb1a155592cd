//! Panel application loop for the flowdeck CLI.
//!
//! Wires the panel UI to the node client:
//! 1. On load, fetch help text plus status and statistics
//! 2. Key presses spawn client operations as independent tokio tasks
//! 3. Results come back through an mpsc inbox and update the panel state
//! 4. A successful action re-fetches status AND statistics
//!
//! Status and statistics fetches are always issued as separate tasks with
//! no completion ordering; each result updates only its own pane, so
//! interleaving cannot corrupt the display. Failures of any kind route to
//! the notification log and never abort the loop.

use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use flowdeck::client::{ClientError, NodeClient, ProcessorStatus, ReqwestClient, StatisticsMap};
use flowdeck::format;
use flowdeck::notify::Notifier;

use crate::error::CliError;
use crate::runner::CliRunner;
use crate::ui::{Panel, PanelConfig, PanelEvent, PanelState};

/// Actions a key press can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Start,
    Stop,
    UpdateParameters,
}

impl PanelAction {
    /// Notification shown when the action succeeds.
    fn success_message(&self) -> &'static str {
        match self {
            PanelAction::Start => "Processor started.",
            PanelAction::Stop => "Processor stopped.",
            PanelAction::UpdateParameters => "Parameters updated.",
        }
    }
}

/// Fetches the loop can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetch {
    Status,
    Statistics,
    Help,
}

/// Results arriving from spawned tasks.
#[derive(Debug)]
pub enum PanelMsg {
    Status(Result<ProcessorStatus, ClientError>),
    Statistics(Result<StatisticsMap, ClientError>),
    Help(Result<String, ClientError>),
    ActionFinished {
        action: PanelAction,
        result: Result<(), ClientError>,
    },
}

/// Panel state plus the notification log, with the message-application
/// logic kept free of I/O so it can be tested directly.
pub struct PanelApp {
    pub state: PanelState,
    pub notifier: Arc<Notifier>,
}

impl PanelApp {
    pub fn new(notifier: Arc<Notifier>) -> Self {
        Self {
            state: PanelState::default(),
            notifier,
        }
    }

    /// Apply one task result to the state.
    ///
    /// Returns the follow-up fetches to issue: a successful action always
    /// re-fetches both status and statistics, everything else none.
    pub fn apply(&mut self, msg: PanelMsg) -> Vec<Fetch> {
        match msg {
            PanelMsg::Status(Ok(status)) => {
                self.state.parameters_text = format::to_pretty_json(&status.parameters);
                self.state.status = Some(status);
                Vec::new()
            }
            PanelMsg::Statistics(Ok(statistics)) => {
                self.state.statistics = Some(statistics);
                Vec::new()
            }
            PanelMsg::Help(Ok(help)) => {
                self.state.help = Some(help);
                Vec::new()
            }
            PanelMsg::Status(Err(e)) | PanelMsg::Statistics(Err(e)) | PanelMsg::Help(Err(e)) => {
                self.notifier.error(e.to_string());
                Vec::new()
            }
            PanelMsg::ActionFinished { action, result } => match result {
                Ok(()) => {
                    self.notifier.success(action.success_message());
                    vec![Fetch::Status, Fetch::Statistics]
                }
                Err(e) => {
                    self.notifier.error(e.to_string());
                    Vec::new()
                }
            },
        }
    }
}

type SharedClient = Arc<NodeClient<ReqwestClient>>;

/// Run the panel event loop until the user quits.
pub fn run_panel(runner: &CliRunner) -> Result<(), CliError> {
    let client: SharedClient = Arc::new(runner.create_client()?);
    let notifier = Arc::new(Notifier::new(runner.config().panel.notification_history));
    let handle = runner.runtime_handle();
    let (tx, rx) = mpsc::channel();

    let mut app = PanelApp::new(Arc::clone(&notifier));
    let mut panel = Panel::new(PanelConfig {
        node_address: runner.config().node.address.clone(),
        instance: runner.config().node.instance.clone(),
    })
    .map_err(|e| CliError::Panel(e.to_string()))?;

    // Initial load: help once, status and statistics as independent fetches
    for fetch in [Fetch::Help, Fetch::Status, Fetch::Statistics] {
        spawn_fetch(&handle, &client, fetch, &tx);
    }

    let tick_rate = Duration::from_millis(100);
    let refresh_interval = Duration::from_secs(runner.config().panel.refresh_interval);
    let mut last_draw = Instant::now();
    let mut last_refresh = Instant::now();

    // First frame before any result arrives
    panel
        .draw(&app.state, &notifier.recent(3))
        .map_err(|e| CliError::Panel(e.to_string()))?;

    loop {
        match panel
            .poll_event(&mut app.state)
            .map_err(|e| CliError::Panel(e.to_string()))?
        {
            Some(PanelEvent::Quit) => break,
            Some(PanelEvent::StartRequested) => {
                spawn_action(&handle, &client, PanelAction::Start, &tx);
            }
            Some(PanelEvent::StopRequested) => {
                spawn_action(&handle, &client, PanelAction::Stop, &tx);
            }
            Some(PanelEvent::RefreshRequested) => {
                spawn_fetch(&handle, &client, Fetch::Status, &tx);
                spawn_fetch(&handle, &client, Fetch::Statistics, &tx);
            }
            Some(PanelEvent::ParametersSubmitted(raw)) => {
                spawn_set_parameters(&handle, &client, raw, &tx);
            }
            None => {}
        }

        // Drain finished tasks and issue any follow-up fetches
        while let Ok(msg) = rx.try_recv() {
            for fetch in app.apply(msg) {
                spawn_fetch(&handle, &client, fetch, &tx);
            }
        }

        // Periodic background refresh
        if !refresh_interval.is_zero() && last_refresh.elapsed() >= refresh_interval {
            spawn_fetch(&handle, &client, Fetch::Status, &tx);
            spawn_fetch(&handle, &client, Fetch::Statistics, &tx);
            last_refresh = Instant::now();
        }

        if last_draw.elapsed() >= tick_rate {
            let notifications = notifier.recent(3);
            panel
                .draw(&app.state, &notifications)
                .map_err(|e| CliError::Panel(e.to_string()))?;
            last_draw = Instant::now();
        }

        // Small sleep to prevent busy-waiting
        std::thread::sleep(Duration::from_millis(10));
    }

    Ok(())
}

fn spawn_fetch(
    handle: &tokio::runtime::Handle,
    client: &SharedClient,
    fetch: Fetch,
    tx: &Sender<PanelMsg>,
) {
    let client = Arc::clone(client);
    let tx = tx.clone();
    handle.spawn(async move {
        let msg = match fetch {
            Fetch::Status => PanelMsg::Status(client.get_status().await),
            Fetch::Statistics => PanelMsg::Statistics(client.get_statistics().await),
            Fetch::Help => PanelMsg::Help(client.get_help().await),
        };
        let _ = tx.send(msg);
    });
}

fn spawn_action(
    handle: &tokio::runtime::Handle,
    client: &SharedClient,
    action: PanelAction,
    tx: &Sender<PanelMsg>,
) {
    let client = Arc::clone(client);
    let tx = tx.clone();
    handle.spawn(async move {
        let result = match action {
            PanelAction::Start => client.start().await,
            PanelAction::Stop => client.stop().await,
            // Parameter updates carry a body and go through
            // spawn_set_parameters
            PanelAction::UpdateParameters => Ok(()),
        };
        let _ = tx.send(PanelMsg::ActionFinished { action, result });
    });
}

fn spawn_set_parameters(
    handle: &tokio::runtime::Handle,
    client: &SharedClient,
    raw: String,
    tx: &Sender<PanelMsg>,
) {
    let client = Arc::clone(client);
    let tx = tx.clone();
    handle.spawn(async move {
        let result = client.set_parameters(&raw).await;
        let _ = tx.send(PanelMsg::ActionFinished {
            action: PanelAction::UpdateParameters,
            result,
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowdeck::notify::NotifyLevel;
    use serde_json::json;

    fn app() -> PanelApp {
        PanelApp::new(Arc::new(Notifier::new(10)))
    }

    fn status(parameters: serde_json::Value) -> ProcessorStatus {
        ProcessorStatus {
            processor_name: "p1".to_string(),
            is_running: true,
            parameters,
        }
    }

    #[test]
    fn test_successful_action_refetches_status_and_statistics() {
        let mut app = app();

        for action in [
            PanelAction::Start,
            PanelAction::Stop,
            PanelAction::UpdateParameters,
        ] {
            let fetches = app.apply(PanelMsg::ActionFinished {
                action,
                result: Ok(()),
            });
            assert!(fetches.contains(&Fetch::Status));
            assert!(fetches.contains(&Fetch::Statistics));
            assert_eq!(fetches.len(), 2);
        }
    }

    #[test]
    fn test_successful_action_notifies() {
        let mut app = app();
        app.apply(PanelMsg::ActionFinished {
            action: PanelAction::Start,
            result: Ok(()),
        });

        let latest = app.notifier.latest().unwrap();
        assert_eq!(latest.level, NotifyLevel::Success);
        assert_eq!(latest.message, "Processor started.");
    }

    #[test]
    fn test_failed_action_notifies_verbatim_and_skips_refresh() {
        let mut app = app();
        let fetches = app.apply(PanelMsg::ActionFinished {
            action: PanelAction::UpdateParameters,
            result: Err(ClientError::Api("Expecting value: line 1".to_string())),
        });

        assert!(fetches.is_empty());
        let latest = app.notifier.latest().unwrap();
        assert_eq!(latest.level, NotifyLevel::Error);
        assert_eq!(latest.message, "Expecting value: line 1");
    }

    #[test]
    fn test_status_result_updates_parameters_text() {
        let mut app = app();
        app.apply(PanelMsg::Status(Ok(status(json!({"x": 1})))));

        assert_eq!(app.state.parameters_text, "{\n    \"x\": 1\n}");
        assert!(app.state.status.is_some());
    }

    #[test]
    fn test_status_update_leaves_active_editor_untouched() {
        let mut app = app();
        app.state.editor = Some(crate::ui::panel::ParameterEditor::new("{\"draft\": true}"));

        app.apply(PanelMsg::Status(Ok(status(json!({"x": 2})))));

        // Display text follows the node, the edit buffer does not
        assert_eq!(app.state.parameters_text, "{\n    \"x\": 2\n}");
        assert_eq!(
            app.state.editor.as_ref().unwrap().buffer,
            "{\"draft\": true}"
        );
    }

    #[test]
    fn test_fetch_failures_notify_but_keep_old_pane_content() {
        let mut app = app();
        app.apply(PanelMsg::Status(Ok(status(json!({})))));
        app.apply(PanelMsg::Statistics(Ok(StatisticsMap::new())));

        app.apply(PanelMsg::Status(Err(ClientError::Transport(
            "Request failed: connection refused".to_string(),
        ))));

        assert!(app.state.status.is_some());
        assert!(app.state.statistics.is_some());
        let latest = app.notifier.latest().unwrap();
        assert_eq!(latest.message, "Request failed: connection refused");
    }

    #[test]
    fn test_statistics_and_status_update_independent_panes() {
        let mut app = app();

        // Statistics can land before status; neither touches the other
        app.apply(PanelMsg::Statistics(Ok(StatisticsMap::new())));
        assert!(app.state.status.is_none());
        assert!(app.state.statistics.is_some());

        app.apply(PanelMsg::Status(Ok(status(json!({})))));
        assert!(app.state.status.is_some());
    }

    #[test]
    fn test_help_result_stored() {
        let mut app = app();
        app.apply(PanelMsg::Help(Ok("Writer node help.".to_string())));
        assert_eq!(app.state.help.as_deref(), Some("Writer node help."));
    }
}
