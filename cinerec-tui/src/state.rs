//! Application state: the recommendation view plus the tasks serving it.

use crate::api_client::RecommendationBackend;
use crate::config::TuiConfig;
use crate::events::TuiEvent;
use crate::keys::Action;
use crate::theme::MarqueeTheme;
use cinerec_core::{Effect, Msg, RenderMode, RequestId, ViewState};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Result of the startup health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    Checking,
    Online,
    WakingUp,
}

impl BackendStatus {
    pub fn label(self) -> &'static str {
        match self {
            BackendStatus::Checking => "Backend: checking",
            BackendStatus::Online => "Backend: online",
            BackendStatus::WakingUp => "Backend: waking up",
        }
    }
}

pub struct App {
    pub config: TuiConfig,
    pub theme: MarqueeTheme,
    pub view: ViewState,
    pub backend_status: BackendStatus,
    /// First visible row of the active list.
    pub scroll: u16,

    backend: Arc<dyn RecommendationBackend>,
    sender: mpsc::Sender<TuiEvent>,
    tasks: HashMap<RequestId, JoinHandle<()>>,
    /// Latest history fetch; older ones are aborted when it is issued.
    history_task: Option<RequestId>,
}

impl App {
    pub fn new(
        config: TuiConfig,
        backend: Arc<dyn RecommendationBackend>,
        sender: mpsc::Sender<TuiEvent>,
    ) -> Self {
        Self {
            config,
            theme: MarqueeTheme::marquee(),
            view: ViewState::new(),
            backend_status: BackendStatus::Checking,
            scroll: 0,
            backend,
            sender,
            tasks: HashMap::new(),
            history_task: None,
        }
    }

    /// Reduce `msg` into the view and run the resulting effects.
    pub fn dispatch(&mut self, msg: Msg) {
        let previous_mode = self.view.render_mode();
        let view = std::mem::take(&mut self.view);
        let (next, effects) = view.reduce(msg);
        self.view = next;
        if self.view.render_mode() != previous_mode {
            self.scroll = 0;
        }
        for effect in effects {
            self.run_effect(effect);
        }
    }

    /// Number of requests still running.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Handle one loop event. Returns `true` when the app should exit.
    pub fn handle_event(&mut self, event: TuiEvent) -> bool {
        match event {
            TuiEvent::Input(key) => {
                if let Some(action) = crate::keys::map_key(key) {
                    return self.handle_action(action);
                }
            }
            TuiEvent::SubmitFinished { request, outcome } => {
                self.tasks.remove(&request);
                if self.view.pending_submit() != Some(request) {
                    tracing::debug!(%request, "Discarding stale recommendation response");
                    return false;
                }
                match &outcome {
                    Ok(movies) => {
                        tracing::info!(%request, count = movies.len(), "Recommendations received")
                    }
                    Err(err) => tracing::warn!(
                        %request,
                        kind = err.kind().as_str(),
                        error = %err,
                        "Recommendation request failed"
                    ),
                }
                self.dispatch(Msg::SubmitCompleted { request, outcome });
            }
            TuiEvent::HistoryFinished { request, result } => {
                self.tasks.remove(&request);
                if self.history_task != Some(request) {
                    tracing::debug!(%request, "Discarding stale history response");
                    return false;
                }
                self.history_task = None;
                match &result {
                    Ok(entries) => tracing::info!(%request, count = entries.len(), "History loaded"),
                    Err(err) => tracing::warn!(%request, error = %err, "Error fetching history"),
                }
                self.dispatch(Msg::HistoryLoaded { request, result });
            }
            TuiEvent::Health(status) => {
                self.backend_status = status;
            }
            TuiEvent::Resize { .. } => {}
        }
        false
    }

    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Submit => {
                if !self.view.loading() {
                    self.dispatch(Msg::Submit);
                }
            }
            Action::ToggleHistory => self.dispatch(Msg::ToggleHistory),
            Action::RefreshHistory => self.dispatch(Msg::RefreshHistory),
            Action::Cancel => self.dispatch(Msg::CancelSubmit),
            // The input is disabled while a submission is in flight.
            Action::InsertChar(_) | Action::Backspace | Action::ClearInput
                if self.view.loading() => {}
            Action::InsertChar(c) => {
                let mut text = self.view.input().to_string();
                text.push(c);
                self.dispatch(Msg::EditInput(text));
            }
            Action::Backspace => {
                let mut text = self.view.input().to_string();
                if text.pop().is_some() {
                    self.dispatch(Msg::EditInput(text));
                }
            }
            Action::ClearInput => self.dispatch(Msg::EditInput(String::new())),
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            Action::ScrollDown => {
                let max = self.list_len().saturating_sub(1);
                self.scroll = self.scroll.saturating_add(1).min(max);
            }
        }
        false
    }

    /// Probe `/health` once and report the result as an event.
    pub fn probe_health(&self) {
        let backend = Arc::clone(&self.backend);
        let sender = self.sender.clone();
        tokio::spawn(async move {
            let status = match backend.health().await {
                Ok(health) if health.is_healthy() => BackendStatus::Online,
                Ok(health) => {
                    tracing::info!(status = %health.status, "Backend reported degraded health");
                    BackendStatus::WakingUp
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Health probe failed");
                    BackendStatus::WakingUp
                }
            };
            let _ = sender.send(TuiEvent::Health(status)).await;
        });
    }

    /// Abort every running request.
    pub fn shutdown(&mut self) {
        self.history_task = None;
        for (request, handle) in self.tasks.drain() {
            tracing::debug!(%request, "Aborting request on shutdown");
            handle.abort();
        }
    }

    fn list_len(&self) -> u16 {
        let len = match self.view.render_mode() {
            RenderMode::History => self.view.history().len(),
            RenderMode::Recommendations => self.view.recommendations().len(),
            RenderMode::Welcome => 0,
        };
        u16::try_from(len).unwrap_or(u16::MAX)
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Recommend {
                request,
                user_input,
            } => {
                tracing::info!(%request, "Requesting recommendations");
                let backend = Arc::clone(&self.backend);
                let sender = self.sender.clone();
                let handle = tokio::spawn(async move {
                    let outcome = backend.recommend(&user_input).await;
                    let _ = sender
                        .send(TuiEvent::SubmitFinished { request, outcome })
                        .await;
                });
                self.tasks.insert(request, handle);
            }
            Effect::FetchHistory { request } => {
                if let Some(previous) = self.history_task.replace(request) {
                    if let Some(handle) = self.tasks.remove(&previous) {
                        tracing::debug!(request = %previous, "Aborting superseded history fetch");
                        handle.abort();
                    }
                }
                tracing::debug!(%request, "Fetching history");
                let backend = Arc::clone(&self.backend);
                let sender = self.sender.clone();
                let handle = tokio::spawn(async move {
                    let result = backend.history().await.map_err(|err| err.to_string());
                    let _ = sender
                        .send(TuiEvent::HistoryFinished { request, result })
                        .await;
                });
                self.tasks.insert(request, handle);
            }
            Effect::Cancel { request } => {
                if let Some(handle) = self.tasks.remove(&request) {
                    tracing::info!(%request, "Cancelling recommendation request");
                    handle.abort();
                }
            }
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}
