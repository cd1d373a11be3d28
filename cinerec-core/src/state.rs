//! Recommendation view state and its transitions.
//!
//! [`ViewState`] is a value: every transition consumes the old state and
//! returns the new one together with the [`Effect`]s the runtime must run.
//! Nothing here touches the network, so the whole state machine can be
//! exercised without a terminal or a backend.

use crate::error::{SubmitError, SubmitOutcome};
use crate::fallback::fallback_movies;
use crate::types::{HistoryEntry, Movie};
use std::fmt;

/// Identifies one request issued by the view.
///
/// Completions carry the id of the request they answer; completions for a
/// request that is no longer current are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The user replaced the input text.
    EditInput(String),
    /// The user asked for recommendations for the current input.
    Submit,
    /// A recommendation request finished.
    SubmitCompleted {
        request: RequestId,
        outcome: SubmitOutcome,
    },
    /// The user abandoned the in-flight submission.
    CancelSubmit,
    /// Show or hide the history list.
    ToggleHistory,
    /// Reload history without changing visibility.
    RefreshHistory,
    /// A history request finished. Errors carry the failure text for logging.
    HistoryLoaded {
        request: RequestId,
        result: Result<Vec<HistoryEntry>, String>,
    },
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the text to the recommendation endpoint.
    Recommend {
        request: RequestId,
        user_input: String,
    },
    /// GET the history endpoint.
    FetchHistory { request: RequestId },
    /// Abort a request that is still running.
    Cancel { request: RequestId },
}

/// Which of the three mutually exclusive screens is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Welcome,
    Recommendations,
    History,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    input: String,
    recommendations: Vec<Movie>,
    history: Vec<HistoryEntry>,
    loading: bool,
    show_history: bool,
    error: Option<String>,
    pending_submit: Option<RequestId>,
    latest_history: Option<RequestId>,
    issued: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn recommendations(&self) -> &[Movie] {
        &self.recommendations
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn show_history(&self) -> bool {
        self.show_history
    }

    /// User-facing error text, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The submission currently awaiting a response.
    pub fn pending_submit(&self) -> Option<RequestId> {
        self.pending_submit
    }

    pub fn render_mode(&self) -> RenderMode {
        if self.show_history {
            RenderMode::History
        } else if self.recommendations.is_empty() {
            RenderMode::Welcome
        } else {
            RenderMode::Recommendations
        }
    }

    /// Apply one message, returning the next state and the effects to run.
    #[must_use]
    pub fn reduce(self, msg: Msg) -> (ViewState, Vec<Effect>) {
        match msg {
            Msg::EditInput(text) => (self.edit_input(text), Vec::new()),
            Msg::Submit => self.submit(),
            Msg::SubmitCompleted { request, outcome } => self.complete_submit(request, outcome),
            Msg::CancelSubmit => self.cancel_submit(),
            Msg::ToggleHistory => self.toggle_history(),
            Msg::RefreshHistory => self.fetch_history(),
            Msg::HistoryLoaded { request, result } => (self.load_history(request, result), Vec::new()),
        }
    }

    fn next_request(&mut self) -> RequestId {
        self.issued += 1;
        RequestId(self.issued)
    }

    fn edit_input(mut self, text: String) -> Self {
        self.input = text;
        self.error = None;
        self
    }

    fn submit(mut self) -> (Self, Vec<Effect>) {
        if self.loading {
            return (self, Vec::new());
        }
        if self.input.trim().is_empty() {
            self.error = Some(SubmitError::Validation.to_string());
            return (self, Vec::new());
        }
        let request = self.next_request();
        self.loading = true;
        self.error = None;
        self.pending_submit = Some(request);
        let effect = Effect::Recommend {
            request,
            user_input: self.input.clone(),
        };
        (self, vec![effect])
    }

    fn complete_submit(mut self, request: RequestId, outcome: SubmitOutcome) -> (Self, Vec<Effect>) {
        if self.pending_submit != Some(request) {
            return (self, Vec::new());
        }
        self.pending_submit = None;
        self.loading = false;
        match outcome {
            Ok(movies) => {
                self.recommendations = movies;
                self.show_history = false;
                self.fetch_history()
            }
            Err(err) => {
                if err.uses_fallback() {
                    self.recommendations = fallback_movies();
                }
                self.error = Some(err.to_string());
                (self, Vec::new())
            }
        }
    }

    fn cancel_submit(mut self) -> (Self, Vec<Effect>) {
        match self.pending_submit.take() {
            Some(request) => {
                self.loading = false;
                (self, vec![Effect::Cancel { request }])
            }
            None => (self, Vec::new()),
        }
    }

    fn toggle_history(self) -> (Self, Vec<Effect>) {
        if self.show_history {
            let mut next = self;
            next.show_history = false;
            return (next, Vec::new());
        }
        let (mut next, effects) = self.fetch_history();
        next.show_history = true;
        (next, effects)
    }

    fn fetch_history(mut self) -> (Self, Vec<Effect>) {
        let request = self.next_request();
        self.latest_history = Some(request);
        (self, vec![Effect::FetchHistory { request }])
    }

    fn load_history(mut self, request: RequestId, result: Result<Vec<HistoryEntry>, String>) -> Self {
        if self.latest_history != Some(request) {
            return self;
        }
        // Failures keep the previous list.
        if let Ok(entries) = result {
            self.history = entries;
        }
        self
    }
}
