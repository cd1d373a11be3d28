//! Cinerec Core - Entity Types and View State
//!
//! Pure data structures and the view state machine. All other crates depend
//! on this. This crate performs no I/O: network calls are requested through
//! [`Effect`] values and executed by the client runtime.

pub mod error;
pub mod fallback;
pub mod state;
pub mod types;
pub mod wire;

pub use error::{ErrorKind, SubmitError, SubmitOutcome};
pub use fallback::fallback_movies;
pub use state::{Effect, Msg, RenderMode, RequestId, ViewState};
pub use types::{parse_timestamp, HistoryEntry, HistoryId, Movie, Timestamp, TimestampError};
pub use wire::{server_message, HealthResponse, RecommendRequest, RecommendResponse};
