//! Cinerec Test Utilities
//!
//! Shared test infrastructure for the cinerec workspace:
//! - Proptest generators for movies, history entries, and submit failures
//! - Fixtures mirroring the backend's JSON payloads
//! - Helpers for driving [`ViewState`] through a sequence of messages

pub use cinerec_core::{
    fallback_movies, Effect, HistoryEntry, HistoryId, Movie, Msg, RenderMode, RequestId,
    SubmitError, SubmitOutcome, Timestamp, ViewState,
};

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

// ============================================================================
// FIXTURES
// ============================================================================

pub fn sample_movie(title: &str, genre: &str, year: i32) -> Movie {
    Movie::new(title, genre, format!("{} description", title), year)
}

/// A handful of movies from the backend catalogue.
pub fn sample_movies() -> Vec<Movie> {
    vec![
        sample_movie("Mad Max: Fury Road", "Action", 2015),
        sample_movie("Spirited Away", "Animation", 2001),
        sample_movie("Get Out", "Horror", 2017),
    ]
}

pub fn sample_timestamp() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 3, 5, 18, 7, 9)
        .single()
        .unwrap_or_default()
}

pub fn sample_history_entry(id: i64, user_input: &str) -> HistoryEntry {
    HistoryEntry {
        id: HistoryId(id),
        user_input: user_input.to_string(),
        timestamp: Some(sample_timestamp()),
        recommended_movies: sample_movies(),
    }
}

/// JSON for `POST /recommend` as the backend sends it.
pub fn recommend_response_json(movies: &[Movie]) -> serde_json::Value {
    serde_json::json!({ "recommendations": movies })
}

/// JSON for `GET /history`, with SQLite-formatted timestamps.
pub fn history_response_json(entries: &[HistoryEntry]) -> serde_json::Value {
    let rows: Vec<serde_json::Value> = entries
        .iter()
        .map(|entry| {
            serde_json::json!({
                "id": entry.id.0,
                "user_input": entry.user_input,
                "recommended_movies": entry.recommended_movies,
                "timestamp": entry
                    .timestamp
                    .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string()),
            })
        })
        .collect();
    serde_json::Value::Array(rows)
}

// ============================================================================
// STATE DRIVERS
// ============================================================================

/// Apply messages in order, collecting every effect emitted.
pub fn drive(state: ViewState, msgs: impl IntoIterator<Item = Msg>) -> (ViewState, Vec<Effect>) {
    msgs.into_iter()
        .fold((state, Vec::new()), |(state, mut effects), msg| {
            let (next, emitted) = state.reduce(msg);
            effects.extend(emitted);
            (next, effects)
        })
}

/// Id of the last `Recommend` effect in `effects`.
pub fn last_recommend(effects: &[Effect]) -> Option<RequestId> {
    effects.iter().rev().find_map(|effect| match effect {
        Effect::Recommend { request, .. } => Some(*request),
        _ => None,
    })
}

/// Id of the last `FetchHistory` effect in `effects`.
pub fn last_history_fetch(effects: &[Effect]) -> Option<RequestId> {
    effects.iter().rev().find_map(|effect| match effect {
        Effect::FetchHistory { request } => Some(*request),
        _ => None,
    })
}

// ============================================================================
// GENERATORS
// ============================================================================

pub fn arb_movie() -> impl Strategy<Value = Movie> {
    (
        "[A-Za-z0-9 :]{1,40}",
        prop_oneof![
            Just("Action"),
            Just("Sci-Fi"),
            Just("Drama"),
            Just("Crime"),
            Just("Thriller"),
            Just("Animation"),
        ],
        "[a-z ,.]{0,80}",
        1900i32..2030,
    )
        .prop_map(|(title, genre, description, year)| Movie::new(title, genre, description, year))
}

pub fn arb_movies() -> impl Strategy<Value = Vec<Movie>> {
    prop::collection::vec(arb_movie(), 0..8)
}

pub fn arb_history_entry() -> impl Strategy<Value = HistoryEntry> {
    (any::<u32>(), "[a-z ]{1,30}", arb_movies(), 0i64..2_000_000_000).prop_map(
        |(id, user_input, recommended_movies, secs)| HistoryEntry {
            id: HistoryId(i64::from(id)),
            user_input,
            timestamp: Utc.timestamp_opt(secs, 0).single(),
            recommended_movies,
        },
    )
}

/// Any failure a request can end in (validation is never a request outcome).
pub fn arb_request_failure() -> impl Strategy<Value = SubmitError> {
    prop_oneof![
        Just(SubmitError::Timeout),
        Just(SubmitError::Network),
        (400u16..600, proptest::option::of("[a-z ]{0,20}"))
            .prop_map(|(status, message)| SubmitError::server(status, message)),
        "[a-z ]{1,30}".prop_map(SubmitError::Client),
    ]
}

pub fn arb_outcome() -> impl Strategy<Value = SubmitOutcome> {
    prop_oneof![
        arb_movies().prop_map(Ok),
        arb_request_failure().prop_map(Err),
    ]
}

/// Input text that is empty after trimming.
pub fn arb_blank_input() -> impl Strategy<Value = String> {
    "[ \t\n\r]{0,12}"
}
