//! The experiment store: the authoritative client-side view of the
//! experiment collection.

use serde_json::Value;
use tracing::warn;

use crate::api::ExperimentsApi;
use crate::error::ApiError;
use crate::models::Experiment;

/// Client-side copy of the experiment collection plus a loading indicator.
///
/// The store is refreshed wholesale: every completed list request replaces
/// the collection, with no incremental merge. When requests overlap, the
/// last response to arrive wins. List order is whatever the backend
/// returned.
#[derive(Debug, Clone)]
pub struct ExperimentStore {
    experiments: Vec<Experiment>,
    loading: bool,
}

impl ExperimentStore {
    /// An empty store with the loading indicator raised.
    ///
    /// The indicator flips to false exactly once, when the first refresh
    /// completes either way; later refreshes never raise it again.
    pub fn new() -> Self {
        Self {
            experiments: Vec::new(),
            loading: true,
        }
    }

    /// The current collection, for rendering.
    pub fn experiments(&self) -> &[Experiment] {
        &self.experiments
    }

    /// Whether the initial fetch is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Fetch the collection from the list endpoint and apply the result.
    ///
    /// Failures do not escape: a transport error or non-success status
    /// leaves the previous collection in place, a malformed body degrades
    /// to an empty collection. Both are logged, neither is surfaced.
    pub async fn refresh<A: ExperimentsApi>(&mut self, api: &A) {
        let outcome = api.list_experiments().await;
        self.apply_refresh(outcome);
    }

    /// Apply the outcome of a list request.
    ///
    /// The pure half of [`ExperimentStore::refresh`], split off so that
    /// reactive frontends can await the request without holding the store
    /// across the await point.
    pub fn apply_refresh(&mut self, outcome: Result<String, ApiError>) {
        match outcome {
            Ok(body) => self.experiments = decode_experiment_list(&body),
            Err(err) => warn!("failed to fetch experiments: {err}"),
        }
        self.loading = false;
    }
}

impl Default for ExperimentStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a list-endpoint body, defaulting to an empty collection.
///
/// Only a JSON array of well-formed experiments is accepted. Anything else
/// (invalid JSON, a non-array payload such as `{"error": ...}`, an array
/// with malformed records) is treated as "no experiments" rather than
/// propagated.
pub fn decode_experiment_list(body: &str) -> Vec<Experiment> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(err) => {
            warn!("experiment list is not valid JSON: {err}");
            return Vec::new();
        }
    };
    if !value.is_array() {
        warn!("experiment list endpoint returned a non-array payload");
        return Vec::new();
    }
    match serde_json::from_value(value) {
        Ok(list) => list,
        Err(err) => {
            warn!("failed to decode experiment list: {err}");
            Vec::new()
        }
    }
}
