//! The REST boundary consumed by the dashboard.

use crate::error::ApiError;
use crate::models::CreateExperiment;

/// Client for the two experiment endpoints.
///
/// Implementations cover the real transport (`gloo-net` in the browser)
/// and in-memory fakes in tests. Futures are deliberately not required to
/// be `Send`: the dashboard runs on a single-threaded event loop.
#[allow(async_fn_in_trait)]
pub trait ExperimentsApi {
    /// `GET /api/experiments`.
    ///
    /// Returns the raw response body on HTTP success so the store can
    /// apply its own defensive decode; see
    /// [`crate::store::decode_experiment_list`].
    async fn list_experiments(&self) -> Result<String, ApiError>;

    /// `POST /api/experiments` with the given payload.
    ///
    /// Only the HTTP status is consumed: the response body on success is
    /// ignored, and every non-success status maps to [`ApiError::Status`].
    async fn create_experiment(&self, req: &CreateExperiment) -> Result<(), ApiError>;
}
