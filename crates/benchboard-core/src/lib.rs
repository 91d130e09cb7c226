//! benchboard-core: state machines for the benchboard dashboard.
//!
//! The dashboard lists benchmark experiments and creates new ones through
//! two REST calls. This crate owns everything that does not touch the DOM:
//! the wire model, the dual-mode config resolution, the
//! [`store::ExperimentStore`] and [`form::CreationForm`] state machines,
//! and the [`api::ExperimentsApi`] seam the frontend implements over
//! `gloo-net`.
//!
//! The dashboard is advisory, not the system of record: every request
//! failure is absorbed into a default value or a log line, never surfaced
//! as an error state. Nothing here panics on bad backend data.
//!
//! The crate is runtime-agnostic and compiles for both native targets
//! (tests) and `wasm32-unknown-unknown` (the frontend).

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod store;

pub use api::ExperimentsApi;
pub use config::resolve_config;
pub use error::ApiError;
pub use form::CreationForm;
pub use models::{CreateExperiment, Experiment, StatusBucket};
pub use store::{decode_experiment_list, ExperimentStore};
