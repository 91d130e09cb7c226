//! The creation form controller: draft state for the "new experiment"
//! modal and the submit workflow.

use tracing::warn;

use crate::api::ExperimentsApi;
use crate::config::resolve_config;
use crate::models::CreateExperiment;
use crate::store::ExperimentStore;

/// Transient state of the creation modal.
///
/// The draft lives only in memory: it is discarded on cancel and on a
/// successful submission, and never persisted across reloads. A failed
/// submission leaves the draft untouched so the user can edit and retry.
///
/// Modal state machine: `Closed` -(open)-> `Editing` -(submit ok /
/// cancel)-> `Closed`; a failed submit loops back to `Editing`.
#[derive(Debug, Clone, Default)]
pub struct CreationForm {
    name: String,
    raw_config: String,
    visible: bool,
}

impl CreationForm {
    /// A closed modal with an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// User-entered experiment name. May be empty; presence is the
    /// backend's concern.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw config text: literal JSON or a bare run name, resolved only at
    /// submission.
    pub fn raw_config(&self) -> &str {
        &self.raw_config
    }

    /// Whether the modal is displayed.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the modal.
    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Hide the modal and discard the draft.
    pub fn cancel(&mut self) {
        self.visible = false;
        self.name.clear();
        self.raw_config.clear();
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_raw_config(&mut self, value: impl Into<String>) {
        self.raw_config = value.into();
    }

    /// Replace the raw config with the text content of an uploaded file.
    ///
    /// The content is not inspected here; parsing happens at submission,
    /// so a file that is not JSON follows the same run-name fallback as
    /// typed text.
    pub fn load_config_file(&mut self, contents: &str) {
        self.raw_config = contents.to_string();
    }

    /// Build the create payload from the current draft.
    pub fn payload(&self) -> CreateExperiment {
        CreateExperiment {
            name: self.name.clone(),
            config: resolve_config(&self.raw_config),
        }
    }

    /// The success transition: clear the draft and hide the modal.
    ///
    /// Split from [`CreationForm::submit`] so reactive frontends can apply
    /// it after awaiting the create call themselves.
    pub fn complete_submission(&mut self) {
        self.name.clear();
        self.raw_config.clear();
        self.visible = false;
    }

    /// Submit the draft: create the experiment, then refresh the store.
    ///
    /// The refresh is issued only after the create call has resolved, so
    /// the re-fetched list includes the record the backend just persisted.
    /// On a rejected create or a transport failure the draft is left
    /// untouched, the modal stays open and the failure is logged.
    pub async fn submit<A: ExperimentsApi>(&mut self, api: &A, store: &mut ExperimentStore) {
        let payload = self.payload();
        match api.create_experiment(&payload).await {
            Ok(()) => {
                self.complete_submission();
                store.refresh(api).await;
            }
            Err(err) => warn!("failed to create experiment: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn starts_closed_and_empty() {
        let form = CreationForm::new();
        assert!(!form.is_visible());
        assert_eq!(form.name(), "");
        assert_eq!(form.raw_config(), "");
    }

    #[test]
    fn open_shows_the_modal() {
        let mut form = CreationForm::new();
        form.open();
        assert!(form.is_visible());
    }

    #[test]
    fn cancel_discards_the_draft() {
        let mut form = CreationForm::new();
        form.open();
        form.set_name("exp");
        form.set_raw_config("my_run");

        form.cancel();
        assert!(!form.is_visible());
        assert_eq!(form.name(), "");
        assert_eq!(form.raw_config(), "");
    }

    #[test]
    fn file_contents_overwrite_typed_config() {
        let mut form = CreationForm::new();
        form.set_raw_config("typed");
        form.load_config_file(r#"{"model": "qwen"}"#);
        assert_eq!(form.raw_config(), r#"{"model": "qwen"}"#);
    }

    #[test]
    fn payload_resolves_json_config_verbatim() {
        let mut form = CreationForm::new();
        form.set_name("SNILS Qwen Test");
        form.set_raw_config(r#"{"run_name": "qwen_snils_extraction"}"#);

        let payload = form.payload();
        assert_eq!(payload.name, "SNILS Qwen Test");
        assert_eq!(payload.config, json!({"run_name": "qwen_snils_extraction"}));
    }

    #[test]
    fn payload_falls_back_to_run_name() {
        let mut form = CreationForm::new();
        form.set_raw_config("  qwen_baseline ");
        assert_eq!(form.payload().config, json!({"run_name": "qwen_baseline"}));
    }

    #[test]
    fn empty_draft_payload_is_allowed() {
        let form = CreationForm::new();
        let payload = form.payload();
        assert_eq!(payload.name, "");
        assert_eq!(payload.config, json!({"run_name": ""}));
    }

    #[test]
    fn complete_submission_resets_everything() {
        let mut form = CreationForm::new();
        form.open();
        form.set_name("exp");
        form.set_raw_config("cfg");

        form.complete_submission();
        assert!(!form.is_visible());
        assert_eq!(form.name(), "");
        assert_eq!(form.raw_config(), "");
    }
}
