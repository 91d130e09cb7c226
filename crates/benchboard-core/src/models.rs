//! Data models for the benchboard dashboard.

use serde::{Deserialize, Serialize};

/// A benchmark experiment as reported by the backend.
///
/// Records are owned by the backend: the dashboard re-fetches the full
/// collection and never mutates or deletes one. The backend sends more
/// fields than these (description, config, results summary); anything not
/// listed here is ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experiment {
    /// Opaque unique identifier assigned by the backend.
    pub id: String,
    pub name: String,
    /// Open-ended status token, e.g. "PENDING", "RUNNING", "COMPLETED".
    pub status: String,
    /// ISO-8601 creation timestamp. Rendered in locale format by the view,
    /// not otherwise parsed.
    pub created_at: String,
}

impl Experiment {
    /// Presentation bucket for this experiment's status token.
    pub fn status_bucket(&self) -> StatusBucket {
        match self.status.as_str() {
            "COMPLETED" => StatusBucket::Completed,
            "RUNNING" => StatusBucket::Running,
            _ => StatusBucket::Other,
        }
    }
}

/// The three-way grouping of status tokens used for display.
///
/// Everything that is not `COMPLETED` or `RUNNING` (failed, pending,
/// unknown tokens from newer backends) lands in `Other` and is rendered
/// without dedicated styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBucket {
    Completed,
    Running,
    Other,
}

/// Request body for `POST /api/experiments`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateExperiment {
    pub name: String,
    /// Resolved configuration. Any JSON value is legal here: objects from
    /// pasted or uploaded config files, or the `{"run_name": ...}` shorthand
    /// produced by [`crate::config::resolve_config`].
    pub config: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn experiment(status: &str) -> Experiment {
        Experiment {
            id: "e1".to_string(),
            name: "qwen_snils".to_string(),
            status: status.to_string(),
            created_at: "2025-11-03T10:15:00Z".to_string(),
        }
    }

    #[test]
    fn recognized_statuses_get_their_own_bucket() {
        assert_eq!(experiment("COMPLETED").status_bucket(), StatusBucket::Completed);
        assert_eq!(experiment("RUNNING").status_bucket(), StatusBucket::Running);
    }

    #[test]
    fn everything_else_is_other() {
        assert_eq!(experiment("PENDING").status_bucket(), StatusBucket::Other);
        assert_eq!(experiment("FAILED").status_bucket(), StatusBucket::Other);
        assert_eq!(experiment("running").status_bucket(), StatusBucket::Other);
        assert_eq!(experiment("").status_bucket(), StatusBucket::Other);
    }

    #[test]
    fn deserialization_ignores_extra_backend_fields() {
        let body = r#"{
            "id": "3f2b",
            "name": "baseline",
            "status": "COMPLETED",
            "created_at": "2025-11-03T10:15:00Z",
            "description": null,
            "config": {"run_name": "baseline"},
            "results_summary": {"accuracy": 0.91}
        }"#;
        let exp: Experiment = serde_json::from_str(body).unwrap();
        assert_eq!(exp.id, "3f2b");
        assert_eq!(exp.status_bucket(), StatusBucket::Completed);
    }

    #[test]
    fn create_payload_serializes_name_and_config() {
        let req = CreateExperiment {
            name: "SNILS Qwen Test".to_string(),
            config: serde_json::json!({"run_name": "qwen_snils_extraction"}),
        };
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "SNILS Qwen Test",
                "config": {"run_name": "qwen_snils_extraction"}
            })
        );
    }
}
