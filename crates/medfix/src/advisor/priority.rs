use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::sheet::MaintenanceRecord;

use super::error::AdvisorError;

/// Reasoning attached to the fallback assessment.
pub const FALLBACK_REASONING: &str = "Gagal menganalisis otomatis.";

/// Repair urgency, labelled the way the maintenance team writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "Rendah")]
    Low,
    #[serde(rename = "Sedang")]
    Medium,
    #[serde(rename = "Tinggi")]
    High,
    #[serde(rename = "Kritis")]
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Rendah",
            Priority::Medium => "Sedang",
            Priority::High => "Tinggi",
            Priority::Critical => "Kritis",
        }
    }

    /// Maps free text from a model to a priority.
    ///
    /// Labels are checked from lowest to highest and the last one contained
    /// in `text` wins; text containing no label maps to `Medium`.
    pub fn from_model_label(text: &str) -> Self {
        Self::ALL
            .into_iter()
            .filter(|p| text.contains(p.label()))
            .last()
            .unwrap_or(Priority::Medium)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The free-text fields of one record sent for assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryRequest {
    pub complaint: String,
    pub item_name: String,
    pub room_name: String,
}

impl AdvisoryRequest {
    pub fn new(
        complaint: impl Into<String>,
        item_name: impl Into<String>,
        room_name: impl Into<String>,
    ) -> Self {
        Self {
            complaint: complaint.into(),
            item_name: item_name.into(),
            room_name: room_name.into(),
        }
    }

    pub fn from_record(record: &MaintenanceRecord) -> Self {
        Self::new(
            record.complaint_type.clone(),
            record.item_name.clone(),
            record.room_name.clone(),
        )
    }

    /// Fails with [`AdvisorError::MissingText`] when the complaint is blank.
    pub fn require_text(&self) -> Result<(), AdvisorError> {
        if self.complaint.trim().is_empty() {
            Err(AdvisorError::MissingText)
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityAssessment {
    pub priority: Priority,
    pub reasoning: String,
}

impl PriorityAssessment {
    pub fn new(priority: Priority, reasoning: impl Into<String>) -> Self {
        Self {
            priority,
            reasoning: reasoning.into(),
        }
    }

    /// Returned whenever an assessment cannot be made.
    pub fn fallback() -> Self {
        Self::new(Priority::Medium, FALLBACK_REASONING)
    }
}

/// Best-effort priority classification for one complaint.
///
/// Implementors provide `assess`; callers use `advise`, which never fails.
#[async_trait]
pub trait PriorityAdvisor: Send + Sync {
    async fn assess(&self, request: &AdvisoryRequest) -> Result<PriorityAssessment, AdvisorError>;

    /// Like `assess`, but any error is logged and replaced by
    /// [`PriorityAssessment::fallback`].
    async fn advise(&self, request: &AdvisoryRequest) -> PriorityAssessment {
        match self.assess(request).await {
            Ok(assessment) => assessment,
            Err(e) => {
                log::warn!("Priority advisory failed, using fallback: {}", e);
                PriorityAssessment::fallback()
            }
        }
    }
}
