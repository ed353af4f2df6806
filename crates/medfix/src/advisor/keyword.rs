//! Offline keyword-based priority advisor.
//!
//! Used when no remote model is configured. Matches complaint, item and room
//! text against known urgency patterns, most urgent group first.

use async_trait::async_trait;

use super::error::AdvisorError;
use super::priority::{AdvisoryRequest, Priority, PriorityAdvisor, PriorityAssessment};

struct UrgencyPattern {
    priority: Priority,
    keywords: &'static [&'static str],
    reasoning: &'static str,
}

/// Checked in order; the first group with a hit decides.
const PATTERNS: &[UrgencyPattern] = &[
    UrgencyPattern {
        priority: Priority::Critical,
        keywords: &[
            "oksigen",
            "oxygen",
            "gas medis",
            "kebakaran",
            "fire",
            "korsleting",
            "short circuit",
            "listrik padam",
            "power outage",
            "ventilator",
            "lift macet",
        ],
        reasoning: "Menyangkut keselamatan pasien atau utilitas vital.",
    },
    UrgencyPattern {
        priority: Priority::High,
        keywords: &[
            "bocor",
            "leak",
            "tidak menyala",
            "not working",
            "banjir",
            "flood",
            "pompa",
            "pump",
            "genset",
            "generator",
        ],
        reasoning: "Mengganggu operasional ruangan dan perlu segera ditangani.",
    },
    UrgencyPattern {
        priority: Priority::Medium,
        keywords: &[
            "rusak", "broken", "macet", "jammed", "berisik", "noisy", "kran",
        ],
        reasoning: "Kerusakan fungsional yang dapat dijadwalkan.",
    },
    UrgencyPattern {
        priority: Priority::Low,
        keywords: &[
            "cat dinding",
            "kotor",
            "dirty",
            "lampu redup",
            "goresan",
            "scratch",
        ],
        reasoning: "Perbaikan kosmetik tanpa dampak langsung pada layanan.",
    },
];

/// Pattern-matching advisor that needs no network access.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordAdvisor;

impl KeywordAdvisor {
    pub fn new() -> Self {
        Self
    }

    /// Classifies a request without going through the async trait.
    pub fn classify(&self, request: &AdvisoryRequest) -> Result<PriorityAssessment, AdvisorError> {
        request.require_text()?;

        let text = format!(
            "{} {} {}",
            request.complaint, request.item_name, request.room_name
        )
        .to_lowercase();

        PATTERNS
            .iter()
            .find(|pattern| pattern.keywords.iter().any(|kw| text.contains(kw)))
            .map(|pattern| PriorityAssessment::new(pattern.priority, pattern.reasoning))
            .ok_or(AdvisorError::NoMatch)
    }
}

#[async_trait]
impl PriorityAdvisor for KeywordAdvisor {
    async fn assess(&self, request: &AdvisoryRequest) -> Result<PriorityAssessment, AdvisorError> {
        self.classify(request)
    }
}
