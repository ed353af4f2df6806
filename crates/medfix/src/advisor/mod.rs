//! Best-effort repair priority advisory.
//!
//! A [`PriorityAdvisor`] never blocks the dashboard: callers go through
//! [`PriorityAdvisor::advise`], which turns every failure into a
//! medium-priority fallback.

pub mod error;
pub mod gemini;
pub mod keyword;
pub mod priority;

pub use error::AdvisorError;
pub use gemini::{parse_generate_response, GeminiAdvisor};
pub use keyword::KeywordAdvisor;
pub use priority::{
    AdvisoryRequest, Priority, PriorityAdvisor, PriorityAssessment, FALLBACK_REASONING,
};
