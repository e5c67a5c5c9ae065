//! Application status values and risk constants.
//!
//! The stored `status` column is free text: officers may record any value.
//! These are the values the portal itself assigns or counts.

/// Applications scoring below this count as high risk on the dashboard.
pub const HIGH_RISK_SCORE: i64 = 50;

/// Risk label stored when the submitter gives none.
pub const DEFAULT_RISK: &str = "Unknown";

/// Id stored when the submitter gives none.
pub const DEFAULT_APPLICATION_ID: &str = "BIS-UNKNOWN";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}
