//! Domain constants shared by the use cases.

pub mod status;

pub use status::{ApplicationStatus, DEFAULT_APPLICATION_ID, DEFAULT_RISK, HIGH_RISK_SCORE};
