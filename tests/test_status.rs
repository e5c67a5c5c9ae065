//! Status value tests

use app_lib::domain::ApplicationStatus;

#[test]
fn as_str_matches_stored_values() {
    assert_eq!(ApplicationStatus::Pending.as_str(), "pending");
    assert_eq!(ApplicationStatus::Accepted.as_str(), "accepted");
    assert_eq!(ApplicationStatus::Rejected.as_str(), "rejected");
}
