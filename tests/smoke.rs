//! Integration smoke tests for `gpa_tracker`

use gpa_tracker::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}
