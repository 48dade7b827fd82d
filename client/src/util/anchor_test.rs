use super::*;

#[test]
fn target_compensates_for_navbar() {
    assert!((scroll_target(500.0, 0.0) - 430.0).abs() < f64::EPSILON);
    assert!((scroll_target(100.0, 1200.0) - 1230.0).abs() < f64::EPSILON);
}

#[test]
fn target_never_goes_above_page_top() {
    assert!((scroll_target(20.0, 0.0) - 0.0).abs() < f64::EPSILON);
}

#[test]
fn section_href_prefixes_hash() {
    assert_eq!(section_href("projects"), "#projects");
}
