use super::*;

#[test]
fn starts_hidden() {
    assert!(!RevealState::default().revealed);
}

#[test]
fn out_of_view_observations_do_not_reveal() {
    let mut reveal = RevealState::default();
    assert!(!reveal.observe(false));
    assert!(!reveal.observe(false));
    assert!(!reveal.revealed);
}

#[test]
fn first_intersection_reveals_once() {
    let mut reveal = RevealState::default();
    assert!(reveal.observe(true));
    assert!(reveal.revealed);
    assert!(!reveal.observe(true));
}

#[test]
fn leaving_viewport_never_reverts() {
    let mut reveal = RevealState::default();
    reveal.observe(true);
    assert!(!reveal.observe(false));
    assert!(reveal.revealed);
}
