use super::*;

use std::cell::RefCell;

#[test]
fn gentle_motion_declarations() {
    let decls = FloatMotion::GENTLE.css_declarations();
    assert_eq!(decls[0], ("--float-from", "-10px".to_owned()));
    assert_eq!(decls[1], ("--float-to", "10px".to_owned()));
    assert_eq!(decls[2], ("--float-scale", "1".to_owned()));
    assert_eq!(decls[3], ("animation", "float 4000ms ease-in-out infinite alternate".to_owned()));
}

#[test]
fn drift_motion_swells() {
    let decls = FloatMotion::DRIFT.css_declarations();
    assert_eq!(decls[1].1, "20px");
    assert_eq!(decls[2].1, "1.05");
}

/// Records what it was asked to animate.
#[derive(Default)]
struct RecordingAnimator {
    seen: RefCell<Vec<(String, FloatMotion)>>,
}

impl Animator for RecordingAnimator {
    type Node = String;

    fn float(&self, nodes: &[Self::Node], motion: &FloatMotion) {
        self.seen.borrow_mut().extend(nodes.iter().map(|n| (n.clone(), *motion)));
    }
}

#[test]
fn animator_receives_every_node() {
    let animator = RecordingAnimator::default();
    let nodes = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];
    animator.float(&nodes, &FloatMotion::GENTLE);
    let seen = animator.seen.borrow();
    assert_eq!(seen.len(), 3);
    assert!(seen.iter().all(|(_, m)| *m == FloatMotion::GENTLE));
}

#[test]
fn entered_view_keeps_only_intersecting_nodes() {
    let batch = vec![("hero", true), ("about", false), ("services", true)];
    assert_eq!(entered_view(batch), vec!["hero", "services"]);
}

#[test]
fn entered_view_of_offscreen_batch_is_empty() {
    let batch = vec![("projects", false), ("contact", false)];
    assert!(entered_view(batch).is_empty());
}

#[test]
fn reveal_classes_are_distinct_css_identifiers() {
    let classes = [REVEAL_CLASS, REVEALED_CLASS, REVEAL_ARMED_CLASS];
    for class in classes {
        assert!(!class.is_empty());
        assert!(class.chars().all(|c| c.is_ascii_lowercase() || c == '-'));
    }
    assert_ne!(REVEAL_CLASS, REVEALED_CLASS);
    assert_ne!(REVEALED_CLASS, REVEAL_ARMED_CLASS);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
}
