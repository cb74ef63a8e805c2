use super::*;

// =============================================================
// Timer scheduling set
// =============================================================

#[test]
fn new_ids_are_scheduled_exactly_once() {
    let mut scheduled = HashSet::new();
    assert_eq!(fresh_unscheduled(&mut scheduled, &[1, 2]), vec![1, 2]);
    assert_eq!(fresh_unscheduled(&mut scheduled, &[1, 2, 3]), vec![3]);
}

#[test]
fn dismissed_ids_are_pruned_from_the_set() {
    let mut scheduled = HashSet::new();
    fresh_unscheduled(&mut scheduled, &[1, 2, 3]);
    fresh_unscheduled(&mut scheduled, &[2]);
    assert_eq!(scheduled.len(), 1);
    assert!(scheduled.contains(&2));
}

#[test]
fn set_stays_bounded_across_many_toast_lifetimes() {
    let mut scheduled = HashSet::new();
    for id in 0..1000u64 {
        // One toast visible at a time, each dismissed before the next.
        let fresh = fresh_unscheduled(&mut scheduled, &[id]);
        assert_eq!(fresh, vec![id]);
    }
    assert_eq!(scheduled.len(), 1);
}

#[test]
fn empty_queue_clears_the_set() {
    let mut scheduled = HashSet::new();
    fresh_unscheduled(&mut scheduled, &[7, 8]);
    assert!(fresh_unscheduled(&mut scheduled, &[]).is_empty());
    assert!(scheduled.is_empty());
}
