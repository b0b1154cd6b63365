//! Tests for ValueGroups.

use crate::neighbor::ValueGroups;

fn assert_partition(groups: &ValueGroups, n: usize) {
    let mut seen = vec![0usize; n];
    for id in 0..groups.range_len() {
        for &pos in groups.members(id) {
            seen[pos] += 1;
        }
    }
    assert!(seen.iter().all(|&c| c == 1), "not a partition: {seen:?}");
}

#[test]
fn rebuild_groups_by_value() {
    let mut groups = ValueGroups::new(0, 3);
    groups.rebuild(&[1, 1, 2, 3]);

    assert_eq!(groups.used_values(), 3);
    assert!(groups.members(0).is_empty());
    assert_eq!(groups.members(1), &[0, 1]);
    assert_eq!(groups.members(2), &[2]);
    assert_eq!(groups.members(3), &[3]);
    assert_partition(&groups, 4);
}

#[test]
fn rebuild_with_negative_offset() {
    let mut groups = ValueGroups::new(-5, 5);
    groups.rebuild(&[-5, 5, 0, -5]);

    assert_eq!(groups.range_len(), 11);
    assert_eq!(groups.group_of(-5), 0);
    assert_eq!(groups.value_of(10), 5);
    assert_eq!(groups.members(groups.group_of(-5)), &[0, 3]);
    assert_eq!(groups.used_values(), 3);
}

#[test]
fn rebuild_replaces_previous_snapshot() {
    let mut groups = ValueGroups::new(0, 4);
    groups.rebuild(&[0, 1, 2, 3, 4]);
    assert_eq!(groups.used_values(), 5);

    groups.rebuild(&[4, 4, 4, 4, 4]);
    assert_eq!(groups.used_values(), 1);
    assert_eq!(groups.members(4), &[0, 1, 2, 3, 4]);
    assert_eq!(groups.non_empty().count(), 1);
    assert_partition(&groups, 5);
}

#[test]
fn used_values_counts_non_empty_groups() {
    let mut groups = ValueGroups::new(0, 9);
    let values = [3, 7, 3, 9, 0, 7, 7, 1];
    groups.rebuild(&values);
    assert_eq!(groups.used_values(), groups.non_empty().count());
    assert_eq!(groups.used_values(), 5);
    assert_partition(&groups, values.len());
}

#[test]
fn empty_snapshot() {
    let mut groups = ValueGroups::new(2, 2);
    groups.rebuild(&[]);
    assert_eq!(groups.used_values(), 0);
    assert_eq!(groups.range_len(), 1);
}

#[test]
fn occupied_lists_groups_in_first_seen_order() {
    let mut groups = ValueGroups::new(0, 9);
    groups.rebuild(&[7, 2, 7, 5, 2]);
    assert_eq!(groups.occupied(), &[7, 2, 5]);

    groups.rebuild(&[1, 7]);
    assert_eq!(groups.occupied(), &[1, 7]);
    assert!(groups.members(2).is_empty());
    assert!(groups.members(5).is_empty());
    assert_eq!(groups.members(7), &[1]);
    assert_partition(&groups, 2);
}

#[test]
fn wide_range_rebuilds_only_touch_occupied_groups() {
    let mut groups = ValueGroups::new(0, 1 << 20);
    assert_eq!(groups.max_val(), 1 << 20);
    for shift in 0..50 {
        let values = [shift, 1 << 20, shift * 1000];
        groups.rebuild(&values);
        let expected = if shift == 0 { 2 } else { 3 };
        assert_eq!(groups.used_values(), expected);
        assert_eq!(groups.members(groups.group_of(1 << 20)), &[1]);
    }
    assert_eq!(groups.non_empty().count(), 3);
}
