//! Index of recorded positions by shared value.

/// Recorded positions bucketed by their value.
///
/// Buckets cover the fixed range `[min_val, max_val]`, one per value, so a
/// group id is simply `value - min_val`. After [`rebuild`](Self::rebuild) the
/// buckets partition the positions of the snapshot. The ids of the non-empty
/// buckets are kept aside, so a rebuild only touches buckets the previous or
/// the new snapshot occupies.
///
/// # Example
///
/// ```
/// use lnsforge_solver::ValueGroups;
///
/// let mut groups = ValueGroups::new(0, 3);
/// groups.rebuild(&[1, 1, 2, 3]);
///
/// assert_eq!(groups.used_values(), 3);
/// assert_eq!(groups.members(groups.group_of(1)), &[0, 1]);
/// assert!(groups.members(groups.group_of(0)).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ValueGroups {
    min_val: i32,
    groups: Vec<Vec<usize>>,
    /// Ids of the non-empty buckets, in order of first appearance.
    occupied: Vec<usize>,
}

impl ValueGroups {
    /// Creates empty buckets for `[min_val, max_val]`.
    ///
    /// # Panics
    /// Panics if `max_val < min_val`.
    pub fn new(min_val: i32, max_val: i32) -> Self {
        assert!(max_val >= min_val, "empty value range");
        let len = (i64::from(max_val) - i64::from(min_val) + 1) as usize;
        Self {
            min_val,
            groups: vec![Vec::new(); len],
            occupied: Vec::new(),
        }
    }

    /// Replaces the buckets with those of a new snapshot.
    ///
    /// Every value must lie in the range given at construction.
    pub fn rebuild(&mut self, values: &[i32]) {
        for id in self.occupied.drain(..) {
            self.groups[id].clear();
        }
        for (pos, &value) in values.iter().enumerate() {
            let id = self.group_of(value);
            debug_assert!(id < self.groups.len(), "value {value} out of range");
            let group = &mut self.groups[id];
            if group.is_empty() {
                self.occupied.push(id);
            }
            group.push(pos);
        }
    }

    /// Number of values occupied by at least one position.
    pub fn used_values(&self) -> usize {
        self.occupied.len()
    }

    /// Ids of the non-empty groups, in order of first appearance.
    pub fn occupied(&self) -> &[usize] {
        &self.occupied
    }

    /// Number of buckets, i.e. the width of the value range.
    pub fn range_len(&self) -> usize {
        self.groups.len()
    }

    pub fn min_val(&self) -> i32 {
        self.min_val
    }

    pub fn max_val(&self) -> i32 {
        self.value_of(self.groups.len() - 1)
    }

    /// Group id of `value`.
    pub fn group_of(&self, value: i32) -> usize {
        (i64::from(value) - i64::from(self.min_val)) as usize
    }

    /// Value keyed by group `id`.
    pub fn value_of(&self, id: usize) -> i32 {
        (i64::from(self.min_val) + id as i64) as i32
    }

    /// Positions recorded with the value of group `id`.
    pub fn members(&self, id: usize) -> &[usize] {
        &self.groups[id]
    }

    /// Iterates over `(group id, members)` for non-empty groups.
    pub fn non_empty(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.occupied
            .iter()
            .map(|&id| (id, self.groups[id].as_slice()))
    }
}
