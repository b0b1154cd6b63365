//! Uniform draw of an eligible group.

use lnsforge_core::FragmentSet;
use rand::Rng;

/// Draws one set bit of `fragment` uniformly at random.
///
/// Picks a rank in `[0, cardinality)` and walks the set bits up to it, so
/// every eligible group is equally likely whatever its size. Returns `None`
/// when the fragment is empty. The fragment is not modified.
pub fn select_group<F, R>(fragment: &F, rng: &mut R) -> Option<usize>
where
    F: FragmentSet + ?Sized,
    R: Rng,
{
    let cardinality = fragment.cardinality();
    if cardinality == 0 {
        return None;
    }
    let mut rank = rng.random_range(0..cardinality);
    let mut id = fragment.next_set_bit(0)?;
    while rank > 0 {
        id = fragment.next_set_bit(id + 1)?;
        rank -= 1;
    }
    Some(id)
}
