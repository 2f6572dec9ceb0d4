use rand::seq::{index, SliceRandom};
use rand::Rng;


/// Draws `amount` items uniformly without replacement. Returns `None` when the pool is too small.
pub fn draw<T: Clone, R: Rng + ?Sized>(pool: &[T], amount: usize, rng: &mut R) -> Option<Vec<T>> {
    if amount > pool.len() {
        return None;
    }
    if amount == 0 {
        return Some(Vec::new());
    }
    Some(
        index::sample(rng, pool.len(), amount)
            .into_iter()
            .map(|i| pool[i].clone())
            .collect(),
    )
}

pub fn shuffle<T, R: Rng + ?Sized>(items: &mut Vec<T>, rng: &mut R) {
    items.as_mut_slice().shuffle(rng);
}

/// Integer share of `total`, rounded down.
pub fn share(total: usize, percent: usize) -> usize {
    let share = total as u128 * percent as u128 / 100;
    share.min(usize::MAX as u128) as usize
}
