use crate::error::ScoreError;
use crate::heap::{Heap, Order};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extremes<T> {
    pub minimum: T,
    pub maximum: T,
}

/// Minimum and maximum of `scores`.
///
/// Every score goes into a min-ordered and a max-ordered heap, and the two
/// roots are read without popping. The result is the same as a single
/// min/max scan. `scores` itself is never reordered.
pub fn find_extremes<T>(scores: &[T]) -> Result<Extremes<T>, ScoreError>
where
    T: Ord + Clone,
{
    let mut low = Heap::with_capacity(Order::Min, scores.len());
    let mut high = Heap::with_capacity(Order::Max, scores.len());
    for score in scores {
        low.push(score);
        high.push(score);
    }

    match (low.peek(), high.peek()) {
        (Some(&minimum), Some(&maximum)) => Ok(Extremes {
            minimum: minimum.clone(),
            maximum: maximum.clone(),
        }),
        _ => Err(ScoreError::InvalidInput),
    }
}
