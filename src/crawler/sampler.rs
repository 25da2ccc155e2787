//! Uniform down-sampling of harvested records

use rand::Rng;

/// Reduces records to at most `max_count` entries
///
/// When there are no more than `max_count` records they are returned
/// unchanged, order included. Otherwise exactly `max_count` distinct
/// records are chosen uniformly without replacement; every subset of that
/// size is equally likely.
///
/// # Examples
///
/// ```
/// use article_harvest::crawler::sample;
///
/// let kept = sample(vec![1, 2, 3, 4, 5], 3);
/// assert_eq!(kept.len(), 3);
///
/// assert_eq!(sample(vec![1, 2, 3], 3), vec![1, 2, 3]);
/// ```
pub fn sample<T>(records: Vec<T>, max_count: usize) -> Vec<T> {
    sample_with_rng(records, max_count, &mut rand::rng())
}

/// [`sample`] with a caller-supplied random source
pub fn sample_with_rng<T, R: Rng + ?Sized>(records: Vec<T>, max_count: usize, rng: &mut R) -> Vec<T> {
    if records.len() <= max_count {
        return records;
    }

    let mut keep = vec![false; records.len()];
    for index in rand::seq::index::sample(rng, records.len(), max_count).iter() {
        keep[index] = true;
    }

    tracing::debug!("Sampled {} of {} records", max_count, records.len());

    records
        .into_iter()
        .zip(keep)
        .filter_map(|(record, keep)| keep.then_some(record))
        .collect()
}
