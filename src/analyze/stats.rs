/// Running mean, updated one sample at a time. The update order matters for
/// the exact bits of the result; an empty slice averages to 0.0.
pub fn average<T>(samples: &[T]) -> f64
where
    T: Copy + Into<f64>,
{
    let mut avg = 0.0;
    for (index, sample) in samples.iter().enumerate() {
        let value: f64 = (*sample).into();
        avg += (value - avg) / (index + 1) as f64;
    }
    avg
}

/// Element at `len / 2` of the sorted samples: the upper-middle one for even
/// counts. Sorts a private copy; an empty slice has median 0.0.
pub fn median<T>(samples: &[T]) -> f64
where
    T: Copy + Ord + Into<f64>,
{
    if samples.is_empty() {
        return 0.0;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_unstable();
    sorted[sorted.len() / 2].into()
}
