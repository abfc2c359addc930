//! Display scale derivation.

/// Widest bar, in marks, that any chart will draw.
pub const MAX_BAR_WIDTH: u64 = 50;

/// Number of individuals represented by one mark so that the largest of
/// `values` fits within `MAX_BAR_WIDTH` marks.
///
/// Always at least 1. No values at all is treated as a maximum of 0.
///
/// ```
/// use foxhare_sim::visualization::compute_scale;
///
/// assert_eq!(compute_scale(&[0]), 1);
/// assert_eq!(compute_scale(&[49, 50]), 2);
/// ```
pub fn compute_scale<'a, I>(values: I) -> u64
where
    I: IntoIterator<Item = &'a u64>,
{
    let max = values.into_iter().copied().max().unwrap_or(0);
    max / MAX_BAR_WIDTH + 1
}
