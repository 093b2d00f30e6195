//! Row-wise evaluation, sequential or split across the rayon pool.

use arrow_array::{ArrowPrimitiveType, PrimitiveArray};
use rayon::prelude::*;

use crate::config::FunctionsConfig;

/// Builds an array of `num_rows` values by calling `eval` for each row index.
/// `None` produces a null row. Row order is preserved on both paths.
pub(crate) fn evaluate_rows<T, F>(
    num_rows: usize,
    config: &FunctionsConfig,
    eval: F,
) -> PrimitiveArray<T>
where
    T: ArrowPrimitiveType,
    F: Fn(usize) -> Option<T::Native> + Send + Sync,
{
    if config.is_parallel(num_rows) {
        let values: Vec<Option<T::Native>> = (0..num_rows)
            .into_par_iter()
            .with_min_len(config.min_rows_per_task.max(1))
            .map(eval)
            .collect();
        values.into_iter().collect()
    } else {
        (0..num_rows).map(eval).collect()
    }
}
