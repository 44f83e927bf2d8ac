//! Extrema and sorting built on the total comparator.
//!
//! Variadic call sites become any `IntoIterator`: pass an array literal
//! (`[a, b, c]`) where a positional list would be used.

mod extrema;
mod sort;


use serde::{Deserialize, Serialize};

// re-exports
pub use extrema::{safe_max, safe_max_by_key, safe_min, safe_min_by_key};
pub use sort::{safe_sort, safe_sort_by_key, safe_sorted, safe_sorted_by_key};

///
/// Direction
///
/// Sort direction. `Desc` has the semantics of a reversed stable sort:
/// elements that rank equal keep their input order in both directions.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}
