//! Total ordering for heterogeneous values: a comparator that never fails,
//! an operator wrapper built on it, and the `max` / `min` / `sorted`
//! helpers that need it.
//!
//! NOTE:
//! When two values have types that refuse to be ordered, the tiebreak falls
//! back to a per-process type id. That order is stable for the lifetime of
//! the process and is NOT reproducible across runs.
#![warn(unreachable_pub)]

pub mod aggregate;
pub mod compare;
pub mod error;
pub mod ext;
pub mod identity;
pub mod order;
pub mod value;

// re-exports
pub use aggregate::{
    Direction, safe_max, safe_max_by_key, safe_min, safe_min_by_key, safe_sort, safe_sort_by_key,
    safe_sorted, safe_sorted_by_key,
};
pub use compare::{CompareMode, compare, compare_i8, compare_with};
pub use error::SafeCmpError;
pub use ext::SafeOrdExt;
pub use identity::{TypeKey, type_key};
pub use order::OrderWrapper;
pub use value::{Value, ValueObject, ValueTag};

///
/// Prelude
///
/// Everything needed to compare, wrap, select and sort values.
///

pub mod prelude {
    pub use crate::{
        aggregate::{
            Direction, safe_max, safe_max_by_key, safe_min, safe_min_by_key, safe_sort,
            safe_sort_by_key, safe_sorted, safe_sorted_by_key,
        },
        compare::{CompareMode, compare, compare_with},
        error::SafeCmpError,
        ext::SafeOrdExt,
        order::OrderWrapper,
        value::{Value, ValueObject},
    };
}
