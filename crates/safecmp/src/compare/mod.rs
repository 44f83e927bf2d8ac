
use crate::{
    identity::type_key,
    value::{Incomparable, Value, native_cmp},
};
use log::trace;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// CompareMode
///
/// Direct      → NaN orders before other numbers; two NaNs are equal.
/// NanAsEqual  → any unordered pair is equal. Used by sorting so NaNs stay
///               where they are instead of drifting.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum CompareMode {
    #[default]
    Direct,
    NanAsEqual,
}

/// Total comparator over any two values.
///
/// Resolution order:
/// 1. Native ordering when the pair supports it
/// 2. NaN handling for comparable but unordered pairs (see `CompareMode`)
/// 3. Null before everything, then type identity keys for incomparable types
///
/// Never fails. The type-key tiebreak is stable within a process only.
#[must_use]
pub fn compare(left: &Value, right: &Value) -> Ordering {
    compare_with(left, right, CompareMode::Direct)
}

/// Total comparator with an explicit NaN mode.
#[must_use]
pub fn compare_with(left: &Value, right: &Value, mode: CompareMode) -> Ordering {
    match native_cmp(left, right) {
        Ok(Some(ord)) => ord,
        Ok(None) => unordered_cmp(left, right, mode),
        Err(err) => incomparable_cmp(left, right, err),
    }
}

/// `compare` as the legacy -1 / 0 / +1 integer.
#[must_use]
pub fn compare_i8(left: &Value, right: &Value) -> i8 {
    compare(left, right) as i8
}

fn unordered_cmp(left: &Value, right: &Value, mode: CompareMode) -> Ordering {
    if mode == CompareMode::NanAsEqual {
        return Ordering::Equal;
    }

    match (left.is_nan_like(), right.is_nan_like()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, _) => Ordering::Greater,
    }
}

fn incomparable_cmp(left: &Value, right: &Value, err: Incomparable) -> Ordering {
    match (left, right) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        _ => {
            let left_key = type_key(left);
            let right_key = type_key(right);
            trace!("{err}; ordering by type key {left_key} vs {right_key}");

            left_key.cmp(&right_key)
        }
    }
}
