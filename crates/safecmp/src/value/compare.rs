use crate::value::{Value, ValueTag, numeric::Number};
use std::cmp::Ordering;
use thiserror::Error as ThisError;

///
/// Incomparable
///
/// Native ordering was refused for this pair of variants.
/// Always resolved by the total comparator; never returned to callers.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[error("ordering not supported between {left} and {right} values")]
pub(crate) struct Incomparable {
    pub(crate) left: ValueTag,
    pub(crate) right: ValueTag,
}

impl Incomparable {
    const fn between(left: &Value, right: &Value) -> Self {
        Self {
            left: left.tag(),
            right: right.tag(),
        }
    }
}

/// Native three-way comparison.
///
/// - `Ok(Some(_))` the pair is ordered
/// - `Ok(None)` the pair is comparable but unordered (NaN somewhere)
/// - `Err(_)` the variants refuse ordering altogether
pub(crate) fn native_cmp(left: &Value, right: &Value) -> Result<Option<Ordering>, Incomparable> {
    if let (Some(a), Some(b)) = (Number::of(left), Number::of(right)) {
        return Ok(a.cmp_exact(b));
    }

    match (left, right) {
        (Value::Text(a), Value::Text(b)) => Ok(Some(a.cmp(b))),
        (Value::Blob(a), Value::Blob(b)) => Ok(Some(a.cmp(b))),
        (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => {
            native_cmp_seq(a, b)
        }
        _ => Err(Incomparable::between(left, right)),
    }
}

/// Native equality. Never fails: pairs from different families are unequal.
pub(crate) fn native_eq(left: &Value, right: &Value) -> bool {
    if let (Some(a), Some(b)) = (Number::of(left), Number::of(right)) {
        return a.cmp_exact(b) == Some(Ordering::Equal);
    }

    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Text(a), Value::Text(b)) => a == b,
        (Value::Blob(a), Value::Blob(b)) => a == b,
        (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => {
            native_eq_seq(a, b)
        }
        (Value::Map(a), Value::Map(b)) => native_eq_map(a, b),
        (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
        _ => false,
    }
}

// The first index whose elements differ decides, compared natively.
// Only when one sequence is a prefix of the other does length decide.
fn native_cmp_seq(left: &[Value], right: &[Value]) -> Result<Option<Ordering>, Incomparable> {
    for (left, right) in left.iter().zip(right) {
        if !native_eq(left, right) {
            return native_cmp(left, right);
        }
    }

    Ok(Some(left.len().cmp(&right.len())))
}

fn native_eq_seq(left: &[Value], right: &[Value]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(left, right)| native_eq(left, right))
}

// Maps are unordered: every entry must have an equal counterpart.
fn native_eq_map(left: &[(Value, Value)], right: &[(Value, Value)]) -> bool {
    left.len() == right.len()
        && left.iter().all(|(left_key, left_value)| {
            right.iter().any(|(right_key, right_value)| {
                native_eq(left_key, right_key) && native_eq(left_value, right_value)
            })
        })
}
