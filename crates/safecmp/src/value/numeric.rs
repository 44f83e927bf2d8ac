use crate::value::Value;
use std::cmp::Ordering;

// 2^64; every i64 and u64 lies strictly inside (-2^64, 2^64).
const INT_BOUND: f64 = 18_446_744_073_709_551_616.0;

///
/// Number
///
/// Numeric view of Bool / Int / Uint / Float used for exact cross-variant
/// comparison. Integers widen to i128 so i64 and u64 never overflow.
///

#[derive(Clone, Copy, Debug)]
pub(crate) enum Number {
    Int(i128),
    Float(f64),
}

impl Number {
    pub(crate) fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Int(i128::from(*b))),
            Value::Int(i) => Some(Self::Int(i128::from(*i))),
            Value::Uint(u) => Some(Self::Int(i128::from(*u))),
            Value::Float(f) => Some(Self::Float(*f)),
            _ => None,
        }
    }

    /// Exact comparison; `None` only when a NaN is involved.
    pub(crate) fn cmp_exact(self, other: Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(&b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(&b),
            (Self::Int(a), Self::Float(b)) => cmp_int_float(a, b),
            (Self::Float(a), Self::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

// Compare against the float's floor in integer space so integers above 2^53
// are not rounded through f64.
#[allow(clippy::cast_possible_truncation)]
fn cmp_int_float(int: i128, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }

    let floor = float.floor();
    if floor >= INT_BOUND {
        return Some(Ordering::Less);
    }
    if floor < -INT_BOUND {
        return Some(Ordering::Greater);
    }

    let whole = floor as i128;
    match int.cmp(&whole) {
        Ordering::Equal if float > floor => Some(Ordering::Less),
        ord => Some(ord),
    }
}

///
/// TESTS
///
