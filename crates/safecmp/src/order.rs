use crate::{
    compare::{CompareMode, compare_with},
    value::{Value, value_of},
};
use derive_more::Deref;
use std::{borrow::Borrow, cmp::Ordering, fmt};

///
/// OrderWrapper
///
/// Holds one value (owned or borrowed) and answers `<`, `<=`, `>`, `>=`
/// through the total comparator in NaN-as-equal mode, so relational
/// operators never refuse a pair.
///
/// `==` / `!=` stay native value equality and do NOT go through the
/// comparator. A NaN wrapper is therefore neither `<` nor `>` another
/// number, yet not `==` to it either.
///

#[derive(Clone, Copy, Debug, Deref)]
pub struct OrderWrapper<V = Value>(V);

impl<V: Borrow<Value>> OrderWrapper<V> {
    pub const fn new(value: V) -> Self {
        Self(value)
    }

    /// The wrapped value.
    #[must_use]
    pub fn get(&self) -> &Value {
        value_of(&self.0)
    }

    pub fn into_inner(self) -> V {
        self.0
    }

    fn rank(&self, other: &Value) -> Ordering {
        compare_with(self.get(), other, CompareMode::NanAsEqual)
    }
}

impl<V: Borrow<Value>> From<V> for OrderWrapper<V> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

impl<V: Borrow<Value>> fmt::Display for OrderWrapper<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrderWrapper({})", self.get())
    }
}

///
/// Equality
///

impl<V, W> PartialEq<OrderWrapper<W>> for OrderWrapper<V>
where
    V: Borrow<Value>,
    W: Borrow<Value>,
{
    fn eq(&self, other: &OrderWrapper<W>) -> bool {
        self.get() == other.get()
    }
}

impl<V: Borrow<Value>> PartialEq<Value> for OrderWrapper<V> {
    fn eq(&self, other: &Value) -> bool {
        self.get() == other
    }
}

///
/// Ordering
///

impl<V, W> PartialOrd<OrderWrapper<W>> for OrderWrapper<V>
where
    V: Borrow<Value>,
    W: Borrow<Value>,
{
    fn partial_cmp(&self, other: &OrderWrapper<W>) -> Option<Ordering> {
        Some(self.rank(other.get()))
    }

    fn lt(&self, other: &OrderWrapper<W>) -> bool {
        self.rank(other.get()) == Ordering::Less
    }

    fn le(&self, other: &OrderWrapper<W>) -> bool {
        self.rank(other.get()) != Ordering::Greater
    }

    fn gt(&self, other: &OrderWrapper<W>) -> bool {
        self.rank(other.get()) == Ordering::Greater
    }

    fn ge(&self, other: &OrderWrapper<W>) -> bool {
        self.rank(other.get()) != Ordering::Less
    }
}

impl<V: Borrow<Value>> PartialOrd<Value> for OrderWrapper<V> {
    fn partial_cmp(&self, other: &Value) -> Option<Ordering> {
        Some(self.rank(other))
    }

    fn lt(&self, other: &Value) -> bool {
        self.rank(other) == Ordering::Less
    }

    fn le(&self, other: &Value) -> bool {
        self.rank(other) != Ordering::Greater
    }

    fn gt(&self, other: &Value) -> bool {
        self.rank(other) == Ordering::Greater
    }

    fn ge(&self, other: &Value) -> bool {
        self.rank(other) != Ordering::Less
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    struct Opaque;

    // (left, right) pairs where the left side always ranks first
    fn ranked_pairs() -> Vec<(Value, Value)> {
        vec![
            (Value::Null, Value::Int(1)),
            (Value::Int(1), Value::List(Vec::new())),
            (Value::Null, Value::List(Vec::new())),
            (Value::Null, Value::object(Opaque)),
            (Value::Int(1), Value::object(Opaque)),
            (Value::Int(1), Value::Int(2)),
        ]
    }

    #[test]
    fn operator_table_against_raw_values() {
        for (left, right) in ranked_pairs() {
            let wrapped = OrderWrapper::new(left);

            assert!(wrapped < right, "{wrapped} < {right}");
            assert!(wrapped <= right, "{wrapped} <= {right}");
            assert!(!(wrapped == right), "{wrapped} == {right}");
            assert!(wrapped != right, "{wrapped} != {right}");
            assert!(!(wrapped > right), "{wrapped} > {right}");
            assert!(!(wrapped >= right), "{wrapped} >= {right}");
        }
    }

    #[test]
    fn operator_table_against_wrapped_values() {
        for (left, right) in ranked_pairs() {
            let left = OrderWrapper::new(&left);
            let right = OrderWrapper::new(&right);

            assert!(left < right);
            assert!(right > left);
            assert!(left <= right && right >= left);
            assert!(left != right);
        }
    }

    #[test]
    fn nan_ranks_equal_but_is_not_equal() {
        let nan = OrderWrapper::new(Value::Float(f64::NAN));
        let one = Value::Int(1);

        assert!(!(nan < one));
        assert!(!(nan > one));
        assert!(nan <= one && nan >= one);
        assert!(nan != one);
    }

    #[test]
    fn agrees_with_native_order_for_comparable_values() {
        let pairs = [
            (Value::Int(1), Value::Int(2)),
            (Value::Float(2.5), Value::Int(2)),
            (Value::from("b"), Value::from("a")),
            (Value::list([1, 2]), Value::list([1, 2])),
        ];

        for (a, b) in pairs {
            assert_eq!(OrderWrapper::new(&a) < b, a < b);
            assert_eq!(OrderWrapper::new(&a) > b, a > b);
            assert_eq!(OrderWrapper::new(&a) <= b, a <= b);
        }
    }

    #[test]
    fn display_and_accessors() {
        let wrapped = OrderWrapper::from(Value::from("x"));

        assert_eq!(wrapped.to_string(), "OrderWrapper('x')");
        assert_eq!(format!("{wrapped:?}"), "OrderWrapper(Text(\"x\"))");
        assert_eq!(wrapped.get(), &Value::from("x"));
        assert!(matches!(wrapped.into_inner(), Value::Text(s) if s == "x"));
    }
}
