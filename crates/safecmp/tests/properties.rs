//! Property tests for the total order over arbitrary, mixed values.

use proptest::prelude::*;
use safecmp::prelude::*;
use std::cmp::Ordering;

struct Opaque;
struct Other;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<u64>().prop_map(Value::Uint),
        prop::num::f64::ANY.prop_map(Value::Float),
        "[a-c]{0,3}".prop_map(Value::Text),
        prop::collection::vec(any::<u8>(), 0..3).prop_map(Value::Blob),
        Just(Value::object(Opaque)),
        Just(Value::object(Other)),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(2, 12, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::List),
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Tuple),
            prop::collection::vec((inner.clone(), inner), 0..2).prop_map(Value::from_map),
        ]
    })
}

// values whose order never depends on NaN handling
fn arb_nan_free() -> impl Strategy<Value = Value> {
    arb_value().prop_filter("no NaN", |value| !contains_nan(value))
}

// sequences whose first differing elements refuse ordering fall back to
// their own type and can break transitivity; scalars never do
fn arb_nan_free_scalar() -> impl Strategy<Value = Value> {
    arb_scalar().prop_filter("no NaN", |value| !contains_nan(value))
}

fn contains_nan(value: &Value) -> bool {
    match value {
        Value::Float(f) => f.is_nan(),
        Value::List(items) | Value::Tuple(items) => items.iter().any(contains_nan),
        Value::Map(entries) => entries
            .iter()
            .any(|(key, value)| contains_nan(key) || contains_nan(value)),
        _ => false,
    }
}

fn arb_small_int() -> impl Strategy<Value = Value> {
    (0i64..4).prop_map(Value::Int)
}

proptest! {
    #[test]
    fn compare_is_total_and_deterministic(a in arb_value(), b in arb_value()) {
        init_logging();

        let first = compare(&a, &b);
        for _ in 0..3 {
            prop_assert_eq!(compare(&a, &b), first);
        }
        for mode in [CompareMode::Direct, CompareMode::NanAsEqual] {
            let _ = compare_with(&a, &b, mode);
        }
    }

    #[test]
    fn compare_is_reflexive(a in arb_value()) {
        prop_assert_eq!(compare(&a, &a), Ordering::Equal);
        prop_assert_eq!(compare_with(&a, &a, CompareMode::NanAsEqual), Ordering::Equal);
    }

    #[test]
    fn compare_is_antisymmetric(a in arb_nan_free(), b in arb_nan_free()) {
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
    }

    #[test]
    fn scalar_order_is_transitive(
        a in arb_nan_free_scalar(),
        b in arb_nan_free_scalar(),
        c in arb_nan_free_scalar(),
    ) {
        if compare(&a, &b) != Ordering::Greater && compare(&b, &c) != Ordering::Greater {
            prop_assert_ne!(compare(&a, &c), Ordering::Greater);
        }
    }

    #[test]
    fn null_sorts_first(a in arb_value()) {
        let expected = if a.is_null() { Ordering::Equal } else { Ordering::Less };

        prop_assert_eq!(compare(&Value::Null, &a), expected);
        prop_assert_eq!(compare(&a, &Value::Null), expected.reverse());
    }

    #[test]
    fn wrapper_agrees_with_native_order(a in any::<i64>(), b in -1e6f64..1e6) {
        let (a, b) = (Value::Int(a), Value::Float(b));
        let wrapped = OrderWrapper::new(&a);

        prop_assert_eq!(wrapped < b, a < b);
        prop_assert_eq!(wrapped <= b, a <= b);
        prop_assert_eq!(wrapped > b, a > b);
        prop_assert_eq!(wrapped >= b, a >= b);
    }

    #[test]
    fn sorted_output_is_an_ordered_permutation(values in prop::collection::vec(arb_nan_free(), 0..24)) {
        let sorted = safe_sorted(&values, Direction::Asc);

        prop_assert_eq!(sorted.len(), values.len());
        for pair in sorted.windows(2) {
            prop_assert_ne!(compare(pair[0], pair[1]), Ordering::Greater);
        }

        let mut seen: Vec<*const Value> = sorted.iter().map(|v| std::ptr::from_ref(*v)).collect();
        let mut original: Vec<*const Value> = values.iter().map(std::ptr::from_ref).collect();
        seen.sort_unstable();
        original.sort_unstable();
        prop_assert_eq!(seen, original);
    }

    #[test]
    fn sort_is_stable(keys in prop::collection::vec(arb_small_int(), 0..32)) {
        let indexed: Vec<(usize, Value)> = keys.into_iter().enumerate().collect();

        for direction in [Direction::Asc, Direction::Desc] {
            let sorted = safe_sorted_by_key(indexed.clone(), |(_, key)| key.clone(), direction);

            for pair in sorted.windows(2) {
                let ((left_index, left_key), (right_index, right_key)) = (&pair[0], &pair[1]);
                if compare(left_key, right_key) == Ordering::Equal {
                    prop_assert!(left_index < right_index);
                }
            }
        }
    }

    #[test]
    fn descending_is_reverse_of_ascending_without_ties(mut values in prop::collection::vec(any::<i64>(), 0..24)) {
        values.sort_unstable();
        values.dedup();
        let values: Vec<Value> = values.into_iter().rev().map(Value::Int).collect();

        let asc = safe_sorted(&values, Direction::Asc);
        let mut desc = safe_sorted(&values, Direction::Desc);
        desc.reverse();

        prop_assert_eq!(asc, desc);
    }

    #[test]
    fn extrema_bound_every_item(values in prop::collection::vec(arb_nan_free_scalar(), 1..16)) {
        let max = safe_max(&values, None).expect("non-empty");
        let min = safe_min(&values, None).expect("non-empty");

        for value in &values {
            prop_assert_ne!(compare(max, value), Ordering::Less);
            prop_assert_ne!(compare(min, value), Ordering::Greater);
        }
    }
}

#[test]
fn legacy_operator_table() {
    init_logging();

    let pairs = [
        (Value::Null, Value::Int(1)),
        (Value::Int(1), Value::List(Vec::new())),
        (Value::Null, Value::List(Vec::new())),
        (Value::Null, Value::object(Opaque)),
        (Value::Int(1), Value::object(Opaque)),
        (Value::Int(1), Value::Int(2)),
    ];

    for (left, right) in pairs {
        let wrapped = OrderWrapper::new(left);

        assert!(wrapped < right, "{wrapped} < {right}");
        assert!(wrapped <= right, "{wrapped} <= {right}");
        assert!(wrapped != right, "{wrapped} != {right}");
        assert!(!(wrapped > right), "{wrapped} > {right}");
        assert!(!(wrapped >= right), "{wrapped} >= {right}");
    }
}

#[test]
fn iterator_adaptors_match_free_functions() {
    let values = vec![Value::Int(2), Value::from("b"), Value::Null, Value::Float(0.5)];

    assert_eq!(values.iter().safe_max(), safe_max(&values, None).ok());
    assert_eq!(values.iter().safe_min(), safe_min(&values, None).ok());
    assert_eq!(
        values.iter().safe_sorted(Direction::Desc),
        safe_sorted(&values, Direction::Desc)
    );
}
