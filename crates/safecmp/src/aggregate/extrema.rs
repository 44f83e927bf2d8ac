use crate::{
    compare::compare,
    error::SafeCmpError,
    value::{Value, value_of},
};
use std::{borrow::Borrow, cmp::Ordering};

///
/// Extremum
///

#[derive(Clone, Copy, Debug)]
enum Extremum {
    Max,
    Min,
}

impl Extremum {
    const fn op(self) -> &'static str {
        match self {
            Self::Max => "safe_max",
            Self::Min => "safe_min",
        }
    }

    // Strict: a candidate that only ties never replaces the current pick,
    // so the first of several equal extremes wins.
    fn replaces(self, current: &Value, candidate: &Value) -> bool {
        let ord = compare(current, candidate);

        match self {
            Self::Max => ord == Ordering::Less,
            Self::Min => ord == Ordering::Greater,
        }
    }
}

/// Largest item, first one wins on ties.
///
/// `default` seeds the running maximum and is returned for empty input;
/// without it empty input is an error.
pub fn safe_max<I>(items: I, default: Option<I::Item>) -> Result<I::Item, SafeCmpError>
where
    I: IntoIterator,
    I::Item: Borrow<Value>,
{
    select(items, default, Extremum::Max)
}

/// Smallest item, first one wins on ties.
pub fn safe_min<I>(items: I, default: Option<I::Item>) -> Result<I::Item, SafeCmpError>
where
    I: IntoIterator,
    I::Item: Borrow<Value>,
{
    select(items, default, Extremum::Min)
}

/// Item with the largest key. Items are returned as is; `key` runs once
/// per item.
pub fn safe_max_by_key<I, K, F>(
    items: I,
    default: Option<I::Item>,
    key: F,
) -> Result<I::Item, SafeCmpError>
where
    I: IntoIterator,
    K: Borrow<Value>,
    F: FnMut(&I::Item) -> K,
{
    select_by_key(items, default, key, Extremum::Max)
}

/// Item with the smallest key.
pub fn safe_min_by_key<I, K, F>(
    items: I,
    default: Option<I::Item>,
    key: F,
) -> Result<I::Item, SafeCmpError>
where
    I: IntoIterator,
    K: Borrow<Value>,
    F: FnMut(&I::Item) -> K,
{
    select_by_key(items, default, key, Extremum::Min)
}

fn select<I>(
    items: I,
    default: Option<I::Item>,
    extremum: Extremum,
) -> Result<I::Item, SafeCmpError>
where
    I: IntoIterator,
    I::Item: Borrow<Value>,
{
    let mut items = items.into_iter();
    let Some(mut best) = default.or_else(|| items.next()) else {
        return Err(SafeCmpError::empty_sequence(extremum.op()));
    };

    for item in items {
        if extremum.replaces(value_of(&best), value_of(&item)) {
            best = item;
        }
    }

    Ok(best)
}

fn select_by_key<I, K, F>(
    items: I,
    default: Option<I::Item>,
    mut key: F,
    extremum: Extremum,
) -> Result<I::Item, SafeCmpError>
where
    I: IntoIterator,
    K: Borrow<Value>,
    F: FnMut(&I::Item) -> K,
{
    let mut items = items.into_iter();
    let Some(mut best) = default.or_else(|| items.next()) else {
        return Err(SafeCmpError::empty_sequence(extremum.op()));
    };

    // the first key is only computed once there is something to compare
    let mut best_key: Option<K> = None;
    for item in items {
        let current_key = best_key.take().unwrap_or_else(|| key(&best));
        let item_key = key(&item);

        if extremum.replaces(value_of(&current_key), value_of(&item_key)) {
            best = item;
            best_key = Some(item_key);
        } else {
            best_key = Some(current_key);
        }
    }

    Ok(best)
}
