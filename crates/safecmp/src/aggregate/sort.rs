use crate::{
    aggregate::Direction,
    order::OrderWrapper,
    value::{Value, value_of},
};
use std::{borrow::Borrow, ops::Range};

/// Stable sort into a new `Vec`, ranking each item through `OrderWrapper`.
pub fn safe_sorted<I>(items: I, direction: Direction) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Borrow<Value>,
{
    let mut items: Vec<_> = items.into_iter().collect();
    safe_sort(&mut items, direction);

    items
}

/// Stable sort into a new `Vec` by a projected key; `key` runs once per item.
pub fn safe_sorted_by_key<I, K, F>(items: I, key: F, direction: Direction) -> Vec<I::Item>
where
    I: IntoIterator,
    K: Borrow<Value>,
    F: FnMut(&I::Item) -> K,
{
    let mut items: Vec<_> = items.into_iter().collect();
    safe_sort_by_key(&mut items, key, direction);

    items
}

/// In-place stable sort.
pub fn safe_sort<T: Borrow<Value>>(items: &mut [T], direction: Direction) {
    let ranks: Vec<OrderWrapper<&Value>> = items
        .iter()
        .map(|item| OrderWrapper::new(value_of(item)))
        .collect();
    let order = stable_order(&ranks, direction);

    apply_order(items, order);
}

/// In-place stable sort by a projected key.
pub fn safe_sort_by_key<T, K, F>(items: &mut [T], mut key: F, direction: Direction)
where
    K: Borrow<Value>,
    F: FnMut(&T) -> K,
{
    let ranks: Vec<OrderWrapper<K>> = items
        .iter()
        .map(|item| OrderWrapper::new(key(item)))
        .collect();
    let order = stable_order(&ranks, direction);

    apply_order(items, order);
}

// Positions of `ranks` in sorted order. Descending sorts the reversed input
// ascending and reverses the result, which keeps ties in input order.
fn stable_order<V: Borrow<Value>>(ranks: &[OrderWrapper<V>], direction: Direction) -> Vec<usize> {
    let mut is_less = |a: usize, b: usize| ranks[a] < ranks[b];

    match direction {
        Direction::Asc => merge_sort((0..ranks.len()).collect(), &mut is_less),
        Direction::Desc => {
            let mut order = merge_sort((0..ranks.len()).rev().collect(), &mut is_less);
            order.reverse();

            order
        }
    }
}

///
/// MERGE SORT
///
/// Natural merge sort over indices. Only ever asks `is_less(later, earlier)`
/// and never assumes transitivity, so the NaN-as-equal relation cannot make
/// it panic or lose elements.
///

fn merge_sort<F>(mut order: Vec<usize>, is_less: &mut F) -> Vec<usize>
where
    F: FnMut(usize, usize) -> bool,
{
    let mut runs = natural_runs(&mut order, is_less);
    let mut buffer = Vec::with_capacity(order.len());

    while runs.len() > 1 {
        let mut merged = Vec::with_capacity(runs.len().div_ceil(2));
        for pair in runs.chunks(2) {
            match pair {
                [left, right] => {
                    merge(&mut order, left.start, left.end, right.end, &mut buffer, is_less);
                    merged.push(left.start..right.end);
                }
                [single] => merged.push(single.clone()),
                _ => {}
            }
        }
        runs = merged;
    }

    order
}

// Split into maximal runs. Strictly descending runs are reversed in place;
// strictness means no two tied items swap.
fn natural_runs<F>(order: &mut [usize], is_less: &mut F) -> Vec<Range<usize>>
where
    F: FnMut(usize, usize) -> bool,
{
    let len = order.len();
    let mut runs = Vec::new();
    let mut start = 0;

    while start < len {
        let mut end = start + 1;
        if end < len && is_less(order[end], order[end - 1]) {
            while end < len && is_less(order[end], order[end - 1]) {
                end += 1;
            }
            order[start..end].reverse();
        } else {
            while end < len && !is_less(order[end], order[end - 1]) {
                end += 1;
            }
        }

        runs.push(start..end);
        start = end;
    }

    runs
}

// Merge `start..mid` with `mid..end`; the left run wins ties.
fn merge<F>(
    order: &mut [usize],
    start: usize,
    mid: usize,
    end: usize,
    buffer: &mut Vec<usize>,
    is_less: &mut F,
) where
    F: FnMut(usize, usize) -> bool,
{
    buffer.clear();
    let (mut left, mut right) = (start, mid);

    while left < mid && right < end {
        if is_less(order[right], order[left]) {
            buffer.push(order[right]);
            right += 1;
        } else {
            buffer.push(order[left]);
            left += 1;
        }
    }
    buffer.extend_from_slice(&order[left..mid]);
    buffer.extend_from_slice(&order[right..end]);

    order[start..end].copy_from_slice(buffer);
}

// Permute `items` so that `items[i]` becomes the old `items[order[i]]`,
// following each cycle once.
fn apply_order<T>(items: &mut [T], mut order: Vec<usize>) {
    for start in 0..order.len() {
        let mut current = start;
        loop {
            let next = order[current];
            order[current] = current;
            if next == start {
                break;
            }
            items.swap(current, next);
            current = next;
        }
    }
}
