use crate::{
    aggregate::{self, Direction},
    value::Value,
};
use std::borrow::Borrow;

///
/// SafeOrdExt
///
/// Iterator adaptors for the total order. Empty input yields `None` rather
/// than an error.
///

pub trait SafeOrdExt: Iterator + Sized
where
    Self::Item: Borrow<Value>,
{
    /// Largest item; the first wins on ties.
    fn safe_max(self) -> Option<Self::Item> {
        aggregate::safe_max(self, None).ok()
    }

    /// Smallest item; the first wins on ties.
    fn safe_min(self) -> Option<Self::Item> {
        aggregate::safe_min(self, None).ok()
    }

    /// Collect into a stably sorted `Vec`.
    fn safe_sorted(self, direction: Direction) -> Vec<Self::Item> {
        aggregate::safe_sorted(self, direction)
    }
}

impl<I> SafeOrdExt for I
where
    I: Iterator,
    I::Item: Borrow<Value>,
{
}

///
/// TESTS
///
