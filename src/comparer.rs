//! Three-way comparison used for every ordering decision a tree makes.
//!
//! A [`Comparer`] answers the question "how does `source` compare to
//! `target`?" with a [`Comparison`]. Each tree is built with exactly one
//! comparer and keeps it for its whole life.
//!
//! # Examples
//!
//! ```
//! use bstree::comparer::{Comparer, Comparison, IntegerComparer};
//!
//! assert_eq!(IntegerComparer.compare(&1, &2), Comparison::Smaller);
//! assert_eq!(IntegerComparer.compare(&2, &2), Comparison::Equal);
//!
//! // Any closure with the right shape is a comparer too.
//! let by_len = |a: &&str, b: &&str| -> Comparison { a.len().cmp(&b.len()).into() };
//! assert_eq!(by_len.compare(&"abc", &"a"), Comparison::Larger);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// The outcome of comparing a `source` value against a `target` value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `source` sorts before `target`.
    Smaller,
    /// `source` sorts after `target`.
    Larger,
    /// `source` and `target` are the same key.
    Equal,
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Smaller,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Larger,
        }
    }
}

/// A strict total order over `T`.
///
/// Implementations must be irreflexive for distinct values, antisymmetric and
/// transitive. A tree trusts this blindly: an inconsistent comparer breaks the
/// search invariant without any error being reported.
pub trait Comparer<T> {
    /// Compares `source` to `target`.
    fn compare(&self, source: &T, target: &T) -> Comparison;
}

impl<T, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Comparison,
{
    fn compare(&self, source: &T, target: &T) -> Comparison {
        self(source, target)
    }
}

/// Orders `i32` values.
#[derive(Copy, Clone, Debug, Default)]
pub struct IntegerComparer;

impl Comparer<i32> for IntegerComparer {
    fn compare(&self, source: &i32, target: &i32) -> Comparison {
        source.cmp(target).into()
    }
}

/// Orders `i64` values.
#[derive(Copy, Clone, Debug, Default)]
pub struct Integer64Comparer;

impl Comparer<i64> for Integer64Comparer {
    fn compare(&self, source: &i64, target: &i64) -> Comparison {
        source.cmp(target).into()
    }
}

/// Orders `f32` values by IEEE 754 `totalOrder`.
///
/// `-0.0` sorts before `0.0` and NaNs sort at the ends, so every `f32` is a
/// distinct, insertable key.
#[derive(Copy, Clone, Debug, Default)]
pub struct Float32Comparer;

impl Comparer<f32> for Float32Comparer {
    fn compare(&self, source: &f32, target: &f32) -> Comparison {
        source.total_cmp(target).into()
    }
}

/// Orders `f64` values by IEEE 754 `totalOrder`. See [`Float32Comparer`].
#[derive(Copy, Clone, Debug, Default)]
pub struct Float64Comparer;

impl Comparer<f64> for Float64Comparer {
    fn compare(&self, source: &f64, target: &f64) -> Comparison {
        source.total_cmp(target).into()
    }
}

/// Orders any `T: Ord` by its natural order.
pub struct OrdComparer<T> {
    // `fn() -> T` keeps the comparer `Send + Sync` whatever `T` is.
    _t: PhantomData<fn() -> T>,
}

impl<T> OrdComparer<T> {
    /// Creates the comparer.
    pub fn new() -> Self {
        Self { _t: PhantomData }
    }
}

impl<T> Default for OrdComparer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for OrdComparer<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for OrdComparer<T> {}

impl<T> fmt::Debug for OrdComparer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrdComparer")
    }
}

impl<T: Ord> Comparer<T> for OrdComparer<T> {
    fn compare(&self, source: &T, target: &T) -> Comparison {
        source.cmp(target).into()
    }
}
