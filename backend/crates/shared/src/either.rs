//! Either - Two-branch result type
//!
//! A tagged union holding exactly one of two typed values. By platform
//! convention the left side carries an expected, application-level
//! failure (forbidden, not found, validation rejection) and the right
//! side carries the success payload. Service chains compose operations
//! returning `Either<Failure, T>` and short-circuit to the first
//! failure encountered.
//!
//! The value is immutable after construction and may be shared across
//! tasks freely. Asynchronous operations produce a fully-formed
//! `Either`; inspecting the tag is always synchronous.

use std::fmt;
use std::future::Future;

pub use self::Either::{Left, Right};

/// A value that is exactly one of two possibilities.
///
/// Usage:
/// ```
/// use kernel::either::Either;
///
/// fn lookup(id: u32) -> Either<&'static str, u32> {
///     if id == 0 {
///         Either::Left("not found")
///     } else {
///         Either::Right(id * 2)
///     }
/// }
///
/// let doubled = lookup(21).map(|n| n + 1);
/// assert_eq!(doubled, Either::Right(43));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    /// The failure branch, by platform convention.
    Left(L),
    /// The success branch, by platform convention.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Whether this is the left (failure) branch. Always safe to call.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Left(_))
    }

    /// Whether this is the right (success) branch. Always safe to call.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Right(_))
    }

    /// Borrow the populated side.
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Left(left) => Left(left),
            Right(right) => Right(right),
        }
    }

    /// Mutably borrow the populated side.
    #[inline]
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Left(left) => Left(left),
            Right(right) => Right(right),
        }
    }

    /// Consume into the left value, if present.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Left(left) => Some(left),
            Right(_) => None,
        }
    }

    /// Consume into the right value, if present.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Left(_) => None,
            Right(right) => Some(right),
        }
    }

    /// Return the left value.
    ///
    /// # Panics
    /// Reading the left value of a right-tagged instance is a
    /// programmer error, not an expected outcome, and panics
    /// immediately rather than returning a default.
    pub fn unwrap_left(self) -> L
    where
        R: fmt::Debug,
    {
        match self {
            Left(left) => left,
            Right(right) => panic!(
                "called `Either::unwrap_left()` on a `Right` value: {:?}",
                right
            ),
        }
    }

    /// Return the right value.
    ///
    /// # Panics
    /// Reading the right value of a left-tagged instance is a
    /// programmer error, not an expected outcome, and panics
    /// immediately rather than returning a default.
    pub fn unwrap_right(self) -> R
    where
        L: fmt::Debug,
    {
        match self {
            Left(left) => panic!(
                "called `Either::unwrap_right()` on a `Left` value: {:?}",
                left
            ),
            Right(right) => right,
        }
    }

    /// Transform the right value, leaving a left untouched.
    #[inline]
    pub fn map<T, F>(self, f: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Left(left) => Left(left),
            Right(right) => Right(f(right)),
        }
    }

    /// Transform the left value, leaving a right untouched.
    ///
    /// Used to widen one context's failure type into another's.
    #[inline]
    pub fn map_left<T, F>(self, f: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Left(left) => Left(f(left)),
            Right(right) => Right(right),
        }
    }

    /// Chain an operation that may itself fail.
    ///
    /// A left short-circuits: `f` is never invoked and the existing
    /// left value is carried through unchanged.
    #[inline]
    pub fn and_then<T, F>(self, f: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Left(left) => Left(left),
            Right(right) => f(right),
        }
    }

    /// Recover from a left; a right is carried through unchanged.
    #[inline]
    pub fn or_else<T, F>(self, f: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Left(left) => f(left),
            Right(right) => Right(right),
        }
    }

    /// Fold both branches into a single value.
    #[inline]
    pub fn either<T, FL, FR>(self, fl: FL, fr: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Left(left) => fl(left),
            Right(right) => fr(right),
        }
    }

    /// Chain an asynchronous operation that may itself fail.
    ///
    /// The suspension belongs to the future `f` produces; a left
    /// short-circuits without constructing it.
    pub async fn and_then_async<T, F, Fut>(self, f: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = Either<L, T>>,
    {
        match self {
            Left(left) => Left(left),
            Right(right) => f(right).await,
        }
    }

    /// Transform the right value through an asynchronous function.
    pub async fn map_async<T, F, Fut>(self, f: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Left(left) => Left(left),
            Right(right) => Right(f(right).await),
        }
    }

    /// Build from a `Result`, mapping `Err` to `Left` and `Ok` to `Right`.
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(right) => Right(right),
            Err(left) => Left(left),
        }
    }

    /// Convert to a `Result`, mapping `Left` to `Err` and `Right` to `Ok`.
    ///
    /// This is the bridge back to `?`-based call sites at the boundary.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Left(left) => Err(left),
            Right(right) => Ok(right),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Self::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}
