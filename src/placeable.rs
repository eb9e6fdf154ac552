//! The wrapped-callable marker and the placeholder constant.
//!
//! This module provides:
//!
//! - [`Expression`]: the callable protocol every composed node implements
//! - [`Placeable`]: the wrapper that marks an expression as composable
//! - [`Identity`]: the expression that returns its argument unchanged
//! - [`FromFn`]: an adapter turning any `Fn(A) -> B` into an expression
//! - [`__`]: the placeholder, a `Placeable<Identity>`
//!
//! # Why `__`
//!
//! `_` is a reserved pattern token in Rust and cannot name a constant, so the
//! placeholder is spelled with a double underscore.
//!
//! # Examples
//!
//! ```
//! use placeholder::__;
//!
//! assert_eq!(__.call(13), 13);
//!
//! let increment = __ + 1;
//! assert_eq!(increment.call(14), 15);
//! ```

use std::fmt;

/// A deferred computation over a single argument.
///
/// `Expression<A>` is implemented for every argument type `A` the expression
/// accepts. Composed nodes implement it conditionally: the impl exists only
/// when the captured operation is valid for the inner output type, so an
/// invalid combination is reported where the expression is invoked.
///
/// # Examples
///
/// ```
/// use placeholder::{Expression, Identity};
///
/// assert_eq!(Identity.evaluate("hello"), "hello");
/// ```
pub trait Expression<A> {
    /// The value produced by [`evaluate`](Expression::evaluate).
    type Output;

    /// Evaluates the expression against `argument`.
    fn evaluate(&self, argument: A) -> Self::Output;
}

/// The expression that returns its argument unchanged.
///
/// Value category is preserved: a `&mut T` argument comes back as the same
/// `&mut T`, so writes through the result reach the caller's value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Identity;

impl<A> Expression<A> for Identity {
    type Output = A;

    #[inline]
    fn evaluate(&self, argument: A) -> A {
        argument
    }
}

/// Adapts a single-argument function into an [`Expression`].
///
/// Created by [`Placeable::from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<A, B, F> Expression<A> for FromFn<F>
where
    F: Fn(A) -> B,
{
    type Output = B;

    #[inline]
    fn evaluate(&self, argument: A) -> B {
        (self.0)(argument)
    }
}

/// A callable marked as composable with the placeholder operators.
///
/// Every operator applied to a `Placeable` produces a new `Placeable` that
/// captures its operands by value. Nothing is computed until
/// [`call`](Placeable::call) is invoked.
///
/// The composed expression tree is opaque: the `Debug` output does not show
/// captured state.
///
/// # Examples
///
/// ```
/// use placeholder::__;
///
/// let is_even = (__ % 2).equals(0);
/// assert!(is_even.call(8));
/// assert!(!is_even.call(11));
///
/// let evens: Vec<i32> = (1..=6).filter(|n| is_even.call(*n)).collect();
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
#[derive(Clone, Copy, Default)]
pub struct Placeable<E>(E);

impl<E> Placeable<E> {
    /// Wraps an expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use placeholder::{Identity, Placeable};
    ///
    /// let placeholder = Placeable::new(Identity);
    /// assert_eq!(placeholder.call('x'), 'x');
    /// ```
    #[inline]
    pub const fn new(expression: E) -> Self {
        Self(expression)
    }

    /// Invokes the expression with `argument`.
    ///
    /// Takes `&self`, so the same callable can be invoked any number of
    /// times through owned, mutable or shared bindings.
    ///
    /// # Examples
    ///
    /// ```
    /// use placeholder::__;
    ///
    /// let mut value = 1;
    /// let same = __.call(&mut value);
    /// *same = 2;
    /// assert_eq!(value, 2);
    /// ```
    #[inline]
    pub fn call<A>(&self, argument: A) -> E::Output
    where
        E: Expression<A>,
    {
        self.0.evaluate(argument)
    }

    /// Converts the callable into a plain closure.
    ///
    /// # Examples
    ///
    /// ```
    /// use placeholder::__;
    ///
    /// let doubled: Vec<i32> = vec![1, 2, 3].into_iter().map((__ * 2).into_fn()).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    #[inline]
    pub fn into_fn<A>(self) -> impl Fn(A) -> E::Output
    where
        E: Expression<A>,
    {
        move |argument| self.0.evaluate(argument)
    }

    /// Borrows the callable as a plain closure.
    #[inline]
    pub fn as_fn<A>(&self) -> impl Fn(A) -> E::Output + '_
    where
        E: Expression<A>,
    {
        move |argument| self.0.evaluate(argument)
    }

    /// Consumes the wrapper and returns the inner expression.
    #[inline]
    pub fn into_inner(self) -> E {
        self.0
    }
}

impl<F> Placeable<FromFn<F>> {
    /// Wraps an arbitrary single-argument function so it can take part in
    /// placeholder composition.
    ///
    /// # Examples
    ///
    /// ```
    /// use placeholder::Placeable;
    ///
    /// let length = Placeable::from_fn(|text: &str| text.len());
    /// let is_short = length.less_than(4);
    /// assert!(is_short.call("abc"));
    /// assert!(!is_short.call("abcd"));
    /// ```
    #[inline]
    pub const fn from_fn(function: F) -> Self {
        Self(FromFn(function))
    }
}

impl<A, E> Expression<A> for Placeable<E>
where
    E: Expression<A>,
{
    type Output = E::Output;

    #[inline]
    fn evaluate(&self, argument: A) -> Self::Output {
        self.0.evaluate(argument)
    }
}

impl<E> fmt::Debug for Placeable<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Placeable").finish_non_exhaustive()
    }
}

/// The placeholder: stands for the eventual call argument.
///
/// Calling it returns the argument unchanged. Every composed expression
/// starts from this value.
///
/// # Examples
///
/// ```
/// use placeholder::__;
///
/// assert_eq!(__.call(13), 13);
/// assert_eq!((10 + __).call(13), 23);
/// assert!(!(!__).call(true));
/// ```
#[allow(non_upper_case_globals)]
pub const __: Placeable<Identity> = Placeable::new(Identity);

static_assertions::assert_impl_all!(Placeable<Identity>: Copy, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_returns_owned_value() {
        let owned = String::from("owned string");
        assert_eq!(__.call(owned), "owned string");
    }

    #[test]
    fn test_identity_preserves_reference() {
        let value = 42;
        assert!(std::ptr::eq(__.call(&value), &value));
    }

    #[test]
    fn test_from_fn_forwards_argument() {
        let square = Placeable::from_fn(|n: i64| n * n);
        assert_eq!(square.call(12), 144);
        assert_eq!(square.call(-3), 9);
    }

    #[test]
    fn test_debug_is_opaque() {
        let composed = __ + 41;
        assert_eq!(format!("{composed:?}"), "Placeable { .. }");
    }

    #[test]
    fn test_as_fn_borrows() {
        let increment = __ + 1;
        let values: Vec<i32> = [1, 2, 3].into_iter().map(increment.as_fn()).collect();
        assert_eq!(values, vec![2, 3, 4]);
        assert_eq!(increment.call(0), 1);
    }

    #[test]
    fn test_nested_placeable_forwards() {
        let inner = Placeable::new(__ * 3);
        assert_eq!(inner.call(5), 15);
    }
}
