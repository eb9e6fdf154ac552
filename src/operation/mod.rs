//! Operations captured by composed expressions.
//!
//! An operation is a small value (usually a zero-sized marker) that knows
//! how to combine already-evaluated operands. Composition nodes in
//! [`compose`](crate::compose) evaluate their inner expression and hand the
//! result to the operation.
//!
//! - [`UnaryOperation`]: one operand, see [`unary`]
//! - [`BinaryOperation`]: two operands, see [`binary`]
//! - [`Apply`]: lifts a closure into either kind of operation
//!
//! Implementations are conditional on the operand types, mirroring the
//! `std::ops` trait each marker stands for.

pub mod binary;
pub mod unary;

pub use binary::{
    Add, And, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Member,
    Mul, NotEqual, Or, Rem, Sequence, Shl, Shr, Sub,
};
pub use unary::{
    AddressOf, Dereference, Neg, Not, Plus, PostDecrement, PostIncrement, PreDecrement,
    PreIncrement, Step, UnaryPlus,
};

/// An operation applied to the result of one expression.
pub trait UnaryOperation<T> {
    /// The result of the operation.
    type Output;

    /// Applies the operation to `operand`.
    fn apply(&self, operand: T) -> Self::Output;
}

/// An operation combining a left and a right operand.
pub trait BinaryOperation<L, R> {
    /// The result of the operation.
    type Output;

    /// Applies the operation to `left` and `right`.
    fn apply(&self, left: L, right: R) -> Self::Output;
}

/// Lifts a closure into an operation.
///
/// A one-argument closure becomes a [`UnaryOperation`]; a two-argument
/// closure becomes a [`BinaryOperation`].
///
/// # Examples
///
/// ```
/// use placeholder::{__, Apply};
///
/// let power = __.bind_right(3_u32, Apply::new(|base: i64, exponent: u32| base.pow(exponent)));
/// assert_eq!(power.call(2), 8);
/// ```
#[derive(Clone, Copy)]
pub struct Apply<F>(F);

impl<F> Apply<F> {
    /// Wraps `function` as an operation.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self(function)
    }
}

impl<F> std::fmt::Debug for Apply<F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Apply").finish_non_exhaustive()
    }
}

impl<T, O, F> UnaryOperation<T> for Apply<F>
where
    F: Fn(T) -> O,
{
    type Output = O;

    #[inline]
    fn apply(&self, operand: T) -> O {
        (self.0)(operand)
    }
}

impl<L, R, O, F> BinaryOperation<L, R> for Apply<F>
where
    F: Fn(L, R) -> O,
{
    type Output = O;

    #[inline]
    fn apply(&self, left: L, right: R) -> O {
        (self.0)(left, right)
    }
}
