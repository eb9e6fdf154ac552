//! Unary operation markers.
//!
//! | Marker            | Rust surface               | Operand                 |
//! |-------------------|----------------------------|-------------------------|
//! | [`Not`]           | `!expr`                    | `T: std::ops::Not`      |
//! | [`Neg`]           | `-expr`                    | `T: std::ops::Neg`      |
//! | [`Plus`]          | `expr.plus()`              | `T: UnaryPlus`          |
//! | [`AddressOf`]     | `expr.address_of()`        | `&T`, `&mut T`          |
//! | [`Dereference`]   | `expr.dereference()`       | `&P`, `&mut P`          |
//! | [`PreIncrement`]  | `expr.pre_increment()`     | `&mut T`, `T: Step`     |
//! | [`PreDecrement`]  | `expr.pre_decrement()`     | `&mut T`, `T: Step`     |
//! | [`PostIncrement`] | `expr.post_increment()`    | `&mut T`, `T: Step`     |
//! | [`PostDecrement`] | `expr.post_decrement()`    | `&mut T`, `T: Step`     |
//!
//! Rust spells logical and bitwise negation with the same `!` operator, so
//! [`Not`] covers both.

use std::ops;
use std::ptr;

use super::UnaryOperation;

/// Logical negation for `bool`, bitwise complement for integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Not;

impl<T: ops::Not> UnaryOperation<T> for Not {
    type Output = T::Output;

    #[inline]
    fn apply(&self, operand: T) -> Self::Output {
        !operand
    }
}

/// Arithmetic negation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Neg;

impl<T: ops::Neg> UnaryOperation<T> for Neg {
    type Output = T::Output;

    #[inline]
    fn apply(&self, operand: T) -> Self::Output {
        -operand
    }
}

/// The unary plus operator.
///
/// Rust has no prefix `+`; this trait provides it. Numeric primitives return
/// themselves. User types may give it any meaning:
///
/// ```
/// use placeholder::{__, UnaryPlus};
///
/// struct Hundred;
///
/// impl UnaryPlus for Hundred {
///     type Output = i32;
///
///     fn unary_plus(self) -> i32 {
///         100
///     }
/// }
///
/// assert_eq!(__.plus().call(Hundred), 100);
/// ```
pub trait UnaryPlus {
    /// The result of applying unary plus.
    type Output;

    /// Applies unary plus.
    fn unary_plus(self) -> Self::Output;
}

/// Increment and decrement by one, the `++` and `--` of other languages.
///
/// Integer steps use ordinary `+= 1` / `-= 1`, so overflow panics in debug
/// builds exactly as the written-out expression would.
pub trait Step {
    /// Adds one in place.
    fn increment(&mut self);

    /// Subtracts one in place.
    fn decrement(&mut self);
}

macro_rules! impl_numeric {
    ($one:literal => $($numeric:ty),* $(,)?) => {
        $(
            impl UnaryPlus for $numeric {
                type Output = Self;

                #[inline]
                fn unary_plus(self) -> Self {
                    self
                }
            }

            impl Step for $numeric {
                #[inline]
                fn increment(&mut self) {
                    *self += $one;
                }

                #[inline]
                fn decrement(&mut self) {
                    *self -= $one;
                }
            }
        )*
    };
}

impl_numeric!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(1.0 => f32, f64);

impl<T: UnaryPlus + Copy> UnaryPlus for &T {
    type Output = T::Output;

    #[inline]
    fn unary_plus(self) -> Self::Output {
        (*self).unary_plus()
    }
}

/// Unary plus, see [`UnaryPlus`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Plus;

impl<T: UnaryPlus> UnaryOperation<T> for Plus {
    type Output = T::Output;

    #[inline]
    fn apply(&self, operand: T) -> Self::Output {
        operand.unary_plus()
    }
}

/// Takes the address of a borrowed operand.
///
/// `&T` yields `*const T` and `&mut T` yields `*mut T`. The pointers are
/// only meant for identity comparisons; reading through them needs `unsafe`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AddressOf;

impl<'a, T: ?Sized> UnaryOperation<&'a T> for AddressOf {
    type Output = *const T;

    #[inline]
    fn apply(&self, operand: &'a T) -> *const T {
        ptr::from_ref(operand)
    }
}

impl<'a, T: ?Sized> UnaryOperation<&'a mut T> for AddressOf {
    type Output = *mut T;

    #[inline]
    fn apply(&self, operand: &'a mut T) -> *mut T {
        ptr::from_mut(operand)
    }
}

/// Dereferences a borrowed pointer-like operand.
///
/// `&P` yields `&P::Target`; `&mut P` yields `&mut P::Target`, so writes
/// through the result reach the pointee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dereference;

impl<'a, P> UnaryOperation<&'a P> for Dereference
where
    P: ops::Deref + ?Sized,
{
    type Output = &'a P::Target;

    #[inline]
    fn apply(&self, operand: &'a P) -> Self::Output {
        &**operand
    }
}

impl<'a, P> UnaryOperation<&'a mut P> for Dereference
where
    P: ops::DerefMut + ?Sized,
{
    type Output = &'a mut P::Target;

    #[inline]
    fn apply(&self, operand: &'a mut P) -> Self::Output {
        &mut **operand
    }
}

/// Prefix increment: steps the operand and returns it, still borrowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PreIncrement;

impl<'a, T: Step + ?Sized> UnaryOperation<&'a mut T> for PreIncrement {
    type Output = &'a mut T;

    #[inline]
    fn apply(&self, operand: &'a mut T) -> &'a mut T {
        operand.increment();
        operand
    }
}

/// Prefix decrement: steps the operand and returns it, still borrowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PreDecrement;

impl<'a, T: Step + ?Sized> UnaryOperation<&'a mut T> for PreDecrement {
    type Output = &'a mut T;

    #[inline]
    fn apply(&self, operand: &'a mut T) -> &'a mut T {
        operand.decrement();
        operand
    }
}

/// Postfix increment: steps the operand and returns the previous value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PostIncrement;

impl<T: Step + Clone> UnaryOperation<&mut T> for PostIncrement {
    type Output = T;

    #[inline]
    fn apply(&self, operand: &mut T) -> T {
        let previous = operand.clone();
        operand.increment();
        previous
    }
}

/// Postfix decrement: steps the operand and returns the previous value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PostDecrement;

impl<T: Step + Clone> UnaryOperation<&mut T> for PostDecrement {
    type Output = T;

    #[inline]
    fn apply(&self, operand: &mut T) -> T {
        let previous = operand.clone();
        operand.decrement();
        previous
    }
}
