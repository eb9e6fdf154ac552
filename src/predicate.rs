//! The composability predicate.
//!
//! Operator overloads in this crate fire only when exactly one operand is
//! composable. The split is expressed with two traits:
//!
//! - [`Composable`]: implemented for [`Placeable`] and `&Placeable` only
//! - [`Operand`]: implemented for plain values that may sit on the other side
//!
//! Because `Placeable` never implements `Operand`, combining two composables
//! has no matching impl and fails to compile:
//!
//! ```compile_fail
//! use placeholder::__;
//!
//! let ambiguous = __ + __;
//! ```
//!
//! ```compile_fail
//! use placeholder::{__, value};
//!
//! let ambiguous = value(__).equals(__);
//! ```
//!
//! [`Composability`] and [`is_composable`] expose the same classification as
//! a `const` boolean.
//!
//! # Plain operands on the left
//!
//! Rust's orphan rules let this crate overload `10 + __` for primitive
//! numbers, but not for arbitrary foreign types. [`Value`] wraps any operand
//! so it can stand on the left:
//!
//! ```
//! use placeholder::{__, value};
//!
//! let greeting = value(String::from("hello, ")) + __;
//! assert_eq!(greeting.call("world"), "hello, world");
//! ```

use std::cmp::Ordering;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use crate::placeable::Placeable;

mod sealed {
    pub trait Sealed {}

    impl<E> Sealed for crate::Placeable<E> {}
    impl<E> Sealed for &crate::Placeable<E> {}
}

/// A value that is a wrapped callable, owned or borrowed.
///
/// This trait is sealed: only [`Placeable`] and `&Placeable` implement it.
pub trait Composable: sealed::Sealed {
    /// The expression carried by the wrapper.
    type Expression;

    /// Converts into an owned [`Placeable`].
    fn into_placeable(self) -> Placeable<Self::Expression>;
}

impl<E> Composable for Placeable<E> {
    type Expression = E;

    #[inline]
    fn into_placeable(self) -> Self {
        self
    }
}

impl<E: Clone> Composable for &Placeable<E> {
    type Expression = E;

    #[inline]
    fn into_placeable(self) -> Placeable<E> {
        self.clone()
    }
}

/// A plain, non-composable value that a composition may capture.
///
/// The captured value is cloned on every invocation of the composed
/// callable, hence the `Clone` bound.
///
/// Implement this marker for your own types to use them as operands:
///
/// ```
/// use placeholder::{__, Operand};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct Meters(f64);
///
/// impl std::ops::Add for Meters {
///     type Output = Self;
///     fn add(self, other: Self) -> Self {
///         Self(self.0 + other.0)
///     }
/// }
///
/// impl Operand for Meters {}
///
/// let extend = __ + Meters(1.5);
/// assert_eq!(extend.call(Meters(2.0)), Meters(3.5));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a plain operand of a placeholder expression",
    label = "expected a plain operand here",
    note = "exactly one side of a binary placeholder expression must be composable",
    note = "implement `placeholder::Operand` for `{Self}` if it is a plain value"
)]
pub trait Operand: Clone {}

macro_rules! impl_operand {
    ($($operand:ty),* $(,)?) => {
        $(impl Operand for $operand {})*
    };
}

impl_operand!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
    String, Ordering, Duration,
);

impl Operand for &str {}

impl<T: Operand> Operand for &T {}

impl<T: Operand> Operand for &[T] {}

impl<T: Operand, const N: usize> Operand for [T; N] {}

impl<T: Operand> Operand for Option<T> {}

impl<T: Operand, E: Operand> Operand for Result<T, E> {}

impl<T: Operand> Operand for Vec<T> {}

impl<T: Operand> Operand for Box<T> {}

impl<T: Operand> Operand for Rc<T> {}

impl<T: Operand> Operand for Arc<T> {}

macro_rules! impl_operand_for_tuple {
    ($($element:ident),+) => {
        impl<$($element: Operand),+> Operand for ($($element,)+) {}
    };
}

impl_operand_for_tuple!(A);
impl_operand_for_tuple!(A, B);
impl_operand_for_tuple!(A, B, C);
impl_operand_for_tuple!(A, B, C, D);
impl_operand_for_tuple!(A, B, C, D, E);
impl_operand_for_tuple!(A, B, C, D, E, F);
impl_operand_for_tuple!(A, B, C, D, E, F, G);
impl_operand_for_tuple!(A, B, C, D, E, F, G, H);
impl_operand_for_tuple!(A, B, C, D, E, F, G, H, I);
impl_operand_for_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_operand_for_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_operand_for_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

/// Type-level classification: is `Self` a wrapped callable?
///
/// # Examples
///
/// ```
/// use placeholder::{Composability, Identity, Placeable};
///
/// assert!(<Placeable<Identity> as Composability>::IS_COMPOSABLE);
/// assert!(!<i32 as Composability>::IS_COMPOSABLE);
/// ```
pub trait Composability {
    /// `true` for [`Composable`] types, `false` for [`Operand`] types.
    const IS_COMPOSABLE: bool;
}

impl<E> Composability for Placeable<E> {
    const IS_COMPOSABLE: bool = true;
}

impl<E> Composability for &Placeable<E> {
    const IS_COMPOSABLE: bool = true;
}

impl<T: Operand> Composability for T {
    const IS_COMPOSABLE: bool = false;
}

/// Returns whether `T` is a wrapped callable, evaluated at compile time.
///
/// # Examples
///
/// ```
/// use placeholder::{Identity, Placeable, is_composable};
///
/// const PLACEHOLDER: bool = is_composable::<Placeable<Identity>>();
/// const BORROWED: bool = is_composable::<&Placeable<Identity>>();
/// const NUMBER: bool = is_composable::<u64>();
///
/// assert!(PLACEHOLDER);
/// assert!(BORROWED);
/// assert!(!NUMBER);
/// ```
#[inline]
#[must_use]
pub const fn is_composable<T: Composability>() -> bool {
    T::IS_COMPOSABLE
}

/// A plain operand placed on the left of a composable.
///
/// Needed for operators Rust cannot overload (`==`, `<`, `&&`, ...) and for
/// left operands that are not primitive numbers.
///
/// # Examples
///
/// ```
/// use placeholder::{__, value};
///
/// let is_55 = value(55).equals(__);
/// assert!(is_55.call(55));
/// assert!(!is_55.call(66));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Value<T>(pub T);

impl<T> Value<T> {
    /// Wraps a plain operand.
    #[inline]
    pub const fn new(operand: T) -> Self {
        Self(operand)
    }

    /// Consumes the wrapper and returns the operand.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Value<T> {
    fn from(operand: T) -> Self {
        Self::new(operand)
    }
}

/// Wraps a plain operand for use on the left of a composable.
///
/// Shorthand for [`Value::new`].
#[inline]
pub const fn value<T>(operand: T) -> Value<T> {
    Value(operand)
}
