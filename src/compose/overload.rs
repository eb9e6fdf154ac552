//! `std::ops` overloads for placeholder expressions.
//!
//! Three shapes are covered for every overloadable binary operator:
//!
//! - composable on the left, [`Operand`] on the right: `__ + 1`
//! - [`Value`] on the left, composable on the right: `value(k) + __`
//! - primitive on the left, composable on the right: `10 + __`
//!
//! The primitive-left impls exist for `i32`, `f64` and `bool` only. An
//! unsuffixed literal must resolve to a single impl, so adding another
//! integer or float type would make `10 + __` ambiguous. Other left operands
//! go through [`value`](crate::value).
//!
//! The unary `!` and `-` are provided for owned and borrowed composables.

use std::ops;

use super::{BindLeft, BindRight, Unary};
use crate::operation;
use crate::placeable::Placeable;
use crate::predicate::{Composable, Operand, Value};

macro_rules! overload_unary {
    ($($trait:ident :: $method:ident => $operation:ident),* $(,)?) => {
        $(
            impl<E> ops::$trait for Placeable<E> {
                type Output = Placeable<Unary<E, operation::$operation>>;

                #[inline]
                fn $method(self) -> Self::Output {
                    self.unary(operation::$operation)
                }
            }

            impl<E: Clone> ops::$trait for &Placeable<E> {
                type Output = Placeable<Unary<E, operation::$operation>>;

                #[inline]
                fn $method(self) -> Self::Output {
                    self.clone().unary(operation::$operation)
                }
            }
        )*
    };
}

overload_unary!(
    Not::not => Not,
    Neg::neg => Neg,
);

macro_rules! overload_binary {
    ($($trait:ident :: $method:ident => $operation:ident),* $(,)?) => {
        $(
            impl<E, R: Operand> ops::$trait<R> for Placeable<E> {
                type Output = Placeable<BindRight<E, R, operation::$operation>>;

                #[inline]
                fn $method(self, right: R) -> Self::Output {
                    self.bind_right(right, operation::$operation)
                }
            }

            impl<E: Clone, R: Operand> ops::$trait<R> for &Placeable<E> {
                type Output = Placeable<BindRight<E, R, operation::$operation>>;

                #[inline]
                fn $method(self, right: R) -> Self::Output {
                    self.clone().bind_right(right, operation::$operation)
                }
            }

            impl<T: Operand, C: Composable> ops::$trait<C> for Value<T> {
                type Output = Placeable<BindLeft<T, C::Expression, operation::$operation>>;

                #[inline]
                fn $method(self, right: C) -> Self::Output {
                    right.into_placeable().bind_left(self.into_inner(), operation::$operation)
                }
            }
        )*
    };
}

macro_rules! overload_primitive_left {
    (@operators $primitive:ty; $($trait:ident :: $method:ident => $operation:ident),* $(,)?) => {
        $(
            impl<E> ops::$trait<Placeable<E>> for $primitive {
                type Output = Placeable<BindLeft<$primitive, E, operation::$operation>>;

                #[inline]
                fn $method(self, right: Placeable<E>) -> Self::Output {
                    right.bind_left(self, operation::$operation)
                }
            }

            impl<E: Clone> ops::$trait<&Placeable<E>> for $primitive {
                type Output = Placeable<BindLeft<$primitive, E, operation::$operation>>;

                #[inline]
                fn $method(self, right: &Placeable<E>) -> Self::Output {
                    right.clone().bind_left(self, operation::$operation)
                }
            }
        )*
    };
    ($($primitive:ty),* $(,)?) => {
        $(
            overload_primitive_left!(@operators $primitive;
                Add::add => Add,
                Sub::sub => Sub,
                Mul::mul => Mul,
                Div::div => Div,
                Rem::rem => Rem,
                BitAnd::bitand => BitAnd,
                BitOr::bitor => BitOr,
                BitXor::bitxor => BitXor,
                Shl::shl => Shl,
                Shr::shr => Shr,
            );
        )*
    };
}

overload_binary!(
    Add::add => Add,
    Sub::sub => Sub,
    Mul::mul => Mul,
    Div::div => Div,
    Rem::rem => Rem,
    BitAnd::bitand => BitAnd,
    BitOr::bitor => BitOr,
    BitXor::bitxor => BitXor,
    Shl::shl => Shl,
    Shr::shr => Shr,
);

overload_primitive_left!(i32, f64, bool);
