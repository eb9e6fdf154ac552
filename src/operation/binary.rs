//! Binary operation markers.
//!
//! The arithmetic, bitwise and shift markers forward to the matching
//! `std::ops` trait. Comparison and logical markers stand in for operators
//! Rust does not let user code overload (`==`, `<`, `&&`, ...), and
//! [`Sequence`] and [`Member`] model sequencing and member access.

use std::ops;

use super::BinaryOperation;

macro_rules! forward_to_std_ops {
    ($($(#[$meta:meta])* $marker:ident => $trait:ident :: $method:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $marker;

            impl<L, R> BinaryOperation<L, R> for $marker
            where
                L: ops::$trait<R>,
            {
                type Output = L::Output;

                #[inline]
                fn apply(&self, left: L, right: R) -> Self::Output {
                    ops::$trait::$method(left, right)
                }
            }
        )*
    };
}

forward_to_std_ops!(
    /// Addition, `left + right`.
    Add => Add::add,
    /// Subtraction, `left - right`.
    Sub => Sub::sub,
    /// Multiplication, `left * right`.
    Mul => Mul::mul,
    /// Division, `left / right`.
    Div => Div::div,
    /// Remainder, `left % right`.
    Rem => Rem::rem,
    /// Bitwise and, `left & right`.
    BitAnd => BitAnd::bitand,
    /// Bitwise or, `left | right`.
    BitOr => BitOr::bitor,
    /// Bitwise exclusive or, `left ^ right`.
    BitXor => BitXor::bitxor,
    /// Left shift, `left << right`.
    Shl => Shl::shl,
    /// Right shift, `left >> right`.
    Shr => Shr::shr,
);

macro_rules! compare {
    ($($(#[$meta:meta])* $marker:ident => $bound:ident :: $method:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $marker;

            impl<L, R> BinaryOperation<L, R> for $marker
            where
                L: $bound<R>,
            {
                type Output = bool;

                #[inline]
                fn apply(&self, left: L, right: R) -> bool {
                    left.$method(&right)
                }
            }
        )*
    };
}

compare!(
    /// Equality, `left == right`.
    Equal => PartialEq::eq,
    /// Inequality, `left != right`.
    NotEqual => PartialEq::ne,
    /// `left < right`.
    Less => PartialOrd::lt,
    /// `left <= right`.
    LessEqual => PartialOrd::le,
    /// `left > right`.
    Greater => PartialOrd::gt,
    /// `left >= right`.
    GreaterEqual => PartialOrd::ge,
);

/// Logical and, `left && right`.
///
/// Both operands are already evaluated when the operation runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct And;

impl BinaryOperation<bool, bool> for And {
    type Output = bool;

    #[inline]
    fn apply(&self, left: bool, right: bool) -> bool {
        left && right
    }
}

/// Logical or, `left || right`.
///
/// Both operands are already evaluated when the operation runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Or;

impl BinaryOperation<bool, bool> for Or {
    type Output = bool;

    #[inline]
    fn apply(&self, left: bool, right: bool) -> bool {
        left || right
    }
}

/// Sequencing: evaluates both sides, discards the left and yields the right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sequence;

impl<L, R> BinaryOperation<L, R> for Sequence {
    type Output = R;

    #[inline]
    fn apply(&self, left: L, right: R) -> R {
        drop(left);
        right
    }
}

/// Member access: applies an accessor (right) to an object (left).
///
/// The accessor is any `Fn(L) -> O`, typically a field projection such as
/// `|point: &Point| point.x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Member;

impl<L, R, O> BinaryOperation<L, R> for Member
where
    R: Fn(L) -> O,
{
    type Output = O;

    #[inline]
    fn apply(&self, left: L, right: R) -> O {
        right(left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forwarded_arithmetic() {
        assert_eq!(Add.apply(2, 3), 5);
        assert_eq!(Rem.apply(7, 2), 1);
        assert_eq!(Shl.apply(1_u32, 4_u32), 16);
    }

    #[test]
    fn test_comparisons_accept_mixed_types() {
        assert!(Equal.apply(String::from("abc"), "abc"));
        assert!(LessEqual.apply(3, 3));
        assert!(!Greater.apply(1.0, 2.0));
    }

    #[test]
    fn test_sequence_yields_right() {
        assert_eq!(Sequence.apply(String::from("discarded"), 9), 9);
    }

    #[test]
    fn test_member_applies_accessor() {
        let second = |pair: (i32, &'static str)| pair.1;
        assert_eq!(Member.apply((1, "one"), second), "one");
    }
}
