//! Composition of placeholder expressions.
//!
//! Every builder here consumes a composable and returns a new
//! [`Placeable`] wrapping one of three node types:
//!
//! - [`Unary`]: `op(inner(x))`
//! - [`BindRight`]: `op(inner(x), right)`, the plain operand on the right
//! - [`BindLeft`]: `op(left, inner(x))`, the plain operand on the left
//!
//! Plain operands are captured by value and cloned on each invocation, so a
//! composed callable can be called repeatedly. Nothing is evaluated while
//! building.
//!
//! # Operator surface
//!
//! Operators that Rust lets user code overload are provided through
//! `std::ops` (see the impls on [`Placeable`] and the primitive types):
//!
//! ```
//! use placeholder::__;
//!
//! assert_eq!((__ + 1).call(14), 15);
//! assert_eq!((10 + __).call(13), 23);
//! assert_eq!((5 % __).call(3), 2);
//! assert_eq!((-__).call(42), -42);
//! assert_eq!((!__).call(50), !50);
//! ```
//!
//! The rest are named builder methods:
//!
//! ```
//! use placeholder::{__, value};
//!
//! let nested = __.equals(10).equals(false).equals(true);
//! assert!(nested.call(12));
//! assert!(!nested.call(10));
//!
//! let is_24 = value(24).equals(__);
//! assert!(is_24.call(24));
//!
//! let mut counter = 5;
//! assert_eq!(__.post_increment().call(&mut counter), 5);
//! assert_eq!(counter, 6);
//! ```
//!
//! # Chaining
//!
//! The result of every builder is itself composable, so builders chain
//! left-to-right exactly like the written-out operators:
//!
//! ```text
//! __.equals(10).equals(false)  ==  |x| (x == 10) == false
//! !!__                          ==  |x| !!x
//! ```

mod overload;

use crate::operation::{
    AddressOf, And, Apply, BinaryOperation, Dereference, Equal, Greater, GreaterEqual, Less,
    LessEqual, Member, NotEqual, Or, Plus, PostDecrement, PostIncrement, PreDecrement,
    PreIncrement, Sequence, UnaryOperation,
};
use crate::placeable::{Expression, Placeable};
use crate::predicate::{Composable, Operand, Value};

/// A unary operation applied to the result of an inner expression.
#[derive(Clone, Copy)]
pub struct Unary<E, Op> {
    expression: E,
    operation: Op,
}

impl<A, E, Op> Expression<A> for Unary<E, Op>
where
    E: Expression<A>,
    Op: UnaryOperation<E::Output>,
{
    type Output = Op::Output;

    #[inline]
    fn evaluate(&self, argument: A) -> Self::Output {
        self.operation.apply(self.expression.evaluate(argument))
    }
}

/// A binary operation whose left side is the inner expression and whose
/// right side is a captured plain operand.
#[derive(Clone, Copy)]
pub struct BindRight<E, R, Op> {
    expression: E,
    right: R,
    operation: Op,
}

impl<A, E, R, Op> Expression<A> for BindRight<E, R, Op>
where
    E: Expression<A>,
    R: Clone,
    Op: BinaryOperation<E::Output, R>,
{
    type Output = Op::Output;

    #[inline]
    fn evaluate(&self, argument: A) -> Self::Output {
        let left = self.expression.evaluate(argument);
        self.operation.apply(left, self.right.clone())
    }
}

/// A binary operation whose left side is a captured plain operand and whose
/// right side is the inner expression.
#[derive(Clone, Copy)]
pub struct BindLeft<L, E, Op> {
    left: L,
    expression: E,
    operation: Op,
}

impl<A, L, E, Op> Expression<A> for BindLeft<L, E, Op>
where
    E: Expression<A>,
    L: Clone,
    Op: BinaryOperation<L, E::Output>,
{
    type Output = Op::Output;

    #[inline]
    fn evaluate(&self, argument: A) -> Self::Output {
        let right = self.expression.evaluate(argument);
        self.operation.apply(self.left.clone(), right)
    }
}

impl<E> Placeable<E> {
    /// Composes a unary operation after this expression: `op(self(x))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use placeholder::__;
    /// use placeholder::operation::Neg;
    ///
    /// assert_eq!(__.unary(Neg).call(8), -8);
    /// ```
    #[inline]
    pub fn unary<Op>(self, operation: Op) -> Placeable<Unary<E, Op>> {
        Placeable::new(Unary {
            expression: self.into_inner(),
            operation,
        })
    }

    /// Composes an arbitrary function after this expression: `f(self(x))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use placeholder::__;
    ///
    /// let parse = __.map(|text: &str| text.parse::<i32>());
    /// assert_eq!(parse.call("12"), Ok(12));
    /// assert!(parse.call("twelve").is_err());
    /// ```
    #[inline]
    pub fn map<F>(self, function: F) -> Placeable<Unary<E, Apply<F>>> {
        self.unary(Apply::new(function))
    }

    /// Unary plus, see [`UnaryPlus`](crate::UnaryPlus).
    #[inline]
    pub fn plus(self) -> Placeable<Unary<E, Plus>> {
        self.unary(Plus)
    }

    /// Takes the address of the borrowed result.
    ///
    /// # Examples
    ///
    /// ```
    /// use placeholder::__;
    ///
    /// let number = 10;
    /// assert!(std::ptr::eq(__.address_of().call(&number), &number));
    /// ```
    #[inline]
    pub fn address_of(self) -> Placeable<Unary<E, AddressOf>> {
        self.unary(AddressOf)
    }

    /// Dereferences the borrowed, pointer-like result.
    ///
    /// Given `&mut P` the composed callable yields `&mut P::Target`, so it
    /// can be assigned through.
    ///
    /// # Examples
    ///
    /// ```
    /// use placeholder::__;
    ///
    /// let mut number = 5;
    /// let mut pointer = &mut number;
    /// let pointee = __.dereference();
    ///
    /// assert_eq!(*pointee.call(&pointer), 5);
    /// *pointee.call(&mut pointer) = 3;
    /// assert_eq!(number, 3);
    /// ```
    #[inline]
    pub fn dereference(self) -> Placeable<Unary<E, Dereference>> {
        self.unary(Dereference)
    }

    /// Prefix increment: steps the borrowed result and yields the borrow.
    #[inline]
    pub fn pre_increment(self) -> Placeable<Unary<E, PreIncrement>> {
        self.unary(PreIncrement)
    }

    /// Prefix decrement: steps the borrowed result and yields the borrow.
    #[inline]
    pub fn pre_decrement(self) -> Placeable<Unary<E, PreDecrement>> {
        self.unary(PreDecrement)
    }

    /// Postfix increment: steps the borrowed result and yields its previous
    /// value.
    #[inline]
    pub fn post_increment(self) -> Placeable<Unary<E, PostIncrement>> {
        self.unary(PostIncrement)
    }

    /// Postfix decrement: steps the borrowed result and yields its previous
    /// value.
    #[inline]
    pub fn post_decrement(self) -> Placeable<Unary<E, PostDecrement>> {
        self.unary(PostDecrement)
    }

    /// Composes a binary operation with a plain right operand:
    /// `op(self(x), right)`.
    #[inline]
    pub fn bind_right<R: Operand, Op>(
        self,
        right: R,
        operation: Op,
    ) -> Placeable<BindRight<E, R, Op>> {
        Placeable::new(BindRight {
            expression: self.into_inner(),
            right,
            operation,
        })
    }

    /// Composes a binary operation with a plain left operand:
    /// `op(left, self(x))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use placeholder::__;
    /// use placeholder::operation::Sub;
    ///
    /// assert_eq!(__.bind_left(10, Sub).call(3), 7);
    /// ```
    #[inline]
    pub fn bind_left<L: Operand, Op>(
        self,
        left: L,
        operation: Op,
    ) -> Placeable<BindLeft<L, E, Op>> {
        Placeable::new(BindLeft {
            left,
            expression: self.into_inner(),
            operation,
        })
    }

    /// Applies `accessor` to the result: `accessor(self(x))`.
    ///
    /// The accessor plays the role of a member pointer and must be a plain
    /// function. A composable is not a function, so it is rejected here:
    ///
    /// ```compile_fail
    /// use placeholder::__;
    ///
    /// let both = __.member(__ + 1);
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use placeholder::__;
    ///
    /// struct Point {
    ///     x: i32,
    ///     y: i32,
    /// }
    ///
    /// let x_of = __.member(|point: &Point| point.x);
    /// assert_eq!(x_of.call(&Point { x: 3, y: 4 }), 3);
    /// ```
    #[inline]
    pub fn member<F, L, O>(self, accessor: F) -> Placeable<BindRight<E, F, Member>>
    where
        F: Fn(L) -> O,
    {
        Placeable::new(BindRight {
            expression: self.into_inner(),
            right: accessor,
            operation: Member,
        })
    }
}

macro_rules! named_binary {
    ($($(#[$meta:meta])* $method:ident => $operation:ident),* $(,)?) => {
        impl<E> Placeable<E> {
            $(
                $(#[$meta])*
                #[inline]
                pub fn $method<R: Operand>(
                    self,
                    right: R,
                ) -> Placeable<BindRight<E, R, $operation>> {
                    self.bind_right(right, $operation)
                }
            )*
        }

        impl<T: Operand> Value<T> {
            $(
                $(#[$meta])*
                #[inline]
                pub fn $method<C: Composable>(
                    self,
                    right: C,
                ) -> Placeable<BindLeft<T, C::Expression, $operation>> {
                    right.into_placeable().bind_left(self.into_inner(), $operation)
                }
            )*
        }
    };
}

named_binary!(
    /// Equality, `left == right`.
    equals => Equal,
    /// Inequality, `left != right`.
    not_equals => NotEqual,
    /// `left < right`.
    less_than => Less,
    /// `left <= right`.
    less_equal => LessEqual,
    /// `left > right`.
    greater_than => Greater,
    /// `left >= right`.
    greater_equal => GreaterEqual,
    /// Logical and over `bool` operands.
    and => And,
    /// Logical or over `bool` operands.
    or => Or,
    /// Sequencing: evaluates both sides and yields the right one.
    sequence => Sequence,
);

impl<T: Operand> Value<T> {
    /// Member access with a composable accessor: `accessor(x)(object)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use placeholder::{__, value};
    ///
    /// let apply_to_seven = value(7).member(__);
    /// assert_eq!(apply_to_seven.call(|n: i32| n * 6), 42);
    /// ```
    #[inline]
    pub fn member<C: Composable>(
        self,
        accessor: C,
    ) -> Placeable<BindLeft<T, C::Expression, Member>> {
        accessor.into_placeable().bind_left(self.into_inner(), Member)
    }
}

#[cfg(test)]
mod tests {
    use crate::placeable::{__, Placeable};
    use crate::predicate::value;

    #[test]
    fn test_unary_chain_composes_twice() {
        let double_negation = !!__;
        assert!(double_negation.call(true));
        assert!(!double_negation.call(false));
    }

    #[test]
    fn test_bind_right_clones_operand_per_call() {
        let suffixed = __.bind_right(
            String::from("!"),
            crate::operation::Apply::new(|text: &str, suffix: String| format!("{text}{suffix}")),
        );
        assert_eq!(suffixed.call("hi"), "hi!");
        assert_eq!(suffixed.call("bye"), "bye!");
    }

    #[test]
    fn test_sequence_discards_left() {
        assert_eq!(__.sequence("right").call(1), "right");
        assert_eq!(value("left").sequence(__).call(2), 2);
    }

    #[test]
    fn test_logical_operators() {
        assert!(__.and(true).call(true));
        assert!(!__.and(true).call(false));
        assert!(value(false).or(__).call(true));
        assert!(!value(false).or(__).call(false));
    }

    #[test]
    fn test_relational_right_forms() {
        assert!(value(3).less_than(__).call(4));
        assert!(value(3).greater_equal(__).call(3));
        assert!(!value(3).not_equals(__).call(3));
    }

    #[test]
    fn test_composition_over_wrapped_function() {
        let length = Placeable::from_fn(|text: &str| text.chars().count());
        let is_long = (length * 2).greater_than(6);
        assert!(is_long.call("four"));
        assert!(!is_long.call("abc"));
    }
}
