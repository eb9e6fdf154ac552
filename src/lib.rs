//! # placeholder
//!
//! Lazy function composition through a placeholder value.
//!
//! ## Overview
//!
//! [`__`] stands for "the argument this function will eventually receive".
//! Applying operators to it builds a callable instead of computing a value:
//!
//! ```rust
//! use placeholder::__;
//!
//! let increment = __ + 1;
//! assert_eq!(increment.call(14), 15);
//!
//! let is_even = (__ % 2).equals(0);
//! assert!(is_even.call(8));
//! assert!(!is_even.call(11));
//! ```
//!
//! The crate is organised as:
//!
//! - **Wrapped callables**: [`Placeable`], [`Expression`], [`Identity`] and the
//!   placeholder constant [`__`]
//! - **Composability predicate**: [`Composable`], [`Operand`],
//!   [`Composability`], [`is_composable`] and the left-operand wrapper
//!   [`Value`]
//! - **Operations**: unary and binary operation markers in [`operation`]
//! - **Composition**: node types and builders in [`compose`], with
//!   `std::ops` overloads for the operators Rust lets user code overload
//!
//! ## Exactly one composable operand
//!
//! A binary composition needs exactly one composable side. Combining two
//! placeholder expressions does not compile:
//!
//! ```compile_fail
//! use placeholder::__;
//!
//! let ambiguous = (__ + 1) * (__ - 1);
//! ```
//!
//! ## Operators Rust cannot overload
//!
//! Comparisons, `&&`, `||`, the comma operator, unary plus, increments and
//! member access are named builder methods:
//!
//! ```rust
//! use placeholder::{__, value};
//!
//! let in_range = __.greater_equal(10).and(true);
//! assert!(in_range.call(12));
//!
//! let from_left = value(55).not_equals(__);
//! assert!(from_left.call(66));
//! ```
//!
//! ## Laws
//!
//! - **Identity**: `__.call(v) == v`
//! - **Unary composition**: `(!__).call(v) == !v`
//! - **Binary symmetry**: `(__ + k).call(v) == v + k` and
//!   `(k + __).call(v) == k + v`
//! - **Associativity**: chained builders evaluate left-to-right like the
//!   fully parenthesized expression

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use placeholder::prelude::*;
///
/// assert_eq!((__ * 2).call(21), 42);
/// ```
pub mod prelude {
    pub use crate::compose::{BindLeft, BindRight, Unary};
    pub use crate::operation::{Apply, BinaryOperation, Step, UnaryOperation, UnaryPlus};
    pub use crate::placeable::{__, Expression, FromFn, Identity, Placeable};
    pub use crate::predicate::{Composability, Composable, Operand, Value, is_composable, value};
}

pub mod compose;
pub mod operation;
mod placeable;
mod predicate;

pub use operation::{Apply, BinaryOperation, Step, UnaryOperation, UnaryPlus};
pub use placeable::{__, Expression, FromFn, Identity, Placeable};
pub use predicate::{Composability, Composable, Operand, Value, is_composable, value};
